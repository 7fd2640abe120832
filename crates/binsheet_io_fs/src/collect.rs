//! Input resolution and directory listing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::spec::{EnumInputSource, FsError, SpecCollectOptions};
use crate::util::TypeFilePattern;

/// Classify `path` as a single file or a directory.
pub fn resolve_input_source(path: &Path) -> Result<EnumInputSource, FsError> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FsError::io("inspect", path, e),
    })?;
    if meta.is_dir() {
        Ok(EnumInputSource::Directory(path.to_path_buf()))
    } else {
        Ok(EnumInputSource::SingleFile(path.to_path_buf()))
    }
}

/// Files to process for `source`, sorted by name.
///
/// A single file is returned as-is, unfiltered. A directory yields its direct
/// non-directory children whose base name matches `options`.
pub fn collect_input_files(
    source: &EnumInputSource,
    options: &SpecCollectOptions,
) -> Result<Vec<PathBuf>, FsError> {
    let path_dir = match source {
        EnumInputSource::SingleFile(path) => return Ok(vec![path.clone()]),
        EnumInputSource::Directory(path) => path,
    };
    let pattern = TypeFilePattern::compile(&options.pattern, options.rule_pattern)?;

    let mut l_paths = Vec::new();
    let read_dir = fs::read_dir(path_dir).map_err(|e| FsError::io("list", path_dir, e))?;
    for entry in read_dir {
        let entry = entry.map_err(|e| FsError::io("list", path_dir, e))?;
        let path_entry = entry.path();
        if path_entry.is_dir() {
            continue;
        }
        let c_name = entry.file_name().to_string_lossy().into_owned();
        if pattern.is_match(&c_name) {
            l_paths.push(path_entry);
        }
    }
    l_paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        dir = %path_dir.display(),
        pattern = %options.pattern,
        n_files = l_paths.len(),
        "input files collected"
    );
    Ok(l_paths)
}

/// Whole file as text; invalid UTF-8 sequences are replaced.
pub fn read_text_file(path: &Path) -> Result<String, FsError> {
    let v_bytes = fs::read(path).map_err(|e| FsError::io("read", path, e))?;
    Ok(String::from_utf8_lossy(&v_bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::spec::EnumFilePatternMode;

    fn write_text(path: &Path, txt: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, txt).expect("write text");
    }

    fn derive_names(l_paths: &[PathBuf]) -> Vec<String> {
        l_paths
            .iter()
            .map(|p| p.file_name().expect("name").to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_resolve_input_source_kinds() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_file = tmp.path().join("w1.txt");
        write_text(&path_file, "RowData: 1\n");

        assert_eq!(
            resolve_input_source(tmp.path()).expect("dir"),
            EnumInputSource::Directory(tmp.path().to_path_buf())
        );
        assert_eq!(
            resolve_input_source(&path_file).expect("file"),
            EnumInputSource::SingleFile(path_file.clone())
        );
        assert!(matches!(
            resolve_input_source(&tmp.path().join("missing")),
            Err(FsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_collect_input_files_filters_and_sorts() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_text(&tmp.path().join("b.txt"), "");
        write_text(&tmp.path().join("A.TXT"), "");
        write_text(&tmp.path().join("c.log"), "");
        write_text(&tmp.path().join("nested.txt/inner.txt"), "");

        let source = EnumInputSource::Directory(tmp.path().to_path_buf());
        let l_paths = collect_input_files(&source, &SpecCollectOptions::default()).expect("list");

        assert_eq!(derive_names(&l_paths), vec!["A.TXT", "b.txt"]);
    }

    #[test]
    fn test_collect_input_files_regex_mode() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_text(&tmp.path().join("w1.log"), "");
        write_text(&tmp.path().join("w2.txt"), "");

        let source = EnumInputSource::Directory(tmp.path().to_path_buf());
        let options = SpecCollectOptions {
            pattern: r"\.log$".to_string(),
            rule_pattern: EnumFilePatternMode::Regex,
        };
        let l_paths = collect_input_files(&source, &options).expect("list");

        assert_eq!(derive_names(&l_paths), vec!["w1.log"]);
    }

    #[test]
    fn test_collect_input_files_single_file_is_unfiltered() {
        let source = EnumInputSource::SingleFile(PathBuf::from("/x/readme.md"));
        let l_paths = collect_input_files(&source, &SpecCollectOptions::default()).expect("list");

        assert_eq!(l_paths, vec![PathBuf::from("/x/readme.md")]);
    }

    #[test]
    fn test_read_text_file_is_lossy() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("bad.txt");
        fs::write(&path, b"LOT: A\xff\n").expect("write");

        assert_eq!(read_text_file(&path).expect("read"), "LOT: A\u{fffd}\n");
        assert!(matches!(
            read_text_file(&tmp.path().join("none.txt")),
            Err(FsError::Io { op: "read", .. })
        ));
    }
}
