//! Atomic output writes.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::spec::FsError;

const C_PREFIX_TEMP: &str = "tmp_excel_";
const C_SUFFIX_TEMP: &str = ".xlsx";

/// Write `bytes` to `path_dst`, replacing any existing file.
///
/// Bytes go to a temp file in the system temp directory first and are then
/// renamed into place. When the rename fails (e.g. across filesystems) the
/// temp file is copied over and removed. Missing parent directories are
/// created.
pub fn persist_bytes_atomic(bytes: &[u8], path_dst: &Path) -> Result<(), FsError> {
    if let Some(path_parent) = path_dst.parent()
        && !path_parent.as_os_str().is_empty()
    {
        fs::create_dir_all(path_parent)
            .map_err(|e| FsError::io("create directory", path_parent, e))?;
    }

    let mut file_tmp = tempfile::Builder::new()
        .prefix(C_PREFIX_TEMP)
        .suffix(C_SUFFIX_TEMP)
        .tempfile()
        .map_err(|e| FsError::io("create temp file for", path_dst, e))?;
    file_tmp
        .write_all(bytes)
        .map_err(|e| FsError::io("write temp file for", path_dst, e))?;

    match file_tmp.persist(path_dst) {
        Ok(_) => {}
        Err(err) => {
            tracing::warn!(
                path = %path_dst.display(),
                error = %err.error,
                "rename failed, falling back to copy"
            );
            let file_tmp = err.file;
            fs::copy(file_tmp.path(), path_dst).map_err(|e| FsError::io("copy to", path_dst, e))?;
            file_tmp
                .close()
                .map_err(|e| FsError::io("remove temp file for", path_dst, e))?;
        }
    }

    tracing::debug!(path = %path_dst.display(), n_bytes = bytes.len(), "file persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_persist_bytes_atomic_creates_parents_and_overwrites() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_dst = tmp.path().join("out/nested/report.xlsx");

        persist_bytes_atomic(b"first", &path_dst).expect("persist");
        persist_bytes_atomic(b"second", &path_dst).expect("persist");

        assert_eq!(fs::read(&path_dst).expect("read"), b"second");
    }

    #[test]
    fn test_persist_bytes_atomic_leaves_no_temp_file_in_destination() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_dst = tmp.path().join("report.xlsx");

        persist_bytes_atomic(b"PK", &path_dst).expect("persist");

        let l_names: Vec<String> = fs::read_dir(tmp.path())
            .expect("list")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(l_names, vec!["report.xlsx"]);
    }

    #[test]
    fn test_persist_bytes_atomic_rejects_directory_target() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path_dst = tmp.path().join("taken");
        fs::create_dir_all(path_dst.join("child")).expect("mkdir");

        assert!(persist_bytes_atomic(b"x", &path_dst).is_err());
    }
}
