use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::spec::{EnumFilePatternMode, EnumInputSource, FsError};

const C_SUFFIX_RESULT: &str = "_result.xlsx";
const C_EXT_XLSX: &str = ".xlsx";

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeFilePattern {
    Literal(String),
    Glob(GlobMatcher),
    Regex(Regex),
}

impl TypeFilePattern {
    pub(crate) fn compile(pattern: &str, rule_pattern: EnumFilePatternMode) -> Result<Self, FsError> {
        match rule_pattern {
            EnumFilePatternMode::Literal => Ok(Self::Literal(pattern.to_lowercase())),
            EnumFilePatternMode::Glob => {
                let matcher = GlobBuilder::new(pattern)
                    .case_insensitive(true)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| FsError::InvalidPattern(format!("{pattern}: {e}")))?
                    .compile_matcher();
                Ok(Self::Glob(matcher))
            }
            EnumFilePatternMode::Regex => {
                let regex = Regex::new(pattern)
                    .map_err(|e| FsError::InvalidPattern(format!("{pattern}: {e}")))?;
                Ok(Self::Regex(regex))
            }
        }
    }

    pub(crate) fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Literal(v) => name.to_lowercase().contains(v.as_str()),
            Self::Glob(v) => v.is_match(name),
            Self::Regex(v) => v.is_match(name),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OutputNaming

/// Base name of `path`, lossy for non-UTF-8 names.
pub fn derive_source_name(path: &Path) -> String {
    path.file_name()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Directory that receives the reports of `source`.
///
/// An explicit directory wins; otherwise a single file writes next to itself
/// and a directory writes into itself.
pub fn derive_output_dir(source: &EnumInputSource, path_dir_out: Option<&Path>) -> PathBuf {
    if let Some(path) = path_dir_out {
        return path.to_path_buf();
    }
    match source {
        EnumInputSource::Directory(path) => path.clone(),
        EnumInputSource::SingleFile(path) => match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

/// Per-file report name: `{stem}_result.xlsx`.
pub fn derive_result_file_name(path_input: &Path) -> String {
    let c_stem = path_input
        .file_stem()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{c_stem}{C_SUFFIX_RESULT}")
}

/// Trim `name` and append `.xlsx` unless it already ends with it.
pub fn normalize_summary_file_name(name: &str) -> Result<String, FsError> {
    let c_name = name.trim();
    if c_name.is_empty() {
        return Err(FsError::InvalidName(name.to_string()));
    }
    if c_name.to_ascii_lowercase().ends_with(C_EXT_XLSX) {
        return Ok(c_name.to_string());
    }
    Ok(format!("{c_name}{C_EXT_XLSX}"))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pattern_glob_is_case_insensitive() {
        let pattern = TypeFilePattern::compile("*.txt", EnumFilePatternMode::Glob).expect("glob");

        assert!(pattern.is_match("wafer.txt"));
        assert!(pattern.is_match("WAFER.TXT"));
        assert!(!pattern.is_match("wafer.txt.bak"));
        assert!(!pattern.is_match("wafer.log"));
    }

    #[test]
    fn test_pattern_regex_and_literal() {
        let regex = TypeFilePattern::compile(r"^w\d+\.log$", EnumFilePatternMode::Regex)
            .expect("regex");
        let literal = TypeFilePattern::compile("LOT", EnumFilePatternMode::Literal).expect("lit");

        assert!(regex.is_match("w12.log"));
        assert!(!regex.is_match("x12.log"));
        assert!(literal.is_match("a_lot_b.txt"));
        assert!(!literal.is_match("wafer.txt"));
    }

    #[test]
    fn test_pattern_invalid_is_rejected() {
        assert!(matches!(
            TypeFilePattern::compile("(", EnumFilePatternMode::Regex),
            Err(FsError::InvalidPattern(_))
        ));
        assert!(matches!(
            TypeFilePattern::compile("[a", EnumFilePatternMode::Glob),
            Err(FsError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_derive_result_file_name() {
        assert_eq!(derive_result_file_name(Path::new("/d/wafer01.txt")), "wafer01_result.xlsx");
        assert_eq!(derive_result_file_name(Path::new("a.b.TXT")), "a.b_result.xlsx");
        assert_eq!(derive_result_file_name(Path::new("plain")), "plain_result.xlsx");
    }

    #[test]
    fn test_normalize_summary_file_name() {
        assert_eq!(normalize_summary_file_name(" lot42 ").expect("name"), "lot42.xlsx");
        assert_eq!(normalize_summary_file_name("lot42.XLSX").expect("name"), "lot42.XLSX");
        assert!(matches!(
            normalize_summary_file_name("   "),
            Err(FsError::InvalidName(_))
        ));
    }

    #[test]
    fn test_derive_output_dir() {
        let source_file = EnumInputSource::SingleFile(PathBuf::from("/logs/w1.txt"));
        let source_dir = EnumInputSource::Directory(PathBuf::from("/logs"));
        let source_bare = EnumInputSource::SingleFile(PathBuf::from("w1.txt"));

        assert_eq!(derive_output_dir(&source_file, None), PathBuf::from("/logs"));
        assert_eq!(derive_output_dir(&source_dir, None), PathBuf::from("/logs"));
        assert_eq!(derive_output_dir(&source_bare, None), PathBuf::from("."));
        assert_eq!(
            derive_output_dir(&source_dir, Some(Path::new("/out"))),
            PathBuf::from("/out")
        );
    }

    #[test]
    fn test_derive_source_name() {
        assert_eq!(derive_source_name(Path::new("/logs/w1.txt")), "w1.txt");
    }
}
