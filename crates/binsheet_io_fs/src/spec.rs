//! Input-source models, collect options and filesystem errors.

use std::io;
use std::path::{Path, PathBuf};

/// Default file-name filter for directory inputs.
pub const C_PATTERN_INPUT_DEFAULT: &str = "*.txt";

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Input path, resolved once per batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumInputSource {
    /// One log file.
    SingleFile(PathBuf),
    /// Directory whose matching files are processed.
    Directory(PathBuf),
}

impl EnumInputSource {
    /// Path the source was resolved from.
    pub fn path(&self) -> &Path {
        match self {
            Self::SingleFile(path) | Self::Directory(path) => path,
        }
    }
}

/// How the collect pattern is interpreted against file base names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumFilePatternMode {
    /// Shell-like wildcards, case-insensitive.
    #[default]
    Glob,
    /// Regular expression, searched anywhere in the name.
    Regex,
    /// Case-insensitive substring.
    Literal,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Options for `collect_input_files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCollectOptions {
    /// Pattern applied to file base names in directory inputs.
    pub pattern: String,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumFilePatternMode,
}

impl Default for SpecCollectOptions {
    fn default() -> Self {
        Self {
            pattern: C_PATTERN_INPUT_DEFAULT.to_string(),
            rule_pattern: EnumFilePatternMode::Glob,
        }
    }
}

/// One per-file failure recorded in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecBatchError {
    /// File the failure belongs to.
    pub path: PathBuf,
    /// User-facing error text.
    pub exception: String,
}

/// Filesystem failure.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Input path does not exist.
    #[error("input path not found: {}", path.display())]
    NotFound {
        /// Missing path.
        path: PathBuf,
    },
    /// Collect pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    /// Output file name rejected.
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
    /// Underlying IO failure.
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        /// Operation verb, e.g. `read`.
        op: &'static str,
        /// Path the operation targeted.
        path: PathBuf,
        /// IO error.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub(crate) fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
