//! Extraction models, modes and errors.

use std::collections::BTreeMap;

////////////////////////////////////////////////////////////////////////////////
// #region ExtractionModes

/// How `RowData:` tokens are interpreted.
///
/// The two modes disagree on non-numeric tokens such as `...`: the key scan
/// keeps them, the counting pass drops them. Both behaviors are relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRowDataMode {
    /// Every token except the placeholder is a key candidate.
    KeysOnly,
    /// Only all-digit tokens increment a per-key counter.
    Counting,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Records

/// Parsed content of one log file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogRecord {
    /// Base name of the file the record was read from.
    pub source_name: String,
    /// Lot identifier; empty when the log has no `LOT:` line.
    pub lot: String,
    /// Wafer identifier; empty when the log has no `WAFER:` line.
    pub wafer: String,
    /// Occurrence count per bin key, in ascending key order.
    pub counts: BTreeMap<String, u64>,
}

impl LogRecord {
    /// Return the record tagged with the file name it came from.
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Total number of counted tokens.
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Count for `key`, `0` when the bin never appeared.
    pub fn count_of(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// True when both lot and wafer identifiers are present.
    pub fn has_identity(&self) -> bool {
        !self.lot.is_empty() && !self.wafer.is_empty()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Extraction failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The text yielded no countable bin token.
    #[error("no data found")]
    NoData,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
