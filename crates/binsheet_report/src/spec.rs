//! Report row model, options and errors.

use binsheet_io_xlsx::{SpecDocumentMetadata, XlsxSinkError, derive_report_timestamp};
use chrono::{DateTime, FixedOffset};

use crate::conf::{C_METADATA_AUTHOR, C_METADATA_DESCRIPTION};

/// One resolved `(key, count)` pair of a single-file report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReportRow {
    /// Name shown in the header.
    pub display_name: String,
    /// Bin key as found in the log.
    pub raw_key: String,
    /// Occurrence count.
    pub count: u64,
}

/// Per-build options shared by both layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReportOptions {
    /// Time stamped as created/modified.
    pub created_at: DateTime<FixedOffset>,
    /// Document author.
    pub author: String,
    /// Document description.
    pub description: String,
}

impl Default for SpecReportOptions {
    fn default() -> Self {
        Self {
            created_at: derive_report_timestamp(),
            author: C_METADATA_AUTHOR.to_string(),
            description: C_METADATA_DESCRIPTION.to_string(),
        }
    }
}

impl SpecReportOptions {
    /// Document properties for these options.
    pub fn to_metadata(&self) -> SpecDocumentMetadata {
        SpecDocumentMetadata {
            created_at: self.created_at,
            modified_at: self.created_at,
            author: self.author.clone(),
            description: self.description.clone(),
        }
    }
}

/// Layout failure.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Nothing to lay out: no records or no bin keys.
    #[error("no data found")]
    NoData,
    /// The sink rejected a write.
    #[error(transparent)]
    Sink(#[from] XlsxSinkError),
}
