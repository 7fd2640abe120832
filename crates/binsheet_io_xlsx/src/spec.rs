//! Shared tabular/XLSX specification models.

use std::fmt;

use chrono::{DateTime, FixedOffset};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; `None` fields inherit from the base format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment: `left` or `center`.
    pub align: Option<String>,
    /// Vertical alignment: `vcenter`.
    pub valign: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellValues

/// Literal cell value. Reports never carry formulas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCellValue {
    /// Text value.
    String(String),
    /// Integer value.
    Integer(i64),
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for EnumCellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// One horizontal merge inside a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMergeRange {
    /// Row index of the merge.
    pub row_idx: usize,
    /// Start column index (inclusive).
    pub col_idx_start: usize,
    /// End column index (inclusive).
    pub col_idx_end: usize,
    /// Merge display text.
    pub text: String,
    /// Format applied across the merged cells.
    pub format: SpecCellFormat,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DocumentMetadata

/// Document properties stamped into every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocumentMetadata {
    /// Creation time.
    pub created_at: DateTime<FixedOffset>,
    /// Last modification time.
    pub modified_at: DateTime<FixedOffset>,
    /// Author string.
    pub author: String,
    /// Free-text description.
    pub description: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failure while writing into a tabular sink.
#[derive(Debug, thiserror::Error)]
pub enum XlsxSinkError {
    /// Cell address outside the Excel grid.
    #[error("cell address out of range: row={row_idx} col={col_idx}")]
    AddressOutOfRange {
        /// Zero-based row index.
        row_idx: usize,
        /// Zero-based column index.
        col_idx: usize,
    },
    /// Merge range with end before start.
    #[error("invalid merge range: row={row_idx} cols={col_idx_start}..={col_idx_end}")]
    InvalidMergeRange {
        /// Row index of the merge.
        row_idx: usize,
        /// Start column index.
        col_idx_start: usize,
        /// End column index.
        col_idx_end: usize,
    },
    /// Error reported by the XLSX encoder.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for SpecMergeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} cols {}..={} {:?}",
            self.row_idx, self.col_idx_start, self.col_idx_end, self.text
        )
    }
}
