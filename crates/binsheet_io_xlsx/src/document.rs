//! In-memory tabular document and the sink seam layouts write through.

use std::collections::BTreeMap;

use crate::spec::{
    EnumCellValue, SpecCellFormat, SpecDocumentMetadata, SpecMergeRange, XlsxSinkError,
};
use crate::util::validate_cell_address;

/// Destination of a report layout.
///
/// Addresses are zero-based `(row, column)`.
pub trait TabularSink {
    /// Write one literal value with its format.
    fn set_value(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: EnumCellValue,
        format: &SpecCellFormat,
    ) -> Result<(), XlsxSinkError>;

    /// Merge `col_idx_start..=col_idx_end` of one row and show `merge.text`.
    fn merge_range(&mut self, merge: &SpecMergeRange) -> Result<(), XlsxSinkError>;

    /// Set the display width of one column.
    fn set_column_width(&mut self, col_idx: usize, width: f64) -> Result<(), XlsxSinkError>;

    /// Stamp document properties.
    fn set_metadata(&mut self, metadata: &SpecDocumentMetadata) -> Result<(), XlsxSinkError>;
}

/// One stored cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecCell {
    /// Cell value.
    pub value: EnumCellValue,
    /// Cell format.
    pub format: SpecCellFormat,
}

/// Recorded single-sheet document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDocument {
    cells: BTreeMap<(usize, usize), SpecCell>,
    merges: Vec<SpecMergeRange>,
    widths_by_col: BTreeMap<usize, f64>,
    metadata: Option<SpecDocumentMetadata>,
}

impl TabularDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `(row_idx, col_idx)`, merges excluded.
    pub fn cell(&self, row_idx: usize, col_idx: usize) -> Option<&SpecCell> {
        self.cells.get(&(row_idx, col_idx))
    }

    /// Value at `(row_idx, col_idx)`.
    pub fn value(&self, row_idx: usize, col_idx: usize) -> Option<&EnumCellValue> {
        self.cell(row_idx, col_idx).map(|cell| &cell.value)
    }

    /// Recorded merges in write order.
    pub fn merges(&self) -> &[SpecMergeRange] {
        &self.merges
    }

    /// Width of `col_idx`, if one was set.
    pub fn column_width(&self, col_idx: usize) -> Option<f64> {
        self.widths_by_col.get(&col_idx).copied()
    }

    /// Document properties, if stamped.
    pub fn metadata(&self) -> Option<&SpecDocumentMetadata> {
        self.metadata.as_ref()
    }

    /// Number of rows touched by a value or a merge.
    pub fn height(&self) -> usize {
        let n_rows_cells = self.cells.keys().map(|(row, _)| row + 1).max().unwrap_or(0);
        let n_rows_merges = self.merges.iter().map(|m| m.row_idx + 1).max().unwrap_or(0);
        usize::max(n_rows_cells, n_rows_merges)
    }

    /// Number of columns touched by a value or a merge.
    pub fn width(&self) -> usize {
        let n_cols_cells = self.cells.keys().map(|(_, col)| col + 1).max().unwrap_or(0);
        let n_cols_merges = self
            .merges
            .iter()
            .map(|m| m.col_idx_end + 1)
            .max()
            .unwrap_or(0);
        usize::max(n_cols_cells, n_cols_merges)
    }

    /// Replay the document into another sink (merges, cells, widths, metadata).
    pub fn replay_into<S: TabularSink + ?Sized>(&self, sink: &mut S) -> Result<(), XlsxSinkError> {
        for merge in &self.merges {
            sink.merge_range(merge)?;
        }
        for ((row_idx, col_idx), cell) in &self.cells {
            sink.set_value(*row_idx, *col_idx, cell.value.clone(), &cell.format)?;
        }
        for (col_idx, width) in &self.widths_by_col {
            sink.set_column_width(*col_idx, *width)?;
        }
        if let Some(metadata) = &self.metadata {
            sink.set_metadata(metadata)?;
        }
        Ok(())
    }
}

impl TabularSink for TabularDocument {
    fn set_value(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: EnumCellValue,
        format: &SpecCellFormat,
    ) -> Result<(), XlsxSinkError> {
        validate_cell_address(row_idx, col_idx)?;
        self.cells.insert(
            (row_idx, col_idx),
            SpecCell {
                value,
                format: format.clone(),
            },
        );
        Ok(())
    }

    fn merge_range(&mut self, merge: &SpecMergeRange) -> Result<(), XlsxSinkError> {
        if merge.col_idx_end <= merge.col_idx_start {
            return Err(XlsxSinkError::InvalidMergeRange {
                row_idx: merge.row_idx,
                col_idx_start: merge.col_idx_start,
                col_idx_end: merge.col_idx_end,
            });
        }
        validate_cell_address(merge.row_idx, merge.col_idx_end)?;
        self.merges.push(merge.clone());
        Ok(())
    }

    fn set_column_width(&mut self, col_idx: usize, width: f64) -> Result<(), XlsxSinkError> {
        validate_cell_address(0, col_idx)?;
        self.widths_by_col.insert(col_idx, width);
        Ok(())
    }

    fn set_metadata(&mut self, metadata: &SpecDocumentMetadata) -> Result<(), XlsxSinkError> {
        self.metadata = Some(metadata.clone());
        Ok(())
    }
}
