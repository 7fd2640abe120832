//! Stateless helper utilities used by the document model and XLSX sink.

use crate::conf::{
    N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_WIDTH_CHAR_ASCII, N_WIDTH_CHAR_WIDE, N_WIDTH_PADDING,
};
use crate::spec::XlsxSinkError;

////////////////////////////////////////////////////////////////////////////////
// #region ColumnWidth

/// Estimate the column width needed to display `text`.
///
/// ASCII characters weigh 1, everything else 2 (wide/CJK approximation), plus a
/// fixed padding of 3. Not a font metric.
pub fn estimate_text_width(text: &str) -> f64 {
    let n_width_chars: f64 = text
        .chars()
        .map(|chr| {
            if u32::from(chr) <= 127 {
                N_WIDTH_CHAR_ASCII
            } else {
                N_WIDTH_CHAR_WIDE
            }
        })
        .sum();
    n_width_chars + N_WIDTH_PADDING
}

/// Widest estimate over `texts`; `0.0` when empty.
pub fn estimate_max_text_width<'a, I>(texts: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .map(estimate_text_width)
        .fold(0.0, f64::max)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellAddressing

/// Reject addresses outside the Excel grid.
pub fn validate_cell_address(row_idx: usize, col_idx: usize) -> Result<(), XlsxSinkError> {
    if row_idx >= N_NROWS_EXCEL_MAX || col_idx >= N_NCOLS_EXCEL_MAX {
        return Err(XlsxSinkError::AddressOutOfRange { row_idx, col_idx });
    }
    Ok(())
}

pub(crate) fn cast_row_num(value: usize) -> Result<u32, XlsxSinkError> {
    u32::try_from(value).map_err(|_| XlsxSinkError::AddressOutOfRange {
        row_idx: value,
        col_idx: 0,
    })
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, XlsxSinkError> {
    u16::try_from(value).map_err(|_| XlsxSinkError::AddressOutOfRange {
        row_idx: 0,
        col_idx: value,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
