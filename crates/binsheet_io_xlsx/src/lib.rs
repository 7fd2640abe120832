//! `binsheet_io_xlsx` v1:
//! Tabular document model and XLSX rendering kernel.
//!
//! Modules:
//! - `conf`     : Excel limits, width weights and default presets
//! - `spec`     : cell/format/metadata models and errors
//! - `util`     : pure helper functions (width heuristic, address checks)
//! - `document` : in-memory tabular document and the sink seam
//! - `writer`   : rust_xlsxwriter-backed sink
pub mod conf;
pub mod document;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_SHEET_NAME_DEFAULT, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, derive_default_report_formats,
    derive_report_timestamp,
};
pub use document::{SpecCell, TabularDocument, TabularSink};
pub use spec::{
    EnumCellValue, SpecCellFormat, SpecDocumentMetadata, SpecMergeRange, XlsxSinkError,
};
pub use util::{estimate_max_text_width, estimate_text_width, validate_cell_address};
pub use writer::XlsxWriter;
