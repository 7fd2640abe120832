//! `binsheet_report` v1:
//! Report layouts for extracted wafer bin counts.
//!
//! Modules:
//! - `conf`    : localized labels and metadata defaults
//! - `spec`    : report rows, options and errors
//! - `rows`    : key ordering and name resolution for layouts
//! - `single`  : one-file, three-row layout
//! - `summary` : files-by-keys matrix layout
pub mod conf;
pub mod rows;
pub mod single;
pub mod spec;
pub mod summary;

pub use rows::{derive_header_text, derive_report_rows, derive_union_keys};
pub use single::{build_single_report, derive_single_title, write_single_report};
pub use spec::{ReportError, SpecReportOptions, SpecReportRow};
pub use summary::{build_summary_report, write_summary_report};
