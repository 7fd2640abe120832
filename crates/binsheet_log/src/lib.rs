//! `binsheet_log` v1:
//! Wafer test-log extraction and bin naming kernel.
//!
//! Modules:
//! - `conf`   : grammar constants and naming defaults
//! - `spec`   : records, modes and errors
//! - `parse`  : pure line-oriented extraction
//! - `naming` : key-to-name resolution and the shared naming store
pub mod conf;
pub mod naming;
pub mod parse;
pub mod spec;

pub use conf::{
    C_FALLBACK_PREFIX_DEFAULT, C_PREFIX_LOT, C_PREFIX_ROW_DATA, C_PREFIX_WAFER,
    C_TOKEN_PLACEHOLDER,
};
pub use naming::{NamingStore, SpecNaming, extract_unique_keys, resolve_display_name};
pub use parse::{extract_keys, extract_log_record, is_row_data_token_accepted};
pub use spec::{EnumRowDataMode, ExtractError, LogRecord};
