//! `binsheet_cli` v1:
//! Command-line driver turning wafer test logs into XLSX bin reports.
//!
//! Modules:
//! - `config`   : optional TOML configuration
//! - `logging`  : tracing subscriber setup
//! - `commands` : `keys`, `run` and `summary` batch drivers

pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{derive_naming_store, parse_map_arg, run_keys, run_per_file, run_summary};
pub use config::BinsheetConfig;
pub use logging::{LogFormat, init_logging};
