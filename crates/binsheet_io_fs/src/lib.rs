//! `binsheet_io_fs` v1:
//! Filesystem side of a report batch.
//!
//! Modules:
//! - `spec`    : input sources, collect options and errors
//! - `collect` : input resolution, directory listing and reading
//! - `persist` : atomic output writes
//! - `report`  : batch counters and diagnostics
//! - `util`    : pattern matching and output naming helpers

pub mod collect;
pub mod persist;
pub mod report;
pub mod spec;
pub mod util;

pub use collect::{collect_input_files, read_text_file, resolve_input_source};
pub use persist::persist_bytes_atomic;
pub use report::{ReportBatch, ReportBatchBuilder};
pub use spec::{
    C_PATTERN_INPUT_DEFAULT, EnumFilePatternMode, EnumInputSource, FsError, SpecBatchError,
    SpecCollectOptions,
};
pub use util::{
    derive_output_dir, derive_result_file_name, derive_source_name, normalize_summary_file_name,
};
