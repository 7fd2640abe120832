//! Labels and metadata defaults for report layouts.

/// Prefix of the single-report title, followed by `{lot}-{wafer}`.
pub const C_TITLE_LOT_PREFIX: &str = "扩散批号：";
/// Single-report title when lot or wafer is missing.
pub const C_TITLE_UNKNOWN: &str = "未知";
/// Header of the file-name column in summary reports.
pub const C_LABEL_FILE_NAME: &str = "文件名";
/// Default document author.
pub const C_METADATA_AUTHOR: &str = "deviceParser";
/// Default document description.
pub const C_METADATA_DESCRIPTION: &str = "RowData Results";

/// Sheet row holding the title.
pub const N_ROW_TITLE: usize = 0;
/// Sheet row holding column headers.
pub const N_ROW_HEADER: usize = 1;
/// First sheet row holding counts.
pub const N_ROW_BODY_START: usize = 2;
