//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Name of the single sheet every report carries.
pub const C_SHEET_NAME_DEFAULT: &str = "Sheet1";

/// Width units for a character with code point <= 127.
pub const N_WIDTH_CHAR_ASCII: f64 = 1.0;
/// Width units for any other character.
pub const N_WIDTH_CHAR_WIDE: f64 = 2.0;
/// Width units added once per text.
pub const N_WIDTH_PADDING: f64 = 3.0;

/// Name of the zone report timestamps are expressed in.
pub const C_REPORT_TIME_ZONE: &str = "Asia/Shanghai";
/// UTC offset of [`C_REPORT_TIME_ZONE`]; the zone has no daylight saving.
pub const N_REPORT_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Current time in the report zone.
pub fn derive_report_timestamp() -> DateTime<FixedOffset> {
    let tz = FixedOffset::east_opt(N_REPORT_UTC_OFFSET_SECS).unwrap_or(Utc.fix());
    Utc::now().with_timezone(&tz)
}

/// Build named format presets used by the report layouts.
///
/// Keys: `title`, `title_summary`, `header`, `center`, `text`.
pub fn derive_default_report_formats() -> BTreeMap<String, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        align: Some("center".to_string()),
        valign: Some("vcenter".to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        "title".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(12),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        "title_summary".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(14),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        "header".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert("center".to_string(), cfg_base_fmt_spec.clone());
    dict_fmt.insert(
        "text".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            align: Some("left".to_string()),
            ..Default::default()
        }),
    );

    dict_fmt
}
