//! Summary layout: one row per file, one column per bin key.

use binsheet_io_xlsx::{
    EnumCellValue, SpecMergeRange, TabularDocument, TabularSink, derive_default_report_formats,
    estimate_max_text_width, estimate_text_width,
};
use binsheet_log::{LogRecord, SpecNaming};

use crate::conf::{C_LABEL_FILE_NAME, N_ROW_BODY_START, N_ROW_HEADER, N_ROW_TITLE};
use crate::rows::{derive_header_text, derive_union_keys};
use crate::spec::{ReportError, SpecReportOptions};

/// Lay out `records` as a new [`TabularDocument`].
///
/// # Errors
/// [`ReportError::NoData`] when `records` is empty or carries no bin key.
pub fn build_summary_report(
    records: &[LogRecord],
    naming: &SpecNaming,
    title: &str,
    options: &SpecReportOptions,
) -> Result<TabularDocument, ReportError> {
    let mut doc = TabularDocument::new();
    write_summary_report(&mut doc, records, naming, title, options)?;
    Ok(doc)
}

/// Lay out `records` into `sink`, rows in input order.
///
/// Column A is sized over the label and every file name. Key columns are
/// sized on their header only; counts are never measured.
pub fn write_summary_report<S: TabularSink + ?Sized>(
    sink: &mut S,
    records: &[LogRecord],
    naming: &SpecNaming,
    title: &str,
    options: &SpecReportOptions,
) -> Result<(), ReportError> {
    if records.is_empty() {
        return Err(ReportError::NoData);
    }
    let l_keys = derive_union_keys(records);
    if l_keys.is_empty() {
        return Err(ReportError::NoData);
    }

    let dict_fmt = derive_default_report_formats();
    let fmt_header = &dict_fmt["header"];
    let fmt_center = &dict_fmt["center"];
    let fmt_text = &dict_fmt["text"];

    sink.merge_range(&SpecMergeRange {
        row_idx: N_ROW_TITLE,
        col_idx_start: 0,
        col_idx_end: l_keys.len(),
        text: title.to_string(),
        format: dict_fmt["title_summary"].clone(),
    })?;

    // Header row
    sink.set_value(
        N_ROW_HEADER,
        0,
        EnumCellValue::from(C_LABEL_FILE_NAME),
        fmt_header,
    )?;
    for (n_idx_key, key) in l_keys.iter().enumerate() {
        let c_header = derive_header_text(&naming.resolve(key), key);
        let n_width = estimate_text_width(&c_header);
        sink.set_value(
            N_ROW_HEADER,
            n_idx_key + 1,
            EnumCellValue::String(c_header),
            fmt_header,
        )?;
        sink.set_column_width(n_idx_key + 1, n_width)?;
    }

    for (n_idx_record, record) in records.iter().enumerate() {
        let n_row = N_ROW_BODY_START + n_idx_record;
        sink.set_value(
            n_row,
            0,
            EnumCellValue::from(record.source_name.as_str()),
            fmt_text,
        )?;
        for (n_idx_key, key) in l_keys.iter().enumerate() {
            let n_count = i64::try_from(record.count_of(key)).unwrap_or(i64::MAX);
            sink.set_value(
                n_row,
                n_idx_key + 1,
                EnumCellValue::Integer(n_count),
                fmt_center,
            )?;
        }
    }
    let n_width_name = estimate_max_text_width(
        std::iter::once(C_LABEL_FILE_NAME).chain(records.iter().map(|r| r.source_name.as_str())),
    );
    sink.set_column_width(0, n_width_name)?;

    sink.set_metadata(&options.to_metadata())?;
    tracing::debug!(
        n_records = records.len(),
        n_keys = l_keys.len(),
        "summary report laid out"
    );
    Ok(())
}
