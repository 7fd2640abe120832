//! Single-file layout: title row, name row, count row.

use binsheet_io_xlsx::{
    EnumCellValue, SpecMergeRange, TabularDocument, TabularSink, derive_default_report_formats,
    estimate_text_width,
};
use binsheet_log::{LogRecord, SpecNaming};

use crate::conf::{
    C_TITLE_LOT_PREFIX, C_TITLE_UNKNOWN, N_ROW_BODY_START, N_ROW_HEADER, N_ROW_TITLE,
};
use crate::rows::{derive_header_text, derive_report_rows};
use crate::spec::{ReportError, SpecReportOptions};

/// Title of a single-file report.
pub fn derive_single_title(record: &LogRecord) -> String {
    if record.has_identity() {
        format!("{C_TITLE_LOT_PREFIX}{}-{}", record.lot, record.wafer)
    } else {
        C_TITLE_UNKNOWN.to_string()
    }
}

/// Lay out one record as a new [`TabularDocument`].
///
/// # Errors
/// [`ReportError::NoData`] when the record has no bin key.
pub fn build_single_report(
    record: &LogRecord,
    naming: &SpecNaming,
    options: &SpecReportOptions,
) -> Result<TabularDocument, ReportError> {
    let mut doc = TabularDocument::new();
    write_single_report(&mut doc, record, naming, options)?;
    Ok(doc)
}

/// Lay out one record into `sink`.
///
/// Column `i` holds key `i` in string order; its width is the larger estimate
/// of the header text and the count text.
pub fn write_single_report<S: TabularSink + ?Sized>(
    sink: &mut S,
    record: &LogRecord,
    naming: &SpecNaming,
    options: &SpecReportOptions,
) -> Result<(), ReportError> {
    let l_rows = derive_report_rows(record, naming);
    let n_cols = l_rows.len();
    if n_cols == 0 {
        return Err(ReportError::NoData);
    }

    let dict_fmt = derive_default_report_formats();
    let fmt_title = &dict_fmt["title"];
    let fmt_center = &dict_fmt["center"];

    let c_title = derive_single_title(record);
    if n_cols > 1 {
        sink.merge_range(&SpecMergeRange {
            row_idx: N_ROW_TITLE,
            col_idx_start: 0,
            col_idx_end: n_cols - 1,
            text: c_title,
            format: fmt_title.clone(),
        })?;
    } else {
        sink.set_value(N_ROW_TITLE, 0, EnumCellValue::String(c_title), fmt_title)?;
    }

    for (n_idx_col, row) in l_rows.iter().enumerate() {
        let c_header = derive_header_text(&row.display_name, &row.raw_key);
        let c_count = row.count.to_string();
        let n_width = f64::max(estimate_text_width(&c_header), estimate_text_width(&c_count));

        sink.set_value(
            N_ROW_HEADER,
            n_idx_col,
            EnumCellValue::String(c_header),
            fmt_center,
        )?;
        sink.set_value(
            N_ROW_BODY_START,
            n_idx_col,
            EnumCellValue::Integer(i64::try_from(row.count).unwrap_or(i64::MAX)),
            fmt_center,
        )?;
        sink.set_column_width(n_idx_col, n_width)?;
    }

    sink.set_metadata(&options.to_metadata())?;
    tracing::debug!(
        source = %record.source_name,
        n_cols,
        "single report laid out"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use binsheet_log::extract_log_record;
    use pretty_assertions::assert_eq;

    use super::*;

    fn derive_record(text: &str) -> LogRecord {
        extract_log_record(text)
            .expect("record")
            .with_source_name("wafer_01.txt")
    }

    #[test]
    fn test_build_single_report_round_trip_scenario() {
        let record = derive_record("LOT: A1\nWAFER: W7\nRowData: 001 001 002 ___\n");
        let doc = build_single_report(&record, &SpecNaming::default(), &SpecReportOptions::default())
            .expect("report");

        assert_eq!(doc.merges().len(), 1);
        assert_eq!(doc.merges()[0].text, "扩散批号：A1-W7");
        assert_eq!(doc.merges()[0].col_idx_start, 0);
        assert_eq!(doc.merges()[0].col_idx_end, 1);
        assert_eq!(doc.merges()[0].format.bold, Some(true));
        assert_eq!(
            doc.value(1, 0),
            Some(&EnumCellValue::String("BIN001 (001)".to_string()))
        );
        assert_eq!(
            doc.value(1, 1),
            Some(&EnumCellValue::String("BIN002 (002)".to_string()))
        );
        assert_eq!(doc.value(2, 0), Some(&EnumCellValue::Integer(2)));
        assert_eq!(doc.value(2, 1), Some(&EnumCellValue::Integer(1)));
        assert_eq!(doc.height(), 3);
        assert_eq!(doc.width(), 2);
    }

    #[test]
    fn test_build_single_report_header_and_count_rows_are_centered() {
        let record = derive_record("RowData: 001 002 002
");
        let doc = build_single_report(&record, &SpecNaming::default(), &SpecReportOptions::default())
            .expect("report");

        for n_row in [1, 2] {
            for n_col in [0, 1] {
                let format = &doc.cell(n_row, n_col).expect("cell").format;
                assert_eq!(format.align.as_deref(), Some("center"));
                assert_eq!(format.valign.as_deref(), Some("vcenter"));
                assert_ne!(format.bold, Some(true));
            }
        }
    }

    #[test]
    fn test_build_single_report_width_is_max_of_header_and_count() {
        let mut text = String::from("RowData:");
        for _ in 0..12 {
            text.push_str(" 9");
        }
        let record = derive_record(&format!("{text}\nRowData: 8\n"));
        let naming = SpecNaming::new(BTreeMap::from([("8".to_string(), String::new())]), "B");
        let doc = build_single_report(&record, &naming, &SpecReportOptions::default())
            .expect("report");

        // " (8)" is 4 wide, "1" is 1 wide.
        assert_eq!(doc.column_width(0), Some(7.0));
        // "B9 (9)" is 6 wide, "12" is 2 wide.
        assert_eq!(doc.column_width(1), Some(9.0));
        assert_eq!(doc.value(2, 1), Some(&EnumCellValue::Integer(12)));
    }

    #[test]
    fn test_build_single_report_unknown_title_and_single_column() {
        let record = derive_record("LOT: A1\nRowData: 3\n");
        let doc = build_single_report(&record, &SpecNaming::default(), &SpecReportOptions::default())
            .expect("report");

        assert!(doc.merges().is_empty());
        assert_eq!(
            doc.value(0, 0),
            Some(&EnumCellValue::String("未知".to_string()))
        );
        assert_eq!(doc.cell(0, 0).and_then(|c| c.format.bold), Some(true));
    }

    #[test]
    fn test_build_single_report_no_data() {
        let record = LogRecord {
            lot: "A".to_string(),
            wafer: "1".to_string(),
            ..Default::default()
        };
        let res = build_single_report(&record, &SpecNaming::default(), &SpecReportOptions::default());

        assert!(matches!(res, Err(ReportError::NoData)));
    }

    #[test]
    fn test_build_single_report_stamps_metadata() {
        let record = derive_record("RowData: 1 2\n");
        let options = SpecReportOptions {
            author: "tester".to_string(),
            ..Default::default()
        };
        let doc = build_single_report(&record, &SpecNaming::default(), &options).expect("report");
        let metadata = doc.metadata().expect("metadata");

        assert_eq!(metadata.author, "tester");
        assert_eq!(metadata.description, "RowData Results");
        assert_eq!(metadata.created_at, options.created_at);
        assert_eq!(metadata.modified_at, options.created_at);
        assert_eq!(metadata.created_at.offset().local_minus_utc(), 8 * 3600);
    }
}
