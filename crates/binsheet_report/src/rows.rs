//! Key ordering and name resolution shared by the layouts.

use std::collections::BTreeSet;

use binsheet_log::{LogRecord, SpecNaming};

use crate::spec::SpecReportRow;

/// Header text of one key column: `"{display_name} ({raw_key})"`.
pub fn derive_header_text(display_name: &str, raw_key: &str) -> String {
    format!("{display_name} ({raw_key})")
}

/// Resolve every key of `record`, in ascending string order of the raw key.
pub fn derive_report_rows(record: &LogRecord, naming: &SpecNaming) -> Vec<SpecReportRow> {
    record
        .counts
        .iter()
        .map(|(key, count)| SpecReportRow {
            display_name: naming.resolve(key),
            raw_key: key.clone(),
            count: *count,
        })
        .collect()
}

/// Union of keys over `records`, in ascending string order.
pub fn derive_union_keys(records: &[LogRecord]) -> Vec<String> {
    let set_keys: BTreeSet<&String> = records
        .iter()
        .flat_map(|record| record.counts.keys())
        .collect();
    set_keys.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn derive_record(pairs: &[(&str, u64)]) -> LogRecord {
        LogRecord {
            counts: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_report_rows_resolves_in_string_order() {
        let naming = SpecNaming::new(
            BTreeMap::from([("2".to_string(), "OPEN".to_string())]),
            "BIN",
        );
        let l_rows = derive_report_rows(&derive_record(&[("2", 4), ("10", 1)]), &naming);

        assert_eq!(
            l_rows,
            vec![
                SpecReportRow {
                    display_name: "BIN10".to_string(),
                    raw_key: "10".to_string(),
                    count: 1,
                },
                SpecReportRow {
                    display_name: "OPEN".to_string(),
                    raw_key: "2".to_string(),
                    count: 4,
                },
            ]
        );
    }

    #[test]
    fn test_derive_union_keys() {
        let l_records = vec![
            derive_record(&[("002", 1), ("010", 3)]),
            derive_record(&[("001", 5), ("002", 2)]),
        ];

        assert_eq!(derive_union_keys(&l_records), vec!["001", "002", "010"]);
        assert!(derive_union_keys(&[]).is_empty());
    }

    #[test]
    fn test_derive_header_text() {
        assert_eq!(derive_header_text("PASS", "001"), "PASS (001)");
        assert_eq!(derive_header_text("", "001"), " (001)");
    }
}
