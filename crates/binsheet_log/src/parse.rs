//! Line-oriented extraction of lot/wafer identifiers and bin tokens.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::conf::{C_PREFIX_LOT, C_PREFIX_ROW_DATA, C_PREFIX_WAFER, C_TOKEN_PLACEHOLDER};
use crate::spec::{EnumRowDataMode, ExtractError, LogRecord};

static RE_TOKEN_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static numeric token pattern"));

////////////////////////////////////////////////////////////////////////////////
// #region TokenRules

/// Decide whether one `RowData:` token contributes under `mode`.
pub fn is_row_data_token_accepted(token: &str, mode: EnumRowDataMode) -> bool {
    if token == C_TOKEN_PLACEHOLDER {
        return false;
    }
    match mode {
        EnumRowDataMode::KeysOnly => true,
        EnumRowDataMode::Counting => RE_TOKEN_NUMERIC.is_match(token),
    }
}

fn iter_row_data_tokens(line: &str) -> Option<impl Iterator<Item = &str>> {
    line.strip_prefix(C_PREFIX_ROW_DATA)
        .map(|rest| rest.split_whitespace())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Extraction

/// Parse one log text into a [`LogRecord`] using the counting rule.
///
/// `LOT:` and `WAFER:` keep their last occurrence. The returned record has an
/// empty `source_name`; callers attach it with [`LogRecord::with_source_name`].
///
/// # Errors
/// [`ExtractError::NoData`] when no numeric bin token was found.
pub fn extract_log_record(text: &str) -> Result<LogRecord, ExtractError> {
    let mut record = LogRecord::default();
    let mut n_lines_row_data = 0usize;

    for line in text.lines() {
        let c_line = line.trim();
        if let Some(rest) = c_line.strip_prefix(C_PREFIX_LOT) {
            record.lot = rest.trim().to_string();
        } else if let Some(rest) = c_line.strip_prefix(C_PREFIX_WAFER) {
            record.wafer = rest.trim().to_string();
        } else if let Some(tokens) = iter_row_data_tokens(c_line) {
            n_lines_row_data += 1;
            for token in tokens {
                if is_row_data_token_accepted(token, EnumRowDataMode::Counting) {
                    *record.counts.entry(token.to_string()).or_insert(0) += 1;
                }
            }
        }
    }

    tracing::debug!(
        lot = %record.lot,
        wafer = %record.wafer,
        n_lines_row_data,
        n_keys = record.counts.len(),
        "log text extracted"
    );

    if record.counts.is_empty() {
        return Err(ExtractError::NoData);
    }
    Ok(record)
}

/// Collect the distinct bin keys of one log text using the keys-only rule.
pub fn extract_keys(text: &str) -> BTreeSet<String> {
    let mut set_keys = BTreeSet::new();
    for line in text.lines() {
        let Some(tokens) = iter_row_data_tokens(line.trim()) else {
            continue;
        };
        for token in tokens {
            if is_row_data_token_accepted(token, EnumRowDataMode::KeysOnly) {
                set_keys.insert(token.to_string());
            }
        }
    }
    set_keys
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
