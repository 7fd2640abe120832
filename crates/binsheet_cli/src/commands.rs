//! Batch drivers behind the `keys`, `run` and `summary` commands.

use std::path::{Path, PathBuf};

use anyhow::bail;
use binsheet_io_fs::{
    EnumInputSource, ReportBatch, ReportBatchBuilder, SpecCollectOptions, collect_input_files,
    derive_output_dir, derive_result_file_name, derive_source_name, normalize_summary_file_name,
    persist_bytes_atomic, read_text_file, resolve_input_source,
};
use binsheet_io_xlsx::XlsxWriter;
use binsheet_log::{ExtractError, LogRecord, NamingStore, extract_log_record, extract_unique_keys};
use binsheet_report::{ReportError, build_single_report, build_summary_report};

use crate::config::BinsheetConfig;

////////////////////////////////////////////////////////////////////////////////
// #region Arguments

/// Parse one `KEY=NAME` override.
///
/// The key is trimmed and must not be empty. The name is kept verbatim and may
/// be empty.
pub fn parse_map_arg(value: &str) -> Result<(String, String), String> {
    let Some((key, name)) = value.split_once('=') else {
        return Err(format!("expected KEY=NAME, got {value:?}"));
    };
    let c_key = key.trim();
    if c_key.is_empty() {
        return Err(format!("empty key in {value:?}"));
    }
    Ok((c_key.to_string(), name.to_string()))
}

/// Naming store seeded from the config, then the command-line overrides.
pub fn derive_naming_store(
    config: &BinsheetConfig,
    prefix: Option<&str>,
    l_overrides: &[(String, String)],
) -> NamingStore {
    let store = NamingStore::new(config.to_naming());
    if let Some(prefix) = prefix {
        store.set_fallback_prefix(prefix);
    }
    for (key, name) in l_overrides {
        store.set_name(key.clone(), name.clone());
    }
    store
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Keys

/// Scan every input for bin keys and pin fallback names for the new ones.
///
/// Returns the sorted key union.
pub fn run_keys(
    path_input: &Path,
    options: &SpecCollectOptions,
    store: &NamingStore,
) -> anyhow::Result<Vec<String>> {
    let source = resolve_input_source(path_input)?;
    let l_paths = collect_input_files(&source, options)?;

    let mut l_texts = Vec::with_capacity(l_paths.len());
    for path in &l_paths {
        l_texts.push(read_text_file(path)?);
    }
    let l_keys = extract_unique_keys(l_texts.iter().map(String::as_str));
    let n_added = store.seed_fallback_names(&l_keys);

    tracing::info!(
        n_files = l_paths.len(),
        n_keys = l_keys.len(),
        n_added,
        "keys collected"
    );
    Ok(l_keys)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PerFile

/// One `{stem}_result.xlsx` per input file.
///
/// Files without data are skipped with a warning. Read and write failures are
/// recorded and the batch moves on.
pub fn run_per_file(
    path_input: &Path,
    path_dir_out: Option<&Path>,
    config: &BinsheetConfig,
    store: &NamingStore,
) -> anyhow::Result<ReportBatch> {
    let source = resolve_input_source(path_input)?;
    let l_paths = collect_input_files(&source, &config.to_collect_options())?;
    let path_dir_out = derive_output_dir(&source, path_dir_out);

    let mut builder = ReportBatchBuilder::default();
    for path in &l_paths {
        builder.add_scanned();
        let path_dst = path_dir_out.join(derive_result_file_name(path));
        match write_single_file(path, &path_dst, config, store) {
            Ok(()) => {
                builder.add_written();
                tracing::info!(src = %path.display(), dst = %path_dst.display(), "report written");
            }
            Err(e) if is_no_data(&e) => builder.add_skipped(path, e),
            Err(e) => builder.add_error(path.clone(), format!("{e:#}")),
        }
    }

    let report = builder.build();
    tracing::info!("{report}");
    Ok(report)
}

fn write_single_file(
    path_src: &Path,
    path_dst: &Path,
    config: &BinsheetConfig,
    store: &NamingStore,
) -> anyhow::Result<()> {
    let record = read_log_record(path_src)?;
    tracing::debug!(
        src = %path_src.display(),
        lot = %record.lot,
        wafer = %record.wafer,
        n_tokens = record.total_count(),
        "log record read"
    );
    let doc = build_single_report(&record, &store.snapshot(), &config.to_report_options())?;
    let v_bytes = XlsxWriter::render_document(&doc)?;
    persist_bytes_atomic(&v_bytes, path_dst)?;
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Summary

/// One workbook with a row per input file.
///
/// `title` defaults to the summary file stem. Files without data are skipped;
/// the batch fails when none is left or when any file cannot be read.
pub fn run_summary(
    path_input: &Path,
    name: &str,
    title: Option<&str>,
    path_dir_out: Option<&Path>,
    config: &BinsheetConfig,
    store: &NamingStore,
) -> anyhow::Result<(PathBuf, ReportBatch)> {
    let c_file_name = normalize_summary_file_name(name)?;
    let source = resolve_input_source(path_input)?;
    let l_paths = collect_input_files(&source, &config.to_collect_options())?;
    let path_dst = derive_output_dir(&source, path_dir_out).join(&c_file_name);

    let mut builder = ReportBatchBuilder::default();
    let mut l_records = Vec::with_capacity(l_paths.len());
    for path in &l_paths {
        builder.add_scanned();
        match read_log_record(path) {
            Ok(record) => l_records.push(record),
            Err(e) if is_no_data(&e) => builder.add_skipped(path, e),
            Err(e) => return Err(e),
        }
    }
    if l_records.is_empty() {
        bail!("no data found in {}", describe_source(&source));
    }

    let c_title = match title {
        Some(title) => title.to_string(),
        None => derive_summary_title(&c_file_name),
    };
    let doc = build_summary_report(
        &l_records,
        &store.snapshot(),
        &c_title,
        &config.to_report_options(),
    )?;
    let v_bytes = XlsxWriter::render_document(&doc)?;
    persist_bytes_atomic(&v_bytes, &path_dst)?;
    builder.add_written();

    let report = builder.build();
    tracing::info!(dst = %path_dst.display(), "summary written; {report}");
    Ok((path_dst, report))
}

fn derive_summary_title(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Shared

fn read_log_record(path: &Path) -> anyhow::Result<LogRecord> {
    let text = read_text_file(path)?;
    let record = extract_log_record(&text)?;
    Ok(record.with_source_name(derive_source_name(path)))
}

fn is_no_data(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<ExtractError>(), Some(ExtractError::NoData))
        || matches!(err.downcast_ref::<ReportError>(), Some(ReportError::NoData))
}

fn describe_source(source: &EnumInputSource) -> String {
    let c_kind = match source {
        EnumInputSource::SingleFile(_) => "file",
        EnumInputSource::Directory(_) => "directory",
    };
    format!("{c_kind} {}", source.path().display())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
