//! Batch report model and mutable report builder.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spec::SpecBatchError;

/// Aggregate counters and diagnostics for one report batch.
#[derive(Debug, Default, Clone)]
pub struct ReportBatch {
    /// Input files considered.
    pub cnt_scanned: u64,
    /// Report files written.
    pub cnt_written: u64,
    /// Inputs skipped because they carried no data.
    pub cnt_skipped: u64,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
    /// Per-file failures.
    pub errors: Vec<SpecBatchError>,
}

impl ReportBatch {
    /// Number of collected hard errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// True when at least one file failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} written={} skipped={} errors={} warnings={}",
            self.cnt_scanned,
            self.cnt_written,
            self.cnt_skipped,
            self.error_count(),
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[BATCH]"))
    }
}

/// Mutable accumulator for batch statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportBatchBuilder {
    /// See [`ReportBatch::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportBatch::cnt_written`].
    pub cnt_written: u64,
    /// See [`ReportBatch::cnt_skipped`].
    pub cnt_skipped: u64,
    /// See [`ReportBatch::errors`].
    pub errors: Vec<SpecBatchError>,
    /// See [`ReportBatch::warnings`].
    pub warnings: Vec<String>,
}

impl ReportBatchBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment written count by one.
    pub fn add_written(&mut self) {
        self.cnt_written += 1;
    }

    /// Count `path` as skipped and keep `reason` as a warning.
    pub fn add_skipped(&mut self, path: &Path, reason: impl fmt::Display) {
        self.cnt_skipped += 1;
        let c_warning = format!("{}: {reason}", path.display());
        tracing::warn!("{c_warning}");
        self.warnings.push(c_warning);
    }

    /// Add one path-scoped error.
    pub fn add_error(&mut self, path: PathBuf, exception: String) {
        tracing::error!(path = %path.display(), "{exception}");
        self.errors.push(SpecBatchError { path, exception });
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportBatch {
        ReportBatch {
            cnt_scanned: self.cnt_scanned,
            cnt_written: self.cnt_written,
            cnt_skipped: self.cnt_skipped,
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_report_batch_format_and_display() {
        let mut builder = ReportBatchBuilder::default();
        for _ in 0..3 {
            builder.add_scanned();
        }
        builder.add_written();
        builder.add_skipped(Path::new("empty.txt"), "no data found");
        builder.add_error(PathBuf::from("bad.txt"), "failed to read".to_string());
        let report = builder.build();

        let txt = report.format("[BATCH]");
        assert_eq!(txt, "[BATCH] scanned=3 written=1 skipped=1 errors=1 warnings=1");
        assert_eq!(report.to_string(), txt);
        assert!(report.has_errors());
        assert_eq!(report.errors[0].path, PathBuf::from("bad.txt"));
        assert_eq!(report.warnings, vec!["empty.txt: no data found"]);
    }

    #[test]
    fn test_report_batch_default_is_clean() {
        let report = ReportBatchBuilder::default().build();

        assert!(!report.has_errors());
        assert_eq!(report.format("[X]"), "[X] scanned=0 written=0 skipped=0 errors=0 warnings=0");
    }
}
