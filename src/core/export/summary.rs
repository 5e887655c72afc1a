//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a completed export run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Users read from the store
    pub users_scanned: usize,

    /// Users that contributed no rows because they have no units
    pub users_without_units: usize,

    /// Data rows written, header excluded
    pub rows_written: usize,

    /// File the rows were written to
    pub output_path: PathBuf,

    /// Wall time from scan start to file close
    pub duration: Duration,
}

impl ExportSummary {
    /// Create an empty summary for an export going to `output_path`
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            users_scanned: 0,
            users_without_units: 0,
            rows_written: 0,
            output_path,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Users that produced at least one row
    pub fn users_exported(&self) -> usize {
        self.users_scanned - self.users_without_units
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_export_complete!(
            self.rows_written,
            self.duration,
            users_scanned = self.users_scanned,
            users_without_units = self.users_without_units,
            output = %self.output_path.display()
        );

        if self.users_scanned > 0 && self.rows_written == 0 {
            tracing::warn!(
                users_scanned = self.users_scanned,
                "No user has any units; export file contains only the header"
            );
        }
    }
}
