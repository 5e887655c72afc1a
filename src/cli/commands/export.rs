//! Export command implementation
//!
//! This module implements the `export` command: load the settings file,
//! read the credential, connect, and write the CSV file.

use crate::adapters::store::{MongoConnector, StoreConnector};
use crate::config::load_config;
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Directory to create the export file in (overrides export.output_dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command against MongoDB
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        self.execute_with(config_path, &MongoConnector).await
    }

    /// Execute the export command with an explicit store connector
    ///
    /// Returns the process exit code. Errors are reported here and turned
    /// into exit codes rather than propagated.
    pub async fn execute_with(
        &self,
        config_path: &str,
        connector: &dyn StoreConnector,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(e.exit_code());
            }
        };

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir.display(), "Overriding output directory from CLI");
            config.export.output_dir = dir.clone();
        }

        let coordinator = match ExportCoordinator::new(config, connector).await {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to initialize export");
                eprintln!("Failed to initialize export: {e}");
                return Ok(e.exit_code());
            }
        };

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Export failed: {e}");
                return Ok(e.exit_code());
            }
        };

        print_summary(&summary);
        Ok(0)
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Users scanned: {}", summary.users_scanned);
    println!("  Users exported: {}", summary.users_exported());
    println!("  Users without units: {}", summary.users_without_units);
    println!("  Rows written: {}", summary.rows_written);
    println!("  Output file: {}", summary.output_path.display());
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();
    println!("✅ Export completed successfully!");
}
