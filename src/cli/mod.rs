//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for unit-export using clap.

pub mod commands;

use crate::config::{LoggingConfig, DEFAULT_CONFIG_FILE};
use clap::{Parser, Subcommand};

/// unit-export - MongoDB user units to CSV
#[derive(Parser, Debug)]
#[command(name = "unit-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "UNIT_EXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "UNIT_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write JSON logs to this directory
    #[arg(long, env = "UNIT_EXPORT_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log file rotation (daily, hourly, never)
    #[arg(long, default_value = "daily")]
    pub log_rotation: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging settings derived from the command line
    pub fn logging_config(&self) -> LoggingConfig {
        match &self.log_dir {
            Some(dir) => LoggingConfig {
                local_enabled: true,
                local_path: dir.clone(),
                local_rotation: self.log_rotation.clone(),
            },
            None => LoggingConfig {
                local_rotation: self.log_rotation.clone(),
                ..LoggingConfig::default()
            },
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all users and their units to a CSV file
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
