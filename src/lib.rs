// unit-export - MongoDB user units to CSV
// Copyright (c) 2025 Unit Export Contributors
// Licensed under the MIT License

//! # unit-export - MongoDB user units to CSV
//!
//! Reads every user document from a MongoDB collection and writes one CSV
//! row per (user, unit) pair into a timestamped file.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export pipeline (flattening, CSV writing, orchestration)
//! - [`adapters`] - External integrations (MongoDB, credential stores)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unit_export::adapters::store::MongoConnector;
//! use unit_export::config::load_config;
//! use unit_export::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("settings.toml")?;
//!
//!     // Reads the password, then connects
//!     let coordinator = ExportCoordinator::new(config, &MongoConnector).await?;
//!
//!     let summary = coordinator.execute_export().await?;
//!     println!("Wrote {} rows to {}", summary.rows_written, summary.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Output format
//!
//! The file is named `exported_data_<YYYY-MM-DD_HH-MM-SS>.csv`, uses `;` as
//! delimiter and CRLF line endings, and always starts with the header
//! `User;Name;Code;Type`. Users without units contribute no rows.
//!
//! ## Error Handling
//!
//! All library errors are [`domain::UnitExportError`]; each variant maps to a
//! process exit code through [`domain::UnitExportError::exit_code`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
