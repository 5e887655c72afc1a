//! Core business logic for unit-export.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration, CSV writing and summary
//! - [`transform`] - Flattening of user records into rows
//!
//! # Export Workflow
//!
//! 1. **Credential**: Read the database password from the credential store
//! 2. **Connect**: Open the MongoDB connection and verify it with a ping
//! 3. **Scan**: Start one unfiltered `find` over the user collection
//! 4. **Create**: Open the timestamped output file and write the header
//! 5. **Flatten & Write**: One row per unit, user by user
//! 6. **Report**: Close the file and the connection, log the summary
//!
//! # Example
//!
//! ```rust,no_run
//! use unit_export::adapters::store::MongoConnector;
//! use unit_export::config::load_config;
//! use unit_export::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("settings.toml")?;
//! let coordinator = ExportCoordinator::new(config, &MongoConnector).await?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Wrote {} rows to {}", summary.rows_written, summary.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
