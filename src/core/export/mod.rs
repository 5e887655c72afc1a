//! Export orchestration and output
//!
//! This module provides the core export logic:
//! - Export coordination and the per-run context
//! - Semicolon-delimited CSV writing
//! - Summary and reporting

pub mod coordinator;
pub mod summary;
pub mod writer;

pub use coordinator::{ExportCoordinator, RunContext};
pub use summary::ExportSummary;
pub use writer::{export_file_name, CsvExporter};
