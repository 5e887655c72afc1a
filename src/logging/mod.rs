//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human readable console output on stderr
//! - Optional JSON log files with rotation
//! - `RUST_LOG` style filtering
//!
//! # Example
//!
//! ```no_run
//! use unit_export::logging::init_logging;
//! use unit_export::config::LoggingConfig;
//!
//! let _guard = init_logging("info", &LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of an export run
///
/// Extra `tracing` fields may follow the count and duration.
///
/// # Example
///
/// ```no_run
/// use unit_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_secs(3));
/// log_export_complete!(42, Duration::from_secs(3), users_scanned = 20);
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr $(, $($fields:tt)+)?) => {
        tracing::info!(
            rows = $count,
            duration_ms = $duration.as_millis() as u64,
            $($($fields)+,)?
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use unit_export::log_error_with_context;
/// use unit_export::domain::UnitExportError;
///
/// let error = UnitExportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
