//! Domain error types
//!
//! This module defines the error hierarchy for unit-export. Every failure the
//! export can hit maps to exactly one variant, and every variant maps to a
//! process exit code. Driver and parser errors are converted to strings at the
//! boundary so no third-party type leaks out of the library API.

use thiserror::Error;

/// Main unit-export error type
#[derive(Debug, Error)]
pub enum UnitExportError {
    /// Missing or malformed settings file
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database password could not be read from the credential store
    #[error("Credential error: {0}")]
    Credential(String),

    /// Store unreachable or authentication rejected
    #[error("Connection error: {0}")]
    Connection(String),

    /// The collection scan failed on the server side
    #[error("Query error: {0}")]
    Query(String),

    /// A stored record does not match the expected user shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Output file could not be created or written
    #[error("I/O error: {0}")]
    Io(String),
}

impl UnitExportError {
    /// Process exit code reported by the CLI for this error
    ///
    /// | Code | Meaning                 |
    /// |------|-------------------------|
    /// | 2    | configuration           |
    /// | 3    | credential              |
    /// | 4    | connection              |
    /// | 5    | query, decode or I/O    |
    pub fn exit_code(&self) -> i32 {
        match self {
            UnitExportError::Configuration(_) => 2,
            UnitExportError::Credential(_) => 3,
            UnitExportError::Connection(_) => 4,
            UnitExportError::Query(_) | UnitExportError::Decode(_) | UnitExportError::Io(_) => 5,
        }
    }
}

impl From<std::io::Error> for UnitExportError {
    fn from(err: std::io::Error) -> Self {
        UnitExportError::Io(err.to_string())
    }
}

impl From<csv::Error> for UnitExportError {
    fn from(err: csv::Error) -> Self {
        UnitExportError::Io(format!("CSV write failed: {err}"))
    }
}

impl From<toml::de::Error> for UnitExportError {
    fn from(err: toml::de::Error) -> Self {
        UnitExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<mongodb::bson::de::Error> for UnitExportError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        UnitExportError::Decode(err.to_string())
    }
}
