//! Result type alias for unit-export

use super::errors::UnitExportError;

/// Result type alias for unit-export operations
///
/// # Examples
///
/// ```
/// use unit_export::domain::result::Result;
/// use unit_export::domain::errors::UnitExportError;
///
/// fn failing_function() -> Result<()> {
///     Err(UnitExportError::Configuration("missing [mongodb] section".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, UnitExportError>;
