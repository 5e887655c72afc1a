//! Credential source backed by a process environment variable

use super::CredentialSource;
use crate::config::{secret_string, SecretString};
use crate::domain::{Result, UnitExportError};

/// Reads the secret from one environment variable
///
/// `key_path` and `value_name` only appear in error messages; the variable
/// name is fixed at construction. Combined with `dotenvy`, this lets the tool
/// run on hosts without a registry.
#[derive(Debug, Clone)]
pub struct EnvironmentCredentialSource {
    var: String,
}

impl EnvironmentCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialSource for EnvironmentCredentialSource {
    fn get(&self, key_path: &str, value_name: &str) -> Result<SecretString> {
        let value = std::env::var(&self.var).map_err(|e| {
            UnitExportError::Credential(format!(
                "Failed to read {key_path}\\{value_name} from environment variable {}: {e}",
                self.var
            ))
        })?;

        if value.is_empty() {
            return Err(UnitExportError::Credential(format!(
                "Environment variable {} is set but empty",
                self.var
            )));
        }

        Ok(secret_string(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_reads_variable() {
        std::env::set_var("UNIT_EXPORT_TEST_ENV_PW", "hunter2");
        let source = EnvironmentCredentialSource::new("UNIT_EXPORT_TEST_ENV_PW");

        let secret = source.get("any/key", "dbpassword").unwrap();
        assert_eq!(secret.expose_secret().as_ref(), "hunter2");
        std::env::remove_var("UNIT_EXPORT_TEST_ENV_PW");
    }

    #[test]
    fn test_missing_variable() {
        std::env::remove_var("UNIT_EXPORT_TEST_ENV_ABSENT");
        let source = EnvironmentCredentialSource::new("UNIT_EXPORT_TEST_ENV_ABSENT");

        let err = source.get("any/key", "dbpassword").unwrap_err();
        assert!(matches!(err, UnitExportError::Credential(_)));
        assert!(err.to_string().contains("UNIT_EXPORT_TEST_ENV_ABSENT"));
    }

    #[test]
    fn test_empty_variable() {
        std::env::set_var("UNIT_EXPORT_TEST_ENV_EMPTY", "");
        let source = EnvironmentCredentialSource::new("UNIT_EXPORT_TEST_ENV_EMPTY");

        let err = source.get("any/key", "dbpassword").unwrap_err();
        assert!(err.to_string().contains("empty"));
        std::env::remove_var("UNIT_EXPORT_TEST_ENV_EMPTY");
    }
}
