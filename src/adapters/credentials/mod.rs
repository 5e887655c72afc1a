//! Credential store lookup
//!
//! The database password never lives in the settings file. It is read once per
//! run from a [`CredentialSource`], before any connection is attempted.

pub mod environment;
#[cfg(windows)]
pub mod registry;

use crate::config::{CredentialConfig, CredentialSourceKind, SecretString};
use crate::domain::Result;

pub use environment::EnvironmentCredentialSource;
#[cfg(windows)]
pub use registry::RegistryCredentialSource;

/// A secure store holding secrets under hierarchical keys
pub trait CredentialSource {
    /// Read the secret stored as `value_name` under `key_path`
    ///
    /// # Errors
    ///
    /// Returns [`UnitExportError::Credential`] if the store, the key, or the
    /// value is absent, or if the value is empty.
    fn get(&self, key_path: &str, value_name: &str) -> Result<SecretString>;
}

/// Build the credential source selected in the settings file
///
/// # Errors
///
/// Selecting the registry on a host without one is a credential error.
pub fn credential_source_from_config(
    config: &CredentialConfig,
) -> Result<Box<dyn CredentialSource>> {
    match config.source {
        CredentialSourceKind::Environment => Ok(Box::new(EnvironmentCredentialSource::new(
            config.env_var.clone(),
        ))),
        #[cfg(windows)]
        CredentialSourceKind::Registry => Ok(Box::new(RegistryCredentialSource::local_machine())),
        #[cfg(not(windows))]
        CredentialSourceKind::Registry => Err(crate::domain::UnitExportError::Credential(
            "The registry credential source is only available on Windows; \
             set credential.source = \"environment\""
                .to_string(),
        )),
    }
}

/// Resolve the database password for this run
pub fn resolve_credential(config: &CredentialConfig) -> Result<SecretString> {
    let source = credential_source_from_config(config)?;
    let secret = source.get(&config.key_path, &config.value_name)?;
    tracing::info!(
        source = %config.source,
        key_path = %config.key_path,
        value_name = %config.value_name,
        "Database credential retrieved"
    );
    Ok(secret)
}
