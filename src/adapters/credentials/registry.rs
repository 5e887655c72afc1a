//! Credential source backed by the Windows registry

use super::CredentialSource;
use crate::config::{secret_string, SecretString};
use crate::domain::{Result, UnitExportError};
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE};
use winreg::RegKey;

/// Reads string values below `HKEY_LOCAL_MACHINE`
///
/// The key is opened with query-only access and closed when the lookup
/// returns.
pub struct RegistryCredentialSource {
    root: RegKey,
}

impl RegistryCredentialSource {
    pub fn local_machine() -> Self {
        Self {
            root: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl CredentialSource for RegistryCredentialSource {
    fn get(&self, key_path: &str, value_name: &str) -> Result<SecretString> {
        let key = self
            .root
            .open_subkey_with_flags(key_path, KEY_QUERY_VALUE)
            .map_err(|e| {
                UnitExportError::Credential(format!(
                    "Failed to open registry key HKLM\\{key_path}: {e}"
                ))
            })?;

        let value: String = key.get_value(value_name).map_err(|e| {
            UnitExportError::Credential(format!(
                "Failed to read registry value {value_name} under HKLM\\{key_path}: {e}"
            ))
        })?;

        if value.is_empty() {
            return Err(UnitExportError::Credential(format!(
                "Registry value {value_name} under HKLM\\{key_path} is empty"
            )));
        }

        Ok(secret_string(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let source = RegistryCredentialSource::local_machine();
        let err = source
            .get(r"SOFTWARE\unit-export-test\does-not-exist", "dbpassword")
            .unwrap_err();
        assert!(matches!(err, UnitExportError::Credential(_)));
    }
}
