//! Validate config command implementation
//!
//! Loads and validates the settings file without touching the credential
//! store or the database.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  MongoDB: {}", config.mongodb.redacted_uri());
        println!("  Database: {}", config.mongodb.database);
        println!("  Collection: {}", config.mongodb.collection);
        println!("  Credential Source: {}", config.credential.source);
        match config.credential.source {
            crate::config::CredentialSourceKind::Registry => {
                println!(
                    "  Credential Key: HKLM\\{} ({})",
                    config.credential.key_path, config.credential.value_name
                );
            }
            crate::config::CredentialSourceKind::Environment => {
                println!("  Credential Variable: {}", config.credential.env_var);
            }
        }
        println!("  Output Directory: {}", config.export.output_dir.display());
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[mongodb]\ndatabase = \"fe2\"\ncollection = \"users\"\n")
            .unwrap();
        file.flush().unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_missing_file() {
        let code = ValidateArgs {}.execute("missing.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
