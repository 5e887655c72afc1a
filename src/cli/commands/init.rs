//! Init command implementation
//!
//! Writes a commented sample settings file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs::OpenOptions;
use std::io::Write;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        let mut options = OpenOptions::new();
        options.write(true);
        if self.force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = match options.open(&self.output) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                println!("❌ Configuration file already exists: {}", self.output);
                println!("   Use --force to overwrite");
                return Ok(2);
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to create {}: {e}", self.output)),
        };

        file.write_all(SAMPLE_CONFIG.as_bytes())?;
        file.flush()?;

        println!("✅ Configuration file created: {}", self.output);
        println!();
        println!("Next steps:");
        println!("  1. Set mongodb.database and mongodb.collection in {}", self.output);
        println!("  2. Validate configuration: unit-export validate-config");
        println!("  3. Run export: unit-export export");
        println!();
        Ok(0)
    }
}

/// Sample settings written by `init`
pub const SAMPLE_CONFIG: &str = r#"# unit-export configuration

[mongodb]
database = "fe2"
collection = "users"
# host = "localhost"
# port = 27018
# username = "Admin"
# server_selection_timeout_secs = 30

[credential]
# registry: read HKLM\<key_path>\<value_name> (Windows only)
# environment: read the variable named by env_var
source = "registry"
# key_path = 'SOFTWARE\JavaSoft\Prefs\de.alamos.fe2.server.services./Registry/Service'
# value_name = "dbpassword"
# env_var = "UNIT_EXPORT_DB_PASSWORD"

[export]
output_dir = "."
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnitExportConfig;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: UnitExportConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.mongodb.port, 27018);
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("settings.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), SAMPLE_CONFIG);
    }

    #[tokio::test]
    async fn test_init_refuses_existing_file_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("settings.toml");
        std::fs::write(&output, "keep").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), SAMPLE_CONFIG);
    }
}
