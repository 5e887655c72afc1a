//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{CredentialSourceKind, UnitExportConfig};
use crate::domain::errors::UnitExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "settings.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into UnitExportConfig
/// 4. Applies environment variable overrides (UNIT_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`UnitExportError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use unit_export::config::loader::load_config;
///
/// let config = load_config("settings.toml").expect("Failed to load config");
/// println!("{}.{}", config.mongodb.database, config.mongodb.collection);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<UnitExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(UnitExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        UnitExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: UnitExportConfig = toml::from_str(&contents).map_err(|e| {
        UnitExportError::Configuration(format!(
            "Failed to parse {}: {}",
            path.display(),
            e
        ))
    })?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        UnitExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        path = %path.display(),
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| UnitExportError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(UnitExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using UNIT_EXPORT_* prefix
///
/// Environment variables follow the pattern: UNIT_EXPORT_<SECTION>_<KEY>,
/// for example UNIT_EXPORT_MONGODB_HOST or UNIT_EXPORT_EXPORT_OUTPUT_DIR.
fn apply_env_overrides(config: &mut UnitExportConfig) -> Result<()> {
    // MongoDB overrides
    if let Ok(val) = std::env::var("UNIT_EXPORT_MONGODB_DATABASE") {
        config.mongodb.database = val;
    }
    if let Ok(val) = std::env::var("UNIT_EXPORT_MONGODB_COLLECTION") {
        config.mongodb.collection = val;
    }
    if let Ok(val) = std::env::var("UNIT_EXPORT_MONGODB_HOST") {
        config.mongodb.host = val;
    }
    if let Ok(val) = std::env::var("UNIT_EXPORT_MONGODB_PORT") {
        config.mongodb.port = val.parse().map_err(|_| {
            UnitExportError::Configuration(format!(
                "UNIT_EXPORT_MONGODB_PORT must be a port number, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("UNIT_EXPORT_MONGODB_USERNAME") {
        config.mongodb.username = val;
    }

    // Credential overrides
    if let Ok(val) = std::env::var("UNIT_EXPORT_CREDENTIAL_SOURCE") {
        config.credential.source = match val.to_lowercase().as_str() {
            "registry" => CredentialSourceKind::Registry,
            "environment" | "env" => CredentialSourceKind::Environment,
            _ => {
                return Err(UnitExportError::Configuration(format!(
                    "UNIT_EXPORT_CREDENTIAL_SOURCE must be 'registry' or 'environment', got '{val}'"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("UNIT_EXPORT_CREDENTIAL_ENV_VAR") {
        config.credential.env_var = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("UNIT_EXPORT_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = PathBuf::from(val);
    }

    Ok(())
}
