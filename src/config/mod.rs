//! Configuration management for unit-export.
//!
//! # Example Configuration
//!
//! ```toml
//! [mongodb]
//! database = "fe2"
//! collection = "users"
//! # host = "localhost"
//! # port = 27018
//! # username = "Admin"
//!
//! [credential]
//! source = "registry"   # registry | environment
//!
//! [export]
//! output_dir = "."
//! ```
//!
//! Values may reference environment variables with `${VAR_NAME}`; variables
//! named `UNIT_EXPORT_<SECTION>_<KEY>` override individual keys after parsing.
//!
//! ```rust,no_run
//! use unit_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("settings.toml")?;
//! println!("Exporting {}.{}", config.mongodb.database, config.mongodb.collection);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    CredentialConfig, CredentialSourceKind, ExportConfig, LoggingConfig, MongoDbConfig,
    UnitExportConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
