//! External system integrations for unit-export.
//!
//! - [`credentials`] - Secure store lookup for the database password
//! - [`store`] - Document store abstraction with MongoDB and in-memory implementations
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind narrow traits
//! ([`credentials::CredentialSource`], [`store::StoreConnector`],
//! [`store::RecordStore`]) so the export pipeline can be exercised without a
//! database server or a Windows registry.
//!
//! ```rust,no_run
//! use unit_export::adapters::store::{MongoConnector, StoreConnector};
//! use unit_export::config::{load_config, secret_string};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("settings.toml")?;
//! let password = secret_string("password".to_string());
//! let store = MongoConnector.connect(&config.mongodb, &password).await?;
//! let mut cursor = store.scan_all().await?;
//! while let Some(user) = cursor.next_record().await? {
//!     println!("{} has {} units", user.name, user.units.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod store;
