//! MongoDB record store
//!
//! Connects with the configured user and the password from the credential
//! store, which is equivalent to the connection string
//! `mongodb://<username>:<password>@<host>:<port>/`. The password is handed to
//! the driver as a [`Credential`] instead of being spliced into a URI, so it
//! needs no escaping and never appears in a loggable string.
//!
//! Only `find` and `ping` are ever issued; nothing here writes.

use super::{decode_user, MatchAll, RecordCursor, RecordStore, StoreConnector};
use crate::config::{MongoDbConfig, SecretString};
use crate::domain::{Result, UnitExportError, UserRecord};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use mongodb::{Client, Collection, Cursor};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Connector used by the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

#[async_trait]
impl StoreConnector for MongoConnector {
    async fn connect(
        &self,
        config: &MongoDbConfig,
        credential: &SecretString,
    ) -> Result<Box<dyn RecordStore>> {
        let store = MongoRecordStore::connect(config, credential).await?;
        Ok(Box::new(store))
    }
}

/// A connected MongoDB collection
pub struct MongoRecordStore {
    client: Client,
    collection: Collection<Document>,
    location: String,
}

impl MongoRecordStore {
    /// Connect and verify the server is reachable and accepts the credential
    ///
    /// The driver connects lazily, so a `ping` is sent against the target
    /// database to surface connection and authentication failures here
    /// rather than in the middle of the scan.
    pub async fn connect(config: &MongoDbConfig, credential: &SecretString) -> Result<Self> {
        let credential = Credential::builder()
            .username(config.username.clone())
            .password(credential.expose_secret().as_ref().to_string())
            .build();

        let options = ClientOptions::builder()
            .hosts(vec![ServerAddress::Tcp {
                host: config.host.clone(),
                port: Some(config.port),
            }])
            .credential(credential)
            .app_name(config.app_name.clone())
            .server_selection_timeout(Duration::from_secs(config.server_selection_timeout_secs))
            .build();

        let client = Client::with_options(options).map_err(|e| {
            UnitExportError::Connection(format!(
                "Failed to create MongoDB client for {}: {}",
                config.redacted_uri(),
                e
            ))
        })?;

        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await.map_err(|e| {
            UnitExportError::Connection(format!(
                "Failed to connect to {}: {}",
                config.redacted_uri(),
                e
            ))
        })?;

        let location = format!(
            "{}:{}/{}.{}",
            config.host, config.port, config.database, config.collection
        );
        tracing::info!(store = %location, "Connected to MongoDB");

        Ok(Self {
            collection: database.collection::<Document>(&config.collection),
            client,
            location,
        })
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    fn describe(&self) -> String {
        self.location.clone()
    }

    async fn scan_all(&self) -> Result<Box<dyn RecordCursor>> {
        let cursor = self
            .collection
            .find(Document::from(MatchAll))
            .await
            .map_err(|e| {
                UnitExportError::Query(format!("find on {} failed: {}", self.location, e))
            })?;

        Ok(Box::new(MongoUserCursor {
            inner: cursor,
            position: 0,
            location: self.location.clone(),
        }))
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::debug!(store = %self.location, "MongoDB client shut down");
    }
}

struct MongoUserCursor {
    inner: Cursor<Document>,
    position: usize,
    location: String,
}

#[async_trait]
impl RecordCursor for MongoUserCursor {
    async fn next_record(&mut self) -> Result<Option<UserRecord>> {
        let document = self.inner.try_next().await.map_err(|e| {
            UnitExportError::Query(format!(
                "Reading {} failed after {} records: {}",
                self.location, self.position, e
            ))
        })?;

        match document {
            Some(document) => {
                self.position += 1;
                decode_user(document, self.position).map(Some)
            }
            None => Ok(None),
        }
    }
}
