//! Record store abstraction
//!
//! This module defines the traits a document store must implement to feed the
//! export: connect once, scan the whole collection once, hand back decoded
//! [`UserRecord`]s one at a time.

pub mod memory;
pub mod mongo;

use crate::config::{MongoDbConfig, SecretString};
use crate::domain::{Result, UnitExportError, UserRecord};
use async_trait::async_trait;
use mongodb::bson::{from_document, Bson, Document};

pub use memory::InMemoryStore;
pub use mongo::{MongoConnector, MongoRecordStore};

/// Filter that selects every document in a collection
///
/// The export never narrows its scan, so the filter is a unit type rather
/// than a key/value map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAll;

impl From<MatchAll> for Document {
    fn from(_: MatchAll) -> Self {
        Document::new()
    }
}

/// Sequential cursor over decoded user records
#[async_trait]
pub trait RecordCursor: Send {
    /// Fetch and decode the next record
    ///
    /// Returns `Ok(None)` once the scan is exhausted.
    ///
    /// # Errors
    ///
    /// - [`UnitExportError::Query`] if the server-side cursor fails
    /// - [`UnitExportError::Decode`] if a document does not match [`UserRecord`]
    async fn next_record(&mut self) -> Result<Option<UserRecord>>;
}

/// Read-only document store holding one document per user
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Human readable location of the scanned collection, for logs
    fn describe(&self) -> String;

    /// Start an unordered, unfiltered scan of the whole collection
    ///
    /// # Errors
    ///
    /// Returns [`UnitExportError::Query`] if the query is rejected.
    async fn scan_all(&self) -> Result<Box<dyn RecordCursor>>;

    /// Release the connection
    async fn close(&self) {}
}

/// Opens a [`RecordStore`] with the run's credential
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// # Errors
    ///
    /// Returns [`UnitExportError::Connection`] if the store is unreachable or
    /// rejects the credential.
    async fn connect(
        &self,
        config: &MongoDbConfig,
        credential: &SecretString,
    ) -> Result<Box<dyn RecordStore>>;
}

/// Decode one raw document into a [`UserRecord`]
///
/// `position` is the 1-based index of the document in the scan and is only
/// used to make the error message point at the offending record.
pub fn decode_user(document: Document, position: usize) -> Result<UserRecord> {
    let id = document.get("_id").map(describe_id);
    from_document::<UserRecord>(document).map_err(|e| {
        let location = match id {
            Some(id) => format!("record #{position} (_id {id})"),
            None => format!("record #{position}"),
        };
        UnitExportError::Decode(format!("Failed to decode {location}: {e}"))
    })
}

fn describe_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_match_all_is_empty_filter() {
        let filter: Document = MatchAll.into();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_decode_user_ok() {
        let user = decode_user(
            doc! { "name": "Alice", "units": [{ "name": "Fire", "type": "Volunteer", "code": "F1" }] },
            1,
        )
        .unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.units.len(), 1);
    }

    #[test]
    fn test_decode_user_accepts_null_unit_fields() {
        let user = decode_user(
            doc! { "name": "A", "units": [{ "name": Bson::Null, "type": "V", "code": "C" }] },
            1,
        )
        .unwrap();
        assert_eq!(user.units[0].name, "");
        assert_eq!(user.units[0].unit_type, "V");
    }

    #[test]
    fn test_decode_user_error_names_record() {
        let err = decode_user(doc! { "_id": "user-7", "name": 42 }, 7).unwrap_err();
        assert!(matches!(err, UnitExportError::Decode(_)));
        let message = err.to_string();
        assert!(message.contains("record #7"));
        assert!(message.contains("user-7"));
    }
}
