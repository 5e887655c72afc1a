//! In-memory record store
//!
//! Holds raw BSON documents and runs them through the same decoding as the
//! MongoDB store. Used by the pipeline tests and handy for trying the export
//! without a server.

use super::{decode_user, RecordCursor, RecordStore};
use crate::domain::{Result, UnitExportError, UserRecord};
use async_trait::async_trait;
use mongodb::bson::{to_document, Document};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// A fixed set of documents served in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Vec<Document>,
    fail_query_after: Option<usize>,
    scans: Arc<AtomicUsize>,
    closed: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Serve raw documents, which may or may not decode
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    /// Serve well-formed user records
    ///
    /// # Errors
    ///
    /// Fails only if a record cannot be encoded as BSON.
    pub fn from_users(users: &[UserRecord]) -> Result<Self> {
        let documents = users
            .iter()
            .map(|user| {
                to_document(user).map_err(|e| {
                    UnitExportError::Decode(format!("Failed to encode {}: {e}", user.name))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_documents(documents))
    }

    /// Make the cursor fail with a query error after `count` documents
    pub fn fail_query_after(mut self, count: usize) -> Self {
        self.fail_query_after = Some(count);
        self
    }

    /// Number of scans started so far
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }

    async fn scan_all(&self) -> Result<Box<dyn RecordCursor>> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryCursor {
            remaining: self.documents.iter().cloned().collect(),
            position: 0,
            fail_after: self.fail_query_after,
        }))
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

struct InMemoryCursor {
    remaining: VecDeque<Document>,
    position: usize,
    fail_after: Option<usize>,
}

#[async_trait]
impl RecordCursor for InMemoryCursor {
    async fn next_record(&mut self) -> Result<Option<UserRecord>> {
        if self.fail_after == Some(self.position) {
            return Err(UnitExportError::Query(format!(
                "cursor lost after {} records",
                self.position
            )));
        }

        match self.remaining.pop_front() {
            Some(document) => {
                self.position += 1;
                decode_user(document, self.position).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnitRecord;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_scan_returns_users_in_order() {
        let store = InMemoryStore::from_users(&[
            UserRecord::new("Alice").with_unit(UnitRecord::new("Fire", "Volunteer", "F1")),
            UserRecord::new("Bob"),
        ])
        .unwrap();

        let mut cursor = store.scan_all().await.unwrap();
        assert_eq!(cursor.next_record().await.unwrap().unwrap().name, "Alice");
        assert_eq!(cursor.next_record().await.unwrap().unwrap().name, "Bob");
        assert!(cursor.next_record().await.unwrap().is_none());
        assert_eq!(store.scan_count(), 1);
    }

    #[tokio::test]
    async fn test_decode_failure_surfaces() {
        let store = InMemoryStore::from_documents(vec![
            doc! { "name": "Alice" },
            doc! { "units": [] },
        ]);

        let mut cursor = store.scan_all().await.unwrap();
        assert!(cursor.next_record().await.unwrap().is_some());
        let err = cursor.next_record().await.unwrap_err();
        assert!(matches!(err, UnitExportError::Decode(_)));
    }

    #[tokio::test]
    async fn test_query_failure_after_count() {
        let store =
            InMemoryStore::from_documents(vec![doc! { "name": "Alice" }, doc! { "name": "Bob" }])
                .fail_query_after(1);

        let mut cursor = store.scan_all().await.unwrap();
        assert!(cursor.next_record().await.unwrap().is_some());
        let err = cursor.next_record().await.unwrap_err();
        assert!(matches!(err, UnitExportError::Query(_)));
    }

    #[tokio::test]
    async fn test_close_is_observable_through_clones() {
        let store = InMemoryStore::default();
        let handle = store.clone();
        store.close().await;
        assert!(handle.is_closed());
    }
}
