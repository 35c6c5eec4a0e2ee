// src/store/mod.rs

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemStore;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;

/// Named whole-document collections persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Scores,
    Questions,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Scores => "scores.json",
            Collection::Questions => "questions.json",
        }
    }
}

/// Whole-document storage abstraction.
///
/// Each collection is one JSON document holding a single array of records.
/// There is no partial update and no locking: handlers load a full collection,
/// mutate it in memory and write the whole document back. Concurrent writers
/// race last-writer-wins at document granularity.
///
/// Implementations: [`FileStore`] (pretty-printed files on disk) and
/// [`MemStore`] (in-memory test double).
#[async_trait]
pub trait Store: Send + Sync {
    /// Raw document content, or `None` if the collection has never been written.
    async fn read_document(&self, collection: Collection) -> Option<String>;

    /// Replaces the whole document.
    async fn write_document(&self, collection: Collection, body: String)
    -> Result<(), AppError>;
}

/// Loads a collection, substituting the empty sequence for a missing or
/// unparsable document. The read path never surfaces an error.
pub async fn load<T: DeserializeOwned>(store: &dyn Store, collection: Collection) -> Vec<T> {
    let Some(body) = store.read_document(collection).await else {
        return Vec::new();
    };

    match serde_json::from_str(&body) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                "Unparsable {} document, treating as empty: {}",
                collection.file_name(),
                e
            );
            Vec::new()
        }
    }
}

/// Persists a collection as one pretty-printed JSON array.
pub async fn save<T: Serialize>(
    store: &dyn Store,
    collection: Collection,
    records: &[T],
) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(records)?;
    store.write_document(collection, body).await
}
