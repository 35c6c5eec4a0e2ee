// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Collection, Store};
use crate::error::AppError;

/// In-memory store, used by tests in place of the file-backed one.
#[derive(Debug, Default)]
pub struct MemStore {
    documents: Mutex<HashMap<Collection, String>>,
}

#[async_trait]
impl Store for MemStore {
    async fn read_document(&self, collection: Collection) -> Option<String> {
        self.documents.lock().await.get(&collection).cloned()
    }

    async fn write_document(
        &self,
        collection: Collection,
        body: String,
    ) -> Result<(), AppError> {
        self.documents.lock().await.insert(collection, body);
        Ok(())
    }
}
