// src/store/file.rs

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::{Collection, Store};
use crate::error::AppError;

/// Default question set written on first boot when questions.json is absent.
const SEED_QUESTIONS: &str = include_str!("../../seed/questions.json");

/// File-backed store: one pretty-printed JSON document per collection under a
/// data directory.
///
/// Writes go to a temp file in the same directory and are renamed over the
/// target, so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }

    /// Creates the data directory and any missing collection files.
    /// The questions collection is seeded from the bundled default set.
    pub async fn ensure_collections(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;

        for collection in [Collection::Users, Collection::Scores, Collection::Questions] {
            let path = self.path(collection);
            if fs::try_exists(&path).await? {
                continue;
            }

            let body = match collection {
                Collection::Questions => SEED_QUESTIONS.to_string(),
                _ => "[]".to_string(),
            };

            tracing::info!("Creating {}", path.display());
            self.write_document(collection, body).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Store for FileStore {
    async fn read_document(&self, collection: Collection) -> Option<String> {
        fs::read_to_string(self.path(collection)).await.ok()
    }

    async fn write_document(
        &self,
        collection: Collection,
        body: String,
    ) -> Result<(), AppError> {
        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &path).await?;

        Ok(())
    }
}
