//! On-disk store for the monster document.
//!
//! Every upsert is a full load-modify-save cycle; no document stays
//! resident between calls. The design assumes a single-writer batch
//! process, so there is no locking.

use std::path::{Path, PathBuf};

use thiserror::Error;

use mobforge_domain::{MonsterDocument, MonsterEntry};

use crate::infrastructure::export::write_document;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Store for one monster document path.
pub struct MonsterDb {
    path: PathBuf,
}

impl MonsterDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discards any existing document and writes a fresh header with an
    /// empty record collection. Destructive; intended once per batch run.
    pub async fn init(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            tracing::info!(path = %self.path.display(), "removing existing export document");
        }
        self.save(&MonsterDocument::empty()).await
    }

    /// Loads the document, or returns a fresh empty one when the file does
    /// not exist. A document that fails to parse is treated as empty with a
    /// warning, not as a fatal error.
    pub async fn load(&self) -> Result<MonsterDocument, StoreError> {
        if !self.path.exists() {
            return Ok(MonsterDocument::empty());
        }

        let raw = tokio::fs::read_to_string(&self.path).await?;
        match serde_yaml::from_str::<serde_yaml::Value>(&raw) {
            Ok(root) => Ok(MonsterDocument::from_value(&root)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed monster document, starting empty");
                Ok(MonsterDocument::empty())
            }
        }
    }

    /// Merges one record into the on-disk document, keyed by `Id`.
    ///
    /// Returns `true` when an existing record was replaced in place,
    /// `false` when the record was appended.
    pub async fn upsert(&self, entry: &MonsterEntry) -> Result<bool, StoreError> {
        let value =
            serde_yaml::to_value(entry).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut doc = self.load().await?;
        let updated = doc.upsert(value);
        self.save(&doc).await?;
        Ok(updated)
    }

    /// Writes the full document in the engine's indentation style.
    pub async fn save(&self, doc: &MonsterDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, write_document(doc)).await?;
        Ok(())
    }
}
