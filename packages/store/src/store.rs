//! # Persistence Adapter
//!
//! `load`/`save` of the whole page record — the document is the unit of
//! durability, never partially persisted. The engine stays editable while a
//! save is in flight; callers snapshot the record and version first, then
//! reconcile with `PageDocument::mark_saved` once the save lands.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, info};

use pagecraft_model::PageRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("invalid document id: {0}")]
    InvalidId(String),

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Async document store
///
/// Errors are surfaced once and never retried internally; in-memory edits
/// are never rolled back on a failed save.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn load(&self, document_id: &str) -> Result<PageRecord, StoreError>;
    async fn save(&self, document_id: &str, record: &PageRecord) -> Result<(), StoreError>;
}

/// One JSON file per document under a root directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, document_id: &str) -> Result<PathBuf, StoreError> {
        // Ids become file names; anything that could escape the root is
        // rejected rather than normalized.
        let valid = !document_id.is_empty()
            && document_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(document_id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", document_id)))
    }
}

#[async_trait]
impl PageStore for JsonFileStore {
    async fn load(&self, document_id: &str) -> Result<PageRecord, StoreError> {
        let path = self.path_for(document_id)?;
        debug!(document_id, path = %path.display(), "loading page record");

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(document_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        // Missing optional fields default here via serde; only JSON that is
        // not a record at all is an error.
        let record = serde_json::from_str(&raw)?;
        Ok(record)
    }

    async fn save(&self, document_id: &str, record: &PageRecord) -> Result<(), StoreError> {
        let path = self.path_for(document_id)?;
        let json = serde_json::to_string_pretty(record)?;

        tokio::fs::create_dir_all(&self.root).await?;
        if let Err(e) = tokio::fs::write(&path, json).await {
            error!(document_id, error = %e, "failed to save page record");
            return Err(e.into());
        }

        info!(
            document_id,
            sections = record.sections.len(),
            "saved page record"
        );
        Ok(())
    }
}
