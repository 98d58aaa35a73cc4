//! Directory-backed document store.
//!
//! Directory structure:
//! ```text
//! base_dir/
//! ├── users/
//! │   └── <userId>.json
//! └── recipes/
//!     ├── <uuid-1>.json
//!     └── <uuid-2>.json
//! ```

use async_trait::async_trait;
use cookbook_core::error::{CookbookError, Result};
use cookbook_core::store::{Document, DocumentStore, Fields};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::validate_key;

const EXTENSION: &str = "json";

/// Stores each document as a pretty-printed JSON object on disk.
#[derive(Debug, Clone)]
pub struct DirDocumentStore {
    base_dir: PathBuf,
}

impl DirDocumentStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf> {
        validate_key("collection", collection)?;
        Ok(self.base_dir.join(collection))
    }

    fn document_path(&self, collection: &str, key: &str) -> Result<PathBuf> {
        validate_key("key", key)?;
        Ok(self
            .collection_dir(collection)?
            .join(format!("{}.{}", key, EXTENSION)))
    }

    async fn read_fields(path: &Path) -> Result<Option<Fields>> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CookbookError::read(format!(
                    "Failed to read {:?}: {}",
                    path, e
                )));
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| CookbookError::read(format!("Corrupt document {:?}: {}", path, e)))
    }
}

#[async_trait]
impl DocumentStore for DirDocumentStore {
    async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Document>> {
        let path = self.document_path(collection, key)?;
        Ok(Self::read_fields(&path)
            .await?
            .map(|fields| Document::new(key, fields)))
    }

    async fn set_document(&self, collection: &str, key: &str, fields: Fields) -> Result<()> {
        let dir = self.collection_dir(collection)?;
        let path = self.document_path(collection, key)?;

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| CookbookError::write(format!("Failed to create {:?}: {}", dir, e)))?;

        let content = serde_json::to_string_pretty(&fields)?;

        // Write through a temp file so readers never see a partial document
        let tmp_path = dir.join(format!(".{}.{}.tmp", key, Uuid::new_v4()));
        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| CookbookError::write(format!("Failed to write {:?}: {}", tmp_path, e)))?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(CookbookError::write(format!(
                "Failed to replace {:?}: {}",
                path, e
            )));
        }

        tracing::debug!("Stored document {}/{}", collection, key);
        Ok(())
    }

    async fn list_collection(&self, collection: &str) -> Result<Vec<Document>> {
        let dir = self.collection_dir(collection)?;

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CookbookError::read(format!(
                    "Failed to list {:?}: {}",
                    dir, e
                )));
            }
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CookbookError::read(format!("Failed to list {:?}: {}", dir, e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if key.starts_with('.') {
                continue;
            }
            if let Some(fields) = Self::read_fields(&path).await? {
                documents.push(Document::new(key, fields));
            }
        }

        documents.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(documents)
    }

    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        self.set_document(collection, &key, fields).await?;
        Ok(key)
    }
}
