//! In-memory document store.

use async_trait::async_trait;
use cookbook_core::error::Result;
use cookbook_core::store::{Document, DocumentStore, Fields};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::validate_key;

/// Document store keeping every collection in process memory.
///
/// Documents within a collection are listed in key order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Fields>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Document>> {
        validate_key("collection", collection)?;
        validate_key("key", key)?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .map(|fields| Document::new(key, fields.clone())))
    }

    async fn set_document(&self, collection: &str, key: &str, fields: Fields) -> Result<()> {
        validate_key("collection", collection)?;
        validate_key("key", key)?;

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), fields);
        Ok(())
    }

    async fn list_collection(&self, collection: &str) -> Result<Vec<Document>> {
        validate_key("collection", collection)?;

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, fields)| Document::new(key.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        self.set_document(collection, &key, fields).await?;
        Ok(key)
    }
}
