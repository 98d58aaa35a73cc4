//! Document store trait.
//!
//! Defines the narrow contract the application layer needs from a
//! document database: keyed get/set and whole-collection listing.

use async_trait::async_trait;

use super::document::{Document, Fields};
use crate::error::Result;

/// An abstract keyed document store.
///
/// Implementations decouple the profile and recipe flows from the concrete
/// backend (in-memory map, JSON files on disk, remote service).
///
/// # Implementation Notes
///
/// - `get_document` treats a missing document as a successful empty result
///   (`Ok(None)`), never as an error.
/// - `set_document` replaces the stored document wholesale. Fields absent
///   from `fields` are dropped from the stored document.
/// - `list_collection` returns every document of the collection with no
///   filtering, paging or ordering guarantees beyond the backend's own.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches one document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Document))`: Document exists
    /// - `Ok(None)`: Document does not exist
    /// - `Err(_)`: Transport, permission or storage error
    async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Document>>;

    /// Replaces the document at `key` with exactly `fields`.
    async fn set_document(&self, collection: &str, key: &str, fields: Fields) -> Result<()>;

    /// Lists every document in a collection.
    async fn list_collection(&self, collection: &str) -> Result<Vec<Document>>;

    /// Stores `fields` under a newly generated key and returns that key.
    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String>;
}
