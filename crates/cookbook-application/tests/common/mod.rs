//! Test doubles shared by the profile screen tests.

#![allow(dead_code)]

use async_trait::async_trait;
use cookbook_application::ProfileScreen;
use cookbook_core::config::StoreSettings;
use cookbook_core::error::{CookbookError, Result};
use cookbook_core::image::ImageCodec;
use cookbook_core::resource::{ResourceHandle, ResourceResolver};
use cookbook_core::store::{Document, DocumentStore, Fields};
use cookbook_infrastructure::{InMemoryDocumentStore, StaticAuthProvider};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Codec whose payload is the picked bytes read as UTF-8.
///
/// Bytes `b"corrupt"` fail to encode. Text `"not-base64!!"` fails to decode.
#[derive(Debug, Default)]
pub struct FakeCodec;

impl ImageCodec for FakeCodec {
    fn encode(&self, bytes: &[u8]) -> Result<String> {
        if bytes == b"corrupt" {
            return Err(CookbookError::decode("not an image"));
        }
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        if text == "not-base64!!" {
            return None;
        }
        Some(text.as_bytes().to_vec())
    }
}

/// Resolver over an in-memory map of handle -> bytes.
#[derive(Debug, Default)]
pub struct MapResolver {
    resources: Mutex<HashMap<String, Vec<u8>>>,
}

impl MapResolver {
    pub fn insert(&self, handle: &str, bytes: &[u8]) {
        self.resources
            .lock()
            .unwrap()
            .insert(handle.to_string(), bytes.to_vec());
    }

    pub fn remove(&self, handle: &str) {
        self.resources.lock().unwrap().remove(handle);
    }
}

#[async_trait]
impl ResourceResolver for MapResolver {
    async fn open_stream(&self, handle: &ResourceHandle) -> Result<Vec<u8>> {
        self.resources
            .lock()
            .unwrap()
            .get(handle.as_str())
            .cloned()
            .ok_or_else(|| CookbookError::resource_unavailable(handle.as_str()))
    }
}

/// In-memory store with switchable failures, a write counter and an
/// optional gate that holds `get_document` until released.
///
/// A gated store signals `entered` as soon as `get_document` is called.
#[derive(Debug, Default)]
pub struct TestStore {
    pub inner: InMemoryDocumentStore,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
    pub fail_list: AtomicBool,
    pub writes: AtomicUsize,
    pub gate: Option<Arc<Notify>>,
    pub entered: Option<Arc<Notify>>,
}

impl TestStore {
    pub fn gated(gate: Arc<Notify>, entered: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            entered: Some(entered),
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for TestStore {
    async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Document>> {
        if let Some(entered) = &self.entered {
            entered.notify_one();
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(CookbookError::read("permission denied"));
        }
        self.inner.get_document(collection, key).await
    }

    async fn set_document(&self, collection: &str, key: &str, fields: Fields) -> Result<()> {
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(CookbookError::write("network unreachable"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_document(collection, key, fields).await
    }

    async fn list_collection(&self, collection: &str) -> Result<Vec<Document>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(CookbookError::read("deadline exceeded"));
        }
        self.inner.list_collection(collection).await
    }

    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String> {
        self.inner.add_document(collection, fields).await
    }
}

pub const USER_ID: &str = "uid-1";

pub struct Harness {
    pub screen: Arc<ProfileScreen>,
    pub store: Arc<TestStore>,
    pub resources: Arc<MapResolver>,
    pub auth: StaticAuthProvider,
}

pub fn harness() -> Harness {
    harness_with_store(TestStore::default())
}

pub fn harness_with_store(store: TestStore) -> Harness {
    let store = Arc::new(store);
    let resources = Arc::new(MapResolver::default());
    let auth = StaticAuthProvider::signed_in(USER_ID);
    let screen = Arc::new(ProfileScreen::new(
        Arc::new(auth.clone()),
        store.clone(),
        resources.clone(),
        Arc::new(FakeCodec),
        StoreSettings::default(),
    ));
    Harness {
        screen,
        store,
        resources,
        auth,
    }
}

pub fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Fields::new(),
    }
}

pub async fn seed_user(store: &TestStore, value: serde_json::Value) {
    store
        .inner
        .set_document("users", USER_ID, fields(value))
        .await
        .unwrap();
}

pub async fn stored_user(store: &TestStore) -> Option<Fields> {
    store
        .inner
        .get_document("users", USER_ID)
        .await
        .unwrap()
        .map(|doc| doc.fields)
}

pub async fn seed_recipe(store: &TestStore, title: &str) {
    store
        .inner
        .add_document(
            "recipes",
            fields(json!({
                "title": title,
                "ingredients": "flour, water",
                "instructions": "mix and bake",
            })),
        )
        .await
        .unwrap();
}
