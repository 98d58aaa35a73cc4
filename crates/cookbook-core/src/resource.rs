//! Local resource access contract.
//!
//! A resource handle identifies a user-picked image (a content URI on a
//! phone, a file path on a desktop). The handle may stop resolving at any
//! time between the pick and the save.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Handle to a locally picked resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceHandle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Opens picked resources as byte streams.
#[async_trait]
pub trait ResourceResolver: Send + Sync {
    /// Reads the full contents of the resource.
    ///
    /// Fails with `CookbookError::ResourceUnavailable` when the handle no
    /// longer resolves.
    async fn open_stream(&self, handle: &ResourceHandle) -> Result<Vec<u8>>;
}
