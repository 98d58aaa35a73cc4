//! Filesystem-backed resource resolver.

use async_trait::async_trait;
use cookbook_core::error::{CookbookError, Result};
use cookbook_core::resource::{ResourceHandle, ResourceResolver};
use std::io::ErrorKind;

/// Resolves resource handles as filesystem paths.
#[derive(Debug, Clone, Default)]
pub struct FsResourceResolver;

impl FsResourceResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceResolver for FsResourceResolver {
    async fn open_stream(&self, handle: &ResourceHandle) -> Result<Vec<u8>> {
        match tokio::fs::read(handle.as_str()).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                tracing::debug!("Resource {} unavailable: {}", handle, e);
                Err(CookbookError::resource_unavailable(handle.as_str()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar.png");
        std::fs::write(&path, b"bytes").unwrap();

        let handle = ResourceHandle::new(path.to_string_lossy());
        let bytes = FsResourceResolver::new().open_stream(&handle).await.unwrap();
        assert_eq!(bytes, b"bytes");
    }

    #[tokio::test]
    async fn test_missing_file_is_resource_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let handle = ResourceHandle::new(temp_dir.path().join("gone.png").to_string_lossy());

        let err = FsResourceResolver::new().open_stream(&handle).await.unwrap_err();
        assert!(err.is_resource_unavailable());
    }
}
