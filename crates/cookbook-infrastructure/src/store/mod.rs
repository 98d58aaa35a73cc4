//! DocumentStore implementations.

mod dir;
mod memory;

pub use dir::DirDocumentStore;
pub use memory::InMemoryDocumentStore;

use cookbook_core::error::{CookbookError, Result};

/// Rejects names that cannot be used as a collection or document key.
pub(crate) fn validate_key(kind: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CookbookError::InvalidKey(format!("{} must not be empty", kind)));
    }
    if value.contains(['/', '\\']) {
        return Err(CookbookError::InvalidKey(format!(
            "{} '{}' must not contain path separators",
            kind, value
        )));
    }
    // Dot-prefixed names are reserved for in-progress writes
    if value.starts_with('.') {
        return Err(CookbookError::InvalidKey(format!(
            "{} '{}' must not start with '.'",
            kind, value
        )));
    }
    Ok(())
}
