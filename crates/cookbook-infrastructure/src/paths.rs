//! Default locations for Cookbook files.
//!
//! ```text
//! ~/.config/cookbook/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/cookbook/     # Data directory
//! └── documents/               # DirDocumentStore root
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no platform config or data directory for this user")]
    PlatformDirUnavailable,
}

const APP_DIR_NAME: &str = "cookbook";

/// Path resolution for Cookbook, rooted either at the platform directories
/// or at an explicit base directory (for tests).
#[derive(Debug, Clone, Default)]
pub struct CookbookPaths {
    base_dir: Option<PathBuf>,
}

impl CookbookPaths {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Configuration directory (e.g., `~/.config/cookbook/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::PlatformDirUnavailable),
        }
    }

    /// Data directory (e.g., `~/.local/share/cookbook/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::PlatformDirUnavailable),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn documents_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("documents"))
    }
}
