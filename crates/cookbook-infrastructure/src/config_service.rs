//! Configuration service implementation.
//!
//! Loads `AppConfig` from a TOML file. A missing file yields defaults.

use cookbook_core::config::AppConfig;
use cookbook_core::error::{CookbookError, Result};
use std::path::{Path, PathBuf};

use crate::paths::CookbookPaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `<config_dir>/cookbook/config.toml`.
    pub fn from_default_location() -> Result<Self> {
        let path = CookbookPaths::default()
            .config_file()
            .map_err(|e| CookbookError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<AppConfig> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let config = AppConfig::from_toml_str(&content)?;
                tracing::debug!("Loaded config from {:?}", self.path);
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {:?}, using defaults", self.path);
                Ok(AppConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
