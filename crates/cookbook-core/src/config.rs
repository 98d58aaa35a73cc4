//! Configuration model.
//!
//! Every key is optional. A missing file, a missing table, or a missing key
//! all fall back to the defaults below.
//!
//! ```toml
//! [store]
//! users_collection = "users"
//! recipes_collection = "recipes"
//!
//! [image]
//! jpeg_quality = 100
//!
//! [logging]
//! filter = "info"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_USERS_COLLECTION: &str = "users";
pub const DEFAULT_RECIPES_COLLECTION: &str = "recipes";
pub const MAX_JPEG_QUALITY: u8 = 100;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreSettings,
    pub image: ImageSettings,
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Parses a TOML document into a config, applying defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(input)?;
        Ok(config)
    }
}

/// Collection names used by the profile and recipe flows.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreSettings {
    pub users_collection: String,
    pub recipes_collection: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
            recipes_collection: DEFAULT_RECIPES_COLLECTION.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ImageSettings {
    /// JPEG quality, 1 to 100.
    pub jpeg_quality: u8,
}

impl ImageSettings {
    /// Quality clamped to the range accepted by JPEG encoders.
    pub fn effective_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, MAX_JPEG_QUALITY)
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            jpeg_quality: MAX_JPEG_QUALITY,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing-subscriber` filter directive. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.users_collection, "users");
        assert_eq!(config.store.recipes_collection, "recipes");
        assert_eq!(config.image.jpeg_quality, 100);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
[store]
recipes_collection = "shared_recipes"
"#,
        )
        .unwrap();
        assert_eq!(config.store.users_collection, "users");
        assert_eq!(config.store.recipes_collection, "shared_recipes");
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(ImageSettings { jpeg_quality: 0 }.effective_quality(), 1);
        assert_eq!(ImageSettings { jpeg_quality: 250 }.effective_quality(), 100);
        assert_eq!(ImageSettings { jpeg_quality: 85 }.effective_quality(), 85);
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let err = AppConfig::from_toml_str("[store\n").unwrap_err();
        assert!(matches!(err, crate::CookbookError::Serialization { .. }));
    }
}
