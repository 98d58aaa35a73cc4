//! UserProfile domain model.
//!
//! One document per user, keyed by the user identifier:
//! `{ name: string, profileImage?: base64-jpeg-string }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{Document, Fields};

/// Stored field holding the display name.
pub const NAME_FIELD: &str = "name";
/// Stored field holding the Base64 JPEG payload.
pub const PROFILE_IMAGE_FIELD: &str = "profileImage";

/// User profile domain model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User's display name
    pub name: String,
    /// Profile picture as Base64 text. `None` means no picture is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, profile_image: Option<String>) -> Self {
        Self {
            name: name.into(),
            profile_image,
        }
    }

    /// Reads a profile out of a stored document.
    ///
    /// A missing or non-text `name` reads as the empty string.
    pub fn from_document(document: &Document) -> Self {
        Self {
            name: document.get_string(NAME_FIELD).unwrap_or_default(),
            profile_image: document.get_string(PROFILE_IMAGE_FIELD),
        }
    }

    /// Builds the field set written back to the store.
    ///
    /// `name` is always present. `profileImage` is present only when set, so
    /// a wholesale write of these fields drops any previously stored image.
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(NAME_FIELD.to_string(), Value::String(self.name.clone()));
        if let Some(image) = &self.profile_image {
            fields.insert(PROFILE_IMAGE_FIELD.to_string(), Value::String(image.clone()));
        }
        fields
    }
}
