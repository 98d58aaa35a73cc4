//! Read-modify-write save of a user profile.
//!
//! The save runs as an ordered pipeline over one owned working image slot:
//!
//! 1. [`ProfileSaver::fetch_existing`] reads `users/{id}` and seeds the slot
//!    with the stored `profileImage` (unset when the document is missing).
//! 2. [`ProfileSaver::apply_pick`] runs only after step 1 has completed. When
//!    an image was picked, it re-encodes it and overwrites the slot. A pick
//!    that can no longer be read or encoded leaves the slot untouched.
//! 3. [`ProfileSaver::write`] builds `{name, profileImage?}` from the slot and
//!    replaces the stored document wholesale.
//!
//! A new pick therefore always wins over the stored image, and the stored
//! image is the only fallback when nothing usable was picked.

use cookbook_core::error::{CookbookError, Result};
use cookbook_core::image::ImageCodec;
use cookbook_core::resource::{ResourceHandle, ResourceResolver};
use cookbook_core::store::{DocumentStore, Fields};
use cookbook_core::user::UserProfile;
use std::sync::Arc;

/// Where the image written by a save came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// No image: the written document has no `profileImage` field.
    None,
    /// The image already stored in the document was carried over.
    Existing,
    /// A newly picked image was encoded and written.
    NewPick,
}

/// The working `profileImage` value carried between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingImage {
    payload: Option<String>,
    source: ImageSource,
}

impl WorkingImage {
    pub fn unset() -> Self {
        Self {
            payload: None,
            source: ImageSource::None,
        }
    }

    pub fn existing(payload: Option<String>) -> Self {
        match payload {
            Some(payload) => Self {
                payload: Some(payload),
                source: ImageSource::Existing,
            },
            None => Self::unset(),
        }
    }

    fn overwrite(self, payload: String) -> Self {
        Self {
            payload: Some(payload),
            source: ImageSource::NewPick,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Profile exactly as written.
    pub profile: UserProfile,
    pub image_source: ImageSource,
}

/// Trims the entered name, rejecting blank input.
pub fn validate_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(CookbookError::validation("name must not be blank"));
    }
    Ok(name.to_string())
}

pub(crate) fn as_read_failure(err: CookbookError) -> CookbookError {
    match err {
        CookbookError::ReadFailure(_) => err,
        other => CookbookError::read(other.to_string()),
    }
}

pub(crate) fn as_write_failure(err: CookbookError) -> CookbookError {
    match err {
        CookbookError::WriteFailure(_) => err,
        other => CookbookError::write(other.to_string()),
    }
}

/// Field set written by a save: `name` always, `profileImage` only when set.
pub fn build_fields(name: &str, working: &WorkingImage) -> Fields {
    UserProfile::new(name, working.payload.clone()).to_fields()
}

/// Executes the save pipeline stages against the document store.
#[derive(Clone)]
pub struct ProfileSaver {
    store: Arc<dyn DocumentStore>,
    resources: Arc<dyn ResourceResolver>,
    codec: Arc<dyn ImageCodec>,
    users_collection: String,
}

impl ProfileSaver {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        resources: Arc<dyn ResourceResolver>,
        codec: Arc<dyn ImageCodec>,
        users_collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            resources,
            codec,
            users_collection: users_collection.into(),
        }
    }

    /// Stage 1: reads the current document and seeds the working image.
    pub async fn fetch_existing(&self, user_id: &str) -> Result<WorkingImage> {
        let document = self
            .store
            .get_document(&self.users_collection, user_id)
            .await
            .map_err(as_read_failure)?;

        let working = match document {
            Some(doc) => WorkingImage::existing(UserProfile::from_document(&doc).profile_image),
            None => WorkingImage::unset(),
        };
        tracing::debug!(
            "[ProfileSaver] Existing document for {}: image {:?}",
            user_id,
            working.source()
        );
        Ok(working)
    }

    /// Stage 2: overwrites the working image with the encoded pick, if any.
    ///
    /// Failures here are logged and swallowed. Unreadable or undecodable
    /// picks are expected and logged as warnings; anything else is logged
    /// as an error.
    pub async fn apply_pick(
        &self,
        working: WorkingImage,
        pick: Option<&ResourceHandle>,
    ) -> WorkingImage {
        let Some(handle) = pick else {
            return working;
        };

        match self.encode_pick(handle).await {
            Ok(payload) => {
                tracing::debug!("[ProfileSaver] Using newly picked image {}", handle);
                working.overwrite(payload)
            }
            Err(e) if e.is_degradable() => {
                tracing::warn!(
                    "[ProfileSaver] Ignoring picked image {}: {}. Keeping {:?} image",
                    handle,
                    e,
                    working.source()
                );
                working
            }
            Err(e) => {
                tracing::error!(
                    "[ProfileSaver] Unexpected failure reading picked image {}: {}. Keeping {:?} image",
                    handle,
                    e,
                    working.source()
                );
                working
            }
        }
    }

    async fn encode_pick(&self, handle: &ResourceHandle) -> Result<String> {
        let bytes = self.resources.open_stream(handle).await?;
        self.codec.encode(&bytes)
    }

    /// Stage 3: writes `{name, profileImage?}` over the stored document.
    pub async fn write(
        &self,
        user_id: &str,
        name: &str,
        working: WorkingImage,
    ) -> Result<SaveOutcome> {
        let fields = build_fields(name, &working);
        self.store
            .set_document(&self.users_collection, user_id, fields)
            .await
            .map_err(as_write_failure)?;

        Ok(SaveOutcome {
            profile: UserProfile::new(name, working.payload),
            image_source: working.source,
        })
    }
}
