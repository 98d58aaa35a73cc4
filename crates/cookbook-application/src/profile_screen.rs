//! Profile screen controller.
//!
//! Coordinates the auth provider, the document store, the resource resolver
//! and the image codec for one signed-in user's profile screen.
//!
//! Every operation surfaces its failures twice: as a [`Notice`] for the view
//! and as an `Err` for programmatic callers. No operation retries.

use cookbook_core::auth::{AuthProvider, CurrentUser};
use cookbook_core::config::{AppConfig, StoreSettings};
use cookbook_core::error::{CookbookError, Result};
use cookbook_core::image::ImageCodec;
use cookbook_core::recipe::Recipe;
use cookbook_core::resource::{ResourceHandle, ResourceResolver};
use cookbook_core::store::DocumentStore;
use cookbook_core::user::UserProfile;
use cookbook_infrastructure::JpegBase64Codec;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notice::{
    MSG_ENTER_NAME, MSG_FETCH_FAILED, MSG_IMAGE_DISPLAY_FAILED, MSG_LOAD_PROFILE_FAILED,
    MSG_LOAD_RECIPES_FAILED, MSG_NOT_AUTHENTICATED, MSG_PROFILE_UPDATED, MSG_UPDATE_FAILED,
    Notice, NoticeCallback,
};
use crate::profile_saver::{ProfileSaver, SaveOutcome, as_read_failure, validate_name};
use crate::screen_state::{ScreenSnapshot, ScreenState};

/// Controller for the profile screen.
///
/// # Thread Safety
///
/// State lives behind a `tokio::sync::RwLock` that is never held across a
/// store call. Overlapping operations are not de-duplicated or cancelled:
/// whichever completes last wins for the fields it touches.
pub struct ProfileScreen {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DocumentStore>,
    resources: Arc<dyn ResourceResolver>,
    codec: Arc<dyn ImageCodec>,
    settings: StoreSettings,
    saver: ProfileSaver,
    state: Arc<RwLock<ScreenState>>,
    notice_callback: Arc<RwLock<Option<NoticeCallback>>>,
}

impl ProfileScreen {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DocumentStore>,
        resources: Arc<dyn ResourceResolver>,
        codec: Arc<dyn ImageCodec>,
        settings: StoreSettings,
    ) -> Self {
        let saver = ProfileSaver::new(
            store.clone(),
            resources.clone(),
            codec.clone(),
            settings.users_collection.clone(),
        );
        Self {
            auth,
            store,
            resources,
            codec,
            settings,
            saver,
            state: Arc::new(RwLock::new(ScreenState::default())),
            notice_callback: Arc::new(RwLock::new(None)),
        }
    }

    /// Builds a screen using the JPEG/Base64 codec configured in `config`.
    pub fn from_config(
        config: &AppConfig,
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DocumentStore>,
        resources: Arc<dyn ResourceResolver>,
    ) -> Self {
        let codec = Arc::new(JpegBase64Codec::from_settings(&config.image));
        Self::new(auth, store, resources, codec, config.store.clone())
    }

    /// Sets a callback invoked for every notice as it is raised.
    pub async fn set_notice_callback(&self, callback: NoticeCallback) {
        *self.notice_callback.write().await = Some(callback);
    }

    pub async fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::from(&*self.state.read().await)
    }

    /// Returns and clears the notices raised so far.
    pub async fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().await.notices)
    }

    async fn notify(&self, notice: Notice) {
        if let Some(callback) = self.notice_callback.read().await.as_ref() {
            callback(&notice);
        }
        self.state.write().await.notices.push(notice);
    }

    async fn require_user(&self) -> Result<CurrentUser> {
        match self.auth.current_user() {
            Some(user) => Ok(user),
            None => {
                tracing::warn!("[ProfileScreen] No authenticated user");
                self.notify(Notice::error(MSG_NOT_AUTHENTICATED)).await;
                Err(CookbookError::NotAuthenticated)
            }
        }
    }

    // ============================================================================
    // Screen lifecycle
    // ============================================================================

    /// Loads the profile and the recipe list when a user is signed in.
    ///
    /// With no signed-in user this does nothing.
    pub async fn open(&self) {
        if self.auth.current_user().is_none() {
            tracing::debug!("[ProfileScreen] Opened without a signed-in user");
            return;
        }

        // Failures are already surfaced as notices
        let _ = self.load_profile().await;
        let _ = self.load_recipes().await;
    }

    // ============================================================================
    // Profile Loader
    // ============================================================================

    /// Reads `users/{id}` and populates the name and picture.
    ///
    /// Returns `Ok(None)` when the user has no document yet, which leaves
    /// the display untouched. A malformed stored picture is reported with a
    /// notice and keeps the previously displayed picture.
    pub async fn load_profile(&self) -> Result<Option<UserProfile>> {
        let user = self.require_user().await?;

        let document = match self
            .store
            .get_document(&self.settings.users_collection, &user.id)
            .await
        {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("[ProfileScreen] Failed to load profile {}: {}", user.id, e);
                self.notify(Notice::error(MSG_LOAD_PROFILE_FAILED)).await;
                return Err(as_read_failure(e));
            }
        };

        let Some(document) = document else {
            tracing::debug!("[ProfileScreen] No profile document for {}", user.id);
            return Ok(None);
        };

        let profile = UserProfile::from_document(&document);
        let decoded = profile
            .profile_image
            .as_deref()
            .map(|payload| self.codec.decode(payload));

        {
            let mut state = self.state.write().await;
            state.display_name = profile.name.clone();
            if let Some(Some(bytes)) = &decoded {
                state.display_image = Some(bytes.clone());
            }
        }

        if let Some(None) = decoded {
            tracing::warn!("[ProfileScreen] Stored picture for {} is malformed", user.id);
            self.notify(Notice::error(MSG_IMAGE_DISPLAY_FAILED)).await;
        }

        Ok(Some(profile))
    }

    // ============================================================================
    // Image picking
    // ============================================================================

    /// Records a picked image and previews it.
    ///
    /// The selection is recorded even when the preview cannot be read; the
    /// save decides again whether the pick is usable.
    pub async fn select_image(&self, handle: ResourceHandle) {
        self.state.write().await.pending_image = Some(handle.clone());

        match self.resources.open_stream(&handle).await {
            Ok(bytes) => {
                self.state.write().await.display_image = Some(bytes);
            }
            Err(e) => {
                tracing::warn!("[ProfileScreen] Cannot preview {}: {}", handle, e);
            }
        }
    }

    // ============================================================================
    // Profile Saver
    // ============================================================================

    /// Saves the entered name and the pending picture, keeping the stored
    /// picture when nothing new was picked.
    ///
    /// The pending pick is read only after the existing document has been
    /// fetched, so the newest pick at that point is the one written.
    pub async fn save_profile(&self, name_input: &str) -> Result<SaveOutcome> {
        let user = self.require_user().await?;

        let name = match validate_name(name_input) {
            Ok(name) => name,
            Err(e) => {
                self.notify(Notice::error(MSG_ENTER_NAME)).await;
                return Err(e);
            }
        };

        let working = match self.saver.fetch_existing(&user.id).await {
            Ok(working) => working,
            Err(e) => {
                tracing::error!("[ProfileScreen] Failed to fetch user data: {}", e);
                self.notify(Notice::error(MSG_FETCH_FAILED)).await;
                return Err(e);
            }
        };

        let pick = self.state.read().await.pending_image.clone();
        let working = self.saver.apply_pick(working, pick.as_ref()).await;

        match self.saver.write(&user.id, &name, working).await {
            Ok(outcome) => {
                tracing::info!(
                    "[ProfileScreen] Profile {} saved (image: {:?})",
                    user.id,
                    outcome.image_source
                );
                self.notify(Notice::info(MSG_PROFILE_UPDATED)).await;
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!("[ProfileScreen] Failed to update profile: {}", e);
                self.notify(Notice::error(MSG_UPDATE_FAILED)).await;
                Err(e)
            }
        }
    }

    // ============================================================================
    // Recipe Lister
    // ============================================================================

    /// Replaces the recipe list with every document of the recipes collection.
    ///
    /// The list is not scoped to the signed-in user. On failure the previous
    /// list stays as it was.
    pub async fn load_recipes(&self) -> Result<usize> {
        let documents = match self
            .store
            .list_collection(&self.settings.recipes_collection)
            .await
        {
            Ok(documents) => documents,
            Err(e) => {
                tracing::error!("[ProfileScreen] Error getting recipes: {}", e);
                self.notify(Notice::error(MSG_LOAD_RECIPES_FAILED)).await;
                return Err(as_read_failure(e));
            }
        };

        let mut state = self.state.write().await;
        state.recipes.clear();
        state
            .recipes
            .extend(documents.iter().map(Recipe::from_document));
        state.recipes_revision += 1;

        tracing::debug!("[ProfileScreen] Loaded {} recipes", state.recipes.len());
        Ok(state.recipes.len())
    }
}
