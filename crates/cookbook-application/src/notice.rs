//! Short user-visible notices (toasts).

use std::sync::Arc;

pub const MSG_ENTER_NAME: &str = "Please enter a name";
pub const MSG_NOT_AUTHENTICATED: &str = "User is not authenticated";
pub const MSG_FETCH_FAILED: &str = "Error fetching user data";
pub const MSG_PROFILE_UPDATED: &str = "Profile updated";
pub const MSG_UPDATE_FAILED: &str = "Failed to update profile";
pub const MSG_LOAD_PROFILE_FAILED: &str = "Error loading user profile";
pub const MSG_IMAGE_DISPLAY_FAILED: &str = "Error displaying profile image";
pub const MSG_LOAD_RECIPES_FAILED: &str = "Error loading recipes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Callback invoked for every notice as it is raised (e.g., to show a toast).
pub type NoticeCallback = Arc<dyn Fn(&Notice) + Send + Sync>;
