//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserProfile`, the `users/{userId}` document
//!
//! # Usage
//!
//! ```ignore
//! use cookbook_core::user::UserProfile;
//! ```

mod model;

// Re-export public API
pub use model::{NAME_FIELD, PROFILE_IMAGE_FIELD, UserProfile};
