//! Domain layer for Cookbook.
//!
//! Holds the profile and recipe models, the document model exchanged with
//! the backing store, and the collaborator traits that the application
//! layer is written against.

pub mod auth;
pub mod config;
pub mod error;
pub mod image;
pub mod recipe;
pub mod resource;
pub mod store;
pub mod user;

// Re-export common error type
pub use error::{CookbookError, Result};
