//! Infrastructure layer for Cookbook.
//!
//! Concrete implementations of the collaborator traits declared in
//! `cookbook-core`.

pub mod auth;
pub mod config_service;
pub mod image_codec;
pub mod paths;
pub mod resource;
pub mod store;

pub use crate::auth::StaticAuthProvider;
pub use crate::config_service::ConfigService;
pub use crate::image_codec::JpegBase64Codec;
pub use crate::paths::CookbookPaths;
pub use crate::resource::FsResourceResolver;
pub use crate::store::{DirDocumentStore, InMemoryDocumentStore};
