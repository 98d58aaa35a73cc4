//! Document store module.
//!
//! # Module Structure
//!
//! - `document`: `Document` and `Fields`, the unit exchanged with a store
//! - `repository`: the `DocumentStore` trait implemented by backends
//!
//! # Usage
//!
//! ```ignore
//! use cookbook_core::store::{Document, DocumentStore, Fields};
//! ```

mod document;
pub mod repository;

// Re-export public API
pub use document::{Document, Fields};
pub use repository::DocumentStore;
