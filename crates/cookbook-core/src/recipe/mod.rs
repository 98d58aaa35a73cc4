//! Recipe domain module.
//!
//! Recipes are read-only here: they are listed from the `recipes`
//! collection and rebuilt wholesale on every fetch.

mod model;

pub use model::Recipe;
