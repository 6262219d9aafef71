//! Configuration content for the crucible automaton.
//!
//! Provides TOML loaders for the persisted configuration surface (character
//! profiles and recipe definitions) plus the built-in default recipe set.
pub mod formats;
pub mod loaders;

pub use loaders::{LoadResult, ProfileLoader, RecipeLoader, default_catalog};
