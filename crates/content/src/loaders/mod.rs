//! Loaders for reading configuration from files.
//!
//! Converts the TOML formats defined in [`crate::formats`] into core types.
//! Everything is loaded once at process start and immutable afterwards.

pub mod profile;
pub mod recipes;

pub use profile::ProfileLoader;
pub use recipes::{RecipeLoader, default_catalog};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
