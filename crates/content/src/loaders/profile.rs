//! Character profile loader.

use std::path::Path;

use crucible_core::{LockMask, Profile};

use crate::formats::ProfileFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for character profiles from TOML files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a profile from a TOML file.
    ///
    /// A missing lock mask defaults to a fully unlocked grid. The mask is
    /// taken as-is: an undersized mask blocks crafting at the free-space gate
    /// instead of failing the load.
    pub fn load(path: &Path) -> LoadResult<Profile> {
        let content = read_file(path)?;
        let file: ProfileFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile TOML: {}", e))?;

        Ok(Profile {
            enabled_recipes: file.enabled_recipes,
            lock_mask: file
                .lock_mask
                .map(LockMask::from_rows)
                .unwrap_or_else(LockMask::unlocked),
            bank_to_shared: file.bank_to_shared,
            quest_exempt: file.quest_exempt,
            max_storage_tabs: file.max_storage_tabs,
        })
    }
}
