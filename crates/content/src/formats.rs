//! Serde formats for the persisted configuration surface.
//!
//! The on-disk TOML shapes are kept separate from the core types so the file
//! layout can evolve without touching decision logic.

use serde::Deserialize;

use crucible_core::Profile;

/// On-disk character profile.
#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub enabled_recipes: Vec<String>,
    /// Rows x columns of 0/1; nonzero marks a protected slot.
    #[serde(default)]
    pub lock_mask: Option<Vec<Vec<u8>>>,
    #[serde(default)]
    pub bank_to_shared: bool,
    #[serde(default)]
    pub quest_exempt: bool,
    #[serde(default = "default_max_storage_tabs")]
    pub max_storage_tabs: u8,
}

fn default_max_storage_tabs() -> u8 {
    Profile::DEFAULT_MAX_STORAGE_TABS
}

/// On-disk recipe definition.
#[derive(Debug, Deserialize)]
pub struct RecipeSpec {
    pub name: String,
    pub components: Vec<String>,
    pub bases: Vec<String>,
}

/// Top-level recipe file: a list of `[[recipe]]` tables.
#[derive(Debug, Deserialize)]
pub struct RecipeFile {
    #[serde(default)]
    pub recipe: Vec<RecipeSpec>,
}
