//! Character profile: the persisted configuration surface.
//!
//! Loaded once at startup and treated as immutable for the run's duration.

use crate::grid::LockMask;

/// Per-character configuration driving crafting and triage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Recipe names enabled for this character, matched against the catalog.
    pub enabled_recipes: Vec<String>,
    /// Protected workspace slots that must remain empty for staging.
    pub lock_mask: LockMask,
    /// Start banking at the first shared tab instead of personal storage.
    pub bank_to_shared: bool,
    /// Quest-origin items are never touched while this mode is active.
    pub quest_exempt: bool,
    /// Number of storage tabs probed when banking items.
    pub max_storage_tabs: u8,
}

impl Profile {
    // ===== fixed deployment geometry =====
    pub const GRID_ROWS: usize = 4;
    pub const GRID_COLS: usize = 10;
    /// Width of the contiguous free block required before staging materials.
    pub const STAGING_COLS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_STORAGE_TABS: u8 = 4;
    /// Gold a single storage tab can hold before it stops accepting deposits.
    pub const GOLD_CAP_PER_TAB: u64 = 2_500_000;

    pub fn new() -> Self {
        Self {
            enabled_recipes: Vec::new(),
            lock_mask: LockMask::unlocked(),
            bank_to_shared: false,
            quest_exempt: false,
            max_storage_tabs: Self::DEFAULT_MAX_STORAGE_TABS,
        }
    }

    pub fn recipe_enabled(&self, name: &str) -> bool {
        self.enabled_recipes.iter().any(|n| n == name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}
