//! Item snapshot types.
//!
//! Items are immutable snapshots taken at read time; the authoritative state
//! lives in the external game session. A snapshot becomes stale the moment any
//! observable inventory change happens, so callers re-fetch across every
//! mutating step instead of caching.

use std::collections::BTreeMap;
use std::fmt;

/// Process-unique item identity. Stable only within one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item quality tier, ordered from worst to best.
///
/// Only items at or below [`Quality::Magic`] are fungible enough to be
/// reserved as crafting material.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Quality {
    Low,
    Normal,
    Superior,
    Magic,
    Rare,
    Set,
    Unique,
}

/// Container an item currently resides in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LocationKind {
    /// The character's own grid (crafting happens here).
    Workspace,
    /// Personal storage, always tab 1.
    Storage,
    /// Shared storage pages, mapped to tabs 2 and up.
    SharedStorage,
    Equipped,
    Vendor,
}

/// Grid cell inside a container, column-major `x`, row-major `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    pub x: u8,
    pub y: u8,
}

impl GridPosition {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Full location descriptor: container kind, page index and grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub kind: LocationKind,
    /// 1-indexed page for paged containers, 0 for unpaged ones.
    pub page: u8,
    pub position: GridPosition,
}

impl Location {
    pub const fn new(kind: LocationKind, page: u8, position: GridPosition) -> Self {
        Self {
            kind,
            page,
            position,
        }
    }

    /// Storage tab this location maps to, if it is storage-resident.
    /// Personal storage is tab 1; shared page N maps to tab N + 1.
    pub fn storage_tab(&self) -> Option<u8> {
        match self.kind {
            LocationKind::Storage => Some(1),
            LocationKind::SharedStorage => Some(self.page + 1),
            _ => None,
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(
            self.kind,
            LocationKind::Storage | LocationKind::SharedStorage
        )
    }
}

/// Immutable item snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    /// Type-name used for recipe matching and the protected-type set.
    pub name: String,
    pub quality: Quality,
    /// Marks an already-completed crafted artifact. Crafted items are banked
    /// on sight and can never serve as a recipe base again.
    pub crafted: bool,
    /// Item originates from a quest.
    pub quest_origin: bool,
    /// Consumable potion, never auto-moved out of the workspace.
    pub potion: bool,
    pub location: Location,
    /// Raw stat entries, carried for observability records only.
    pub stats: BTreeMap<String, i64>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quality: Quality) -> Self {
        Self {
            id,
            name: name.into(),
            quality,
            crafted: false,
            quest_origin: false,
            potion: false,
            location: Location::new(LocationKind::Workspace, 0, GridPosition::default()),
            stats: BTreeMap::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_crafted(mut self, crafted: bool) -> Self {
        self.crafted = crafted;
        self
    }

    pub fn with_quest_origin(mut self, quest_origin: bool) -> Self {
        self.quest_origin = quest_origin;
        self
    }

    pub fn with_potion(mut self, potion: bool) -> Self {
        self.potion = potion;
        self
    }

    pub fn with_stat(mut self, key: impl Into<String>, value: i64) -> Self {
        self.stats.insert(key.into(), value);
        self
    }
}
