//! Pure decision logic for resource-constrained crafting and stash triage.
//!
//! `crucible-core` defines the canonical rules (allocation, classification,
//! free-space search) over immutable item snapshots and exposes pure APIs
//! reused by the runtime and offline tools. Nothing here performs I/O; the
//! external game session is reached only through the seams in
//! [`rules`] and the runtime crate.
pub mod allocate;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod grid;
pub mod item;
pub mod rules;

pub use allocate::{ConsumedSet, allocate};
pub use catalog::{Recipe, RecipeCatalog};
pub use classify::{Classification, Classifier, PROTECTED_NAMES, Verdict};
pub use config::Profile;
pub use grid::LockMask;
pub use item::{GridPosition, Item, ItemId, Location, LocationKind, Quality};
pub use rules::{MatchOutcome, MatchedRule, NeverMatches, RuleEvaluation, RuleOracle};
