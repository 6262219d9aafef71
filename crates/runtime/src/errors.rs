//! Unified error types surfaced by the automation runtime.
//!
//! Expected operating conditions (allocation miss, workspace full) are not
//! errors; only conditions that abort a recipe attempt or a whole pass appear
//! here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("storage menu could not be opened")]
    StorageUnavailable,

    #[error("screen position for {item} could not be resolved")]
    PositionUnresolved { item: String },

    #[error("move of {item} was never confirmed after {attempts} attempts")]
    TransferUnconfirmed { item: String, attempts: u32 },

    #[error("staged materials for {recipe} are incomplete in the workspace")]
    StagingIncomplete { recipe: String },

    #[error("no crafted result found in the workspace")]
    CraftedResultMissing,

    #[error("no storage tab accepted {item} after probing {tabs} tabs")]
    StorageExhausted { item: String, tabs: u8 },
}
