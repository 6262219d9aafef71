//! Orchestration runtime for the crucible automaton.
//!
//! Drives crafting passes and storage triage against an external game
//! session. All game-state access goes through the [`session::GameSession`]
//! seam; decision logic lives in `crucible-core` and stays pure. Both entry
//! points ([`CraftingDriver::run_crafting_pass`] and [`StorageTriage::run`])
//! are designed to be invoked repeatedly by an outer scheduling loop.
pub mod driver;
pub mod errors;
pub mod events;
pub mod session;
pub mod timing;
pub mod transfer;
pub mod triage;

pub use driver::{CraftingDriver, PassState};
pub use errors::{DriverError, Result};
pub use events::{EventSink, NoopSink, StashRecord};
pub use session::{GameSession, Key, Modifier, MouseButton, ScreenPoint};
pub use transfer::{MOVE_RETRIES, TransferOrchestrator};
pub use triage::StorageTriage;
