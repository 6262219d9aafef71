//! Settle delays between simulated inputs.
//!
//! The game applies inputs asynchronously; these pauses give it time to
//! commit a change before the next state read.

use std::time::Duration;

/// Hovering the pointer before a click.
pub const SETTLE_HOVER: Duration = Duration::from_millis(170);

/// After a plain click or pointer move during crafting.
pub const SETTLE_ACTION: Duration = Duration::from_millis(200);

/// After a stash-return click, before membership is re-checked.
pub const SETTLE_RETURN: Duration = Duration::from_millis(300);

/// After a modifier-click item move, before the snapshot is trusted.
pub const SETTLE_MOVE: Duration = Duration::from_millis(500);

/// Between recipes within a pass.
pub const SETTLE_PASS: Duration = Duration::from_millis(500);
