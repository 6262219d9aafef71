//! Abstraction over the live game session.
//!
//! Runtime components never read or mutate game state directly; everything
//! goes through [`GameSession`]. Implementations wrap the real process
//! (memory reader plus simulated input), while tests plug in scripted fakes.
//! Input primitives are fire-and-forget: the only correctness signal is
//! re-reading state after a settle delay.

use std::time::Duration;

use crucible_core::{Item, LocationKind};

use crate::errors::Result;

/// Screen coordinates of an item or control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    /// Sentinel returned when an item cannot be located on screen. Callers
    /// must treat it as "not found" and fail gracefully, never click it.
    pub const UNRESOLVED: ScreenPoint = ScreenPoint { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_unresolved(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Shift,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
}

/// Contract to the external game session.
///
/// Snapshot reads reflect the state as of the last [`refresh`]; every mutating
/// input action must be followed by a settle delay and a refresh before the
/// next read is trusted.
///
/// [`refresh`]: GameSession::refresh
pub trait GameSession {
    /// Ordered item snapshot for the given container kinds.
    fn items(&self, kinds: &[LocationKind]) -> Vec<Item>;

    /// Force a re-read of game state after a mutation.
    fn refresh(&mut self);

    /// Resolve the current screen position of `item`, or
    /// [`ScreenPoint::UNRESOLVED`].
    fn screen_position(&self, item: &Item) -> ScreenPoint;

    fn click(&mut self, button: MouseButton, at: ScreenPoint);

    fn click_with_modifier(&mut self, button: MouseButton, at: ScreenPoint, modifier: Modifier);

    fn move_pointer(&mut self, to: ScreenPoint);

    fn press_key(&mut self, key: Key);

    /// Switch the storage panel to `tab` (1-indexed).
    fn switch_tab(&mut self, tab: u8);

    fn storage_open(&self) -> bool;

    fn open_storage(&mut self) -> Result<()>;

    fn close_all_menus(&mut self);

    /// Cooperative pause giving the game time to apply the last input.
    fn settle(&mut self, pause: Duration);

    // ----- gold -----

    fn carried_gold(&self) -> u64;

    /// Maximum gold the character can carry.
    fn gold_capacity(&self) -> u64;

    /// Gold stored per storage tab, index 0 = tab 1.
    fn stored_gold(&self) -> Vec<u64>;

    /// Deposit carried gold into the currently selected tab.
    fn deposit_gold(&mut self);
}
