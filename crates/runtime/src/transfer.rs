//! Physical item movement between storage and workspace.
//!
//! There is no transactional move: the orchestrator clicks, waits a settle
//! delay, re-reads state, and treats an item as moved only when it no longer
//! appears at its prior location. Every public operation is idempotent-safe
//! through that confirm-by-reread loop.

use std::collections::BTreeSet;

use crucible_core::{Item, ItemId, LocationKind, Profile};

use crate::errors::{DriverError, Result};
use crate::session::{GameSession, Modifier, MouseButton};
use crate::timing;

/// Bounded retries for a single unconfirmed move.
pub const MOVE_RETRIES: u32 = 3;

/// Drives item transfers over a [`GameSession`].
pub struct TransferOrchestrator<'a, S: GameSession> {
    session: &'a mut S,
    profile: &'a Profile,
}

impl<'a, S: GameSession> TransferOrchestrator<'a, S> {
    pub fn new(session: &'a mut S, profile: &'a Profile) -> Self {
        Self { session, profile }
    }

    fn ensure_storage_open(&mut self) -> Result<()> {
        if !self.session.storage_open() {
            self.session.open_storage()?;
        }
        Ok(())
    }

    fn still_in_storage(&self, id: ItemId) -> bool {
        self.session
            .items(&[LocationKind::Storage, LocationKind::SharedStorage])
            .iter()
            .any(|it| it.id == id)
    }

    fn in_workspace(&self, id: ItemId) -> bool {
        self.session
            .items(&[LocationKind::Workspace])
            .iter()
            .any(|it| it.id == id)
    }

    /// Move the given storage-resident items into the workspace.
    ///
    /// Input is deduplicated by identity first: an upstream bug yielding the
    /// same id twice must not produce a double click. Each move is confirmed
    /// by re-reading state; an unconfirmed move is retried up to
    /// [`MOVE_RETRIES`] times before the whole operation fails for this
    /// recipe attempt.
    pub fn move_to_workspace(&mut self, items: &[Item]) -> Result<()> {
        self.ensure_storage_open()?;

        let mut seen: BTreeSet<ItemId> = BTreeSet::new();
        for item in items {
            if !seen.insert(item.id) {
                tracing::debug!(item = %item.name, id = %item.id, "duplicate id in transfer set, skipping");
                continue;
            }

            let Some(tab) = item.location.storage_tab() else {
                tracing::debug!(item = %item.name, "not storage-resident, skipping");
                continue;
            };
            self.session.switch_tab(tab);

            let mut attempts = 0u32;
            loop {
                attempts += 1;

                let at = self.session.screen_position(item);
                if at.is_unresolved() {
                    return Err(DriverError::PositionUnresolved {
                        item: item.name.clone(),
                    });
                }

                tracing::debug!(item = %item.name, id = %item.id, tab, attempts, "moving item to workspace");
                self.session
                    .click_with_modifier(MouseButton::Left, at, Modifier::Ctrl);
                self.session.settle(timing::SETTLE_MOVE);
                self.session.refresh();

                if !self.still_in_storage(item.id) {
                    break;
                }
                if attempts >= MOVE_RETRIES {
                    return Err(DriverError::TransferUnconfirmed {
                        item: item.name.clone(),
                        attempts,
                    });
                }
            }
        }

        self.session.refresh();
        self.session.settle(timing::SETTLE_ACTION);
        Ok(())
    }

    /// Return the single crafted artifact from the workspace to storage.
    ///
    /// Probes storage tabs in order, re-checking workspace membership after
    /// each attempt, and stops at the first tab where the item is confirmed
    /// gone. If no tab accepts it the whole crafting cycle is over: storage
    /// is considered full.
    pub fn return_crafted(&mut self) -> Result<Item> {
        self.ensure_storage_open()?;

        let crafted: Vec<Item> = self
            .session
            .items(&[LocationKind::Workspace])
            .into_iter()
            .filter(|it| it.crafted)
            .collect();

        let Some(item) = crafted.first().cloned() else {
            return Err(DriverError::CraftedResultMissing);
        };
        if crafted.len() > 1 {
            tracing::warn!(
                count = crafted.len(),
                "multiple crafted results in workspace, returning the first"
            );
        }

        let tabs = self.profile.max_storage_tabs;
        for tab in 1..=tabs {
            self.session.switch_tab(tab);

            let at = self.session.screen_position(&item);
            if at.is_unresolved() {
                tracing::warn!(item = %item.name, "could not resolve crafted item position");
                continue;
            }

            self.session
                .click_with_modifier(MouseButton::Left, at, Modifier::Shift);
            self.session.settle(timing::SETTLE_RETURN);
            self.session.refresh();

            if !self.in_workspace(item.id) {
                tracing::info!(item = %item.name, tab, "crafted result banked");
                return Ok(item);
            }
        }

        tracing::error!(item = %item.name, "no storage tab accepted the crafted result");
        Err(DriverError::StorageExhausted {
            item: item.name.clone(),
            tabs,
        })
    }

    /// Attempt to bank one workspace item into the currently selected tab.
    ///
    /// Returns whether the item is confirmed gone from the workspace. A
    /// `false` means the current tab is full (or the item could not be
    /// located) and the caller should advance to the next tab.
    pub fn stash_attempt(&mut self, item: &Item) -> bool {
        let at = self.session.screen_position(item);
        if at.is_unresolved() {
            tracing::warn!(item = %item.name, "could not resolve item position, skipping");
            return false;
        }

        self.session.move_pointer(at);
        self.session.settle(timing::SETTLE_HOVER);
        self.session
            .click_with_modifier(MouseButton::Left, at, Modifier::Ctrl);
        self.session.settle(timing::SETTLE_MOVE);
        self.session.refresh();

        !self.in_workspace(item.id)
    }
}
