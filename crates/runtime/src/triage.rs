//! Storage triage: classifying and banking workspace items.
//!
//! One triage run banks gold, compacts potions, then applies the classifier
//! over every workspace item and moves the `Stash` verdicts into storage,
//! advancing across tabs as they fill up.

use crucible_core::{
    Classification, Classifier, Item, LocationKind, Profile, RecipeCatalog, RuleOracle, Verdict,
};

use crate::errors::Result;
use crate::events::{EventSink, StashRecord};
use crate::session::{GameSession, MouseButton};
use crate::timing;
use crate::transfer::TransferOrchestrator;

/// General stash pass over the workspace.
pub struct StorageTriage<'a, S: GameSession> {
    session: &'a mut S,
    profile: &'a Profile,
    catalog: &'a RecipeCatalog,
    rules: &'a dyn RuleOracle,
    events: &'a dyn EventSink,
}

impl<'a, S: GameSession> StorageTriage<'a, S> {
    pub fn new(
        session: &'a mut S,
        profile: &'a Profile,
        catalog: &'a RecipeCatalog,
        rules: &'a dyn RuleOracle,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            session,
            profile,
            catalog,
            rules,
            events,
        }
    }

    /// Run one full triage pass.
    ///
    /// `first_run` marks the bootstrap pass for a character: everything the
    /// classifier lets through is banked regardless of rule outcomes, so
    /// nothing the user owns is silently sold later.
    pub fn run(&mut self, first_run: bool) -> Result<()> {
        tracing::debug!("checking for items to bank");
        if !self.triage_required(first_run) {
            return Ok(());
        }

        tracing::info!("banking items");
        if !self.session.storage_open() {
            self.session.open_storage()?;
        }

        self.bank_gold();
        self.reorder_potions();
        self.stash_pass(first_run)?;

        self.session.close_all_menus();
        Ok(())
    }

    /// Whether anything actually needs banking, so a no-op run never touches
    /// menus.
    fn triage_required(&self, first_run: bool) -> bool {
        let stored = self
            .session
            .items(&[LocationKind::Storage, LocationKind::SharedStorage]);
        let classifier = Classifier::new(self.profile, self.catalog);

        let any_stash = self
            .session
            .items(&[LocationKind::Workspace])
            .iter()
            .any(|item| {
                classifier
                    .classify(item, &stored, self.rules, first_run)
                    .should_stash()
            });
        if any_stash {
            return true;
        }

        let any_headroom = self
            .session
            .stored_gold()
            .iter()
            .any(|gold| *gold < Profile::GOLD_CAP_PER_TAB);
        self.session.carried_gold() > self.session.gold_capacity() && any_headroom
    }

    /// Deposit carried gold into tabs that still have headroom.
    fn bank_gold(&mut self) {
        if self.session.carried_gold() == 0 {
            return;
        }
        tracing::info!(gold = self.session.carried_gold(), "banking gold");

        let stored = self.session.stored_gold();
        for (index, gold) in stored.iter().enumerate() {
            self.session.refresh();
            if self.session.carried_gold() == 0 {
                return;
            }
            if *gold < Profile::GOLD_CAP_PER_TAB {
                self.session.switch_tab(index as u8 + 1);
                self.session.deposit_gold();
                self.session.settle(timing::SETTLE_MOVE);
            }
        }

        tracing::info!("all storage tabs are at the gold cap");
    }

    /// Right-click potions sitting in protected slots so belts refill before
    /// the stash pass runs.
    fn reorder_potions(&mut self) {
        for item in self.session.items(&[LocationKind::Workspace]) {
            if !item.potion || !self.profile.lock_mask.is_protected(item.location.position) {
                continue;
            }
            let at = self.session.screen_position(&item);
            if at.is_unresolved() {
                continue;
            }
            self.session.settle(timing::SETTLE_HOVER);
            self.session.click(MouseButton::Right, at);
            self.session.settle(timing::SETTLE_ACTION);
        }
    }

    /// Classify every workspace item and bank the `Stash` verdicts.
    ///
    /// Also used by the crafting driver as the cleanup pass between crafting
    /// rounds, so leftover staged items do not block future space checks.
    pub(crate) fn stash_pass(&mut self, first_run: bool) -> Result<()> {
        if !self.session.storage_open() {
            self.session.open_storage()?;
        }

        let mut current_tab: u8 = if self.profile.bank_to_shared { 2 } else { 1 };
        self.session.switch_tab(current_tab);

        let classifier = Classifier::new(self.profile, self.catalog);
        let stored = self
            .session
            .items(&[LocationKind::Storage, LocationKind::SharedStorage]);

        for item in self.session.items(&[LocationKind::Workspace]) {
            let classification = classifier.classify(&item, &stored, self.rules, first_run);
            match classification.verdict {
                Verdict::Stash => {}
                Verdict::OverQuantity => {
                    tracing::debug!(
                        item = %item.name,
                        "rule matched but quantity cap reached, leaving item"
                    );
                    continue;
                }
                Verdict::Keep | Verdict::Ignore => {
                    tracing::debug!(
                        item = %item.name,
                        verdict = %classification.verdict,
                        "leaving item"
                    );
                    continue;
                }
            }

            loop {
                let mut transfer = TransferOrchestrator::new(&mut *self.session, self.profile);
                if transfer.stash_attempt(&item) {
                    self.report_stashed(&item, &classification, first_run);
                    break;
                }
                if current_tab >= self.profile.max_storage_tabs {
                    tracing::warn!(item = %item.name, "last storage tab is full");
                    break;
                }
                tracing::debug!(tab = current_tab, "tab is full, switching to next one");
                current_tab += 1;
                self.session.switch_tab(current_tab);
            }
        }

        Ok(())
    }

    fn report_stashed(&self, item: &Item, classification: &Classification, first_run: bool) {
        let rule = classification
            .rule
            .as_ref()
            .map(|r| r.line.as_str())
            .unwrap_or_default();

        // First-run banking of pre-owned items is logged but never published
        // as a drop event.
        if first_run {
            tracing::info!(
                item = %item.name,
                quality = %item.quality,
                "item banked during first run"
            );
            return;
        }

        tracing::info!(
            item = %item.name,
            quality = %item.quality,
            rule,
            "item banked"
        );
        self.events.item_stashed(StashRecord {
            item: item.name.clone(),
            quality: item.quality,
            rule: classification.rule.clone(),
            stats: item.stats.clone(),
        });
    }
}
