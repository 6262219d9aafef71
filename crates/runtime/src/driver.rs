//! Crafting driver: the top-level pass state machine.
//!
//! One pass evaluates every enabled recipe exactly once in catalog order,
//! re-reading storage fresh before each allocation. Passes repeat as long as
//! at least one recipe made progress, so a stash holding materials for two
//! copies crafts both; a pass with zero progress ends the loop.

use std::collections::BTreeSet;

use crucible_core::{
    ConsumedSet, Item, LocationKind, Profile, Recipe, RecipeCatalog, RuleOracle, allocate,
};

use crate::errors::{DriverError, Result};
use crate::events::EventSink;
use crate::session::{GameSession, MouseButton};
use crate::timing;
use crate::transfer::TransferOrchestrator;
use crate::triage::StorageTriage;

/// Phases of one crafting pass, for observability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PassState {
    ScanningRecipes,
    Allocating,
    Gating,
    Staging,
    Crafting,
    Returning,
    Idle,
}

/// Top-level crafting loop over a [`GameSession`].
pub struct CraftingDriver<'a, S: GameSession> {
    session: &'a mut S,
    profile: &'a Profile,
    catalog: &'a RecipeCatalog,
    rules: &'a dyn RuleOracle,
    events: &'a dyn EventSink,
}

impl<'a, S: GameSession> CraftingDriver<'a, S> {
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

    /// Run crafting passes until no recipe can make further progress.
    ///
    /// Workspace fullness is an expected operating condition: when the
    /// free-space gate fails mid-pass the driver returns cleanly instead of
    /// erroring. Only an exhausted storage (no tab accepted a crafted
    /// result) aborts the pass with an error.
    pub fn run_crafting_pass(&mut self) -> Result<()> {
        if self.profile.enabled_recipes.is_empty() {
            tracing::debug!("no recipes enabled, skipping crafting");
            return Ok(());
        }
        if !self.profile.lock_mask.has_free_block(Profile::STAGING_COLS) {
            tracing::debug!("no free staging block, skipping crafting");
            return Ok(());
        }

        loop {
            tracing::debug!(state = %PassState::ScanningRecipes, recipes = self.catalog.len());
            let mut progressed = false;
            let mut consumed = ConsumedSet::new();

            for recipe in self.catalog.iter() {
                if !self.profile.recipe_enabled(&recipe.name) {
                    continue;
                }

                // Fresh snapshot per recipe; state is never reused.
                self.session.refresh();
                let pool = self
                    .session
                    .items(&[LocationKind::Storage, LocationKind::SharedStorage]);

                tracing::debug!(state = %PassState::Allocating, recipe = %recipe.name, pool = pool.len());
                let Some(materials) = allocate(&pool, recipe, &consumed) else {
                    tracing::debug!(recipe = %recipe.name, "missing materials, skipping recipe");
                    continue;
                };

                tracing::debug!(state = %PassState::Gating, recipe = %recipe.name);
                if !self.profile.lock_mask.has_free_block(Profile::STAGING_COLS) {
                    tracing::info!("workspace has no free staging block, ending pass early");
                    return Ok(());
                }

                consumed.mark_all(&materials);
                for item in &materials {
                    tracing::debug!(item = %item.name, id = %item.id, "claimed as material");
                }

                tracing::debug!(state = %PassState::Staging, recipe = %recipe.name);
                let mut transfer = TransferOrchestrator::new(&mut *self.session, self.profile);
                if let Err(error) = transfer.move_to_workspace(&materials) {
                    tracing::error!(recipe = %recipe.name, %error, "failed to stage materials");
                    continue;
                }

                if let Err(error) = self.apply_components(recipe) {
                    tracing::error!(recipe = %recipe.name, %error, "craft failed");
                    self.session.settle(timing::SETTLE_ACTION);
                    continue;
                }

                tracing::debug!(state = %PassState::Returning, recipe = %recipe.name);
                let mut transfer = TransferOrchestrator::new(&mut *self.session, self.profile);
                match transfer.return_crafted() {
                    Ok(item) => self.events.item_crafted(&recipe.name, &item),
                    Err(error @ DriverError::StorageExhausted { .. }) => return Err(error),
                    Err(error) => {
                        tracing::error!(recipe = %recipe.name, %error, "failed to bank crafted result");
                    }
                }

                progressed = true;
                self.session.settle(timing::SETTLE_PASS);
            }

            if !progressed {
                break;
            }

            // Leftovers staged incidentally must not block the next space
            // check.
            self.cleanup_workspace()?;
            self.session.settle(timing::SETTLE_ACTION);
        }

        tracing::debug!(state = %PassState::Idle, "no recipe made progress");
        self.session.close_all_menus();
        Ok(())
    }

    /// Apply each staged component onto the staged base, in recipe order.
    fn apply_components(&mut self, recipe: &Recipe) -> Result<()> {
        tracing::debug!(state = %PassState::Crafting, recipe = %recipe.name);

        let staged = self.session.items(&[LocationKind::Workspace]);
        let base = staged
            .iter()
            .find(|it| recipe.accepts_base(&it.name) && !it.crafted)
            .cloned()
            .ok_or_else(|| DriverError::StagingIncomplete {
                recipe: recipe.name.clone(),
            })?;

        let mut claimed: BTreeSet<_> = BTreeSet::new();
        claimed.insert(base.id);
        let mut components: Vec<Item> = Vec::with_capacity(recipe.components.len());
        for name in &recipe.components {
            let Some(found) = staged
                .iter()
                .find(|it| it.name == *name && !claimed.contains(&it.id))
            else {
                return Err(DriverError::StagingIncomplete {
                    recipe: recipe.name.clone(),
                });
            };
            claimed.insert(found.id);
            components.push(found.clone());
        }

        let base_at = self.session.screen_position(&base);
        if base_at.is_unresolved() {
            return Err(DriverError::PositionUnresolved { item: base.name });
        }

        for component in &components {
            let at = self.session.screen_position(component);
            if at.is_unresolved() {
                return Err(DriverError::PositionUnresolved {
                    item: component.name.clone(),
                });
            }
            self.session.move_pointer(at);
            self.session.settle(timing::SETTLE_ACTION);
            self.session.click(MouseButton::Left, at);
            self.session.settle(timing::SETTLE_ACTION);
            self.session.move_pointer(base_at);
            self.session.settle(timing::SETTLE_ACTION);
            self.session.click(MouseButton::Left, base_at);
            self.session.settle(timing::SETTLE_ACTION);
        }

        self.session.settle(timing::SETTLE_PASS);
        self.session.refresh();
        tracing::info!(recipe = %recipe.name, base = %base.name, "craft applied");
        Ok(())
    }

    /// Classifier sweep over the workspace between crafting rounds.
    fn cleanup_workspace(&mut self) -> Result<()> {
        let mut triage = StorageTriage::new(
            &mut *self.session,
            self.profile,
            self.catalog,
            self.rules,
            self.events,
        );
        triage.stash_pass(false)
    }
}
