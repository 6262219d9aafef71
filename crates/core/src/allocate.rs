//! Item-to-recipe allocation.
//!
//! Selects one base item plus exactly the required count of every component
//! from a snapshot pool, guaranteeing no item is claimed twice within a recipe
//! or across a full pass. Allocation is base-first: a recipe missing its base
//! never tentatively claims components.

use std::collections::BTreeSet;

use crate::catalog::Recipe;
use crate::item::{Item, ItemId};

/// Item ids already promised to earlier recipes in the current pass.
///
/// Owned by a single pass of the crafting driver and discarded when the pass
/// finishes; there is no ambient global tracking.
#[derive(Clone, Debug, Default)]
pub struct ConsumedSet {
    ids: BTreeSet<ItemId>,
}

impl ConsumedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn mark(&mut self, id: ItemId) {
        self.ids.insert(id);
    }

    pub fn mark_all<'a>(&mut self, items: impl IntoIterator<Item = &'a Item>) {
        for item in items {
            self.mark(item.id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Select items satisfying `recipe` from `pool`, skipping anything in
/// `consumed`.
///
/// Iteration follows the snapshot's insertion order; the first eligible match
/// wins. Returns `None` without reserving anything when the base or any
/// component count cannot be met: a partial set is never staged. On success
/// the caller is responsible for marking every returned id in `consumed`
/// before evaluating the next recipe.
pub fn allocate(pool: &[Item], recipe: &Recipe, consumed: &ConsumedSet) -> Option<Vec<Item>> {
    let mut claimed: BTreeSet<ItemId> = BTreeSet::new();
    let mut selected: Vec<Item> = Vec::new();

    // Base first. A crafted artifact can never be reused as a base.
    let base = pool.iter().find(|item| {
        !consumed.contains(item.id) && !item.crafted && recipe.accepts_base(&item.name)
    })?;
    claimed.insert(base.id);
    selected.push(base.clone());

    for (component, needed) in recipe.component_counts() {
        let mut found = 0usize;
        for item in pool {
            if consumed.contains(item.id) || claimed.contains(&item.id) {
                continue;
            }
            if item.name == component {
                claimed.insert(item.id);
                selected.push(item.clone());
                found += 1;
                if found == needed {
                    break;
                }
            }
        }
        if found < needed {
            return None;
        }
    }

    Some(selected)
}
