//! Scripted fake session and fixtures for runtime integration tests.
//!
//! The fake applies item moves instantly and deterministically so tests can
//! assert on the exact input sequence the orchestrators produce.

// Each test binary compiles this module separately and uses a different slice
// of it.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::time::Duration;

use crucible_core::{
    GridPosition, Item, ItemId, Location, LocationKind, MatchOutcome, MatchedRule, Profile,
    Quality, RuleEvaluation, RuleOracle,
};
use crucible_runtime::{
    EventSink, GameSession, Key, Modifier, MouseButton, Result, ScreenPoint, StashRecord,
};

/// Storage-resident item fixture; tab 1 is personal storage, higher tabs are
/// shared pages.
pub fn storage_item(id: u32, name: &str, tab: u8) -> Item {
    let location = if tab == 1 {
        Location::new(LocationKind::Storage, 0, GridPosition::default())
    } else {
        Location::new(LocationKind::SharedStorage, tab - 1, GridPosition::default())
    };
    Item::new(ItemId(id), name, Quality::Normal).with_location(location)
}

pub fn workspace_item(id: u32, name: &str, x: u8, y: u8) -> Item {
    Item::new(ItemId(id), name, Quality::Normal).with_location(Location::new(
        LocationKind::Workspace,
        0,
        GridPosition::new(x, y),
    ))
}

/// Deterministic in-memory game session.
pub struct FakeSession {
    items: Vec<Item>,
    storage_open: bool,
    current_tab: u8,
    /// Tabs that refuse to accept items.
    full_tabs: BTreeSet<u8>,
    /// Items whose moves never take effect.
    stuck: BTreeSet<ItemId>,
    /// Ids that can never be resolved on screen.
    unresolvable: BTreeSet<ItemId>,
    /// Component applications required before the base flips to crafted.
    craft_threshold: usize,
    applied: usize,
    pending_component: Option<ItemId>,
    next_slot: u8,

    pub carried_gold: u64,
    pub gold_capacity: u64,
    pub stored_gold: Vec<u64>,

    // recorded interactions
    pub tab_switches: Vec<u8>,
    pub modifier_clicks: Vec<ItemId>,
    pub right_clicks: Vec<ItemId>,
    pub deposits: Vec<u8>,
    pub settled: Duration,
}

/// Install the test subscriber once so `RUST_LOG` surfaces driver tracing.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl FakeSession {
    pub fn new(items: Vec<Item>) -> Self {
        init_tracing();
        Self {
            items,
            storage_open: false,
            current_tab: 1,
            full_tabs: BTreeSet::new(),
            stuck: BTreeSet::new(),
            unresolvable: BTreeSet::new(),
            craft_threshold: usize::MAX,
            applied: 0,
            pending_component: None,
            next_slot: 0,
            carried_gold: 0,
            gold_capacity: u64::MAX,
            stored_gold: vec![0; 4],
            tab_switches: Vec::new(),
            modifier_clicks: Vec::new(),
            right_clicks: Vec::new(),
            deposits: Vec::new(),
            settled: Duration::ZERO,
        }
    }

    pub fn with_full_tabs(mut self, tabs: &[u8]) -> Self {
        self.full_tabs = tabs.iter().copied().collect();
        self
    }

    pub fn with_stuck(mut self, ids: &[u32]) -> Self {
        self.stuck = ids.iter().map(|id| ItemId(*id)).collect();
        self
    }

    pub fn with_unresolvable(mut self, ids: &[u32]) -> Self {
        self.unresolvable = ids.iter().map(|id| ItemId(*id)).collect();
        self
    }

    pub fn with_craft_threshold(mut self, components: usize) -> Self {
        self.craft_threshold = components;
        self
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|it| it.id == ItemId(id))
    }

    pub fn is_storage_open(&self) -> bool {
        self.storage_open
    }

    fn index_at(&self, at: ScreenPoint) -> Option<usize> {
        if at.is_unresolved() || (at.x - 1000) % 10 != 0 {
            return None;
        }
        let id = ItemId(((at.x - 1000) / 10) as u32);
        self.items.iter().position(|it| it.id == id)
    }

    fn take_workspace_slot(&mut self) -> GridPosition {
        let slot = self.next_slot;
        self.next_slot += 1;
        GridPosition::new(slot % 10, slot / 10)
    }

    /// Transfer the item at `at` toward the other side of the storage panel.
    fn transfer_click(&mut self, at: ScreenPoint) {
        let Some(index) = self.index_at(at) else {
            return;
        };
        let id = self.items[index].id;
        self.modifier_clicks.push(id);

        if self.stuck.contains(&id) || !self.storage_open {
            return;
        }

        let location = self.items[index].location;
        if location.is_storage() {
            if location.storage_tab() != Some(self.current_tab) {
                return;
            }
            let position = self.take_workspace_slot();
            self.items[index].location =
                Location::new(LocationKind::Workspace, 0, position);
        } else if location.kind == LocationKind::Workspace {
            if self.full_tabs.contains(&self.current_tab) {
                return;
            }
            self.items[index].location = if self.current_tab == 1 {
                Location::new(LocationKind::Storage, 0, GridPosition::default())
            } else {
                Location::new(
                    LocationKind::SharedStorage,
                    self.current_tab - 1,
                    GridPosition::default(),
                )
            };
        }
    }

    /// Crafting protocol: a plain click picks up a component, the next plain
    /// click applies it onto the clicked base.
    fn craft_click(&mut self, at: ScreenPoint) {
        let Some(index) = self.index_at(at) else {
            return;
        };
        match self.pending_component.take() {
            None => self.pending_component = Some(self.items[index].id),
            Some(component) => {
                let base_id = self.items[index].id;
                self.items.retain(|it| it.id != component);
                self.applied += 1;
                if self.applied >= self.craft_threshold {
                    if let Some(base) = self.items.iter_mut().find(|it| it.id == base_id) {
                        base.crafted = true;
                    }
                }
            }
        }
    }
}

impl GameSession for FakeSession {
    fn items(&self, kinds: &[LocationKind]) -> Vec<Item> {
        self.items
            .iter()
            .filter(|it| kinds.contains(&it.location.kind))
            .cloned()
            .collect()
    }

    fn refresh(&mut self) {}

    fn screen_position(&self, item: &Item) -> ScreenPoint {
        if self.unresolvable.contains(&item.id) {
            return ScreenPoint::UNRESOLVED;
        }
        ScreenPoint::new(1000 + item.id.0 as i32 * 10, 600)
    }

    fn click(&mut self, button: MouseButton, at: ScreenPoint) {
        match button {
            MouseButton::Left => self.craft_click(at),
            MouseButton::Right => {
                if let Some(index) = self.index_at(at) {
                    self.right_clicks.push(self.items[index].id);
                }
            }
        }
    }

    fn click_with_modifier(&mut self, _button: MouseButton, at: ScreenPoint, _modifier: Modifier) {
        self.transfer_click(at);
    }

    fn move_pointer(&mut self, _to: ScreenPoint) {}

    fn press_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.storage_open = false;
        }
    }

    fn switch_tab(&mut self, tab: u8) {
        self.current_tab = tab;
        self.tab_switches.push(tab);
    }

    fn storage_open(&self) -> bool {
        self.storage_open
    }

    fn open_storage(&mut self) -> Result<()> {
        self.storage_open = true;
        Ok(())
    }

    fn close_all_menus(&mut self) {
        self.storage_open = false;
    }

    fn settle(&mut self, pause: Duration) {
        self.settled += pause;
    }

    fn carried_gold(&self) -> u64 {
        self.carried_gold
    }

    fn gold_capacity(&self) -> u64 {
        self.gold_capacity
    }

    fn stored_gold(&self) -> Vec<u64> {
        self.stored_gold.clone()
    }

    fn deposit_gold(&mut self) {
        let index = (self.current_tab - 1) as usize;
        let Some(stored) = self.stored_gold.get_mut(index) else {
            return;
        };
        if *stored >= Profile::GOLD_CAP_PER_TAB {
            return;
        }
        let amount = self.carried_gold.min(Profile::GOLD_CAP_PER_TAB - *stored);
        *stored += amount;
        self.carried_gold -= amount;
        self.deposits.push(self.current_tab);
    }
}

/// Sink recording everything it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub stashed: RefCell<Vec<StashRecord>>,
    pub crafted: RefCell<Vec<String>>,
}

impl EventSink for RecordingSink {
    fn item_stashed(&self, record: StashRecord) {
        self.stashed.borrow_mut().push(record);
    }

    fn item_crafted(&self, recipe: &str, _item: &Item) {
        self.crafted.borrow_mut().push(recipe.to_string());
    }
}

/// Rule oracle with a fixed answer.
pub struct FixedRules {
    pub outcome: MatchOutcome,
    pub over_quantity: bool,
}

impl FixedRules {
    pub fn full_match() -> Self {
        Self {
            outcome: MatchOutcome::FullMatch,
            over_quantity: false,
        }
    }

    pub fn over_quantity() -> Self {
        Self {
            outcome: MatchOutcome::FullMatch,
            over_quantity: true,
        }
    }
}

impl RuleOracle for FixedRules {
    fn evaluate(&self, _item: &Item) -> RuleEvaluation {
        RuleEvaluation {
            outcome: self.outcome,
            rule: match self.outcome {
                MatchOutcome::FullMatch => {
                    Some(MatchedRule::new("[name] == anything", "keep.rules:7"))
                }
                _ => None,
            },
        }
    }

    fn exceeds_quantity(&self, _rule: &MatchedRule) -> bool {
        self.over_quantity
    }
}
