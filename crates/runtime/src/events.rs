//! Observability sink for stash and craft outcomes.
//!
//! Fire-and-forget: sinks never affect control flow. A failing sink is the
//! sink implementation's problem, not the automaton's.

use std::collections::BTreeMap;

use crucible_core::{Item, MatchedRule, Quality};

/// Record of a confirmed stash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StashRecord {
    pub item: String,
    pub quality: Quality,
    /// Rule descriptor that justified the stash, if any.
    pub rule: Option<MatchedRule>,
    /// Raw stat entries of the banked item, for human-readable reports.
    pub stats: BTreeMap<String, i64>,
}

/// Consumer of human-readable automation events.
pub trait EventSink {
    fn item_stashed(&self, record: StashRecord);

    fn item_crafted(&self, recipe: &str, item: &Item);
}

/// Sink that discards everything.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn item_stashed(&self, _record: StashRecord) {}

    fn item_crafted(&self, _recipe: &str, _item: &Item) {}
}
