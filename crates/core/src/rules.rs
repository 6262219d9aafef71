//! Seam to the external keep/sell rule engine.
//!
//! The generic rule matcher scoring arbitrary items against user-authored
//! rules lives outside this system; the classifier consumes it only through
//! [`RuleOracle`].

use crate::item::Item;

/// Outcome of evaluating an item against the rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Every clause of some rule matched.
    FullMatch,
    /// A rule matched partially (base clauses only).
    PartialMatch,
    NoMatch,
}

/// Descriptor of the rule that matched, used purely for observability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedRule {
    /// Raw rule line as authored.
    pub line: String,
    /// Origin as `file:line`, empty for synthetic reasons.
    pub origin: String,
}

impl MatchedRule {
    pub fn new(line: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            origin: origin.into(),
        }
    }

    /// Descriptor carrying only a human-readable reason, no rule origin.
    pub fn reason(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            origin: String::new(),
        }
    }
}

/// Evaluation result: outcome plus the matched rule, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleEvaluation {
    pub outcome: MatchOutcome,
    pub rule: Option<MatchedRule>,
}

impl RuleEvaluation {
    pub fn no_match() -> Self {
        Self {
            outcome: MatchOutcome::NoMatch,
            rule: None,
        }
    }

    pub fn is_full_match(&self) -> bool {
        self.outcome == MatchOutcome::FullMatch
    }
}

/// External rule engine contract.
pub trait RuleOracle {
    /// Evaluate `item` against the full rule set.
    fn evaluate(&self, item: &Item) -> RuleEvaluation;

    /// Whether the quantity cap of `rule` is already exceeded. Items over the
    /// cap are deliberately not banked even when otherwise matched.
    fn exceeds_quantity(&self, rule: &MatchedRule) -> bool;
}

/// Rule oracle that never matches anything. Useful as a fallback and in
/// fixtures.
pub struct NeverMatches;

impl RuleOracle for NeverMatches {
    fn evaluate(&self, _item: &Item) -> RuleEvaluation {
        RuleEvaluation::no_match()
    }

    fn exceeds_quantity(&self, _rule: &MatchedRule) -> bool {
        false
    }
}
