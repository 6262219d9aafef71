//! Stash classification.
//!
//! For a single item, decides whether it is banked, deliberately kept in the
//! workspace, or left alone. Tiers are evaluated in a fixed precedence order
//! and short-circuit on the first applicable rule; re-ordering them
//! mis-classifies items.

use crate::catalog::RecipeCatalog;
use crate::config::Profile;
use crate::item::{Item, LocationKind, Quality};
use crate::rules::{MatchedRule, RuleOracle};

/// Type-names that are never auto-moved, regardless of rules.
pub const PROTECTED_NAMES: &[&str] = &["TomeOfTownPortal", "TomeOfIdentify", "Key", "WirtsLeg"];

/// Classification outcome for one item.
///
/// `OverQuantity` is kept distinct from `Ignore`: the item fully matched a
/// rule but its quantity cap is exhausted, and collapsing that into either
/// neighbor loses the audit trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Verdict {
    /// Move to storage.
    Stash,
    /// Deliberately stays in the workspace (protected type, locked slot,
    /// potion).
    Keep,
    /// Not eligible for triage at all.
    Ignore,
    /// Rule matched but its quantity cap is exceeded; left alone.
    OverQuantity,
}

/// Verdict plus the matched-rule descriptor used for observability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub rule: Option<MatchedRule>,
}

impl Classification {
    fn of(verdict: Verdict) -> Self {
        Self {
            verdict,
            rule: None,
        }
    }

    fn with_rule(verdict: Verdict, rule: MatchedRule) -> Self {
        Self {
            verdict,
            rule: Some(rule),
        }
    }

    pub fn should_stash(&self) -> bool {
        self.verdict == Verdict::Stash
    }
}

/// Stash classifier over an immutable profile and recipe catalog.
pub struct Classifier<'a> {
    profile: &'a Profile,
    catalog: &'a RecipeCatalog,
}

impl<'a> Classifier<'a> {
    pub fn new(profile: &'a Profile, catalog: &'a RecipeCatalog) -> Self {
        Self { profile, catalog }
    }

    /// Classify one item.
    ///
    /// `stored` is the current storage snapshot (used to decide recipe
    /// reservation) and `first_pass` marks the bootstrap triage run, during
    /// which nothing owned by the user is allowed to reach the sell path.
    pub fn classify(
        &self,
        item: &Item,
        stored: &[Item],
        rules: &dyn RuleOracle,
        first_pass: bool,
    ) -> Classification {
        // 1. Quest-origin items are untouchable while the exemption is active.
        if self.profile.quest_exempt && item.quest_origin {
            return Classification::of(Verdict::Ignore);
        }

        // 2. Finished crafted artifacts are always banked.
        if item.crafted {
            return Classification::with_rule(
                Verdict::Stash,
                MatchedRule::reason("crafted artifact"),
            );
        }

        // 3. Ingredients of enabled recipes are shielded from the sell pass.
        if self.reserved_for_recipe(item, stored, rules) {
            return Classification::with_rule(
                Verdict::Stash,
                MatchedRule::reason("reserved for enabled recipe"),
            );
        }

        // 4. The small protected-type set is never auto-moved.
        if PROTECTED_NAMES.contains(&item.name.as_str()) {
            return Classification::of(Verdict::Keep);
        }

        // 5. Locked workspace slots and potions stay put.
        let in_locked_slot = item.location.kind == LocationKind::Workspace
            && self.profile.lock_mask.is_protected(item.location.position);
        if in_locked_slot || item.potion {
            return Classification::of(Verdict::Keep);
        }

        // 6. Bootstrap run: bank everything that got this far.
        if first_pass {
            return Classification::with_rule(Verdict::Stash, MatchedRule::reason("first run"));
        }

        // 7. Defer to the external rule engine.
        let evaluation = rules.evaluate(item);
        if evaluation.is_full_match() {
            if let Some(rule) = evaluation.rule {
                if rules.exceeds_quantity(&rule) {
                    return Classification::with_rule(Verdict::OverQuantity, rule);
                }
                return Classification::with_rule(Verdict::Stash, rule);
            }
            return Classification::of(Verdict::Stash);
        }

        Classification::of(Verdict::Ignore)
    }

    /// Tier 3 predicate.
    ///
    /// An item is recipe-reservable only at magic quality or below, only when
    /// some enabled recipe uses its type-name, and only while storage does not
    /// already hold a copy of that type-name failing the rule engine (such a
    /// copy shows the type is hoarding up beyond what the rules want kept).
    fn reserved_for_recipe(&self, item: &Item, stored: &[Item], rules: &dyn RuleOracle) -> bool {
        if item.quality > Quality::Magic {
            return false;
        }

        if !self
            .catalog
            .reserved_by_enabled(&item.name, &self.profile.enabled_recipes)
        {
            return false;
        }

        let stored_copy_fails_rules = stored
            .iter()
            .filter(|it| it.name == item.name)
            .any(|it| !rules.evaluate(it).is_full_match());

        !stored_copy_fails_rules
    }
}
