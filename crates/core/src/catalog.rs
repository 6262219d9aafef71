//! Static recipe table.
//!
//! Recipes are loaded once at process start and never mutated. Component
//! order is significant: duplicates are allowed and the craft applies them in
//! declaration order.

/// A named recipe: a base-item whitelist plus an ordered multiset of required
/// components.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub name: String,
    /// Required component type-names, in application order. Duplicates count.
    pub components: Vec<String>,
    /// Acceptable base-item type-names.
    pub bases: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        components: Vec<String>,
        bases: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            components,
            bases,
        }
    }

    /// Required component types with their counts, in first-occurrence order.
    pub fn component_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for component in &self.components {
            match counts.iter_mut().find(|(name, _)| *name == component) {
                Some((_, count)) => *count += 1,
                None => counts.push((component, 1)),
            }
        }
        counts
    }

    pub fn accepts_base(&self, type_name: &str) -> bool {
        self.bases.iter().any(|b| b == type_name)
    }

    /// Whether `type_name` appears anywhere in this recipe (base or component).
    pub fn uses(&self, type_name: &str) -> bool {
        self.accepts_base(type_name) || self.components.iter().any(|c| c == type_name)
    }
}

/// Immutable catalog of recipes, iterated in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Whether `type_name` is used by any recipe in `enabled`.
    pub fn reserved_by_enabled(&self, type_name: &str, enabled: &[String]) -> bool {
        self.recipes
            .iter()
            .filter(|r| enabled.iter().any(|name| *name == r.name))
            .any(|r| r.uses(type_name))
    }
}
