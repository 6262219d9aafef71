//! Recipe catalog loader and built-in defaults.

use std::path::Path;

use crucible_core::{Recipe, RecipeCatalog};

use crate::formats::RecipeFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for recipe definitions from TOML files.
pub struct RecipeLoader;

impl RecipeLoader {
    /// Load a catalog from a TOML file of `[[recipe]]` tables.
    ///
    /// Declaration order in the file becomes catalog order, which fixes the
    /// order recipes are attempted in each pass.
    pub fn load(path: &Path) -> LoadResult<RecipeCatalog> {
        let content = read_file(path)?;
        let file: RecipeFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe TOML: {}", e))?;

        let mut recipes = Vec::with_capacity(file.recipe.len());
        for spec in file.recipe {
            anyhow::ensure!(
                !spec.components.is_empty(),
                "recipe {} has no components",
                spec.name
            );
            anyhow::ensure!(!spec.bases.is_empty(), "recipe {} has no bases", spec.name);
            recipes.push(Recipe::new(spec.name, spec.components, spec.bases));
        }

        Ok(RecipeCatalog::new(recipes))
    }
}

/// Built-in catalog used when no recipe file is deployed.
pub fn default_catalog() -> RecipeCatalog {
    fn recipe(name: &str, components: &[&str], bases: &[&str]) -> Recipe {
        Recipe::new(
            name,
            components.iter().map(|s| s.to_string()).collect(),
            bases.iter().map(|s| s.to_string()).collect(),
        )
    }

    RecipeCatalog::new(vec![
        recipe(
            "Stealth",
            &["TalRune", "EthRune"],
            &[
                "QuiltedArmor",
                "StuddedLeather",
                "HardLeatherArmor",
                "LeatherArmor",
            ],
        ),
        recipe(
            "Spirit Sword",
            &["TalRune", "ThulRune", "OrtRune", "AmnRune"],
            &["CrystalSword"],
        ),
        recipe("Lore", &["OrtRune", "SolRune"], &["Cap"]),
        recipe(
            "Insight",
            &["RalRune", "TirRune", "TalRune", "SolRune"],
            &["Voulge", "Halberd", "Poleaxe", "Scythe"],
        ),
        recipe(
            "Rhyme",
            &["ShaelRune", "EthRune"],
            &["SmallShield", "BoneShield"],
        ),
    ])
}
