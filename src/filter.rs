//! Pure filtering over the recipe collection.
//!
//! Every function borrows the collection and returns references in the
//! original collection order.

use std::collections::BTreeSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Recipe;

/// Type choice that disables type filtering
pub const ALL_TYPES: &str = "All";

/// Difficulty levels offered to the user, in display order
pub const DIFFICULTY_LEVELS: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Default and upper bound for the cooking time ceiling, in minutes
pub const MAX_COOKING_TIME: u32 = 60;

/// Find recipes containing at least one of `ingredients`.
///
/// Comparison is exact after trimming and lower-casing the input and
/// lower-casing the recipe's ingredients. Blank entries never match. When
/// `recipe_type` is given and is not [`ALL_TYPES`], the recipe's type must
/// also equal it exactly.
pub fn search_recipes<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    ingredients: &[S],
    recipe_type: Option<&str>,
) -> Vec<&'a Recipe> {
    let wanted: Vec<String> = ingredients
        .iter()
        .map(|ing| ing.as_ref().trim().to_lowercase())
        .filter(|ing| !ing.is_empty())
        .collect();

    let matches: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| has_any_ingredient(recipe, &wanted))
        .filter(|recipe| type_matches(recipe, recipe_type))
        .collect();

    debug!(
        "Ingredient search for {:?} (type {:?}) matched {} of {} recipes",
        wanted,
        recipe_type,
        matches.len(),
        recipes.len()
    );
    matches
}

fn has_any_ingredient(recipe: &Recipe, wanted: &[String]) -> bool {
    recipe
        .ingredients
        .iter()
        .map(|ing| ing.to_lowercase())
        .any(|ing| wanted.contains(&ing))
}

fn type_matches(recipe: &Recipe, recipe_type: Option<&str>) -> bool {
    match recipe_type {
        Some(t) if t != ALL_TYPES => recipe.recipe_type == t,
        _ => true,
    }
}

/// Keep only recipes of `recipe_type`; `None` or [`ALL_TYPES`] keeps everything.
pub fn filter_by_type<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    recipe_type: Option<&str>,
) -> Vec<&'a Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| type_matches(recipe, recipe_type))
        .collect()
}

/// Distinct recipe types sorted ascending, preceded by [`ALL_TYPES`].
pub fn get_recipe_types(recipes: &[Recipe]) -> Vec<String> {
    let types: BTreeSet<&str> = recipes.iter().map(|r| r.recipe_type.as_str()).collect();

    std::iter::once(ALL_TYPES)
        .chain(types)
        .map(str::to_string)
        .collect()
}

/// Split comma-separated user input into trimmed, non-empty ingredients.
pub fn parse_ingredient_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|ing| !ing.is_empty())
        .map(str::to_string)
        .collect()
}

/// Difficulty set and cooking time ceiling applied after matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Allowed difficulty values, compared exactly
    pub difficulties: Vec<String>,
    /// Inclusive upper bound in minutes
    pub max_cooking_time: u32,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self {
            difficulties: DIFFICULTY_LEVELS.iter().map(|d| d.to_string()).collect(),
            max_cooking_time: MAX_COOKING_TIME,
        }
    }
}

impl RecipeFilter {
    pub fn new(
        difficulties: impl IntoIterator<Item = impl Into<String>>,
        max_cooking_time: u32,
    ) -> Self {
        Self {
            difficulties: difficulties.into_iter().map(Into::into).collect(),
            max_cooking_time,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.difficulties.iter().any(|d| *d == recipe.difficulty)
            && recipe.cooking_time <= self.max_cooking_time
    }

    pub fn apply<'a>(&self, recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<&'a Recipe> {
        recipes.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Pick one recipe uniformly at random from the whole collection.
///
/// Returns `None` only when `recipes` is empty.
pub fn suggest_recipe<'a, R: Rng + ?Sized>(
    recipes: &'a [Recipe],
    rng: &mut R,
) -> Option<&'a Recipe> {
    recipes.choose(rng)
}
