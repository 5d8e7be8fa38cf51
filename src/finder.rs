use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use crate::error::FinderError;
use crate::filter::{
    filter_by_type, parse_ingredient_input, search_recipes, suggest_recipe, RecipeFilter,
    ALL_TYPES, MAX_COOKING_TIME,
};
use crate::model::Recipe;

/// What the user asked for
#[derive(Debug, Clone)]
pub enum SearchMode {
    /// Comma-separated ingredient text
    Ingredients(String),
    /// Every recipe passing the type and secondary filters
    ShowAll,
}

/// Result of running a query against the collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FindOutcome<'a> {
    /// Ingredient search found recipes
    Matches { recipes: Vec<&'a Recipe> },
    /// Ingredient search found nothing; a random recipe from the whole collection
    NoMatches { suggestion: Option<&'a Recipe> },
    /// Show-all listing, possibly empty
    Listing { recipes: Vec<&'a Recipe> },
}

/// Builder for a single recipe query
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    mode: Option<SearchMode>,
    recipe_type: Option<String>,
    difficulties: Option<Vec<String>>,
    max_cooking_time: Option<u32>,
}

impl RecipeFinderBuilder {
    /// Search by comma-separated ingredients
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().ingredients("chicken, rice, garlic");
    /// ```
    pub fn ingredients(mut self, text: impl Into<String>) -> Self {
        self.mode = Some(SearchMode::Ingredients(text.into()));
        self
    }

    /// List every recipe passing the filters instead of searching
    pub fn show_all(mut self) -> Self {
        self.mode = Some(SearchMode::ShowAll);
        self
    }

    /// Restrict results to one recipe type; "All" disables the restriction
    pub fn recipe_type(mut self, recipe_type: impl Into<String>) -> Self {
        self.recipe_type = Some(recipe_type.into());
        self
    }

    /// Allowed difficulty levels (default: Easy, Medium and Hard)
    pub fn difficulties(mut self, levels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.difficulties = Some(levels.into_iter().map(Into::into).collect());
        self
    }

    /// Maximum cooking time in minutes, inclusive (default 60)
    pub fn max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = Some(minutes);
        self
    }

    /// Run the query, drawing any suggestion from the thread-local RNG
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{parse_recipes, FindOutcome, RecipeFinder};
    ///
    /// let recipes = parse_recipes(r#"{"recipes": [{"name": "Soup", "type": "Dinner",
    ///     "ingredients": ["chicken", "salt"], "instructions": ["boil"],
    ///     "cooking_time": 30, "difficulty": "Easy", "servings": 2}]}"#).unwrap();
    ///
    /// let outcome = RecipeFinder::builder()
    ///     .ingredients("Chicken")
    ///     .find(&recipes)
    ///     .unwrap();
    /// assert!(matches!(outcome, FindOutcome::Matches { .. }));
    /// ```
    pub fn find(self, recipes: &[Recipe]) -> Result<FindOutcome<'_>, FinderError> {
        self.find_with_rng(recipes, &mut rand::thread_rng())
    }

    /// Run the query with a caller-supplied RNG for the fallback suggestion
    ///
    /// Ingredient text without any ingredient simply matches nothing.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidQuery` if neither `ingredients()` nor
    /// `show_all()` was called.
    pub fn find_with_rng<'a, R: Rng + ?Sized>(
        self,
        recipes: &'a [Recipe],
        rng: &mut R,
    ) -> Result<FindOutcome<'a>, FinderError> {
        let mode = self.mode.ok_or_else(|| {
            FinderError::InvalidQuery(
                "No search specified. Use .ingredients() or .show_all()".to_string(),
            )
        })?;

        let max_cooking_time = self.max_cooking_time.unwrap_or(MAX_COOKING_TIME);

        let filter = match self.difficulties {
            Some(levels) => RecipeFilter::new(levels, max_cooking_time),
            None => RecipeFilter {
                max_cooking_time,
                ..RecipeFilter::default()
            },
        };
        let recipe_type = self.recipe_type.as_deref().unwrap_or(ALL_TYPES);

        match mode {
            SearchMode::Ingredients(text) => {
                let ingredients = parse_ingredient_input(&text);
                let matching = search_recipes(recipes, &ingredients, Some(recipe_type));
                let filtered = filter.apply(matching);

                if filtered.is_empty() {
                    warn!("No recipes found for {:?}, suggesting a random one", ingredients);
                    Ok(FindOutcome::NoMatches {
                        suggestion: suggest_recipe(recipes, rng),
                    })
                } else {
                    debug!("Found {} matching recipes", filtered.len());
                    Ok(FindOutcome::Matches { recipes: filtered })
                }
            }
            SearchMode::ShowAll => {
                let listed = filter_by_type(filter.apply(recipes), Some(recipe_type));
                debug!("Listing {} of {} recipes", listed.len(), recipes.len());
                Ok(FindOutcome::Listing { recipes: listed })
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for a recipe query
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
