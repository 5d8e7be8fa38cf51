//! Find recipes in a local collection by the ingredients you have.
//!
//! The collection is loaded once with [`load_recipes`] and queried with the
//! [`RecipeFinder`] builder or the lower level functions in [`filter`].

pub mod config;
pub mod error;
pub mod filter;
pub mod finder;
pub mod model;
pub mod render;
pub mod store;

pub use config::FinderConfig;
pub use error::{FinderError, LoadError};
pub use filter::{
    filter_by_type, get_recipe_types, parse_ingredient_input, search_recipes, suggest_recipe,
    RecipeFilter, ALL_TYPES, DIFFICULTY_LEVELS,
};
pub use finder::{FindOutcome, RecipeFinder, RecipeFinderBuilder, SearchMode};
pub use model::Recipe;
pub use render::{render_outcome, render_recipe};
pub use store::{load_recipes, load_recipes_from, parse_recipes, DEFAULT_RECIPES_PATH};
