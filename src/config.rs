use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::filter::{RecipeFilter, DIFFICULTY_LEVELS, MAX_COOKING_TIME};
use crate::store::DEFAULT_RECIPES_PATH;

/// Defaults for the presentation layer
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FinderConfig {
    /// Path of the recipe dataset
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,
    /// Difficulty levels selected when the user picks none
    #[serde(default = "default_difficulties")]
    pub difficulties: Vec<String>,
    /// Cooking time ceiling in minutes used when the user gives none
    #[serde(default = "default_max_cooking_time")]
    pub max_cooking_time: u32,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            recipes_path: default_recipes_path(),
            difficulties: default_difficulties(),
            max_cooking_time: default_max_cooking_time(),
        }
    }
}

// Default value functions
fn default_recipes_path() -> String {
    DEFAULT_RECIPES_PATH.to_string()
}

fn default_difficulties() -> Vec<String> {
    DIFFICULTY_LEVELS.iter().map(|d| d.to_string()).collect()
}

fn default_max_cooking_time() -> u32 {
    MAX_COOKING_TIME
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__MAX_COOKING_TIME
    pub fn load() -> Result<Self, ConfigError> {
        load_config("config")
    }

    /// Secondary filter built from the configured defaults
    pub fn default_filter(&self) -> RecipeFilter {
        RecipeFilter::new(self.difficulties.iter().cloned(), self.max_cooking_time)
    }
}

/// Load configuration from `file_stem` (extension optional) and the environment.
///
/// A missing file is not an error.
pub fn load_config(file_stem: &str) -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(file_stem).required(false))
        // Use double underscore as the prefix separator: RECIPE_FINDER__RECIPES_PATH
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("difficulties")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
