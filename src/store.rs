use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::error::LoadError;
use crate::model::Recipe;

/// Dataset location used when no path is configured
pub const DEFAULT_RECIPES_PATH: &str = "recipes.json";

/// Load the recipe collection from `recipes.json` in the working directory.
pub fn load_recipes() -> Result<Vec<Recipe>, LoadError> {
    load_recipes_from(DEFAULT_RECIPES_PATH)
}

/// Load the recipe collection from `path`.
///
/// The file is read on every call. Any malformed record rejects the whole
/// collection.
pub fn load_recipes_from(path: impl AsRef<Path>) -> Result<Vec<Recipe>, LoadError> {
    let path = path.as_ref();
    debug!("Loading recipes from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let recipes = parse_recipes(&content)?;
    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Parse dataset content of the form `{ "recipes": [ ... ] }`.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>, LoadError> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| LoadError::Malformed(e.to_string()))?;

    let records = document
        .get("recipes")
        .ok_or_else(|| LoadError::Malformed("missing 'recipes' key".to_string()))?
        .as_array()
        .ok_or_else(|| LoadError::Malformed("'recipes' must be an array".to_string()))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let recipe = serde_json::from_value::<Recipe>(record.clone())
                .map_err(|e| LoadError::Malformed(format!("recipe #{}: {}", index, e)))?;
            recipe
                .validate()
                .map_err(|e| LoadError::Malformed(format!("recipe #{}: {}", index, e)))?;
            Ok(recipe)
        })
        .collect()
}
