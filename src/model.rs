use serde::{Deserialize, Serialize};

/// A single dish from the recipe collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Free-form category, e.g. "Dinner" or "Italian"
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes
    pub cooking_time: u32,
    /// Usually "Easy", "Medium" or "Hard"
    pub difficulty: String,
    pub servings: u32,
}

impl Recipe {
    /// Check the constraints serde cannot express on its own.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.servings == 0 {
            return Err(format!("recipe '{}' must serve at least one", self.name));
        }
        Ok(())
    }
}

