use crate::finder::FindOutcome;
use crate::model::Recipe;

const DIVIDER: &str = "----------------------------------------";

/// Format one recipe for the terminal.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n", recipe.name));
    out.push_str(&format!(
        "Cooking Time: {} mins | Difficulty: {} | Servings: {}\n",
        recipe.cooking_time, recipe.difficulty, recipe.servings
    ));
    out.push('\n');

    out.push_str("Ingredients:\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("- {}\n", ingredient));
    }
    out.push('\n');

    out.push_str("Instructions:\n");
    for (i, instruction) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, instruction));
    }

    out.push_str(DIVIDER);
    out.push('\n');
    out
}

/// Format the outcome of a query, banner first.
pub fn render_outcome(outcome: &FindOutcome<'_>) -> String {
    let mut out = String::new();

    match outcome {
        FindOutcome::Matches { recipes } => {
            out.push_str(&format!("Found {} matching recipes!\n\n", recipes.len()));
            for recipe in recipes {
                out.push_str(&render_recipe(recipe));
            }
        }
        FindOutcome::NoMatches { suggestion } => {
            out.push_str(
                "No recipes found with those ingredients and filters. \
                 Try different ingredients or adjust filters!\n",
            );
            if let Some(recipe) = suggestion {
                out.push_str("Here's a random recipe you might like:\n\n");
                out.push_str(&render_recipe(recipe));
            }
        }
        FindOutcome::Listing { recipes } => {
            out.push_str("All Available Recipes\n\n");
            if recipes.is_empty() {
                out.push_str("No recipes match these filters.\n");
            }
            for recipe in recipes {
                out.push_str(&render_recipe(recipe));
            }
        }
    }

    out
}
