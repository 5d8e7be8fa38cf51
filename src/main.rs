use std::process;

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use recipe_finder::{
    get_recipe_types, load_recipes_from, render_outcome, FindOutcome, FinderConfig, FinderError,
    RecipeFinder, RecipeFinderBuilder, ALL_TYPES,
};
use recipe_finder::filter::MAX_COOKING_TIME;

/// Lower bound and granularity of the cooking time ceiling, in minutes
const MIN_MAX_TIME: u32 = 5;
const MAX_TIME_STEP: u32 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "recipe-finder",
    version,
    about = "Find recipes based on ingredients you have!"
)]
struct Cli {
    /// Ingredients to search for, separated with commas (e.g. "chicken, rice, garlic")
    #[arg(short, long)]
    ingredients: Option<String>,

    /// Show all recipes passing the filters
    #[arg(short, long)]
    all: bool,

    /// Recipe type to restrict results to
    #[arg(short = 't', long = "type", default_value = ALL_TYPES)]
    recipe_type: String,

    /// Allowed difficulty level; repeat for several (default: Easy, Medium, Hard)
    #[arg(short, long = "difficulty")]
    difficulties: Vec<String>,

    /// Maximum cooking time in minutes (5-60, step 5)
    #[arg(short, long, value_parser = parse_max_time)]
    max_time: Option<u32>,

    /// Print the available recipe types and exit
    #[arg(long)]
    types: bool,

    /// Path to the recipes file
    #[arg(short, long)]
    recipes: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Seed for the random suggestion
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FinderError> {
    let config = FinderConfig::load()?;
    debug!("{:#?}", config);
    check_max_time(config.max_cooking_time).map_err(FinderError::InvalidQuery)?;

    let path = cli.recipes.clone().unwrap_or(config.recipes_path.clone());
    let recipes = load_recipes_from(&path)?;
    if recipes.is_empty() {
        return Err(FinderError::EmptyCollection);
    }

    if cli.types {
        for recipe_type in get_recipe_types(&recipes) {
            println!("{}", recipe_type);
        }
        return Ok(());
    }

    if cli.ingredients.is_none() && !cli.all {
        return Err(FinderError::InvalidQuery(
            "Enter ingredients with --ingredients or use --all".to_string(),
        ));
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut outcomes = Vec::new();
    if let Some(text) = &cli.ingredients {
        let builder = RecipeFinder::builder().ingredients(text.as_str());
        let query = with_filters(builder, &cli, &config);
        outcomes.push(query.find_with_rng(&recipes, &mut rng)?);
    }
    if cli.all {
        let query = with_filters(RecipeFinder::builder().show_all(), &cli, &config);
        outcomes.push(query.find_with_rng(&recipes, &mut rng)?);
    }

    if cli.json {
        println!("{}", to_json(&outcomes)?);
    } else {
        for outcome in &outcomes {
            print!("{}", render_outcome(outcome));
        }
    }

    Ok(())
}

fn with_filters(
    builder: RecipeFinderBuilder,
    cli: &Cli,
    config: &FinderConfig,
) -> RecipeFinderBuilder {
    let defaults = config.default_filter();
    let difficulties = if cli.difficulties.is_empty() {
        defaults.difficulties
    } else {
        cli.difficulties.clone()
    };

    builder
        .recipe_type(cli.recipe_type.as_str())
        .difficulties(difficulties)
        .max_cooking_time(cli.max_time.unwrap_or(defaults.max_cooking_time))
}

fn to_json(outcomes: &[FindOutcome<'_>]) -> Result<String, FinderError> {
    Ok(serde_json::to_string_pretty(outcomes)?)
}

/// Accept only the values the cooking time slider offers.
fn check_max_time(minutes: u32) -> Result<u32, String> {
    if (MIN_MAX_TIME..=MAX_COOKING_TIME).contains(&minutes) && minutes % MAX_TIME_STEP == 0 {
        Ok(minutes)
    } else {
        Err(format!(
            "maximum cooking time must be between {} and {} minutes in steps of {}, got {}",
            MIN_MAX_TIME, MAX_COOKING_TIME, MAX_TIME_STEP, minutes
        ))
    }
}

fn parse_max_time(value: &str) -> Result<u32, String> {
    let minutes: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number of minutes", value))?;
    check_max_time(minutes)
}
