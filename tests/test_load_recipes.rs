use recipe_finder::{load_recipes_from, parse_recipes, LoadError};
use std::io::Write;

fn write_dataset(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SOUP: &str = r#"
{
    "recipes": [
        {
            "name": "Soup",
            "type": "Dinner",
            "ingredients": ["chicken", "salt"],
            "instructions": ["boil"],
            "cooking_time": 30,
            "difficulty": "Easy",
            "servings": 2
        }
    ]
}
"#;

#[test]
fn test_load_valid_file() {
    let file = write_dataset(SOUP);
    let recipes = load_recipes_from(file.path()).unwrap();

    assert_eq!(recipes.len(), 1);
    let soup = &recipes[0];
    assert_eq!(soup.name, "Soup");
    assert_eq!(soup.recipe_type, "Dinner");
    assert_eq!(soup.ingredients, vec!["chicken", "salt"]);
    assert_eq!(soup.instructions, vec!["boil"]);
    assert_eq!(soup.cooking_time, 30);
    assert_eq!(soup.difficulty, "Easy");
    assert_eq!(soup.servings, 2);
}

#[test]
fn test_load_preserves_file_order() {
    let content = r#"
    {
        "recipes": [
            {"name": "B", "type": "X", "ingredients": [], "instructions": [],
             "cooking_time": 5, "difficulty": "Easy", "servings": 1},
            {"name": "A", "type": "X", "ingredients": [], "instructions": [],
             "cooking_time": 5, "difficulty": "Easy", "servings": 1}
        ]
    }
    "#;
    let recipes = parse_recipes(content).unwrap();
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");

    match load_recipes_from(&path) {
        Err(LoadError::NotFound(reported)) => assert_eq!(reported, path),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_is_malformed() {
    let file = write_dataset("{ \"recipes\": [ { \"name\": ");
    assert!(matches!(
        load_recipes_from(file.path()),
        Err(LoadError::Malformed(_))
    ));
}

#[test]
fn test_missing_recipes_key_is_malformed() {
    assert!(matches!(
        parse_recipes(r#"{"dishes": []}"#),
        Err(LoadError::Malformed(_))
    ));
    assert!(matches!(
        parse_recipes(r#"[]"#),
        Err(LoadError::Malformed(_))
    ));
    assert!(matches!(
        parse_recipes(r#"{"recipes": {}}"#),
        Err(LoadError::Malformed(_))
    ));
}

#[test]
fn test_missing_field_rejects_whole_collection() {
    // Second record has no servings
    let content = r#"
    {
        "recipes": [
            {"name": "Good", "type": "X", "ingredients": ["a"], "instructions": ["b"],
             "cooking_time": 5, "difficulty": "Easy", "servings": 1},
            {"name": "Bad", "type": "X", "ingredients": ["a"], "instructions": ["b"],
             "cooking_time": 5, "difficulty": "Easy"}
        ]
    }
    "#;

    match parse_recipes(content) {
        Err(LoadError::Malformed(detail)) => {
            assert!(detail.contains("recipe #1"), "detail was: {}", detail);
            assert!(detail.contains("servings"), "detail was: {}", detail);
        }
        other => panic!("Expected Malformed, got {:?}", other),
    }
}

#[test]
fn test_wrong_field_type_is_malformed() {
    let content = r#"
    {
        "recipes": [
            {"name": "Soup", "type": "Dinner", "ingredients": "chicken", "instructions": ["boil"],
             "cooking_time": 30, "difficulty": "Easy", "servings": 2}
        ]
    }
    "#;
    assert!(matches!(parse_recipes(content), Err(LoadError::Malformed(_))));

    let negative_time = content
        .replace("\"chicken\"", "[\"chicken\"]")
        .replace("30", "-5");
    assert!(matches!(
        parse_recipes(&negative_time),
        Err(LoadError::Malformed(_))
    ));
}

#[test]
fn test_zero_servings_is_malformed() {
    let content = SOUP.replace("\"servings\": 2", "\"servings\": 0");
    assert!(matches!(parse_recipes(&content), Err(LoadError::Malformed(_))));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let content = SOUP.replace("\"servings\": 2", "\"servings\": 2, \"rating\": 5");
    let recipes = parse_recipes(&content).unwrap();
    assert_eq!(recipes.len(), 1);
}

#[test]
fn test_empty_collection_loads() {
    let recipes = parse_recipes(r#"{"recipes": []}"#).unwrap();
    assert!(recipes.is_empty());
}

#[test]
fn test_bundled_dataset_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/recipes.json");
    let recipes = load_recipes_from(path).unwrap();
    assert!(!recipes.is_empty());
}

#[test]
fn test_error_messages() {
    let err = LoadError::NotFound("recipes.json".into());
    assert!(err.to_string().contains("recipes.json file not found"));

    let err = LoadError::Malformed("bad".to_string());
    assert!(err.to_string().starts_with("Error reading recipes"));
}
