use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the recipe collection
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file does not exist
    #[error("{} file not found! Please ensure it exists in the working directory.", .0.display())]
    NotFound(PathBuf),

    /// The dataset is not valid JSON or does not have the expected shape
    #[error("Error reading recipes: {0}")]
    Malformed(String),

    /// Any other failure while reading the file
    #[error("Failed to read recipes file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum FinderError {
    /// Loading the recipe collection failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The query could not be built from the given options
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Results could not be written as JSON
    #[error("Failed to serialize results: {0}")]
    Output(#[from] serde_json::Error),

    /// The dataset loaded fine but holds no recipes
    #[error("The recipe collection is empty")]
    EmptyCollection,
}
