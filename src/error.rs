//! Error types for Farmprofit.
//!
//! Data-integrity failures in the preprocessing pipeline are fatal and carry
//! the offending value. Selection errors from the query layer are recoverable.

use thiserror::Error;

/// Errors raised while normalizing and costing the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Unrecognized time format for '{item}': '{value}'")]
    MalformedTime { item: String, value: String },

    #[error("Ingredient '{ingredient}' used by '{product}' is missing from the item table")]
    UnknownIngredient { product: String, ingredient: String },

    #[error("Recipe product '{0}' is missing from the item table")]
    UnknownProduct(String),

    #[error("Fruit '{0}' in the plant table is missing from the item table")]
    UnknownFruit(String),

    #[error("Animal feed '{0}' is missing from the item table")]
    UnknownFeed(String),

    #[error("Item '{item}' fed by '{feed}' is missing from the item table")]
    UnknownFeedProduct { feed: String, item: String },

    #[error("Item name '{0}' appears more than once in the item table")]
    DuplicateItem(String),

    #[error("Invalid {field} for '{item}': {value} (must be a finite number >= 0)")]
    InvalidNumber {
        item: String,
        field: &'static str,
        value: f64,
    },
}

/// Errors raised while reading configuration and data tables.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Errors for user selections that name nothing selectable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Machine '{0}' is not available for selection")]
    UnknownMachine(String),

    #[error("No recipe uses ingredient '{0}'")]
    UnknownIngredient(String),

    #[error("Unknown sort key '{0}'")]
    UnknownSortKey(String),
}
