//! Data loading functionality for Farmprofit.
//!
//! This module handles loading the item, recipe and plant tables from CSV.
//! Each table has a reader-based loader (used by the WASM bindings with
//! embedded data) and the file-based [`load_tables`] used by the CLI.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;
use serde::de::DeserializeOwned;

use crate::config::DataFiles;
use crate::error::LoadError;
use crate::models::{ItemRow, Plant, RecipeLine};

/// Raw contents of the three tables, before any processing.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub items: Vec<ItemRow>,
    pub recipes: Vec<RecipeLine>,
    pub plants: Vec<Plant>,
}

fn read_rows<T: DeserializeOwned, R: Read>(
    reader: R,
    table: &'static str,
) -> Result<Vec<T>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| LoadError::Csv { table, source })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Loads item rows.
///
/// # CSV Format
///
/// Expected columns: `name, machine, cost, time, experience`. Extra columns
/// such as a legacy `id` are ignored.
pub fn load_items<R: Read>(reader: R) -> Result<Vec<ItemRow>, LoadError> {
    read_rows(reader, "items")
}

/// Loads recipe lines.
///
/// # CSV Format
///
/// Expected columns: `product, ingredient, quantity`, one row per ingredient.
pub fn load_recipes<R: Read>(reader: R) -> Result<Vec<RecipeLine>, LoadError> {
    read_rows(reader, "recipes")
}

/// Loads plant prices.
///
/// # CSV Format
///
/// Expected columns: `fruit, plantprice`
pub fn load_plants<R: Read>(reader: R) -> Result<Vec<Plant>, LoadError> {
    read_rows(reader, "plants")
}

/// Loads all three tables from the configured files.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use farmprofit::config::Config;
/// use farmprofit::data::load_tables;
///
/// let config = Config::load(Path::new("config.toml")).unwrap();
/// let tables = load_tables(&config.files).unwrap();
/// println!("Loaded {} items", tables.items.len());
/// ```
pub fn load_tables(files: &DataFiles) -> Result<Tables, LoadError> {
    let tables = Tables {
        items: load_items(open(&files.items_csv)?)?,
        recipes: load_recipes(open(&files.recipes_csv)?)?,
        plants: load_plants(open(&files.plants_csv)?)?,
    };

    info!(
        "Loaded {} items, {} recipe lines, {} plants",
        tables.items.len(),
        tables.recipes.len(),
        tables.plants.len()
    );
    Ok(tables)
}
