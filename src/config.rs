//! Configuration loading.
//!
//! The settings file is TOML. Only `[files]` is required:
//!
//! ```toml
//! ignore_machines = ["Field", "Mine"]
//!
//! [files]
//! items_csv = "data/items.csv"
//! recipes_csv = "data/recipes.csv"
//! plants_csv = "data/plants.csv"
//!
//! [animal_feed]
//! "Chicken Feed" = "Egg"
//!
//! [rare_ingredients.bars]
//! "Gold Bar" = true
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::LoadError;
use crate::models::ItemName;

/// Locations of the three data tables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataFiles {
    pub items_csv: PathBuf,
    pub recipes_csv: PathBuf,
    pub plants_csv: PathBuf,
}

impl DataFiles {
    /// Resolves relative paths against `base`.
    pub fn relative_to(&self, base: &Path) -> DataFiles {
        let resolve = |p: &PathBuf| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.clone()
            }
        };
        DataFiles {
            items_csv: resolve(&self.items_csv),
            recipes_csv: resolve(&self.recipes_csv),
            plants_csv: resolve(&self.plants_csv),
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub files: DataFiles,
    /// Machines hidden from machine queries
    #[serde(default)]
    pub ignore_machines: Vec<String>,
    /// Feed name to the item the fed animal produces
    #[serde(default)]
    pub animal_feed: BTreeMap<ItemName, ItemName>,
    /// Category to ingredient to whether it counts as rare
    #[serde(default)]
    pub rare_ingredients: BTreeMap<String, BTreeMap<ItemName, bool>>,
}

impl Config {
    /// Parses configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a configuration file, resolving data paths against its directory.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Config::from_toml_str(&text)?;

        if let Some(dir) = path.parent() {
            config.files = config.files.relative_to(dir);
        }
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Every ingredient flagged `true` in any category.
    pub fn rare_ingredient_set(&self) -> HashSet<ItemName> {
        self.rare_ingredients
            .values()
            .flat_map(|category| category.iter())
            .filter(|(_, is_rare)| **is_rare)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
