//! End-to-end preprocessing and querying.
//!
//! [`preprocess`] turns raw tables into evaluated items:
//! time normalization, cost resolution and metrics, in that order. Any data
//! error aborts the whole run. The resulting [`Processed`] set is read-only
//! and answers any number of queries.

use std::collections::HashSet;

use log::{info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::costs::resolve_costs;
use crate::data::{load_tables, Tables};
use crate::error::{LoadError, PipelineError, QueryError};
use crate::metrics::evaluate_all;
use crate::models::{AnnotatedItem, EvaluatedItem, ItemName, RecipeLine, Selection, SortKey};
use crate::query::{available_machines, recipe_ingredients, select};
use crate::rare::annotate;
use crate::time::normalize_times;

/// Evaluated catalog plus the settings queries need.
#[derive(Debug, Clone)]
pub struct Processed {
    pub items: Vec<EvaluatedItem>,
    pub recipes: Vec<RecipeLine>,
    pub ignore_machines: Vec<String>,
    pub rare_ingredients: HashSet<ItemName>,
}

impl Processed {
    /// Machines offered for single-machine selection.
    pub fn machines(&self) -> Vec<String> {
        available_machines(&self.items, &self.ignore_machines)
    }

    /// Ingredients offered for ingredient selection.
    pub fn ingredients(&self) -> Vec<ItemName> {
        recipe_ingredients(&self.recipes)
    }

    /// Filters, sorts and annotates.
    pub fn query(
        &self,
        selection: &Selection,
        key: SortKey,
    ) -> Result<Vec<AnnotatedItem>, QueryError> {
        let rows = select(
            &self.items,
            &self.recipes,
            &self.ignore_machines,
            selection,
            key,
        )?;
        Ok(annotate(rows, &self.recipes, &self.rare_ingredients))
    }
}

fn check_number(item: &ItemName, field: &'static str, value: f64) -> Result<(), PipelineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PipelineError::InvalidNumber {
            item: item.to_string(),
            field,
            value,
        })
    }
}

/// Rejects NaN, infinite or negative prices, experience and quantities.
pub fn validate_numbers(tables: &Tables) -> Result<(), PipelineError> {
    for row in &tables.items {
        check_number(&row.name, "cost", row.cost)?;
        check_number(&row.name, "experience", row.experience)?;
    }
    for line in &tables.recipes {
        check_number(&line.product, "quantity", line.quantity)?;
    }
    for plant in &tables.plants {
        check_number(&plant.fruit, "plantprice", plant.plant_price)?;
    }
    Ok(())
}

/// Runs every preprocessing stage over already-loaded tables.
pub fn preprocess(tables: Tables, config: &Config) -> Result<Processed, PipelineError> {
    validate_numbers(&tables)?;
    let items = normalize_times(tables.items)?;
    let catalog = Catalog::new(items, tables.recipes, tables.plants)?;

    let costed = resolve_costs(&catalog, &config.animal_feed)?;
    let evaluated = evaluate_all(costed);

    let rare_ingredients = config.rare_ingredient_set();
    for name in &rare_ingredients {
        if !catalog.contains(name.as_str()) {
            warn!("Rare ingredient '{}' is not in the item table", name);
        }
    }

    info!("Evaluated {} items", evaluated.len());
    Ok(Processed {
        items: evaluated,
        recipes: catalog.recipes().to_vec(),
        ignore_machines: config.ignore_machines.clone(),
        rare_ingredients,
    })
}

/// Loads the configured tables and preprocesses them.
pub fn run(config: &Config) -> Result<Processed, LoadError> {
    let tables = load_tables(&config.files)?;
    Ok(preprocess(tables, config)?)
}
