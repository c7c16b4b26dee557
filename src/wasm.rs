//! WebAssembly bindings for Farmprofit.
//!
//! This module provides JavaScript-accessible functions over the sample
//! catalog bundled with the crate.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::Config;
use crate::data::{load_items, load_plants, load_recipes, Tables};
use crate::display::format_minutes;
use crate::error::LoadError;
use crate::models::{AnnotatedItem, ItemName, Selection, SortKey};
use crate::pipeline::{preprocess, Processed};

/// JavaScript-friendly selection, tagged by `mode`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum JsSelection {
    AllMachines,
    Machine { machine: String },
    Ingredient { ingredient: String },
}

impl From<JsSelection> for Selection {
    fn from(selection: JsSelection) -> Self {
        match selection {
            JsSelection::AllMachines => Selection::AllMachines,
            JsSelection::Machine { machine } => Selection::Machine(machine),
            JsSelection::Ingredient { ingredient } => {
                Selection::Ingredient(ItemName::from(ingredient))
            }
        }
    }
}

fn default_sort() -> SortKey {
    SortKey::TotalProfit
}

/// JavaScript-friendly query input.
#[derive(Debug, Clone, Deserialize)]
pub struct JsQueryInput {
    #[serde(flatten)]
    pub selection: JsSelection,
    #[serde(default = "default_sort")]
    pub sort: SortKey,
}

/// JavaScript-friendly result row.
#[derive(Debug, Clone, Serialize)]
pub struct JsRow {
    pub name: String,
    pub machine: String,
    pub cost: f64,
    pub production_cost: f64,
    pub total_profit: f64,
    pub profit_per_minute: f64,
    pub experience_per_minute: f64,
    pub experience: f64,
    pub time_minutes: u32,
    pub time_formatted: String,
    pub rare_ingredients: String,
}

impl From<&AnnotatedItem> for JsRow {
    fn from(row: &AnnotatedItem) -> Self {
        let eval = &row.item;
        JsRow {
            name: eval.name().to_string(),
            machine: eval.machine().to_string(),
            cost: eval.item.cost,
            production_cost: eval.production_cost,
            total_profit: eval.total_profit,
            profit_per_minute: eval.profit_per_minute,
            experience_per_minute: eval.experience_per_minute,
            experience: eval.item.experience,
            time_minutes: eval.item.time,
            time_formatted: format_minutes(eval.item.time),
            rare_ingredients: row.rare_ingredients.clone(),
        }
    }
}

/// JavaScript-friendly query result.
#[derive(Debug, Clone, Serialize)]
pub struct JsQueryResult {
    pub success: bool,
    pub error: Option<String>,
    pub rows: Vec<JsRow>,
}

impl JsQueryResult {
    fn failure(message: String) -> Self {
        JsQueryResult {
            success: false,
            error: Some(message),
            rows: vec![],
        }
    }
}

/// Preprocesses the catalog embedded at build time.
pub fn embedded_catalog() -> Result<Processed, LoadError> {
    let config = Config::from_toml_str(include_str!("../config.toml"))?;
    let tables = Tables {
        items: load_items(include_str!("../data/items.csv").as_bytes())?,
        recipes: load_recipes(include_str!("../data/recipes.csv").as_bytes())?,
        plants: load_plants(include_str!("../data/plants.csv").as_bytes())?,
    };
    Ok(preprocess(tables, &config)?)
}

/// Runs a JSON query against the embedded catalog.
///
/// Never fails: errors are reported in [`JsQueryResult::error`].
pub fn analyze_json(input_json: &str) -> JsQueryResult {
    let input: JsQueryInput = match serde_json::from_str(input_json) {
        Ok(i) => i,
        Err(e) => return JsQueryResult::failure(format!("Invalid input: {}", e)),
    };

    let processed = match embedded_catalog() {
        Ok(p) => p,
        Err(e) => return JsQueryResult::failure(e.to_string()),
    };

    match processed.query(&input.selection.into(), input.sort) {
        Ok(rows) => JsQueryResult {
            success: true,
            error: None,
            rows: rows.iter().map(JsRow::from).collect(),
        },
        Err(e) => JsQueryResult::failure(e.to_string()),
    }
}

/// Run a query with the given selection.
///
/// Takes a JSON string input and returns a JSON string result.
#[wasm_bindgen]
pub fn analyze(input_json: &str) -> String {
    let result = analyze_json(input_json);
    if let Some(ref error) = result.error {
        console::error_1(&JsValue::from_str(error));
    }
    serde_json::to_string(&result).unwrap_or_default()
}

/// Get the machines available for single-machine selection.
#[wasm_bindgen]
pub fn get_machines() -> js_sys::Array {
    match embedded_catalog() {
        Ok(processed) => processed
            .machines()
            .into_iter()
            .map(JsValue::from)
            .collect(),
        Err(e) => {
            console::error_1(&JsValue::from_str(&e.to_string()));
            js_sys::Array::new()
        }
    }
}

/// Get every ingredient used by a recipe, alphabetically.
#[wasm_bindgen]
pub fn get_ingredients() -> js_sys::Array {
    match embedded_catalog() {
        Ok(processed) => processed
            .ingredients()
            .iter()
            .map(|name| JsValue::from_str(name.as_str()))
            .collect(),
        Err(e) => {
            console::error_1(&JsValue::from_str(&e.to_string()));
            js_sys::Array::new()
        }
    }
}

/// Get the version of the crate.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
