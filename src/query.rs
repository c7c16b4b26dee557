//! Filtering and sorting of evaluated items.
//!
//! Two query modes exist: by machine (one machine, or every non-ignored
//! machine grouped together) and by ingredient (every product whose recipe
//! uses it). Results are always ordered by the chosen metric, descending.

use std::cmp::Ordering;
use std::collections::HashSet;

use log::info;

use crate::error::QueryError;
use crate::models::{EvaluatedItem, ItemName, RecipeLine, Selection, SortKey};

/// Distinct machines in first-seen order, without ignored ones.
pub fn available_machines(items: &[EvaluatedItem], ignore: &[String]) -> Vec<String> {
    let mut machines: Vec<String> = Vec::new();
    for item in items {
        let machine = item.machine();
        if ignore.iter().any(|m| m == machine) || machines.iter().any(|m| m == machine) {
            continue;
        }
        machines.push(machine.to_string());
    }
    machines
}

/// Distinct ingredient names used by any recipe, alphabetically sorted.
pub fn recipe_ingredients(recipes: &[RecipeLine]) -> Vec<ItemName> {
    let mut names: Vec<ItemName> = recipes
        .iter()
        .map(|l| l.ingredient.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    names.sort();
    names
}

/// Distinct products whose recipe includes `ingredient`.
pub fn products_using<'a>(recipes: &'a [RecipeLine], ingredient: &str) -> HashSet<&'a ItemName> {
    recipes
        .iter()
        .filter(|l| l.ingredient.as_str() == ingredient)
        .map(|l| &l.product)
        .collect()
}

fn descending(a: &EvaluatedItem, b: &EvaluatedItem, key: SortKey) -> Ordering {
    key.value(b).total_cmp(&key.value(a))
}

/// Sorts by `key`, highest first.
///
/// # Example
///
/// ```
/// use farmprofit::models::{EvaluatedItem, Item, SortKey};
/// use farmprofit::query::sort_descending;
///
/// let row = |name: &str, profit: f64| EvaluatedItem {
///     item: Item { name: name.into(), machine: "Bakery".into(), cost: profit, time: 1, experience: 0.0 },
///     production_cost: 0.0,
///     total_profit: profit,
///     profit_per_minute: profit,
///     experience_per_minute: 0.0,
/// };
/// let mut rows = vec![row("a", 5.0), row("b", 20.0), row("c", 1.0)];
/// sort_descending(&mut rows, SortKey::TotalProfit);
///
/// let profits: Vec<f64> = rows.iter().map(|r| r.total_profit).collect();
/// assert_eq!(profits, vec![20.0, 5.0, 1.0]);
/// ```
pub fn sort_descending(items: &mut [EvaluatedItem], key: SortKey) {
    items.sort_by(|a, b| descending(a, b, key));
}

/// Sorts by machine name ascending, then by `key` descending within each machine.
pub fn sort_by_machine_then(items: &mut [EvaluatedItem], key: SortKey) {
    items.sort_by(|a, b| {
        a.machine()
            .cmp(b.machine())
            .then_with(|| descending(a, b, key))
    });
}

/// Runs one query over the evaluated catalog.
///
/// Machines on the ignore list are hidden from the grouped view and cannot be
/// selected directly either.
///
/// # Errors
///
/// * [`QueryError::UnknownMachine`] if the machine is unknown or ignored
/// * [`QueryError::UnknownIngredient`] if no recipe uses the ingredient
pub fn select(
    items: &[EvaluatedItem],
    recipes: &[RecipeLine],
    ignore_machines: &[String],
    selection: &Selection,
    key: SortKey,
) -> Result<Vec<EvaluatedItem>, QueryError> {
    let rows = match selection {
        Selection::AllMachines => {
            let mut rows: Vec<EvaluatedItem> = items
                .iter()
                .filter(|i| !ignore_machines.iter().any(|m| m == i.machine()))
                .cloned()
                .collect();
            sort_by_machine_then(&mut rows, key);
            rows
        }
        Selection::Machine(machine) => {
            if !available_machines(items, ignore_machines).contains(machine) {
                return Err(QueryError::UnknownMachine(machine.clone()));
            }
            let mut rows: Vec<EvaluatedItem> = items
                .iter()
                .filter(|i| i.machine() == machine)
                .cloned()
                .collect();
            sort_descending(&mut rows, key);
            rows
        }
        Selection::Ingredient(ingredient) => {
            let products = products_using(recipes, ingredient.as_str());
            if products.is_empty() {
                return Err(QueryError::UnknownIngredient(ingredient.to_string()));
            }
            let mut rows: Vec<EvaluatedItem> = items
                .iter()
                .filter(|i| products.contains(i.name()))
                .cloned()
                .collect();
            sort_descending(&mut rows, key);
            rows
        }
    };

    info!("Query {:?} by {} returned {} rows", selection, key, rows.len());
    Ok(rows)
}
