//! Profit and experience metrics.

use crate::models::{CostedItem, EvaluatedItem};

/// Divides by production time, treating instant items as earning nothing per minute.
fn per_minute(amount: f64, minutes: u32) -> f64 {
    if minutes > 0 {
        amount / minutes as f64
    } else {
        0.0
    }
}

/// Computes profit and experience rates for one costed item.
///
/// # Example
///
/// ```
/// use farmprofit::metrics::evaluate;
/// use farmprofit::models::{CostedItem, Item, ItemName};
///
/// let bread = CostedItem {
///     item: Item {
///         name: ItemName::from("Bread"),
///         machine: "Bakery".to_string(),
///         cost: 21.0,
///         time: 5,
///         experience: 3.0,
///     },
///     production_cost: 9.0,
/// };
///
/// let eval = evaluate(bread);
/// assert_eq!(eval.total_profit, 12.0);
/// assert_eq!(eval.profit_per_minute, 2.4);
/// assert_eq!(eval.experience_per_minute, 0.6);
/// ```
pub fn evaluate(costed: CostedItem) -> EvaluatedItem {
    let CostedItem {
        item,
        production_cost,
    } = costed;

    let total_profit = item.cost - production_cost;
    let profit_per_minute = per_minute(total_profit, item.time);
    let experience_per_minute = per_minute(item.experience, item.time);

    EvaluatedItem {
        item,
        production_cost,
        total_profit,
        profit_per_minute,
        experience_per_minute,
    }
}

/// Computes metrics for every item, keeping input order.
pub fn evaluate_all(costed: Vec<CostedItem>) -> Vec<EvaluatedItem> {
    costed.into_iter().map(evaluate).collect()
}
