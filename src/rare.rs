//! Rare ingredient annotation.
//!
//! Some ingredients are scarce enough that players want them called out next
//! to every product that consumes them. The recipe table is grouped once by
//! product, then each result row looks up its own group, so the output always
//! has exactly one row per input row in the same order.

use std::collections::{HashMap, HashSet};

use crate::models::{AnnotatedItem, EvaluatedItem, ItemName, RecipeLine};

/// Rare recipe lines grouped by product, in recipe-table order.
#[derive(Debug, Clone, Default)]
pub struct RareUsage<'a> {
    by_product: HashMap<&'a ItemName, Vec<&'a RecipeLine>>,
}

impl<'a> RareUsage<'a> {
    /// Collects every recipe line whose ingredient is in `rare`.
    pub fn new(recipes: &'a [RecipeLine], rare: &HashSet<ItemName>) -> Self {
        let mut by_product: HashMap<&ItemName, Vec<&RecipeLine>> = HashMap::new();
        for line in recipes.iter().filter(|l| rare.contains(&l.ingredient)) {
            by_product.entry(&line.product).or_default().push(line);
        }
        RareUsage { by_product }
    }

    /// Formats a product's rare ingredients as `"<quantity> <ingredient>"`
    /// joined by `", "`. Empty when the product uses none.
    pub fn describe(&self, product: &ItemName) -> String {
        self.by_product
            .get(product)
            .map(|lines| {
                lines
                    .iter()
                    .map(|l| format!("{} {}", l.quantity, l.ingredient))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }
}

/// Attaches a rare-ingredient description to every row.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use farmprofit::models::{ItemName, RecipeLine};
/// use farmprofit::rare::RareUsage;
///
/// let recipes = vec![
///     RecipeLine { product: "Ring".into(), ingredient: "Rare Gem".into(), quantity: 2.0 },
///     RecipeLine { product: "Ring".into(), ingredient: "Gold".into(), quantity: 1.0 },
/// ];
/// let rare: HashSet<ItemName> = [ItemName::from("Rare Gem")].into_iter().collect();
///
/// let usage = RareUsage::new(&recipes, &rare);
/// assert_eq!(usage.describe(&"Ring".into()), "2 Rare Gem");
/// ```
pub fn annotate(
    items: Vec<EvaluatedItem>,
    recipes: &[RecipeLine],
    rare: &HashSet<ItemName>,
) -> Vec<AnnotatedItem> {
    let usage = RareUsage::new(recipes, rare);
    items
        .into_iter()
        .map(|item| {
            let rare_ingredients = usage.describe(item.name());
            AnnotatedItem {
                item,
                rare_ingredients,
            }
        })
        .collect()
}
