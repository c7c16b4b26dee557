//! Production cost resolution.
//!
//! Costs are assigned by four ordered passes, each returning a new
//! [`CostSheet`]. Later passes override earlier ones:
//!
//! 1. Recipe cost: sum of ingredient sale prices times quantities (one level deep)
//! 2. Plant cost: planting price spread over the plant's harvest, plus the
//!    fixed Honeycomb cost
//! 3. Feed chain: feed cost spread over one batch, then copied to the animal product
//! 4. Zero cost for items gathered straight from nature
//!
//! The resulting costs are rounded to whole numbers.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::PipelineError;
use crate::models::{CostedItem, ItemName};

/// Harvests from one tree or bush before it withers.
pub const PLANT_YIELD: f64 = 13.0;

/// Units of feed produced by one feed recipe run.
pub const FEED_YIELD: f64 = 3.0;

pub const HONEYCOMB: &str = "Honeycomb";

/// Honeycomb cost is fixed regardless of any table.
pub const HONEYCOMB_COST: f64 = 120.0 / 2.5;

/// Machines whose products need no purchased inputs.
pub const ZERO_COST_MACHINES: [&str; 7] = [
    "Field",
    "Mine",
    "Lure Workbench",
    "Net Maker",
    "Fish",
    "Duck Salon",
    "Lobster Pool",
];

/// Production costs indexed like [`Catalog::items`].
///
/// `None` means no pass has assigned a cost yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSheet {
    costs: Vec<Option<f64>>,
}

impl CostSheet {
    pub fn empty(len: usize) -> Self {
        CostSheet {
            costs: vec![None; len],
        }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.costs.get(index).copied().flatten()
    }

    fn set(&mut self, index: usize, cost: f64) {
        self.costs[index] = Some(cost);
    }
}

/// Feed costs after dividing by [`FEED_YIELD`], paired with the item each feed produces.
///
/// Only [`finalize_feed_costs`] builds this, so dependent items can only ever
/// read feed costs that are already divided.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedFeedCosts {
    entries: Vec<FeedEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct FeedEntry {
    feed: usize,
    item: usize,
    cost: f64,
}

impl FinalizedFeedCosts {
    /// Finalized cost of a feed, by catalog index.
    pub fn cost_of(&self, feed: usize) -> Option<f64> {
        self.entries.iter().find(|e| e.feed == feed).map(|e| e.cost)
    }
}

/// Pass 1: costs every recipe product from its ingredients' sale prices.
pub fn recipe_costs(catalog: &Catalog) -> Result<CostSheet, PipelineError> {
    let mut sheet = CostSheet::empty(catalog.len());

    for line in catalog.recipes() {
        let product = catalog
            .index_of(line.product.as_str())
            .ok_or_else(|| PipelineError::UnknownProduct(line.product.to_string()))?;
        let ingredient = catalog.get(line.ingredient.as_str()).ok_or_else(|| {
            PipelineError::UnknownIngredient {
                product: line.product.to_string(),
                ingredient: line.ingredient.to_string(),
            }
        })?;

        let running = sheet.get(product).unwrap_or(0.0);
        sheet.set(product, running + ingredient.cost * line.quantity);
    }

    debug!(
        "Recipe pass costed {} products",
        sheet.costs.iter().filter(|c| c.is_some()).count()
    );
    Ok(sheet)
}

/// Pass 2: overrides fruit costs with their plant price, then fixes Honeycomb.
pub fn plant_costs(catalog: &Catalog, mut sheet: CostSheet) -> Result<CostSheet, PipelineError> {
    let mut fruits = Vec::with_capacity(catalog.plants().len());
    for plant in catalog.plants() {
        let index = catalog
            .index_of(plant.fruit.as_str())
            .ok_or_else(|| PipelineError::UnknownFruit(plant.fruit.to_string()))?;
        fruits.push((index, plant.plant_price));
    }

    for (index, plant_price) in fruits {
        sheet.set(index, plant_price / PLANT_YIELD);
    }

    if let Some(index) = catalog.index_of(HONEYCOMB) {
        sheet.set(index, HONEYCOMB_COST);
    }

    debug!("Plant pass costed {} fruits", catalog.plants().len());
    Ok(sheet)
}

/// Pass 3, phase 1: divides each feed's current cost by [`FEED_YIELD`].
///
/// Every feed and every fed item must exist in the catalog.
pub fn finalize_feed_costs(
    catalog: &Catalog,
    sheet: &CostSheet,
    feed_map: &BTreeMap<ItemName, ItemName>,
) -> Result<FinalizedFeedCosts, PipelineError> {
    for feed in feed_map.keys() {
        if !catalog.contains(feed.as_str()) {
            return Err(PipelineError::UnknownFeed(feed.to_string()));
        }
    }

    let mut entries = Vec::with_capacity(feed_map.len());
    for (feed_name, item_name) in feed_map {
        let feed = catalog
            .index_of(feed_name.as_str())
            .ok_or_else(|| PipelineError::UnknownFeed(feed_name.to_string()))?;
        let item = catalog.index_of(item_name.as_str()).ok_or_else(|| {
            PipelineError::UnknownFeedProduct {
                feed: feed_name.to_string(),
                item: item_name.to_string(),
            }
        })?;

        let current = sheet.get(feed).unwrap_or_else(|| {
            warn!("Feed '{}' has no recipe cost; treating it as free", feed_name);
            0.0
        });
        entries.push(FeedEntry {
            feed,
            item,
            cost: current / FEED_YIELD,
        });
    }

    Ok(FinalizedFeedCosts { entries })
}

/// Pass 3, phase 2: stores finalized feed costs and copies each to its animal product.
pub fn apply_feed_costs(mut sheet: CostSheet, feeds: &FinalizedFeedCosts) -> CostSheet {
    for entry in &feeds.entries {
        sheet.set(entry.feed, entry.cost);
    }
    for entry in &feeds.entries {
        sheet.set(entry.item, entry.cost);
    }
    sheet
}

/// Pass 4: zeroes items from [`ZERO_COST_MACHINES`].
pub fn zero_cost_overrides(catalog: &Catalog, mut sheet: CostSheet) -> CostSheet {
    for (index, item) in catalog.items().iter().enumerate() {
        if ZERO_COST_MACHINES.contains(&item.machine.as_str()) {
            sheet.set(index, 0.0);
        }
    }
    sheet
}

/// Rounds the sheet and attaches costs to items.
///
/// Items no pass touched cost 0. Rounding is half-to-even.
pub fn finalize(catalog: &Catalog, sheet: CostSheet) -> Vec<CostedItem> {
    let uncosted: Vec<&str> = catalog
        .items()
        .iter()
        .zip(&sheet.costs)
        .filter(|(_, cost)| cost.is_none())
        .map(|(item, _)| item.name.as_str())
        .collect();
    if !uncosted.is_empty() {
        warn!(
            "No cost rule applies to {} items, using 0: {}",
            uncosted.len(),
            uncosted.join(", ")
        );
    }

    catalog
        .items()
        .iter()
        .zip(sheet.costs)
        .map(|(item, cost)| CostedItem {
            item: item.clone(),
            production_cost: cost.unwrap_or(0.0).round_ties_even(),
        })
        .collect()
}

/// Runs all four passes in order.
///
/// # Errors
///
/// Fails on the first recipe, plant or feed entry that names an item the
/// catalog does not contain. No partial result is returned.
pub fn resolve_costs(
    catalog: &Catalog,
    feed_map: &BTreeMap<ItemName, ItemName>,
) -> Result<Vec<CostedItem>, PipelineError> {
    let sheet = recipe_costs(catalog)?;
    let sheet = plant_costs(catalog, sheet)?;
    let feeds = finalize_feed_costs(catalog, &sheet, feed_map)?;
    let sheet = apply_feed_costs(sheet, &feeds);
    let sheet = zero_cost_overrides(catalog, sheet);

    let costed = finalize(catalog, sheet);
    info!("Resolved production costs for {} items", costed.len());
    Ok(costed)
}
