//! Data models and structures for Farmprofit.
//!
//! This module contains the records that flow through the pipeline. Each
//! stage produces a new record type rather than patching the previous one:
//! [`Item`] → [`CostedItem`] → [`EvaluatedItem`] → [`AnnotatedItem`].

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Display name of an item, used as the join key between tables.
///
/// # Example
///
/// ```
/// use farmprofit::models::ItemName;
///
/// let egg = ItemName::from("Egg");
/// assert_eq!(egg.as_str(), "Egg");
/// assert_eq!(egg.to_string(), "Egg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Self {
        ItemName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        ItemName(name.to_string())
    }
}

impl From<String> for ItemName {
    fn from(name: String) -> Self {
        ItemName(name)
    }
}

// ============================================================================
// Catalog Records
// ============================================================================

/// CSV row structure for the item table, before time normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRow {
    /// Unique display name
    pub name: ItemName,
    /// Station that produces the item (e.g., "Bakery", "Field")
    pub machine: String,
    /// Sale price
    pub cost: f64,
    /// Raw production time (e.g., "1h 30min", "Instant")
    pub time: String,
    /// Experience granted per unit produced
    pub experience: f64,
}

/// An item with its production time normalized to whole minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: ItemName,
    pub machine: String,
    /// Sale price
    pub cost: f64,
    /// Production time in minutes
    pub time: u32,
    pub experience: f64,
}

/// One ingredient line of a recipe.
///
/// Several lines sharing a `product` form that product's recipe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeLine {
    pub product: ItemName,
    pub ingredient: ItemName,
    pub quantity: f64,
}

/// A tree or bush and what it costs to plant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plant {
    /// The item harvested from this plant
    pub fruit: ItemName,
    /// Price paid to plant one tree or bush
    #[serde(rename = "plantprice")]
    pub plant_price: f64,
}

// ============================================================================
// Derived Records
// ============================================================================

/// An item after cost resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedItem {
    #[serde(flatten)]
    pub item: Item,
    /// Modeled cost of producing one unit, rounded to a whole number
    pub production_cost: f64,
}

/// An item with its profit and experience metrics.
///
/// Metrics keep full precision so sorting is not distorted by rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedItem {
    #[serde(flatten)]
    pub item: Item,
    pub production_cost: f64,
    /// Sale price minus production cost
    pub total_profit: f64,
    /// `total_profit / time`, or 0 for instant items
    pub profit_per_minute: f64,
    /// `experience / time`, or 0 for instant items
    pub experience_per_minute: f64,
}

impl EvaluatedItem {
    pub fn name(&self) -> &ItemName {
        &self.item.name
    }

    pub fn machine(&self) -> &str {
        &self.item.machine
    }
}

/// A result row ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedItem {
    #[serde(flatten)]
    pub item: EvaluatedItem,
    /// Rare ingredients consumed, e.g. "2 Gold Bar, 1 Diamond"; empty if none
    pub rare_ingredients: String,
}

// ============================================================================
// Query Inputs
// ============================================================================

/// Metric used to order query results. Ordering is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SortKey {
    TotalProfit,
    ProfitPerMinute,
    ExperiencePerMinute,
    Experience,
}

impl SortKey {
    /// All keys in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::TotalProfit,
        SortKey::ProfitPerMinute,
        SortKey::ExperiencePerMinute,
        SortKey::Experience,
    ];

    /// Returns the metric this key sorts by.
    pub fn value(&self, item: &EvaluatedItem) -> f64 {
        match self {
            SortKey::TotalProfit => item.total_profit,
            SortKey::ProfitPerMinute => item.profit_per_minute,
            SortKey::ExperiencePerMinute => item.experience_per_minute,
            SortKey::Experience => item.item.experience,
        }
    }

    /// Maps a 1-based menu number to a key.
    ///
    /// ```
    /// use farmprofit::models::SortKey;
    ///
    /// assert_eq!(SortKey::from_menu_choice(2), Some(SortKey::ProfitPerMinute));
    /// assert_eq!(SortKey::from_menu_choice(5), None);
    /// ```
    pub fn from_menu_choice(choice: usize) -> Option<SortKey> {
        choice
            .checked_sub(1)
            .and_then(|i| SortKey::ALL.get(i))
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TotalProfit => "total_profit",
            SortKey::ProfitPerMinute => "profit_per_minute",
            SortKey::ExperiencePerMinute => "experience_per_minute",
            SortKey::Experience => "experience",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::TotalProfit => "Total Profit",
            SortKey::ProfitPerMinute => "Profit Per Minute",
            SortKey::ExperiencePerMinute => "Experience Per Minute",
            SortKey::Experience => "Total Experience",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .find(|key| key.as_str() == s.trim())
            .copied()
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the catalog a query looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every non-ignored machine, grouped by machine
    AllMachines,
    /// A single machine's products
    Machine(String),
    /// Every product whose recipe uses this ingredient
    Ingredient(ItemName),
}
