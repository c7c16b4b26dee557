//! In-memory catalog of items, recipes and plants.

use std::collections::HashMap;

use crate::error::PipelineError;
use crate::models::{Item, ItemName, Plant, RecipeLine};

/// The static tables for one run, with a name index built once.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    recipes: Vec<RecipeLine>,
    plants: Vec<Plant>,
    index: HashMap<ItemName, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate item names.
    pub fn new(
        items: Vec<Item>,
        recipes: Vec<RecipeLine>,
        plants: Vec<Plant>,
    ) -> Result<Self, PipelineError> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if index.insert(item.name.clone(), i).is_some() {
                return Err(PipelineError::DuplicateItem(item.name.to_string()));
            }
        }

        Ok(Catalog {
            items,
            recipes,
            plants,
            index,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn recipes(&self) -> &[RecipeLine] {
        &self.recipes
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Position of the named item in [`Catalog::items`].
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index_of(name).map(|i| &self.items[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
