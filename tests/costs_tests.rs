//! Tests for production cost resolution.

use std::collections::BTreeMap;

use farmprofit::catalog::Catalog;
use farmprofit::costs::{
    apply_feed_costs, finalize_feed_costs, plant_costs, recipe_costs, resolve_costs,
};
use farmprofit::error::PipelineError;
use farmprofit::models::{CostedItem, Item, ItemName, Plant, RecipeLine};

fn item(name: &str, machine: &str, cost: f64) -> Item {
    Item {
        name: ItemName::from(name),
        machine: machine.to_string(),
        cost,
        time: 10,
        experience: 1.0,
    }
}

fn line(product: &str, ingredient: &str, quantity: f64) -> RecipeLine {
    RecipeLine {
        product: ItemName::from(product),
        ingredient: ItemName::from(ingredient),
        quantity,
    }
}

fn plant(fruit: &str, plant_price: f64) -> Plant {
    Plant {
        fruit: ItemName::from(fruit),
        plant_price,
    }
}

fn feeds(pairs: &[(&str, &str)]) -> BTreeMap<ItemName, ItemName> {
    pairs
        .iter()
        .map(|(feed, item)| (ItemName::from(*feed), ItemName::from(*item)))
        .collect()
}

fn cost_of(costed: &[CostedItem], name: &str) -> f64 {
    costed
        .iter()
        .find(|c| c.item.name.as_str() == name)
        .map(|c| c.production_cost)
        .unwrap_or_else(|| panic!("{} missing from result", name))
}

fn farm_items() -> Vec<Item> {
    vec![
        item("Wheat", "Field", 3.0),
        item("Corn", "Field", 7.0),
        item("Chicken Feed", "Feed Mill", 7.0),
        item("Egg", "Chicken Coop", 18.0),
        item("Bread", "Bakery", 21.0),
        item("Brown Sugar", "Sugar Mill", 32.0),
        item("Sugarcane", "Field", 14.0),
        item("Cookie", "Bakery", 104.0),
        item("Apple", "Tree", 39.0),
        item("Honeycomb", "Beehive", 97.0),
    ]
}

#[test]
fn test_recipe_cost_uses_ingredient_sale_price() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Bread", "Wheat", 3.0)],
        vec![],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &BTreeMap::new()).unwrap();

    assert_eq!(cost_of(&costed, "Bread"), 9.0);
}

#[test]
fn test_recipe_cost_is_one_level_deep() {
    // Brown Sugar has its own recipe, but Cookie is costed from its sale price
    let catalog = Catalog::new(
        farm_items(),
        vec![
            line("Brown Sugar", "Sugarcane", 1.0),
            line("Cookie", "Wheat", 2.0),
            line("Cookie", "Egg", 2.0),
            line("Cookie", "Brown Sugar", 1.0),
        ],
        vec![],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &BTreeMap::new()).unwrap();

    assert_eq!(cost_of(&costed, "Brown Sugar"), 14.0);
    assert_eq!(cost_of(&costed, "Cookie"), 2.0 * 3.0 + 2.0 * 18.0 + 32.0);
}

#[test]
fn test_plant_cost_divides_by_harvest() {
    let catalog = Catalog::new(farm_items(), vec![], vec![plant("Apple", 130.0)]).unwrap();

    let costed = resolve_costs(&catalog, &BTreeMap::new()).unwrap();

    assert_eq!(cost_of(&costed, "Apple"), 10.0);
}

#[test]
fn test_plant_cost_overrides_recipe_cost() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Apple", "Wheat", 10.0)],
        vec![plant("Apple", 260.0)],
    )
    .unwrap();

    let sheet = recipe_costs(&catalog).unwrap();
    assert_eq!(sheet.get(catalog.index_of("Apple").unwrap()), Some(30.0));

    let sheet = plant_costs(&catalog, sheet).unwrap();
    assert_eq!(sheet.get(catalog.index_of("Apple").unwrap()), Some(20.0));
}

#[test]
fn test_honeycomb_is_always_fixed() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Honeycomb", "Corn", 20.0)],
        vec![plant("Honeycomb", 1300.0)],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &BTreeMap::new()).unwrap();

    assert_eq!(cost_of(&costed, "Honeycomb"), 48.0);
}

#[test]
fn test_feed_cost_is_divided_and_copied() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Chicken Feed", "Wheat", 3.0)],
        vec![],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &feeds(&[("Chicken Feed", "Egg")])).unwrap();

    assert_eq!(cost_of(&costed, "Chicken Feed"), 3.0);
    assert_eq!(cost_of(&costed, "Egg"), 3.0);
}

#[test]
fn test_feed_phases_read_finalized_costs() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Chicken Feed", "Wheat", 3.0)],
        vec![],
    )
    .unwrap();
    let feed_map = feeds(&[("Chicken Feed", "Egg")]);
    let feed_index = catalog.index_of("Chicken Feed").unwrap();
    let egg_index = catalog.index_of("Egg").unwrap();

    let sheet = recipe_costs(&catalog).unwrap();
    let finalized = finalize_feed_costs(&catalog, &sheet, &feed_map).unwrap();
    assert_eq!(finalized.cost_of(feed_index), Some(3.0));

    // The input sheet is untouched until the finalized costs are applied
    assert_eq!(sheet.get(feed_index), Some(9.0));
    assert_eq!(sheet.get(egg_index), None);

    let sheet = apply_feed_costs(sheet, &finalized);
    assert_eq!(sheet.get(feed_index), Some(3.0));
    assert_eq!(sheet.get(egg_index), Some(3.0));
}

#[test]
fn test_feed_cost_rounds_after_division() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Chicken Feed", "Wheat", 2.0), line("Chicken Feed", "Corn", 1.0)],
        vec![],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &feeds(&[("Chicken Feed", "Egg")])).unwrap();

    // 13 / 3 = 4.33
    assert_eq!(cost_of(&costed, "Chicken Feed"), 4.0);
    assert_eq!(cost_of(&costed, "Egg"), 4.0);
}

#[test]
fn test_zero_cost_machines_override_everything() {
    let items = vec![
        item("Wheat", "Field", 3.0),
        item("Corn", "Field", 7.0),
        item("Gold Ore", "Mine", 40.0),
        item("Feather Feed", "Feed Mill", 10.0),
        item("Duck Feather", "Duck Salon", 50.0),
        item("Fishing Lure", "Lure Workbench", 0.0),
        item("Fishing Net", "Net Maker", 0.0),
        item("Bass", "Fish", 0.0),
        item("Lobster", "Lobster Pool", 0.0),
        item("Fish Fillet", "Fish Pond", 0.0),
    ];
    let catalog = Catalog::new(
        items,
        vec![
            line("Corn", "Wheat", 5.0),
            line("Feather Feed", "Wheat", 9.0),
            line("Fishing Lure", "Wheat", 2.0),
            line("Fishing Net", "Wheat", 4.0),
            line("Bass", "Wheat", 1.0),
            line("Lobster", "Wheat", 6.0),
            line("Fish Fillet", "Wheat", 1.0),
        ],
        vec![plant("Gold Ore", 1300.0)],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &feeds(&[("Feather Feed", "Duck Feather")])).unwrap();

    assert_eq!(cost_of(&costed, "Corn"), 0.0);
    assert_eq!(cost_of(&costed, "Gold Ore"), 0.0);
    assert_eq!(cost_of(&costed, "Duck Feather"), 0.0);
    assert_eq!(cost_of(&costed, "Fishing Lure"), 0.0);
    assert_eq!(cost_of(&costed, "Fishing Net"), 0.0);
    assert_eq!(cost_of(&costed, "Bass"), 0.0);
    assert_eq!(cost_of(&costed, "Lobster"), 0.0);
    assert_eq!(cost_of(&costed, "Feather Feed"), 9.0);
    // Machine names match exactly
    assert_eq!(cost_of(&costed, "Fish Fillet"), 3.0);
}

#[test]
fn test_rounding_is_half_to_even() {
    let items = vec![
        item("Seed", "Field", 5.0),
        item("Pebble", "Field", 7.0),
        item("Half", "Workshop", 1.0),
        item("ThreeHalves", "Workshop", 1.0),
    ];
    let catalog = Catalog::new(
        items,
        vec![line("Half", "Seed", 0.5), line("ThreeHalves", "Pebble", 0.5)],
        vec![],
    )
    .unwrap();

    let costed = resolve_costs(&catalog, &BTreeMap::new()).unwrap();

    assert_eq!(cost_of(&costed, "Half"), 2.0);
    assert_eq!(cost_of(&costed, "ThreeHalves"), 4.0);
}

#[test]
fn test_items_without_rule_cost_nothing() {
    let catalog = Catalog::new(farm_items(), vec![], vec![]).unwrap();

    let costed = resolve_costs(&catalog, &BTreeMap::new()).unwrap();

    assert_eq!(costed.len(), farm_items().len());
    assert_eq!(cost_of(&costed, "Bread"), 0.0);
}

#[test]
fn test_unknown_ingredient_aborts() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Bread", "Rye", 3.0)],
        vec![],
    )
    .unwrap();

    let err = resolve_costs(&catalog, &BTreeMap::new()).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::UnknownIngredient { ref ingredient, .. } if ingredient == "Rye"
    ));
}

#[test]
fn test_unknown_product_aborts() {
    let catalog = Catalog::new(
        farm_items(),
        vec![line("Bagel", "Wheat", 3.0)],
        vec![],
    )
    .unwrap();

    let err = resolve_costs(&catalog, &BTreeMap::new()).unwrap_err();

    assert_eq!(err, PipelineError::UnknownProduct("Bagel".to_string()));
}

#[test]
fn test_unknown_fruit_aborts() {
    let catalog = Catalog::new(farm_items(), vec![], vec![plant("Mango", 130.0)]).unwrap();

    let err = resolve_costs(&catalog, &BTreeMap::new()).unwrap_err();

    assert_eq!(err, PipelineError::UnknownFruit("Mango".to_string()));
}

#[test]
fn test_unknown_feed_aborts() {
    let catalog = Catalog::new(farm_items(), vec![], vec![]).unwrap();

    let err = resolve_costs(&catalog, &feeds(&[("Pig Feed", "Bacon")])).unwrap_err();

    assert_eq!(err, PipelineError::UnknownFeed("Pig Feed".to_string()));
}

#[test]
fn test_unknown_feed_product_aborts() {
    let catalog = Catalog::new(farm_items(), vec![], vec![]).unwrap();

    let err = resolve_costs(&catalog, &feeds(&[("Chicken Feed", "Omelette")])).unwrap_err();

    assert_eq!(
        err,
        PipelineError::UnknownFeedProduct {
            feed: "Chicken Feed".to_string(),
            item: "Omelette".to_string(),
        }
    );
}

#[test]
fn test_duplicate_item_names_are_rejected() {
    let mut items = farm_items();
    items.push(item("Wheat", "Field", 4.0));

    let err = Catalog::new(items, vec![], vec![]).unwrap_err();

    assert_eq!(err, PipelineError::DuplicateItem("Wheat".to_string()));
}
