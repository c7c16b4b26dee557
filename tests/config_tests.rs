//! Tests for configuration loading.

use std::path::{Path, PathBuf};

use farmprofit::config::Config;
use farmprofit::error::LoadError;
use farmprofit::models::ItemName;

const FULL_CONFIG: &str = r#"
ignore_machines = ["Field", "Mine"]

[files]
items_csv = "data/items.csv"
recipes_csv = "data/recipes.csv"
plants_csv = "/srv/farm/plants.csv"

[animal_feed]
"Chicken Feed" = "Egg"
"Cow Feed" = "Milk"

[rare_ingredients.bars]
"Gold Bar" = true
"Silver Bar" = false

[rare_ingredients.gems]
"Diamond" = true
"#;

#[test]
fn test_parse_full_config() {
    let config = Config::from_toml_str(FULL_CONFIG).unwrap();

    assert_eq!(config.ignore_machines, vec!["Field", "Mine"]);
    assert_eq!(config.files.items_csv, PathBuf::from("data/items.csv"));
    assert_eq!(config.animal_feed.len(), 2);
    assert_eq!(
        config.animal_feed.get("Chicken Feed"),
        Some(&ItemName::from("Egg"))
    );
}

#[test]
fn test_rare_set_keeps_only_flagged_names() {
    let config = Config::from_toml_str(FULL_CONFIG).unwrap();
    let rare = config.rare_ingredient_set();

    assert_eq!(rare.len(), 2);
    assert!(rare.contains("Gold Bar"));
    assert!(rare.contains("Diamond"));
    assert!(!rare.contains("Silver Bar"));
}

#[test]
fn test_optional_sections_default_to_empty() {
    let config = Config::from_toml_str(
        r#"
[files]
items_csv = "items.csv"
recipes_csv = "recipes.csv"
plants_csv = "plants.csv"
"#,
    )
    .unwrap();

    assert!(config.ignore_machines.is_empty());
    assert!(config.animal_feed.is_empty());
    assert!(config.rare_ingredient_set().is_empty());
}

#[test]
fn test_missing_files_section_is_an_error() {
    let err = Config::from_toml_str("ignore_machines = []").unwrap_err();
    assert!(matches!(err, LoadError::Config(_)));
}

#[test]
fn test_relative_paths_resolve_against_base() {
    let config = Config::from_toml_str(FULL_CONFIG).unwrap();
    let files = config.files.relative_to(Path::new("/opt/farm"));

    assert_eq!(files.items_csv, PathBuf::from("/opt/farm/data/items.csv"));
    assert_eq!(files.plants_csv, PathBuf::from("/srv/farm/plants.csv"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = Config::load(Path::new("does/not/exist.toml")).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.toml"));
}
