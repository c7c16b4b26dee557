//! # Farmprofit
//!
//! A command-line tool and library for ranking crafted items in a farming
//! game by profit and experience efficiency.
//!
//! Given a catalog of items, their recipes and plant prices, the crate
//! assigns every item a production cost, derives per-minute metrics, and
//! answers queries by machine or by ingredient:
//!
//! - Recipe products cost the sale price of their ingredients
//! - Tree and bush fruit cost their planting price spread over the harvest
//! - Animal products cost one unit of their feed
//! - Items gathered from nature cost nothing
//!
//! ## Modules
//!
//! - [`models`] - Core records, from raw CSV rows to annotated results
//! - [`catalog`] - The in-memory item, recipe and plant tables
//! - [`time`] - Production time parsing
//! - [`costs`] - Production cost resolution
//! - [`metrics`] - Profit and experience per minute
//! - [`rare`] - Rare ingredient annotation
//! - [`query`] - Filtering and sorting
//! - [`pipeline`] - Preprocessing end to end
//! - [`config`] - TOML configuration loading
//! - [`data`] - CSV data loading
//! - [`display`] - Output formatting
//! - [`prompt`] - Interactive selection
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```no_run
//! use farmprofit::{
//!     config::Config,
//!     display::display_results,
//!     models::{Selection, SortKey},
//!     pipeline,
//! };
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("config.toml")).unwrap();
//! let processed = pipeline::run(&config).unwrap();
//!
//! let rows = processed
//!     .query(&Selection::Machine("Bakery".to_string()), SortKey::ProfitPerMinute)
//!     .unwrap();
//! display_results("Bakery", &rows);
//! ```

pub mod catalog;
pub mod config;
pub mod costs;
pub mod data;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod query;
pub mod rare;
pub mod time;
pub mod wasm;
