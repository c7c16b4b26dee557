//! Farmprofit - Command Line Interface
//!
//! This is the main entry point for the item profitability browser.
//! Run with `--help` to see all available options. Any selection not given
//! on the command line is asked for interactively.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use farmprofit::{
    config::Config,
    display::display_results,
    models::{ItemName, Selection, SortKey},
    pipeline::{self, Processed},
    prompt::{choose_ingredient, choose_machine, choose_mode, choose_sort, QueryMode},
};

/// Command-line arguments for Farmprofit.
#[derive(Parser, Debug)]
#[command(name = "farmprofit")]
#[command(author, version, about = "Rank farm items by profit and experience per minute", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Show the products of a single machine
    #[arg(short, long, conflicts_with_all = ["all_machines", "ingredient"])]
    machine: Option<String>,

    /// Show every non-ignored machine, grouped by machine
    #[arg(short, long, conflicts_with = "ingredient")]
    all_machines: bool,

    /// Show every product whose recipe uses this ingredient
    #[arg(short, long)]
    ingredient: Option<String>,

    /// Metric to sort by (highest first)
    #[arg(short, long, value_enum)]
    sort: Option<SortKey>,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Walks the user through picking a machine or an ingredient.
fn prompt_selection<R: BufRead, W: Write>(
    processed: &Processed,
    input: &mut R,
    output: &mut W,
) -> Result<Selection> {
    match choose_mode(input, output)? {
        QueryMode::ByMachine => {
            let machines = processed.machines();
            if machines.is_empty() {
                bail!("No machines left to choose from after applying ignore_machines");
            }
            Ok(match choose_machine(&machines, input, output)? {
                Some(index) => Selection::Machine(machines[index].clone()),
                None => Selection::AllMachines,
            })
        }
        QueryMode::ByIngredient => {
            let mut ingredients = processed.ingredients();
            if ingredients.is_empty() {
                bail!("The recipe table lists no ingredients");
            }
            let index = choose_ingredient(&ingredients, input, output)?;
            Ok(Selection::Ingredient(ingredients.swap_remove(index)))
        }
    }
}

fn title(selection: &Selection, key: SortKey) -> String {
    match selection {
        Selection::AllMachines => format!("ALL MACHINES by {}", key.label()),
        Selection::Machine(machine) => format!("{} by {}", machine, key.label()),
        Selection::Ingredient(name) => format!("PRODUCTS USING {} by {}", name, key.label()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::load(&args.config)
        .with_context(|| format!("Could not load configuration from {}", args.config.display()))?;
    let processed = pipeline::run(&config).context("Preprocessing failed")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let selection = match (args.machine, args.all_machines, args.ingredient) {
        (Some(machine), _, _) => Selection::Machine(machine),
        (None, true, _) => Selection::AllMachines,
        (None, false, Some(ingredient)) => Selection::Ingredient(ItemName::from(ingredient)),
        (None, false, None) => prompt_selection(&processed, &mut input, &mut output)?,
    };
    let key = match args.sort {
        Some(key) => key,
        None => choose_sort(&mut input, &mut output)?,
    };

    let rows = processed.query(&selection, key)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        display_results(&title(&selection, key), &rows);
    }

    Ok(())
}
