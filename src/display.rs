//! Display and formatting utilities for Farmprofit.
//!
//! This module provides functions for formatting query results and selection
//! menus for the terminal.

use crate::models::AnnotatedItem;

/// Formats a duration in minutes to a human-readable string.
///
/// # Example
///
/// ```
/// use farmprofit::display::format_minutes;
///
/// assert_eq!(format_minutes(1560), "1d 2h");
/// assert_eq!(format_minutes(90), "1h 30min");
/// assert_eq!(format_minutes(45), "45min");
/// assert_eq!(format_minutes(0), "Instant");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    let days = minutes / 1440;
    let hours = (minutes % 1440) / 60;
    let mins = minutes % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if mins > 0 {
        parts.push(format!("{}min", mins));
    }

    if parts.is_empty() {
        "Instant".to_string()
    } else {
        parts.join(" ")
    }
}

/// Lays out numbered options in a column-major grid.
///
/// Numbering is 1-based and runs down each column before moving right.
///
/// # Arguments
///
/// * `options` - The option labels, in numbering order
/// * `num_columns` - Maximum number of columns
pub fn format_menu_grid<S: AsRef<str>>(options: &[S], num_columns: usize) -> String {
    if options.is_empty() || num_columns == 0 {
        return String::new();
    }

    let num_rows = options.len().div_ceil(num_columns);
    let label_width = options.iter().map(|o| o.as_ref().len()).max().unwrap_or(0) + 2;
    let number_width = options.len().to_string().len() + 2;

    let mut out = String::new();
    for row in 0..num_rows {
        let mut line = String::new();
        for col in 0..num_columns {
            let index = col * num_rows + row;
            if let Some(option) = options.get(index) {
                line.push_str(&format!(
                    "{:<nw$} {:<lw$}",
                    index + 1,
                    option.as_ref(),
                    nw = number_width,
                    lw = label_width
                ));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Renders result rows as an aligned table.
pub fn format_results_table(rows: &[AnnotatedItem]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.item.name().as_str().len())
        .chain(std::iter::once("Item".len()))
        .max()
        .unwrap_or(4);
    let machine_width = rows
        .iter()
        .map(|r| r.item.machine().len())
        .chain(std::iter::once("Machine".len()))
        .max()
        .unwrap_or(7);

    let mut out = String::new();
    let header = format!(
        "{:<nw$}  {:<mw$}  {:>8}  {:>10}  {:>8}  {:>6}  {:>8}  {}",
        "Item",
        "Machine",
        "Profit",
        "Profit/min",
        "XP/min",
        "XP",
        "Time",
        "Rare ingredients",
        nw = name_width,
        mw = machine_width
    );
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(header.trim_end().len()));
    out.push('\n');

    for row in rows {
        let eval = &row.item;
        let line = format!(
            "{:<nw$}  {:<mw$}  {:>8.0}  {:>10.2}  {:>8.2}  {:>6}  {:>8}  {}",
            eval.name().as_str(),
            eval.machine(),
            eval.total_profit,
            eval.profit_per_minute,
            eval.experience_per_minute,
            eval.item.experience,
            format_minutes(eval.item.time),
            row.rare_ingredients,
            nw = name_width,
            mw = machine_width
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Prints query results to stdout.
pub fn display_results(title: &str, rows: &[AnnotatedItem]) {
    println!();
    println!("[{}]", title);
    if rows.is_empty() {
        println!("  No items match this selection.");
        return;
    }
    print!("{}", format_results_table(rows));
    println!();
}
