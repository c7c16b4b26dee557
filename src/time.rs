//! Production time normalization.
//!
//! Item tables store times as short human strings. Everything downstream
//! works in whole minutes.

use log::debug;

use crate::error::PipelineError;
use crate::models::{Item, ItemRow};

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Hour,
    Minute,
}

/// Splits a time string into `(amount, unit)` pairs.
///
/// Whitespace between the number and its unit is optional.
fn tokenize(value: &str) -> Option<Vec<(u32, Unit)>> {
    let mut parts = Vec::new();
    let mut rest = value;

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return None;
        }
        let amount: u32 = rest[..digits_end].parse().ok()?;
        rest = rest[digits_end..].trim_start();

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let unit = match &rest[..unit_end] {
            "d" => Unit::Day,
            "h" => Unit::Hour,
            "min" => Unit::Minute,
            _ => return None,
        };
        rest = rest[unit_end..].trim_start();

        parts.push((amount, unit));
    }

    Some(parts)
}

/// Converts a time string to whole minutes.
///
/// Accepted forms are `"<d>d <h>h"`, `"<h>h <m>min"`, `"<d>d"`, `"<h>h"`,
/// `"<m>min"` and `"Instant"`. Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use farmprofit::time::parse_minutes;
///
/// assert_eq!(parse_minutes("1d 2h"), Some(1560));
/// assert_eq!(parse_minutes("1h 30min"), Some(90));
/// assert_eq!(parse_minutes("45 min"), Some(45));
/// assert_eq!(parse_minutes("Instant"), Some(0));
/// assert_eq!(parse_minutes("soon"), None);
/// ```
pub fn parse_minutes(value: &str) -> Option<u32> {
    let value = value.trim();
    if value == "Instant" {
        return Some(0);
    }

    let parts = tokenize(value)?;
    let (days, hours, minutes) = match parts.as_slice() {
        [(d, Unit::Day), (h, Unit::Hour)] => (*d, *h, 0),
        [(h, Unit::Hour), (m, Unit::Minute)] => (0, *h, *m),
        [(d, Unit::Day)] => (*d, 0, 0),
        [(h, Unit::Hour)] => (0, *h, 0),
        [(m, Unit::Minute)] => (0, 0, *m),
        _ => return None,
    };

    days.checked_mul(MINUTES_PER_DAY)?
        .checked_add(hours.checked_mul(MINUTES_PER_HOUR)?)?
        .checked_add(minutes)
}

/// Normalizes a single item row.
pub fn normalize_item(row: ItemRow) -> Result<Item, PipelineError> {
    let time = parse_minutes(&row.time).ok_or_else(|| PipelineError::MalformedTime {
        item: row.name.to_string(),
        value: row.time.clone(),
    })?;

    Ok(Item {
        name: row.name,
        machine: row.machine,
        cost: row.cost,
        time,
        experience: row.experience,
    })
}

/// Normalizes every item row, stopping at the first malformed time.
pub fn normalize_times(rows: Vec<ItemRow>) -> Result<Vec<Item>, PipelineError> {
    let items = rows
        .into_iter()
        .map(normalize_item)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Normalized production times for {} items", items.len());
    Ok(items)
}
