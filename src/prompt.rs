//! Interactive selection prompts.
//!
//! Every prompt re-asks until it gets a valid answer. The machine prompt also
//! accepts an empty line, meaning "show all machines". Reading past the end of
//! input is an error so a closed stdin never loops forever.

use std::io::{self, BufRead, Write};

use crate::display::format_menu_grid;
use crate::models::{ItemName, SortKey};

/// Which kind of query the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    ByMachine,
    ByIngredient,
}

/// Parses a 1-based menu number into a 0-based index below `len`.
///
/// ```
/// use farmprofit::prompt::parse_menu_index;
///
/// assert_eq!(parse_menu_index(" 3 ", 5), Some(2));
/// assert_eq!(parse_menu_index("0", 5), None);
/// assert_eq!(parse_menu_index("6", 5), None);
/// assert_eq!(parse_menu_index("two", 5), None);
/// ```
pub fn parse_menu_index(input: &str, len: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=len).contains(&choice) => Some(choice - 1),
        _ => None,
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a choice was made",
        ));
    }
    Ok(line.trim().to_string())
}

/// Asks whether to browse by machine or by ingredient.
pub fn choose_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<QueryMode> {
    loop {
        writeln!(output, "\nChoose an option to get information:")?;
        writeln!(output, "1. By Machine")?;
        writeln!(output, "2. By Ingredient")?;
        write!(output, "Enter the number corresponding to your choice (1/2): ")?;
        output.flush()?;

        match read_answer(input)?.as_str() {
            "1" => return Ok(QueryMode::ByMachine),
            "2" => return Ok(QueryMode::ByIngredient),
            _ => writeln!(output, "Invalid choice. Please enter 1 or 2.")?,
        }
    }
}

/// Asks which metric to sort by.
pub fn choose_sort<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<SortKey> {
    loop {
        writeln!(output, "\nSort by:")?;
        for (i, key) in SortKey::ALL.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, key.label())?;
        }
        write!(output, "Enter the number corresponding to your choice (1/2/3/4): ")?;
        output.flush()?;

        let answer = read_answer(input)?;
        match parse_menu_index(&answer, SortKey::ALL.len()) {
            Some(index) => return Ok(SortKey::ALL[index]),
            None => writeln!(output, "Invalid input. Please choose a number between 1 and 4.")?,
        }
    }
}

/// Asks for a machine. `None` means show every machine.
pub fn choose_machine<R: BufRead, W: Write>(
    machines: &[String],
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<usize>> {
    writeln!(output, "Available machines:")?;
    write!(output, "{}", format_menu_grid(machines, 3))?;

    loop {
        write!(
            output,
            "\nSelect a machine (1-{}, empty for all): ",
            machines.len()
        )?;
        output.flush()?;

        let answer = read_answer(input)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match parse_menu_index(&answer, machines.len()) {
            Some(index) => return Ok(Some(index)),
            None => writeln!(
                output,
                "Invalid choice. Please select a number between 1 and {}.",
                machines.len()
            )?,
        }
    }
}

/// Asks for an ingredient.
pub fn choose_ingredient<R: BufRead, W: Write>(
    ingredients: &[ItemName],
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    let labels: Vec<&str> = ingredients.iter().map(ItemName::as_str).collect();
    writeln!(output, "Available ingredients:")?;
    write!(output, "{}", format_menu_grid(&labels, 5))?;

    loop {
        write!(output, "\nSelect an ingredient (1-{}): ", ingredients.len())?;
        output.flush()?;

        let answer = read_answer(input)?;
        match parse_menu_index(&answer, ingredients.len()) {
            Some(index) => return Ok(index),
            None => writeln!(
                output,
                "Invalid choice. Please enter a number between 1 and {}.",
                ingredients.len()
            )?,
        }
    }
}
