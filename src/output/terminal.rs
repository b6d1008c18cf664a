//! Terminal output utilities.

use super::{render, OutputFormat};
use crate::error::AggregateError;
use crate::models::CidrBlock;
use colored::Colorize;

/// Header line printed before the quoted list.
pub const HEADER: &str = "Generated CIDRs:";

const INDENT: usize = 4;

/// Format a value as an indented, quoted list entry with a trailing comma.
///
/// # Arguments
/// * `value` - The value to format
/// * `indent` - Number of spaces before the opening quote
pub fn format_field<T: ToString>(value: T, indent: usize) -> String {
    let value_str = value.to_string();
    format!("{:indent$}\"{value_str}\",", "")
}

/// One quoted entry per line.
pub fn render_quoted(blocks: &[CidrBlock]) -> String {
    blocks
        .iter()
        .map(|b| format_field(b, INDENT) + "\n")
        .collect()
}

/// One bare block per line.
pub fn render_plain(blocks: &[CidrBlock]) -> String {
    blocks.iter().map(|b| format!("{b}\n")).collect()
}

/// Print blocks to stdout, with a colored header for the quoted format.
pub fn print_blocks(blocks: &[CidrBlock], format: OutputFormat) -> Result<(), AggregateError> {
    log::debug!("Printing {} blocks as {format}", blocks.len());
    match format {
        OutputFormat::Quoted => {
            println!("{}", HEADER.green().bold());
            print!("{}", render_quoted(blocks));
        }
        _ => print!("{}", render(blocks, format)?),
    }
    Ok(())
}
