//! Output formatting for generated CIDR blocks.
//!
//! This module handles formatting and outputting the blocks:
//! - [`terminal`] - quoted list and plain text, colored header
//! - [`json`] - JSON array

mod json;
mod terminal;

use crate::error::AggregateError;
use crate::models::CidrBlock;
use std::str::FromStr;

pub use json::render_json;
pub use terminal::{format_field, print_blocks, render_plain, render_quoted, HEADER};

/// How the block list is written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Generated CIDRs:` then one `"a.b.c.d/p",` per line, ready to paste into a list.
    #[default]
    Quoted,
    /// One `a.b.c.d/p` per line.
    Plain,
    /// JSON array of strings.
    Json,
}

impl FromStr for OutputFormat {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quoted" => Ok(OutputFormat::Quoted),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AggregateError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Quoted => "quoted",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// Render blocks as text in the given format.
pub fn render(blocks: &[CidrBlock], format: OutputFormat) -> Result<String, AggregateError> {
    match format {
        OutputFormat::Quoted => Ok(format!("{HEADER}\n{}", render_quoted(blocks))),
        OutputFormat::Plain => Ok(render_plain(blocks)),
        OutputFormat::Json => render_json(blocks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks() -> Vec<CidrBlock> {
        vec![
            "10.0.0.1/32".parse().unwrap(),
            "10.0.0.2/31".parse().unwrap(),
        ]
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("quoted".parse::<OutputFormat>().unwrap(), OutputFormat::Quoted);
        assert_eq!("PLAIN".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(AggregateError::InvalidFormat(_))
        ));
        assert_eq!(OutputFormat::default().to_string(), "quoted");
    }

    #[test]
    fn test_render_quoted() {
        assert_eq!(
            render(&blocks(), OutputFormat::Quoted).unwrap(),
            "Generated CIDRs:\n    \"10.0.0.1/32\",\n    \"10.0.0.2/31\",\n"
        );
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(
            render(&blocks(), OutputFormat::Plain).unwrap(),
            "10.0.0.1/32\n10.0.0.2/31\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&[], OutputFormat::Quoted).unwrap(),
            "Generated CIDRs:\n"
        );
        assert_eq!(render(&[], OutputFormat::Plain).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
    }
}
