//! Reading address candidates from an input file.
//!
//! - [`sheet`] - spreadsheets (xlsx, xlsm, xls, ods), first column of a named sheet
//! - [`text`] - plain text or CSV, first field of each line

mod sheet;
mod text;

use crate::config::Config;
use crate::error::AggregateError;
use std::path::Path;

pub use sheet::{read_sheet_column, DEFAULT_SHEET_NAME};
pub use text::{first_field, read_text_column};

const SHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// True when `path` has a spreadsheet extension.
pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SHEET_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read one raw address token per row from `path`.
///
/// Spreadsheets are read from the sheet named in [`Config::sheet_name`],
/// anything else is read as text.
pub fn read_addresses(path: &Path, config: &Config) -> Result<Vec<String>, AggregateError> {
    if !path.exists() {
        return Err(AggregateError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        });
    }
    let tokens = if is_spreadsheet(path) {
        read_sheet_column(path, &config.sheet_name)?
    } else {
        read_text_column(path)?
    };
    log::info!("Read {} rows from {}", tokens.len(), path.display());
    Ok(tokens)
}
