//! Spreadsheet input via calamine.

use crate::error::AggregateError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Default sheet holding the address list.
pub const DEFAULT_SHEET_NAME: &str = "iplist";

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Read column A of `sheet_name`, one token per row.
///
/// Rows with nothing in column A give an empty token.
pub fn read_sheet_column(path: &Path, sheet_name: &str) -> Result<Vec<String>, AggregateError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        AggregateError::Sheet(format!("failed to open {}: {e}", path.display()))
    })?;
    log::debug!(
        "Workbook {} has sheets {:?}",
        path.display(),
        workbook.sheet_names()
    );

    let range = workbook.worksheet_range(sheet_name).map_err(|e| {
        AggregateError::Sheet(format!(
            "failed to read sheet {sheet_name:?} in {}: {e}",
            path.display()
        ))
    })?;

    let (first_row, last_row) = match (range.start(), range.end()) {
        (Some((first, _)), Some((last, _))) => (first, last),
        _ => {
            log::warn!("Sheet {sheet_name:?} is empty");
            return Ok(Vec::new());
        }
    };

    let tokens = (first_row..=last_row)
        .map(|row| range.get_value((row, 0)).map(cell_text).unwrap_or_default())
        .collect();
    Ok(tokens)
}
