//! Plain text and CSV input: the first field of every line.

use crate::error::AggregateError;
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for the first CSV field, quoted or bare.
static FIRST_FIELD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_first_field_regex() -> &'static Regex {
    FIRST_FIELD_REGEX.get_or_init(|| {
        Regex::new(r#"^\s*(?:"([^"]*)"|'([^']*)'|([^,;\t]*))"#).expect("Invalid Regex")
    })
}

/// First field of a CSV line, with surrounding quotes and whitespace removed.
///
/// # Examples
/// ```
/// use ip_cidr_aggregate::input::first_field;
/// assert_eq!(first_field(r#""10.0.0.1",web01"#), "10.0.0.1");
/// ```
pub fn first_field(line: &str) -> &str {
    get_first_field_regex()
        .captures(line)
        .and_then(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| m.as_str().trim())
        .unwrap_or("")
}

/// Read the first field of every non-comment line of a text file.
///
/// Bytes that are not UTF-8 (e.g. a Latin-1 export) become U+FFFD, so only
/// the token on that line can fail to parse. A leading UTF-8 BOM is dropped.
pub fn read_text_column(path: &Path) -> Result<Vec<String>, AggregateError> {
    let bytes = std::fs::read(path).map_err(|source| AggregateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        log::warn!("{} is not valid UTF-8, invalid bytes replaced", path.display());
    }

    let tokens = content
        .strip_prefix('\u{feff}')
        .unwrap_or(content.as_ref())
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(|line| first_field(line).to_string())
        .collect();
    Ok(tokens)
}
