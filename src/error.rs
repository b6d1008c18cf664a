//! Error type shared by the library.

use std::net::Ipv4Addr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing or aggregating addresses.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Text is not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid prefix length /{0}, must be 0..=32")]
    InvalidPrefixLength(u8),

    /// Base address has host bits set for the given prefix length.
    #[error("{addr} is not aligned to /{mask}")]
    Misaligned { addr: Ipv4Addr, mask: u8 },

    #[error("invalid run: start {start} is after end {end}")]
    InvalidRun { start: Ipv4Addr, end: Ipv4Addr },

    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or the sheet is missing.
    #[error("spreadsheet error: {0}")]
    Sheet(String),

    #[error("unknown output format {0:?}, expected quoted, plain or json")]
    InvalidFormat(String),

    #[error("error serializing output: {0}")]
    Json(#[from] serde_json::Error),
}
