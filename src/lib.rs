// cargo watch -x 'fmt' -x 'test'

//! Aggregate a list of IPv4 addresses into the fewest CIDR blocks that cover
//! exactly those addresses.
//!
//! ```
//! use ip_cidr_aggregate::processing::aggregate_texts;
//! let summary = aggregate_texts(["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
//! assert_eq!(summary.formatted(), vec!["10.0.0.1/32", "10.0.0.2/31"]);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{CommandLine, Config};
pub use error::AggregateError;
pub use models::{CidrBlock, Run};
pub use processing::Summary;

/// Read the configured input file and aggregate its addresses.
///
/// Entries that are not IPv4 addresses are skipped, or rejected when
/// [`Config::strict`] is set.
pub fn aggregate_file(config: &Config) -> Result<Summary, AggregateError> {
    log::info!(
        "#Start aggregate_file() input={} sheet={}",
        config.input.display(),
        config.sheet_name
    );
    let tokens = input::read_addresses(&config.input, config)?;
    if config.strict {
        processing::aggregate_strict(&tokens)
    } else {
        Ok(processing::aggregate_texts(&tokens))
    }
}
