//! Address aggregation logic.
//!
//! This module contains the aggregation pipeline, leaf first:
//! - [`sort`] - ordering and de-duplication of addresses
//! - [`runs`] - detection of runs of consecutive addresses
//! - [`reduce`] - reduction of a run to the fewest aligned CIDR blocks
//! - [`pipeline`] - text in, ordered CIDR blocks out

mod pipeline;
mod reduce;
mod runs;
mod sort;

// Re-export public functions
pub use pipeline::{aggregate, aggregate_strict, aggregate_texts, Summary};
pub use reduce::{reduce_run, reduce_runs};
pub use runs::detect_runs;
pub use sort::{compare, dedup_sorted, sort_addresses};
