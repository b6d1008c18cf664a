//! Domain models for CIDR aggregation.
//!
//! This module contains the core data structures used throughout the application:
//! - [`CidrBlock`] - aligned IPv4 block in CIDR notation, plus the address codec
//! - [`Run`] - inclusive range of consecutive addresses

mod ipv4;
mod run;

// Re-export public types
pub use ipv4::{
    block_size, format, get_cidr_mask, is_aligned, lo_mask, parse, CidrBlock, MAX_LENGTH,
};
pub use run::Run;
