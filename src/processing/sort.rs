//! Ordering of addresses before run detection.

use itertools::Itertools;
use std::cmp::Ordering;

/// Numeric ordering over addresses.
pub fn compare(a: u32, b: u32) -> Ordering {
    a.cmp(&b)
}

/// Sort addresses ascending. Duplicates are kept.
pub fn sort_addresses(mut addrs: Vec<u32>) -> Vec<u32> {
    addrs.sort_unstable_by(|a, b| compare(*a, *b));
    addrs
}

/// Drop repeated addresses from an ascending sequence.
pub fn dedup_sorted(addrs: Vec<u32>) -> Vec<u32> {
    let before = addrs.len();
    let distinct: Vec<u32> = addrs.into_iter().dedup().collect();
    if distinct.len() != before {
        log::debug!(
            "Removed {} duplicate addresses",
            before - distinct.len()
        );
    }
    distinct
}
