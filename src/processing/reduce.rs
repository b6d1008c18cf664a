//! Reduction of a run of consecutive addresses to CIDR blocks.
//!
//! At every cursor position the largest block that is both aligned to the
//! cursor and does not pass the end of the run is emitted. The alignment is
//! bounded by the trailing zeros of the cursor ([`lo_mask`]) and the size by
//! the remaining span; taking the larger prefix of the two at each step gives
//! the fewest blocks for the run.

use crate::models::{block_size, lo_mask, CidrBlock, Run, MAX_LENGTH};

/// Minimal ascending list of aligned blocks covering exactly `run`.
pub fn reduce_run(run: &Run) -> Vec<CidrBlock> {
    // u64 so the cursor can step past 255.255.255.255
    let end = u64::from(run.end());
    let mut cursor = u64::from(run.start());
    let mut blocks = Vec::new();

    while cursor <= end {
        let mask = largest_block_at(cursor as u32, end);
        blocks.push(CidrBlock::from_aligned(cursor as u32, mask));
        cursor += block_size(mask);
    }

    log::trace!("run {run} -> {} blocks", blocks.len());
    blocks
}

/// Reduce runs in order and concatenate the blocks.
pub fn reduce_runs(runs: &[Run]) -> Vec<CidrBlock> {
    runs.iter().flat_map(reduce_run).collect()
}

/// Smallest admissible prefix length at `cursor`: aligned, and the block's
/// last address is not past `end`. /32 is always admissible.
fn largest_block_at(cursor: u32, end: u64) -> u8 {
    (lo_mask(cursor)..=MAX_LENGTH)
        .find(|&len| u64::from(cursor) + block_size(len) - 1 <= end)
        .unwrap_or(MAX_LENGTH)
}
