//! Aggregation pipeline: parse, sort, de-duplicate, detect runs, reduce.

use super::{dedup_sorted, detect_runs, reduce_runs, sort_addresses};
use crate::error::AggregateError;
use crate::models::{parse, CidrBlock};

/// Result of aggregating a list of address texts, with counts for reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Ascending, disjoint CIDR blocks covering exactly the distinct input addresses.
    pub blocks: Vec<CidrBlock>,
    /// Tokens that parsed as an address.
    pub parsed: usize,
    /// Non-empty tokens that did not parse and were skipped.
    pub skipped: usize,
    /// Distinct addresses after de-duplication.
    pub distinct: usize,
    /// Runs of consecutive addresses.
    pub runs: usize,
}

impl Summary {
    /// Blocks in `"a.b.c.d/p"` form.
    pub fn formatted(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.to_string()).collect()
    }
}

/// Aggregate addresses into the fewest CIDR blocks covering exactly them.
///
/// Input order and duplicates do not matter. Empty input gives no blocks.
pub fn aggregate<I>(addrs: I) -> Vec<CidrBlock>
where
    I: IntoIterator<Item = u32>,
{
    aggregate_counted(addrs.into_iter().collect()).0
}

fn aggregate_counted(addrs: Vec<u32>) -> (Vec<CidrBlock>, usize, usize) {
    let sorted = dedup_sorted(sort_addresses(addrs));
    let runs = detect_runs(&sorted);
    (reduce_runs(&runs), sorted.len(), runs.len())
}

/// Parse and aggregate address texts, skipping empty and unparseable tokens.
pub fn aggregate_texts<I, S>(texts: I) -> Summary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut addrs = Vec::new();
    let mut skipped = 0;

    for text in texts {
        let text = text.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        match parse(text) {
            Ok(addr) => addrs.push(addr),
            Err(e) => {
                log::debug!("Skipping token: {e}");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::warn!("Skipped {skipped} entries that are not IPv4 addresses");
    }
    summarize(addrs, skipped)
}

/// Like [`aggregate_texts`], but fails on the first non-empty token that is
/// not an IPv4 address.
pub fn aggregate_strict<I, S>(texts: I) -> Result<Summary, AggregateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let addrs = texts
        .into_iter()
        .filter(|t| !t.as_ref().trim().is_empty())
        .map(|t| parse(t.as_ref()))
        .collect::<Result<Vec<u32>, AggregateError>>()?;
    Ok(summarize(addrs, 0))
}

fn summarize(addrs: Vec<u32>, skipped: usize) -> Summary {
    let parsed = addrs.len();
    let (blocks, distinct, runs) = aggregate_counted(addrs);
    log::info!(
        "Aggregated {parsed} addresses ({distinct} distinct, {runs} runs) into {} CIDRs",
        blocks.len()
    );

    Summary {
        blocks,
        parsed,
        skipped,
        distinct,
        runs,
    }
}
