//! Inclusive range of consecutive addresses.

use crate::error::AggregateError;
use std::net::Ipv4Addr;

/// Maximal inclusive range `[start, end]` of consecutive addresses.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Run {
    start: u32,
    end: u32,
}

impl Run {
    pub fn new(start: u32, end: u32) -> Result<Run, AggregateError> {
        if start > end {
            return Err(AggregateError::InvalidRun {
                start: Ipv4Addr::from(start),
                end: Ipv4Addr::from(end),
            });
        }
        Ok(Run { start, end })
    }

    /// Single address run.
    pub fn single(addr: u32) -> Run {
        Run {
            start: addr,
            end: addr,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of addresses in the run, at most 2^32.
    pub fn len(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// Merge `next` into this run when it repeats this run's last address or
    /// follows it directly. Runs must be visited in ascending order.
    pub fn merge(self, next: Run) -> Option<Run> {
        debug_assert!(next.start >= self.start, "runs out of order: {self} then {next}");
        let touches = next.start == self.end
            || self.end.checked_add(1).is_some_and(|after| next.start == after);
        if touches {
            Some(Run {
                start: self.start,
                end: self.end.max(next.end),
            })
        } else {
            None
        }
    }

    /// Never true, a run holds at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            Ipv4Addr::from(self.start),
            Ipv4Addr::from(self.end)
        )
    }
}
