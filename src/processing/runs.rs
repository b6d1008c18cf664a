//! Detection of runs of consecutive addresses.

use crate::models::Run;
use itertools::Itertools;

/// Partition an ascending address sequence into maximal runs.
///
/// Runs are closed whenever the next address is not the previous one plus
/// one. A repeated address neither extends nor closes the current run, so
/// the result is the same with or without duplicates.
pub fn detect_runs(sorted: &[u32]) -> Vec<Run> {
    let runs: Vec<Run> = sorted
        .iter()
        .map(|&addr| Run::single(addr))
        .coalesce(|prev, next| prev.merge(next).ok_or((prev, next)))
        .collect();
    log::debug!(
        "Detected {} runs in {} addresses",
        runs.len(),
        sorted.len()
    );
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse;

    fn addrs(texts: &[&str]) -> Vec<u32> {
        texts.iter().map(|t| parse(t).unwrap()).collect()
    }

    #[test]
    fn test_detect_runs_empty() {
        assert!(detect_runs(&[]).is_empty());
    }

    #[test]
    fn test_detect_runs_single() {
        let runs = detect_runs(&addrs(&["10.0.0.1"]));
        assert_eq!(runs, vec![Run::single(parse("10.0.0.1").unwrap())]);
    }

    #[test]
    fn test_detect_runs_gaps() {
        let runs = detect_runs(&addrs(&[
            "10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.5", "10.0.0.6", "10.0.0.9",
        ]));
        let text: Vec<String> = runs.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            text,
            vec![
                "10.0.0.1-10.0.0.3",
                "10.0.0.5-10.0.0.6",
                "10.0.0.9-10.0.0.9"
            ]
        );
    }

    #[test]
    fn test_detect_runs_across_octet() {
        let runs = detect_runs(&addrs(&["10.0.0.255", "10.0.1.0"]));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 2);
    }

    #[test]
    fn test_detect_runs_duplicates() {
        let runs = detect_runs(&addrs(&[
            "10.0.0.1", "10.0.0.1", "10.0.0.2", "10.0.0.2", "10.0.0.3",
        ]));
        assert_eq!(
            runs,
            vec![Run::new(parse("10.0.0.1").unwrap(), parse("10.0.0.3").unwrap()).unwrap()]
        );
    }

    #[test]
    fn test_detect_runs_top_of_space() {
        let runs = detect_runs(&[0, u32::MAX - 1, u32::MAX]);
        assert_eq!(
            runs,
            vec![Run::single(0), Run::new(u32::MAX - 1, u32::MAX).unwrap()]
        );
    }

    #[test]
    fn test_detect_runs_maximal() {
        let runs = detect_runs(&[1, 2, 4, 5, 6, 10, 12]);
        for (a, b) in runs.iter().tuple_windows() {
            assert!(u64::from(b.start()) >= u64::from(a.end()) + 2);
        }
    }
}
