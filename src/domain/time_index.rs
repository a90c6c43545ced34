// Nearest-timestamp locator over sorted timestamp strings

/// First index whose timestamp is >= `target`, or `times.len()` if none.
/// Timestamps must be non-decreasing and lexicographically ordered, which
/// holds for zero-padded "HH:MM:SS" and ISO-8601 strings.
pub fn lower_bound(times: &[String], target: &str) -> usize {
    times.partition_point(|t| t.as_str() < target)
}

/// Index of the last timestamp at or before `target`, clamped to the
/// ends of the sequence. An exact match returns the match itself; this
/// deliberately biases to the earlier side rather than true
/// nearest-by-distance. Callers must guard against an empty sequence.
pub fn find_closest_index(times: &[String], target: &str) -> usize {
    let idx = lower_bound(times, target);
    if idx == 0 {
        return 0;
    }
    if idx == times.len() {
        return times.len() - 1;
    }
    if times[idx] == target { idx } else { idx - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lower_bound() {
        let ts = times(&["10:00:00", "10:00:05", "10:00:10"]);
        assert_eq!(lower_bound(&ts, "09:59:59"), 0);
        assert_eq!(lower_bound(&ts, "10:00:00"), 0);
        assert_eq!(lower_bound(&ts, "10:00:01"), 1);
        assert_eq!(lower_bound(&ts, "10:00:10"), 2);
        assert_eq!(lower_bound(&ts, "10:00:11"), 3);
    }

    #[test]
    fn test_find_closest_clamps_to_first() {
        let ts = times(&["10:00:00", "10:00:05", "10:00:10"]);
        assert_eq!(find_closest_index(&ts, "00:00:00"), 0);
        assert_eq!(find_closest_index(&ts, "10:00:00"), 0);
    }

    #[test]
    fn test_find_closest_clamps_to_last() {
        let ts = times(&["10:00:00", "10:00:05", "10:00:10"]);
        assert_eq!(find_closest_index(&ts, "10:00:10"), 2);
        assert_eq!(find_closest_index(&ts, "23:59:59"), 2);
    }

    #[test]
    fn test_find_closest_exact_match() {
        let ts = times(&["10:00:00", "10:00:05", "10:00:10"]);
        assert_eq!(find_closest_index(&ts, "10:00:05"), 1);
    }

    #[test]
    fn test_find_closest_biases_to_at_or_before() {
        let ts = times(&["10:00:00", "10:00:05", "10:00:10"]);
        // 10:00:09 is nearer to 10:00:10 by distance, but the contract
        // picks the last timestamp not after the target.
        assert_eq!(find_closest_index(&ts, "10:00:09"), 1);
        assert_eq!(find_closest_index(&ts, "10:00:01"), 0);
    }
}
