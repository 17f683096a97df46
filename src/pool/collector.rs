// src/pool/collector.rs
// =============================================================================
// The ordering barrier between the pool and the output formatters.
//
// Workers finish in whatever order the network dictates; the collector
// restores the original input order by sorting on each result's position.
// Positions are unique by construction (the job source assigns them
// densely), so the sort is total - no ties, no ambiguity. The collector
// does no I/O at all.
// =============================================================================

use crate::probe::ProbeResult;

/// Sorts an arrival-ordered result set into original input order.
pub fn collect_ordered(mut results: Vec<ProbeResult>) -> Vec<ProbeResult> {
    results.sort_by_key(|result| result.position);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;

    fn result_at(position: usize) -> ProbeResult {
        ProbeResult {
            position,
            scheme: "http".to_string(),
            host: format!("host{}.test", position),
            path: "/".to_string(),
            request_method: "HEAD".to_string(),
            request_dump: String::new(),
            outcome: ProbeOutcome::Success,
            response_status: Some(200),
            response_dump: Some(String::new()),
        }
    }

    #[test]
    fn test_scrambled_arrivals_come_out_in_position_order() {
        let scrambled: Vec<ProbeResult> =
            [4usize, 0, 3, 1, 2].into_iter().map(result_at).collect();

        let ordered = collect_ordered(scrambled);

        let positions: Vec<usize> = ordered.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
        // The records themselves moved with their positions
        assert_eq!(ordered[2].host, "host2.test");
    }

    #[test]
    fn test_empty_input() {
        assert!(collect_ordered(Vec::new()).is_empty());
    }

    #[test]
    fn test_already_ordered_input_is_untouched() {
        let ordered = collect_ordered((0..3).map(result_at).collect());
        let positions: Vec<usize> = ordered.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
