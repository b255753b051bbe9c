//! Segment-reversal (2-opt) scan.
//!
//! For every ordered position pair `(i, j)`, `i < j`, propose the tour with
//! `tour[i..=j]` reversed. Candidate cost is recomputed in full rather than
//! incrementally — a known performance ceiling that stays acceptable
//! because the evaluation budget bounds the candidate count per round.

use super::{BudgetTracker, Candidate};
use crate::distance::DistanceMatrix;
use crate::models::Cost;
use crate::tabu::{Aspiration, TabuConfig, TabuMemory};

/// Scans the 2-opt neighborhood of `tour` and returns the cheapest
/// admissible candidate, or `None` if no candidate qualifies within the
/// evaluation budget.
///
/// Admissibility is judged on the city pair at positions `(i, j)` of the
/// current tour; `best_cost` feeds the aspiration override.
pub fn segment_reversal_scan(
    tour: &[usize],
    matrix: &DistanceMatrix,
    memory: &TabuMemory,
    aspiration: &Aspiration,
    best_cost: Cost,
    config: &TabuConfig,
) -> Option<Candidate> {
    let n = tour.len();
    let mut tracker = BudgetTracker::new(config);
    let mut best: Option<Candidate> = None;
    let mut best_candidate_cost = Cost::UNREACHABLE;

    'scan: for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if tracker.exhausted() {
                break 'scan;
            }
            let mut neighbor = tour.to_vec();
            neighbor[i..=j].reverse();
            let cost = matrix.tour_cost(&neighbor);
            tracker.record(cost);

            // Strict < keeps the first-found candidate on ties.
            if cost < best_candidate_cost
                && aspiration.is_admissible(memory, tour[i], tour[j], cost, best_cost)
            {
                best_candidate_cost = cost;
                best = Some(Candidate {
                    tour: neighbor,
                    cost,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(n: usize) -> DistanceMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { 5 }).collect())
            .collect();
        DistanceMatrix::from_values(rows).expect("valid")
    }

    fn open_memory(n: usize) -> TabuMemory {
        TabuMemory::new(n, 3, usize::MAX)
    }

    #[test]
    fn test_budget_of_one_examines_only_first_pair() {
        let matrix = uniform(5);
        let memory = open_memory(5);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default().with_max_candidates(1);

        let candidate = segment_reversal_scan(
            &[0, 1, 2, 3, 4],
            &matrix,
            &memory,
            &aspiration,
            Cost::new(25),
            &config,
        )
        .expect("first pair is admissible");
        // Only positions (0, 1) were evaluated.
        assert_eq!(candidate.tour, vec![1, 0, 2, 3, 4]);
    }

    #[test]
    fn test_ties_keep_first_found() {
        // All tours cost the same, so every candidate ties.
        let matrix = uniform(4);
        let memory = open_memory(4);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default();

        let candidate = segment_reversal_scan(
            &[0, 1, 2, 3],
            &matrix,
            &memory,
            &aspiration,
            Cost::new(20),
            &config,
        )
        .expect("admissible");
        assert_eq!(candidate.tour, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_finds_improving_reversal() {
        // Cities on a line; [0, 2, 1, 3] has a crossing that one reversal fixes.
        let matrix = DistanceMatrix::from_values(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 1, 2],
            vec![2, 1, 0, 1],
            vec![3, 2, 1, 0],
        ])
        .expect("valid");
        let memory = open_memory(4);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default();

        let start = [0, 2, 1, 3];
        let start_cost = matrix.tour_cost(&start);
        let candidate = segment_reversal_scan(
            &start,
            &matrix,
            &memory,
            &aspiration,
            start_cost,
            &config,
        )
        .expect("admissible");
        assert!(candidate.cost < start_cost);
        assert_eq!(candidate.cost, matrix.tour_cost(&candidate.tour));
    }

    #[test]
    fn test_banned_pair_is_skipped() {
        let matrix = uniform(5);
        let mut memory = open_memory(5);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default();

        // Ban the cities at positions (0, 1); no candidate improves, so
        // aspiration cannot override and the scan must move on.
        memory.ban(0, 1);
        let candidate = segment_reversal_scan(
            &[0, 1, 2, 3, 4],
            &matrix,
            &memory,
            &aspiration,
            Cost::new(25),
            &config,
        )
        .expect("other pairs admissible");
        // Next pair in scan order is (0, 2): reverse tour[0..=2].
        assert_eq!(candidate.tour, vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn test_all_banned_returns_none() {
        let matrix = uniform(3);
        let mut memory = open_memory(3);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default();

        memory.ban(0, 1);
        memory.ban(0, 2);
        memory.ban(1, 2);
        let candidate = segment_reversal_scan(
            &[0, 1, 2],
            &matrix,
            &memory,
            &aspiration,
            Cost::new(15),
            &config,
        );
        assert!(candidate.is_none());
    }

    #[test]
    fn test_aspiration_overrides_ban() {
        let matrix = DistanceMatrix::from_values(vec![
            vec![0, 1, 50, 50],
            vec![1, 0, 1, 50],
            vec![50, 1, 0, 1],
            vec![50, 50, 1, 0],
        ])
        .expect("valid");
        let mut memory = open_memory(4);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default();

        // Ban every pair, then hand the scan a best cost so poor that the
        // cheap tour aspires past its ban.
        for a in 0..4 {
            for b in (a + 1)..4 {
                memory.ban(a, b);
            }
        }
        let candidate = segment_reversal_scan(
            &[1, 0, 2, 3],
            &matrix,
            &memory,
            &aspiration,
            Cost::new(1_000),
            &config,
        )
        .expect("aspiration admits");
        assert!(candidate.cost < Cost::new(1_000));
    }

    #[test]
    fn test_unreachable_candidates_never_selected() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![Cost::ZERO, Cost::UNREACHABLE, Cost::UNREACHABLE],
            vec![Cost::UNREACHABLE, Cost::ZERO, Cost::UNREACHABLE],
            vec![Cost::UNREACHABLE, Cost::UNREACHABLE, Cost::ZERO],
        ])
        .expect("valid");
        let memory = open_memory(3);
        let aspiration = Aspiration::new(0);
        let config = TabuConfig::default();

        let candidate = segment_reversal_scan(
            &[0, 1, 2],
            &matrix,
            &memory,
            &aspiration,
            Cost::UNREACHABLE,
            &config,
        );
        assert!(candidate.is_none());
    }
}
