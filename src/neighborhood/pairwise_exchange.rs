//! Pairwise-exchange (city swap) scan.
//!
//! For every ordered position pair `(i, j)`, `i < j`, propose the tour with
//! the cities at those positions swapped. Shares the full-recompute and
//! budget behavior of the segment-reversal scan.

use super::{BudgetTracker, Candidate};
use crate::distance::DistanceMatrix;
use crate::models::Cost;
use crate::tabu::{Aspiration, TabuConfig, TabuMemory};

/// Scans the city-swap neighborhood of `tour` and returns the cheapest
/// admissible candidate, or `None` if no candidate qualifies within the
/// evaluation budget.
pub fn pairwise_exchange_scan(
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
            neighbor.swap(i, j);
            let cost = matrix.tour_cost(&neighbor);
            tracker.record(cost);

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
