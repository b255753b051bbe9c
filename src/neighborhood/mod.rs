//! Neighborhood scans with a bounded evaluation budget.
//!
//! - [`segment_reversal`] — 2-opt edge reversal
//! - [`pairwise_exchange`] — City swap
//!
//! Both strategies enumerate ordered position pairs `(i, j)`, `i < j`, in
//! scan order, recompute each candidate's full tour cost, and return the
//! cheapest admissible candidate (not banned, or banned but admitted by
//! aspiration). Ties on cost keep the first-found candidate. A scan stops
//! after `max_candidates` evaluations; when aspiration-plus is enabled the
//! budget grows once by `extension_increment` further contiguous
//! evaluations after an aspiration-worthy cost has been seen past the
//! `min_candidates` mark. `None` means no admissible candidate exists —
//! a critical event for the caller.

mod pairwise_exchange;
mod segment_reversal;

pub use pairwise_exchange::pairwise_exchange_scan;
pub use segment_reversal::segment_reversal_scan;

use crate::distance::DistanceMatrix;
use crate::models::Cost;
use crate::tabu::{Aspiration, Neighborhood, TabuConfig, TabuMemory};

/// A candidate tour proposed by a neighborhood scan.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The proposed tour.
    pub tour: Vec<usize>,
    /// Its full recomputed cost.
    pub cost: Cost,
}

/// Runs the configured scan strategy over `tour`.
pub fn best_admissible(
    tour: &[usize],
    matrix: &DistanceMatrix,
    memory: &TabuMemory,
    aspiration: &Aspiration,
    best_cost: Cost,
    config: &TabuConfig,
) -> Option<Candidate> {
    match config.neighborhood {
        Neighborhood::SegmentReversal => {
            segment_reversal_scan(tour, matrix, memory, aspiration, best_cost, config)
        }
        Neighborhood::PairwiseExchange => {
            pairwise_exchange_scan(tour, matrix, memory, aspiration, best_cost, config)
        }
    }
}

/// Tracks the evaluation budget of one scan, including the one-shot
/// aspiration-plus extension.
pub(crate) struct BudgetTracker {
    examined: usize,
    budget: usize,
    extended: bool,
    plus: bool,
    threshold: Cost,
    min_candidates: usize,
    increment: usize,
}

impl BudgetTracker {
    pub(crate) fn new(config: &TabuConfig) -> Self {
        Self {
            examined: 0,
            budget: config.max_candidates,
            extended: false,
            plus: config.aspiration_plus,
            threshold: Cost::new(config.aspiration_criterion),
            min_candidates: config.min_candidates,
            increment: config.extension_increment,
        }
    }

    /// Whether the next candidate may still be evaluated.
    pub(crate) fn exhausted(&self) -> bool {
        self.examined >= self.budget
    }

    /// Records one evaluated candidate and arms the extension when its
    /// cost reaches the aspiration-worthy threshold past the minimum mark.
    /// The extension grants extra contiguous evaluations exactly once.
    pub(crate) fn record(&mut self, cost: Cost) {
        self.examined += 1;
        if self.plus
            && !self.extended
            && cost >= self.threshold
            && self.examined >= self.min_candidates
        {
            self.budget = self.budget.saturating_add(self.increment);
            self.extended = true;
        }
    }
}
