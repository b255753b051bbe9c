//! Search configuration.

use serde::{Deserialize, Serialize};

/// Initial-tour construction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialSolution {
    /// Uniform random permutation.
    Random,
    /// Greedy nearest-neighbor from every start city, cheapest kept.
    NearestNeighbor,
}

/// Neighborhood scan strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Reverse the segment between two positions (2-opt).
    SegmentReversal,
    /// Swap the cities at two positions.
    PairwiseExchange,
}

/// Configuration parameters for the tabu search.
///
/// # Examples
///
/// ```
/// use tsp_tabu::tabu::{InitialSolution, Neighborhood, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_initial_solution(InitialSolution::NearestNeighbor)
///     .with_neighborhood(Neighborhood::SegmentReversal)
///     .with_max_no_improve(50)
///     .with_seed(42);
/// assert_eq!(config.max_no_improve, 50);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// How the starting tour (and any critical-event reseed) is built.
    pub initial_solution: InitialSolution,
    /// Which neighborhood the scan enumerates.
    pub neighborhood: Neighborhood,
    /// Pressure-relief capacity = `ceil(multiplier × city count)` active
    /// ban-table entries.
    pub tabu_capacity_multiplier: f64,
    /// Ban tenure = `max(1, ceil(multiplier × city count))` rounds.
    pub tabu_tenure_multiplier: f64,
    /// Aspiration margin input; the effective margin is `max(1, value)`.
    /// Doubles as the "aspiration-worthy" cost threshold for the budget
    /// extension when [`Self::aspiration_plus`] is on.
    pub aspiration_criterion: u64,
    /// Enables the one-shot candidate-budget extension.
    pub aspiration_plus: bool,
    /// Evaluations required before the extension may fire.
    pub min_candidates: usize,
    /// Candidate evaluation budget per round.
    pub max_candidates: usize,
    /// Extra evaluations granted when the extension fires.
    pub extension_increment: usize,
    /// Stop after this many consecutive rounds without a new best.
    pub max_no_improve: usize,
    /// Soft wall-clock budget in milliseconds, checked once per round.
    pub time_limit_ms: u64,
    /// Reseed a fresh tour when a round has no admissible move; when off,
    /// such a round terminates the search.
    pub critical_event_recovery: bool,
    /// Emit a per-round progress line (iteration, best cost, stagnation).
    pub show_progress: bool,
    /// Random seed (`None` for entropy-seeded runs).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            initial_solution: InitialSolution::Random,
            neighborhood: Neighborhood::SegmentReversal,
            tabu_capacity_multiplier: 1.0,
            tabu_tenure_multiplier: 1.0,
            aspiration_criterion: 0,
            aspiration_plus: false,
            min_candidates: 0,
            max_candidates: usize::MAX,
            extension_increment: 0,
            max_no_improve: 500,
            time_limit_ms: 60_000,
            critical_event_recovery: true,
            show_progress: false,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the initial-tour policy.
    pub fn with_initial_solution(mut self, policy: InitialSolution) -> Self {
        self.initial_solution = policy;
        self
    }

    /// Sets the neighborhood strategy.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the pressure-relief capacity multiplier.
    pub fn with_tabu_capacity_multiplier(mut self, multiplier: f64) -> Self {
        self.tabu_capacity_multiplier = multiplier;
        self
    }

    /// Sets the tenure multiplier.
    pub fn with_tabu_tenure_multiplier(mut self, multiplier: f64) -> Self {
        self.tabu_tenure_multiplier = multiplier;
        self
    }

    /// Sets the aspiration criterion.
    pub fn with_aspiration_criterion(mut self, criterion: u64) -> Self {
        self.aspiration_criterion = criterion;
        self
    }

    /// Enables or disables the candidate-budget extension.
    pub fn with_aspiration_plus(mut self, enabled: bool) -> Self {
        self.aspiration_plus = enabled;
        self
    }

    /// Sets the minimum evaluations before the extension may fire.
    pub fn with_min_candidates(mut self, min: usize) -> Self {
        self.min_candidates = min;
        self
    }

    /// Sets the per-round candidate evaluation budget.
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    /// Sets the extension increment.
    pub fn with_extension_increment(mut self, increment: usize) -> Self {
        self.extension_increment = increment;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_no_improve(mut self, max: usize) -> Self {
        self.max_no_improve = max;
        self
    }

    /// Sets the soft time budget in milliseconds.
    pub fn with_time_limit_ms(mut self, millis: u64) -> Self {
        self.time_limit_ms = millis;
        self
    }

    /// Enables or disables critical-event recovery.
    pub fn with_critical_event_recovery(mut self, enabled: bool) -> Self {
        self.critical_event_recovery = enabled;
        self
    }

    /// Enables or disables per-round progress lines.
    pub fn with_show_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Ban tenure for an instance of `n` cities: `max(1, ceil(mult × n))`.
    pub fn tenure_for(&self, n: usize) -> u32 {
        ((self.tabu_tenure_multiplier * n as f64).ceil() as u32).max(1)
    }

    /// Pressure-relief capacity for an instance of `n` cities:
    /// `ceil(mult × n)` active table entries.
    pub fn capacity_for(&self, n: usize) -> usize {
        (self.tabu_capacity_multiplier * n as f64).ceil() as usize
    }
}
