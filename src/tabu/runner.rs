//! Tabu search controller.
//!
//! # Algorithm
//!
//! 1. Build the starting tour (random or nearest-neighbor all-starts);
//!    current = best = initial.
//! 2. Each round: check the soft time budget, then ask the configured
//!    neighborhood scan for the best admissible candidate under the ban
//!    table and aspiration policy.
//!    - No candidate (critical event): reseed a fresh tour and continue,
//!      or terminate when recovery is disabled.
//!    - Otherwise adopt the candidate, ban every consecutive city pair of
//!      the new tour (wrap-around edge included), update best/stagnation,
//!      and age all bans once.
//! 3. Stop when the stagnation limit or the time budget is reached, or a
//!    critical event has no recovery path. The best tour found is always
//!    returned; only matrix construction can fail, never the search.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::aspiration::Aspiration;
use super::config::{InitialSolution, TabuConfig};
use super::memory::TabuMemory;
use crate::constructive::{nearest_neighbor_tour, random_tour};
use crate::distance::DistanceMatrix;
use crate::models::Cost;
use crate::neighborhood::{best_admissible, Candidate};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The stagnation limit was reached.
    Stagnated,
    /// The soft time budget ran out; the best-so-far tour is returned.
    TimeLimit,
    /// A round had no admissible move and recovery is disabled.
    DeadEnd,
}

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best tour found: a permutation of `0..n`, no trailing repeat.
    pub best_tour: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: Cost,
    /// Completed rounds (critical-event recovery rounds not counted).
    pub iterations: usize,
    /// Round at which the best tour was found.
    pub best_iteration: usize,
    /// Rounds in which no admissible move existed.
    pub critical_events: usize,
    /// Best cost after each completed round; monotonically non-increasing.
    pub cost_history: Vec<Cost>,
    /// Why the run stopped.
    pub termination: Termination,
}

/// Tabu search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs the search and returns the best tour found.
    ///
    /// Each call owns its entire search state (tour, ban table, RNG), so
    /// independent runs over one shared matrix may execute in parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_tabu::distance::DistanceMatrix;
    /// use tsp_tabu::models::Cost;
    /// use tsp_tabu::tabu::{TabuConfig, TabuRunner};
    ///
    /// let matrix = DistanceMatrix::from_values(vec![
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ]).expect("square");
    ///
    /// let config = TabuConfig::default().with_max_no_improve(50).with_seed(42);
    /// let result = TabuRunner::solve(&matrix, &config);
    /// assert_eq!(result.best_cost, Cost::new(80));
    /// ```
    pub fn solve(matrix: &DistanceMatrix, config: &TabuConfig) -> SearchResult {
        let start = Instant::now();
        let time_limit = Duration::from_millis(config.time_limit_ms);
        let n = matrix.size();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut memory = TabuMemory::new(n, config.tenure_for(n), config.capacity_for(n));
        let aspiration = Aspiration::new(config.aspiration_criterion);

        let mut current = initial_tour(matrix, config.initial_solution, &mut rng);
        let mut current_cost = matrix.tour_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        debug!("initial tour cost {}", best_cost);

        let mut iterations = 0usize;
        let mut best_iteration = 0usize;
        let mut stagnation = 0usize;
        let mut critical_events = 0usize;
        let mut cost_history = Vec::new();
        let termination;

        loop {
            if stagnation >= config.max_no_improve {
                termination = Termination::Stagnated;
                break;
            }
            if start.elapsed() >= time_limit {
                debug!("time budget exhausted after {} rounds", iterations);
                termination = Termination::TimeLimit;
                break;
            }

            let candidate =
                best_admissible(&current, matrix, &memory, &aspiration, best_cost, config);

            let Some(Candidate { tour, cost }) = candidate else {
                critical_events += 1;
                if !config.critical_event_recovery {
                    warn!("critical event: no admissible move, terminating");
                    termination = Termination::DeadEnd;
                    break;
                }
                warn!("critical event: no admissible move, reseeding");
                current = initial_tour(matrix, config.initial_solution, &mut rng);
                current_cost = matrix.tour_cost(&current);
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    best_iteration = iterations;
                    stagnation = 0;
                } else {
                    stagnation += 1;
                }
                continue;
            };

            current = tour;
            current_cost = cost;

            // The move's edges become forbidden: every consecutive pair of
            // the adopted tour, wrap-around included.
            for pair in current.windows(2) {
                memory.ban(pair[0], pair[1]);
            }
            if current.len() > 1 {
                memory.ban(current[current.len() - 1], current[0]);
            }

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                best_iteration = iterations;
                stagnation = 0;
                info!("new best at iteration {}: cost {}", iterations, best_cost);
            } else {
                stagnation += 1;
            }

            memory.age_all();
            cost_history.push(best_cost);

            if config.show_progress {
                info!(
                    "iteration {}, best cost {}, stagnation {}",
                    iterations, best_cost, stagnation
                );
            }

            iterations += 1;
        }

        SearchResult {
            best_tour: best,
            best_cost,
            iterations,
            best_iteration,
            critical_events,
            cost_history,
            termination,
        }
    }
}

/// Builds a tour with the configured policy. Also used to reseed after a
/// critical event.
fn initial_tour<R: Rng>(
    matrix: &DistanceMatrix,
    policy: InitialSolution,
    rng: &mut R,
) -> Vec<usize> {
    match policy {
        InitialSolution::Random => random_tour(matrix.size(), rng),
        InitialSolution::NearestNeighbor => nearest_neighbor_tour(matrix),
    }
}
