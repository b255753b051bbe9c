//! # tsp-tabu
//!
//! Tabu search solver for the symmetric traveling salesman problem.
//!
//! The engine walks the segment-reversal (2-opt) or pairwise-exchange
//! neighborhood of the current tour under a decaying ban table, overrides
//! bans through an aspiration criterion, and recovers from dead-end rounds
//! by reseeding a fresh tour.
//!
//! ## Modules
//!
//! - [`models`] — Cost type with the unreachable sentinel, tour helpers
//! - [`distance`] — Immutable square distance matrix
//! - [`constructive`] — Initial-tour policies (random, nearest-neighbor all starts)
//! - [`neighborhood`] — Candidate scans with a bounded evaluation budget
//! - [`tabu`] — Tabu memory, aspiration policy, configuration, search runner
//! - [`io`] — Instance files, JSON settings, trial reporting

pub mod constructive;
pub mod distance;
pub mod io;
pub mod models;
pub mod neighborhood;
pub mod tabu;
