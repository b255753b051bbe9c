//! Tabu search engine.
//!
//! - [`memory`] — Symmetric ban table with decaying tenures
//! - [`aspiration`] — Ban override for sufficiently improving moves
//! - [`config`] — Search configuration
//! - [`runner`] — The iterative search controller

mod aspiration;
mod config;
mod memory;
mod runner;

pub use aspiration::Aspiration;
pub use config::{InitialSolution, Neighborhood, TabuConfig};
pub use memory::TabuMemory;
pub use runner::{SearchResult, TabuRunner, Termination};
