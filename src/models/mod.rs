//! Core value types shared across the solver.
//!
//! - [`cost`] — Integer edge/tour cost with an unreachable sentinel
//! - [`tour`] — Tour (cyclic permutation) helpers

mod cost;
mod tour;

pub use cost::Cost;
pub use tour::is_permutation;
