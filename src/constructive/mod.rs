//! Initial-tour construction policies.
//!
//! - [`random_tour`] — Uniform random permutation
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor from every start city

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random::random_tour;
