//! Aspiration criterion: when a ban may be overridden.

use super::memory::TabuMemory;
use crate::models::Cost;

/// Admits banned moves that would improve on the best-known cost by more
/// than a configured margin.
///
/// The margin is `max(1, criterion)`, so even a criterion of zero demands a
/// strict improvement on the best-known cost. This is the escape hatch that
/// keeps the search from being trapped by its own memory.
///
/// # Examples
///
/// ```
/// use tsp_tabu::models::Cost;
/// use tsp_tabu::tabu::Aspiration;
///
/// let aspiration = Aspiration::new(0);
/// assert!(aspiration.admits(Cost::new(78), Cost::new(80)));
/// assert!(!aspiration.admits(Cost::new(79), Cost::new(80)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Aspiration {
    margin: u64,
}

impl Aspiration {
    /// Builds the policy from the configured criterion.
    pub fn new(criterion: u64) -> Self {
        Self {
            margin: criterion.max(1),
        }
    }

    /// The effective margin, `max(1, criterion)`.
    pub fn margin(&self) -> u64 {
        self.margin
    }

    /// Whether `candidate` beats `best` by more than the margin.
    pub fn admits(&self, candidate: Cost, best: Cost) -> bool {
        candidate < best.saturating_sub(self.margin)
    }

    /// Full admissibility check for a move on the city pair `(a, b)`:
    /// the pair is not banned, or the candidate aspires past the ban.
    pub fn is_admissible(
        &self,
        memory: &TabuMemory,
        a: usize,
        b: usize,
        candidate: Cost,
        best: Cost,
    ) -> bool {
        !memory.is_banned(a, b) || self.admits(candidate, best)
    }
}
