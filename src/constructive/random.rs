//! Uniform random tour.

use rand::seq::SliceRandom;
use rand::Rng;

/// Builds a uniformly random tour over `0..n`.
///
/// The caller owns the random source, so runs are reproducible when the
/// generator is seeded.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tsp_tabu::constructive::random_tour;
/// use tsp_tabu::models::is_permutation;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(6, &mut rng);
/// assert!(is_permutation(&tour, 6));
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}
