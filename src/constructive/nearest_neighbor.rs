//! Nearest-neighbor constructive heuristic.
//!
//! Builds one greedy tour per start city: from the current city, always
//! visit the nearest unvisited city. The cheapest of the n resulting tours
//! is kept.
//!
//! # Complexity
//!
//! O(n³) total — n starts × O(n²) greedy construction. Acceptable for the
//! instance sizes this solver targets; the tabu loop dominates runtime.

use crate::distance::DistanceMatrix;
use crate::models::Cost;

/// Constructs a tour by running nearest-neighbor from every start city and
/// keeping the cheapest result (ties keep the lower start city).
///
/// Unreachable edges participate as ordinary (infinitely large) costs, so
/// construction always completes; a disconnected instance simply yields an
/// unreachable tour.
///
/// # Examples
///
/// ```
/// use tsp_tabu::constructive::nearest_neighbor_tour;
/// use tsp_tabu::distance::DistanceMatrix;
/// use tsp_tabu::models::Cost;
///
/// let dm = DistanceMatrix::from_values(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).expect("square");
///
/// let tour = nearest_neighbor_tour(&dm);
/// assert_eq!(dm.tour_cost(&tour), Cost::new(80));
/// ```
pub fn nearest_neighbor_tour(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.size();
    let mut best_tour: Option<Vec<usize>> = None;
    let mut best_cost = Cost::UNREACHABLE;

    for start in 0..n {
        let tour = greedy_from(matrix, start);
        let cost = matrix.tour_cost(&tour);
        if best_tour.is_none() || cost < best_cost {
            best_cost = cost;
            best_tour = Some(tour);
        }
    }

    best_tour.expect("matrix has at least one city")
}

/// Greedy nearest-neighbor tour from a fixed start city.
fn greedy_from(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = matrix.size();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    tour.push(current);

    while tour.len() < n {
        let mut nearest = None;
        let mut min_cost = Cost::UNREACHABLE;
        for city in 0..n {
            if !visited[city] && (nearest.is_none() || matrix.cost(current, city) < min_cost) {
                min_cost = matrix.cost(current, city);
                nearest = Some(city);
            }
        }
        current = nearest.expect("unvisited city remains");
        visited[current] = true;
        tour.push(current);
    }

    tour
}
