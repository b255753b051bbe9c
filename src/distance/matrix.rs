//! Dense distance matrix.

use crate::models::Cost;
use std::fmt;

/// Error raised when constructing a [`DistanceMatrix`] from invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Empty => write!(f, "distance matrix is empty"),
            MatrixError::NotSquare { rows, row, len } => write!(
                f,
                "distance matrix is not square: {rows} rows but row {row} has {len} entries"
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// A dense n×n cost matrix stored in row-major order.
///
/// Costs are non-negative integers; [`Cost::UNREACHABLE`] marks a missing
/// edge. The matrix is immutable after construction and safely shareable
/// across concurrently running searches (it is `Send + Sync`). Symmetry is
/// a problem assumption, not an enforced invariant; [`Self::is_symmetric`]
/// lets callers check their data.
///
/// # Examples
///
/// ```
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
/// assert_eq!(dm.size(), 4);
/// assert_eq!(dm.cost(1, 3), Cost::new(25));
/// assert_eq!(dm.tour_cost(&[0, 1, 3, 2]), Cost::new(80));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows of costs.
    ///
    /// Fails fast with [`MatrixError`] if the input is empty or any row's
    /// length differs from the row count. This is the only point where
    /// invalid input can surface; the search loop never sees it.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    rows: size,
                    row: i,
                    len: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Builds a matrix from plain integer weights (no sentinel entries).
    pub fn from_values(rows: Vec<Vec<u64>>) -> Result<Self, MatrixError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cost::new).collect())
                .collect(),
        )
    }

    /// Returns the cost of the edge from `a` to `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn cost(&self, a: usize, b: usize) -> Cost {
        self.data[a * self.size + b]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cost of a cyclic tour: consecutive edges plus the wrap-around
    /// edge from the last city back to the first.
    ///
    /// An unreachable edge makes the whole tour unreachable; the sentinel
    /// propagates through the sum. The result is deterministic — calling
    /// this twice on the same tour yields the same value.
    pub fn tour_cost(&self, tour: &[usize]) -> Cost {
        if tour.is_empty() {
            return Cost::ZERO;
        }
        let mut total = Cost::ZERO;
        for pair in tour.windows(2) {
            total += self.cost(pair[0], pair[1]);
        }
        total + self.cost(tour[tour.len() - 1], tour[0])
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.cost(i, j) != self.cost(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
