//! Instance file reading.
//!
//! Format: whitespace-separated tokens — the city count `n`, then `n × n`
//! integer entries in row-major order where `-1` means "no edge", then the
//! instance's best-known optimum (`0` when unknown). A `-1` on the
//! diagonal reads as zero.

use crate::distance::{DistanceMatrix, MatrixError};
use crate::models::Cost;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error raised while reading or parsing an instance file.
#[derive(Debug)]
pub enum InstanceError {
    /// The file could not be read.
    Io(io::Error),
    /// The leading city count is missing, malformed, or zero.
    InvalidCityCount(String),
    /// A matrix entry is malformed or negative (other than `-1`).
    InvalidEntry {
        /// Row-major index of the entry.
        index: usize,
        /// The offending token.
        token: String,
    },
    /// The file ended before `n × n` entries were read.
    Truncated {
        /// Entries expected.
        expected: usize,
        /// Entries found.
        found: usize,
    },
    /// The trailing best-known optimum is missing or malformed.
    InvalidOptimum(String),
    /// The parsed rows did not form a valid matrix.
    Matrix(MatrixError),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Io(e) => write!(f, "cannot read instance file: {e}"),
            InstanceError::InvalidCityCount(token) => {
                write!(f, "invalid city count: {token:?}")
            }
            InstanceError::InvalidEntry { index, token } => {
                write!(f, "invalid matrix entry {token:?} at index {index}")
            }
            InstanceError::Truncated { expected, found } => {
                write!(f, "truncated matrix: expected {expected} entries, found {found}")
            }
            InstanceError::InvalidOptimum(token) => {
                write!(f, "invalid best-known optimum: {token:?}")
            }
            InstanceError::Matrix(e) => write!(f, "invalid matrix: {e}"),
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(e) => Some(e),
            InstanceError::Matrix(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InstanceError {
    fn from(e: io::Error) -> Self {
        InstanceError::Io(e)
    }
}

impl From<MatrixError> for InstanceError {
    fn from(e: MatrixError) -> Self {
        InstanceError::Matrix(e)
    }
}

/// A parsed problem instance.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The distance matrix.
    pub matrix: DistanceMatrix,
    /// Best-known tour cost from the file; `0` means unknown.
    pub optimum: u64,
}

impl Instance {
    /// The best-known optimum, if the file carried one.
    pub fn known_optimum(&self) -> Option<Cost> {
        (self.optimum > 0).then(|| Cost::new(self.optimum))
    }
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance, InstanceError> {
    parse_instance(&fs::read_to_string(path)?)
}

/// Parses instance text.
///
/// # Examples
///
/// ```
/// use tsp_tabu::io::parse_instance;
/// use tsp_tabu::models::Cost;
///
/// let instance = parse_instance("3  0 2 -1  2 0 4  -1 4 0  6").expect("valid");
/// assert_eq!(instance.matrix.size(), 3);
/// assert_eq!(instance.matrix.cost(0, 2), Cost::UNREACHABLE);
/// assert_eq!(instance.known_optimum(), Some(Cost::new(6)));
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, InstanceError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| InstanceError::InvalidCityCount("<missing>".into()))?;
    let n: usize = count_token
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| InstanceError::InvalidCityCount(count_token.into()))?;

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let index = i * n + j;
            let token = tokens.next().ok_or(InstanceError::Truncated {
                expected: n * n,
                found: index,
            })?;
            let value: i64 = token.parse().map_err(|_| InstanceError::InvalidEntry {
                index,
                token: token.into(),
            })?;
            let cost = match value {
                -1 if i == j => Cost::ZERO,
                -1 => Cost::UNREACHABLE,
                v if v >= 0 => Cost::new(v as u64),
                _ => {
                    return Err(InstanceError::InvalidEntry {
                        index,
                        token: token.into(),
                    })
                }
            };
            row.push(cost);
        }
        rows.push(row);
    }

    let optimum_token = tokens
        .next()
        .ok_or_else(|| InstanceError::InvalidOptimum("<missing>".into()))?;
    let optimum: u64 = optimum_token
        .parse()
        .map_err(|_| InstanceError::InvalidOptimum(optimum_token.into()))?;

    Ok(Instance {
        matrix: DistanceMatrix::from_rows(rows)?,
        optimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_instance() {
        let instance = parse_instance("2\n0 7\n7 0\n14\n").expect("valid");
        assert_eq!(instance.matrix.size(), 2);
        assert_eq!(instance.matrix.cost(0, 1), Cost::new(7));
        assert_eq!(instance.optimum, 14);
        assert_eq!(instance.known_optimum(), Some(Cost::new(14)));
    }

    #[test]
    fn test_minus_one_maps_to_sentinel() {
        let instance = parse_instance("2  0 -1  -1 0  0").expect("valid");
        assert_eq!(instance.matrix.cost(0, 1), Cost::UNREACHABLE);
        assert_eq!(instance.matrix.cost(1, 0), Cost::UNREACHABLE);
    }

    #[test]
    fn test_minus_one_on_diagonal_is_zero() {
        let instance = parse_instance("2  -1 3  3 -1  6").expect("valid");
        assert_eq!(instance.matrix.cost(0, 0), Cost::ZERO);
        assert_eq!(instance.matrix.cost(1, 1), Cost::ZERO);
    }

    #[test]
    fn test_zero_optimum_means_unknown() {
        let instance = parse_instance("2  0 1  1 0  0").expect("valid");
        assert_eq!(instance.known_optimum(), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_instance(""),
            Err(InstanceError::InvalidCityCount(_))
        ));
    }

    #[test]
    fn test_bad_city_count() {
        assert!(matches!(
            parse_instance("zero 0 0"),
            Err(InstanceError::InvalidCityCount(_))
        ));
        assert!(matches!(
            parse_instance("0 5"),
            Err(InstanceError::InvalidCityCount(_))
        ));
    }

    #[test]
    fn test_truncated_matrix() {
        let err = parse_instance("3 0 1 2 1 0").expect_err("truncated");
        assert!(matches!(
            err,
            InstanceError::Truncated {
                expected: 9,
                found: 5
            }
        ));
    }

    #[test]
    fn test_negative_entry_rejected() {
        let err = parse_instance("2  0 -2  -2 0  0").expect_err("negative");
        assert!(matches!(err, InstanceError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn test_malformed_entry_rejected() {
        let err = parse_instance("2  0 x  1 0  0").expect_err("malformed");
        assert!(matches!(err, InstanceError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn test_missing_optimum() {
        assert!(matches!(
            parse_instance("2  0 1  1 0"),
            Err(InstanceError::InvalidOptimum(_))
        ));
    }

    #[test]
    fn test_read_instance_from_file() {
        let path = std::env::temp_dir().join(format!("tsp-tabu-test-{}.txt", std::process::id()));
        fs::write(&path, "2\n0 9\n9 0\n18\n").expect("temp file");
        let instance = read_instance(&path).expect("valid");
        fs::remove_file(&path).ok();
        assert_eq!(instance.matrix.cost(1, 0), Cost::new(9));
        assert_eq!(instance.optimum, 18);
    }

    #[test]
    fn test_read_instance_missing_file() {
        let err = read_instance("/nonexistent/tsp-tabu-instance.txt").expect_err("missing");
        assert!(matches!(err, InstanceError::Io(_)));
    }
}
