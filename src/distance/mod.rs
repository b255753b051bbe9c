//! Distance model: immutable square cost matrix.

mod matrix;

pub use matrix::{DistanceMatrix, MatrixError};
