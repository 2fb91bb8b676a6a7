//! Error types for sparse matrix operations

use std::fmt;

/// Errors that can occur during matrix operations
///
/// Every operation validates its arguments before touching the element
/// store, so a returned error always means the matrix is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Element indices lie outside the matrix dimensions
    OutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },
    /// Resize requested a dimension smaller than the current one
    InvalidResize {
        current: (usize, usize),
        requested: (usize, usize),
    },
    /// Left operand column count differs from right operand row count
    IncompatibleDimensions {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Raw construction input has inconsistent lengths
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfBounds {
                row,
                col,
                n_rows,
                n_cols,
            } => write!(
                f,
                "Element ({row}, {col}) is out of bounds for a {n_rows} × {n_cols} matrix"
            ),
            MatrixError::InvalidResize { current, requested } => write!(
                f,
                "Can't reduce matrix size from {} × {} to {} × {}",
                current.0, current.1, requested.0, requested.1
            ),
            MatrixError::IncompatibleDimensions { left, right } => write!(
                f,
                "Can't multiply a {} × {} matrix by a {} × {} matrix",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::DimensionMismatch { expected, found } => {
                write!(f, "Expected {expected} entries, found {found}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
