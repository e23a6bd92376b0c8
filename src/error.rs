//! Error types for Matriz operations

use thiserror::Error;

use crate::Operation;

/// Result type for Matriz operations
pub type Result<T> = std::result::Result<T, MatrizError>;

/// Errors that can occur during Matriz operations
///
/// Every variant carries a complete, human-readable `Display` message that a
/// caller can show verbatim; the presentation layer never needs a catch-all
/// for low-level numeric faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Declared shape is unusable (zero rows/cols) or the text payload is empty
    #[error("invalid dimensions: {0}")]
    InvalidDimension(String),

    /// Token count mismatch or a token that is not a finite number
    #[error("parse error: {0}")]
    Parse(String),

    /// Operand shapes incompatible with the requested operation
    #[error("dimension mismatch: {op} is not defined for {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}",
        lhs_rows = .lhs.0, lhs_cols = .lhs.1, rhs_rows = .rhs.0, rhs_cols = .rhs.1)]
    DimensionMismatch {
        /// Operation that was attempted
        op: Operation,
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },

    /// Division requires inverting a matrix with no numerically significant pivot
    #[error("singular matrix: no usable pivot for column {col} (largest candidate in row {row} is below tolerance)")]
    SingularMatrix {
        /// Row holding the largest-magnitude candidate pivot
        row: usize,
        /// Column that could not be pivoted
        col: usize,
    },
}
