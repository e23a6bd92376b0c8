//! Dense matrix type and elementwise/product arithmetic
//!
//! Provides the row-major `f64` matrix the whole engine operates on, plus the
//! arithmetic core: elementwise add/subtract and the standard matrix product.
//!
//! # Example
//!
//! ```
//! use matriz::Matrix;
//!
//! let m = Matrix::zeros(2, 3).unwrap();
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! ```

use crate::{MatrizError, Operation, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A dense 2D matrix with row-major storage
///
/// Data is stored in row-major format (C-style), where consecutive elements
/// in memory belong to the same row.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// Matrices are immutable once constructed; every operation produces a new
/// `Matrix` rather than mutating an operand.
///
/// # Example
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.get(0, 0), Some(&1.0));
/// assert_eq!(m.get(1, 1), Some(&4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a vector of data in row-major order
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `rows` or `cols` is zero
    /// - `Parse` if `data.len() != rows * cols`
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension(format!(
                "declared shape {rows}x{cols} (rows and cols must both be at least 1)"
            )));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::Parse(format!(
                "expected {} values for a {rows}x{cols} matrix, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Creates a matrix from a slice by copying the data
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matrix::from_vec`].
    pub fn from_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates a matrix filled with zeros
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows` or `cols` is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(rows, cols, vec![0.0; rows.saturating_mul(cols)])
    }

    /// Creates an identity matrix (square matrix with 1s on the diagonal)
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `n` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::identity(3).unwrap();
    /// assert_eq!(m.get(0, 0), Some(&1.0));
    /// assert_eq!(m.get(0, 1), Some(&0.0));
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            self.data.get(row * self.cols + col)
        }
    }

    /// Returns a reference to the underlying row-major data
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Elementwise sum `A + B`
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    /// ```
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.elementwise(other, Operation::Add, |a, b| a + b)
    }

    /// Elementwise difference `A - B` (B subtracted from A, not reversed)
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.elementwise(other, Operation::Subtract, |a, b| a - b)
    }

    fn elementwise(
        &self,
        other: &Matrix,
        op: Operation,
        combine: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(MatrizError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| combine(a, b))
            .collect();
        Matrix::from_vec(self.rows, self.cols, data)
    }

    /// Matrix multiplication (matmul)
    ///
    /// Computes `C = A × B` where A is `m×k`, B is `k×n`, and C is `m×n`,
    /// with f64 accumulation. No rounding is applied mid-computation.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.cols != other.rows`.
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    ///
    /// // [[1, 2],   [[5, 6],   [[19, 22],
    /// //  [3, 4]] ×  [7, 8]] =  [43, 50]]
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self, other), fields(dims = %format!("{}x{} @ {}x{}", self.rows, self.cols, other.rows, other.cols))))]
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                op: Operation::Multiply,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let m = self.rows;
        let k = self.cols;
        let n = other.cols;
        let mut data = vec![0.0; m * n];

        // i-k-j loop order: the inner j loop walks both B's row and the
        // output row contiguously.
        for i in 0..m {
            for ki in 0..k {
                let a_ik = self.data[i * k + ki];
                if a_ik == 0.0 {
                    continue;
                }
                let b_row = ki * n;
                for j in 0..n {
                    data[i * n + j] += a_ik * other.data[b_row + j];
                }
            }
        }

        Matrix::from_vec(m, n, data)
    }
}
