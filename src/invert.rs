//! Matrix inversion via Gauss-Jordan elimination
//!
//! Used exclusively by division (`A / B := A × B⁻¹`). The elimination runs on
//! the matrix augmented with the identity, with partial pivoting to bound
//! numerical error: at each step the remaining row with the largest-magnitude
//! entry in the active column is swapped into the pivot position.
//!
//! # Example
//!
//! ```
//! use matriz::Matrix;
//!
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//! let inv = b.inverse().unwrap();
//!
//! // B⁻¹ = [[-4, 3], [3.5, -2.5]]
//! assert!((inv.get(0, 0).unwrap() + 4.0).abs() < 1e-9);
//! assert!((inv.get(1, 0).unwrap() - 3.5).abs() < 1e-9);
//! ```

use crate::{Matrix, MatrizError, Operation, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A selected pivot with magnitude below this threshold declares the matrix
/// singular. Absolute, not relative: matches the engine's fixed-tolerance
/// contract.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

impl Matrix {
    /// Computes the inverse via Gauss-Jordan elimination with partial pivoting
    ///
    /// O(n³) time, one n×2n working buffer. The input is not modified.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if the matrix is not square
    /// - `SingularMatrix` if some column has no pivot with magnitude at least
    ///   [`PIVOT_TOLERANCE`], naming the row/column that could not be pivoted
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::{Matrix, MatrizError};
    ///
    /// // Rows are linearly dependent: no inverse exists
    /// let singular = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
    /// assert!(matches!(
    ///     singular.inverse(),
    ///     Err(MatrizError::SingularMatrix { .. })
    /// ));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(n = self.rows())))]
    pub fn inverse(&self) -> Result<Matrix> {
        if self.rows() != self.cols() {
            return Err(MatrizError::DimensionMismatch {
                op: Operation::Divide,
                lhs: self.shape(),
                rhs: self.shape(),
            });
        }

        let n = self.rows();
        let width = 2 * n;

        // Augmented [A | I], row-major.
        let mut aug = vec![0.0f64; n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = self.as_slice()[i * n + j];
            }
            aug[i * width + n + i] = 1.0;
        }

        for col in 0..n {
            // Partial pivoting: pick the remaining row with the
            // largest-magnitude entry in this column.
            let mut pivot_row = col;
            let mut pivot_mag = aug[col * width + col].abs();
            for row in (col + 1)..n {
                let mag = aug[row * width + col].abs();
                if mag > pivot_mag {
                    pivot_row = row;
                    pivot_mag = mag;
                }
            }

            if pivot_mag < PIVOT_TOLERANCE {
                return Err(MatrizError::SingularMatrix {
                    row: pivot_row,
                    col,
                });
            }

            if pivot_row != col {
                for j in 0..width {
                    aug.swap(col * width + j, pivot_row * width + j);
                }
            }

            // Normalize the pivot row, then eliminate the column from every
            // other row.
            let pivot = aug[col * width + col];
            for j in 0..width {
                aug[col * width + j] /= pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[row * width + col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..width {
                    aug[row * width + j] -= factor * aug[col * width + j];
                }
            }
        }

        // Right half of the augmented buffer is now A⁻¹.
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            data.extend_from_slice(&aug[i * width + n..(i + 1) * width]);
        }
        Matrix::from_vec(n, n, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &Matrix, expected: &[f64], tol: f64) {
        assert_eq!(actual.as_slice().len(), expected.len());
        for (i, (&a, &e)) in actual.as_slice().iter().zip(expected).enumerate() {
            assert!(
                (a - e).abs() < tol,
                "mismatch at flat index {i}: actual={a}, expected={e}"
            );
        }
    }

    #[test]
    fn test_inverse_identity() {
        let identity = Matrix::identity(3).unwrap();
        let inv = identity.inverse().unwrap();
        assert_close(&inv, identity.as_slice(), 1e-12);
    }

    #[test]
    fn test_inverse_1x1() {
        let m = Matrix::from_vec(1, 1, vec![4.0]).unwrap();
        let inv = m.inverse().unwrap();
        assert_close(&inv, &[0.25], 1e-12);
    }

    #[test]
    fn test_inverse_2x2() {
        // [[5, 6], [7, 8]]⁻¹ = [[-4, 3], [3.5, -2.5]] (det = -2)
        let m = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let inv = m.inverse().unwrap();
        assert_close(&inv, &[-4.0, 3.0, 3.5, -2.5], 1e-9);
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let m = Matrix::from_vec(3, 3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]).unwrap();
        let inv = m.inverse().unwrap();
        let product = m.matmul(&inv).unwrap();
        assert_close(&product, Matrix::identity(3).unwrap().as_slice(), 1e-9);
    }

    #[test]
    fn test_inverse_pivoting_handles_zero_leading_entry() {
        // Leading entry is zero; without row swapping elimination would divide
        // by zero even though the matrix is invertible.
        let m = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        let inv = m.inverse().unwrap();
        assert_close(&inv, &[0.0, 1.0, 1.0, 0.0], 1e-12);
    }

    #[test]
    fn test_inverse_singular_duplicated_row() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        let err = m.inverse().unwrap_err();
        assert!(matches!(err, MatrizError::SingularMatrix { .. }));
    }

    #[test]
    fn test_inverse_singular_names_failing_column() {
        // First column eliminates fine; the second column collapses to zero.
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        match m.inverse() {
            Err(MatrizError::SingularMatrix { col, .. }) => assert_eq!(col, 1),
            other => panic!("expected SingularMatrix, got {other:?}"),
        }
    }

    #[test]
    fn test_inverse_zero_matrix_is_singular() {
        let m = Matrix::zeros(3, 3).unwrap();
        assert!(matches!(
            m.inverse(),
            Err(MatrizError::SingularMatrix { col: 0, .. })
        ));
    }

    #[test]
    fn test_inverse_below_tolerance_pivot_is_singular() {
        let m = Matrix::from_vec(2, 2, vec![1e-12, 0.0, 0.0, 1e-12]).unwrap();
        assert!(matches!(m.inverse(), Err(MatrizError::SingularMatrix { .. })));
    }

    #[test]
    fn test_inverse_non_square_rejected() {
        let m = Matrix::from_vec(2, 3, vec![1.0; 6]).unwrap();
        assert!(matches!(
            m.inverse(),
            Err(MatrizError::DimensionMismatch {
                op: Operation::Divide,
                ..
            })
        ));
    }

    #[test]
    fn test_inverse_does_not_mutate_input() {
        let m = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let before = m.clone();
        let _ = m.inverse().unwrap();
        assert_eq!(m, before);
    }
}
