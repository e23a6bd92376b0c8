//! Free-form text → `Matrix` parsing
//!
//! The declared dimensions are the authority: the text is tokenized on
//! whitespace and the flat token stream is consumed in reading order
//! (left-to-right, top-to-bottom) and reshaped into the declared grid. Line
//! breaks are just another token separator, so `"1 2 3 4"`, `"1 2\n3 4"` and
//! `"1\n2\n3\n4"` all parse to the same 2x2 matrix. Only the total token
//! count and order matter.

use crate::{Matrix, MatrizError, Result};

impl Matrix {
    /// Parses a matrix of the declared shape out of raw text
    ///
    /// Tokens are whitespace-separated decimal numbers; scientific notation
    /// is accepted, non-finite values (`inf`, `NaN`) are not.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `rows`/`cols` is zero, or the text is empty or
    ///   whitespace-only
    /// - `Parse` if the total token count differs from `rows * cols`, naming
    ///   expected vs actual, or if a token is not a finite number, naming the
    ///   offending token
    ///
    /// # Example
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_text(2, 2, "1 2\n3 4").unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    ///
    /// // Scientific notation, reshaped from a single line
    /// let m = Matrix::from_text(2, 2, "1e2 -0.5 3 4").unwrap();
    /// assert_eq!(m.get(0, 0), Some(&100.0));
    /// ```
    pub fn from_text(rows: usize, cols: usize, text: &str) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension(format!(
                "declared shape {rows}x{cols} (rows and cols must both be at least 1)"
            )));
        }
        if text.trim().is_empty() {
            return Err(MatrizError::InvalidDimension(format!(
                "empty text for a {rows}x{cols} matrix"
            )));
        }

        let expected = rows * cols;
        let mut data = Vec::with_capacity(expected);
        for token in text.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| {
                MatrizError::Parse(format!("token {token:?} is not a number"))
            })?;
            if !value.is_finite() {
                return Err(MatrizError::Parse(format!(
                    "token {token:?} is not a finite number"
                )));
            }
            data.push(value);
        }

        if data.len() != expected {
            return Err(MatrizError::Parse(format!(
                "expected {expected} values for a {rows}x{cols} matrix, got {}",
                data.len()
            )));
        }

        Matrix::from_vec(rows, cols, data)
    }
}
