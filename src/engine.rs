//! Engine façade: parse → validate → compute → format
//!
//! Four entry points — [`add`], [`subtract`], [`multiply`], [`divide`] — each
//! taking declared dimensions and raw text for both operands and returning
//! either the formatted result text or a typed, displayable error. The first
//! failing stage short-circuits with its specific error; nothing ever panics
//! on malformed input.
//!
//! # Example
//!
//! ```
//! use matriz::engine;
//!
//! assert_eq!(
//!     engine::multiply(2, 2, "1 2\n3 4", 2, 2, "5 6\n7 8").unwrap(),
//!     "19 22\n43 50"
//! );
//! ```

use crate::{validate, Matrix, Operation, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One engine invocation: declared shapes plus raw text for both operands
///
/// Stateless and short-lived; the engine holds nothing across calls. The
/// borrowed payloads stay owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct OperationRequest<'a> {
    /// Declared rows of the left operand
    pub rows_a: usize,
    /// Declared cols of the left operand
    pub cols_a: usize,
    /// Raw text of the left operand
    pub text_a: &'a str,
    /// Declared rows of the right operand
    pub rows_b: usize,
    /// Declared cols of the right operand
    pub cols_b: usize,
    /// Raw text of the right operand
    pub text_b: &'a str,
}

impl OperationRequest<'_> {
    /// Runs the full pipeline for `op` and formats the result
    ///
    /// Stages, in order: parse A, parse B, validate shapes for `op`, compute,
    /// format. Both operands are parsed against their *declared* dimensions;
    /// shape compatibility is only judged once both parses succeed.
    ///
    /// # Errors
    ///
    /// Any of [`crate::MatrizError`]'s variants, from whichever stage failed
    /// first.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(
        op = %op,
        lhs = %format!("{}x{}", self.rows_a, self.cols_a),
        rhs = %format!("{}x{}", self.rows_b, self.cols_b),
    )))]
    pub fn evaluate(&self, op: Operation) -> Result<String> {
        let a = Matrix::from_text(self.rows_a, self.cols_a, self.text_a)?;
        let b = Matrix::from_text(self.rows_b, self.cols_b, self.text_b)?;

        validate::result_shape(op, a.shape(), b.shape())?;

        let result = match op {
            Operation::Add => a.add(&b)?,
            Operation::Subtract => a.sub(&b)?,
            Operation::Multiply => a.matmul(&b)?,
            Operation::Divide => a.matmul(&b.inverse()?)?,
        };

        Ok(result.to_text())
    }
}

macro_rules! entry_point {
    ($name:ident, $op:expr, $doc:literal) => {
        #[doc = $doc]
        ///
        /// # Errors
        ///
        /// Any of [`crate::MatrizError`]'s variants, from whichever pipeline
        /// stage failed first.
        pub fn $name(
            rows_a: usize,
            cols_a: usize,
            text_a: &str,
            rows_b: usize,
            cols_b: usize,
            text_b: &str,
        ) -> Result<String> {
            OperationRequest {
                rows_a,
                cols_a,
                text_a,
                rows_b,
                cols_b,
                text_b,
            }
            .evaluate($op)
        }
    };
}

entry_point!(add, Operation::Add, "Parses both operands, adds them elementwise, and formats `A + B`");
entry_point!(
    subtract,
    Operation::Subtract,
    "Parses both operands, subtracts B from A elementwise, and formats `A - B`"
);
entry_point!(
    multiply,
    Operation::Multiply,
    "Parses both operands, multiplies them, and formats `A × B`"
);
entry_point!(
    divide,
    Operation::Divide,
    "Parses both operands, inverts B, and formats `A × B⁻¹`"
);
