//! Matriz: Text-In, Text-Out Matrix Arithmetic Engine
//!
//! **Matriz** (Spanish: "matrix") turns free-form text into dense numeric
//! matrices, validates operand compatibility, performs add/subtract/multiply
//! and a division defined as multiplication by the inverse, then renders the
//! result back to text.
//!
//! # Design Principles
//!
//! - **Validate before computing**: every failure path is a typed, displayable
//!   error value; no entry point ever panics on malformed input
//! - **Pure and stateless**: identical inputs always produce identical output,
//!   no shared state, safe to call from any thread without locking
//! - **Round-trip symmetry**: the formatter emits the same textual convention
//!   the parser accepts
//!
//! # Quick Start
//!
//! ```rust
//! use matriz::engine;
//!
//! let result = engine::add(2, 2, "1 2\n3 4", 2, 2, "5 6\n7 8").unwrap();
//! assert_eq!(result, "6 8\n10 12");
//!
//! // Division is A × B⁻¹; a singular B is reported, never a crash
//! let err = engine::divide(2, 2, "1 2\n3 4", 2, 2, "1 2\n2 4").unwrap_err();
//! assert!(err.to_string().contains("singular"));
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod invert;
pub mod matrix;
pub mod parse;
pub mod validate;

pub use engine::OperationRequest;
pub use error::{MatrizError, Result};
pub use matrix::Matrix;

use std::fmt;

/// The four operations the engine exposes
///
/// Dispatch from an operation *name* to a variant belongs to the caller;
/// the engine only ever sees the resolved kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Elementwise sum `A + B`
    Add,
    /// Elementwise difference `A - B`
    Subtract,
    /// Standard matrix product `A × B`
    Multiply,
    /// `A × B⁻¹` (B must be square and invertible)
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        };
        write!(f, "{name}")
    }
}
