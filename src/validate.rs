//! Per-operation shape compatibility rules
//!
//! Runs strictly after both operands have parsed; computes the result shape
//! or reports which shapes were incompatible with the requested operation.
//!
//! | Operation        | Requirement                         | Result shape  |
//! |------------------|-------------------------------------|---------------|
//! | Add / Subtract   | shapes equal                        | rowsA × colsA |
//! | Multiply         | colsA = rowsB                       | rowsA × colsB |
//! | Divide (A × B⁻¹) | B square and colsA = rowsB          | rowsA × colsB |

use crate::{MatrizError, Operation, Result};

/// Checks operand shapes for `op` and returns the result shape
///
/// # Errors
///
/// Returns `DimensionMismatch` naming the operation and both shapes when the
/// requirement in the table above does not hold.
///
/// # Example
///
/// ```
/// use matriz::{validate, Operation};
///
/// let shape = validate::result_shape(Operation::Multiply, (2, 3), (3, 5)).unwrap();
/// assert_eq!(shape, (2, 5));
///
/// assert!(validate::result_shape(Operation::Add, (2, 3), (3, 2)).is_err());
/// ```
pub fn result_shape(
    op: Operation,
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(usize, usize)> {
    let compatible = match op {
        Operation::Add | Operation::Subtract => lhs == rhs,
        Operation::Multiply => lhs.1 == rhs.0,
        // Division inverts B first, so B must be square on top of the
        // multiply requirement.
        Operation::Divide => rhs.0 == rhs.1 && lhs.1 == rhs.0,
    };

    if !compatible {
        return Err(MatrizError::DimensionMismatch { op, lhs, rhs });
    }

    Ok(match op {
        Operation::Add | Operation::Subtract => lhs,
        Operation::Multiply | Operation::Divide => (lhs.0, rhs.1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract_require_equal_shapes() {
        assert_eq!(result_shape(Operation::Add, (2, 3), (2, 3)).unwrap(), (2, 3));
        assert_eq!(
            result_shape(Operation::Subtract, (4, 1), (4, 1)).unwrap(),
            (4, 1)
        );
        assert!(result_shape(Operation::Add, (2, 3), (3, 2)).is_err());
        assert!(result_shape(Operation::Subtract, (2, 2), (2, 3)).is_err());
    }

    #[test]
    fn test_multiply_inner_dimensions() {
        assert_eq!(
            result_shape(Operation::Multiply, (2, 3), (3, 5)).unwrap(),
            (2, 5)
        );
        assert!(result_shape(Operation::Multiply, (2, 3), (2, 3)).is_err());
    }

    #[test]
    fn test_divide_requires_square_rhs() {
        assert_eq!(
            result_shape(Operation::Divide, (2, 2), (2, 2)).unwrap(),
            (2, 2)
        );
        assert_eq!(
            result_shape(Operation::Divide, (4, 3), (3, 3)).unwrap(),
            (4, 3)
        );
        // Non-square B
        assert!(result_shape(Operation::Divide, (2, 3), (3, 2)).is_err());
        // Square B but inner dimensions differ
        assert!(result_shape(Operation::Divide, (2, 3), (2, 2)).is_err());
    }

    #[test]
    fn test_mismatch_reports_operation_and_shapes() {
        let err = result_shape(Operation::Add, (2, 3), (3, 2)).unwrap_err();
        assert_eq!(
            err,
            MatrizError::DimensionMismatch {
                op: Operation::Add,
                lhs: (2, 3),
                rhs: (3, 2),
            }
        );
    }
}
