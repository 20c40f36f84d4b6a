//! Shape compatibility checks for matrix arithmetic

use crate::error::{MatrixError, Result};
use crate::matrix::Shape;
use crate::ops::Operation;

/// Validate operand shapes and return the shape of the result
///
/// Addition and subtraction need identical shapes. Multiplication needs
/// `left.cols == right.rows` and yields `left.rows x right.cols`.
pub fn result_shape(operation: Operation, left: Shape, right: Shape) -> Result<Shape> {
    let compatible = match operation {
        Operation::Add | Operation::Subtract => {
            left.rows == right.rows && left.cols == right.cols
        }
        Operation::Multiply => left.cols == right.rows,
    };

    if !compatible {
        return Err(MatrixError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }

    match operation {
        Operation::Add | Operation::Subtract => Ok(left),
        Operation::Multiply => Ok(Shape::new(left.rows, right.cols)),
    }
}
