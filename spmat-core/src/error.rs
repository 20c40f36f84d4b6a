//! Error types for sparse matrix parsing and arithmetic

use alloc::string::String;
use thiserror::Error;

use crate::format::constants::ENTRY_FIELDS;
use crate::matrix::Shape;
use crate::ops::Operation;

/// Why an entry line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The trimmed line does not start with `(` and end with `)`
    MissingParentheses,
    /// The parenthesised content did not split into three fields
    FieldCount(usize),
    /// A field is not a number
    NonNumeric,
    /// A row or column field is negative or fractional
    InvalidIndex,
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatIssue::MissingParentheses => write!(f, "expected (row, col, value)"),
            FormatIssue::FieldCount(n) => {
                write!(f, "wrong field count: expected {ENTRY_FIELDS}, found {n}")
            }
            FormatIssue::NonNumeric => write!(f, "non-numeric value"),
            FormatIssue::InvalidIndex => write!(f, "index must be a non-negative integer"),
        }
    }
}

/// Errors that can occur while building or combining sparse matrices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Malformed entry line
    #[error("Invalid format line {line} ({reason}): {content}")]
    Format {
        line: usize,
        content: String,
        reason: FormatIssue,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Dimension mismatch: Cannot {operation} {left} and {right}")]
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },

    /// Operation selector outside add/subtract/multiply
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Header line is not `rows=<R>` / `cols=<C>` (strict headers only)
    #[error("Invalid header line {line}: {content}")]
    InvalidHeader { line: usize, content: String },

    /// Header declares a shape the entries do not produce (strict headers only)
    #[error("Header declares {declared} but entries imply {inferred}")]
    HeaderMismatch { declared: Shape, inferred: Shape },

    /// Coordinate outside an explicitly sized matrix
    #[error("Index ({row}, {col}) out of bounds for {shape} matrix")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    /// A result value does not fit the element type
    #[error("Arithmetic overflow: Cannot {operation} at ({row}, {col})")]
    Overflow {
        operation: &'static str,
        row: usize,
        col: usize,
    },
}

/// Coarse grouping of errors, used by front ends to pick a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input text is malformed
    Format,
    /// Shapes do not fit together
    Dimension,
    /// Unknown operation
    Unsupported,
    /// Values too large for the element type
    Overflow,
}

impl MatrixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::Format { .. }
            | MatrixError::InvalidHeader { .. }
            | MatrixError::HeaderMismatch { .. } => ErrorCategory::Format,
            MatrixError::DimensionMismatch { .. } | MatrixError::IndexOutOfBounds { .. } => {
                ErrorCategory::Dimension
            }
            MatrixError::UnsupportedOperation(_) => ErrorCategory::Unsupported,
            MatrixError::Overflow { .. } => ErrorCategory::Overflow,
        }
    }

    pub(crate) fn overflow(operation: &'static str, (row, col): (usize, usize)) -> Self {
        MatrixError::Overflow {
            operation,
            row,
            col,
        }
    }

    pub(crate) fn format(line: usize, content: &str, reason: FormatIssue) -> Self {
        MatrixError::Format {
            line,
            content: content.into(),
            reason,
        }
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_format_error_message() {
        let err = MatrixError::format(4, "[1, 2, 3]", FormatIssue::MissingParentheses);
        assert_eq!(
            err.to_string(),
            "Invalid format line 4 (expected (row, col, value)): [1, 2, 3]"
        );
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch {
            operation: Operation::Add,
            left: Shape::new(2, 2),
            right: Shape::new(3, 2),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: Cannot add 2x2 and 3x2"
        );
        assert_eq!(err.category(), ErrorCategory::Dimension);
    }

    #[test]
    fn test_overflow_message() {
        let err = MatrixError::overflow(Operation::Multiply.name(), (1, 2));
        assert_eq!(
            err.to_string(),
            "Arithmetic overflow: Cannot multiply at (1, 2)"
        );
        assert_eq!(err.category(), ErrorCategory::Overflow);
    }
}
