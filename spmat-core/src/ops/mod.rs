//! Matrix arithmetic engine
//!
//! Every operation validates operand shapes, leaves both operands untouched
//! and returns a freshly built [`SparseMatrix`] with no stored zeros.

pub mod elementwise;
pub mod multiply;

use alloc::format;
use alloc::string::String;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

/// Binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Numeric menu selector: 1 = add, 2 = subtract, 3 = multiply
    pub const fn selector(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            _ => None,
        }
    }

    /// Human-readable label for menus
    pub const fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
        }
    }

    /// Lowercase name used in messages and `--op` values
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation with the default multiplication strategy
    pub fn apply<T: MatrixElement>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        self.apply_with(left, right, MultiplyStrategy::default())
    }

    pub fn apply_with<T: MatrixElement>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
        strategy: MultiplyStrategy,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply_with(right, strategy),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Operation {
    type Error = MatrixError;

    fn try_from(selector: u8) -> Result<Self> {
        Operation::from_selector(selector)
            .ok_or_else(|| MatrixError::UnsupportedOperation(format!("{selector}")))
    }
}

impl core::str::FromStr for Operation {
    type Err = MatrixError;

    /// Accepts `1`/`2`/`3` or an operation name, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let name: String = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "1" | "add" => Ok(Operation::Add),
            "2" | "sub" | "subtract" => Ok(Operation::Subtract),
            "3" | "mul" | "multiply" => Ok(Operation::Multiply),
            _ => Err(MatrixError::UnsupportedOperation(s.into())),
        }
    }
}

/// How [`SparseMatrix::multiply_with`] walks the right operand
///
/// Both strategies accumulate each output coordinate in the same order and
/// therefore produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MultiplyStrategy {
    /// Index the right operand by row once, then visit only its non-zeros.
    /// O(nnz(B) + sum over A's entries of nnz(B[k, :]))
    #[default]
    RowIndexed,
    /// Probe every column of the right operand for each left entry.
    /// O(nnz(A) * cols(B))
    ColumnScan,
}

impl core::fmt::Display for MultiplyStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MultiplyStrategy::RowIndexed => write!(f, "row-indexed"),
            MultiplyStrategy::ColumnScan => write!(f, "column-scan"),
        }
    }
}

impl core::str::FromStr for MultiplyStrategy {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row-indexed" | "row" => Ok(MultiplyStrategy::RowIndexed),
            "column-scan" | "scan" => Ok(MultiplyStrategy::ColumnScan),
            _ => Err(format!(
                "unknown multiply strategy '{s}' (expected row-indexed or column-scan)"
            )),
        }
    }
}
