//! Core matrix access traits
//!
//! These traits describe read access to a sparse matrix independent of how
//! its entries are stored.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Format-agnostic read access to a sparse matrix
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns zero for any coordinate that is not stored, including
    /// coordinates outside the matrix. No bounds check is performed.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Row and column extraction
pub trait RowAccess: SparseAccess {
    /// Get all non-zero `(col, value)` pairs in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero `(row, value)` pairs in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
