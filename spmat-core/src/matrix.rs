//! Coordinate-keyed sparse matrix store
//!
//! A [`SparseMatrix`] owns a map from `(row, col)` to a non-zero value plus
//! the matrix shape. Zero values are never stored: every write path goes
//! through [`SparseMatrix::set`], which removes the coordinate instead.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::traits::{MatrixElement, RowAccess, SparseAccess};

/// Matrix dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` lies inside this shape
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Sparse matrix storing only non-zero entries, keyed by coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T: MatrixElement = f64> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix of the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Create an `n x n` matrix with ones on the diagonal
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Build a matrix of a fixed shape from `(row, col, value)` triplets
    ///
    /// Zero values are dropped. A repeated coordinate keeps the last value.
    /// Fails if any coordinate falls outside `rows x cols`.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let shape = Shape::new(rows, cols);
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            if !shape.contains(row, col) {
                return Err(MatrixError::IndexOutOfBounds { row, col, shape });
            }
            matrix.set(row, col, value);
        }
        Ok(matrix)
    }

    pub(crate) fn with_entries(shape: Shape, entries: HashMap<(usize, usize), T>) -> Self {
        debug_assert!(entries.values().all(|v| !v.is_zero()));
        Self {
            rows: shape.rows,
            cols: shape.cols,
            entries,
        }
    }

    /// Store `value` at `(row, col)`, or clear the coordinate if it is zero
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored; the shape may still be non-zero
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `(row, col)`, zero when absent
    ///
    /// Total over every coordinate; out-of-shape lookups return zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Iterate stored entries as `(row, col, value)` in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|(&(r, c), &v)| (r, c, v))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(r, c, _)| (r, c));
        entries
    }

    pub(crate) fn entries(&self) -> &HashMap<(usize, usize), T> {
        &self.entries
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> RowAccess for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<_> = self
            .iter()
            .filter(|&(r, _, _)| r == row_index)
            .map(|(_, c, v)| (c, v))
            .collect();
        row.sort_unstable_by_key(|&(c, _)| c);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<_> = self
            .iter()
            .filter(|&(_, c, _)| c == col_index)
            .map(|(r, _, v)| (r, v))
            .collect();
        col.sort_unstable_by_key(|&(r, _)| r);
        col
    }
}
