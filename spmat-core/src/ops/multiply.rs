//! Sparse matrix multiplication
//!
//! Outer-product style accumulation: each non-zero `(i, k) -> v` of the left
//! operand is multiplied into row `k` of the right operand and the products
//! are summed into output coordinate `(i, j)`.

use alloc::vec::Vec;
use hashbrown::HashMap;

use super::{MultiplyStrategy, Operation};
use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::result_shape;

type Accumulator<T> = HashMap<(usize, usize), T>;

/// Add `a * b` into the running sum at `key`
#[inline]
fn accumulate<T: MatrixElement>(
    acc: &mut Accumulator<T>,
    key: (usize, usize),
    a: T,
    b: T,
) -> Result<()> {
    let overflow = || MatrixError::overflow(Operation::Multiply.name(), key);
    let product = a.checked_mul(b).ok_or_else(overflow)?;
    let slot = acc.entry(key).or_insert_with(T::zero);
    *slot = slot.checked_add(product).ok_or_else(overflow)?;
    Ok(())
}

/// Probe `right[k][j]` for every column `j`
fn column_scan<T: MatrixElement>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    acc: &mut Accumulator<T>,
) -> Result<()> {
    for (i, k, a) in left.iter() {
        for j in 0..right.cols() {
            let b = right.get(k, j);
            if !b.is_zero() {
                accumulate(acc, (i, j), a, b)?;
            }
        }
    }
    Ok(())
}

/// Group `right` by row once, then visit only the non-zeros of row `k`
fn row_indexed<T: MatrixElement>(
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    acc: &mut Accumulator<T>,
) -> Result<()> {
    let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (k, j, b) in right.iter() {
        rows.entry(k).or_default().push((j, b));
    }

    for (i, k, a) in left.iter() {
        if let Some(row) = rows.get(&k) {
            for &(j, b) in row {
                accumulate(acc, (i, j), a, b)?;
            }
        }
    }
    Ok(())
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Matrix product with the default [`MultiplyStrategy`]
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`.
    pub fn multiply(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        self.multiply_with(other, MultiplyStrategy::default())
    }

    pub fn multiply_with(
        &self,
        other: &SparseMatrix<T>,
        strategy: MultiplyStrategy,
    ) -> Result<SparseMatrix<T>> {
        let shape = result_shape(Operation::Multiply, self.shape(), other.shape())?;

        let mut acc = Accumulator::new();
        match strategy {
            MultiplyStrategy::RowIndexed => row_indexed(self, other, &mut acc)?,
            MultiplyStrategy::ColumnScan => column_scan(self, other, &mut acc)?,
        }

        // running sums that cancelled back to zero
        acc.retain(|_, v| !v.is_zero());

        Ok(SparseMatrix::with_entries(shape, acc))
    }
}
