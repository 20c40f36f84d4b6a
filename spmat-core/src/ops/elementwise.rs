//! Elementwise addition, subtraction and negation

use hashbrown::HashMap;

use super::Operation;
use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::result_shape;

/// Combine two equally shaped matrices over the union of their coordinates
///
/// A coordinate missing from one side contributes zero to `f`. Results that
/// come out as zero are not stored, and a `None` from `f` fails the whole
/// operation with [`MatrixError::Overflow`]. O(nnz(left) + nnz(right)).
fn combine<T, F>(
    operation: Operation,
    left: &SparseMatrix<T>,
    right: &SparseMatrix<T>,
    f: F,
) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    let shape = result_shape(operation, left.shape(), right.shape())?;
    let (lhs, rhs) = (left.entries(), right.entries());
    let mut entries = HashMap::with_capacity(lhs.len().max(rhs.len()));

    for (&key, &x) in lhs {
        let y = rhs.get(&key).copied().unwrap_or_else(T::zero);
        let value = f(x, y).ok_or_else(|| MatrixError::overflow(operation.name(), key))?;
        if !value.is_zero() {
            entries.insert(key, value);
        }
    }

    for (&key, &y) in rhs {
        if lhs.contains_key(&key) {
            continue;
        }
        let value =
            f(T::zero(), y).ok_or_else(|| MatrixError::overflow(operation.name(), key))?;
        if !value.is_zero() {
            entries.insert(key, value);
        }
    }

    Ok(SparseMatrix::with_entries(shape, entries))
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Elementwise sum; shapes must match
    pub fn add(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        combine(Operation::Add, self, other, T::checked_add)
    }

    /// Elementwise difference `self + (-1 * other)`; shapes must match
    pub fn subtract(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        combine(Operation::Subtract, self, other, T::checked_sub)
    }

    /// Every stored value negated, same shape
    ///
    /// Fails only for the most negative value of a signed integer type.
    pub fn negate(&self) -> Result<SparseMatrix<T>> {
        let entries = self
            .entries()
            .iter()
            .map(|(&key, &v)| {
                v.checked_neg()
                    .map(|n| (key, n))
                    .ok_or_else(|| MatrixError::overflow("negate", key))
            })
            .collect::<Result<_>>()?;
        Ok(SparseMatrix::with_entries(self.shape(), entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Shape;

    fn a() -> SparseMatrix {
        SparseMatrix::from_triplets(2, 2, [(0, 0, 1.0), (1, 1, 2.0)]).unwrap()
    }

    fn b() -> SparseMatrix {
        SparseMatrix::from_triplets(2, 2, [(0, 1, 3.0), (1, 0, 4.0)]).unwrap()
    }

    #[test]
    fn test_add_disjoint() {
        let sum = a().add(&b()).unwrap();
        let expected =
            SparseMatrix::from_triplets(2, 2, [(0, 0, 1.0), (0, 1, 3.0), (1, 0, 4.0), (1, 1, 2.0)])
                .unwrap();
        assert_eq!(sum, expected);
        assert_eq!(sum.shape(), Shape::new(2, 2));
    }

    #[test]
    fn test_add_cancellation_is_suppressed() {
        let x = SparseMatrix::from_triplets(2, 2, [(0, 0, 1.5), (1, 0, 2.0)]).unwrap();
        let y = SparseMatrix::from_triplets(2, 2, [(0, 0, -1.5), (1, 1, 1.0)]).unwrap();
        let sum = x.add(&y).unwrap();
        assert_eq!(sum.nnz(), 2);
        assert!(!sum.contains(0, 0));
        assert!(sum.iter().all(|(_, _, v)| v != 0.0));
    }

    #[test]
    fn test_add_commutes_and_keeps_operands() {
        let (x, y) = (a(), b());
        assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
        assert_eq!(x, a());
        assert_eq!(y, b());
    }

    #[test]
    fn test_add_identity() {
        let empty = SparseMatrix::new(2, 2);
        assert_eq!(a().add(&empty).unwrap(), a());
        assert_eq!(empty.add(&a()).unwrap(), a());
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let err = a().add(&SparseMatrix::new(2, 3)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                operation: Operation::Add,
                left: Shape::new(2, 2),
                right: Shape::new(2, 3),
            }
        );
        assert!(a().add(&SparseMatrix::new(3, 2)).is_err());
    }

    #[test]
    fn test_subtract() {
        let diff = a().subtract(&b()).unwrap();
        let expected = SparseMatrix::from_triplets(
            2,
            2,
            [(0, 0, 1.0), (0, 1, -3.0), (1, 0, -4.0), (1, 1, 2.0)],
        )
        .unwrap();
        assert_eq!(diff, expected);
        assert_eq!(diff, a().add(&b().negate().unwrap()).unwrap());
    }

    #[test]
    fn test_subtract_self_is_empty() {
        let diff = a().subtract(&a()).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff.shape(), Shape::new(2, 2));
    }

    #[test]
    fn test_subtract_dimension_mismatch() {
        assert!(matches!(
            a().subtract(&SparseMatrix::new(1, 2)),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn test_negate() {
        let n = a().negate().unwrap();
        assert_eq!(n.get(0, 0), -1.0);
        assert_eq!(n.get(1, 1), -2.0);
        assert_eq!(n.nnz(), 2);
        assert_eq!(n.negate().unwrap(), a());
    }

    #[test]
    fn test_integer_overflow_is_an_error() {
        let max = SparseMatrix::from_triplets(2, 2, [(0, 0, i32::MAX), (1, 1, 1)]).unwrap();
        assert_eq!(
            max.add(&max).unwrap_err(),
            MatrixError::Overflow {
                operation: "add",
                row: 0,
                col: 0,
            }
        );

        let min = SparseMatrix::from_triplets(1, 2, [(0, 1, i64::MIN)]).unwrap();
        let one = SparseMatrix::from_triplets(1, 2, [(0, 1, 1i64)]).unwrap();
        assert_eq!(
            min.subtract(&one).unwrap_err(),
            MatrixError::Overflow {
                operation: "subtract",
                row: 0,
                col: 1,
            }
        );
        // only present on the right: computed as 0 - MIN
        assert!(SparseMatrix::new(1, 2).subtract(&min).is_err());
        assert_eq!(
            min.negate().unwrap_err(),
            MatrixError::Overflow {
                operation: "negate",
                row: 0,
                col: 1,
            }
        );
    }

    #[test]
    fn test_integer_extremes_that_fit() {
        let x = SparseMatrix::from_triplets(1, 1, [(0, 0, -1i32)]).unwrap();
        let y = SparseMatrix::from_triplets(1, 1, [(0, 0, i32::MIN)]).unwrap();
        assert_eq!(x.subtract(&y).unwrap().get(0, 0), i32::MAX);
        assert_eq!(y.add(&x.negate().unwrap()).unwrap().get(0, 0), i32::MIN + 1);
    }

    #[test]
    fn test_float_overflow_is_an_error() {
        let big = SparseMatrix::from_triplets(1, 1, [(0, 0, f64::MAX)]).unwrap();
        assert!(matches!(
            big.add(&big),
            Err(MatrixError::Overflow { operation: "add", .. })
        ));
    }

    #[test]
    fn test_integer_subtract() {
        let x = SparseMatrix::from_triplets(1, 3, [(0, 0, 5i64), (0, 1, 2)]).unwrap();
        let y = SparseMatrix::from_triplets(1, 3, [(0, 0, 5i64), (0, 2, 7)]).unwrap();
        let diff = x.subtract(&y).unwrap();
        assert_eq!(diff.sorted_entries(), alloc::vec![(0, 1, 2), (0, 2, -7)]);
    }
}
