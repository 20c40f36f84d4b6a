//! Matrix element type constraints
//!
//! This module defines the trait that constrains what numeric types can be
//! stored in a sparse matrix and read from coordinate-list text.

use core::fmt::{Debug, Display};

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// All element types must be:
/// - Copy: values are moved in and out of the entry map freely
/// - PartialEq: zero-suppression compares against [`MatrixElement::zero`]
/// - Display: serialization writes values with their `Display` form
///
/// Arithmetic goes through the `checked_*` methods only. They return `None`
/// when the result is not representable: integer overflow, or a non-finite
/// float result.
pub trait MatrixElement: Copy + PartialEq + Debug + Display {
    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    /// Whether this value would be suppressed from storage
    ///
    /// `-0.0` compares equal to `0.0` and is therefore zero.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Parse a whitespace-free value field
    ///
    /// Returns `None` for anything that is not a finite number of this type.
    fn parse_value(field: &str) -> Option<Self>;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;
}

impl MatrixElement for f32 {
    fn data_type() -> DataType {
        DataType::F32
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn parse_value(field: &str) -> Option<Self> {
        field.parse::<f32>().ok().filter(|v| v.is_finite())
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs).filter(|v| v.is_finite())
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs).filter(|v| v.is_finite())
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs).filter(|v| v.is_finite())
    }

    fn checked_neg(self) -> Option<Self> {
        Some(-self)
    }
}

impl MatrixElement for f64 {
    fn data_type() -> DataType {
        DataType::F64
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn parse_value(field: &str) -> Option<Self> {
        field.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs).filter(|v| v.is_finite())
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs).filter(|v| v.is_finite())
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs).filter(|v| v.is_finite())
    }

    fn checked_neg(self) -> Option<Self> {
        Some(-self)
    }
}

impl MatrixElement for i32 {
    fn data_type() -> DataType {
        DataType::I32
    }

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn parse_value(field: &str) -> Option<Self> {
        field.parse::<i32>().ok()
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i32::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i32::checked_mul(self, rhs)
    }

    fn checked_neg(self) -> Option<Self> {
        i32::checked_neg(self)
    }
}

impl MatrixElement for i64 {
    fn data_type() -> DataType {
        DataType::I64
    }

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn parse_value(field: &str) -> Option<Self> {
        field.parse::<i64>().ok()
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn checked_neg(self) -> Option<Self> {
        i64::checked_neg(self)
    }
}
