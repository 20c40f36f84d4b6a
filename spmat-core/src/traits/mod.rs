//! Abstract interfaces for sparse matrices
//!
//! Element constraints and read-access traits used across the crate.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{RowAccess, SparseAccess};
