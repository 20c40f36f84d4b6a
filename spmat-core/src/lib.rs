#![no_std]

//! SPMAT Core - Sparse Coordinate-List Matrix Definitions
//!
//! This crate provides the sparse matrix model, its text format and its
//! arithmetic, with no I/O. Only non-zero entries are ever stored.
//!
//! ```
//! use spmat_core::{Operation, SparseMatrix};
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(1,1,2)".parse().unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0,1,3)\n(1,0,4)".parse().unwrap();
//!
//! let product = Operation::Multiply.apply(&a, &b).unwrap();
//! assert_eq!(product.to_text(), "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 8)");
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{parse_matrix, write_matrix, DataType, HeaderPolicy};
pub use matrix::{Shape, SparseMatrix};
pub use ops::{MultiplyStrategy, Operation};
pub use traits::*;
