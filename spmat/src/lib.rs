//! SPMAT - Sparse Coordinate-List Matrix Files
//!
//! Reads sparse matrices from coordinate-list text files, combines them with
//! addition, subtraction or multiplication, and writes the result back in the
//! same format.
//!
//! ## Architecture
//!
//! - **spmat-core**: matrix model, text codec and arithmetic (no I/O, `no_std`)
//! - **spmat**: file loading and saving, configuration and the `spmat` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{EngineConfig, MatrixFile, Operation, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let config = EngineConfig::default();
//!     let a: SparseMatrix = MatrixFile::load("a.txt", &config)?;
//!     let b: SparseMatrix = MatrixFile::load("b.txt", &config)?;
//!
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     println!("{} with {} non-zeros", product.shape(), product.nnz());
//!     MatrixFile::save("c.txt", &product)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): memory-mapped reads via [`EngineConfig::with_mmap`]
//! - **serde** (default): serializable [`OperationSummary`] and core types
//! - **cli** (default): the `spmat` command-line binary

pub use spmat_core::{
    // Model
    Shape, SparseMatrix,
    // Traits
    MatrixElement, RowAccess, SparseAccess,
    // Format and arithmetic
    DataType, HeaderPolicy, MultiplyStrategy, Operation,
    // Core errors
    ErrorCategory, FormatIssue, MatrixError,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod pipeline;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use pipeline::{run, run_as, OperationRequest, OperationSummary};
