//! I/O-level error type
//!
//! Wraps [`MatrixError`] from the core together with the file-system failures
//! that can occur while loading or saving a matrix file.

use std::path::PathBuf;

use spmat_core::{ErrorCategory, MatrixError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written or moved into place
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8
    #[error("{} is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl Error {
    /// The core error category, when this error came from the core
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Matrix(err) => Some(err.category()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
