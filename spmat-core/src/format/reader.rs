//! Coordinate-list text reader
//!
//! Turns the whole text of a matrix file into a [`SparseMatrix`]. The shape
//! is inferred from the largest row and column index seen on any entry line,
//! zero-valued entries included.

use alloc::vec::Vec;
use hashbrown::HashMap;

use super::constants::HEADER_LINES;
use super::entry::{parse_entry, Entry};
use super::header::{parse_header, HeaderPolicy};
use crate::error::{MatrixError, Result};
use crate::matrix::{Shape, SparseMatrix};
use crate::traits::MatrixElement;

/// Parse coordinate-list text into a sparse matrix
///
/// Blank entry lines are skipped. Error line numbers are physical and
/// 1-indexed, so the first entry line is line 3.
pub fn parse_matrix<T: MatrixElement>(text: &str, policy: HeaderPolicy) -> Result<SparseMatrix<T>> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    let header: Vec<&str> = lines
        .by_ref()
        .take(HEADER_LINES)
        .map(|(_, line)| line)
        .collect();

    let mut max_row: Option<usize> = None;
    let mut max_col: Option<usize> = None;
    let mut entries = HashMap::new();

    for (line, raw) in lines {
        if raw.trim().is_empty() {
            continue;
        }

        let Entry { row, col, value } = parse_entry::<T>(line, raw)?;
        max_row = max_row.max(Some(row));
        max_col = max_col.max(Some(col));

        if value.is_zero() {
            entries.remove(&(row, col));
        } else {
            entries.insert((row, col), value);
        }
    }

    let inferred = Shape::new(
        max_row.map_or(0, |r| r + 1),
        max_col.map_or(0, |c| c + 1),
    );

    if policy == HeaderPolicy::Strict {
        let declared = parse_header(&header)?;
        if declared != inferred {
            return Err(MatrixError::HeaderMismatch { declared, inferred });
        }
    }

    Ok(SparseMatrix::with_entries(inferred, entries))
}

impl<T: MatrixElement> core::str::FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    /// Parse with [`HeaderPolicy::Advisory`]
    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s, HeaderPolicy::Advisory)
    }
}
