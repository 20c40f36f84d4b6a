//! Coordinate-list text writer
//!
//! Output is deterministic: entry lines are sorted as strings, not by
//! coordinate, so `(10, 0, 1)` comes before `(2, 0, 1)`.

use alloc::string::String;
use alloc::vec::Vec;

use super::constants::LINE_SEPARATOR;
use super::entry::format_entry;
use super::header::header_lines;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

/// Render a matrix as coordinate-list text, without a trailing newline
pub fn write_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    let mut entries: Vec<String> = matrix
        .iter()
        .map(|(row, col, value)| format_entry(row, col, value))
        .collect();
    entries.sort_unstable();

    let [rows, cols] = header_lines(matrix.shape());
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(rows);
    lines.push(cols);
    lines.extend(entries);
    lines.join(LINE_SEPARATOR)
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Coordinate-list text for this matrix
    pub fn to_text(&self) -> String {
        write_matrix(self)
    }
}

impl<T: MatrixElement> core::fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&write_matrix(self))
    }
}
