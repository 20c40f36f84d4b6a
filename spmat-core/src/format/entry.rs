//! Entry line codec: `(row, col, value)`

use alloc::format;
use alloc::string::String;

use super::constants::{ENTRY_CLOSE, ENTRY_OPEN};
use crate::error::{FormatIssue, MatrixError, Result};
use crate::traits::MatrixElement;
use crate::validation::{parse_index, split_fields, strip_whitespace};

/// One parsed entry line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Parse a single entry line
///
/// `line` is the physical 1-indexed line number used in error reports and
/// `raw` is the untrimmed line text.
pub fn parse_entry<T: MatrixElement>(line: usize, raw: &str) -> Result<Entry<T>> {
    let fail = |reason: FormatIssue| MatrixError::format(line, raw, reason);

    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or_else(|| fail(FormatIssue::MissingParentheses))?;

    let content = strip_whitespace(inner);
    let fields = split_fields(&content);
    let [row, col, value] = fields.as_slice() else {
        return Err(fail(FormatIssue::FieldCount(fields.len())));
    };

    let row = parse_index(row).map_err(fail)?;
    let col = parse_index(col).map_err(fail)?;
    let value = T::parse_value(value).ok_or_else(|| fail(FormatIssue::NonNumeric))?;

    Ok(Entry { row, col, value })
}

/// Canonical text form of an entry: `(<row>, <col>, <value>)`
pub fn format_entry<T: MatrixElement>(row: usize, col: usize, value: T) -> String {
    format!("{ENTRY_OPEN}{row}, {col}, {value}{ENTRY_CLOSE}")
}
