//! Header lines and element type tags for the coordinate-list format
//!
//! A file starts with two header lines, `rows=<R>` and `cols=<C>`. How much
//! the reader trusts them is controlled by [`HeaderPolicy`].

use alloc::format;
use alloc::string::{String, ToString};

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};
use crate::error::{MatrixError, Result};
use crate::matrix::Shape;

/// How the reader treats the two header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderPolicy {
    /// Skip both lines by position without looking at them
    #[default]
    Advisory,
    /// Require `rows=<R>` / `cols=<C>` matching the inferred shape
    Strict,
}

/// Parse one `key=<n>` header line
///
/// Whitespace around the key, separator and value is ignored.
pub fn parse_header_line(line: usize, content: &str, key: &str) -> Result<usize> {
    let invalid = || MatrixError::InvalidHeader {
        line,
        content: content.to_string(),
    };

    let (found_key, value) = content.split_once(HEADER_SEPARATOR).ok_or_else(invalid)?;
    if found_key.trim() != key {
        return Err(invalid());
    }
    value.trim().parse::<usize>().map_err(|_| invalid())
}

/// Parse the two header lines into the declared shape
///
/// `lines` holds whatever header lines the input actually had; a short input
/// reports the first missing line as empty.
pub fn parse_header(lines: &[&str]) -> Result<Shape> {
    let line_or_empty = |i: usize| lines.get(i).copied().unwrap_or("");
    let rows = parse_header_line(1, line_or_empty(0), ROWS_KEY)?;
    let cols = parse_header_line(2, line_or_empty(1), COLS_KEY)?;
    Ok(Shape::new(rows, cols))
}

/// Render the two header lines for `shape`, without a trailing separator
pub fn header_lines(shape: Shape) -> [String; 2] {
    [
        format!("{ROWS_KEY}{HEADER_SEPARATOR}{}", shape.rows),
        format!("{COLS_KEY}{HEADER_SEPARATOR}{}", shape.cols),
    ]
}

/// Element types a coordinate-list file can be read as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    #[default]
    F64,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
}

impl DataType {
    /// Parse a lowercase type name such as `f64`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "f32" => Some(DataType::F32),
            "f64" => Some(DataType::F64),
            "i32" => Some(DataType::I32),
            "i64" => Some(DataType::I64),
            _ => None,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
        }
    }
}

impl core::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        DataType::from_name(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown data type '{s}' (expected f32, f64, i32 or i64)"))
    }
}
