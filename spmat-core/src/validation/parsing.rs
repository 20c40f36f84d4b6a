//! Field parsing for coordinate-list entry lines
//!
//! Pure string helpers with no I/O: whitespace stripping, field splitting and
//! index parsing. Value parsing is delegated to [`MatrixElement::parse_value`].
//!
//! [`MatrixElement::parse_value`]: crate::MatrixElement::parse_value

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::FormatIssue;
use crate::format::constants::FIELD_SEPARATOR;

/// Remove every whitespace character from `s`
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split whitespace-free entry content into its comma-separated fields
pub fn split_fields(content: &str) -> Vec<&str> {
    content.split(FIELD_SEPARATOR).collect()
}

/// Parse a row or column index
///
/// Accepts plain non-negative integers and integral numbers written in other
/// numeric forms (`2.0`, `1e1`). Anything that is a number but not a valid
/// index is [`FormatIssue::InvalidIndex`]; anything else is
/// [`FormatIssue::NonNumeric`].
pub fn parse_index(field: &str) -> Result<usize, FormatIssue> {
    if let Ok(index) = field.parse::<usize>() {
        // max + 1 must stay representable for dimension inference
        return if index < usize::MAX {
            Ok(index)
        } else {
            Err(FormatIssue::InvalidIndex)
        };
    }

    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value < 0.0 {
                return Err(FormatIssue::InvalidIndex);
            }
            if value >= usize::MAX as f64 {
                return Err(FormatIssue::InvalidIndex);
            }
            let index = value as usize;
            if index as f64 == value {
                Ok(index)
            } else {
                Err(FormatIssue::InvalidIndex)
            }
        }
        _ => Err(FormatIssue::NonNumeric),
    }
}
