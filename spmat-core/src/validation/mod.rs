//! Validation utilities
//!
//! Pure functions with no I/O: entry field parsing and operand shape checks.

pub mod bounds;
pub mod parsing;

pub use bounds::result_shape;
pub use parsing::{parse_index, split_fields, strip_whitespace};
