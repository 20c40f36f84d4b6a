//! Coordinate-list text format
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (row, col, value)
//! ...
//! ```
//!
//! Pure string processing only; reading and writing files lives in the
//! `spmat` crate.

pub mod constants;
pub mod entry;
pub mod header;
pub mod reader;
pub mod writer;

pub use entry::{format_entry, parse_entry, Entry};
pub use header::{DataType, HeaderPolicy};
pub use reader::parse_matrix;
pub use writer::write_matrix;
