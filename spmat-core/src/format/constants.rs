//! Coordinate-list text format constants

/// Number of leading header lines before entry lines
pub const HEADER_LINES: usize = 2;

/// Key of the first header line (`rows=<R>`)
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line (`cols=<C>`)
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, col, value
pub const ENTRY_FIELDS: usize = 3;

/// Line separator used when writing
pub const LINE_SEPARATOR: &str = "\n";
