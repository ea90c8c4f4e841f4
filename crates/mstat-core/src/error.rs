//! Error type for [`Table`](crate::Table) parsing and column access.

use thiserror::Error;

/// Errors raised while reading a CSV table or extracting numeric columns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The input contained no header row.
    #[error("input has no header row")]
    MissingHeader,

    /// A data row carried more fields than the header declares.
    #[error("row {row} has {found} fields, header has {expected}")]
    RaggedRow {
        /// 1-based data row index (header excluded).
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields found on the row.
        found: usize,
    },

    /// A quoted field was still open at end of input.
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote {
        /// 1-based physical line where the quoted field began.
        line: usize,
    },

    /// A requested column is not present in the header.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// A non-empty cell in a numeric column failed coercion.
    #[error("column '{column}' row {row}: '{cell}' is not numeric")]
    NonNumericCell {
        /// Column name.
        column: String,
        /// 1-based data row index.
        row: usize,
        /// Offending cell text.
        cell: String,
    },

    /// A row pushed into a table did not match the header width.
    #[error("row width {found} does not match {expected} columns")]
    WidthMismatch {
        /// Number of header columns.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
