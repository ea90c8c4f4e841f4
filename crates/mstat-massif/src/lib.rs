//! Valgrind massif snapshot text → fixed-schema table of numbers.
//!
//! - `format`: the record and table types (`SnapshotRecord`,
//!   `SnapshotTable`) and the fixed output column names.
//! - `parse`: the single-pass, all-or-nothing line parser.
//! - `error`: `FormatError`, the two ways a candidate line can be rejected.
//! - `io`: read-from-file and write-to-CSV/JSON helpers.
//!
//! ```
//! let text = "desc: --time-unit=i\n  0  0  0  0  0  0\n  1  1,234  2048  2000  48  0\n";
//! let table = mstat_massif::parse(text)?;
//! assert_eq!(table.len(), 2);
//! # Ok::<(), mstat_massif::FormatError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

/// Parse failures for candidate snapshot lines.
pub mod error;
/// Snapshot record/table types and the fixed column schema.
pub mod format;
/// File read/write helpers.
pub mod io;
/// The massif line classifier, normalizer, and parser.
pub mod parse;

pub use error::FormatError;
pub use format::{SnapshotRecord, SnapshotTable, COLUMNS};
pub use parse::parse;
