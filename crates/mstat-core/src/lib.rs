//! mstat-core — numeric tables, number coercion, and CSV/JSON I/O.
//!
//! This crate is the shared boundary for every mstat tool:
//! - [`Number`]: a general numeric value (exact integer or float) produced by
//!   lenient token coercion,
//! - [`Table`]: a CSV file held in memory with numeric column views and
//!   grouping helpers,
//! - [`io`]: file readers/writers with extension-based format detection
//!   (`.json` → JSON, everything else → CSV).
//!
//! ```
//! use mstat_core::Table;
//!
//! let t = Table::from_csv_str("a,b\n1,2\n3,4\n")?;
//! assert_eq!(t.column("b")?, vec![2.0, 4.0]);
//! # Ok::<(), mstat_core::TableError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Typed errors for table construction and column access.
pub mod error;
/// File I/O: CSV reader and auto-detecting CSV/JSON writers.
pub mod io;
/// In-memory CSV table with numeric views.
pub mod table;
/// Numeric value type and cell formatting.
pub mod types;

pub use error::TableError;
pub use table::Table;
pub use types::{format_f64, is_missing, Number};
