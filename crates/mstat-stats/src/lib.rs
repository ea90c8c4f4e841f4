//! Descriptive statistics over mstat tables.
//!
//! Numeric conventions follow the usual dataframe defaults so reports line
//! up with ones produced by other tooling:
//! - missing values (empty cells, `NaN`) are skipped,
//! - standard deviation is the sample estimate (`n − 1`),
//! - quantiles interpolate linearly between closest ranks,
//! - undefined results are `NaN`, written as empty CSV cells.
//!
//! Reports are returned as [`mstat_core::Table`]s so callers choose the
//! output encoding.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss
)]

/// Two-file comparisons: per-column stats and the total-column diff.
pub mod compare;
/// Pearson correlation.
pub mod correlation;
/// Error type for report builders.
pub mod error;
/// Grouped statistics and histograms.
pub mod group;
/// Old-vs-new profile comparison.
pub mod profile;
/// `Summary` and the underlying estimators.
pub mod summary;

pub use compare::{compare_total, stats_report};
pub use correlation::pearson;
pub use error::StatsError;
pub use group::{group_stats, histogram};
pub use profile::{compare_profiles, ProfileColumns};
pub use summary::{quantile, Summary};
