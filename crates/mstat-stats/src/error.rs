use mstat_core::TableError;
use thiserror::Error;

/// Errors from report builders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Underlying table access failed (missing or non-numeric column).
    #[error(transparent)]
    Table(#[from] TableError),

    /// A comparison needs the same column in both inputs.
    #[error("both files must contain a '{0}' column")]
    MissingInColumn(String),

    /// Histogram bin count must be positive.
    #[error("histogram needs at least one bin")]
    NoBins,

    /// Profile labels must tell the two inputs apart.
    #[error("profile labels must differ (both are '{0}')")]
    DuplicateLabel(String),
}

/// Result alias for report builders.
pub type Result<T> = std::result::Result<T, StatsError>;
