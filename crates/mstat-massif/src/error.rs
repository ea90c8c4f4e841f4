use thiserror::Error;

/// Why a candidate snapshot line was rejected.
///
/// Either variant aborts the whole parse; no partial table is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The normalized line did not split into exactly six tokens.
    #[error("line {line_no}: expected 6 fields, found {count}: {line:?}")]
    UnexpectedTokenCount {
        /// 1-based line number in the report.
        line_no: usize,
        /// Original line text.
        line: String,
        /// Tokens after normalization.
        count: usize,
    },

    /// A token bound to a field could not be coerced to a number.
    #[error("line {line_no}: field '{field}' has non-numeric value {token:?}: {line:?}")]
    NonNumericField {
        /// 1-based line number in the report.
        line_no: usize,
        /// Original line text.
        line: String,
        /// Output column the token was bound to.
        field: &'static str,
        /// Offending token.
        token: String,
    },
}

impl FormatError {
    /// 1-based line number of the offending line.
    #[must_use]
    pub const fn line_no(&self) -> usize {
        match self {
            Self::UnexpectedTokenCount { line_no, .. } | Self::NonNumericField { line_no, .. } => {
                *line_no
            }
        }
    }
}
