//! Numeric value type shared by the parsers and table writers.
//!
//! Coercion is general rather than integer-only: a token is tried as an
//! `i64` first (so byte counts stay exact) and falls back to `f64`, which
//! accepts decimal points, exponents and the `inf`/`nan` spellings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed numeric token: exact integer when integral, float otherwise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Number {
    /// Integral token that fits in `i64`.
    Int(i64),
    /// Any other numeric token.
    Float(f64),
}

impl Number {
    /// Coerce a token into a number, or `None` if it is not numeric.
    ///
    /// Surrounding whitespace is ignored; an empty token is not numeric.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let t = token.trim();
        if t.is_empty() {
            return None;
        }
        if let Ok(i) = t.parse::<i64>() {
            return Some(Self::Int(i));
        }
        t.parse::<f64>().ok().map(Self::Float)
    }

    /// Value widened to `f64`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Whether the value is integral.
    #[inline]
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&format_f64(*v)),
        }
    }
}

/// Cell spellings read as a missing value, in addition to blank cells.
pub const MISSING_SPELLINGS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a cell holds no value: blank, or one of [`MISSING_SPELLINGS`].
#[must_use]
pub fn is_missing(cell: &str) -> bool {
    let t = cell.trim();
    t.is_empty() || MISSING_SPELLINGS.contains(&t)
}

/// Format a float for a CSV cell. `NaN` becomes an empty cell.
#[must_use]
pub fn format_f64(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_spellings() {
        for cell in ["", "  ", "NA", "N/A", "null", "None", "nan", "NaN", " <NA> "] {
            assert!(is_missing(cell), "{cell:?}");
        }
        for cell in ["0", "na", "none", "-", "x"] {
            assert!(!is_missing(cell), "{cell:?}");
        }
    }

    #[test]
    fn integers_stay_exact() {
        assert_eq!(Number::parse("9007199254740993"), Some(Number::Int(9_007_199_254_740_993)));
        assert_eq!(Number::parse(" -12 "), Some(Number::Int(-12)));
    }

    #[test]
    fn decimal_point_is_accepted() {
        assert_eq!(Number::parse("2.5"), Some(Number::Float(2.5)));
        assert_eq!(Number::parse("1e3"), Some(Number::Float(1000.0)));
    }

    #[test]
    fn junk_is_rejected() {
        assert_eq!(Number::parse("abc"), None);
        assert_eq!(Number::parse(""), None);
        assert_eq!(Number::parse("12kB"), None);
    }

    #[test]
    fn display_matches_cell_format() {
        assert_eq!(Number::Int(1234).to_string(), "1234");
        assert_eq!(Number::Float(0.5).to_string(), "0.5");
        assert_eq!(Number::Float(f64::NAN).to_string(), "");
    }
}
