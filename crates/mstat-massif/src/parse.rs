//! Massif snapshot text parser.
//!
//! A report is scanned line by line. A line is a **candidate** iff, after
//! leading whitespace, it starts with one or more decimal digits. This is a
//! known-loose heuristic: there is no end-of-line anchor, so any digit-led
//! line is accepted regardless of what follows and is then held to the
//! six-token schema. Everything else (`desc:`, `cmd:`, `time_unit:`,
//! separators, the column header line, peak markers) is ignored.
//!
//! Each candidate is normalized before tokenizing:
//! 1. every comma is deleted outright (`"2,000 48"` → `"2000 48"`, and
//!    `"2000,500"` → `"2000500"`: commas are not separators),
//! 2. the line is trimmed and every whitespace run becomes one space.
//!
//! Tokens bind positionally to [`COLUMNS`](crate::COLUMNS). The first
//! defect aborts the parse; nothing is skipped.

use crate::error::FormatError;
use crate::format::{SnapshotRecord, SnapshotTable, COLUMNS};
use mstat_core::Number;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

#[allow(clippy::expect_used)]
static CANDIDATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+").expect("static regex"));

#[allow(clippy::expect_used)]
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Whether a raw line looks like a snapshot row.
#[inline]
#[must_use]
pub fn is_candidate(line: &str) -> bool {
    CANDIDATE.is_match(line)
}

/// Delete commas, trim, and collapse whitespace runs to a single space.
#[must_use]
pub fn normalize(line: &str) -> String {
    let stripped = line.replace(',', "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

/// Parse one candidate line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<SnapshotRecord, FormatError> {
    let normalized = normalize(line);
    let tokens: Vec<&str> = normalized.split(' ').collect();
    if tokens.len() != COLUMNS.len() {
        return Err(FormatError::UnexpectedTokenCount {
            line_no,
            line: line.to_owned(),
            count: tokens.len(),
        });
    }

    let mut fields = [Number::Int(0); 6];
    for ((slot, token), field) in fields.iter_mut().zip(&tokens).zip(COLUMNS) {
        *slot = Number::parse(token).ok_or_else(|| FormatError::NonNumericField {
            line_no,
            line: line.to_owned(),
            field,
            token: (*token).to_owned(),
        })?;
    }
    Ok(SnapshotRecord::from_fields(fields))
}

/// Parse a whole massif report into a [`SnapshotTable`].
///
/// Returns an empty table when no line qualifies. Fails on the first
/// candidate line that does not have six numeric tokens.
pub fn parse(text: &str) -> Result<SnapshotTable, FormatError> {
    let mut records = Vec::new();
    let mut ignored = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if !is_candidate(line) {
            trace!(line_no = idx + 1, "ignoring non-snapshot line");
            ignored += 1;
            continue;
        }
        records.push(parse_line(idx + 1, line)?);
    }

    debug!(records = records.len(), ignored, "parsed massif report");
    Ok(SnapshotTable { records })
}
