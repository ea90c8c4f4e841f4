//! Old-vs-new implementation comparison over duration and visited-node
//! columns.
//!
//! Each input is one profile. For each we compute six statistics of both
//! columns plus their Pearson correlation, then report the symmetric percent
//! difference `|old − new| / mean(old, new) · 100` per measure.

use crate::correlation::pearson;
use crate::error::{Result, StatsError};
use crate::summary::Summary;
use mstat_core::{format_f64, Table};

/// Column names read from each profile table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileColumns {
    /// Duration column (e.g. `duration in microseconds`).
    pub duration: String,
    /// Visited-node count column (e.g. `visited nodes`).
    pub visited: String,
}

impl Default for ProfileColumns {
    fn default() -> Self {
        Self {
            duration: "duration in microseconds".to_owned(),
            visited: "visited nodes".to_owned(),
        }
    }
}

const MEASURES_PER_COLUMN: [&str; 6] = [
    "average",
    "median",
    "min",
    "max",
    "25th_percentile",
    "75th_percentile",
];

fn measures(table: &Table, cols: &ProfileColumns) -> Result<Vec<(String, f64)>> {
    let duration = table.optional_column(&cols.duration)?;
    let visited = table.optional_column(&cols.visited)?;

    let mut out = Vec::with_capacity(2 * MEASURES_PER_COLUMN.len() + 1);
    for (suffix, cells) in [("duration", &duration), ("visited_nodes", &visited)] {
        let values: Vec<f64> = cells.iter().flatten().copied().collect();
        let s = Summary::of(&values);
        let stats = [s.mean, s.median, s.min, s.max, s.p25, s.p75];
        for (name, v) in MEASURES_PER_COLUMN.iter().zip(stats) {
            out.push((format!("{name}_{suffix}"), v));
        }
    }
    out.push(("correlation_coefficient".to_owned(), pearson(&duration, &visited)));
    Ok(out)
}

/// Symmetric percent difference of two measurements.
#[inline]
#[must_use]
pub fn percent_difference(a: f64, b: f64) -> f64 {
    (a - b).abs() / ((a + b) / 2.0) * 100.0
}

/// Compare two profiles. `labels` name the old and new inputs.
///
/// Header: `Statistical Measure, <old>, <new>, percent_difference`.
pub fn compare_profiles(
    old: &Table,
    new: &Table,
    cols: &ProfileColumns,
    labels: (&str, &str),
) -> Result<Table> {
    if labels.0 == labels.1 {
        return Err(StatsError::DuplicateLabel(labels.0.to_owned()));
    }
    let a = measures(old, cols)?;
    let b = measures(new, cols)?;

    let mut out = Table::new(["Statistical Measure", labels.0, labels.1, "percent_difference"]);
    for ((name, va), (_, vb)) in a.into_iter().zip(b) {
        out.push_row(vec![
            name,
            format_f64(va),
            format_f64(vb),
            format_f64(percent_difference(va, vb)),
        ])?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: &str = "duration in microseconds,visited nodes\n10,100\n20,200\n30,300\n";
    const NEW: &str = "duration in microseconds,visited nodes\n30,100\n30,200\n30,300\n";

    #[test]
    fn report_shape_and_values() {
        let old = Table::from_csv_str(OLD).unwrap();
        let new = Table::from_csv_str(NEW).unwrap();
        let out = compare_profiles(
            &old,
            &new,
            &ProfileColumns::default(),
            ("specialized profile", "generic profile"),
        )
        .unwrap();

        assert_eq!(
            out.headers(),
            ["Statistical Measure", "specialized profile", "generic profile", "percent_difference"]
        );
        assert_eq!(out.len(), 13);
        assert_eq!(out.rows()[0], ["average_duration", "20", "30", "40"]);
        assert_eq!(out.rows()[6][0], "average_visited_nodes");

        let corr = &out.rows()[12];
        assert_eq!(corr[0], "correlation_coefficient");
        assert_eq!(corr[1], "1");
        // Constant durations have no correlation.
        assert_eq!(corr[2], "");
        assert_eq!(corr[3], "");
    }

    #[test]
    fn labels_must_differ() {
        let t = Table::from_csv_str(OLD).unwrap();
        let err = compare_profiles(&t, &t, &ProfileColumns::default(), ("p", "p")).unwrap_err();
        assert_eq!(err, StatsError::DuplicateLabel("p".into()));
    }

    #[test]
    fn missing_column_is_reported() {
        let t = Table::from_csv_str("duration in microseconds\n1\n").unwrap();
        let err = compare_profiles(&t, &t, &ProfileColumns::default(), ("a", "b")).unwrap_err();
        assert!(err.to_string().contains("visited nodes"));
    }
}
