//! Two-file reports.
//!
//! - [`stats_report`]: every numeric column of both files side by side.
//! - [`compare_total`]: one column, both files, plus the relative change.

use crate::error::{Result, StatsError};
use crate::summary::Summary;
use mstat_core::{format_f64, Table};
use tracing::debug;

/// Labels for the first and second input in report headers.
pub const FILE_LABELS: [&str; 2] = ["File1", "File2"];

/// Per-column statistic names, in report order.
pub const COLUMN_STATS: [&str; 7] = [
    "mean",
    "median",
    "std_dev",
    "min",
    "max",
    "25th_percentile",
    "75th_percentile",
];

const fn column_stat_values(s: &Summary) -> [f64; 7] {
    [s.mean, s.median, s.std_dev, s.min, s.max, s.p25, s.p75]
}

/// Summaries for every numeric column of a table, in header order.
#[must_use]
pub fn column_summaries(table: &Table) -> Vec<(String, Summary)> {
    table
        .numeric_columns()
        .into_iter()
        .map(|(name, values)| {
            let s = Summary::of(&values);
            (name, s)
        })
        .collect()
}

/// Side-by-side statistics for every numeric column of two tables.
///
/// One row per column name: first-file columns in order, then columns only
/// the second file has. Header is `Column`, then `File1 <stat>` for each
/// stat, then `File2 <stat>`. A column missing from one file leaves that
/// file's cells empty.
pub fn stats_report(first: &Table, second: &Table) -> Result<Table> {
    let a = column_summaries(first);
    let b = column_summaries(second);

    let mut names: Vec<&str> = a.iter().map(|(n, _)| n.as_str()).collect();
    for (n, _) in &b {
        if !names.contains(&n.as_str()) {
            names.push(n);
        }
    }

    let mut headers = vec!["Column".to_owned()];
    for label in FILE_LABELS {
        headers.extend(COLUMN_STATS.iter().map(|s| format!("{label} {s}")));
    }
    let mut out = Table::new(headers);

    for name in names {
        let mut row = vec![name.to_owned()];
        for side in [&a, &b] {
            match side.iter().find(|(n, _)| n == name) {
                Some((_, s)) => row.extend(column_stat_values(s).map(format_f64)),
                None => row.extend(std::iter::repeat(String::new()).take(COLUMN_STATS.len())),
            }
        }
        out.push_row(row)?;
    }
    debug!(columns = out.len(), "built per-column stats report");
    Ok(out)
}

/// Relative change from `before` to `after`, in percent.
///
/// Follows IEEE semantics: a zero `before` yields `±inf` or `NaN`.
#[inline]
#[must_use]
pub fn percent_change(before: f64, after: f64) -> f64 {
    (after - before) / before * 100.0
}

/// Compare one column (typically `total(B)`) across two tables.
///
/// Rows are `Mean, Median, Std Dev, Min, Max`; columns are `Statistic,
/// File1, File2, Percentage Difference (%)`.
pub fn compare_total(first: &Table, second: &Table, column: &str) -> Result<Table> {
    if !first.has_column(column) || !second.has_column(column) {
        return Err(StatsError::MissingInColumn(column.to_owned()));
    }
    let s1 = Summary::of(&first.column(column)?);
    let s2 = Summary::of(&second.column(column)?);

    let rows = [
        ("Mean", s1.mean, s2.mean),
        ("Median", s1.median, s2.median),
        ("Std Dev", s1.std_dev, s2.std_dev),
        ("Min", s1.min, s2.min),
        ("Max", s1.max, s2.max),
    ];

    let mut out = Table::new([
        "Statistic",
        FILE_LABELS[0],
        FILE_LABELS[1],
        "Percentage Difference (%)",
    ]);
    for (name, v1, v2) in rows {
        out.push_row(vec![
            name.to_owned(),
            format_f64(v1),
            format_f64(v2),
            format_f64(percent_change(v1, v2)),
        ])?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> Table {
        Table::from_csv_str(text).unwrap()
    }

    #[test]
    fn compare_total_rows() {
        let a = t("total(B)\n100\n200\n300\n");
        let b = t("total(B)\n150\n300\n450\n");
        let out = compare_total(&a, &b, "total(B)").unwrap();
        assert_eq!(out.headers(), ["Statistic", "File1", "File2", "Percentage Difference (%)"]);
        assert_eq!(out.rows()[0], ["Mean", "200", "300", "50"]);
        assert_eq!(out.rows()[3], ["Min", "100", "150", "50"]);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn compare_total_requires_column_in_both() {
        let a = t("total(B)\n1\n");
        let b = t("other\n1\n");
        assert_eq!(
            compare_total(&a, &b, "total(B)").unwrap_err(),
            StatsError::MissingInColumn("total(B)".into())
        );
        assert_eq!(
            compare_total(&a, &b, "total(B)").unwrap_err().to_string(),
            "both files must contain a 'total(B)' column"
        );
    }

    #[test]
    fn zero_baseline_is_ieee() {
        assert!(percent_change(0.0, 0.0).is_nan());
        assert_eq!(percent_change(0.0, 5.0), f64::INFINITY);
    }

    #[test]
    fn stats_report_unions_columns() {
        let a = t("x,label\n1,a\n3,b\n");
        let b = t("y,x\n10,2\n20,2\n");
        let out = stats_report(&a, &b).unwrap();
        assert_eq!(out.headers().len(), 1 + 2 * COLUMN_STATS.len());
        assert_eq!(out.headers()[1], "File1 mean");
        assert_eq!(out.headers()[8], "File2 mean");

        let names: Vec<_> = out.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, ["x", "y"]);
        // x: File1 mean 2, File2 mean 2.
        assert_eq!(out.rows()[0][1], "2");
        assert_eq!(out.rows()[0][8], "2");
        // y is absent from File1.
        assert!(out.rows()[1][1..8].iter().all(String::is_empty));
        assert_eq!(out.rows()[1][8], "15");
    }
}
