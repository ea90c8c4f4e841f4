//! Per-group statistics (e.g. durations per thread) and histograms.

use crate::error::{Result, StatsError};
use crate::summary::Summary;
use mstat_core::{format_f64, Number, Table};

/// Per-group statistic names, in report order.
pub const GROUP_STATS: [&str; 7] = [
    "average",
    "median",
    "min",
    "max",
    "percentile_25",
    "percentile_50",
    "percentile_75",
];

/// Statistics of `value` for every distinct `key`.
///
/// The first header is the key column's name. Groups are sorted by key:
/// numerically when every key is numeric, as text otherwise.
pub fn group_stats(table: &Table, key: &str, value: &str) -> Result<Table> {
    let mut groups = table.group_by(key, value)?;
    sort_keys(&mut groups);

    let mut headers = vec![key.to_owned()];
    headers.extend(GROUP_STATS.iter().map(|s| (*s).to_owned()));
    let mut out = Table::new(headers);

    for (k, values) in groups {
        let s = Summary::of(&values);
        let mut row = vec![k];
        row.extend([s.mean, s.median, s.min, s.max, s.p25, s.p50, s.p75].map(format_f64));
        out.push_row(row)?;
    }
    Ok(out)
}

fn sort_keys(groups: &mut [(String, Vec<f64>)]) {
    let numeric_key = |k: &str| Number::parse(k).map(Number::as_f64);
    if groups.iter().all(|(k, _)| numeric_key(k).is_some()) {
        groups.sort_by(|(a, _), (b, _)| {
            let a = numeric_key(a).unwrap_or(f64::NAN);
            let b = numeric_key(b).unwrap_or(f64::NAN);
            a.total_cmp(&b)
        });
    } else {
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));
    }
}

/// Equal-width bin counts per group, over each group's own value range.
///
/// Columns are `group, bin, lower, upper, count`. Bins are half-open except
/// the last, which includes the maximum. A group whose values are all equal
/// uses the range `[v − 0.5, v + 0.5]`. Empty groups produce no rows.
pub fn histogram(groups: &[(String, Vec<f64>)], bins: usize) -> Result<Table> {
    if bins == 0 {
        return Err(StatsError::NoBins);
    }
    let mut out = Table::new(["group", "bin", "lower", "upper", "count"]);

    for (key, values) in groups {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let Some((mut lo, mut hi)) = range(&finite) else {
            continue;
        };
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for v in &finite {
            counts[bin_index(*v, lo, width, bins)] += 1;
        }

        for (i, count) in counts.into_iter().enumerate() {
            let lower = (i as f64).mul_add(width, lo);
            let upper = if i + 1 == bins { hi } else { ((i + 1) as f64).mul_add(width, lo) };
            out.push_row(vec![
                key.clone(),
                i.to_string(),
                format_f64(lower),
                format_f64(upper),
                count.to_string(),
            ])?;
        }
    }
    Ok(out)
}

fn range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(v: f64, lo: f64, width: f64, bins: usize) -> usize {
    let idx = ((v - lo) / width).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(bins - 1)
    }
}
