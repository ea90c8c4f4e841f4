//! Single-series estimators and the [`Summary`] bundle.

use serde::Serialize;

/// Descriptive statistics of one series.
///
/// Every field is `NaN` for an empty series; `std_dev` is also `NaN` for a
/// single value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Number of non-missing values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (average of the two middle values for even counts).
    pub median: f64,
    /// Sample standard deviation (`n − 1` denominator).
    pub std_dev: f64,
    /// Minimum.
    pub min: f64,
    /// Maximum.
    pub max: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 50th percentile (equals `median`).
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
}

impl Summary {
    /// Summarize `values`, ignoring `NaN`s.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n == 0 {
            return Self {
                count: 0,
                mean: f64::NAN,
                median: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
                p25: f64::NAN,
                p50: f64::NAN,
                p75: f64::NAN,
            };
        }

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = quantile(&sorted, 0.5);
        Self {
            count: n,
            mean,
            median,
            std_dev: sample_std_dev(&sorted, mean),
            min: sorted[0],
            max: sorted[n - 1],
            p25: quantile(&sorted, 0.25),
            p50: median,
            p75: quantile(&sorted, 0.75),
        }
    }
}

/// Quantile `q ∈ [0, 1]` of an ascending slice, linearly interpolated at
/// rank `q·(n − 1)`. `NaN` for an empty slice.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = pos - lo as f64;
            let (a, b) = (sorted[lo], sorted[hi]);
            // Rounding must not step outside the bracketing ranks.
            (b - a).mul_add(frac, a).max(a).min(b)
        }
    }
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let s = Summary::of(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(s.count, 4);
        assert!((s.mean - 2.5).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.std_dev - 1.290_994_448_735_805_6).abs() < 1e-12);
        assert_eq!((s.min, s.max), (1.0, 4.0));
        assert!((s.p25 - 1.75).abs() < 1e-12);
        assert!((s.p75 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn empty_and_single() {
        let e = Summary::of(&[]);
        assert_eq!(e.count, 0);
        assert!(e.mean.is_nan() && e.min.is_nan() && e.p75.is_nan());

        let one = Summary::of(&[7.0]);
        assert_eq!((one.mean, one.median, one.min, one.max, one.p25), (7.0, 7.0, 7.0, 7.0, 7.0));
        assert!(one.std_dev.is_nan());
    }

    #[test]
    fn nan_is_skipped() {
        let s = Summary::of(&[f64::NAN, 2.0, 4.0]);
        assert_eq!(s.count, 2);
        assert!((s.mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_endpoints() {
        let v = [10.0, 20.0, 30.0];
        assert_eq!(quantile(&v, 0.0), 10.0);
        assert_eq!(quantile(&v, 1.0), 30.0);
        assert_eq!(quantile(&v, 0.5), 20.0);
        assert!(quantile(&[], 0.5).is_nan());
    }
}
