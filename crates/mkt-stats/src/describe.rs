//! Scalar reductions over numeric samples.
//!
//! Definitions follow the conventions of the usual dataframe libraries:
//! sample standard deviation (ddof = 1), linear-interpolation quantiles, and
//! the bias-adjusted Fisher forms of skewness and kurtosis. Reductions that
//! are undefined for the sample size return NaN instead of failing.

/// Tolerance below which a second central moment counts as zero variance.
const ZERO_MOMENT_EPS: f64 = 1e-14;

/// Arithmetic mean; NaN for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1); NaN with fewer than 2 values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Quantile with linear interpolation between closest ranks; `q` in [0, 1].
/// NaN for an empty sample.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Median (50th quantile).
pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Minimum; NaN for an empty sample.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::min)
}

/// Maximum; NaN for an empty sample.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::max)
}

/// Bias-adjusted Fisher-Pearson skewness (G1).
///
/// NaN with fewer than 3 values; 0 for a zero-variance sample.
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return f64::NAN;
    }
    let m = mean(values);
    let nf = n as f64;
    let m2: f64 = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / nf;
    let m3: f64 = values.iter().map(|v| (v - m).powi(3)).sum::<f64>() / nf;
    if m2.abs() < ZERO_MOMENT_EPS {
        return 0.0;
    }
    let g1 = m3 / m2.powf(1.5);
    g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0)
}

/// Bias-adjusted excess kurtosis (G2, Fisher definition).
///
/// NaN with fewer than 4 values; 0 for a zero-variance sample.
pub fn kurtosis(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return f64::NAN;
    }
    let m = mean(values);
    let nf = n as f64;
    let m2: f64 = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / nf;
    let m4: f64 = values.iter().map(|v| (v - m).powi(4)).sum::<f64>() / nf;
    if m2.abs() < ZERO_MOMENT_EPS {
        return 0.0;
    }
    let g2 = m4 / (m2 * m2) - 3.0;
    ((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0))
}

/// Pearson correlation coefficient between paired samples.
///
/// NaN with fewer than 2 pairs or when either sample has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    if x.len() < 2 {
        return f64::NAN;
    }

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|a| a * a).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator.abs() < f64::EPSILON {
        f64::NAN
    } else {
        (numerator / denominator).clamp(-1.0, 1.0)
    }
}

/// Rounds to 2 decimal places, preserving NaN.
pub fn round2(value: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Rounds to 3 decimal places, preserving NaN.
pub fn round3(value: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    (value * 1000.0).round() / 1000.0
}
