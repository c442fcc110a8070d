//! Reduction primitives shared by the metric suite.
//!
//! Population (biased) moments throughout, matching the reference
//! implementation's numpy defaults (ddof = 0).

/// Arithmetic mean. Caller guarantees a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Pearson correlation coefficient.
///
/// Returns 0.0 when either side has ~zero variance (below `eps`) instead
/// of NaN, so a constant simulation degrades the correlation term rather
/// than poisoning downstream scores. The threshold also catches constants
/// like 4.2 whose accumulated sum leaves a ~1e-16 residual std.
pub fn pearson(x: &[f64], y: &[f64], eps: f64) -> f64 {
    let n = x.len() as f64;
    let mean_x = mean(x);
    let mean_y = mean(y);
    let std_x = std_dev(x);
    let std_y = std_dev(y);
    if std_x <= eps || std_y <= eps {
        return 0.0;
    }
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / (n * std_x * std_y)
}
