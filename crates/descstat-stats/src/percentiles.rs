//! Linear-interpolation quantiles.

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two closest ranks: for `n` values
/// the percentile `p` sits at fractional position `(n - 1) * p / 100`, and the
/// result is interpolated between the values on either side of it.
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use descstat_stats::percentiles::compute_percentile;
///
/// let values = vec![20.0, 21.0, 22.0, 23.0, 24.0, 1000.0];
///
/// assert_eq!(compute_percentile(&values, 25.0), 21.25);
/// assert_eq!(compute_percentile(&values, 50.0), 22.5);
/// assert_eq!(compute_percentile(&values, 75.0), 23.75);
/// assert!(compute_percentile(&[], 50.0).is_nan());
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let last = sorted_values.len() - 1;
    let position = (last as f64 * percentile / 100.0).clamp(0.0, last as f64);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - position.floor();

    let low_value = sorted_values[lower];
    let high_value = sorted_values[upper];
    if lower == upper || fraction == 0.0 {
        return low_value;
    }
    low_value + (high_value - low_value) * fraction
}
