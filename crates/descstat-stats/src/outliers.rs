//! Interquartile-range outlier detection.
//!
//! Values are flagged as outliers when they fall strictly outside the
//! Tukey fences `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`. A value exactly on a
//! fence is not an outlier.

use serde::Serialize;

use crate::percentiles;

/// Multiplier applied to the IQR to place the fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Tukey fences computed from the quartiles of a dataset.
///
/// # Examples
///
/// ```
/// use descstat_stats::outliers::IqrFences;
///
/// let values = [20.0, 21.0, 22.0, 23.0, 24.0, 1000.0];
/// let fences = IqrFences::from_sorted(&values);
///
/// assert_eq!(fences.q1, 21.25);
/// assert_eq!(fences.q3, 23.75);
/// assert_eq!(fences.iqr(), 2.5);
/// assert_eq!((fences.lower, fences.upper), (17.5, 27.5));
/// assert_eq!(fences.count_outliers(&values), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IqrFences {
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Lower fence, `q1 - 1.5 * iqr`.
    pub lower: f64,
    /// Upper fence, `q3 + 1.5 * iqr`.
    pub upper: f64,
}

impl IqrFences {
    /// Computes the fences from values sorted in ascending order.
    ///
    /// For an empty input every field is NaN, and no value is ever counted
    /// as an outlier.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let q1 = percentiles::compute_percentile(sorted_values, 25.0);
        let q3 = percentiles::compute_percentile(sorted_values, 75.0);
        Self::from_quartiles(q1, q3)
    }

    /// Builds the fences from already known quartiles.
    #[must_use]
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            lower: q1 - FENCE_FACTOR * iqr,
            upper: q3 + FENCE_FACTOR * iqr,
        }
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Returns `true` if `value` lies strictly outside the fences.
    ///
    /// NaN fences (from an empty dataset) never flag anything.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Counts the values lying strictly outside the fences.
    #[must_use]
    pub fn count_outliers(&self, values: &[f64]) -> usize {
        values.iter().filter(|&&v| self.is_outlier(v)).count()
    }
}
