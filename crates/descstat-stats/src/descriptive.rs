//! Central tendency of a numeric column.

use serde::Serialize;

use crate::percentiles;

/// Mean and median of a non-empty set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentralTendency {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median, interpolated for even counts.
    pub median: f64,
}

impl CentralTendency {
    /// Computes the mean and median of values sorted in ascending order.
    ///
    /// Returns `None` for empty input.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use descstat_stats::descriptive::CentralTendency;
    /// let stats = CentralTendency::from_sorted(&[1.0, 2.0, 3.0, 10.0]).unwrap();
    /// assert_eq!(stats.mean, 4.0);
    /// assert_eq!(stats.median, 2.5);
    /// assert!(CentralTendency::from_sorted(&[]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return None;
        }

        let mean = sorted_values.iter().sum::<f64>() / sorted_values.len() as f64;
        let median = percentiles::compute_percentile(sorted_values, 50.0);
        Some(Self { mean, median })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_with_outlier() {
        let stats = CentralTendency::from_sorted(&[20.0, 21.0, 22.0, 23.0, 24.0, 1000.0]).unwrap();
        assert!((stats.mean - 185.0).abs() < 1e-9);
        assert_eq!(stats.median, 22.5);
    }

    #[test]
    fn test_single_value() {
        let stats = CentralTendency::from_sorted(&[4.0]).unwrap();
        assert_eq!(stats, CentralTendency { mean: 4.0, median: 4.0 });
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_rejects_unsorted() {
        let _ = CentralTendency::from_sorted(&[2.0, 1.0]);
    }
}
