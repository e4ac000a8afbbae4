use std::ops::Range;

use serde::Serialize;

use crate::percentiles;

/// Upper bound on the number of bins chosen by [`auto_bin_count`].
///
/// Heavy-tailed data with a very small IQR would otherwise ask for millions
/// of Freedman-Diaconis bins.
pub const MAX_AUTO_BINS: usize = 1000;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the data range into equal-width bins and counts the
/// frequency of values falling into each bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling within that range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin. The start is inclusive; the
    /// end is exclusive except for the last bin, which also holds the maximum.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram with an automatically chosen bin count.
    ///
    /// The values are sorted internally; see [`Histogram::auto_from_sorted`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use descstat_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::auto(values);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[must_use]
    pub fn auto<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::auto_from_sorted(&sorted)
    }

    /// Creates a histogram from pre-sorted values, choosing the bin count
    /// with [`auto_bin_count`].
    ///
    /// A constant dataset produces a single bin `[v - 0.5, v + 0.5]`; an
    /// empty dataset produces no bins.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use descstat_stats::histogram::Histogram;
    /// let histogram = Histogram::auto_from_sorted(&[3.0, 3.0, 3.0]);
    /// assert_eq!(histogram.bins.len(), 1);
    /// assert_eq!(histogram.bins[0].range, 2.5..3.5);
    /// assert_eq!(histogram.bins[0].count, 3);
    /// ```
    #[must_use]
    pub fn auto_from_sorted(sorted_values: &[f64]) -> Self {
        let num_bins = auto_bin_count(sorted_values);
        Self::from_sorted(sorted_values, num_bins)
    }

    /// Creates a histogram with `num_bins` equal-width bins spanning
    /// `[min, max]` of the pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use descstat_stats::histogram::Histogram;
    /// let histogram = Histogram::from_sorted(&[0.0, 1.0, 2.0, 3.0, 4.0], 2);
    /// assert_eq!(histogram.bins[0].range, 0.0..2.0);
    /// assert_eq!(histogram.bins[0].count, 2);
    /// assert_eq!(histogram.bins[1].count, 3);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&first), Some(&last)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        // Degenerate range: widen around the single value
        let (min, max) = if last - first > 0.0 {
            (first, last)
        } else {
            (first - 0.5, last + 0.5)
        };
        let span = max - min;
        if !span.is_finite() {
            return Self {
                bins: vec![HistogramBin {
                    range: min..max,
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute edges from the index to avoid accumulation errors
                let start = min + span * (bin_idx as f64) / (num_bins as f64);
                let end = if bin_idx == num_bins - 1 {
                    max
                } else {
                    min + span * ((bin_idx + 1) as f64) / (num_bins as f64)
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let normalized_position = (val - min) / span * (num_bins as f64);
            let mut idx = (normalized_position.floor().max(0.0) as usize).min(num_bins - 1);
            // Edge rounding can disagree with the floor by one bin
            if idx > 0 && val < bins[idx].range.start {
                idx -= 1;
            } else if idx + 1 < num_bins && val >= bins[idx].range.end {
                idx += 1;
            }
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The largest single-bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// The full range covered by the bins, if there are any.
    #[must_use]
    pub fn range(&self) -> Option<Range<f64>> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        Some(first.range.start..last.range.end)
    }
}

/// Chooses a bin count for sorted values.
///
/// The bin width is the smaller of the Sturges estimate
/// `range / (log2(n) + 1)` and the Freedman-Diaconis estimate
/// `2 * IQR / cbrt(n)`; the Freedman-Diaconis width is ignored when the IQR
/// is zero. The count is `ceil(range / width)`, clamped to
/// `1..=MAX_AUTO_BINS`. Empty input yields 0, a constant dataset yields 1.
///
/// # Examples
///
/// ```
/// use descstat_stats::histogram::auto_bin_count;
///
/// let values = (0..100).map(f64::from).collect::<Vec<_>>();
/// assert_eq!(auto_bin_count(&values), 8);
/// assert_eq!(auto_bin_count(&[1.0]), 1);
/// assert_eq!(auto_bin_count(&[]), 0);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn auto_bin_count(sorted_values: &[f64]) -> usize {
    let (Some(&first), Some(&last)) = (sorted_values.first(), sorted_values.last()) else {
        return 0;
    };
    let span = last - first;
    if span <= 0.0 || !span.is_finite() {
        return 1;
    }

    let n = sorted_values.len() as f64;
    let sturges_width = span / (n.log2() + 1.0);
    let iqr = percentiles::compute_percentile(sorted_values, 75.0)
        - percentiles::compute_percentile(sorted_values, 25.0);
    let fd_width = 2.0 * iqr / n.cbrt();
    let width = if fd_width > 0.0 {
        fd_width.min(sturges_width)
    } else {
        sturges_width
    };

    let bins = (span / width).ceil();
    if bins.is_finite() {
        (bins as usize).clamp(1, MAX_AUTO_BINS)
    } else {
        MAX_AUTO_BINS
    }
}
