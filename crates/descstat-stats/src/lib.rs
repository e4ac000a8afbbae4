//! Statistical primitives for the descstat column profiler.
//!
//! This crate provides the numeric building blocks used to summarize a
//! single column of data:
//!
//! - **Central tendency**: Mean and interpolated median
//! - **Percentiles**: Linear-interpolation quantiles
//! - **Outliers**: Tukey fences at 1.5 × IQR around the quartiles
//! - **Histogram generation**: Equal-width bins with an automatically chosen count
//! - **Frequency tables**: Category counts and percentages ordered by count
//!
//! # Modules
//!
//! - [`descriptive`]: Mean and median
//! - [`percentiles`]: Quantile computation
//! - [`outliers`]: IQR-based outlier fences
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`frequency`]: Frequency tables for categorical values
//!
//! # Examples
//!
//! ## Computing the mean and median
//!
//! ```
//! use descstat_stats::descriptive::CentralTendency;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = CentralTendency::from_sorted(&values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Computing quartiles
//!
//! ```
//! use descstat_stats::percentiles::compute_percentile;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(compute_percentile(&values, 50.0), 2.5);
//! ```
//!
//! ## Counting outliers
//!
//! ```
//! use descstat_stats::outliers::IqrFences;
//!
//! let values = [20.0, 21.0, 22.0, 23.0, 24.0, 1000.0];
//! let fences = IqrFences::from_sorted(&values);
//! assert_eq!(fences.count_outliers(&values), 1);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use descstat_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::auto(values);
//! assert_eq!(histogram.total_count(), 10);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod histogram;
pub mod outliers;
pub mod percentiles;
