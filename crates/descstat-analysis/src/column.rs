//! Per-column analysis
//!
//! Each feature column is classified once as [`VariableKind::Continuous`] or
//! [`VariableKind::Categorical`] and then summarized along the matching path:
//!
//! - **Continuous**: mean, median, quartiles, IQR outlier count and the
//!   histogram that gets plotted
//! - **Categorical**: category counts and percentages ordered by count
//!
//! [`analyze_column`] is a pure function of the column, so columns can be
//! summarized independently and merged afterwards by [`Report`](crate::report::Report).
//!
//! # Examples
//!
//! ```
//! use descstat_analysis::{
//!     column::{ColumnStatistics, analyze_column},
//!     dataset::Column,
//! };
//!
//! let age = Column::new(
//!     "age",
//!     ["20", "21", "22", "23", "24", "1000"]
//!         .map(|v| Some(v.to_owned()))
//!         .to_vec(),
//! );
//! let summary = analyze_column(&age);
//!
//! let ColumnStatistics::Continuous(stats) = &summary.statistics else {
//!     panic!("numeric column should be continuous");
//! };
//! assert_eq!(stats.q1, 21.25);
//! assert_eq!(stats.q3, 23.75);
//! assert_eq!(stats.outlier_count, 1);
//! ```

use std::fmt;

use descstat_stats::{
    descriptive::CentralTendency, frequency::FrequencyTable, histogram::Histogram,
    outliers::IqrFences,
};
use serde::Serialize;

use crate::dataset::{Column, Dataset, parse_number};

/// Separator line closing each column block in the report.
pub const SEPARATOR: &str = "------------------------";

/// How a column is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Every non-missing value is a number.
    Continuous,
    /// At least one non-missing value is not a number.
    Categorical,
}

impl VariableKind {
    /// Classifies a column by its non-missing values.
    ///
    /// A column without any valid value counts as continuous.
    #[must_use]
    pub fn of(column: &Column) -> Self {
        if column.values().all(|value| parse_number(value).is_some()) {
            Self::Continuous
        } else {
            Self::Categorical
        }
    }

    /// Plot file suffix for this kind of variable.
    #[must_use]
    pub const fn plot_suffix(self) -> &'static str {
        match self {
            Self::Continuous => "hist",
            Self::Categorical => "pie",
        }
    }
}

/// Statistics of a continuous column.
///
/// Every value is NaN (and the outlier count 0) when the column has no
/// valid values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinuousStats {
    pub mean: f64,
    pub median: f64,
    /// 25% quantile.
    pub q1: f64,
    /// 75% quantile.
    pub q3: f64,
    pub fences: IqrFences,
    pub outlier_count: usize,
    pub histogram: Histogram,
}

impl ContinuousStats {
    /// Summarizes values sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        let (mean, median) = CentralTendency::from_sorted(sorted_values)
            .map_or((f64::NAN, f64::NAN), |stats| (stats.mean, stats.median));
        let fences = IqrFences::from_sorted(sorted_values);
        Self {
            mean,
            median,
            q1: fences.q1,
            q3: fences.q3,
            fences,
            outlier_count: fences.count_outliers(sorted_values),
            histogram: Histogram::auto_from_sorted(sorted_values),
        }
    }
}

/// Statistics of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalStats {
    /// Categories ordered by descending count.
    pub categories: FrequencyTable<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStatistics {
    Continuous(ContinuousStats),
    Categorical(CategoricalStats),
}

impl ColumnStatistics {
    #[must_use]
    pub fn kind(&self) -> VariableKind {
        match self {
            Self::Continuous(_) => VariableKind::Continuous,
            Self::Categorical(_) => VariableKind::Categorical,
        }
    }
}

/// Summary of one analyzed column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub missing_count: usize,
    pub valid_count: usize,
    pub statistics: ColumnStatistics,
}

impl ColumnSummary {
    #[must_use]
    pub fn kind(&self) -> VariableKind {
        self.statistics.kind()
    }

    /// Total number of rows, missing or not.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.missing_count + self.valid_count
    }

    /// File name of the plot for this column, e.g. `age_hist.svg`.
    ///
    /// Path separators in the column name are replaced by `_` so the plot
    /// always lands directly in the plot directory.
    #[must_use]
    pub fn plot_file_name(&self, extension: &str) -> String {
        let stem = self.name.replace(['/', '\\'], "_");
        format!("{stem}_{}.{extension}", self.kind().plot_suffix())
    }
}

/// Summarizes a single column.
#[must_use]
pub fn analyze_column(column: &Column) -> ColumnSummary {
    let kind = VariableKind::of(column);
    let statistics = match kind {
        VariableKind::Continuous => {
            let mut values = column.values().filter_map(parse_number).collect::<Vec<_>>();
            values.sort_by(f64::total_cmp);
            ColumnStatistics::Continuous(ContinuousStats::from_sorted(&values))
        }
        VariableKind::Categorical => ColumnStatistics::Categorical(CategoricalStats {
            categories: FrequencyTable::from_values(column.values().map(str::to_owned)),
        }),
    };

    let summary = ColumnSummary {
        name: column.name().to_owned(),
        missing_count: column.missing_count(),
        valid_count: column.valid_count(),
        statistics,
    };
    tracing::debug!(
        column = %summary.name,
        kind = %kind,
        missing = summary.missing_count,
        valid = summary.valid_count,
        "Analyzed column"
    );
    summary
}

/// Summarizes every feature column of a dataset, in column order.
#[must_use]
pub fn analyze_dataset(dataset: &Dataset) -> Vec<ColumnSummary> {
    dataset
        .feature_columns()
        .iter()
        .map(analyze_column)
        .collect()
}

/// Formats a float with a fixed number of decimals, printing NaN as `nan`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Decimal(pub f64, pub usize);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value, precision) = *self;
        if value.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{value:.precision$}")
        }
    }
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variable: {}", self.name)?;
        writeln!(
            f,
            "Missing Values Count: {}, Valid Data Count: {}",
            self.missing_count, self.valid_count
        )?;
        writeln!(f, "Data Type: {} Variable", self.kind())?;
        match &self.statistics {
            ColumnStatistics::Continuous(stats) => {
                writeln!(f, "Mean: {}", Decimal(stats.mean, 2))?;
                writeln!(f, "Median: {}", Decimal(stats.median, 2))?;
                writeln!(f, "25% Quantile: {}", Decimal(stats.q1, 2))?;
                writeln!(f, "75% Quantile: {}", Decimal(stats.q3, 2))?;
                writeln!(f, "Outlier Count: {}", stats.outlier_count)?;
            }
            ColumnStatistics::Categorical(stats) => {
                writeln!(f, "Categories and Proportions:")?;
                for category in stats.categories.iter() {
                    writeln!(
                        f,
                        "{}: Count {}, Percentage {}%",
                        category.value,
                        category.count,
                        Decimal(category.percentage, 2)
                    )?;
                }
            }
        }
        writeln!(f, "{SEPARATOR}")
    }
}
