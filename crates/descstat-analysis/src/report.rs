//! Report assembly
//!
//! A [`Report`] gathers the [`ColumnSummary`] of every analyzed column
//! together with the dataset-wide counts, and renders the text report:
//!
//! ```text
//! Total Variables: 2
//! Total Observations: 4
//!
//! Variables Sorted by Missing Value Counts:
//!
//! Variable: gender
//! Missing Value Count: 1
//! ------------------------
//! ...
//!
//! Detailed Descriptive Statistics:
//!
//! Variable: age
//! Missing Values Count: 0, Valid Data Count: 4
//! ...
//! ```
//!
//! The first section is ordered by missing count (highest first, ties in
//! column order); the detailed section keeps the original column order.

use std::{cmp::Reverse, fmt};

use serde::Serialize;

use crate::{
    column::{ColumnSummary, SEPARATOR, analyze_dataset},
    dataset::Dataset,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of rows in the dataset.
    pub observations: usize,
    /// Summaries in original column order.
    pub columns: Vec<ColumnSummary>,
}

impl Report {
    #[must_use]
    pub fn new(observations: usize, columns: Vec<ColumnSummary>) -> Self {
        Self {
            observations,
            columns,
        }
    }

    /// Analyzes every feature column of `dataset`.
    ///
    /// ```
    /// use descstat_analysis::{dataset::Dataset, report::Report};
    ///
    /// let dataset = Dataset::from_reader("id,gender\n1,M\n2,F\n3,F\n4,\n".as_bytes()).unwrap();
    /// let report = Report::from_dataset(&dataset);
    ///
    /// assert_eq!(report.variable_count(), 1);
    /// assert_eq!(report.observations, 4);
    /// assert!(report.to_string().contains("F: Count 2, Percentage 66.67%"));
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.row_count(), analyze_dataset(dataset))
    }

    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.columns.len()
    }

    /// Summaries ordered by descending missing count; ties keep column order.
    #[must_use]
    pub fn sorted_by_missing(&self) -> Vec<&ColumnSummary> {
        let mut sorted = self.columns.iter().collect::<Vec<_>>();
        sorted.sort_by_key(|summary| Reverse(summary.missing_count));
        sorted
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Variables: {}", self.variable_count())?;
        writeln!(f, "Total Observations: {}", self.observations)?;
        writeln!(f)?;

        writeln!(f, "Variables Sorted by Missing Value Counts:")?;
        writeln!(f)?;
        for summary in self.sorted_by_missing() {
            writeln!(f, "Variable: {}", summary.name)?;
            writeln!(f, "Missing Value Count: {}", summary.missing_count)?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f)?;
        writeln!(f, "Detailed Descriptive Statistics:")?;
        writeln!(f)?;
        for summary in &self.columns {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
