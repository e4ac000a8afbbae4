//! Column-by-column descriptive analysis of tabular data
//!
//! This crate turns a CSV dataset into per-column summaries and a text
//! report. The first column of a dataset identifies rows and is skipped;
//! every other column is analyzed on its own.
//!
//! # Overview
//!
//! 1. **Load Data** ([`dataset::Dataset`]): Read the CSV file, marking missing cells
//! 2. **Analyze Columns** ([`column::analyze_column`]): Classify each column as
//!    continuous or categorical and compute its statistics
//! 3. **Assemble Report** ([`report::Report`]): Sort columns by missing count and
//!    render the text report
//!
//! Plot rendering and writing files are left to the caller; each
//! [`column::ColumnSummary`] carries the data needed for its plot (the
//! histogram of a continuous column, the category shares of a categorical
//! one) and the plot file name.
//!
//! # Examples
//!
//! ```
//! use descstat_analysis::{column::VariableKind, dataset::Dataset, report::Report};
//!
//! let csv = "id,age,gender\n1,20,M\n2,21,F\n3,22,F\n4,23,\n";
//! let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
//! let report = Report::from_dataset(&dataset);
//!
//! assert_eq!(report.variable_count(), 2);
//! assert_eq!(report.columns[0].kind(), VariableKind::Continuous);
//! assert_eq!(report.columns[1].kind(), VariableKind::Categorical);
//! assert_eq!(report.sorted_by_missing()[0].name, "gender");
//!
//! print!("{report}");
//! ```

pub mod column;
pub mod dataset;
pub mod report;
