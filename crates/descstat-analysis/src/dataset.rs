//! In-memory tabular data loaded from a delimited file
//!
//! A [`Dataset`] is a set of named columns of equal length. Each cell holds
//! either the raw text read from the file or nothing, when the text is one of
//! the [`MISSING_MARKERS`]. The first column is the row identifier and is not
//! analyzed; the remaining ones are the feature columns.
//!
//! # Examples
//!
//! ```
//! use descstat_analysis::dataset::Dataset;
//!
//! let csv = "id,age,gender\n1,20,M\n2,21,F\n3,,F\n";
//! let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
//!
//! assert_eq!(dataset.row_count(), 3);
//! assert_eq!(dataset.feature_columns().len(), 2);
//!
//! let age = &dataset.feature_columns()[0];
//! assert_eq!(age.name(), "age");
//! assert_eq!(age.missing_count(), 1);
//! assert_eq!(age.valid_count(), 2);
//! ```

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

/// Cell texts treated as missing values.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadDatasetError {
    #[display("Failed to open dataset file: {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("Failed to read CSV data: {source}")]
    Csv { source: csv::Error },
    #[display("Dataset has no header row")]
    EmptyInput,
    #[display("Line {line}: expected at most {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl From<csv::Error> for LoadDatasetError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

/// Returns `true` if `text` denotes a missing value.
#[must_use]
pub fn is_missing(text: &str) -> bool {
    MISSING_MARKERS.contains(&text)
}

/// Parses a cell as a number, ignoring surrounding whitespace.
///
/// Text that parses to NaN is not a number here; NaN only ever stands for
/// a missing value.
///
/// ```
/// use descstat_analysis::dataset::parse_number;
///
/// assert_eq!(parse_number(" 42 "), Some(42.0));
/// assert_eq!(parse_number("-1.5e3"), Some(-1500.0));
/// assert_eq!(parse_number("NAN"), None);
/// assert_eq!(parse_number("M"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// A named column of optional cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Non-missing cell texts, in row order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().filter_map(Option::as_deref)
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.cells.len() - self.missing_count()
    }
}

/// Columns of equal length, the first of which identifies rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Builds a dataset from header names and raw rows.
    ///
    /// Cells matching a missing marker become missing, rows shorter than the
    /// header are padded with missing cells, and duplicate names are made
    /// unique by appending `.1`, `.2`, ...
    ///
    /// # Errors
    ///
    /// Returns [`LoadDatasetError::EmptyInput`] if `headers` is empty and
    /// [`LoadDatasetError::RaggedRow`] if a row is wider than the header.
    /// Row numbers in errors are 1-based file lines, the header being line 1.
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Result<Self, LoadDatasetError>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let names = header_names(headers.into_iter().map(Into::into));
        if names.is_empty() {
            return Err(LoadDatasetError::EmptyInput);
        }
        let mut builder = DatasetBuilder::new(names);
        for (idx, row) in rows.into_iter().enumerate() {
            builder.push_row(row, idx as u64 + 2)?;
        }
        Ok(builder.finish())
    }

    /// Reads comma-separated data with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid CSV, has no header row,
    /// or has a row wider than the header.
    pub fn from_reader<R>(reader: R) -> Result<Self, LoadDatasetError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let names = header_names(reader.headers()?.iter().map(str::to_owned));
        if names.is_empty() {
            return Err(LoadDatasetError::EmptyInput);
        }

        let mut builder = DatasetBuilder::new(names);
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            builder.push_row(record.iter(), line)?;
        }
        Ok(builder.finish())
    }

    /// Opens and reads a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadDatasetError::Open`] if the file cannot be opened, or
    /// any error of [`Dataset::from_reader`].
    pub fn from_path<P>(path: P) -> Result<Self, LoadDatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadDatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of data rows (the header is not counted).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The row identifier column.
    #[must_use]
    pub fn identifier(&self) -> Option<&Column> {
        self.columns.first()
    }

    /// Every column except the identifier.
    #[must_use]
    pub fn feature_columns(&self) -> &[Column] {
        self.columns.get(1..).unwrap_or_default()
    }
}

#[derive(Debug)]
struct DatasetBuilder {
    names: Vec<String>,
    cells: Vec<Vec<Option<String>>>,
    row_count: usize,
}

impl DatasetBuilder {
    fn new(names: Vec<String>) -> Self {
        let cells = vec![vec![]; names.len()];
        Self {
            names,
            cells,
            row_count: 0,
        }
    }

    fn push_row<C>(&mut self, row: C, line: u64) -> Result<(), LoadDatasetError>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let expected = self.names.len();
        let mut found = 0;
        for field in row {
            if found < expected {
                let text = field.as_ref();
                self.cells[found].push((!is_missing(text)).then(|| text.to_owned()));
            }
            found += 1;
        }
        if found > expected {
            return Err(LoadDatasetError::RaggedRow {
                line,
                expected,
                found,
            });
        }
        for column in &mut self.cells[found..] {
            column.push(None);
        }
        self.row_count += 1;
        Ok(())
    }

    fn finish(self) -> Dataset {
        let columns = self
            .names
            .into_iter()
            .zip(self.cells)
            .map(|(name, cells)| Column::new(name, cells))
            .collect();
        Dataset {
            columns,
            row_count: self.row_count,
        }
    }
}

/// Names blank headers `Unnamed: {idx}` and appends `.1`, `.2`, ... to
/// repeated names so every column is addressable.
fn header_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = vec![];
    for (idx, name) in names.into_iter().enumerate() {
        let name = if name.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        };
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        unique.push(candidate);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_identifier_is_excluded_from_features() {
        let dataset = load("id,a,b\n1,x,2\n");
        assert_eq!(dataset.identifier().map(Column::name), Some("id"));
        let names = dataset
            .feature_columns()
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_missing_markers() {
        let dataset = load("id,v\n1,NA\n2,\n3,null\n4,N/A\n5,7\n6,<NA>\n");
        let column = &dataset.feature_columns()[0];
        assert_eq!(column.missing_count(), 5);
        assert_eq!(column.values().collect::<Vec<_>>(), ["7"]);
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let dataset = load("id,a,b\n");
        assert_eq!(dataset.row_count(), 0);
        assert_eq!(dataset.column_count(), 3);
        for column in dataset.feature_columns() {
            assert!(column.is_empty());
            assert_eq!(column.missing_count(), 0);
            assert_eq!(column.valid_count(), 0);
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = Dataset::from_reader(&b""[..]).unwrap_err();
        assert!(matches!(err, LoadDatasetError::EmptyInput));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let dataset = load("id,a,b\n1,x\n2,y,z\n");
        let b = &dataset.feature_columns()[1];
        assert_eq!(b.cells(), &[None, Some("z".to_owned())]);
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn test_wide_rows_are_rejected() {
        let err = Dataset::from_reader(&b"id,a\n1,2\n3,4,5\n"[..]).unwrap_err();
        match err {
            LoadDatasetError::RaggedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let dataset = load("id,a,a,a.1\n1,2,3,4\n");
        let names = dataset
            .columns()
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["id", "a", "a.1", "a.1.1"]);
    }

    #[test]
    fn test_blank_headers_are_named_by_position() {
        let dataset = load("id,,a,\n1,2,3,4\n");
        let names = dataset
            .columns()
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["id", "Unnamed: 1", "a", "Unnamed: 3"]);
    }

    #[test]
    fn test_blank_header_name_is_deduplicated() {
        let dataset = Dataset::from_rows(["id", "Unnamed: 2", ""], [["1", "2", "3"]]).unwrap();
        assert_eq!(dataset.columns()[2].name(), "Unnamed: 2.1");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = Dataset::from_reader(&b"id,a\n1,\xff\n"[..]).unwrap_err();
        assert!(matches!(err, LoadDatasetError::Csv { .. }));
    }

    #[test]
    fn test_quoted_fields() {
        let dataset = load("id,city\n1,\"Paris, France\"\n2,\"\"\n");
        let city = &dataset.feature_columns()[0];
        assert_eq!(city.values().collect::<Vec<_>>(), ["Paris, France"]);
        assert_eq!(city.missing_count(), 1);
    }

    #[test]
    fn test_from_rows_matches_reader() {
        let from_rows = Dataset::from_rows(
            ["id", "gender"],
            [["1", "M"], ["2", "F"], ["3", "F"], ["4", ""]],
        )
        .unwrap();
        let from_reader = load("id,gender\n1,M\n2,F\n3,F\n4,\n");
        assert_eq!(from_rows, from_reader);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Dataset::from_path("/nonexistent/descstat/input.csv").unwrap_err();
        assert!(matches!(err, LoadDatasetError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/descstat/input.csv"));
    }
}
