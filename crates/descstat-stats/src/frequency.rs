//! Frequency tables for categorical data.
//!
//! ```
//! use descstat_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_values(["M", "F", "F"]);
//! let entries = table.entries();
//!
//! assert_eq!(entries[0].value, "F");
//! assert_eq!(entries[0].count, 2);
//! assert_eq!(format!("{:.2}", entries[0].percentage), "66.67");
//! assert_eq!(entries[1].value, "M");
//! ```

use std::{collections::HashMap, hash::Hash};

use serde::Serialize;

/// Count and share of a single distinct value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frequency<K> {
    /// The distinct value.
    pub value: K,
    /// Number of occurrences.
    pub count: usize,
    /// Share of all counted values, in percent (0.0-100.0).
    pub percentage: f64,
}

/// Distinct values ordered by descending count.
///
/// Values with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable<K> {
    total: usize,
    entries: Vec<Frequency<K>>,
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    /// Counts the values and orders them by descending count.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut index = HashMap::<K, usize>::new();
        let mut counted = Vec::<(K, usize)>::new();
        let mut total = 0;
        for value in values {
            total += 1;
            if let Some(&idx) = index.get(&value) {
                counted[idx].1 += 1;
            } else {
                index.insert(value.clone(), counted.len());
                counted.push((value, 1));
            }
        }

        // Stable sort keeps first-appearance order among ties
        counted.sort_by(|(_, a), (_, b)| b.cmp(a));

        let entries = counted
            .into_iter()
            .map(|(value, count)| Frequency {
                value,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect();
        Self { total, entries }
    }
}

impl<K> FrequencyTable<K> {
    /// Number of values counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries ordered by descending count.
    #[must_use]
    pub fn entries(&self) -> &[Frequency<K>] {
        &self.entries
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frequency<K>> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::<String>::from_values(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_single_category_is_full_share() {
        let table = FrequencyTable::from_values(["x", "x", "x"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].count, 3);
        assert!((table.entries()[0].percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let table = FrequencyTable::from_values(["b", "a", "c", "a", "b", "c", "d"]);
        let order = table.iter().map(|f| f.value).collect::<Vec<_>>();
        assert_eq!(order, ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let values = ["a", "b", "b", "c", "c", "c", "d"];
        let table = FrequencyTable::from_values(values);
        let sum = table.iter().map(|f| f.percentage).sum::<f64>();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(table.total(), values.len());
    }
}
