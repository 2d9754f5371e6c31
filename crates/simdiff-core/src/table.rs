//! Comparison result tables
//!
//! Row-oriented tables of z-test statistics. Each row records the statistic
//! for one field value (univariate) or one pair of field values (bivariate)
//! between the two source tables of a comparison pair. Tables expose the
//! column-based filtering the chart builders need; they never compute
//! statistics themselves.

use serde::{Deserialize, Serialize};

use crate::pair::SourcePair;

/// One univariate z-test result: a field value and its statistic
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnivariateRow {
    /// Name of the data field the value belongs to
    pub column_name: String,
    /// The field value whose counts were compared
    pub val: String,
    /// Signed z-test statistic for this value
    pub z_test: f64,
}

impl UnivariateRow {
    /// Create a new row
    pub fn new(column_name: impl Into<String>, val: impl Into<String>, z_test: f64) -> Self {
        Self {
            column_name: column_name.into(),
            val: val.into(),
            z_test,
        }
    }
}

/// One bivariate z-test result: a pair of field values and their statistic
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BivariateRow {
    /// Name of the first data field
    pub column_name1: String,
    /// Value in the first field
    pub val1: String,
    /// Name of the second data field
    pub column_name2: String,
    /// Value in the second field
    pub val2: String,
    /// Signed z-test statistic for this value combination
    pub z_test: f64,
}

impl BivariateRow {
    /// Create a new row
    pub fn new(
        column_name1: impl Into<String>,
        val1: impl Into<String>,
        column_name2: impl Into<String>,
        val2: impl Into<String>,
        z_test: f64,
    ) -> Self {
        Self {
            column_name1: column_name1.into(),
            val1: val1.into(),
            column_name2: column_name2.into(),
            val2: val2.into(),
            z_test,
        }
    }
}

/// Table of univariate z-test results for one comparison pair
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnivariateTable {
    rows: Vec<UnivariateRow>,
}

impl UnivariateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, preserving row order
    pub fn from_rows(rows: Vec<UnivariateRow>) -> Self {
        Self { rows }
    }

    /// Append a row
    pub fn push(&mut self, row: UnivariateRow) {
        self.rows.push(row);
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[UnivariateRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `column_name` equals `field`, in table order.
    ///
    /// A field name absent from the table yields an empty selection, never
    /// an error.
    pub fn rows_for_field(&self, field: &str) -> Vec<&UnivariateRow> {
        self.rows.iter().filter(|r| r.column_name == field).collect()
    }
}

/// Table of bivariate z-test results for one comparison pair
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BivariateTable {
    rows: Vec<BivariateRow>,
}

impl BivariateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, preserving row order
    pub fn from_rows(rows: Vec<BivariateRow>) -> Self {
        Self { rows }
    }

    /// Append a row
    pub fn push(&mut self, row: BivariateRow) {
        self.rows.push(row);
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[BivariateRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose field-name columns match `(a, b)` in either order.
    pub fn rows_for_field_pair(&self, a: &str, b: &str) -> Vec<&BivariateRow> {
        self.rows
            .iter()
            .filter(|r| {
                (r.column_name1 == a && r.column_name2 == b)
                    || (r.column_name1 == b && r.column_name2 == a)
            })
            .collect()
    }
}

/// Insertion-ordered mapping from comparison pair to a result table.
///
/// Iteration order is insertion order. Order carries no statistical meaning;
/// it only keeps chart output stable across identical inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResults<T> {
    entries: Vec<(SourcePair, T)>,
}

impl<T> ComparisonResults<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a table for a pair.
    ///
    /// Re-inserting an existing pair replaces its table in place, keeping
    /// the original position.
    pub fn insert(&mut self, pair: SourcePair, table: T) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == pair) {
            entry.1 = table;
        } else {
            self.entries.push((pair, table));
        }
    }

    /// Look up the table for a pair
    pub fn get(&self, pair: &SourcePair) -> Option<&T> {
        self.entries.iter().find(|(p, _)| p == pair).map(|(_, t)| t)
    }

    /// Iterate `(pair, table)` entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&SourcePair, &T)> {
        self.entries.iter().map(|(p, t)| (p, t))
    }

    /// The pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = &SourcePair> {
        self.entries.iter().map(|(p, _)| p)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(SourcePair, T)> for ComparisonResults<T> {
    fn from_iter<I: IntoIterator<Item = (SourcePair, T)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (pair, table) in iter {
            results.insert(pair, table);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_univariate() -> UnivariateTable {
        UnivariateTable::from_rows(vec![
            UnivariateRow::new("SEX", "1", 0.4),
            UnivariateRow::new("SEX", "2", -0.4),
            UnivariateRow::new("GRADE", "G1", 2.3),
        ])
    }

    #[test]
    fn test_rows_for_field_filters_by_name() {
        let table = sample_univariate();
        let rows = table.rows_for_field("SEX");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.column_name == "SEX"));
    }

    #[test]
    fn test_rows_for_field_absent_is_empty() {
        let table = sample_univariate();
        assert!(table.rows_for_field("STAGE").is_empty());
    }

    #[test]
    fn test_rows_for_field_pair_matches_either_order() {
        let table = BivariateTable::from_rows(vec![
            BivariateRow::new("SEX", "1", "GRADE", "G1", 1.0),
            BivariateRow::new("GRADE", "G2", "SEX", "2", -1.0),
            BivariateRow::new("SEX", "1", "STAGE", "S1", 3.0),
        ]);
        let rows = table.rows_for_field_pair("SEX", "GRADE");
        assert_eq!(rows.len(), 2);
        let rows = table.rows_for_field_pair("GRADE", "SEX");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_results_iteration_is_insertion_order() {
        let results: ComparisonResults<UnivariateTable> = vec![
            (SourcePair::new("sim2", "av2017"), sample_univariate()),
            (SourcePair::new("sim1", "av2015"), sample_univariate()),
        ]
        .into_iter()
        .collect();

        let pairs: Vec<String> = results.pairs().map(|p| p.label()).collect();
        assert_eq!(pairs, vec!["sim2 vs. av2017", "sim1 vs. av2015"]);
    }

    #[test]
    fn test_table_serde_round_trip() {
        let table = sample_univariate();
        let json = serde_json::to_string(&table).unwrap();
        let back: UnivariateTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_results_reinsert_replaces_in_place() {
        let mut results = ComparisonResults::new();
        results.insert(SourcePair::new("sim1", "av2015"), sample_univariate());
        results.insert(SourcePair::new("sim2", "av2017"), sample_univariate());
        results.insert(SourcePair::new("sim1", "av2015"), UnivariateTable::new());

        assert_eq!(results.len(), 2);
        let first = results.pairs().next().unwrap();
        assert_eq!(first.label(), "sim1 vs. av2015");
        assert!(results
            .get(&SourcePair::new("sim1", "av2015"))
            .unwrap()
            .is_empty());
    }
}
