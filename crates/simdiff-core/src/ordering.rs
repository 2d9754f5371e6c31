//! Categorical axis ordering
//!
//! Field values are opaque categorical labels and order lexicographically by
//! default. Age-like fields carry numeric labels, which sort incorrectly as
//! strings ("10" before "2"), so those fields override to
//! ascending-numeric-by-value ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Ordering applied to the distinct values along a categorical axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueOrder {
    /// Lexicographic ascending
    CategoryAscending,
    /// Lexicographic descending
    CategoryDescending,
    /// Ascending by parsed numeric value; unparsable labels sort after all
    /// numeric ones, lexicographically among themselves
    NumericAscending,
}

impl ValueOrder {
    /// Compare two labels under this ordering
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            ValueOrder::CategoryAscending => a.cmp(b),
            ValueOrder::CategoryDescending => b.cmp(a),
            ValueOrder::NumericAscending => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            },
        }
    }
}

fn parse_numeric(label: &str) -> Option<f64> {
    label.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sort labels in place under the given ordering
pub fn sort_values(values: &mut [String], order: ValueOrder) {
    values.sort_by(|a, b| order.compare(a, b));
}

/// The set of fields whose values order numerically rather than
/// lexicographically.
///
/// Defaults to the age field only; everything else is treated as opaque
/// categorical labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFields {
    names: Vec<String>,
}

impl Default for NumericFields {
    fn default() -> Self {
        Self {
            names: vec!["AGE".to_string()],
        }
    }
}

impl NumericFields {
    /// An empty set (every field categorical)
    pub fn none() -> Self {
        Self { names: Vec::new() }
    }

    /// Add a field to the numeric set
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    /// Whether `field` orders numerically
    pub fn contains(&self, field: &str) -> bool {
        self.names.iter().any(|n| n == field)
    }

    /// The ordering for `field`, falling back to `default` for categorical
    /// fields
    pub fn order_for(&self, field: &str, default: ValueOrder) -> ValueOrder {
        if self.contains(field) {
            ValueOrder::NumericAscending
        } else {
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(labels: &[&str], order: ValueOrder) -> Vec<String> {
        let mut values: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        sort_values(&mut values, order);
        values
    }

    #[test]
    fn test_category_ascending() {
        assert_eq!(
            sorted(&["C", "A", "B"], ValueOrder::CategoryAscending),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_category_descending() {
        assert_eq!(
            sorted(&["C", "A", "B"], ValueOrder::CategoryDescending),
            vec!["C", "B", "A"]
        );
    }

    #[test]
    fn test_numeric_ascending_beats_lexicographic() {
        // "10" < "2" as strings, but 2 < 10 < 33 as numbers
        assert_eq!(
            sorted(&["10", "2", "33"], ValueOrder::NumericAscending),
            vec!["2", "10", "33"]
        );
    }

    #[test]
    fn test_numeric_ascending_unparsable_sorts_last() {
        assert_eq!(
            sorted(&["unknown", "10", "n/a", "2"], ValueOrder::NumericAscending),
            vec!["2", "10", "n/a", "unknown"]
        );
    }

    #[test]
    fn test_numeric_fields_default_is_age() {
        let numeric = NumericFields::default();
        assert!(numeric.contains("AGE"));
        assert!(!numeric.contains("SEX"));
        assert_eq!(
            numeric.order_for("AGE", ValueOrder::CategoryAscending),
            ValueOrder::NumericAscending
        );
        assert_eq!(
            numeric.order_for("SEX", ValueOrder::CategoryDescending),
            ValueOrder::CategoryDescending
        );
    }

    #[test]
    fn test_numeric_fields_extension() {
        let numeric = NumericFields::default().with_field("TUMOUR_COUNT");
        assert!(numeric.contains("TUMOUR_COUNT"));
        assert!(numeric.contains("AGE"));
    }
}
