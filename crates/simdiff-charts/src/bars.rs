//! Univariate grouped bar charts
//!
//! One bar series per comparison pair, bar height the z-test statistic for
//! each distinct value of the requested field. Bars whose statistic is
//! significant get a red outline so deviations stand out at a glance.
//!
//! Building is pure: no display, no I/O. Rendering lives in [`crate::export`].

use serde::{Deserialize, Serialize};

use simdiff_core::{
    sort_values, ComparisonResults, NumericFields, UnivariateTable, ValueOrder,
};

use crate::axis::CategoryAxis;
use crate::colormap::Color;
use crate::config::PairPalette;

/// Absolute z-test value at and above which a bar is flagged significant
pub const SIGNIFICANCE_THRESHOLD: f64 = 2.0;

/// Outline width for significant bars; others get zero width
const SIGNIFICANT_OUTLINE_WIDTH: f64 = 1.0;

/// Outline styling for one bar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarOutline {
    /// Border line width
    pub width: f64,
    /// Border line color
    pub color: Color,
}

impl BarOutline {
    /// Outline for a statistic: red emphasis when significant, otherwise a
    /// zero-width border in the series fill color
    pub fn for_statistic(z_test: f64, fill: Color) -> Self {
        if z_test.abs() >= SIGNIFICANCE_THRESHOLD {
            Self {
                width: SIGNIFICANT_OUTLINE_WIDTH,
                color: Color::rgb8(255, 0, 0),
            }
        } else {
            Self {
                width: 0.0,
                color: fill,
            }
        }
    }

    /// Whether this outline marks a significant statistic
    pub fn is_significant(&self) -> bool {
        self.width > 0.0
    }
}

/// One bar series: the z-test statistics of a single comparison pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Series name ("left vs. right")
    pub name: String,
    /// Bar fill color
    pub color: Color,
    /// X-axis category per bar, in table row order
    pub categories: Vec<String>,
    /// Bar height (z-test statistic) per bar
    pub values: Vec<f64>,
    /// Outline styling per bar
    pub outlines: Vec<BarOutline>,
}

impl BarSeries {
    /// Number of bars
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no bars
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A grouped bar chart of univariate z-test results, one series per pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarChart {
    /// Figure title
    pub title: String,
    /// Categorical x-axis (the requested field)
    pub x_axis: CategoryAxis,
    /// Y-axis title
    pub y_title: String,
    /// One series per comparison pair, in collection order
    pub series: Vec<BarSeries>,
}

impl GroupedBarChart {
    /// Distinct x-axis categories across all series, sorted per the axis
    /// ordering
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for series in &self.series {
            for cat in &series.categories {
                if !seen.contains(cat) {
                    seen.push(cat.clone());
                }
            }
        }
        sort_values(&mut seen, self.x_axis.order);
        seen
    }
}

/// Build a grouped bar chart of z-test statistics for one field.
///
/// For each comparison pair, selects the rows whose `column_name` equals
/// `field` and emits one bar per row. A field absent from a table yields an
/// empty series for that pair, never an error. Series colors come from the
/// palette, falling back to its default cycle for unregistered pairs.
pub fn grouped_bar_chart(
    results: &ComparisonResults<UnivariateTable>,
    field: &str,
    palette: &PairPalette,
    numeric_fields: &NumericFields,
) -> GroupedBarChart {
    let mut series = Vec::with_capacity(results.len());
    for (index, (pair, table)) in results.iter().enumerate() {
        let fill = palette.color_for(pair, index);
        let rows = table.rows_for_field(field);
        if rows.is_empty() {
            tracing::debug!(pair = %pair, field, "no rows matched field");
        }

        let mut categories = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        let mut outlines = Vec::with_capacity(rows.len());
        for row in rows {
            categories.push(row.val.clone());
            values.push(row.z_test);
            outlines.push(BarOutline::for_statistic(row.z_test, fill));
        }

        series.push(BarSeries {
            name: pair.label(),
            color: fill,
            categories,
            values,
            outlines,
        });
    }

    GroupedBarChart {
        title: "Univariate z-test results".to_string(),
        x_axis: CategoryAxis::new(
            field,
            numeric_fields.order_for(field, ValueOrder::CategoryAscending),
        ),
        y_title: "z-test statistic".to_string(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simdiff_core::{SourcePair, UnivariateRow};

    fn sample_results() -> ComparisonResults<UnivariateTable> {
        let mut results = ComparisonResults::new();
        results.insert(
            SourcePair::new("sim1", "av2015"),
            UnivariateTable::from_rows(vec![
                UnivariateRow::new("GRADE", "A", 1.0),
                UnivariateRow::new("GRADE", "B", -3.5),
                UnivariateRow::new("GRADE", "C", 2.0),
                UnivariateRow::new("SEX", "1", 0.2),
            ]),
        );
        results
    }

    #[test]
    fn test_one_bar_per_matching_row() {
        let chart = grouped_bar_chart(
            &sample_results(),
            "GRADE",
            &PairPalette::default(),
            &NumericFields::default(),
        );

        assert_eq!(chart.series.len(), 1);
        let series = &chart.series[0];
        assert_eq!(series.name, "sim1 vs. av2015");
        assert_eq!(series.len(), 3);
        assert_eq!(series.categories, vec!["A", "B", "C"]);
        assert_eq!(series.values, vec![1.0, -3.5, 2.0]);
    }

    #[test]
    fn test_significance_styling_is_distinguishable() {
        let chart = grouped_bar_chart(
            &sample_results(),
            "GRADE",
            &PairPalette::default(),
            &NumericFields::default(),
        );
        let series = &chart.series[0];

        // |1.0| < 2: plain; |-3.5| and |2.0| >= 2: emphasized
        assert!(!series.outlines[0].is_significant());
        assert!(series.outlines[1].is_significant());
        assert!(series.outlines[2].is_significant());

        assert_eq!(series.outlines[0].width, 0.0);
        assert_eq!(series.outlines[0].color, series.color);
        assert_eq!(series.outlines[1].color.to_hex(), "#FF0000");
        assert_ne!(series.outlines[0], series.outlines[1]);
    }

    #[test]
    fn test_absent_field_yields_empty_series() {
        let chart = grouped_bar_chart(
            &sample_results(),
            "STAGE",
            &PairPalette::default(),
            &NumericFields::default(),
        );

        assert_eq!(chart.series.len(), 1);
        assert!(chart.series[0].is_empty());
    }

    #[test]
    fn test_categorical_axis_is_ascending_by_default() {
        let chart = grouped_bar_chart(
            &sample_results(),
            "GRADE",
            &PairPalette::default(),
            &NumericFields::default(),
        );
        assert_eq!(chart.x_axis.order, ValueOrder::CategoryAscending);
        assert_eq!(chart.x_axis.title, "GRADE");
    }

    #[test]
    fn test_age_axis_orders_numerically() {
        let mut results = ComparisonResults::new();
        results.insert(
            SourcePair::new("sim1", "av2015"),
            UnivariateTable::from_rows(vec![
                UnivariateRow::new("AGE", "10", 0.5),
                UnivariateRow::new("AGE", "2", 0.1),
                UnivariateRow::new("AGE", "33", -0.2),
            ]),
        );
        let chart = grouped_bar_chart(
            &results,
            "AGE",
            &PairPalette::default(),
            &NumericFields::default(),
        );

        assert_eq!(chart.x_axis.order, ValueOrder::NumericAscending);
        assert_eq!(chart.categories(), vec!["2", "10", "33"]);
    }

    #[test]
    fn test_unknown_pair_gets_fallback_color() {
        let mut results = sample_results();
        results.insert(
            SourcePair::new("sim9", "av2099"),
            UnivariateTable::from_rows(vec![UnivariateRow::new("GRADE", "A", 0.3)]),
        );
        let chart = grouped_bar_chart(
            &results,
            "GRADE",
            &PairPalette::default(),
            &NumericFields::default(),
        );

        // Both series built; the unknown pair did not fail the chart
        assert_eq!(chart.series.len(), 2);
        assert_ne!(chart.series[1].color, chart.series[0].color);
    }

    #[test]
    fn test_build_is_deterministic() {
        let results = sample_results();
        let a = grouped_bar_chart(
            &results,
            "GRADE",
            &PairPalette::default(),
            &NumericFields::default(),
        );
        let b = grouped_bar_chart(
            &results,
            "GRADE",
            &PairPalette::default(),
            &NumericFields::default(),
        );
        assert_eq!(a, b);
    }
}
