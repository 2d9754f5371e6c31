//! Bivariate heatmaps
//!
//! One heatmap per comparison pair over the cross-product of two fields'
//! distinct values. Cells hold the z-test statistic for that value
//! combination; combinations absent from both source tables are structural
//! zeros and stay empty rather than reading as a real statistic near zero.
//!
//! Building is pure: no display, no I/O. Rendering lives in [`crate::export`].

use std::collections::HashMap;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use simdiff_core::{
    sort_values, BivariateTable, ComparisonResults, NumericFields, SourcePair, ValueOrder,
};

use crate::axis::CategoryAxis;
use crate::colormap::{picnic, DivergingScale};
use crate::config::{AxisOrientation, FieldPairRegistry};
use crate::error::{ChartError, Result};

/// Symmetric color-scale domain limit for z-test heatmaps
pub const Z_LIMIT: f64 = 7.0;

/// A heatmap of bivariate z-test results for one comparison pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChart {
    /// Figure title ("left vs. right")
    pub title: String,
    /// Categorical x-axis
    pub x_axis: CategoryAxis,
    /// Categorical y-axis
    pub y_axis: CategoryAxis,
    /// Distinct x-axis values, sorted per the x-axis ordering
    pub x_values: Vec<String>,
    /// Distinct y-axis values, sorted per the y-axis ordering
    pub y_values: Vec<String>,
    /// Dense grid of statistics, rows indexed by y, columns by x.
    /// `None` marks a structural zero (combination absent from both
    /// source tables).
    pub grid: Array2<Option<f64>>,
    /// The fixed diverging color scale
    pub scale: DivergingScale,
}

impl HeatmapChart {
    /// The grid cell for a value combination: `None` if either label is not
    /// on its axis, `Some(None)` for a structural zero, `Some(Some(z))` for
    /// a real statistic.
    pub fn cell(&self, x: &str, y: &str) -> Option<Option<f64>> {
        let xi = self.x_values.iter().position(|v| v == x)?;
        let yi = self.y_values.iter().position(|v| v == y)?;
        Some(self.grid[[yi, xi]])
    }

    /// Number of structural zeros in the grid
    pub fn structural_zeros(&self) -> usize {
        self.grid.iter().filter(|c| c.is_none()).count()
    }
}

/// Build one heatmap per comparison pair for a bivariate field pair.
///
/// The requested `(field1, field2)` orientation is resolved against the
/// registry once, before any pair is processed; an unregistered pair fails
/// the whole call with [`ChartError::UnregisteredFieldPair`], never a
/// partial result. Within a pair, more than one row for the same value
/// combination fails with [`ChartError::DuplicateCell`].
pub fn heatmap_charts(
    results: &ComparisonResults<BivariateTable>,
    field1: &str,
    field2: &str,
    registry: &FieldPairRegistry,
    numeric_fields: &NumericFields,
) -> Result<Vec<(SourcePair, HeatmapChart)>> {
    let orientation = registry.orientation(field1, field2).ok_or_else(|| {
        ChartError::UnregisteredFieldPair {
            field1: field1.to_string(),
            field2: field2.to_string(),
        }
    })?;
    let (x_field, y_field) = match orientation {
        AxisOrientation::AsGiven => (field1, field2),
        AxisOrientation::Swapped => (field2, field1),
    };

    let x_order = numeric_fields.order_for(x_field, ValueOrder::CategoryAscending);
    let y_order = numeric_fields.order_for(y_field, ValueOrder::CategoryDescending);

    let mut charts = Vec::with_capacity(results.len());
    for (pair, table) in results.iter() {
        let rows = table.rows_for_field_pair(field1, field2);
        if rows.is_empty() {
            tracing::debug!(pair = %pair, x_field, y_field, "no rows matched field pair");
        }

        // Orient each row's values onto the axes; rows may store the two
        // fields in either column order.
        let oriented: Vec<(&str, &str, f64)> = rows
            .iter()
            .map(|row| {
                if row.column_name1 == x_field {
                    (row.val1.as_str(), row.val2.as_str(), row.z_test)
                } else {
                    (row.val2.as_str(), row.val1.as_str(), row.z_test)
                }
            })
            .collect();

        let x_values = distinct_sorted(oriented.iter().map(|(x, _, _)| *x), x_order);
        let y_values = distinct_sorted(oriented.iter().map(|(_, y, _)| *y), y_order);

        let x_index: HashMap<&str, usize> = x_values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();
        let y_index: HashMap<&str, usize> = y_values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();

        let mut grid: Array2<Option<f64>> =
            Array2::from_elem((y_values.len(), x_values.len()), None);
        for (x, y, z) in &oriented {
            let cell = &mut grid[[y_index[y], x_index[x]]];
            if cell.is_some() {
                return Err(ChartError::DuplicateCell {
                    pair: pair.label(),
                    x: x.to_string(),
                    y: y.to_string(),
                });
            }
            *cell = Some(*z);
        }

        charts.push((
            pair.clone(),
            HeatmapChart {
                title: pair.label(),
                x_axis: CategoryAxis::new(x_field, x_order),
                y_axis: CategoryAxis::new(y_field, y_order),
                x_values,
                y_values,
                grid,
                scale: DivergingScale::new(picnic(), Z_LIMIT),
            },
        ));
    }
    Ok(charts)
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>, order: ValueOrder) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        if !distinct.iter().any(|v| v == value) {
            distinct.push(value.to_string());
        }
    }
    sort_values(&mut distinct, order);
    distinct
}
