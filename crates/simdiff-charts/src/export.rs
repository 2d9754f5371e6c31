//! Figure export
//!
//! The render half of the build/render split: chart artifacts become
//! plotly-compatible figure JSON (`data` traces plus `layout`), either as a
//! string or written to disk. Builders never render; everything here is
//! reproducible from the artifact alone.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{json, Value};

use simdiff_core::ValueOrder;

use crate::axis::CategoryAxis;
use crate::bars::GroupedBarChart;
use crate::error::Result;
use crate::heatmap::HeatmapChart;

/// Conversion into a plotly-compatible figure
pub trait ToPlotly {
    /// The figure JSON (`data` + `layout`)
    fn to_plotly(&self) -> Value;
}

impl ToPlotly for GroupedBarChart {
    fn to_plotly(&self) -> Value {
        let data: Vec<Value> = self
            .series
            .iter()
            .map(|series| {
                json!({
                    "type": "bar",
                    "name": series.name,
                    "x": series.categories,
                    "y": series.values,
                    "marker": {
                        "color": series.color.to_hex(),
                        "line": {
                            "width": series.outlines.iter().map(|o| o.width).collect::<Vec<_>>(),
                            "color": series.outlines.iter().map(|o| o.color.to_hex()).collect::<Vec<_>>(),
                        },
                    },
                })
            })
            .collect();

        json!({
            "data": data,
            "layout": {
                "barmode": "group",
                "title": self.title,
                "xaxis": axis_directives(&self.x_axis, &self.categories()),
                "yaxis": { "title": self.y_title },
            },
        })
    }
}

impl ToPlotly for HeatmapChart {
    fn to_plotly(&self) -> Value {
        // Structural zeros serialize as JSON null: a gap in the color scale
        let z: Vec<Vec<Value>> = self
            .grid
            .outer_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(v) => json!(v),
                        None => Value::Null,
                    })
                    .collect()
            })
            .collect();

        let colorscale: Vec<Value> = self
            .scale
            .colormap()
            .stops()
            .iter()
            .map(|(t, color)| json!([t, color.to_hex()]))
            .collect();

        json!({
            "data": [{
                "type": "heatmap",
                "name": self.title,
                "x": self.x_values,
                "y": self.y_values,
                "z": z,
                "zmin": -self.scale.limit(),
                "zmax": self.scale.limit(),
                "colorscale": colorscale,
                "colorbar": { "title": "z-test statistic" },
            }],
            "layout": {
                "title": self.title,
                "xaxis": axis_directives(&self.x_axis, &self.x_values),
                "yaxis": axis_directives(&self.y_axis, &self.y_values),
            },
        })
    }
}

fn axis_directives(axis: &CategoryAxis, categories: &[String]) -> Value {
    match axis.order {
        ValueOrder::CategoryAscending => json!({
            "title": axis.title,
            "type": "category",
            "categoryorder": "category ascending",
        }),
        ValueOrder::CategoryDescending => json!({
            "title": axis.title,
            "type": "category",
            "categoryorder": "category descending",
        }),
        // Numeric ordering has no plotly keyword; pass the explicit array
        ValueOrder::NumericAscending => json!({
            "title": axis.title,
            "type": "category",
            "categoryorder": "array",
            "categoryarray": categories,
        }),
    }
}

/// Render a chart to pretty-printed figure JSON
pub fn to_json_string<T: ToPlotly>(chart: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&chart.to_plotly())?)
}

/// Write a chart's figure JSON to a file
pub fn write_json<T: ToPlotly>(chart: &T, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(BufWriter::new(file), &chart.to_plotly())?;
    Ok(())
}
