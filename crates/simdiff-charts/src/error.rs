//! Error types for chart building and export

use thiserror::Error;

/// Errors from the chart builders and the export surface
#[derive(Error, Debug)]
pub enum ChartError {
    /// The requested field pair is not registered for bivariate comparison
    #[error("field pair ('{field1}', '{field2}') is not registered for bivariate comparison")]
    UnregisteredFieldPair {
        /// First requested field name
        field1: String,
        /// Second requested field name
        field2: String,
    },

    /// More than one z-test row matched a single heatmap cell
    #[error("multiple z-test rows for {pair} at cell (x='{x}', y='{y}')")]
    DuplicateCell {
        /// Label of the comparison pair
        pair: String,
        /// x-axis value of the cell
        x: String,
        /// y-axis value of the cell
        y: String,
    },

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing an exported figure failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
