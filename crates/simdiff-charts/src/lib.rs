//! simdiff-charts - Chart artifact builders for simdiff
//!
//! Reshapes z-test comparison results into renderable chart artifacts:
//!
//! - **Grouped bar charts**: one series per comparison pair for a single
//!   field, significant statistics flagged by outline styling
//! - **Heatmaps**: one chart per comparison pair over the cross-product of
//!   two fields' values, structural zeros kept distinct from real statistics
//! - **Colormap**: the fixed diverging z-test color scale
//! - **Export**: plotly-compatible figure JSON, the only rendering surface
//!
//! Building and rendering are separate steps: builders return plain data and
//! perform no display, so the reshaping logic is testable without a
//! rendering backend.

pub mod axis;
pub mod bars;
pub mod colormap;
pub mod config;
pub mod error;
pub mod export;
pub mod heatmap;

pub use axis::*;
pub use bars::*;
pub use colormap::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use heatmap::*;
