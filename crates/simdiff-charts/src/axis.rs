//! Categorical axis descriptions
//!
//! Charts carry axis metadata rather than rendered ticks: a title and the
//! ordering the distinct values along the axis should follow. The export
//! surface turns these into concrete axis directives.

use serde::{Deserialize, Serialize};

use simdiff_core::ValueOrder;

/// A categorical chart axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    /// Axis title (the field name)
    pub title: String,
    /// Ordering of the distinct values along the axis
    pub order: ValueOrder,
}

impl CategoryAxis {
    /// Create an axis
    pub fn new(title: impl Into<String>, order: ValueOrder) -> Self {
        Self {
            title: title.into(),
            order,
        }
    }
}
