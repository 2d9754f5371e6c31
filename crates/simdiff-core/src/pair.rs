//! Comparison-pair keys
//!
//! A comparison pair names the two source tables whose value distributions
//! were compared (e.g. a simulated table against the authentic extract it
//! imitates). Pairs key the results collection and label chart series.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two source tables being statistically compared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePair {
    /// Identifier of the first source table (typically the simulated one)
    pub left: String,
    /// Identifier of the second source table (typically the authentic one)
    pub right: String,
}

impl SourcePair {
    /// Create a new comparison pair
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Human-readable label, used for series names and figure titles
    pub fn label(&self) -> String {
        format!("{} vs. {}", self.left, self.right)
    }
}

impl fmt::Display for SourcePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs. {}", self.left, self.right)
    }
}
