//! Chart configuration
//!
//! Explicit, injected configuration replacing two ambient structures in
//! earlier tooling: a fixed pair-to-color dictionary that crashed on unknown
//! pairs, and a process-wide list of recognized bivariate field pairs. Both
//! are ordinary values here, passed to the builders by the caller.

use serde::{Deserialize, Serialize};

use simdiff_core::SourcePair;

use crate::colormap::Color;

/// Marker colors per comparison pair, with a fallback cycle.
///
/// Pairs absent from the palette draw from the fallback cycle by their
/// position in the results collection, so an unknown pair degrades to a
/// default color instead of failing the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairPalette {
    colors: Vec<(SourcePair, Color)>,
    fallback: Vec<Color>,
}

impl Default for PairPalette {
    fn default() -> Self {
        Self::empty()
            .with_pair(SourcePair::new("sim1", "av2015"), Color::rgb8(0, 0, 255))
            .with_pair(
                SourcePair::new("sim2", "av2017"),
                Color::rgb8(135, 206, 250),
            )
    }
}

impl PairPalette {
    /// A palette with no registered pairs, only the fallback cycle
    pub fn empty() -> Self {
        Self {
            colors: Vec::new(),
            fallback: vec![
                Color::rgb8(70, 130, 180),  // steel blue
                Color::rgb8(255, 140, 0),   // dark orange
                Color::rgb8(46, 139, 87),   // sea green
                Color::rgb8(178, 34, 34),   // firebrick
                Color::rgb8(148, 103, 189), // muted purple
            ],
        }
    }

    /// Register a color for a pair
    pub fn with_pair(mut self, pair: SourcePair, color: Color) -> Self {
        if let Some(entry) = self.colors.iter_mut().find(|(p, _)| *p == pair) {
            entry.1 = color;
        } else {
            self.colors.push((pair, color));
        }
        self
    }

    /// The registered color for a pair, if any
    pub fn get(&self, pair: &SourcePair) -> Option<Color> {
        self.colors.iter().find(|(p, _)| p == pair).map(|(_, c)| *c)
    }

    /// The color for a pair, falling back to the cycle at `index` (the
    /// pair's position in the results collection) when unregistered.
    pub fn color_for(&self, pair: &SourcePair, index: usize) -> Color {
        match self.get(pair) {
            Some(color) => color,
            None => {
                let color = self.fallback[index % self.fallback.len()];
                tracing::warn!(pair = %pair, "no registered color for pair, using fallback cycle");
                color
            }
        }
    }
}

/// Which requested field lands on the x-axis of a bivariate chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// `(field1, field2)` registered as requested: field1 on x, field2 on y
    AsGiven,
    /// Registered in reverse: field2 on x, field1 on y
    Swapped,
}

/// Registry of recognized bivariate field pairs.
///
/// Lookup decides axis assignment only; an unregistered pair means the
/// comparison was never computed and yields no chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPairRegistry {
    pairs: Vec<(String, String)>,
}

impl FieldPairRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `(field1, field2)` pair in its canonical order
    pub fn with_pair(mut self, field1: impl Into<String>, field2: impl Into<String>) -> Self {
        let entry = (field1.into(), field2.into());
        if !self.pairs.contains(&entry) {
            self.pairs.push(entry);
        }
        self
    }

    /// Whether the pair is registered in either order
    pub fn contains(&self, field1: &str, field2: &str) -> bool {
        self.orientation(field1, field2).is_some()
    }

    /// Resolve axis assignment for a requested pair.
    ///
    /// Returns `AsGiven` when `(field1, field2)` is registered in that
    /// order, `Swapped` when registered reversed, `None` when unregistered.
    pub fn orientation(&self, field1: &str, field2: &str) -> Option<AxisOrientation> {
        if self.pairs.iter().any(|(a, b)| a == field1 && b == field2) {
            Some(AxisOrientation::AsGiven)
        } else if self.pairs.iter().any(|(a, b)| a == field2 && b == field1) {
            Some(AxisOrientation::Swapped)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_known_pairs() {
        let palette = PairPalette::default();
        let blue = palette.get(&SourcePair::new("sim1", "av2015")).unwrap();
        let sky = palette.get(&SourcePair::new("sim2", "av2017")).unwrap();
        assert_eq!(blue.to_hex(), "#0000FF");
        assert_eq!(sky.to_hex(), "#87CEFA");
    }

    #[test]
    fn test_palette_fallback_cycles() {
        let palette = PairPalette::empty();
        let pair = SourcePair::new("sim3", "av2019");
        let c0 = palette.color_for(&pair, 0);
        let c1 = palette.color_for(&pair, 1);
        let c5 = palette.color_for(&pair, 5);
        assert_ne!(c0, c1);
        assert_eq!(c0, c5);
    }

    #[test]
    fn test_palette_registered_ignores_index() {
        let palette = PairPalette::default();
        let pair = SourcePair::new("sim1", "av2015");
        assert_eq!(palette.color_for(&pair, 0), palette.color_for(&pair, 3));
    }

    #[test]
    fn test_registry_orientation() {
        let registry = FieldPairRegistry::new().with_pair("SEX", "GRADE");
        assert_eq!(
            registry.orientation("SEX", "GRADE"),
            Some(AxisOrientation::AsGiven)
        );
        assert_eq!(
            registry.orientation("GRADE", "SEX"),
            Some(AxisOrientation::Swapped)
        );
        assert_eq!(registry.orientation("SEX", "STAGE"), None);
        assert!(!registry.contains("SEX", "STAGE"));
    }
}
