//! Colors and the diverging z-test colormap
//!
//! Heatmap cells are colored on a fixed diverging scale, symmetric around
//! zero and clamped to the z-test domain, so the same statistic always maps
//! to the same color regardless of the data range in any one chart.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB components (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGB components
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::rgb8(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }
}

/// A colormap for mapping normalized positions to colors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colormap {
    /// Name of the colormap
    pub name: String,
    /// Color stops (positions from 0.0 to 1.0)
    stops: Vec<(f32, Color)>,
}

impl Colormap {
    /// Create a new colormap from stops (position, color pairs)
    pub fn from_stops(name: impl Into<String>, stops: Vec<(f32, Color)>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }

    /// The color stops
    pub fn stops(&self) -> &[(f32, Color)] {
        &self.stops
    }

    /// Sample the colormap at a position (0.0 to 1.0)
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);

        if self.stops.is_empty() {
            return Color::default();
        }

        if self.stops.len() == 1 {
            return self.stops[0].1;
        }

        for i in 0..self.stops.len() - 1 {
            let (t0, c0) = &self.stops[i];
            let (t1, c1) = &self.stops[i + 1];

            if t >= *t0 && t <= *t1 {
                let local_t = (t - t0) / (t1 - t0);
                return Color::lerp(c0, c1, local_t);
            }
        }

        self.stops.last().map(|(_, c)| *c).unwrap_or_default()
    }
}

/// The "picnic" diverging colormap: blue through white to red.
pub fn picnic() -> Colormap {
    Colormap::from_stops(
        "picnic",
        vec![
            (0.0, Color::rgb8(0, 0, 255)),
            (0.1, Color::rgb8(51, 153, 255)),
            (0.2, Color::rgb8(102, 204, 255)),
            (0.3, Color::rgb8(153, 204, 255)),
            (0.4, Color::rgb8(204, 204, 255)),
            (0.5, Color::rgb8(255, 255, 255)),
            (0.6, Color::rgb8(255, 204, 255)),
            (0.7, Color::rgb8(255, 153, 255)),
            (0.8, Color::rgb8(255, 102, 204)),
            (0.9, Color::rgb8(255, 102, 102)),
            (1.0, Color::rgb8(255, 0, 0)),
        ],
    )
}

/// A diverging colormap with a symmetric, clamped data domain.
///
/// Maps z-test statistics in `[-limit, limit]` onto the colormap; values
/// beyond the limit clamp to the end colors, and zero lands on the midpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DivergingScale {
    colormap: Colormap,
    limit: f64,
}

impl DivergingScale {
    /// Create a scale over `[-limit, limit]`
    pub fn new(colormap: Colormap, limit: f64) -> Self {
        Self { colormap, limit }
    }

    /// The underlying colormap
    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    /// The symmetric domain limit
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Normalize a statistic into [0, 1], clamping to the domain
    pub fn normalize(&self, z: f64) -> f32 {
        let z = z.clamp(-self.limit, self.limit);
        ((z + self.limit) / (2.0 * self.limit)) as f32
    }

    /// Color for a statistic
    pub fn sample(&self, z: f64) -> Color {
        self.colormap.sample(self.normalize(z))
    }

    /// Color for an optional statistic; structural nulls get no color and
    /// render as a gap in the scale
    pub fn sample_opt(&self, z: Option<f64>) -> Option<Color> {
        z.map(|v| self.sample(v))
    }
}
