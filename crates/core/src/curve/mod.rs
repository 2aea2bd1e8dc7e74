use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A single sampled position on the input curve. Immutable once sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Interprets the point as the complex sample `x + iy`.
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    pub fn from_complex(value: Complex64) -> Self {
        Self {
            x: value.re,
            y: value.im,
        }
    }
}

/// Parses a sampled point sequence from its JSON interchange form.
///
/// The capture front end is a separate program; it hands the finished curve
/// over as a JSON array of `{x, y}` objects and this is the only ingestion
/// path the core offers.
pub fn parse_points_json(text: &str) -> Result<Vec<Point>> {
    Ok(serde_json::from_str(text)?)
}

/// Renders a point sequence in the form accepted by [`parse_points_json`].
pub fn points_to_json(points: &[Point]) -> Result<String> {
    Ok(serde_json::to_string(points)?)
}
