//! Viewport and padding geometry for chart layout.

use crate::error::{HeatmapError, HeatmapResult};
use serde::{Deserialize, Serialize};

/// Outer pixel dimensions of the rendering target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inner drawable area after subtracting padding.
    ///
    /// Returns `DegenerateViewport` when either dimension is non-positive.
    pub fn drawable(&self, padding: Padding) -> HeatmapResult<DrawArea> {
        let width = self.width - padding.left - padding.right;
        let height = self.height - padding.top - padding.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(HeatmapError::DegenerateViewport { width, height });
        }
        Ok(DrawArea { width, height })
    }
}

/// Space reserved around the drawable area for titles, axes and legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Padding {
    /// Margins used by the original chart: titles above, legend below,
    /// month labels on the left.
    fn default() -> Self {
        Self {
            top: 100.0,
            right: 10.0,
            bottom: 150.0,
            left: 80.0,
        }
    }
}

/// Inner drawable area in pixels, always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawArea {
    pub width: f64,
    pub height: f64,
}
