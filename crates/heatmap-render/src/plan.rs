//! The declarative render plan consumed by backends.
//!
//! All coordinates are in the inner drawable space: the origin sits at
//! `(padding.left, padding.top)` of the viewport, matching the translated
//! group the original chart drew into. Backends apply the translation.

use crate::palette::Color;
use heatmap_common::{Padding, Viewport};
use serde::Serialize;

/// A positioned text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One axis tick: a label at a pixel offset along the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub label: String,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// A tick set for one axis, positioned relative to the drawable origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTicks {
    pub orientation: AxisOrientation,
    /// Offset of the axis line perpendicular to its ticks (e.g. the y of a
    /// bottom axis).
    pub position: f64,
    /// Extent of the axis line along its direction.
    pub length: f64,
    pub ticks: Vec<Tick>,
}

/// One heatmap cell: geometry, fill, and the data attributes of the
/// external contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    /// 0-indexed month, per the original attribute contract (the model
    /// month is 1-indexed).
    pub data_month: u32,
    pub data_year: i32,
    pub data_temp: f64,
}

impl CellRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// One colored segment of the legend strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub x: f64,
    pub width: f64,
    pub color: Color,
}

/// The legend: a swatch strip with its own axis, positioned below the
/// chart. `x`/`y` locate the legend group in drawable space; swatch and
/// axis coordinates are relative to the group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendPlan {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub swatch_height: f64,
    pub swatches: Vec<LegendSwatch>,
    pub axis: AxisTicks,
    pub caption: TextLabel,
}

/// The complete, immutable output of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub viewport: Viewport,
    pub padding: Padding,
    pub title: TextLabel,
    pub description: TextLabel,
    pub x_axis: AxisTicks,
    pub y_axis: AxisTicks,
    pub cells: Vec<CellRect>,
    pub legend: LegendPlan,
}

impl RenderPlan {
    /// Hit-test a pointer position (in drawable space) against the cells.
    ///
    /// Hover handlers pass coordinates explicitly; there is no ambient
    /// event state.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&CellRect> {
        self.cells.iter().find(|cell| cell.contains(x, y))
    }
}
