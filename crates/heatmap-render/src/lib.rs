//! Heatmap rendering for monthly temperature-variance data.
//!
//! Turns a [`heatmap_common::Dataset`] into a declarative [`RenderPlan`]:
//! - Linear year scale with decade ticks
//! - 12-band month scale with full month names
//! - Reversed RdYlBu diverging color scale
//! - Legend strip with its own axis
//!
//! The pipeline is pure and synchronous; backends consume the plan.

pub mod heatmap;
pub mod palette;
pub mod plan;
pub mod scale;

pub use heatmap::{render, tooltip, Tooltip};
pub use palette::{Color, DivergingScale, RDYLBU_10};
pub use plan::{
    AxisOrientation, AxisTicks, CellRect, LegendPlan, LegendSwatch, RenderPlan, TextAnchor,
    TextLabel, Tick,
};
pub use scale::{BandScale, LinearScale};
