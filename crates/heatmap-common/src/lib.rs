//! Common types shared across the temperature-heatmap crates.

pub mod dataset;
pub mod error;
pub mod layout;
pub mod month;

pub use dataset::{Dataset, TemperatureSample};
pub use error::{HeatmapError, HeatmapResult};
pub use layout::{Padding, Viewport};
pub use month::{month_name, MONTH_NAMES};
