//! Error types for the temperature-heatmap crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap rendering.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Dataset Errors ===
    #[error("Dataset contains no samples")]
    EmptyDataset,

    #[error("Sample month {month} is outside 1..=12")]
    InvalidMonth { month: u32 },

    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    // === Rendering Errors ===
    #[error("Drawable area is degenerate: {width}x{height} after padding")]
    DegenerateViewport { width: f64, height: f64 },

    // === Backend Errors ===
    #[error("Failed to write SVG output: {0}")]
    SvgWrite(#[from] std::fmt::Error),
}

impl HeatmapError {
    /// Whether the error is a caller-input problem (vs an internal one).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HeatmapError::EmptyDataset
                | HeatmapError::InvalidMonth { .. }
                | HeatmapError::DatasetParse(_)
                | HeatmapError::DegenerateViewport { .. }
        )
    }
}
