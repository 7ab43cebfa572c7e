//! Diverging color palette and the variance → color scale.

use serde::Serialize;

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#a50026`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// ColorBrewer RdYlBu 10-class scheme, warm to cool.
///
/// Stored warm-first as published; [`DivergingScale`] reverses it so the
/// warm end encodes high (positive) variance.
pub const RDYLBU_10: [Color; 10] = [
    Color::new(0xa5, 0x00, 0x26),
    Color::new(0xd7, 0x30, 0x27),
    Color::new(0xf4, 0x6d, 0x43),
    Color::new(0xfd, 0xae, 0x61),
    Color::new(0xfe, 0xe0, 0x90),
    Color::new(0xe0, 0xf3, 0xf8),
    Color::new(0xab, 0xd9, 0xe9),
    Color::new(0x74, 0xad, 0xd1),
    Color::new(0x45, 0x75, 0xb4),
    Color::new(0x31, 0x36, 0x95),
];

/// Quantized diverging color scale over `[min, max]`.
///
/// Canonical direction: the domain runs min → max onto the reversed RdYlBu
/// swatches, so `color(min)` is the coolest swatch (dark blue) and
/// `color(max)` the warmest (dark red). A flat domain (min == max) maps
/// everything to the midpoint swatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergingScale {
    pub domain: (f64, f64),
    swatches: Vec<Color>,
}

impl DivergingScale {
    pub fn new(min: f64, max: f64) -> Self {
        let mut swatches: Vec<Color> = RDYLBU_10.to_vec();
        swatches.reverse();
        Self {
            domain: (min, max),
            swatches,
        }
    }

    /// Swatches from the cool end to the warm end.
    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Color for a variance value. Values outside the domain clamp to the
    /// end swatches.
    pub fn color(&self, value: f64) -> Color {
        let (min, max) = self.domain;
        let n = self.swatches.len();
        let span = max - min;
        if span.abs() < f64::EPSILON {
            return self.swatches[n / 2];
        }
        let t = ((value - min) / span).clamp(0.0, 1.0);
        let index = ((t * n as f64) as usize).min(n - 1);
        self.swatches[index]
    }
}
