//! Scales mapping data values to pixel positions.

use serde::Serialize;

/// Linear mapping from a numeric domain to a pixel range.
///
/// A degenerate domain (min == max) maps every input to the start of the
/// range rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position for a domain value. Not clamped; callers pass values
    /// inside the domain.
    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    ///
    /// `intervals` segments produce `intervals + 1` ticks.
    pub fn even_ticks(&self, intervals: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if intervals == 0 || d0 == d1 {
            return vec![d0];
        }
        let step = (d1 - d0) / intervals as f64;
        (0..=intervals).map(|i| d0 + step * i as f64).collect()
    }
}

/// Tick values for a year domain: every year divisible by ten, inclusive.
pub fn decade_ticks(year_min: i32, year_max: i32) -> Vec<i32> {
    (year_min..=year_max).filter(|y| y % 10 == 0).collect()
}

/// Banded mapping that partitions a pixel extent into equal segments,
/// one per discrete input value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandScale {
    pub count: usize,
    pub extent: f64,
}

impl BandScale {
    pub fn new(count: usize, extent: f64) -> Self {
        Self { count, extent }
    }

    pub fn band_height(&self) -> f64 {
        self.extent / self.count as f64
    }

    /// Top edge of a 0-indexed band.
    pub fn band_top(&self, index: usize) -> f64 {
        self.band_height() * index as f64
    }

    /// Vertical center of a 0-indexed band, for tick labels.
    pub fn band_center(&self, index: usize) -> f64 {
        self.band_top(index) + self.band_height() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let scale = LinearScale::new((1753.0, 2015.0), (0.0, 710.0));
        assert_eq!(scale.position(1753.0), 0.0);
        assert_eq!(scale.position(2015.0), 710.0);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let scale = LinearScale::new((1990.0, 1990.0), (0.0, 710.0));
        assert_eq!(scale.position(1990.0), 0.0);
    }

    #[test]
    fn test_decade_ticks() {
        assert_eq!(decade_ticks(1753, 1782), vec![1760, 1770, 1780]);
        assert_eq!(decade_ticks(1760, 1760), vec![1760]);
        assert!(decade_ticks(1761, 1769).is_empty());
    }

    #[test]
    fn test_bands_partition_extent() {
        let scale = BandScale::new(12, 250.0);
        // Adjacent bands meet exactly; the last band ends at the extent.
        for i in 0..11 {
            assert_eq!(
                scale.band_top(i) + scale.band_height(),
                scale.band_top(i + 1)
            );
        }
        let last_bottom = scale.band_top(11) + scale.band_height();
        assert!((last_bottom - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_ticks() {
        let scale = LinearScale::new((-3.2, 1.5), (0.0, 300.0));
        let ticks = scale.even_ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], -3.2);
        assert!((ticks[10] - 1.5).abs() < 1e-9);
    }
}
