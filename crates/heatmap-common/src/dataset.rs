//! The monthly temperature-variance dataset.

use crate::error::{HeatmapError, HeatmapResult};
use serde::{Deserialize, Serialize};

/// One month of one year, as a deviation from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub year: i32,
    /// 1-indexed month (1 = January). Emitted `data-month` attributes are
    /// 0-indexed; see [`crate::month::month_name`].
    pub month: u32,
    /// Deviation in °C from the dataset's base temperature.
    pub variance: f64,
}

/// The full dataset: a base temperature plus per-month variances.
///
/// Matches the remote JSON shape
/// `{ "baseTemperature": f, "monthlyVariance": [{ year, month, variance }] }`.
///
/// Invariant: every sample's month is in 1..=12. Construct via [`Dataset::new`]
/// or [`Dataset::from_json`], which enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub samples: Vec<TemperatureSample>,
}

impl Dataset {
    /// Create a dataset, validating the month invariant.
    pub fn new(base_temperature: f64, samples: Vec<TemperatureSample>) -> HeatmapResult<Self> {
        let dataset = Self {
            base_temperature,
            samples,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse and validate the remote JSON shape.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> HeatmapResult<()> {
        for sample in &self.samples {
            if !(1..=12).contains(&sample.month) {
                return Err(HeatmapError::InvalidMonth {
                    month: sample.month,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Minimum and maximum year across all samples.
    pub fn year_range(&self) -> HeatmapResult<(i32, i32)> {
        let years = self.samples.iter().map(|s| s.year);
        match (years.clone().min(), years.max()) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(HeatmapError::EmptyDataset),
        }
    }

    /// Minimum and maximum variance across all samples.
    pub fn variance_range(&self) -> HeatmapResult<(f64, f64)> {
        if self.samples.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
        for sample in &self.samples {
            min = min.min(sample.variance);
            max = max.max(sample.variance);
        }
        Ok((min, max))
    }

    /// Absolute temperature for a sample: base temperature plus variance.
    pub fn absolute_temperature(&self, sample: &TemperatureSample) -> f64 {
        self.base_temperature + sample.variance
    }
}
