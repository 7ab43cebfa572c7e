//! The render pipeline: dataset → RenderPlan.

use crate::palette::DivergingScale;
use crate::plan::{
    AxisOrientation, AxisTicks, CellRect, LegendPlan, LegendSwatch, RenderPlan, TextAnchor,
    TextLabel, Tick,
};
use crate::scale::{decade_ticks, BandScale, LinearScale};
use heatmap_common::{
    month_name, Dataset, HeatmapError, HeatmapResult, Padding, TemperatureSample, Viewport,
};
use tracing::debug;

const TITLE: &str = "Monthly Global Land-Surface Temperature";
const MONTHS_PER_YEAR: usize = 12;

/// Vertical offsets of the title lines above the drawable area.
const TITLE_Y: f64 = -50.0;
const DESCRIPTION_Y: f64 = -25.0;

/// Legend strip geometry, below the chart.
const LEGEND_WIDTH: f64 = 300.0;
const LEGEND_SWATCH_HEIGHT: f64 = 50.0;
const LEGEND_TOP_GAP: f64 = 20.0;
const LEGEND_AXIS_OFFSET: f64 = 51.0;
const LEGEND_TICK_INTERVALS: usize = 10;
const LEGEND_CAPTION: &str = "Temperature variance (\u{2103})";
const LEGEND_CAPTION_Y: f64 = -8.0;

/// Compute the full render plan for a dataset.
///
/// Pure and all-or-nothing: an error emits no partial plan, and identical
/// inputs produce identical plans.
pub fn render(
    dataset: &Dataset,
    viewport: Viewport,
    padding: Padding,
) -> HeatmapResult<RenderPlan> {
    if dataset.is_empty() {
        return Err(HeatmapError::EmptyDataset);
    }
    let area = viewport.drawable(padding)?;

    let (year_min, year_max) = dataset.year_range()?;
    let (temp_min, temp_max) = dataset.variance_range()?;
    debug!(
        samples = dataset.len(),
        year_min, year_max, temp_min, temp_max, "computed dataset extrema"
    );

    let x_scale = LinearScale::new((year_min as f64, year_max as f64), (0.0, area.width));
    let bands = BandScale::new(MONTHS_PER_YEAR, area.height);
    let colors = DivergingScale::new(temp_min, temp_max);

    // Single-year datasets get the full draw width instead of dividing by
    // a zero year span.
    let cell_width = if year_max == year_min {
        area.width
    } else {
        area.width / (year_max - year_min) as f64
    };
    let cell_height = bands.band_height();

    let x_axis = AxisTicks {
        orientation: AxisOrientation::Bottom,
        position: area.height,
        length: area.width,
        ticks: decade_ticks(year_min, year_max)
            .into_iter()
            .map(|year| Tick {
                label: year.to_string(),
                offset: x_scale.position(year as f64),
            })
            .collect(),
    };

    let y_axis = AxisTicks {
        orientation: AxisOrientation::Left,
        position: 0.0,
        length: area.height,
        ticks: (1..=MONTHS_PER_YEAR as u32)
            .map(|month| Tick {
                // Construction validated months, so the name exists.
                label: month_name(month).unwrap_or_default().to_string(),
                offset: bands.band_center((month - 1) as usize),
            })
            .collect(),
    };

    let cells = dataset
        .samples
        .iter()
        .map(|sample| {
            let band = (sample.month - 1) as usize;
            CellRect {
                x: x_scale.position(sample.year as f64),
                y: bands.band_top(band),
                width: cell_width,
                height: cell_height,
                fill: colors.color(sample.variance),
                data_month: sample.month - 1,
                data_year: sample.year,
                data_temp: sample.variance,
            }
        })
        .collect();

    let legend = build_legend(&colors, temp_min, temp_max, area.height);

    Ok(RenderPlan {
        viewport,
        padding,
        title: TextLabel {
            text: TITLE.to_string(),
            x: area.width / 2.0,
            y: TITLE_Y,
            anchor: TextAnchor::Middle,
        },
        description: TextLabel {
            text: format!(
                "{} - {}: base temperature {}\u{2103}",
                year_min, year_max, dataset.base_temperature
            ),
            x: area.width / 2.0,
            y: DESCRIPTION_Y,
            anchor: TextAnchor::Middle,
        },
        x_axis,
        y_axis,
        cells,
        legend,
    })
}

fn build_legend(
    colors: &DivergingScale,
    temp_min: f64,
    temp_max: f64,
    draw_height: f64,
) -> LegendPlan {
    let swatches = colors.swatches();
    let swatch_width = LEGEND_WIDTH / swatches.len() as f64;
    let legend_scale = LinearScale::new((temp_min, temp_max), (0.0, LEGEND_WIDTH));

    LegendPlan {
        x: 0.0,
        y: draw_height + LEGEND_TOP_GAP,
        width: LEGEND_WIDTH,
        swatch_height: LEGEND_SWATCH_HEIGHT,
        // Coolest swatch leftmost, matching the axis running min → max.
        swatches: swatches
            .iter()
            .enumerate()
            .map(|(i, &color)| LegendSwatch {
                x: swatch_width * i as f64,
                width: swatch_width,
                color,
            })
            .collect(),
        axis: AxisTicks {
            orientation: AxisOrientation::Bottom,
            position: LEGEND_AXIS_OFFSET,
            length: LEGEND_WIDTH,
            ticks: legend_scale
                .even_ticks(LEGEND_TICK_INTERVALS)
                .into_iter()
                .map(|value| Tick {
                    label: format!("{:.1}", value),
                    offset: legend_scale.position(value),
                })
                .collect(),
        },
        caption: TextLabel {
            text: LEGEND_CAPTION.to_string(),
            x: 0.0,
            y: LEGEND_CAPTION_Y,
            anchor: TextAnchor::Start,
        },
    }
}

/// Tooltip content for one hovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub month: &'static str,
    pub year: i32,
    /// Absolute temperature: base + variance.
    pub temperature: f64,
    pub variance: f64,
}

impl Tooltip {
    /// Display text with all numbers rounded to one decimal place.
    pub fn text(&self) -> String {
        format!(
            "{} {}: {:.1}\u{2103} ({:+.1}\u{2103})",
            self.month, self.year, self.temperature, self.variance
        )
    }
}

/// Tooltip lookup for a hovered sample. Stateless and independent of the
/// render pipeline.
pub fn tooltip(dataset: &Dataset, sample: &TemperatureSample) -> HeatmapResult<Tooltip> {
    let month = month_name(sample.month).ok_or(HeatmapError::InvalidMonth {
        month: sample.month,
    })?;
    Ok(Tooltip {
        month,
        year: sample.year,
        temperature: dataset.absolute_temperature(sample),
        variance: sample.variance,
    })
}
