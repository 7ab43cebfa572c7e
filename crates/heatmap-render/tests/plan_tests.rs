//! Tests for the RenderPlan contract: data attributes and hit-testing.

use heatmap_common::{Dataset, Padding, TemperatureSample, Viewport};
use heatmap_render::{render, tooltip};

fn dataset() -> Dataset {
    let samples = (1..=12)
        .map(|month| TemperatureSample {
            year: 1950,
            month,
            variance: month as f64 / 10.0 - 0.6,
        })
        .collect();
    Dataset::new(8.66, samples).unwrap()
}

#[test]
fn test_data_month_is_zero_indexed() {
    // The model month is 1-indexed; the emitted attribute is 0-indexed.
    // This off-by-one is a literal contract inherited from the original
    // chart, not a bug.
    let plan = render(&dataset(), Viewport::new(800.0, 500.0), Padding::default()).unwrap();

    for (cell, sample) in plan.cells.iter().zip(&dataset().samples) {
        assert_eq!(cell.data_month, sample.month - 1);
        assert_eq!(cell.data_year, sample.year);
        assert_eq!(cell.data_temp, sample.variance);
    }
    assert_eq!(plan.cells[0].data_month, 0);
    assert_eq!(plan.cells[11].data_month, 11);
}

#[test]
fn test_cell_at_finds_hovered_cell() {
    let data = dataset();
    let plan = render(&data, Viewport::new(800.0, 500.0), Padding::default()).unwrap();

    // Point inside band 3 (April, month 4).
    let band_height = 250.0 / 12.0;
    let hit = plan.cell_at(100.0, band_height * 3.0 + 1.0).unwrap();
    assert_eq!(hit.data_month, 3);

    // The hover lookup feeds the tooltip without touching render state.
    let sample = data
        .samples
        .iter()
        .find(|s| s.month - 1 == hit.data_month)
        .unwrap();
    let tip = tooltip(&data, sample).unwrap();
    assert_eq!(tip.month, "April");
}

#[test]
fn test_cell_at_misses_outside() {
    let plan = render(&dataset(), Viewport::new(800.0, 500.0), Padding::default()).unwrap();
    assert!(plan.cell_at(-1.0, 10.0).is_none());
    assert!(plan.cell_at(10.0, 251.0).is_none());
}

#[test]
fn test_plan_serializes() {
    // Backends in other processes consume the plan as JSON.
    let plan = render(&dataset(), Viewport::new(800.0, 500.0), Padding::default()).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains("\"cells\""));
    assert!(json.contains("\"legend\""));
}
