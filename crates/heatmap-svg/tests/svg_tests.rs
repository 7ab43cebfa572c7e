//! Tests for the SVG backend's stable element contract.

use heatmap_common::{Dataset, Padding, TemperatureSample, Viewport};
use heatmap_render::render;
use heatmap_svg::write_svg;

fn sample(year: i32, month: u32, variance: f64) -> TemperatureSample {
    TemperatureSample {
        year,
        month,
        variance,
    }
}

fn rendered_svg() -> String {
    let dataset =
        Dataset::new(8.66, vec![sample(1753, 1, -3.2), sample(2015, 12, 1.5)]).unwrap();
    let plan = render(&dataset, Viewport::new(800.0, 500.0), Padding::default()).unwrap();
    write_svg(&plan).unwrap()
}

#[test]
fn test_stable_identifiers_present() {
    let svg = rendered_svg();
    assert!(svg.contains(r#"id="title""#));
    assert!(svg.contains(r#"id="description""#));
    assert!(svg.contains(r#"id="x-axis""#));
    assert!(svg.contains(r#"id="y-axis""#));
    assert!(svg.contains(r#"id="legend""#));
    assert!(svg.contains(r#"id="legend-axis""#));
    assert!(svg.contains(r#"id="legend-caption""#));
}

#[test]
fn test_cells_carry_data_attributes() {
    let svg = rendered_svg();
    assert_eq!(svg.matches(r#"class="cell""#).count(), 2);
    // First sample: month 1 emitted 0-indexed.
    assert!(svg.contains(r#"data-month="0" data-year="1753" data-temp="-3.2""#));
    assert!(svg.contains(r#"data-month="11" data-year="2015" data-temp="1.5""#));
}

#[test]
fn test_legend_swatches_and_document_shape() {
    let svg = rendered_svg();
    assert_eq!(svg.matches(r#"class="legend""#).count(), 10);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="500">"#));
    assert!(svg.trim_end().ends_with("</svg>"));
    // Drawable group translated by the padding.
    assert!(svg.contains(r#"<g transform="translate(80,100)">"#));
}

#[test]
fn test_title_and_axis_labels() {
    let svg = rendered_svg();
    assert!(svg.contains(">Monthly Global Land-Surface Temperature</text>"));
    assert!(svg.contains(">1753 - 2015: base temperature 8.66\u{2103}</text>"));
    assert!(svg.contains(">January</text>"));
    assert!(svg.contains(">December</text>"));
    // Decade ticks on the x axis.
    assert!(svg.contains(">1760</text>"));
    assert!(svg.contains(">2010</text>"));
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(rendered_svg(), rendered_svg());
}
