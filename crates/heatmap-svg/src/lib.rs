//! SVG serialization of a [`RenderPlan`].
//!
//! Hand-writes the element tree rather than pulling in a scene-graph crate;
//! the artifact is small and the element contract is fixed. Emitted
//! identifiers are stable for automated testing:
//! `title`, `description`, `x-axis`, `y-axis`, `.cell` rects with
//! `data-month`/`data-year`/`data-temp`, and a `legend` group with its own
//! axis.

use std::fmt::Write;

use heatmap_common::HeatmapResult;
use heatmap_render::{AxisOrientation, AxisTicks, RenderPlan, TextAnchor, TextLabel};
use tracing::debug;

const TICK_SIZE: f64 = 6.0;
const TICK_LABEL_GAP: f64 = 9.0;

/// Serialize a render plan to a complete SVG document.
///
/// Deterministic: identical plans produce byte-identical output.
pub fn write_svg(plan: &RenderPlan) -> HeatmapResult<String> {
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        num(plan.viewport.width),
        num(plan.viewport.height)
    )?;
    writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        num(plan.padding.left),
        num(plan.padding.top)
    )?;

    write_label(&mut out, "title", &plan.title, Some(20))?;
    write_label(&mut out, "description", &plan.description, None)?;

    write_axis(&mut out, "x-axis", &plan.x_axis)?;
    write_axis(&mut out, "y-axis", &plan.y_axis)?;

    for cell in &plan.cells {
        writeln!(
            out,
            r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}" data-month="{}" data-year="{}" data-temp="{}"/>"#,
            num(cell.x),
            num(cell.y),
            num(cell.width),
            num(cell.height),
            cell.fill.to_hex(),
            cell.data_month,
            cell.data_year,
            cell.data_temp
        )?;
    }

    let legend = &plan.legend;
    writeln!(
        out,
        r#"<g id="legend" transform="translate({},{})">"#,
        num(legend.x),
        num(legend.y)
    )?;
    for swatch in &legend.swatches {
        writeln!(
            out,
            r#"<rect class="legend" x="{}" y="0" width="{}" height="{}" fill="{}"/>"#,
            num(swatch.x),
            num(swatch.width),
            num(legend.swatch_height),
            swatch.color.to_hex()
        )?;
    }
    write_axis(&mut out, "legend-axis", &legend.axis)?;
    write_label(&mut out, "legend-caption", &legend.caption, None)?;
    writeln!(out, "</g>")?;

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;

    debug!(bytes = out.len(), cells = plan.cells.len(), "wrote svg");
    Ok(out)
}

fn write_label(
    out: &mut String,
    id: &str,
    label: &TextLabel,
    font_size: Option<u32>,
) -> HeatmapResult<()> {
    let anchor = match label.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    write!(
        out,
        r#"<text id="{}" x="{}" y="{}" text-anchor="{}""#,
        id,
        num(label.x),
        num(label.y),
        anchor
    )?;
    if let Some(size) = font_size {
        write!(out, r#" font-size="{}""#, size)?;
    }
    writeln!(out, ">{}</text>", escape(&label.text))?;
    Ok(())
}

fn write_axis(out: &mut String, id: &str, axis: &AxisTicks) -> HeatmapResult<()> {
    writeln!(out, r#"<g id="{}">"#, id)?;
    match axis.orientation {
        AxisOrientation::Bottom => {
            let y = axis.position;
            writeln!(
                out,
                r#"<line x1="0" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                num(y),
                num(axis.length),
                num(y)
            )?;
            for tick in &axis.ticks {
                writeln!(
                    out,
                    r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="black"/>"#,
                    num(y),
                    num(y + TICK_SIZE),
                    x = num(tick.offset)
                )?;
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
                    num(tick.offset),
                    num(y + TICK_LABEL_GAP),
                    escape(&tick.label)
                )?;
            }
        }
        AxisOrientation::Left => {
            let x = axis.position;
            writeln!(
                out,
                r#"<line x1="{}" y1="0" x2="{}" y2="{}" stroke="black"/>"#,
                num(x),
                num(x),
                num(axis.length)
            )?;
            for tick in &axis.ticks {
                writeln!(
                    out,
                    r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="black"/>"#,
                    num(x - TICK_SIZE),
                    num(x),
                    y = num(tick.offset)
                )?;
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                    num(x - TICK_LABEL_GAP),
                    num(tick.offset),
                    escape(&tick.label)
                )?;
            }
        }
    }
    writeln!(out, "</g>")?;
    Ok(())
}

/// Compact decimal formatting for coordinates: at most two decimal places,
/// trailing zeros trimmed.
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape text content and attribute values for XML.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_trims() {
        assert_eq!(num(710.0), "710");
        assert_eq!(num(20.833333), "20.83");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(-25.0), "-25");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
