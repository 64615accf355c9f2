use crate::render::{LinePrimitive, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{AxisStyle, ChartScene};

/// Converts a scene into backend primitives.
///
/// Each gridline becomes a full-width rule plus a label sitting in the left
/// margin just above it; each series becomes one clipped polyline.
#[must_use]
pub fn build_render_frame(scene: &ChartScene, axis_style: AxisStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(scene.viewport);
    let viewport_width = f64::from(scene.viewport.width);

    for gridline in &scene.gridlines {
        frame.lines.push(LinePrimitive::new(
            0.0,
            gridline.y,
            viewport_width,
            gridline.y,
            axis_style.rule_width,
            axis_style.rule_color,
        ));
        frame.texts.push(TextPrimitive::new(
            gridline.label.clone(),
            0.0,
            gridline.y - axis_style.label_bottom_offset_px - axis_style.label_font_size_px,
            axis_style.label_font_size_px,
            axis_style.label_color,
            TextHAlign::Left,
        ));
    }

    for series in &scene.series {
        if series.points.len() < 2 {
            continue;
        }
        frame.polylines.push(PolylinePrimitive::new(
            series.points.clone(),
            series.stroke_width,
            series.color,
            series.clip,
        ));
    }

    frame
}
