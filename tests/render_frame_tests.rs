use livechart_rs::api::{AxisStyle, ChartView, ChartViewConfig, build_render_frame};
use livechart_rs::core::{Sample, Viewport};
use livechart_rs::render::{
    ClipRect, Color, NullRenderer, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
};

fn active_chart() -> ChartView<NullRenderer> {
    let mut chart =
        ChartView::new(NullRenderer::default(), ChartViewConfig::default()).expect("chart init");
    let mut samples = vec![Sample::zero(); 35];
    samples.push(Sample::new(50.0, 120.0, 10.0).expect("valid sample"));
    chart.update_samples(&samples);
    chart
}

#[test]
fn gridlines_become_full_width_rules_with_labels_above() {
    let chart = active_chart();
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.lines.len(), 5);
    let first = frame.lines[0];
    assert_eq!((first.x1, first.x2), (0.0, 280.0));
    assert_eq!((first.y1, first.y2), (50.0, 50.0));
    assert_eq!(first.color, Color::rgb8(0xed, 0xeb, 0xf2));

    let label = &frame.texts[0];
    assert_eq!(label.text, "96");
    assert_eq!(label.x, 0.0);
    assert_eq!(label.y, 50.0 - 7.0 - 12.0);
    assert_eq!(label.h_align, TextHAlign::Left);
}

#[test]
fn series_become_clipped_polylines_in_channel_order() {
    let chart = active_chart();
    let frame = chart.build_render_frame().expect("frame");

    let colors: Vec<Color> = frame.polylines.iter().map(|line| line.color).collect();
    assert_eq!(colors, vec![Color::BLUE, Color::RED, Color::GREEN]);
    for polyline in &frame.polylines {
        assert_eq!(polyline.clip, ClipRect::new(30.0, 0.0, 250.0, 250.0));
        assert_eq!(polyline.points.len(), 36);
        assert_eq!(polyline.stroke_width, 1.0);
        assert!(polyline.clip.contains_x(polyline.points[1].0));
        assert!(!polyline.clip.contains_x(polyline.points[35].0));
    }
}

#[test]
fn custom_axis_style_is_applied() {
    let chart = active_chart();
    let style = AxisStyle {
        label_font_size_px: 10.0,
        label_bottom_offset_px: 2.0,
        ..AxisStyle::default()
    };
    let frame = build_render_frame(&chart.build_scene(), style);
    assert_eq!(frame.texts[1].y, 100.0 - 2.0 - 10.0);
    assert_eq!(frame.texts[1].font_size_px, 10.0);
}

#[test]
fn null_renderer_rejects_invalid_geometry() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_polyline(PolylinePrimitive::new(
        vec![(0.0, 0.0), (f64::NAN, 1.0)],
        1.0,
        Color::BLUE,
        ClipRect::new(0.0, 0.0, 100.0, 100.0),
    ));

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[cfg(feature = "cairo-backend")]
#[test]
fn cairo_renderer_draws_every_primitive() {
    use livechart_rs::render::CairoRenderer;

    let frame = active_chart().build_render_frame().expect("frame");
    let mut renderer = CairoRenderer::new(280, 250).expect("cairo renderer");
    renderer.render(&frame).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.polylines_drawn, 3);
    assert_eq!(stats.texts_drawn, 5);
}

#[cfg(feature = "cairo-backend")]
#[test]
fn cairo_series_stroke_stays_inside_plot_clip() {
    use std::time::Duration;

    use livechart_rs::render::CairoRenderer;

    let renderer = CairoRenderer::new(280, 250).expect("cairo renderer");
    let mut chart = ChartView::new(renderer, ChartViewConfig::default()).expect("chart init");
    chart.update_samples(&vec![Sample::new(50.0, 50.0, 50.0).expect("valid sample"); 36]);
    chart.tick(Duration::from_millis(500));
    chart.render().expect("render");

    // settled lines start one step left of the plot, at x ~= 22.6, y = 125
    let renderer = chart.into_renderer();
    let mut surface = renderer.surface().clone();
    drop(renderer);
    surface.flush();
    let stride = usize::try_from(surface.stride()).expect("stride");
    let data = surface.data().expect("exclusive surface data");
    let pixel = |x: usize, y: usize| {
        let offset = y * stride + x * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    };
    let is_white = |rgba: [u8; 4]| rgba.iter().all(|channel| *channel == 255);

    let stroked = [pixel(150, 124), pixel(150, 125)];
    assert!(stroked.iter().any(|rgba| !is_white(*rgba)));

    assert!(is_white(pixel(25, 124)));
    assert!(is_white(pixel(25, 125)));
}
