use std::time::Duration;

use livechart_rs::api::{ChartView, ChartViewConfig};
use livechart_rs::core::{Channel, Sample, SampleWindow, Viewport};
use livechart_rs::render::NullRenderer;

#[test]
fn chart_smoke_flow() {
    let renderer = NullRenderer::default();
    let config = ChartViewConfig::new(Viewport::new(330, 200)).with_range_floor(100.0);
    let mut chart = ChartView::new(renderer, config).expect("chart init");

    let mut window = SampleWindow::prefilled(36, Sample::zero()).expect("window");
    window.append(Sample::new(10.0, 20.0, 30.0).expect("valid sample"));
    chart.update_from_window(&window);

    assert!(chart.is_active());
    assert_eq!(chart.sample_count(), 36);
    assert_eq!(chart.range().expect("range").max(), 100.0);
    assert_eq!(chart.offset(Channel::X), -chart.series_path(Channel::X).expect("path").step_width);

    chart.render().expect("render should succeed");
    while chart.tick(Duration::from_millis(16)) {}
    assert_eq!(chart.offset(Channel::Y), 0.0);
    chart.render().expect("render should succeed");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_polyline_count, 3);
    assert_eq!(renderer.last_text_count, 5);
}
