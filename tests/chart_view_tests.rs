use std::time::Duration;

use approx::assert_relative_eq;
use livechart_rs::ChartError;
use livechart_rs::api::{ChartView, ChartViewConfig};
use livechart_rs::core::{Channel, Sample, Viewport};
use livechart_rs::render::NullRenderer;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn new_chart() -> ChartView<NullRenderer> {
    ChartView::new(NullRenderer::default(), ChartViewConfig::default()).expect("chart init")
}

fn window_with_last(len: usize, last: Sample) -> Vec<Sample> {
    let mut samples = vec![Sample::zero(); len - 1];
    samples.push(last);
    samples
}

fn scenario_window() -> Vec<Sample> {
    window_with_last(36, Sample::new(50.0, 120.0, 10.0).expect("valid sample"))
}

#[test]
fn fewer_than_four_samples_draw_nothing() {
    let mut chart = new_chart();
    chart.update_samples(&vec![Sample::zero(); 3]);

    assert!(!chart.is_active());
    assert_eq!(chart.range(), None);
    assert!(chart.gridlines().is_empty());
    assert!(chart.series_path(Channel::X).is_none());
    assert!(!chart.is_animating());
    assert!(chart.build_render_frame().expect("frame").is_empty());

    chart.render().expect("render");
    assert_eq!(chart.renderer().frames_rendered, 1);
    assert_eq!(chart.renderer().last_polyline_count, 0);
    assert_eq!(chart.renderer().last_line_count, 0);
}

#[test]
fn four_samples_activate_the_chart() {
    let mut chart = new_chart();
    chart.update_samples(&vec![Sample::zero(); 4]);

    assert!(chart.is_active());
    let path = chart.series_path(Channel::Z).expect("path");
    assert_eq!(path.step_width, 125.0);
    assert_eq!(path.line_width, 375.0);
    assert_eq!(chart.offset(Channel::Z), -125.0);
    assert_eq!(chart.range().expect("range").max(), 100.0);
}

#[test]
fn latest_sample_drives_range_paths_and_gridlines() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());

    assert_eq!(chart.range().expect("range").max(), 120.0);
    let labels: Vec<&str> = chart.gridlines().iter().map(|line| line.label.as_str()).collect();
    assert_eq!(labels, vec!["96", "72", "48", "24", "0"]);

    let step = 250.0 / 34.0;
    for channel in Channel::ALL {
        let path = chart.series_path(channel).expect("path");
        assert_relative_eq!(path.step_width, step);
        assert_relative_eq!(path.line_width, step * 35.0);
        assert_eq!(path.len(), 36);
        assert_eq!(path.ys[0], 250.0);
    }
    assert_eq!(chart.series_path(Channel::X).expect("x").ys[35], 146.0);
    assert_eq!(chart.series_path(Channel::Y).expect("y").ys[35], 0.0);
    assert_eq!(chart.series_path(Channel::Z).expect("z").ys[35], 229.0);
}

#[test]
fn scene_starts_one_step_back_and_slides_into_place() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    let step = 250.0 / 34.0;

    let scene = chart.build_scene();
    assert_eq!(scene.series.len(), 3);
    let y_series = &scene.series[1];
    assert_eq!(y_series.channel, Channel::Y);
    assert_relative_eq!(y_series.offset, -step);
    assert_relative_eq!(y_series.points[0].0, 30.0, epsilon = 1e-9);

    assert!(chart.tick(ms(250)));
    let halfway = chart.build_scene();
    assert_relative_eq!(halfway.series[1].offset, -step / 2.0, epsilon = 1e-9);

    assert!(!chart.tick(ms(250)));
    let settled = chart.build_scene();
    let points = &settled.series[1].points;
    assert_eq!(settled.series[1].offset, 0.0);
    assert_relative_eq!(points[0].0, 30.0 - step, epsilon = 1e-9);
    assert_relative_eq!(points[35].0, 280.0, epsilon = 1e-9);
}

#[test]
fn new_snapshot_restarts_the_scroll_sequence() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    chart.tick(ms(300));
    let first = chart.animator(Channel::X).expect("animator").active_sequence();

    chart.update_samples(&scenario_window());
    let animator = chart.animator(Channel::X).expect("animator");
    assert_ne!(animator.active_sequence(), first);
    assert_eq!(animator.sequences_started(), 2);
    assert_relative_eq!(chart.offset(Channel::X), -250.0 / 34.0);
}

#[test]
fn resize_mid_animation_uses_the_new_step() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    chart.tick(ms(250));

    assert!(chart.set_layout(Viewport::new(380, 250)));
    let step = 350.0 / 34.0;
    assert_relative_eq!(chart.series_path(Channel::Y).expect("path").step_width, step);
    assert_relative_eq!(chart.offset(Channel::Y), -step);
    assert_eq!(chart.plot_size().width, 350.0);

    chart.tick(ms(100));
    let offset = chart.offset(Channel::Y);
    assert!(!chart.set_layout(Viewport::new(380, 250)));
    assert_eq!(chart.offset(Channel::Y), offset);
}

#[test]
fn dropping_below_minimum_resets_animations() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    chart.tick(ms(100));
    assert!(chart.is_animating());

    chart.update_samples(&vec![Sample::zero(); 2]);
    assert!(!chart.is_active());
    assert!(!chart.is_animating());
    assert!(chart.build_scene().is_empty());

    chart.tick(Duration::from_secs(5));
    for channel in Channel::ALL {
        assert_eq!(chart.offset(channel), 0.0);
    }
    assert!(chart.snapshot().offsets.values().all(|offset| *offset == 0.0));
}

#[test]
fn tick_reports_settled_until_the_next_update() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());

    let mut frames = 0;
    while chart.tick(ms(16)) {
        frames += 1;
    }
    assert_eq!(frames, 31);
    assert!(!chart.is_animating());
    assert!(!chart.tick(ms(16)));

    chart.update_samples(&scenario_window());
    assert!(chart.is_animating());
    assert!(chart.tick(ms(16)));

    assert!(chart.set_layout(Viewport::new(300, 250)));
    assert!(chart.is_animating());
}

#[test]
fn shutdown_stops_all_series() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    chart.shutdown();

    assert!(!chart.is_animating());
    assert!(!chart.tick(ms(16)));
    assert!(chart.is_active());
}

#[test]
fn oversized_snapshot_keeps_the_most_recent_samples() {
    let mut chart = new_chart();
    let samples: Vec<Sample> = (0..50)
        .map(|i| Sample::new(f64::from(i), 0.0, 0.0).expect("valid sample"))
        .collect();
    chart.update_samples(&samples);

    assert_eq!(chart.sample_count(), 36);
    assert_eq!(chart.samples()[0].x(), 14.0);
    assert_eq!(chart.samples()[35].x(), 49.0);
}

#[test]
fn floor_override_replaces_config_floor_until_changed() {
    let mut chart = new_chart();
    chart
        .update_samples_with_floor(&scenario_window(), 200.0)
        .expect("valid floor");
    assert_eq!(chart.range_floor(), 200.0);
    assert_eq!(chart.range().expect("range").max(), 200.0);

    let err = chart
        .update_samples_with_floor(&scenario_window(), -1.0)
        .expect_err("negative floor");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(chart.range_floor(), 200.0);

    chart.update_samples(&scenario_window());
    assert_eq!(chart.range().expect("range").max(), 200.0);
}

#[test]
fn zero_area_layout_skips_rendering() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    assert!(chart.set_layout(Viewport::new(0, 250)));

    assert!(chart.build_render_frame().expect("frame").is_empty());
    chart.render().expect("render");
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn gridline_labels_are_cached_across_updates() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    chart.update_samples(&scenario_window());

    let stats = chart.label_cache_stats();
    assert_eq!(stats.misses, 5);
    assert_eq!(stats.hits, 5);
    assert_eq!(stats.size, 5);
}

#[test]
fn snapshot_json_describes_the_current_frame() {
    let mut chart = new_chart();
    chart.update_samples(&scenario_window());
    chart.tick(ms(500));

    let snapshot = chart.snapshot();
    assert!(snapshot.active);
    assert_eq!(snapshot.sample_count, 36);
    assert_eq!(snapshot.offsets.get(&Channel::Z), Some(&0.0));
    assert_eq!(snapshot.scene.gridlines.len(), 5);

    let json = chart.snapshot_json_pretty().expect("snapshot json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["sample_count"], 36);
    assert_eq!(value["active"], true);
    assert_eq!(value["scene"]["series"].as_array().map(Vec::len), Some(3));
}
