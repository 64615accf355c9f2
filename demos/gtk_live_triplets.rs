//! Live triplet chart demo.
//!
//! A 36-sample window starts full of zeros and receives one synthetic
//! `(x, y, z)` sample every 500ms. The chart uses a range floor of 100, so
//! the axis only grows when a reading goes above it.
//!
//! Run with: `cargo run --example gtk_live_triplets --features desktop`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use livechart_rs::ChartViewConfig;
use livechart_rs::core::{DEFAULT_WINDOW_CAPACITY, Sample, SampleWindow, Viewport};
use livechart_rs::platform_gtk::GtkChartAdapter;
use livechart_rs::telemetry::init_default_tracing;

const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Deterministic stand-in for a sensor: three phase-shifted waves with a
/// periodic spike on `y` so the axis has something to rescale for.
struct TripletSignal {
    step: u64,
}

impl TripletSignal {
    fn next_sample(&mut self) -> Sample {
        self.step += 1;
        let t = self.step as f64;
        let wave = |period: f64, phase: f64| 50.0 + 45.0 * (t / period + phase).sin();
        let spike = if self.step % 17 == 0 { 60.0 } else { 0.0 };

        Sample::new(wave(3.0, 0.0), wave(5.0, 1.3) + spike, wave(7.0, 2.6))
            .unwrap_or_default()
    }
}

fn main() -> glib::ExitCode {
    let _ = init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.livechart.triplets")
        .build();

    app.connect_activate(|app| {
        let config = ChartViewConfig::new(Viewport::new(360, 300)).with_range_floor(100.0);
        let adapter = match GtkChartAdapter::new(config) {
            Ok(adapter) => Rc::new(adapter),
            Err(err) => {
                eprintln!("failed to create chart: {err}");
                return;
            }
        };

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("Live triplets")
            .default_width(360)
            .default_height(300)
            .child(adapter.widget())
            .build();

        let samples = match SampleWindow::prefilled(DEFAULT_WINDOW_CAPACITY, Sample::zero()) {
            Ok(samples) => Rc::new(RefCell::new(samples)),
            Err(err) => {
                eprintln!("failed to create sample window: {err}");
                return;
            }
        };
        adapter.update_from_window(&samples.borrow());

        let mut signal = TripletSignal { step: 0 };
        let timer_adapter = Rc::clone(&adapter);
        glib::timeout_add_local(SAMPLE_INTERVAL, move || {
            let mut samples = samples.borrow_mut();
            samples.append(signal.next_sample());
            timer_adapter.update_from_window(&samples);
            glib::ControlFlow::Continue
        });

        window.present();
    });

    app.run()
}
