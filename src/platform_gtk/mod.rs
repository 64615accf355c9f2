use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use tracing::{debug, trace, warn};

use crate::api::{ChartView, ChartViewConfig};
use crate::core::{Sample, SampleWindow, Viewport};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

type SharedView = Rc<RefCell<ChartView<CairoRenderer>>>;
type SharedTick = Rc<RefCell<Option<gtk::TickCallbackId>>>;

/// Mounts a `ChartView` in a GTK `DrawingArea`.
///
/// Layout sizes come from the widget's resize signal and animation time from
/// its frame clock. The tick callback only runs while a series is settling;
/// it pauses on unrealize, resumes on realize, and is removed for good when
/// the adapter is detached.
pub struct GtkChartAdapter {
    area: gtk::DrawingArea,
    view: SharedView,
    tick: SharedTick,
}

impl GtkChartAdapter {
    pub fn new(config: ChartViewConfig) -> ChartResult<Self> {
        let width = i32::try_from(config.viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(config.viewport.height).unwrap_or(i32::MAX);
        let renderer = CairoRenderer::new(width, height)?;
        let view: SharedView = Rc::new(RefCell::new(ChartView::new(renderer, config)?));

        let area = gtk::DrawingArea::new();
        area.set_content_width(width);
        area.set_content_height(height);
        area.set_hexpand(true);
        area.set_vexpand(true);

        let draw_view = Rc::clone(&view);
        area.set_draw_func(move |_, context, _, _| {
            if let Err(err) = draw_view.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "chart draw failed");
            }
        });

        let tick: SharedTick = Rc::new(RefCell::new(None));

        let resize_view = Rc::clone(&view);
        let resize_tick = Rc::clone(&tick);
        area.connect_resize(move |area, width, height| {
            let layout = Viewport::new(
                u32::try_from(width).unwrap_or(0),
                u32::try_from(height).unwrap_or(0),
            );
            let changed = resize_view.borrow_mut().set_layout(layout);
            if changed {
                start_ticking(area, &resize_view, &resize_tick);
                area.queue_draw();
            }
        });

        let realize_view = Rc::clone(&view);
        let realize_tick = Rc::clone(&tick);
        area.connect_realize(move |area| {
            if realize_view.borrow().is_animating() {
                start_ticking(area, &realize_view, &realize_tick);
            }
        });

        let unrealize_tick = Rc::clone(&tick);
        area.connect_unrealize(move |_| {
            stop_ticking(&unrealize_tick);
        });

        Ok(Self { area, view, tick })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Pushes a full window snapshot and schedules a redraw.
    pub fn update_samples(&self, samples: &[Sample]) {
        self.view.borrow_mut().update_samples(samples);
        start_ticking(&self.area, &self.view, &self.tick);
        self.area.queue_draw();
    }

    pub fn update_from_window(&self, window: &SampleWindow) {
        self.update_samples(&window.snapshot());
    }

    /// Runs `f` against the hosted chart.
    pub fn with_view<T>(&self, f: impl FnOnce(&ChartView<CairoRenderer>) -> T) -> T {
        f(&self.view.borrow())
    }

    /// Removes the frame-clock callback and cancels running animations.
    pub fn detach(&self) {
        stop_ticking(&self.tick);
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.shutdown();
        }
    }
}

impl Drop for GtkChartAdapter {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Installs the frame-clock callback unless one is already running.
///
/// The callback removes itself once every series has settled, so an idle
/// chart does not keep the frame clock busy.
fn start_ticking(area: &gtk::DrawingArea, view: &SharedView, tick: &SharedTick) {
    if tick.borrow().is_some() {
        return;
    }

    let tick_view = Rc::clone(view);
    let tick_slot = Rc::clone(tick);
    let last_frame_us = Cell::new(None::<i64>);
    let tick_id = area.add_tick_callback(move |area, clock| {
        let delta = frame_delta(&last_frame_us, clock.frame_time());

        let animating = tick_view.borrow_mut().tick(delta);
        area.queue_draw();
        if animating {
            glib::ControlFlow::Continue
        } else {
            tick_slot.borrow_mut().take();
            trace!("chart settled; tick callback finished");
            glib::ControlFlow::Break
        }
    });
    *tick.borrow_mut() = Some(tick_id);
}

/// Time since the previous frame; zero on the first frame or if the clock
/// went backwards.
fn frame_delta(last_frame_us: &Cell<Option<i64>>, now_us: i64) -> Duration {
    last_frame_us
        .replace(Some(now_us))
        .and_then(|previous| u64::try_from(now_us - previous).ok())
        .map_or(Duration::ZERO, Duration::from_micros)
}

fn stop_ticking(tick: &SharedTick) {
    if let Some(tick_id) = tick.borrow_mut().take() {
        tick_id.remove();
        debug!("chart tick callback removed");
    }
}
