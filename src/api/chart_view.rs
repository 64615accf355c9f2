use std::time::Duration;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::animation::ScrollAnimator;
use crate::core::{Channel, ChartRange, PlotSize, Sample, SampleWindow, SeriesPath, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::axis_gridlines::{Gridline, GridlineLabelCache, GridlineLabelCacheStats};
use super::chart_scene::{ChartGeometry, ChartScene, compose_scene, derive_geometry};
use super::render_frame_builder::build_render_frame;
use super::validation::validate_range_floor;
use super::{ChartSnapshot, ChartViewConfig};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Minimum window length before anything is drawn.
pub const MIN_RENDER_SAMPLES: usize = 4;

/// Live chart facade consumed by host applications.
///
/// The host feeds full window snapshots and layout sizes, drives `tick` from
/// its frame clock, and asks for frames. All derived state is recomputed from
/// the latest snapshot; only the per-series scroll offsets carry over between
/// updates.
pub struct ChartView<R: Renderer> {
    renderer: R,
    config: ChartViewConfig,
    layout: Viewport,
    samples: Vec<Sample>,
    floor: f64,
    geometry: Option<ChartGeometry>,
    animators: IndexMap<Channel, ScrollAnimator>,
    label_cache: GridlineLabelCache,
}

impl<R: Renderer> ChartView<R> {
    /// Creates a chart with a validated configuration.
    pub fn new(renderer: R, config: ChartViewConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let animators = Channel::ALL
            .into_iter()
            .map(|channel| (channel, ScrollAnimator::new(config.scroll_timing)))
            .collect();
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            window_capacity = config.window_capacity,
            range_floor = config.range_floor,
            "chart view created"
        );

        Ok(Self {
            renderer,
            config,
            layout: config.viewport,
            samples: Vec::new(),
            floor: config.range_floor,
            geometry: None,
            animators,
            label_cache: GridlineLabelCache::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> Viewport {
        self.layout
    }

    /// Series area after the label margin is reserved.
    #[must_use]
    pub fn plot_size(&self) -> PlotSize {
        self.layout.plot_size(self.config.label_space_px)
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Whether enough samples are present for the chart to draw.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.geometry.is_some()
    }

    /// Range of the current geometry, `None` while suppressed.
    #[must_use]
    pub fn range(&self) -> Option<ChartRange> {
        self.geometry.as_ref().map(|geometry| geometry.range)
    }

    #[must_use]
    pub fn range_floor(&self) -> f64 {
        self.floor
    }

    #[must_use]
    pub fn series_path(&self, channel: Channel) -> Option<&SeriesPath> {
        self.geometry
            .as_ref()
            .and_then(|geometry| geometry.series.get(&channel))
    }

    #[must_use]
    pub fn gridlines(&self) -> &[Gridline] {
        self.geometry
            .as_ref()
            .map(|geometry| geometry.gridlines.as_slice())
            .unwrap_or_default()
    }

    /// Current scroll offset of one series.
    #[must_use]
    pub fn offset(&self, channel: Channel) -> f64 {
        self.animators
            .get(&channel)
            .map_or(0.0, ScrollAnimator::offset)
    }

    #[must_use]
    pub fn animator(&self, channel: Channel) -> Option<&ScrollAnimator> {
        self.animators.get(&channel)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animators.values().any(|animator| !animator.is_settled())
    }

    #[must_use]
    pub fn label_cache_stats(&self) -> GridlineLabelCacheStats {
        self.label_cache.stats()
    }

    /// Applies a new layout size from the host.
    ///
    /// Returns `false` when the size did not change; nothing is recomputed in
    /// that case. Zero-area layouts are accepted and draw nothing.
    pub fn set_layout(&mut self, layout: Viewport) -> bool {
        if layout == self.layout {
            return false;
        }

        debug!(
            previous_width = self.layout.width,
            previous_height = self.layout.height,
            width = layout.width,
            height = layout.height,
            "chart layout changed"
        );
        self.layout = layout;
        self.recompute();
        true
    }

    /// Replaces the window snapshot using the configured range floor.
    pub fn update_samples(&mut self, samples: &[Sample]) {
        let keep_from = samples.len().saturating_sub(self.config.window_capacity);
        if keep_from > 0 {
            trace!(
                dropped = keep_from,
                capacity = self.config.window_capacity,
                "snapshot longer than window capacity"
            );
        }
        self.samples = samples[keep_from..].to_vec();
        self.recompute();
    }

    /// Replaces the window snapshot and the range floor.
    ///
    /// The new floor replaces the configured one and stays in effect for
    /// later `update_samples` calls until changed again here.
    pub fn update_samples_with_floor(&mut self, samples: &[Sample], floor: f64) -> ChartResult<()> {
        self.floor = validate_range_floor(floor)?;
        self.update_samples(samples);
        Ok(())
    }

    pub fn update_from_window(&mut self, window: &SampleWindow) {
        self.update_samples(&window.snapshot());
    }

    /// Advances every series animation by one frame-clock delta.
    ///
    /// Returns `true` while any series is still settling.
    pub fn tick(&mut self, delta: Duration) -> bool {
        for animator in self.animators.values_mut() {
            animator.tick(delta);
        }
        self.is_animating()
    }

    /// Cancels all in-flight animations; used when the host tears the chart
    /// down.
    pub fn shutdown(&mut self) {
        let cancelled = self.cancel_animations();
        debug!(cancelled, "chart view shut down");
    }

    /// Composes the scene for the current animation frame.
    #[must_use]
    pub fn build_scene(&self) -> ChartScene {
        match &self.geometry {
            Some(geometry) => compose_scene(geometry, &self.config, |channel| self.offset(channel)),
            None => ChartScene::empty(self.layout),
        }
    }

    /// Builds backend primitives for the current frame.
    ///
    /// Frames for zero-area layouts come back empty and unvalidated.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let frame = build_render_frame(&self.build_scene(), self.config.axis_style);
        if self.layout.is_valid() {
            frame.validate()?;
        }
        Ok(frame)
    }

    /// Draws the current frame. Zero-area layouts are skipped.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.layout.is_valid() {
            trace!(
                width = self.layout.width,
                height = self.layout.height,
                "render skipped for zero-area layout"
            );
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if !self.layout.is_valid() {
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            layout: self.layout,
            plot: self.plot_size(),
            sample_count: self.samples.len(),
            active: self.is_active(),
            range_floor: self.floor,
            offsets: self
                .animators
                .iter()
                .map(|(channel, animator)| (*channel, animator.offset()))
                .collect(),
            label_cache: self.label_cache.stats(),
            scene: self.build_scene(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize snapshot: {err}"))
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn recompute(&mut self) {
        let label_cache = &mut self.label_cache;
        self.geometry = derive_geometry(
            &self.samples,
            self.layout,
            self.floor,
            &self.config,
            |value| label_cache.label(value),
        );

        let Some(geometry) = &self.geometry else {
            let cancelled = self.reset_animations();
            debug!(
                sample_count = self.samples.len(),
                min = MIN_RENDER_SAMPLES,
                cancelled,
                "chart suppressed below minimum sample count"
            );
            return;
        };

        for (channel, path) in &geometry.series {
            if let Some(animator) = self.animators.get_mut(channel) {
                animator.trigger(path.step_width);
            }
        }
        debug!(
            sample_count = self.samples.len(),
            range_max = geometry.range.max(),
            plot_width = geometry.plot.width,
            plot_height = geometry.plot.height,
            "chart geometry recomputed"
        );
    }

    fn reset_animations(&mut self) -> usize {
        let mut cancelled = 0;
        for animator in self.animators.values_mut() {
            if animator.reset() {
                cancelled += 1;
            }
        }
        cancelled
    }

    fn cancel_animations(&mut self) -> usize {
        let mut cancelled = 0;
        for animator in self.animators.values_mut() {
            if animator.cancel() {
                cancelled += 1;
            }
        }
        cancelled
    }
}
