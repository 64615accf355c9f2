use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::window::channel_values;
use crate::core::{
    Channel, ChartRange, PlotSize, Sample, SeriesPath, Viewport, build_series_path, finite_or_zero,
};
use crate::render::{ClipRect, Color};

use super::axis_gridlines::{Gridline, Gridlines, compute_gridlines_with};
use super::{ChartViewConfig, MIN_RENDER_SAMPLES};

/// Derived per-update geometry: range, one path per channel, and gridlines.
///
/// Recomputed from scratch on every sample or layout update and never
/// patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub plot: PlotSize,
    pub range: ChartRange,
    pub series: IndexMap<Channel, SeriesPath>,
    pub gridlines: Gridlines,
}

/// Derives the chart geometry for one window snapshot.
///
/// Returns `None` while fewer than [`MIN_RENDER_SAMPLES`] samples are
/// available; that is the suppressed, empty-frame state.
pub fn derive_geometry<F>(
    samples: &[Sample],
    viewport: Viewport,
    floor: f64,
    config: &ChartViewConfig,
    label: F,
) -> Option<ChartGeometry>
where
    F: FnMut(f64) -> String,
{
    if samples.len() < MIN_RENDER_SAMPLES {
        return None;
    }

    let plot = viewport.plot_size(config.label_space_px);
    let range = ChartRange::compute(samples, floor);
    let series = Channel::ALL
        .into_iter()
        .map(|channel| {
            let values = channel_values(samples.iter().copied(), channel);
            (channel, build_series_path(&values, range, plot))
        })
        .collect();
    let gridlines = compute_gridlines_with(range, plot.height, config.gridline_count, label);

    Some(ChartGeometry {
        viewport,
        plot,
        range,
        series,
        gridlines,
    })
}

/// One series as it should appear in the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesScene {
    pub channel: Channel,
    pub color: Color,
    pub stroke_width: f64,
    /// Left edge of the line box; one step left of the plot area.
    pub origin_x: f64,
    pub step_width: f64,
    pub line_width: f64,
    pub offset: f64,
    /// Absolute frame coordinates, oldest sample first.
    pub points: Vec<(f64, f64)>,
    pub clip: ClipRect,
}

/// Renderable scene: the value axis plus one polyline per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub viewport: Viewport,
    pub range: Option<ChartRange>,
    pub gridlines: Vec<Gridline>,
    pub series: Vec<SeriesScene>,
}

impl ChartScene {
    #[must_use]
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            range: None,
            gridlines: Vec::new(),
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gridlines.is_empty() && self.series.is_empty()
    }
}

/// Places geometry in frame space using the current per-series offsets.
///
/// The line box starts one step left of the plot area and is clipped to it,
/// so at offset `-step_width` the oldest visible point sits on the plot's
/// left edge and at offset `0` the newest point sits on its right edge.
#[must_use]
pub fn compose_scene<F>(
    geometry: &ChartGeometry,
    config: &ChartViewConfig,
    offset_of: F,
) -> ChartScene
where
    F: Fn(Channel) -> f64,
{
    if !geometry.viewport.is_valid() {
        return ChartScene::empty(geometry.viewport);
    }

    let label_space = config.label_space_px;
    let clip = ClipRect::new(label_space, 0.0, geometry.plot.width, geometry.plot.height);
    let series = geometry
        .series
        .iter()
        .map(|(channel, path)| {
            let offset = offset_of(*channel);
            let origin_x = finite_or_zero(label_space - path.step_width);
            let points = path
                .points(offset)
                .into_iter()
                .map(|(x, y)| (origin_x + x, y))
                .collect();
            SeriesScene {
                channel: *channel,
                color: config.series_style.color(*channel),
                stroke_width: config.series_style.stroke_width,
                origin_x,
                step_width: path.step_width,
                line_width: path.line_width,
                offset,
                points,
                clip,
            }
        })
        .collect();

    ChartScene {
        viewport: geometry.viewport,
        range: Some(geometry.range),
        gridlines: geometry.gridlines.to_vec(),
        series,
    }
}
