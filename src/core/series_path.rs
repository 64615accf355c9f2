use serde::{Deserialize, Serialize};

use crate::core::primitives::finite_or_zero;
use crate::core::{ChartRange, PlotSize};

/// Per-series geometry derived from one channel of the window.
///
/// Only vertical positions are stored; horizontal positions follow from
/// `step_width` and the current scroll offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub ys: Vec<f64>,
    pub step_width: f64,
    pub line_width: f64,
}

impl SeriesPath {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// Horizontal position of point `index` inside the line box.
    ///
    /// Non-finite results collapse to `0.0`.
    #[must_use]
    pub fn point_x(&self, index: usize, offset: f64) -> f64 {
        finite_or_zero(index as f64 * self.step_width - offset)
    }

    /// Projected `(x, y)` pairs for the given scroll offset.
    #[must_use]
    pub fn points(&self, offset: f64) -> Vec<(f64, f64)> {
        self.ys
            .iter()
            .enumerate()
            .map(|(index, y)| (self.point_x(index, offset), *y))
            .collect()
    }
}

/// Horizontal distance between consecutive samples.
///
/// One extra step is reserved past the right edge so the newest sample can
/// slide in from outside the plot: `width / (count - 2)`. Fewer than three
/// samples, or a degenerate width, yield `0.0`.
#[must_use]
pub fn step_width(plot_width: f64, sample_count: usize) -> f64 {
    if sample_count < 3 {
        return 0.0;
    }
    let step = plot_width / (sample_count - 2) as f64;
    if step.is_finite() && step > 0.0 {
        step
    } else {
        0.0
    }
}

/// Builds one series' path from its channel values.
///
/// The output has exactly one point per input value, in input order.
#[must_use]
pub fn build_series_path(values: &[f64], range: ChartRange, plot: PlotSize) -> SeriesPath {
    let step_width = step_width(plot.width, values.len());
    let line_width = step_width * values.len().saturating_sub(1) as f64;
    let ys = values
        .iter()
        .map(|value| range.value_to_pixel(*value, plot.height))
        .collect();

    SeriesPath {
        ys,
        step_width,
        line_width,
    }
}
