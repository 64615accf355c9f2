use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Smallest allowed range maximum; keeps value mapping away from `x / 0`.
pub const MIN_RANGE_MAX: f64 = 1.0;

/// Vertical value range shared by every series and the axis.
///
/// The range always starts at zero; only the maximum moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRange {
    max: f64,
}

impl ChartRange {
    /// Builds a range from an explicit maximum, clamped to [`MIN_RANGE_MAX`].
    #[must_use]
    pub fn new(max: f64) -> Self {
        let max = if max.is_finite() {
            max.max(MIN_RANGE_MAX)
        } else {
            MIN_RANGE_MAX
        };
        Self { max }
    }

    /// Derives the working range from the most recent sample only.
    ///
    /// The result is `max(floor, ceil(max(x, y, z)))`, so the scale follows
    /// the latest reading instead of the window's history. Callers that need
    /// a steadier axis should smooth `floor` themselves.
    #[must_use]
    pub fn compute(samples: &[Sample], floor: f64) -> Self {
        let latest_max = samples
            .last()
            .map_or(0.0, |sample| sample.max_channel_value().ceil());
        let floor = if floor.is_finite() { floor } else { 0.0 };
        Self::new(floor.max(latest_max))
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Maps a value to a vertical pixel where `0` is the top edge.
    ///
    /// Out-of-range values are clamped onto the chart instead of overflowing
    /// it: anything above `max` lands on row 0, anything at or below zero lands
    /// on `height`.
    #[must_use]
    pub fn value_to_pixel(self, value: f64, height: f64) -> f64 {
        if !value.is_finite() {
            return height.round();
        }
        let ratio = (1.0 - value / self.max).clamp(0.0, 1.0);
        (ratio * height).round()
    }
}

/// Free-function form of [`ChartRange::value_to_pixel`].
#[must_use]
pub fn value_to_pixel(value: f64, range: ChartRange, height: f64) -> f64 {
    range.value_to_pixel(value, height)
}
