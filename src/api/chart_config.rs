use serde::{Deserialize, Serialize};

use crate::animation::{Easing, ScrollTiming};
use crate::core::{Channel, DEFAULT_WINDOW_CAPACITY, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::validation::validate_chart_view_config;

pub const DEFAULT_RANGE_FLOOR: f64 = 100.0;
pub const DEFAULT_GRIDLINE_COUNT: usize = 5;
pub const DEFAULT_LABEL_SPACE_PX: f64 = 30.0;

/// Stroke settings shared by the three series plus one color per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke_width: f64,
    pub x_color: Color,
    pub y_color: Color,
    pub z_color: Color,
}

impl SeriesStyle {
    #[must_use]
    pub fn color(self, channel: Channel) -> Color {
        match channel {
            Channel::X => self.x_color,
            Channel::Y => self.y_color,
            Channel::Z => self.z_color,
        }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            x_color: Color::BLUE,
            y_color: Color::RED,
            z_color: Color::GREEN,
        }
    }
}

/// Look of the value axis: one rule and one label per gridline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub rule_color: Color,
    pub rule_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Gap between the bottom of a label and its rule.
    pub label_bottom_offset_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule_color: Color::rgb8(0xed, 0xeb, 0xf2),
            rule_width: 1.0,
            label_color: Color::BLACK,
            label_font_size_px: 12.0,
            label_bottom_offset_px: 7.0,
        }
    }
}

/// Construction-time chart configuration.
///
/// Every field is static for the lifetime of a `ChartView`. The type is
/// serializable so host applications can keep chart setup next to the rest
/// of their settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    /// Layout assumed until the host reports a real one.
    pub viewport: Viewport,
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,
    #[serde(default = "default_range_floor")]
    pub range_floor: f64,
    #[serde(default = "default_gridline_count")]
    pub gridline_count: usize,
    #[serde(default)]
    pub scroll_timing: ScrollTiming,
    #[serde(default = "default_label_space_px")]
    pub label_space_px: f64,
    #[serde(default)]
    pub series_style: SeriesStyle,
    #[serde(default)]
    pub axis_style: AxisStyle,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            window_capacity: default_window_capacity(),
            range_floor: default_range_floor(),
            gridline_count: default_gridline_count(),
            scroll_timing: ScrollTiming::default(),
            label_space_px: default_label_space_px(),
            series_style: SeriesStyle::default(),
            axis_style: AxisStyle::default(),
        }
    }

    #[must_use]
    pub fn with_window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_range_floor(mut self, floor: f64) -> Self {
        self.range_floor = floor;
        self
    }

    #[must_use]
    pub fn with_gridline_count(mut self, count: usize) -> Self {
        self.gridline_count = count;
        self
    }

    /// Sets duration and easing of the settle phase.
    #[must_use]
    pub fn with_scroll_timing(mut self, duration: std::time::Duration, easing: Easing) -> Self {
        self.scroll_timing = ScrollTiming {
            settle_duration: duration,
            settle_easing: easing,
        };
        self
    }

    #[must_use]
    pub fn with_label_space_px(mut self, label_space_px: f64) -> Self {
        self.label_space_px = label_space_px;
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, style: SeriesStyle) -> Self {
        self.series_style = style;
        self
    }

    #[must_use]
    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis_style = style;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_chart_view_config(self)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse config: {err}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidConfig(format!("failed to serialize config: {err}"))
        })
    }
}

impl Default for ChartViewConfig {
    /// Demo-screen defaults: the 250x250 plot the host starts with, plus the
    /// label margin.
    fn default() -> Self {
        Self::new(Viewport::new(280, 250))
    }
}

fn default_window_capacity() -> usize {
    DEFAULT_WINDOW_CAPACITY
}

fn default_range_floor() -> f64 {
    DEFAULT_RANGE_FLOOR
}

fn default_gridline_count() -> usize {
    DEFAULT_GRIDLINE_COUNT
}

fn default_label_space_px() -> f64 {
    DEFAULT_LABEL_SPACE_PX
}
