use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{AxisStyle, ChartViewConfig, MIN_RENDER_SAMPLES, SeriesStyle};

pub(super) fn validate_chart_view_config(config: ChartViewConfig) -> ChartResult<ChartViewConfig> {
    validate_initial_viewport(config.viewport)?;

    if config.window_capacity < MIN_RENDER_SAMPLES {
        return Err(ChartError::InvalidConfig(format!(
            "window capacity must be >= {MIN_RENDER_SAMPLES}, got {}",
            config.window_capacity
        )));
    }
    if !config.range_floor.is_finite() || config.range_floor < 0.0 {
        return Err(ChartError::InvalidConfig(
            "range floor must be finite and >= 0".to_owned(),
        ));
    }
    if config.gridline_count == 0 {
        return Err(ChartError::InvalidConfig(
            "gridline count must be > 0".to_owned(),
        ));
    }
    if config.scroll_timing.settle_duration.is_zero() {
        return Err(ChartError::InvalidConfig(
            "scroll settle duration must be > 0".to_owned(),
        ));
    }
    if !config.label_space_px.is_finite() || config.label_space_px < 0.0 {
        return Err(ChartError::InvalidConfig(
            "label space must be finite and >= 0".to_owned(),
        ));
    }

    validate_series_style(config.series_style)?;
    validate_axis_style(config.axis_style)?;
    Ok(config)
}

pub(super) fn validate_range_floor(floor: f64) -> ChartResult<f64> {
    if !floor.is_finite() || floor < 0.0 {
        return Err(ChartError::InvalidData(
            "range floor must be finite and >= 0".to_owned(),
        ));
    }
    Ok(floor)
}

fn validate_initial_viewport(viewport: Viewport) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

fn validate_series_style(style: SeriesStyle) -> ChartResult<()> {
    if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "series stroke width must be finite and > 0".to_owned(),
        ));
    }
    for color in [style.x_color, style.y_color, style.z_color] {
        color.validate().map_err(into_config_error)?;
    }
    Ok(())
}

fn validate_axis_style(style: AxisStyle) -> ChartResult<()> {
    if !style.rule_width.is_finite() || style.rule_width <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "axis rule width must be finite and > 0".to_owned(),
        ));
    }
    if !style.label_font_size_px.is_finite() || style.label_font_size_px <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "axis label font size must be finite and > 0".to_owned(),
        ));
    }
    if !style.label_bottom_offset_px.is_finite() {
        return Err(ChartError::InvalidConfig(
            "axis label offset must be finite".to_owned(),
        ));
    }
    style.rule_color.validate().map_err(into_config_error)?;
    style.label_color.validate().map_err(into_config_error)
}

fn into_config_error(err: ChartError) -> ChartError {
    match err {
        ChartError::InvalidData(message) => ChartError::InvalidConfig(message),
        other => other,
    }
}
