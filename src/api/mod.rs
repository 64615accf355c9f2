mod axis_gridlines;
mod chart_config;
mod chart_scene;
mod chart_snapshot;
mod chart_view;
mod render_frame_builder;
mod validation;

pub use axis_gridlines::{
    Gridline, GridlineLabelCacheStats, Gridlines, compute_gridlines, compute_gridlines_with,
    format_gridline_label,
};
pub use chart_config::{
    AxisStyle, ChartViewConfig, DEFAULT_GRIDLINE_COUNT, DEFAULT_LABEL_SPACE_PX,
    DEFAULT_RANGE_FLOOR, SeriesStyle,
};
pub use chart_scene::{ChartGeometry, ChartScene, SeriesScene, compose_scene, derive_geometry};
pub use chart_snapshot::ChartSnapshot;
pub use chart_view::{ChartView, MIN_RENDER_SAMPLES};
pub use render_frame_builder::build_render_frame;
