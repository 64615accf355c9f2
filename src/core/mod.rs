pub mod primitives;
pub mod range;
pub mod sample;
pub mod series_path;
pub mod types;
pub mod window;

pub use primitives::{decimal_to_f64, finite_or_zero};
pub use range::{ChartRange, MIN_RANGE_MAX, value_to_pixel};
pub use sample::{Channel, Sample};
pub use series_path::{SeriesPath, build_series_path, step_width};
pub use types::{PlotSize, Viewport};
pub use window::{DEFAULT_WINDOW_CAPACITY, SampleWindow};
