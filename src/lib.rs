//! livechart-rs: live scrolling line chart over a sliding sample window.
//!
//! The crate keeps chart math, scroll animation and scene composition free of
//! any UI toolkit. Hosts feed window snapshots and layout sizes into a
//! [`ChartView`], drive it from their frame clock, and hand the resulting
//! frames to a [`render::Renderer`] backend.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ChartError, ChartResult};
