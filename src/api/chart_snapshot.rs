use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Channel, PlotSize, Viewport};

use super::{ChartScene, GridlineLabelCacheStats};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub layout: Viewport,
    pub plot: PlotSize,
    pub sample_count: usize,
    pub active: bool,
    pub range_floor: f64,
    pub offsets: IndexMap<Channel, f64>,
    pub label_cache: GridlineLabelCacheStats,
    pub scene: ChartScene,
}
