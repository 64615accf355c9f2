use serde::{Deserialize, Serialize};

/// Host container size in pixels, as delivered by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns the area left for series once the label margin is reserved.
    #[must_use]
    pub fn plot_size(self, label_space_px: f64) -> PlotSize {
        PlotSize {
            width: (f64::from(self.width) - label_space_px).max(0.0),
            height: f64::from(self.height),
        }
    }
}

/// Series drawing area in pixels, after the left label margin is removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

impl PlotSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
