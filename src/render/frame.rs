use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PolylinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw `lines` first (grid rules), then `polylines` (series), then
/// `texts` (axis labels).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            polylines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.polylines.is_empty() && self.texts.is_empty()
    }
}
