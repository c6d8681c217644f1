use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive, TooltipPrimitive,
    WedgePrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Every render cycle builds a fresh frame; backends replace whatever they
/// drew for the previous frame instead of patching it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            wedges: Vec::new(),
            polylines: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            if !tooltip.x.is_finite() || !tooltip.y.is_finite() {
                return Err(DashboardError::InvalidData(
                    "tooltip position must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.wedges.is_empty()
            && self.polylines.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
            && self.tooltip.is_none()
    }

    /// Total number of drawn primitives, tooltip included.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.wedges.len()
            + self.polylines.len()
            + self.lines.len()
            + self.texts.len()
            + usize::from(self.tooltip.is_some())
    }
}
