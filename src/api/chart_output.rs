use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;
use crate::render::{RenderFrame, Renderer};

pub const SELECT_REGION_PROMPT: &str = "지역을 선택해주세요.";
pub const SELECT_LINE_VARIABLE_PROMPT: &str = "Line Chart의 변수를 선택해주세요.";
pub const SELECT_BAR_VARIABLE_PROMPT: &str = "Bar Chart의 변수를 선택해주세요.";
pub const SELECT_PIE_VARIABLE_PROMPT: &str = "Pie Chart의 변수를 선택해주세요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// What a chart container shows after one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    /// Prompt shown instead of a chart when the selection is incomplete.
    Placeholder(&'static str),
    /// Nothing drawn: the container has no usable area.
    Blank,
    Frame(RenderFrame),
}

impl ChartOutput {
    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        match self {
            Self::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Placeholder(prompt) => Some(prompt),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Sends the frame, if any, to `renderer`. Returns whether it drew.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> DashboardResult<bool> {
        match self {
            Self::Frame(frame) => {
                renderer.render(frame)?;
                Ok(true)
            }
            Self::Placeholder(_) | Self::Blank => Ok(false),
        }
    }
}

/// Plot rectangle inside a container, after margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// `None` when the container or the area left after margins is empty.
    pub(super) fn resolve(
        viewport: crate::core::Viewport,
        margins: super::ChartMargins,
    ) -> Option<Self> {
        if !viewport.is_valid() {
            return None;
        }
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        (width > 0.0 && height > 0.0).then_some(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    pub(super) fn origin(self) -> (f64, f64) {
        (self.left, self.top)
    }

    /// Container point → plot-relative point.
    pub(super) fn to_plot(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }

    pub(super) fn contains(self, x: f64, y: f64) -> bool {
        let (px, py) = self.to_plot(x, y);
        (0.0..=self.width).contains(&px) && (0.0..=self.height).contains(&py)
    }
}
