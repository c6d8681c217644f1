use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Brushing,
}

/// Hover tooltip exposed to host applications, in container pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Horizontal range selection in plot-area pixels, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSelection {
    pub start: f64,
    pub end: f64,
}

impl BrushSelection {
    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }
}

/// Pointer, hover and brush state for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor: Option<(f64, f64)>,
    brush_anchor: f64,
    brush_current: f64,
    tooltip: Option<Tooltip>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor: None,
            brush_anchor: 0.0,
            brush_current: 0.0,
            tooltip: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.tooltip = None;
    }

    pub fn show_tooltip(&mut self, tooltip: Tooltip) {
        self.tooltip = Some(tooltip);
    }

    pub fn clear_tooltip(&mut self) {
        self.tooltip = None;
    }

    /// Starts a brush at plot-area x.
    pub fn on_brush_start(&mut self, plot_x: f64) {
        self.mode = InteractionMode::Brushing;
        self.brush_anchor = plot_x;
        self.brush_current = plot_x;
        self.tooltip = None;
    }

    pub fn on_brush_move(&mut self, plot_x: f64) {
        if self.mode == InteractionMode::Brushing {
            self.brush_current = plot_x;
        }
    }

    /// Current in-progress selection, if brushing.
    #[must_use]
    pub fn brush_selection(&self) -> Option<BrushSelection> {
        (self.mode == InteractionMode::Brushing).then(|| BrushSelection {
            start: self.brush_anchor.min(self.brush_current),
            end: self.brush_anchor.max(self.brush_current),
        })
    }

    /// Ends the brush and returns the committed selection.
    ///
    /// A selection with no width (a plain click) yields `None`.
    pub fn on_brush_end(&mut self, plot_x: f64) -> Option<BrushSelection> {
        if self.mode != InteractionMode::Brushing {
            return None;
        }
        self.brush_current = plot_x;
        let selection = self.brush_selection();
        self.mode = InteractionMode::Idle;
        selection.filter(|selection| selection.width() > 0.0)
    }

    pub fn cancel_brush(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}
