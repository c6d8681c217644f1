use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::core::ticks::format_value;
use crate::core::{PieDatum, PieSlice, Viewport, arc_centroid, pie_layout, pointer_angle};
use crate::interaction::{InteractionState, Tooltip};
use crate::render::{
    Color, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TooltipPrimitive,
    WedgePrimitive,
};

use super::chart_output::PlotArea;
use super::{ChartOutput, PieChartConfig};

const WEDGE_RADIUS_RATIO: f64 = 0.8;
const LABEL_ARC_INNER_RATIO: f64 = 0.9;
const CONNECTOR_END_RATIO: f64 = 0.95;
const LABEL_FONT_PX: f64 = 12.0;
const CONNECTOR_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.3);

#[derive(Debug, Clone, PartialEq)]
struct PieGeometry {
    center: (f64, f64),
    radius: f64,
    slices: Vec<PieSlice>,
}

/// Top-ranked share pie chart with outside labels and connector lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartView {
    config: PieChartConfig,
    viewport: Viewport,
    data: Vec<PieDatum>,
    geometry: Option<PieGeometry>,
    interaction: InteractionState,
}

impl PieChartView {
    #[must_use]
    pub fn new(config: PieChartConfig) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            data: Vec::new(),
            geometry: None,
            interaction: InteractionState::default(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &[PieDatum] {
        &self.data
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.interaction.tooltip()
    }

    pub fn set_data(&mut self, data: Vec<PieDatum>) {
        self.data = data;
        self.relayout();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.interaction.on_pointer_leave();
        self.geometry = PlotArea::resolve(self.viewport, self.config.margins).map(|area| {
            let radius = area.width.min(area.height) / 2.0;
            PieGeometry {
                center: (area.left + area.width / 2.0, area.top + area.height / 2.0),
                radius,
                slices: pie_layout(&self.data),
            }
        });
        trace!(wedges = self.data.len(), "pie layout");
    }

    /// Index into `data()` of the wedge under a container point.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let geometry = self.geometry.as_ref()?;
        let (dx, dy) = (x - geometry.center.0, y - geometry.center.1);
        if dx.hypot(dy) > geometry.radius * WEDGE_RADIUS_RATIO {
            return None;
        }
        let angle = pointer_angle(dx, dy);
        geometry
            .slices
            .iter()
            .position(|slice| slice.contains_angle(angle))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
        match self.hit_test(x, y).and_then(|idx| self.data.get(idx)) {
            Some(datum) => {
                let offset = self.config.tooltip_offset;
                self.interaction.show_tooltip(Tooltip {
                    text: format_value(datum.value),
                    x: x + offset.dx,
                    y: y + offset.dy,
                });
            }
            None => self.interaction.clear_tooltip(),
        }
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn output(&self) -> ChartOutput {
        let Some(geometry) = &self.geometry else {
            return ChartOutput::Blank;
        };

        let mut frame = RenderFrame::new(self.viewport);
        let (cx, cy) = geometry.center;
        let radius = geometry.radius;
        let wedge_radius = radius * WEDGE_RADIUS_RATIO;

        for (idx, (datum, slice)) in self.data.iter().zip(&geometry.slices).enumerate() {
            frame.wedges.push(WedgePrimitive {
                center_x: cx,
                center_y: cy,
                inner_radius: 0.0,
                outer_radius: wedge_radius,
                start_angle: slice.start_angle,
                end_angle: slice.end_angle,
                fill_color: self.config.palette.color(idx),
            });

            let side = if slice.label_on_right() { 1.0 } else { -1.0 };
            let inner = arc_centroid(*slice, 0.0, wedge_radius);
            let outer = arc_centroid(*slice, radius * LABEL_ARC_INNER_RATIO, wedge_radius);

            if !datum.region.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    datum.region.clone(),
                    cx + radius * side,
                    cy + outer.1,
                    LABEL_FONT_PX,
                    Color::rgb(0.0, 0.0, 0.0),
                    if side > 0.0 {
                        TextHAlign::Left
                    } else {
                        TextHAlign::Right
                    },
                ));
            }

            let connector: SmallVec<[(f64, f64); 3]> = smallvec![
                (cx + inner.0, cy + inner.1),
                (cx + outer.0, cy + outer.1),
                (cx + radius * CONNECTOR_END_RATIO * side, cy + outer.1),
            ];
            frame.polylines.push(PolylinePrimitive::new(
                connector.into_vec(),
                1.0,
                CONNECTOR_COLOR,
            ));
        }

        frame.tooltip = self.interaction.tooltip().map(|tooltip| TooltipPrimitive {
            text: tooltip.text.clone(),
            x: tooltip.x,
            y: tooltip.y,
        });
        ChartOutput::Frame(frame)
    }
}
