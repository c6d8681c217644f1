use tracing::trace;

use crate::core::ticks::format_value;
use crate::core::{
    BandScale, BarDatum, BarGeometry, LinearScale, Viewport, bar_value_domain, project_bars,
};
use crate::error::DashboardResult;
use crate::interaction::{InteractionState, Tooltip};
use crate::render::{RectPrimitive, RenderFrame, TooltipPrimitive};

use super::axis::{push_band_axis_bottom, push_value_axis_left, push_zero_baseline};
use super::chart_output::PlotArea;
use super::{BarChartConfig, ChartOutput};

const HOVER_ALPHA: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
struct BarLayout {
    area: PlotArea,
    band: BandScale,
    values: LinearScale,
    bars: Vec<BarGeometry>,
}

/// Latest-snapshot bar chart: one bar per region, anchored at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartView {
    config: BarChartConfig,
    viewport: Viewport,
    data: Vec<BarDatum>,
    layout: Option<BarLayout>,
    hovered: Option<usize>,
    interaction: InteractionState,
}

impl BarChartView {
    #[must_use]
    pub fn new(config: BarChartConfig) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            data: Vec::new(),
            layout: None,
            hovered: None,
            interaction: InteractionState::default(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &[BarDatum] {
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

    /// Index into `data()` of the bar under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_data(&mut self, data: Vec<BarDatum>) -> DashboardResult<()> {
        self.data = data;
        self.relayout()
    }

    pub fn resize(&mut self, viewport: Viewport) -> DashboardResult<()> {
        self.viewport = viewport;
        self.relayout()
    }

    fn relayout(&mut self) -> DashboardResult<()> {
        self.hovered = None;
        self.interaction.on_pointer_leave();

        let Some(area) = PlotArea::resolve(self.viewport, self.config.margins) else {
            self.layout = None;
            return Ok(());
        };

        let band = BandScale::new(
            self.data.iter().map(|d| d.region.clone()),
            (0.0, area.width),
            self.config.band_padding,
        )?;
        let values = LinearScale::new(bar_value_domain(&self.data), (area.height, 0.0))?;
        let bars = project_bars(&self.data, &band, values);
        trace!(bars = bars.len(), width = area.width, "bar layout");

        self.layout = Some(BarLayout {
            area,
            band,
            values,
            bars,
        });
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
        let Some(layout) = &self.layout else {
            return;
        };

        let (px, py) = layout.area.to_plot(x, y);
        self.hovered = layout.bars.iter().position(|bar| bar.contains(px, py));
        match self.hovered.and_then(|idx| self.data.get(idx)) {
            Some(datum) => {
                let offset = self.config.tooltip_offset;
                self.interaction.show_tooltip(Tooltip {
                    text: format!("{}: {}", datum.region, format_value(datum.value)),
                    x: x + offset.dx,
                    y: y + offset.dy,
                });
            }
            None => self.interaction.clear_tooltip(),
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn output(&self) -> ChartOutput {
        let Some(layout) = &self.layout else {
            return ChartOutput::Blank;
        };

        let mut frame = RenderFrame::new(self.viewport);
        let (ox, oy) = layout.area.origin();
        for (idx, bar) in layout.bars.iter().enumerate() {
            let mut color = self.config.palette.color(idx);
            if self.hovered == Some(idx) {
                color = color.with_alpha(HOVER_ALPHA);
            }
            frame.rects.push(RectPrimitive::new(
                ox + bar.x,
                oy + bar.y,
                bar.width,
                bar.height,
                color,
            ));
        }

        push_band_axis_bottom(
            &mut frame,
            layout.area.origin(),
            layout.area.height,
            layout.area.width,
            &layout.band,
            self.config.label_rotation_deg,
        );
        push_value_axis_left(
            &mut frame,
            layout.area.origin(),
            layout.values,
            self.config.value_tick_count,
        );
        push_zero_baseline(
            &mut frame,
            layout.area.origin(),
            layout.area.width,
            layout.values,
        );

        frame.tooltip = self.interaction.tooltip().map(|tooltip| TooltipPrimitive {
            text: tooltip.text.clone(),
            x: tooltip.x,
            y: tooltip.y,
        });
        ChartOutput::Frame(frame)
    }
}
