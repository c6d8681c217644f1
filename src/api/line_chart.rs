use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::ticks::{format_value, year_ticks};
use crate::core::{
    LineSeries, LinearScale, TimeScale, Viewport, line_value_domain, nearest_point_index,
    project_line_points,
};
use crate::error::DashboardResult;
use crate::interaction::{BrushSelection, InteractionMode, InteractionState, Tooltip};
use crate::render::{
    ClipRect, Color, PolylinePrimitive, RectPrimitive, RenderFrame, TooltipPrimitive,
};

use super::axis::{push_time_axis_bottom, push_value_axis_left};
use super::chart_output::PlotArea;
use super::{ChartOutput, LineChartConfig};

const BRUSH_FILL: Color = Color::rgba(0.47, 0.47, 0.47, 0.3);
const BRUSH_BORDER: Color = Color::rgb(1.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
struct LineLayout {
    area: PlotArea,
    time_scale: TimeScale,
    values: LinearScale,
}

/// Multi-region time-series chart with brush zoom.
///
/// Pressing anywhere in the plot area, including directly on a line,
/// starts a horizontal brush; releasing rescales the time axis to the
/// brushed window. A double click restores the full extent.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartView {
    config: LineChartConfig,
    viewport: Viewport,
    series: Vec<LineSeries>,
    layout: Option<LineLayout>,
    interaction: InteractionState,
}

impl LineChartView {
    #[must_use]
    pub fn new(config: LineChartConfig) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            series: Vec::new(),
            layout: None,
            interaction: InteractionState::default(),
        }
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Current time scale; `None` without data or drawable area.
    #[must_use]
    pub fn time_scale(&self) -> Option<TimeScale> {
        self.layout.map(|layout| layout.time_scale)
    }

    /// Plot-area x pixel for a unix time under the current zoom.
    pub fn map_time_to_pixel(&self, time: f64) -> Option<f64> {
        let layout = self.layout?;
        layout.time_scale.time_to_pixel(time, layout.area.width).ok()
    }

    pub fn set_series(&mut self, series: Vec<LineSeries>) -> DashboardResult<()> {
        self.series = series;
        self.relayout()
    }

    pub fn resize(&mut self, viewport: Viewport) -> DashboardResult<()> {
        self.viewport = viewport;
        self.relayout()
    }

    fn relayout(&mut self) -> DashboardResult<()> {
        self.interaction.cancel_brush();
        self.interaction.on_pointer_leave();

        let area = PlotArea::resolve(self.viewport, self.config.margins);
        let time_scale = TimeScale::from_dates(
            self.series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.date)),
        )?;

        self.layout = match (area, time_scale) {
            (Some(area), Some(time_scale)) => Some(LineLayout {
                area,
                time_scale,
                values: LinearScale::new(line_value_domain(&self.series), (area.height, 0.0))?,
            }),
            _ => None,
        };
        trace!(series = self.series.len(), drawable = self.layout.is_some(), "line layout");
        Ok(())
    }

    fn clamp_plot_x(area: PlotArea, x: f64) -> f64 {
        (x - area.left).clamp(0.0, area.width)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let Some(layout) = self.layout else {
            return;
        };
        if layout.area.contains(x, y) {
            self.interaction
                .on_brush_start(Self::clamp_plot_x(layout.area, x));
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
        let Some(layout) = self.layout else {
            return;
        };

        if self.interaction.mode() == InteractionMode::Brushing {
            self.interaction
                .on_brush_move(Self::clamp_plot_x(layout.area, x));
            return;
        }

        match self.hover_tooltip(layout, x, y) {
            Some(tooltip) => self.interaction.show_tooltip(tooltip),
            None => self.interaction.clear_tooltip(),
        }
    }

    /// Finishes a brush and zooms to it. Returns the applied selection.
    pub fn pointer_up(&mut self, x: f64, _y: f64) -> DashboardResult<Option<BrushSelection>> {
        let Some(layout) = self.layout.as_mut() else {
            return Ok(None);
        };
        let Some(selection) = self
            .interaction
            .on_brush_end(Self::clamp_plot_x(layout.area, x))
        else {
            return Ok(None);
        };

        let start = layout
            .time_scale
            .pixel_to_time(selection.start, layout.area.width)?;
        let end = layout
            .time_scale
            .pixel_to_time(selection.end, layout.area.width)?;
        layout.time_scale.set_visible_range(start, end)?;
        debug!(start, end, "line chart zoomed to brush");
        Ok(Some(selection))
    }

    /// Restores the full time extent.
    pub fn double_click(&mut self) {
        if let Some(layout) = self.layout.as_mut() {
            layout.time_scale.reset_visible_range_to_full();
            debug!("line chart zoom reset");
        }
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    fn hover_tooltip(&self, layout: LineLayout, x: f64, y: f64) -> Option<Tooltip> {
        if !layout.area.contains(x, y) {
            return None;
        }
        let (px, py) = layout.area.to_plot(x, y);

        let (distance, series) = self
            .series
            .iter()
            .filter_map(|series| {
                let vertices =
                    project_line_points(series, layout.time_scale, layout.values, layout.area.width)
                        .ok()?;
                polyline_distance(&vertices, px, py).map(|d| (OrderedFloat(d), series))
            })
            .min_by_key(|(distance, _)| *distance)?;
        if distance.0 > self.config.hover_tolerance_px {
            return None;
        }

        let time = layout
            .time_scale
            .pixel_to_time(px, layout.area.width)
            .ok()?;
        let point = series.points.get(nearest_point_index(&series.points, time)?)?;
        let offset = self.config.tooltip_offset;
        Some(Tooltip {
            text: format!("{} : {}", series.region, format_value(point.value)),
            x: x + offset.dx,
            y: y + offset.dy,
        })
    }

    #[must_use]
    pub fn output(&self) -> ChartOutput {
        let Some(layout) = self.layout else {
            return ChartOutput::Blank;
        };

        let mut frame = RenderFrame::new(self.viewport);
        let (ox, oy) = layout.area.origin();
        let clip = ClipRect {
            x: ox,
            y: oy,
            width: layout.area.width,
            height: layout.area.height,
        };

        let Ok(x_scale) = layout.time_scale.visible_linear(layout.area.width) else {
            return ChartOutput::Blank;
        };
        let (visible_start, visible_end) = layout.time_scale.visible_range();
        let ticks: Vec<(f64, String)> = year_ticks(visible_start, visible_end)
            .into_iter()
            .map(|(time, year)| (time, year.to_string()))
            .collect();
        push_time_axis_bottom(&mut frame, (ox, oy), layout.area.height, x_scale, &ticks);
        push_value_axis_left(
            &mut frame,
            (ox, oy),
            layout.values,
            self.config.value_tick_count,
        );

        for (idx, series) in self.series.iter().enumerate() {
            let Ok(vertices) =
                project_line_points(series, layout.time_scale, layout.values, layout.area.width)
            else {
                continue;
            };
            let points = vertices
                .into_iter()
                .map(|(x, y)| (ox + x, oy + y))
                .collect();
            frame.polylines.push(
                PolylinePrimitive::new(points, self.config.stroke_width, self.config.palette.color(idx))
                    .clipped_to(clip),
            );
        }

        if let Some(selection) = self.interaction.brush_selection() {
            frame.rects.push(
                RectPrimitive::new(
                    ox + selection.start,
                    oy,
                    selection.width(),
                    layout.area.height,
                    BRUSH_FILL,
                )
                .with_border(BRUSH_BORDER),
            );
        }

        frame.tooltip = self.interaction.tooltip().map(|tooltip| TooltipPrimitive {
            text: tooltip.text.clone(),
            x: tooltip.x,
            y: tooltip.y,
        });
        ChartOutput::Frame(frame)
    }
}

/// Shortest distance from a point to a polyline; a lone vertex counts as a point.
fn polyline_distance(vertices: &[(f64, f64)], x: f64, y: f64) -> Option<f64> {
    match vertices {
        [] => None,
        [(vx, vy)] => Some((x - vx).hypot(y - vy)),
        _ => vertices
            .windows(2)
            .map(|pair| segment_distance(pair[0], pair[1], x, y))
            .min_by_key(|d| OrderedFloat(*d)),
    }
}

fn segment_distance(a: (f64, f64), b: (f64, f64), x: f64, y: f64) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((x - a.0) * dx + (y - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    (x - (a.0 + t * dx)).hypot(y - (a.1 + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_distance_projects_onto_segment() {
        assert_eq!(segment_distance((0.0, 0.0), (10.0, 0.0), 5.0, 3.0), 3.0);
        assert_eq!(segment_distance((0.0, 0.0), (10.0, 0.0), 13.0, 4.0), 5.0);
        assert_eq!(segment_distance((2.0, 2.0), (2.0, 2.0), 5.0, 6.0), 5.0);
    }

    #[test]
    fn polyline_distance_uses_closest_segment() {
        let vertices = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
        assert_eq!(polyline_distance(&vertices, 12.0, 5.0), Some(2.0));
        assert_eq!(polyline_distance(&[], 0.0, 0.0), None);
    }
}
