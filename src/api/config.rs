use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ticks::MAX_TICK_COUNT;
use crate::core::{LineValuePolicy, RankWindow};
use crate::error::{DashboardError, DashboardResult};
use crate::render::Palette;

const VALUE_TICK_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=MAX_TICK_COUNT;

/// Space reserved around the plot area for axes and labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    fn validate(self, chart: &str) -> DashboardResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::Config(format!(
                    "{chart} margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Tooltip placement relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl TooltipOffset {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub margins: ChartMargins,
    pub band_padding: f64,
    pub label_rotation_deg: f64,
    pub value_tick_count: usize,
    pub palette: Palette,
    pub tooltip_offset: TooltipOffset,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            margins: ChartMargins::new(50.0, 50.0, 90.0, 50.0),
            band_padding: 0.1,
            label_rotation_deg: -45.0,
            value_tick_count: 10,
            palette: Palette::Paired,
            tooltip_offset: TooltipOffset::new(10.0, -10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartConfig {
    pub margins: ChartMargins,
    pub rank_window: RankWindow,
    pub palette: Palette,
    pub tooltip_offset: TooltipOffset,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            margins: ChartMargins::uniform(30.0),
            rank_window: RankWindow::default(),
            palette: Palette::Set2,
            tooltip_offset: TooltipOffset::new(0.0, -30.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub margins: ChartMargins,
    pub value_policy: LineValuePolicy,
    pub value_tick_count: usize,
    pub stroke_width: f64,
    pub hover_tolerance_px: f64,
    pub palette: Palette,
    pub tooltip_offset: TooltipOffset,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            margins: ChartMargins::new(20.0, 30.0, 50.0, 50.0),
            value_policy: LineValuePolicy::default(),
            value_tick_count: 10,
            stroke_width: 1.5,
            hover_tolerance_px: 6.0,
            palette: Palette::Category10,
            tooltip_offset: TooltipOffset::new(5.0, -120.0),
        }
    }
}

/// Dashboard-wide chart configuration.
///
/// Serializable so hosts can ship a JSON file; missing fields fall back to
/// the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub bar: BarChartConfig,
    pub pie: PieChartConfig,
    pub line: LineChartConfig,
}

impl DashboardConfig {
    #[must_use]
    pub fn with_line_value_policy(mut self, policy: LineValuePolicy) -> Self {
        self.line.value_policy = policy;
        self
    }

    pub fn from_json_str(raw: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| DashboardError::Config(format!("malformed json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.bar.margins.validate("bar")?;
        self.pie.margins.validate("pie")?;
        self.line.margins.validate("line")?;

        if !self.bar.band_padding.is_finite() || !(0.0..1.0).contains(&self.bar.band_padding) {
            return Err(DashboardError::Config(
                "bar band padding must be in [0, 1)".to_owned(),
            ));
        }
        if !self.bar.label_rotation_deg.is_finite() {
            return Err(DashboardError::Config(
                "bar label rotation must be finite".to_owned(),
            ));
        }
        if !self.line.stroke_width.is_finite() || self.line.stroke_width <= 0.0 {
            return Err(DashboardError::Config(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.line.hover_tolerance_px.is_finite() || self.line.hover_tolerance_px < 0.0 {
            return Err(DashboardError::Config(
                "line hover tolerance must be finite and >= 0".to_owned(),
            ));
        }
        for (chart, count) in [
            ("bar", self.bar.value_tick_count),
            ("line", self.line.value_tick_count),
        ] {
            if !VALUE_TICK_COUNT_RANGE.contains(&count) {
                return Err(DashboardError::Config(format!(
                    "{chart} value tick count must be in {}..={}",
                    VALUE_TICK_COUNT_RANGE.start(),
                    VALUE_TICK_COUNT_RANGE.end()
                )));
            }
        }
        for offset in [
            self.bar.tooltip_offset,
            self.pie.tooltip_offset,
            self.line.tooltip_offset,
        ] {
            if !offset.dx.is_finite() || !offset.dy.is_finite() {
                return Err(DashboardError::Config(
                    "tooltip offsets must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
