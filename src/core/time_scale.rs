use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::types::date_to_unix_seconds;
use crate::core::LinearScale;
use crate::error::{DashboardError, DashboardResult};

/// Span centered on the date when every date in the extent is identical.
const SINGLE_DAY_SPAN_SECONDS: f64 = 86_400.0;

/// Time axis model with separate full and visible ranges.
///
/// `full_*` tracks the fitted data extent in unix seconds.
/// `visible_*` follows brush zooms and resets back to the full extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    /// Creates a scale with matching full and visible ranges.
    pub fn new(time_start: f64, time_end: f64) -> DashboardResult<Self> {
        let normalized = normalize_range(time_start, time_end, SINGLE_DAY_SPAN_SECONDS)?;
        Ok(Self {
            full_start: normalized.0,
            full_end: normalized.1,
            visible_start: normalized.0,
            visible_end: normalized.1,
        })
    }

    /// Fits the full range to the extent of `dates`.
    ///
    /// Returns `Ok(None)` for an empty iterator.
    pub fn from_dates<I>(dates: I) -> DashboardResult<Option<Self>>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut extent: Option<(NaiveDate, NaiveDate)> = None;
        for date in dates {
            extent = Some(match extent {
                Some((min, max)) => (min.min(date), max.max(date)),
                None => (date, date),
            });
        }

        extent
            .map(|(min, max)| Self::new(date_to_unix_seconds(min), date_to_unix_seconds(max)))
            .transpose()
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.visible_start != self.full_start || self.visible_end != self.full_end
    }

    /// Overrides the visible range without modifying the full fitted range.
    pub fn set_visible_range(&mut self, start: f64, end: f64) -> DashboardResult<()> {
        let normalized = normalize_range(start, end, 1e-9)?;
        self.visible_start = normalized.0;
        self.visible_end = normalized.1;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start = self.full_start;
        self.visible_end = self.full_end;
    }

    /// Linear mapping of the visible range onto `[0, plot_width]`.
    pub fn visible_linear(self, plot_width: f64) -> DashboardResult<LinearScale> {
        LinearScale::new(
            (self.visible_start, self.visible_end),
            (0.0, plot_width),
        )
    }

    pub fn time_to_pixel(self, time: f64, plot_width: f64) -> DashboardResult<f64> {
        if !time.is_finite() {
            return Err(DashboardError::InvalidData("time must be finite".to_owned()));
        }
        Ok(self.visible_linear(plot_width)?.map(time))
    }

    pub fn pixel_to_time(self, pixel: f64, plot_width: f64) -> DashboardResult<f64> {
        if !pixel.is_finite() {
            return Err(DashboardError::InvalidData("pixel must be finite".to_owned()));
        }
        Ok(self.visible_linear(plot_width)?.invert(pixel))
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> DashboardResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(DashboardError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
