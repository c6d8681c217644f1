use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::types::date_to_unix_seconds;
use crate::core::{LinearScale, Record, TimeScale, VariableKey};
use crate::error::DashboardResult;

/// Where line-chart point values come from.
///
/// `PinnedToBirth` always plots births and ignores the line chart's own
/// variable drop-down. `FollowSelection` plots the chosen variable like the
/// bar and pie charts do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineValuePolicy {
    #[default]
    PinnedToBirth,
    FollowSelection,
}

impl LineValuePolicy {
    /// Field to plot, or `None` when nothing can be plotted.
    #[must_use]
    pub fn resolve(self, selected: Option<VariableKey>) -> Option<VariableKey> {
        match self {
            Self::PinnedToBirth => Some(VariableKey::Birth),
            Self::FollowSelection => selected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Full time series for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub region: String,
    pub points: Vec<LinePoint>,
}

/// One series per requested region, in request order, with points sorted
/// by date.
///
/// Filters by region only, never by date. An empty region set, or a policy
/// that resolves to no variable, yields no series.
#[must_use]
pub fn shape_line<S: AsRef<str>>(
    records: &[Record],
    regions: &[S],
    variable: Option<VariableKey>,
    policy: LineValuePolicy,
) -> Vec<LineSeries> {
    let Some(field) = policy.resolve(variable) else {
        return Vec::new();
    };

    let mut series: Vec<LineSeries> = Vec::with_capacity(regions.len());
    for region in regions {
        let region = region.as_ref();
        if series.iter().any(|existing| existing.region == region) {
            continue;
        }

        let mut points: Vec<LinePoint> = records
            .iter()
            .filter(|record| record.region == region)
            .map(|record| LinePoint {
                date: record.date,
                value: record.value(field),
            })
            .collect();
        points.sort_by_key(|point| point.date);

        series.push(LineSeries {
            region: region.to_owned(),
            points,
        });
    }
    series
}

/// Value-axis domain for lines: `[0, max]` over every point.
#[must_use]
pub fn line_value_domain(series: &[LineSeries]) -> (f64, f64) {
    let max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.value))
        .fold(f64::NEG_INFINITY, f64::max);
    (0.0, if max.is_finite() { max } else { 0.0 })
}

/// Index of the point whose date is closest to `time` (unix seconds).
///
/// `points` must be sorted by date. Uses a left bisection, then compares
/// the neighbors on both sides; ties go to the earlier point.
#[must_use]
pub fn nearest_point_index(points: &[LinePoint], time: f64) -> Option<usize> {
    if points.is_empty() || !time.is_finite() {
        return None;
    }

    let right = points.partition_point(|point| date_to_unix_seconds(point.date) < time);
    if right == 0 {
        return Some(0);
    }
    if right == points.len() {
        return Some(points.len() - 1);
    }

    let left = right - 1;
    let left_gap = time - date_to_unix_seconds(points[left].date);
    let right_gap = date_to_unix_seconds(points[right].date) - time;
    Some(if left_gap > right_gap { right } else { left })
}

/// Projects a series into plot-area pixel vertices.
pub fn project_line_points(
    series: &LineSeries,
    time_scale: TimeScale,
    values: LinearScale,
    plot_width: f64,
) -> DashboardResult<Vec<(f64, f64)>> {
    let x_scale = time_scale.visible_linear(plot_width)?;
    Ok(series
        .points
        .iter()
        .map(|point| {
            (
                x_scale.map(date_to_unix_seconds(point.date)),
                values.map(point.value),
            )
        })
        .collect())
}
