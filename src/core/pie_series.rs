use std::cmp::Reverse;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Record, VariableKey};

/// One wedge: a region and the selected variable's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieDatum {
    pub region: String,
    pub value: f64,
}

/// Slice of the descending ranking a pie chart shows.
///
/// The default skips rank 1, which in the bundled data is always the
/// nationwide aggregate, and shows ranks 2 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankWindow {
    pub skip: usize,
    pub take: usize,
}

impl Default for RankWindow {
    fn default() -> Self {
        Self { skip: 1, take: 5 }
    }
}

/// Ranks 2..=6 of the snapshot by descending `variable` value.
#[must_use]
pub fn shape_pie<'a, I>(snapshot: I, variable: Option<VariableKey>) -> Vec<PieDatum>
where
    I: IntoIterator<Item = &'a Record>,
{
    shape_pie_window(snapshot, variable, RankWindow::default())
}

/// Sorts descending (stable, ties keep input order) and returns `window`.
///
/// Short inputs yield fewer entries; nothing is padded.
#[must_use]
pub fn shape_pie_window<'a, I>(
    snapshot: I,
    variable: Option<VariableKey>,
    window: RankWindow,
) -> Vec<PieDatum>
where
    I: IntoIterator<Item = &'a Record>,
{
    let Some(variable) = variable else {
        return Vec::new();
    };

    let mut ranked: Vec<PieDatum> = snapshot
        .into_iter()
        .map(|record| PieDatum {
            region: record.region.clone(),
            value: record.value(variable),
        })
        .collect();
    ranked.sort_by_key(|datum| Reverse(OrderedFloat(datum.value)));

    ranked
        .into_iter()
        .skip(window.skip)
        .take(window.take)
        .collect()
}

/// Angular extent of one wedge, radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    #[must_use]
    pub fn mid_angle(self) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) / 2.0
    }

    /// Labels for wedges whose middle lies on the right half anchor to the right.
    #[must_use]
    pub fn label_on_right(self) -> bool {
        self.mid_angle() < PI
    }

    #[must_use]
    pub fn contains_angle(self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Lays out wedges proportional to value, largest first.
///
/// Non-positive values get zero-width wedges. The returned slices are in
/// `data` order even though angular order follows descending value.
#[must_use]
pub fn pie_layout(data: &[PieDatum]) -> Vec<PieSlice> {
    let sum: f64 = data.iter().map(|d| d.value).filter(|v| *v > 0.0).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };

    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by_key(|&idx| Reverse(OrderedFloat(data[idx].value)));

    let mut slices = vec![
        PieSlice {
            start_angle: 0.0,
            end_angle: 0.0,
        };
        data.len()
    ];
    let mut angle = 0.0;
    for idx in order {
        let value = data[idx].value;
        let sweep = if value > 0.0 { value * k } else { 0.0 };
        slices[idx] = PieSlice {
            start_angle: angle,
            end_angle: angle + sweep,
        };
        angle += sweep;
    }
    slices
}

/// Centroid of an annular sector, relative to the pie center.
#[must_use]
pub fn arc_centroid(slice: PieSlice, inner_radius: f64, outer_radius: f64) -> (f64, f64) {
    let radius = (inner_radius + outer_radius) / 2.0;
    let angle = slice.mid_angle() - FRAC_PI_2;
    (angle.cos() * radius, angle.sin() * radius)
}

/// Clockwise-from-12-o'clock angle of a point relative to the pie center,
/// in `[0, 2π)`. Screen y grows downward.
#[must_use]
pub fn pointer_angle(dx: f64, dy: f64) -> f64 {
    let angle = dx.atan2(-dy);
    if angle < 0.0 { angle + TAU } else { angle }
}
