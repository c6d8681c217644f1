use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, Record, VariableKey};

/// One bar: a region and the selected variable's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub region: String,
    pub value: f64,
}

/// Extracts `variable` from each snapshot record, then keeps the requested
/// regions (an empty filter keeps all).
///
/// Returns nothing when no variable is selected. Output follows input order.
#[must_use]
pub fn shape_bar<'a, I, S>(
    snapshot: I,
    variable: Option<VariableKey>,
    regions: &[S],
) -> Vec<BarDatum>
where
    I: IntoIterator<Item = &'a Record>,
    S: AsRef<str>,
{
    let Some(variable) = variable else {
        return Vec::new();
    };

    snapshot
        .into_iter()
        .map(|record| BarDatum {
            region: record.region.clone(),
            value: record.value(variable),
        })
        .filter(|datum| {
            regions.is_empty() || regions.iter().any(|region| region.as_ref() == datum.region)
        })
        .collect()
}

/// Value-axis domain for bars: always includes zero.
#[must_use]
pub fn bar_value_domain(data: &[BarDatum]) -> (f64, f64) {
    let min = data.iter().map(|d| d.value).fold(f64::INFINITY, f64::min);
    let max = data.iter().map(|d| d.value).fold(f64::NEG_INFINITY, f64::max);
    (min.min(0.0), max.max(0.0))
}

/// Bar rectangle in plot-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Projects bars anchored at the zero baseline.
///
/// Positive values extend up from zero, negative values extend down.
#[must_use]
pub fn project_bars(data: &[BarDatum], band: &BandScale, values: LinearScale) -> Vec<BarGeometry> {
    let zero_y = values.map(0.0);
    data.iter()
        .filter_map(|datum| {
            let x = band.position(&datum.region)?;
            let value_y = values.map(datum.value);
            Some(BarGeometry {
                x,
                y: if datum.value >= 0.0 { value_y } else { zero_y },
                width: band.bandwidth(),
                height: (zero_y - value_y).abs(),
            })
        })
        .collect()
}
