use indexmap::IndexMap;

use crate::error::{DashboardError, DashboardResult};

/// Continuous domain → pixel range mapping.
///
/// A degenerate domain (`start == end`) maps every value to the middle of
/// the range instead of failing, so single-valued charts still draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> DashboardResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(DashboardError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(DashboardError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Evenly spaced bands for categorical axes.
///
/// Inner and outer padding share one ratio and bands are centered in the
/// range. Duplicate categories collapse onto the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    index: IndexMap<String, usize>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(DashboardError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(DashboardError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }

        let mut index = IndexMap::new();
        for category in categories {
            let next = index.len();
            index.entry(category.into()).or_insert(next);
        }

        let count = index.len() as f64;
        let (range_start, range_end) = range;
        let step = (range_end - range_start) / (count - padding + padding * 2.0).max(1.0);
        let start = range_start + (range_end - range_start - step * (count - padding)) * 0.5;

        Ok(Self {
            index,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.index
            .get(category)
            .map(|slot| self.start + self.step * (*slot as f64))
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
