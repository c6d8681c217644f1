use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::variable::VariableKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One regional observation.
///
/// `region` always holds the canonical display name; dataset loading
/// translates native labels before records are constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub region: String,
    pub birth: f64,
    pub death: f64,
    pub divorce: f64,
    pub marriage: f64,
    pub natural_growth: f64,
}

impl Record {
    #[must_use]
    pub fn value(&self, key: VariableKey) -> f64 {
        match key {
            VariableKey::Birth => self.birth,
            VariableKey::Death => self.death,
            VariableKey::Divorce => self.divorce,
            VariableKey::Marriage => self.marriage,
        }
    }
}

/// Midnight-UTC unix seconds for a calendar day.
#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Calendar day containing the given unix time, if representable.
#[must_use]
pub fn unix_seconds_to_date(seconds: f64) -> Option<NaiveDate> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp(seconds.floor() as i64, 0).map(|time| time.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_seconds_round_trip_to_same_day() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 1).expect("date");
        let seconds = date_to_unix_seconds(date);
        assert_eq!(unix_seconds_to_date(seconds), Some(date));
        assert_eq!(unix_seconds_to_date(seconds + 3_600.0), Some(date));
    }

    #[test]
    fn non_finite_seconds_have_no_date() {
        assert_eq!(unix_seconds_to_date(f64::NAN), None);
    }
}
