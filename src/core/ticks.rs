use chrono::{Datelike, NaiveDate};

use crate::core::types::{date_to_unix_seconds, unix_seconds_to_date};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

/// Upper bound on the requested tick count; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 100;

/// "Nice" tick values covering `[start, stop]`, roughly `count` of them.
///
/// Steps are 1, 2 or 5 times a power of ten. Ticks come back ascending
/// regardless of argument order.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (lo, hi) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };

    let step = (hi - lo) / count.min(MAX_TICK_COUNT) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let mut ticks = Vec::new();
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let first = (lo * inc).ceil() as i64;
        let last = (hi * inc).floor() as i64;
        for i in first..=last {
            ticks.push(i as f64 / inc);
        }
    } else {
        let inc = 10f64.powf(power) * factor;
        let first = (lo / inc).ceil() as i64;
        let last = (hi / inc).floor() as i64;
        for i in first..=last {
            ticks.push(i as f64 * inc);
        }
    }
    ticks
}

/// January-first ticks inside the unix-seconds window, as `(time, year)`.
#[must_use]
pub fn year_ticks(start_seconds: f64, end_seconds: f64) -> Vec<(f64, i32)> {
    let (Some(start), Some(end)) = (
        unix_seconds_to_date(start_seconds.min(end_seconds)),
        unix_seconds_to_date(start_seconds.max(end_seconds)),
    ) else {
        return Vec::new();
    };

    let (lo, hi) = (
        start_seconds.min(end_seconds),
        start_seconds.max(end_seconds),
    );
    (start.year()..=end.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1).map(|day| (day, year)))
        .map(|(day, year)| (date_to_unix_seconds(day), year))
        .filter(|(time, _)| *time >= lo && *time <= hi)
        .collect()
}

/// Axis label with thousands separators; fractional values keep their digits.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value.fract() != 0.0 {
        let rounded = (value * 1e6).round() / 1e6;
        return rounded.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('−');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Raw value as shown in tooltips: integral values without a trailing `.0`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
