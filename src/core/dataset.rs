use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::debug;

use crate::core::region::canonical_region;
use crate::core::Record;
use crate::error::{DashboardError, DashboardResult};

const BUNDLED_JSON: &str = include_str!("../../data/vital_statistics.json");

/// Row shape of the dataset file.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Birth")]
    birth: f64,
    #[serde(rename = "Death")]
    death: f64,
    #[serde(rename = "Divorce")]
    divorce: f64,
    #[serde(rename = "Marriage")]
    marriage: f64,
    #[serde(rename = "Natural_growth")]
    natural_growth: f64,
}

/// Read-only vital-statistics records, loaded once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from in-memory records.
    ///
    /// Applies the same checks as JSON loading: region labels are
    /// canonicalized and every value must be finite.
    pub fn new(mut records: Vec<Record>) -> DashboardResult<Self> {
        for (index, record) in records.iter_mut().enumerate() {
            check_finite(
                index,
                [
                    ("Birth", record.birth),
                    ("Death", record.death),
                    ("Divorce", record.divorce),
                    ("Marriage", record.marriage),
                    ("Natural_growth", record.natural_growth),
                ],
            )?;
            record.region = canonical_region(&record.region).to_owned();
        }
        Ok(Self { records })
    }

    /// Loads the dataset compiled into the crate.
    pub fn bundled() -> DashboardResult<Self> {
        Self::from_json_str(BUNDLED_JSON)
    }

    /// Parses a JSON array of `{Date, Region, Birth, ...}` rows.
    ///
    /// Region labels are canonicalized and dates truncated to the day.
    pub fn from_json_str(raw: &str) -> DashboardResult<Self> {
        let rows: Vec<RawRecord> = serde_json::from_str(raw)
            .map_err(|err| DashboardError::Dataset(format!("malformed json: {err}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let date = parse_day(&row.date).ok_or_else(|| {
                DashboardError::Dataset(format!("row {index}: unparseable date `{}`", row.date))
            })?;
            check_finite(
                index,
                [
                    ("Birth", row.birth),
                    ("Death", row.death),
                    ("Divorce", row.divorce),
                    ("Marriage", row.marriage),
                    ("Natural_growth", row.natural_growth),
                ],
            )?;

            records.push(Record {
                date,
                region: canonical_region(&row.region).to_owned(),
                birth: row.birth,
                death: row.death,
                divorce: row.divorce,
                marriage: row.marriage,
                natural_growth: row.natural_growth,
            });
        }

        debug!(count = records.len(), "dataset loaded");
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_finite(index: usize, fields: [(&str, f64); 5]) -> DashboardResult<()> {
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(DashboardError::Dataset(format!(
                "row {index}: `{field}` must be finite"
            )));
        }
    }
    Ok(())
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|time| time.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parser_accepts_date_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2023, 12, 1);
        assert_eq!(parse_day("2023-12-01"), expected);
        assert_eq!(parse_day("2023-12-01T00:00:00"), expected);
        assert_eq!(parse_day("2023-12-01T15:30:00Z"), expected);
        assert_eq!(parse_day("12/01/2023"), None);
    }

    #[test]
    fn bundled_dataset_parses() {
        let dataset = Dataset::bundled().expect("bundled dataset");
        assert_eq!(dataset.len(), 18 * 24);
        assert!(dataset.records().iter().all(|r| r.region != "서울"));
    }

    #[test]
    fn regions_are_canonicalized_on_load() {
        let dataset = Dataset::from_json_str(
            r#"[{"Date":"2023-12-01","Region":"부산","Birth":1,"Death":2,"Divorce":3,"Marriage":4,"Natural_growth":-1},
                {"Date":"2023-12-01","Region":"Busan","Birth":5,"Death":6,"Divorce":7,"Marriage":8,"Natural_growth":-1}]"#,
        )
        .expect("dataset");
        assert!(dataset.records().iter().all(|r| r.region == "Busan"));
        assert_eq!(dataset.records()[1].marriage, 8.0);
    }

    #[test]
    fn in_memory_records_are_validated_like_json_rows() {
        let record = |region: &str, birth: f64| Record {
            date: NaiveDate::from_ymd_opt(2023, 12, 1).expect("date"),
            region: region.to_owned(),
            birth,
            death: 1.0,
            divorce: 1.0,
            marriage: 1.0,
            natural_growth: 0.0,
        };

        let dataset = Dataset::new(vec![record("서울", 3.0), record("Busan", 4.0)])
            .expect("dataset");
        let regions: Vec<&str> = dataset.records().iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["Seoul", "Busan"]);

        assert!(matches!(
            Dataset::new(vec![record("Seoul", f64::NAN)]),
            Err(DashboardError::Dataset(_))
        ));
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let bad_date = r#"[{"Date":"yesterday","Region":"서울","Birth":1,"Death":2,"Divorce":3,"Marriage":4,"Natural_growth":-1}]"#;
        assert!(matches!(
            Dataset::from_json_str(bad_date),
            Err(DashboardError::Dataset(_))
        ));
        assert!(matches!(
            Dataset::from_json_str("[{"),
            Err(DashboardError::Dataset(_))
        ));
    }
}
