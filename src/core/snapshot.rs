use crate::core::Record;

/// Returns every record dated on the most recent day in `records`.
///
/// Records keep their input order. Dates are calendar days, so two records
/// are on the same date exactly when their `NaiveDate`s are equal.
#[must_use]
pub fn latest_snapshot(records: &[Record]) -> Vec<&Record> {
    let Some(latest) = records.iter().map(|record| record.date).max() else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| record.date == latest)
        .collect()
}
