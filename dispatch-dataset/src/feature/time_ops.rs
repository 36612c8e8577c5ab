use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

use crate::dataset::DatasetRow;

/// naive timestamp formats accepted after RFC 3339 fails, tried in order.
/// %.f tolerates both present and absent fractional seconds.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// extracts the hour of day (0-23) from an ISO-8601 timestamp string.
///
/// event logs carry a mix of offset-qualified and naive timestamps plus the
/// occasional garbage value; an unparseable input yields None rather than an
/// error so one bad row cannot abort a batch.
pub fn robust_hour_of_iso_date(raw: &str) -> Option<u32> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.hour());
    }
    for format in NAIVE_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.hour());
        }
    }
    // date-only values parse to midnight
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(|_| 0)
}

/// adds `event_hour` from each row's event timestamp; unparseable or missing
/// timestamps leave the column unset for that row.
pub fn hour_of_day(rows: Vec<DatasetRow>) -> Vec<DatasetRow> {
    rows.into_iter()
        .map(|mut row| {
            let hour = row
                .event_timestamp
                .as_deref()
                .and_then(robust_hour_of_iso_date);
            row.event_hour = hour;
            row
        })
        .collect()
}
