use std::collections::HashMap;

use crate::dataset::{DatasetError, DatasetRow};

/// adds `historical_trip_count`: for each row, the number of bookings the
/// row's driver completed strictly before the row's event.
///
/// rows are stable-sorted by event timestamp (ISO strings order
/// chronologically; ties keep their input order), then each driver's
/// completion counter is read before the row's own label is folded in. the
/// current outcome therefore never reaches its own feature value, and drivers
/// never see each other's history. rows without a driver take 0 and count
/// toward nobody.
///
/// requires the completion label on every row. the returned rows stay in
/// timestamp-sorted order.
pub fn driver_historical_completed_bookings(
    rows: Vec<DatasetRow>,
) -> Result<Vec<DatasetRow>, DatasetError> {
    let mut rows = rows;
    rows.sort_by(|a, b| a.event_timestamp.cmp(&b.event_timestamp));

    let mut completions: HashMap<String, u64> = HashMap::new();
    for row in rows.iter_mut() {
        let label = row.is_completed.ok_or(DatasetError::MissingTargetError)?;
        match &row.driver_id {
            None => row.historical_trip_count = Some(0),
            Some(driver_id) => {
                let completed_before = completions.entry(driver_id.clone()).or_insert(0);
                row.historical_trip_count = Some(*completed_before);
                *completed_before += u64::from(label);
            }
        }
    }
    Ok(rows)
}
