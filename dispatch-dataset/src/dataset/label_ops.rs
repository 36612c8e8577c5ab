use crate::dataset::{BookingStatus, DatasetRow};

/// stamps the binary completion label on every row: 1 for COMPLETED, 0 for
/// either cancellation outcome. no filtering; rows were already restricted to
/// terminal statuses by cleaning.
pub fn create_target(rows: Vec<DatasetRow>) -> Vec<DatasetRow> {
    rows.into_iter()
        .map(|mut row| {
            row.is_completed = Some(u8::from(row.booking_status == BookingStatus::Completed));
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BookingRecord;

    fn mock_row(status: BookingStatus) -> DatasetRow {
        let booking = BookingRecord {
            order_id: String::from("A1"),
            trip_distance: 4.2,
            pickup_latitude: 1.0,
            pickup_longitude: 1.0,
            driver_latitude: Some(1.1),
            driver_longitude: Some(1.1),
            booking_status: status,
            driver_id: Some(String::from("D1")),
            event_timestamp: Some(String::from("2023-01-01T10:00:00")),
        };
        DatasetRow::new(&booking, None)
    }

    #[test]
    fn test_target_is_one_iff_completed() {
        let rows = create_target(vec![
            mock_row(BookingStatus::Completed),
            mock_row(BookingStatus::CustomerCancelled),
            mock_row(BookingStatus::DriverCancelled),
        ]);
        let labels: Vec<u8> = rows.iter().filter_map(|row| row.is_completed).collect();
        assert_eq!(labels, vec![1, 0, 0]);
        for row in rows {
            assert_eq!(
                row.is_completed == Some(1),
                row.booking_status == BookingStatus::Completed
            );
        }
    }
}
