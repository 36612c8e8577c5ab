//! end-to-end run of the dataset pipeline over small raw logs written to a
//! temp directory: read, clean, merge, label, feature transforms, write.
use dispatch_dataset::dataset::clean_ops::{clean_bookings, clean_participants};
use dispatch_dataset::dataset::label_ops::create_target;
use dispatch_dataset::dataset::merge_ops::merge_dataset;
use dispatch_dataset::dataset::{BookingStatus, ParticipantStatus};
use dispatch_dataset::feature::{
    driver_distance_to_pickup, driver_historical_completed_bookings, hour_of_day,
};
use dispatch_dataset::store::DatasetStore;
use std::path::PathBuf;

const BOOKING_CSV: &str = "\
order_id,trip_distance,pickup_latitude,pickup_longitude,driver_latitude,driver_longitude,booking_status,driver_id,event_timestamp
A1,4.2,-6.121,106.774,-6.119,106.781,COMPLETED,D1,2023-01-01T10:00:00
A1,4.2,-6.121,106.774,-6.119,106.781,COMPLETED,D1,2023-01-01T10:00:00
A2,2.0,-6.200,106.800,-6.210,106.790,DRIVER_CANCELLED,D1,2023-01-02T18:30:00
A3,3.1,-6.150,106.750,-6.140,106.760,COMPLETED,D1,2023-01-03T08:15:00
A4,1.5,-6.180,106.820,,,CUSTOMER_CANCELLED,,2023-01-04T12:00:00
A5,2.7,-6.190,106.810,-6.195,106.805,DRIVER_FOUND,D2,2023-01-05T09:00:00
A6,5.0,-6.170,106.770,-6.165,106.775,COMPLETED,D2,not-a-timestamp
";

const PARTICIPANT_CSV: &str = "\
order_id,driver_id,participant_status,event_timestamp,experiment_key
A1,D1,ACCEPTED,2023-01-01T09:59:00,exp-a
A2,D1,ACCEPTED,2023-01-02T18:29:00,exp-a
A3,D1,ACCEPTED,2023-01-03T08:14:00,exp-a
A3,D9,REJECTED,2023-01-03T08:14:30,exp-a
A6,D2,IGNORED,2023-01-06T09:00:00,exp-b
A6,D2,ACCEPTED,2023-01-06T09:00:10,exp-b
";

fn mock_store(case: &str) -> (DatasetStore, PathBuf) {
    let root = std::env::temp_dir().join(format!(
        "dispatch-dataset-pipeline-{}-{}",
        std::process::id(),
        case
    ));
    let raw_dir = root.join("raw");
    std::fs::create_dir_all(&raw_dir).expect("test invariant failed: could not build raw dir");
    std::fs::write(raw_dir.join("booking_log.csv"), BOOKING_CSV)
        .expect("test invariant failed: could not write booking log");
    std::fs::write(raw_dir.join("participant_log.csv"), PARTICIPANT_CSV)
        .expect("test invariant failed: could not write participant log");
    (DatasetStore::new(root.join("raw"), root.join("processed")), root)
}

#[test]
fn test_full_pipeline_builds_expected_dataset() {
    let (store, root) = mock_store("full");

    let bookings = clean_bookings(store.read_bookings("booking_log.csv").expect("read bookings"));
    let participants = clean_participants(
        store
            .read_participants("participant_log.csv")
            .expect("read participants"),
    );

    // duplicate A1 collapsed, DRIVER_FOUND A5 dropped; A6 has a garbage (but
    // present) timestamp and stays
    assert_eq!(bookings.len(), 5);
    // IGNORED decision on A6 dropped
    assert_eq!(participants.len(), 5);

    let dataset = create_target(merge_dataset(bookings, participants));
    // A4 (customer cancelled, no participant) gone; A3 fans out to 2 rows
    assert_eq!(dataset.len(), 5);
    assert!(dataset
        .iter()
        .all(|row| row.booking_status.is_terminal() && row.is_completed.is_some()));
    assert!(!dataset.iter().any(|row| {
        row.booking_status == BookingStatus::CustomerCancelled && row.participant_status.is_none()
    }));
    let a3_decisions: Vec<&ParticipantStatus> = dataset
        .iter()
        .filter(|row| row.order_id == "A3")
        .filter_map(|row| row.participant_status.as_ref())
        .collect();
    assert_eq!(
        a3_decisions,
        vec![&ParticipantStatus::Accepted, &ParticipantStatus::Rejected]
    );

    let dataset = hour_of_day(driver_distance_to_pickup(dataset));
    let dataset = driver_historical_completed_bookings(dataset).expect("labeled rows rejected");

    // output is sorted by timestamp string; the garbage timestamp sorts
    // after the ISO ones, and D2's only row has no history
    let ordered: Vec<(&str, u64)> = dataset
        .iter()
        .map(|row| {
            (
                row.order_id.as_str(),
                row.historical_trip_count.expect("history column not set"),
            )
        })
        .collect();
    // D1's chronological outcomes are [1, 0, 1, 1] (A3 fans out to two rows,
    // each a separate observation), so histories run [0, 1, 1, 2]
    assert_eq!(
        ordered,
        vec![("A1", 0), ("A2", 1), ("A3", 1), ("A3", 2), ("A6", 0)]
    );
    assert!(dataset.iter().all(|row| row.driver_distance.is_some()));
    // hour feature: parseable timestamps get hours, the garbage one does not
    let a2 = dataset
        .iter()
        .find(|row| row.order_id == "A2")
        .expect("A2 missing");
    assert_eq!(a2.event_hour, Some(18));
    let a6 = dataset
        .iter()
        .find(|row| row.order_id == "A6")
        .expect("A6 missing");
    assert_eq!(a6.event_hour, None);

    store
        .write_dataset("dataset.csv", &dataset, "is_completed")
        .expect("failed writing dataset");
    let written = std::fs::read_to_string(root.join("processed").join("dataset.csv"))
        .expect("could not read dataset back");
    assert_eq!(written.lines().count(), dataset.len() + 1);
    let header = written.lines().next().expect("no header");
    assert!(header.starts_with("order_id,"));
    assert!(header.contains(",is_completed,"));
    assert!(header.ends_with(",historical_trip_count"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn test_pipeline_tolerates_empty_logs() {
    let (store, root) = mock_store("empty");
    std::fs::write(
        root.join("raw").join("booking_log.csv"),
        BOOKING_CSV.lines().next().map(|h| format!("{h}\n")).expect("header"),
    )
    .expect("test invariant failed: could not truncate booking log");
    std::fs::write(
        root.join("raw").join("participant_log.csv"),
        PARTICIPANT_CSV.lines().next().map(|h| format!("{h}\n")).expect("header"),
    )
    .expect("test invariant failed: could not truncate participant log");

    let bookings = clean_bookings(store.read_bookings("booking_log.csv").expect("read bookings"));
    let participants = clean_participants(
        store
            .read_participants("participant_log.csv")
            .expect("read participants"),
    );
    let dataset = create_target(merge_dataset(bookings, participants));
    let dataset = driver_historical_completed_bookings(hour_of_day(driver_distance_to_pickup(
        dataset,
    )))
    .expect("empty dataset rejected");
    assert!(dataset.is_empty());

    store
        .write_dataset("dataset.csv", &dataset, "is_completed")
        .expect("failed writing empty dataset");

    let _ = std::fs::remove_dir_all(root);
}
