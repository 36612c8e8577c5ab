use std::collections::HashSet;

use ordered_float::OrderedFloat;

use crate::dataset::{BookingRecord, BookingStatus, ParticipantRecord};

/// identity of a booking event for deduplication. the log restates a booking
/// whenever unrelated attributes change, so sameness is defined over this
/// tuple rather than the whole row.
#[derive(Debug, PartialEq, Eq, Hash)]
struct BookingKey {
    order_id: String,
    trip_distance: OrderedFloat<f64>,
    pickup_latitude: OrderedFloat<f64>,
    pickup_longitude: OrderedFloat<f64>,
    booking_status: BookingStatus,
    driver_id: Option<String>,
}

impl From<&BookingRecord> for BookingKey {
    fn from(record: &BookingRecord) -> Self {
        BookingKey {
            order_id: record.order_id.clone(),
            trip_distance: OrderedFloat(record.trip_distance),
            pickup_latitude: OrderedFloat(record.pickup_latitude),
            pickup_longitude: OrderedFloat(record.pickup_longitude),
            booking_status: record.booking_status.clone(),
            driver_id: record.driver_id.clone(),
        }
    }
}

/// reduces the raw booking log to decided bookings: one representative per
/// booking identity, terminal statuses only, and a present event timestamp
/// (required for downstream temporal ordering).
///
/// keeps the first row of each duplicate group. idempotent.
pub fn clean_bookings(bookings: Vec<BookingRecord>) -> Vec<BookingRecord> {
    let incoming = bookings.len();
    let mut seen: HashSet<BookingKey> = HashSet::with_capacity(incoming);
    let cleaned: Vec<BookingRecord> = bookings
        .into_iter()
        .filter(|b| seen.insert(BookingKey::from(b)))
        .filter(|b| b.booking_status.is_terminal())
        .filter(|b| b.event_timestamp.is_some())
        .collect();
    log::debug!(
        "cleaned booking log: {} of {} rows retained",
        cleaned.len(),
        incoming
    );
    cleaned
}

/// reduces the raw participant log to decided offers: fully duplicate rows
/// collapse to one, and only ACCEPTED / REJECTED decisions are retained.
pub fn clean_participants(participants: Vec<ParticipantRecord>) -> Vec<ParticipantRecord> {
    let incoming = participants.len();
    let mut seen: HashSet<ParticipantRecord> = HashSet::with_capacity(incoming);
    let cleaned: Vec<ParticipantRecord> = participants
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .filter(|p| p.participant_status.is_decision())
        .collect();
    log::debug!(
        "cleaned participant log: {} of {} rows retained",
        cleaned.len(),
        incoming
    );
    cleaned
}
