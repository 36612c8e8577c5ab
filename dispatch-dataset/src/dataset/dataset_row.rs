use serde::{Deserialize, Serialize};

use crate::dataset::{BookingRecord, BookingStatus, ParticipantStatus};

/// one row of the training dataset: a cleaned booking joined with at most one
/// participant decision, plus the derived label and feature columns.
///
/// derived columns start out unset and are filled exactly once by their
/// transform. a booking matched by several participant decisions appears once
/// per decision, so downstream consumers must tolerate one-to-many expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub order_id: String,
    pub trip_distance: f64,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub driver_latitude: Option<f64>,
    pub driver_longitude: Option<f64>,
    pub booking_status: BookingStatus,
    pub driver_id: Option<String>,
    pub event_timestamp: Option<String>,
    /// decision joined from the participant log, None when the booking had no
    /// decided participant
    pub participant_status: Option<ParticipantStatus>,
    /// binary completion label, written under the configured target name
    pub is_completed: Option<u8>,
    /// hour of day 0-23 extracted from event_timestamp, None when unparseable
    pub event_hour: Option<u32>,
    /// great-circle driver-to-pickup distance in km, NaN when the driver
    /// position is unknown
    pub driver_distance: Option<f64>,
    /// bookings this driver completed strictly before this event
    pub historical_trip_count: Option<u64>,
}

impl DatasetRow {
    /// lifts a cleaned booking into a dataset row carrying the joined
    /// participant decision. all derived columns start unset.
    pub fn new(booking: &BookingRecord, participant_status: Option<ParticipantStatus>) -> DatasetRow {
        DatasetRow {
            order_id: booking.order_id.clone(),
            trip_distance: booking.trip_distance,
            pickup_latitude: booking.pickup_latitude,
            pickup_longitude: booking.pickup_longitude,
            driver_latitude: booking.driver_latitude,
            driver_longitude: booking.driver_longitude,
            booking_status: booking.booking_status.clone(),
            driver_id: booking.driver_id.clone(),
            event_timestamp: booking.event_timestamp.clone(),
            participant_status,
            is_completed: None,
            event_hour: None,
            driver_distance: None,
            historical_trip_count: None,
        }
    }
}
