use serde::{Deserialize, Serialize};

/// outcome recorded for a booking in the raw log. statuses round-trip through
/// their upstream wire strings; values this crate does not model are carried
/// in [BookingStatus::Other] rather than failing the read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Completed,
    CustomerCancelled,
    DriverCancelled,
    DriverFound,
    Other(String),
}

impl BookingStatus {
    /// true for statuses describing a decided trip outcome. a found driver is
    /// not an outcome, so DRIVER_FOUND rows fall outside prediction scope.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Completed
                | BookingStatus::CustomerCancelled
                | BookingStatus::DriverCancelled
        )
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "COMPLETED" => BookingStatus::Completed,
            "CUSTOMER_CANCELLED" => BookingStatus::CustomerCancelled,
            "DRIVER_CANCELLED" => BookingStatus::DriverCancelled,
            "DRIVER_FOUND" => BookingStatus::DriverFound,
            _ => BookingStatus::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Completed => String::from("COMPLETED"),
            BookingStatus::CustomerCancelled => String::from("CUSTOMER_CANCELLED"),
            BookingStatus::DriverCancelled => String::from("DRIVER_CANCELLED"),
            BookingStatus::DriverFound => String::from("DRIVER_FOUND"),
            BookingStatus::Other(s) => s,
        }
    }
}

/// a row in the raw booking log CSV. the log restates a booking as it moves
/// through its lifecycle, so one order may appear under several statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// order identifier shared with the participant log
    pub order_id: String,
    /// estimated trip distance in km at booking time
    pub trip_distance: f64,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    /// driver position at event time, absent when no driver was assigned
    pub driver_latitude: Option<f64>,
    pub driver_longitude: Option<f64>,
    pub booking_status: BookingStatus,
    /// assigned driver, absent when the booking never reached assignment
    pub driver_id: Option<String>,
    /// ISO-8601 event time, kept as the upstream string. parsing is deferred
    /// to the features that need it.
    pub event_timestamp: Option<String>,
}

impl BookingRecord {
    /// columns that must be present in the booking log header
    pub const REQUIRED_COLUMNS: [&'static str; 9] = [
        "order_id",
        "trip_distance",
        "pickup_latitude",
        "pickup_longitude",
        "driver_latitude",
        "driver_longitude",
        "booking_status",
        "driver_id",
        "event_timestamp",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_wire_string() {
        let status = BookingStatus::from(String::from("COMPLETED"));
        assert_eq!(status, BookingStatus::Completed);
        assert_eq!(String::from(status), "COMPLETED");
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = BookingStatus::from(String::from("PAYMENT_PENDING"));
        assert_eq!(
            status,
            BookingStatus::Other(String::from("PAYMENT_PENDING"))
        );
        assert!(!status.is_terminal());
        assert_eq!(String::from(status), "PAYMENT_PENDING");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::CustomerCancelled.is_terminal());
        assert!(BookingStatus::DriverCancelled.is_terminal());
        assert!(!BookingStatus::DriverFound.is_terminal());
    }
}
