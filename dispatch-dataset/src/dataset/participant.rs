use serde::{Deserialize, Serialize};

/// a driver's recorded reaction to an offered booking. same wire behavior as
/// [crate::dataset::BookingStatus]: unknown strings land in Other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParticipantStatus {
    Accepted,
    Ignored,
    Rejected,
    Other(String),
}

impl ParticipantStatus {
    /// true when the participant actually made a decision. IGNORED reflects a
    /// non-decision and carries no supervised signal.
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            ParticipantStatus::Accepted | ParticipantStatus::Rejected
        )
    }
}

impl From<String> for ParticipantStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACCEPTED" => ParticipantStatus::Accepted,
            "IGNORED" => ParticipantStatus::Ignored,
            "REJECTED" => ParticipantStatus::Rejected,
            _ => ParticipantStatus::Other(value),
        }
    }
}

impl From<ParticipantStatus> for String {
    fn from(value: ParticipantStatus) -> Self {
        match value {
            ParticipantStatus::Accepted => String::from("ACCEPTED"),
            ParticipantStatus::Ignored => String::from("IGNORED"),
            ParticipantStatus::Rejected => String::from("REJECTED"),
            ParticipantStatus::Other(s) => s,
        }
    }
}

/// a row in the raw participant log CSV: one driver offered one booking,
/// with the driver's reaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// order identifier shared with the booking log
    pub order_id: String,
    /// driver the booking was offered to
    pub driver_id: String,
    pub participant_status: ParticipantStatus,
    pub event_timestamp: Option<String>,
    /// experiment bucket the offer was served under
    pub experiment_key: Option<String>,
}

impl ParticipantRecord {
    /// columns that must be present in the participant log header
    pub const REQUIRED_COLUMNS: [&'static str; 5] = [
        "order_id",
        "driver_id",
        "participant_status",
        "event_timestamp",
        "experiment_key",
    ];
}
