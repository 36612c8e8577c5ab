pub mod clean_ops;
pub mod label_ops;
pub mod merge_ops;

mod booking;
mod dataset_error;
mod dataset_row;
mod participant;

pub use booking::{BookingRecord, BookingStatus};
pub use dataset_error::DatasetError;
pub use dataset_row::DatasetRow;
pub use participant::{ParticipantRecord, ParticipantStatus};
