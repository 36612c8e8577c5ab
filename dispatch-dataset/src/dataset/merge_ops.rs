use std::collections::HashMap;

use itertools::Itertools;

use crate::dataset::{
    BookingRecord, BookingStatus, DatasetRow, ParticipantRecord, ParticipantStatus,
};

/// left join of cleaned bookings to cleaned participant decisions on order id.
///
/// the participant side is reduced to (order_id, participant_status) before
/// joining: driver and timing columns stay sourced from the booking log. a
/// booking with several decided participants fans out to one row per decision,
/// so the output may hold more rows than the booking input. bookings the
/// customer cancelled before any participant was offered the ride are not
/// meaningful training examples and are dropped.
pub fn merge_dataset(
    bookings: Vec<BookingRecord>,
    participants: Vec<ParticipantRecord>,
) -> Vec<DatasetRow> {
    let booking_count = bookings.len();
    let decisions: HashMap<String, Vec<ParticipantStatus>> = participants
        .into_iter()
        .map(|p| (p.order_id, p.participant_status))
        .into_group_map();

    let merged: Vec<DatasetRow> = bookings
        .into_iter()
        .flat_map(|booking| match decisions.get(&booking.order_id) {
            Some(statuses) => statuses
                .iter()
                .map(|status| DatasetRow::new(&booking, Some(status.clone())))
                .collect::<Vec<_>>(),
            None => vec![DatasetRow::new(&booking, None)],
        })
        .filter(|row| {
            !(row.booking_status == BookingStatus::CustomerCancelled
                && row.participant_status.is_none())
        })
        .collect();

    if merged.len() > booking_count {
        log::warn!(
            "join fanned out: {} bookings produced {} dataset rows",
            booking_count,
            merged.len()
        );
    }
    merged
}
