//! Room availability checking over half-open date intervals.
//!
//! A stay [s, e) conflicts with a request [start, end) unless `e <= start`
//! or `s >= end`, so back-to-back stays never conflict. The data set is
//! small enough that a linear scan over all booking details is the whole
//! algorithm; no index structure is kept.

use crate::libs::booking::BookingDetail;
use crate::libs::room::Room;
use chrono::NaiveDate;
use std::collections::HashSet;

/// True when the two half-open intervals share at least one night.
pub fn intervals_conflict(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    !(a_end <= b_start || a_start >= b_end)
}

/// True when no existing stay of `room_id` overlaps [start, end).
pub fn room_is_available(details: &[BookingDetail], room_id: i32, start: NaiveDate, end: NaiveDate) -> bool {
    !details
        .iter()
        .filter(|d| d.room_id == room_id)
        .any(|d| intervals_conflict(d.start_date, d.end_date, start, end))
}

/// Ids of all rooms with at least one stay overlapping [start, end),
/// across every reservation.
pub fn booked_room_ids(details: &[BookingDetail], start: NaiveDate, end: NaiveDate) -> HashSet<i32> {
    details
        .iter()
        .filter(|d| intervals_conflict(d.start_date, d.end_date, start, end))
        .map(|d| d.room_id)
        .collect()
}

/// Filters `rooms` down to those free for the whole of [start, end).
///
/// The caller passes the active room list; soft-deleted rooms are excluded
/// upstream by the room listing itself.
pub fn available_rooms(rooms: Vec<Room>, details: &[BookingDetail], start: NaiveDate, end: NaiveDate) -> Vec<Room> {
    let booked = booked_room_ids(details, start, end);
    rooms.into_iter().filter(|r| r.id.map_or(false, |id| !booked.contains(&id))).collect()
}
