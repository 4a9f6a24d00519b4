//! Booking domain types and the outcomes of booking operations.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reservation status stored as an integer column. The add path fills in
/// `Confirmed` when the caller leaves the status unset, mirroring the
/// store-side default for the booking date.
pub const STATUS_CONFIRMED: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Option<i32>,
    pub customer_id: i32,
    /// Defaults to the current local time when unset at insert.
    pub booking_date: Option<NaiveDateTime>,
    /// Sum of the actual prices of all details.
    pub total_price: f64,
    /// Defaults to [`STATUS_CONFIRMED`] when unset at insert.
    pub status: Option<i32>,
}

impl Reservation {
    pub fn new(customer_id: i32) -> Self {
        Reservation {
            id: None,
            customer_id,
            booking_date: None,
            total_price: 0.0,
            status: None,
        }
    }
}

/// One room-interval within a reservation. Identified by the composite key
/// (reservation id, room id); a reservation holds at most one stay per room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetail {
    pub reservation_id: i32,
    pub room_id: i32,
    /// Half-open interval [start_date, end_date).
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_price: f64,
}

impl BookingDetail {
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Number of nights in a half-open [start, end) stay.
pub fn nights(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Why a booking request was refused. These are expected, recoverable
/// rejections surfaced to the caller, not store failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingRejection {
    #[error("end date must be after start date")]
    InvalidInterval,
    #[error("customer {0} not found")]
    CustomerNotFound(i32),
    #[error("room {0} not found")]
    RoomNotFound(i32),
    #[error("room {0} is already booked for the requested dates")]
    RoomUnavailable(i32),
}

/// Result of creating a reservation together with its first detail row.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Reservation and detail were written; carries the new reservation id.
    Created(i32),
    Rejected(BookingRejection),
}
