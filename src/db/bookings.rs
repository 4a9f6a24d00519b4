//! Booking reservations and their detail rows.
//!
//! The two multi-row writes here, reservation creation with its first stay
//! and reservation deletion with all of its stays, each run inside a single
//! SQLite transaction so a partial failure can never leave a reservation
//! without details or details without a reservation.

use crate::db::db::Db;
use crate::libs::availability;
use crate::libs::booking::{nights, BookingDetail, BookingOutcome, BookingRejection, Reservation, STATUS_CONFIRMED};
use crate::libs::lifecycle::{RecordStatus, WriteOutcome};
use crate::libs::validation::{validate_interval, ValidationError};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_RESERVATION: &str = "INSERT INTO reservations (customer_id, booking_date, total_price, status) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_RESERVATION: &str = "UPDATE reservations SET customer_id = ?2, booking_date = ?3, total_price = ?4, status = ?5 WHERE id = ?1";
const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?1";
const SELECT_RESERVATIONS: &str = "SELECT id, customer_id, booking_date, total_price, status FROM reservations";
const SELECT_ALL: &str = "ORDER BY booking_date DESC";
const SELECT_BY_ID: &str = "WHERE id = ?1";
const SELECT_BY_CUSTOMER: &str = "WHERE customer_id = ?1 ORDER BY booking_date DESC";
const SELECT_BY_DATE_RANGE: &str =
    "WHERE (?1 IS NULL OR DATE(booking_date) >= DATE(?1)) AND (?2 IS NULL OR DATE(booking_date) <= DATE(?2)) ORDER BY booking_date DESC";
const SELECT_WITH_CUSTOMERS: &str = "
    SELECT r.id, r.customer_id, r.booking_date, r.total_price, r.status, c.full_name
    FROM reservations r
    JOIN customers c ON c.id = r.customer_id
    ORDER BY r.booking_date DESC
";
const INSERT_DETAIL: &str = "INSERT INTO booking_details (reservation_id, room_id, start_date, end_date, actual_price) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_DETAIL: &str = "UPDATE booking_details SET start_date = ?3, end_date = ?4, actual_price = ?5 WHERE reservation_id = ?1 AND room_id = ?2";
const DELETE_DETAIL: &str = "DELETE FROM booking_details WHERE reservation_id = ?1 AND room_id = ?2";
const DELETE_DETAILS_FOR_RESERVATION: &str = "DELETE FROM booking_details WHERE reservation_id = ?1";
const SELECT_DETAILS: &str = "SELECT reservation_id, room_id, start_date, end_date, actual_price FROM booking_details";
const SELECT_DETAILS_FOR_RESERVATION: &str = "WHERE reservation_id = ?1 ORDER BY start_date";
const SELECT_DETAIL_BY_KEY: &str = "WHERE reservation_id = ?1 AND room_id = ?2";
const SELECT_DETAILS_FOR_ROOM: &str = "WHERE room_id = ?1";
const RECALC_TOTAL: &str = "UPDATE reservations SET total_price = (SELECT COALESCE(SUM(actual_price), 0) FROM booking_details WHERE reservation_id = ?1) WHERE id = ?1";
const COUNT_CUSTOMER: &str = "SELECT COUNT(*) FROM customers WHERE id = ?1";
const SELECT_ROOM_STATUS: &str = "SELECT status FROM rooms WHERE id = ?1";

fn map_reservation(row: &Row) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        booking_date: row.get(2)?,
        total_price: row.get(3)?,
        status: row.get(4)?,
    })
}

fn map_detail(row: &Row) -> rusqlite::Result<BookingDetail> {
    Ok(BookingDetail {
        reservation_id: row.get(0)?,
        room_id: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        actual_price: row.get(4)?,
    })
}

pub struct Bookings {
    conn: Connection,
}

impl Bookings {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Creates a reservation together with its first stay in one
    /// transaction. The booking date and status default to "now" and
    /// confirmed; the total is nights times the given rate.
    pub fn create_with_detail(&mut self, customer_id: i32, room_id: i32, start: NaiveDate, end: NaiveDate, price_per_day: f64) -> Result<BookingOutcome> {
        if validate_interval(start, end).is_err() {
            return Ok(BookingOutcome::Rejected(BookingRejection::InvalidInterval));
        }

        let customer_rows: i64 = self.conn.query_row(COUNT_CUSTOMER, params![customer_id], |row| row.get(0))?;
        if customer_rows == 0 {
            return Ok(BookingOutcome::Rejected(BookingRejection::CustomerNotFound(customer_id)));
        }

        match self.room_status(room_id)? {
            Some(RecordStatus::Active) => {}
            _ => return Ok(BookingOutcome::Rejected(BookingRejection::RoomNotFound(room_id))),
        }

        if !self.is_room_available(room_id, start, end)? {
            return Ok(BookingOutcome::Rejected(BookingRejection::RoomUnavailable(room_id)));
        }

        let price = nights(start, end) as f64 * price_per_day;
        let booking_date = Local::now().naive_local();

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_RESERVATION, params![customer_id, booking_date, price, STATUS_CONFIRMED])?;
        let reservation_id = tx.last_insert_rowid() as i32;
        tx.execute(INSERT_DETAIL, params![reservation_id, room_id, start, end, price])?;
        tx.commit()?;

        Ok(BookingOutcome::Created(reservation_id))
    }

    /// Updates the header fields of a reservation. Missing booking date or
    /// status fall back to the documented defaults, as on creation.
    pub fn update(&mut self, reservation: &Reservation) -> Result<WriteOutcome> {
        let id = match reservation.id {
            Some(id) => id,
            None => return Ok(WriteOutcome::NotFound),
        };

        let booking_date = reservation.booking_date.unwrap_or_else(|| Local::now().naive_local());
        let status = reservation.status.unwrap_or(STATUS_CONFIRMED);

        let affected = self.conn.execute(
            UPDATE_RESERVATION,
            params![id, reservation.customer_id, booking_date, reservation.total_price, status],
        )?;
        if affected == 0 {
            return Ok(WriteOutcome::NotFound);
        }
        Ok(WriteOutcome::Written(id))
    }

    /// Deletes a reservation and all of its detail rows atomically.
    /// Returns false when the reservation does not exist.
    pub fn delete(&mut self, id: i32) -> Result<bool> {
        if self.get_by_id(id)?.is_none() {
            return Ok(false);
        }

        let tx = self.conn.transaction()?;
        tx.execute(DELETE_DETAILS_FOR_RESERVATION, params![id])?;
        tx.execute(DELETE_RESERVATION, params![id])?;
        tx.commit()?;

        Ok(true)
    }

    /// Adds a stay to an existing reservation; the availability rules are
    /// the same as on reservation creation. The reservation's total is
    /// adjusted in the same transaction.
    pub fn add_detail(&mut self, reservation_id: i32, room_id: i32, start: NaiveDate, end: NaiveDate, price_per_day: f64) -> Result<WriteOutcome> {
        if validate_interval(start, end).is_err() {
            return Ok(WriteOutcome::Invalid(ValidationError::EmptyInterval));
        }
        if self.get_by_id(reservation_id)?.is_none() {
            return Ok(WriteOutcome::NotFound);
        }
        match self.room_status(room_id)? {
            Some(RecordStatus::Active) => {}
            _ => return Ok(WriteOutcome::Conflict(format!("room {} not found", room_id))),
        }
        if self.get_detail(reservation_id, room_id)?.is_some() {
            return Ok(WriteOutcome::Conflict(format!("reservation {} already holds a stay for room {}", reservation_id, room_id)));
        }
        if !self.is_room_available(room_id, start, end)? {
            return Ok(WriteOutcome::Conflict(format!("room {} is already booked for the requested dates", room_id)));
        }

        let price = nights(start, end) as f64 * price_per_day;

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_DETAIL, params![reservation_id, room_id, start, end, price])?;
        tx.execute(RECALC_TOTAL, params![reservation_id])?;
        tx.commit()?;

        Ok(WriteOutcome::Written(reservation_id))
    }

    /// Rewrites the dates and price of one stay. The overlap check skips
    /// the stay being edited so shrinking or shifting it never conflicts
    /// with itself.
    pub fn update_detail(&mut self, reservation_id: i32, room_id: i32, start: NaiveDate, end: NaiveDate, actual_price: f64) -> Result<WriteOutcome> {
        if validate_interval(start, end).is_err() {
            return Ok(WriteOutcome::Invalid(ValidationError::EmptyInterval));
        }
        if self.get_detail(reservation_id, room_id)?.is_none() {
            return Ok(WriteOutcome::NotFound);
        }

        let others: Vec<BookingDetail> = self
            .details_for_room(room_id)?
            .into_iter()
            .filter(|d| d.reservation_id != reservation_id)
            .collect();
        if !availability::room_is_available(&others, room_id, start, end) {
            return Ok(WriteOutcome::Conflict(format!("room {} is already booked for the requested dates", room_id)));
        }

        let tx = self.conn.transaction()?;
        tx.execute(UPDATE_DETAIL, params![reservation_id, room_id, start, end, actual_price])?;
        tx.execute(RECALC_TOTAL, params![reservation_id])?;
        tx.commit()?;

        Ok(WriteOutcome::Written(reservation_id))
    }

    /// Removes one stay and adjusts the reservation total in the same
    /// transaction. Returns false when no such stay exists.
    pub fn delete_detail(&mut self, reservation_id: i32, room_id: i32) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute(DELETE_DETAIL, params![reservation_id, room_id])?;
        if affected == 0 {
            return Ok(false);
        }
        tx.execute(RECALC_TOTAL, params![reservation_id])?;
        tx.commit()?;
        Ok(true)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_RESERVATIONS, SELECT_ALL))?;
        let iter = stmt.query_map([], map_reservation)?;

        let mut reservations = Vec::new();
        for reservation in iter {
            reservations.push(reservation?);
        }
        Ok(reservations)
    }

    /// Reservations joined with the owning customer's name, for display.
    pub fn fetch_with_customers(&mut self) -> Result<Vec<(Reservation, String)>> {
        let mut stmt = self.conn.prepare(SELECT_WITH_CUSTOMERS)?;
        let iter = stmt.query_map([], |row| Ok((map_reservation(row)?, row.get::<_, String>(5)?)))?;

        let mut rows = Vec::new();
        for row in iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Reservation>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_RESERVATIONS, SELECT_BY_ID), params![id], map_reservation)
            .optional()
            .map_err(Into::into)
    }

    pub fn by_customer(&mut self, customer_id: i32) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_RESERVATIONS, SELECT_BY_CUSTOMER))?;
        let iter = stmt.query_map(params![customer_id], map_reservation)?;

        let mut reservations = Vec::new();
        for reservation in iter {
            reservations.push(reservation?);
        }
        Ok(reservations)
    }

    /// Reservations whose booking date falls within [start, end], both
    /// bounds inclusive; this filters on when the booking was made, not on
    /// the stay intervals.
    /// Fetches reservations whose booking date falls inside the range.
    /// A `None` bound leaves that side of the range open.
    pub fn by_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_RESERVATIONS, SELECT_BY_DATE_RANGE))?;
        let iter = stmt.query_map(params![start, end], map_reservation)?;

        let mut reservations = Vec::new();
        for reservation in iter {
            reservations.push(reservation?);
        }
        Ok(reservations)
    }

    pub fn details_for_reservation(&mut self, reservation_id: i32) -> Result<Vec<BookingDetail>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_DETAILS, SELECT_DETAILS_FOR_RESERVATION))?;
        let iter = stmt.query_map(params![reservation_id], map_detail)?;

        let mut details = Vec::new();
        for detail in iter {
            details.push(detail?);
        }
        Ok(details)
    }

    pub fn details_for_room(&mut self, room_id: i32) -> Result<Vec<BookingDetail>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_DETAILS, SELECT_DETAILS_FOR_ROOM))?;
        let iter = stmt.query_map(params![room_id], map_detail)?;

        let mut details = Vec::new();
        for detail in iter {
            details.push(detail?);
        }
        Ok(details)
    }

    pub fn all_details(&mut self) -> Result<Vec<BookingDetail>> {
        let mut stmt = self.conn.prepare(SELECT_DETAILS)?;
        let iter = stmt.query_map([], map_detail)?;

        let mut details = Vec::new();
        for detail in iter {
            details.push(detail?);
        }
        Ok(details)
    }

    pub fn get_detail(&mut self, reservation_id: i32, room_id: i32) -> Result<Option<BookingDetail>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_DETAILS, SELECT_DETAIL_BY_KEY), params![reservation_id, room_id], map_detail)
            .optional()
            .map_err(Into::into)
    }

    /// True when no existing stay of the room overlaps [start, end).
    pub fn is_room_available(&mut self, room_id: i32, start: NaiveDate, end: NaiveDate) -> Result<bool> {
        let details = self.details_for_room(room_id)?;
        Ok(availability::room_is_available(&details, room_id, start, end))
    }

    fn room_status(&mut self, room_id: i32) -> Result<Option<RecordStatus>> {
        let status: Option<i32> = self.conn.query_row(SELECT_ROOM_STATUS, params![room_id], |row| row.get(0)).optional()?;
        Ok(status.map(RecordStatus::from_i32))
    }
}
