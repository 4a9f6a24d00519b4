use crate::db::db::Db;
use crate::libs::availability;
use crate::libs::booking::BookingDetail;
use crate::libs::lifecycle::{DeleteOutcome, RecordStatus, WriteOutcome};
use crate::libs::room::{Room, RoomFilter};
use crate::libs::validation::{validate_capacity, validate_price, validate_room_number, validate_room_type_id, ValidationError};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_ROOM: &str = "INSERT INTO rooms (room_number, description, max_capacity, price_per_day, room_type_id, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_ROOM: &str = "UPDATE rooms SET room_number = ?2, description = ?3, max_capacity = ?4, price_per_day = ?5, room_type_id = ?6 WHERE id = ?1";
const SOFT_DELETE_ROOM: &str = "UPDATE rooms SET status = ?2 WHERE id = ?1";
const HARD_DELETE_ROOM: &str = "DELETE FROM rooms WHERE id = ?1";
const SELECT_ROOMS: &str = "SELECT id, room_number, description, max_capacity, price_per_day, room_type_id, status FROM rooms";
const SELECT_ACTIVE: &str = "WHERE status = 1 ORDER BY room_number";
const SELECT_ALL: &str = "ORDER BY room_number";
const SELECT_BY_TYPE: &str = "WHERE status = 1 AND room_type_id = ?1 ORDER BY room_number";
const SELECT_SEARCH: &str = "WHERE status = 1 AND (room_number LIKE ?1 OR description LIKE ?1) ORDER BY room_number";
const SELECT_BY_ID: &str = "WHERE id = ?1";
const SELECT_BY_NUMBER: &str = "WHERE room_number = ?1";
const COUNT_DETAILS_FOR_ROOM: &str = "SELECT COUNT(*) FROM booking_details WHERE room_id = ?1";
const SELECT_DETAILS_FOR_ROOM: &str = "SELECT reservation_id, room_id, start_date, end_date, actual_price FROM booking_details WHERE room_id = ?1";
const SELECT_ALL_DETAILS: &str = "SELECT reservation_id, room_id, start_date, end_date, actual_price FROM booking_details";

fn map_room(row: &Row) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        room_number: row.get(1)?,
        description: row.get(2)?,
        max_capacity: row.get(3)?,
        price_per_day: row.get(4)?,
        room_type_id: row.get(5)?,
        status: RecordStatus::from_i32(row.get(6)?),
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

pub struct Rooms {
    conn: Connection,
}

impl Rooms {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    fn validate(room: &Room) -> Option<ValidationError> {
        validate_room_number(&room.room_number)
            .and_then(|_| validate_room_type_id(room.room_type_id))
            .and_then(|_| validate_capacity(room.max_capacity))
            .and_then(|_| validate_price(room.price_per_day))
            .err()
    }

    /// Validates and inserts a new active room. The room number must be
    /// unique among all rooms, deleted ones included.
    pub fn create(&mut self, room: &Room) -> Result<WriteOutcome> {
        if let Some(error) = Self::validate(room) {
            return Ok(WriteOutcome::Invalid(error));
        }
        if self.get_by_room_number(&room.room_number)?.is_some() {
            return Ok(WriteOutcome::Conflict(format!("room number '{}' already exists", room.room_number)));
        }

        self.conn.execute(
            INSERT_ROOM,
            params![
                room.room_number,
                room.description,
                room.max_capacity,
                room.price_per_day,
                room.room_type_id,
                RecordStatus::Active.as_i32()
            ],
        )?;
        Ok(WriteOutcome::Written(self.conn.last_insert_rowid() as i32))
    }

    /// Validates and updates a room. The uniqueness check skips the room's
    /// own id so saving without renaming never conflicts with itself.
    pub fn update(&mut self, room: &Room) -> Result<WriteOutcome> {
        let id = match room.id {
            Some(id) => id,
            None => return Ok(WriteOutcome::NotFound),
        };
        if let Some(error) = Self::validate(room) {
            return Ok(WriteOutcome::Invalid(error));
        }
        if let Some(existing) = self.get_by_room_number(&room.room_number)? {
            if existing.id != Some(id) {
                return Ok(WriteOutcome::Conflict(format!("room number '{}' already exists", room.room_number)));
            }
        }

        let affected = self.conn.execute(
            UPDATE_ROOM,
            params![id, room.room_number, room.description, room.max_capacity, room.price_per_day, room.room_type_id],
        )?;
        if affected == 0 {
            return Ok(WriteOutcome::NotFound);
        }
        Ok(WriteOutcome::Written(id))
    }

    /// Lifecycle-aware delete: rooms referenced by any booking detail are
    /// soft-deleted, never-booked rooms are removed.
    pub fn delete(&mut self, id: i32) -> Result<DeleteOutcome> {
        if self.get_by_id(id)?.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let details: i64 = self.conn.query_row(COUNT_DETAILS_FOR_ROOM, params![id], |row| row.get(0))?;
        if details > 0 {
            self.conn.execute(SOFT_DELETE_ROOM, params![id, RecordStatus::Deleted.as_i32()])?;
            Ok(DeleteOutcome::SoftDeleted)
        } else {
            self.conn.execute(HARD_DELETE_ROOM, params![id])?;
            Ok(DeleteOutcome::HardDeleted)
        }
    }

    pub fn fetch(&mut self, filter: RoomFilter) -> Result<Vec<Room>> {
        let mut rooms = Vec::new();
        match &filter {
            RoomFilter::Active => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ROOMS, SELECT_ACTIVE))?;
                for room in stmt.query_map([], map_room)? {
                    rooms.push(room?);
                }
            }
            RoomFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ROOMS, SELECT_ALL))?;
                for room in stmt.query_map([], map_room)? {
                    rooms.push(room?);
                }
            }
            RoomFilter::ByType(type_id) => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ROOMS, SELECT_BY_TYPE))?;
                for room in stmt.query_map(params![type_id], map_room)? {
                    rooms.push(room?);
                }
            }
            RoomFilter::Search(term) => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ROOMS, SELECT_SEARCH))?;
                let pattern = format!("%{}%", term);
                for room in stmt.query_map(params![pattern], map_room)? {
                    rooms.push(room?);
                }
            }
        }
        Ok(rooms)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Room>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_ROOMS, SELECT_BY_ID), params![id], map_room)
            .optional()
            .map_err(Into::into)
    }

    /// Looks a room up by number across all statuses; the uniqueness rule
    /// holds against deleted rooms too.
    pub fn get_by_room_number(&mut self, room_number: &str) -> Result<Option<Room>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_ROOMS, SELECT_BY_NUMBER), params![room_number], map_room)
            .optional()
            .map_err(Into::into)
    }

    /// True when no existing stay of the room overlaps [start, end).
    pub fn is_available(&mut self, room_id: i32, start: NaiveDate, end: NaiveDate) -> Result<bool> {
        let mut stmt = self.conn.prepare(SELECT_DETAILS_FOR_ROOM)?;
        let mut details = Vec::new();
        for detail in stmt.query_map(params![room_id], map_detail)? {
            details.push(detail?);
        }
        Ok(availability::room_is_available(&details, room_id, start, end))
    }

    /// All active rooms free for the whole of [start, end): a linear scan
    /// over every booking detail, no interval index.
    pub fn available_between(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Room>> {
        let mut details = Vec::new();
        {
            let mut stmt = self.conn.prepare(SELECT_ALL_DETAILS)?;
            for detail in stmt.query_map([], map_detail)? {
                details.push(detail?);
            }
        }
        let active = self.fetch(RoomFilter::Active)?;
        Ok(availability::available_rooms(active, &details, start, end))
    }
}
