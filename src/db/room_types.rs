use crate::db::db::Db;
use crate::libs::lifecycle::{TypeDeleteOutcome, WriteOutcome};
use crate::libs::room_type::RoomType;
use crate::libs::validation::ValidationError;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_ROOM_TYPE: &str = "INSERT INTO room_types (name, description, note) VALUES (?1, ?2, ?3)";
const UPDATE_ROOM_TYPE: &str = "UPDATE room_types SET name = ?2, description = ?3, note = ?4 WHERE id = ?1";
const DELETE_ROOM_TYPE: &str = "DELETE FROM room_types WHERE id = ?1";
const SELECT_ROOM_TYPES: &str = "SELECT id, name, description, note FROM room_types";
const SELECT_ALL: &str = "ORDER BY name";
const SELECT_BY_ID: &str = "WHERE id = ?1";
const SELECT_SEARCH: &str = "WHERE name LIKE ?1 OR description LIKE ?1 OR note LIKE ?1 ORDER BY name";
const COUNT_ROOMS_USING: &str = "SELECT COUNT(*) FROM rooms WHERE room_type_id = ?1";

fn map_room_type(row: &Row) -> rusqlite::Result<RoomType> {
    Ok(RoomType {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        note: row.get(3)?,
    })
}

pub struct RoomTypes {
    conn: Connection,
}

impl RoomTypes {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn create(&mut self, room_type: &RoomType) -> Result<WriteOutcome> {
        if room_type.name.trim().is_empty() {
            return Ok(WriteOutcome::Invalid(ValidationError::TypeNameMissing));
        }
        self.conn
            .execute(INSERT_ROOM_TYPE, params![room_type.name, room_type.description, room_type.note])?;
        Ok(WriteOutcome::Written(self.conn.last_insert_rowid() as i32))
    }

    pub fn update(&mut self, room_type: &RoomType) -> Result<WriteOutcome> {
        let id = match room_type.id {
            Some(id) => id,
            None => return Ok(WriteOutcome::NotFound),
        };
        if room_type.name.trim().is_empty() {
            return Ok(WriteOutcome::Invalid(ValidationError::TypeNameMissing));
        }
        let affected = self
            .conn
            .execute(UPDATE_ROOM_TYPE, params![id, room_type.name, room_type.description, room_type.note])?;
        if affected == 0 {
            return Ok(WriteOutcome::NotFound);
        }
        Ok(WriteOutcome::Written(id))
    }

    /// A room type referenced by any room, active or deleted, cannot be
    /// removed; the caller gets back the reference count instead.
    pub fn delete(&mut self, id: i32) -> Result<TypeDeleteOutcome> {
        if self.get_by_id(id)?.is_none() {
            return Ok(TypeDeleteOutcome::NotFound);
        }

        let rooms_using: i64 = self.conn.query_row(COUNT_ROOMS_USING, params![id], |row| row.get(0))?;
        if rooms_using > 0 {
            return Ok(TypeDeleteOutcome::InUse(rooms_using as usize));
        }

        self.conn.execute(DELETE_ROOM_TYPE, params![id])?;
        Ok(TypeDeleteOutcome::Deleted)
    }

    pub fn list(&mut self) -> Result<Vec<RoomType>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ROOM_TYPES, SELECT_ALL))?;
        let type_iter = stmt.query_map([], map_room_type)?;

        let mut room_types = Vec::new();
        for room_type in type_iter {
            room_types.push(room_type?);
        }
        Ok(room_types)
    }

    pub fn search(&mut self, term: &str) -> Result<Vec<RoomType>> {
        if term.trim().is_empty() {
            return self.list();
        }
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ROOM_TYPES, SELECT_SEARCH))?;
        let pattern = format!("%{}%", term);
        let type_iter = stmt.query_map(params![pattern], map_room_type)?;

        let mut room_types = Vec::new();
        for room_type in type_iter {
            room_types.push(room_type?);
        }
        Ok(room_types)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<RoomType>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_ROOM_TYPES, SELECT_BY_ID), params![id], map_room_type)
            .optional()
            .map_err(Into::into)
    }
}
