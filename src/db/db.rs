use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "innkeep.db";

/// Explicitly constructed store handle. Every accessor builds its own `Db`
/// at construction time; there is no process-wide connection singleton.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory and applies any
    /// pending schema migrations.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database without touching the schema. Used by the
    /// migrations inspection command.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        Ok(conn)
    }
}
