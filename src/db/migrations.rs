//! Database schema migration management and versioning.
//!
//! Maintains the hotel schema (customers, room types, rooms, reservations,
//! booking details) through versioned, transactional migrations. Applied
//! versions are recorded in a `migrations` table so startup only runs what
//! is pending.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use innkeep::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("innkeep.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # anyhow::Ok(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration with its transformation function.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations plus the logic to apply pending ones in order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: core hotel schema.
        // Statuses are integers (1 = active/confirmed, 2 = deleted).
        // Email and room number carry UNIQUE constraints as a store-level
        // backstop behind the service uniqueness checks.
        self.add_migration(1, "create_hotel_schema", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS customers (
                    id INTEGER PRIMARY KEY,
                    full_name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    telephone TEXT,
                    birthday DATE,
                    password TEXT,
                    status INTEGER NOT NULL DEFAULT 1
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS room_types (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    description TEXT,
                    note TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS rooms (
                    id INTEGER PRIMARY KEY,
                    room_number TEXT NOT NULL UNIQUE,
                    description TEXT,
                    max_capacity INTEGER,
                    price_per_day REAL,
                    room_type_id INTEGER NOT NULL,
                    status INTEGER NOT NULL DEFAULT 1,
                    FOREIGN KEY (room_type_id) REFERENCES room_types(id)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS reservations (
                    id INTEGER PRIMARY KEY,
                    customer_id INTEGER NOT NULL,
                    booking_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    total_price REAL NOT NULL DEFAULT 0,
                    status INTEGER NOT NULL DEFAULT 1,
                    FOREIGN KEY (customer_id) REFERENCES customers(id)
                )",
                [],
            )?;

            // Composite key: one stay per room within a reservation.
            tx.execute(
                "CREATE TABLE IF NOT EXISTS booking_details (
                    reservation_id INTEGER NOT NULL,
                    room_id INTEGER NOT NULL,
                    start_date DATE NOT NULL,
                    end_date DATE NOT NULL,
                    actual_price REAL NOT NULL DEFAULT 0,
                    PRIMARY KEY (reservation_id, room_id),
                    FOREIGN KEY (reservation_id) REFERENCES reservations(id),
                    FOREIGN KEY (room_id) REFERENCES rooms(id)
                )",
                [],
            )?;

            Ok(())
        });

        // Version 2: indices for the lifecycle and availability queries.
        self.add_migration(2, "add_lookup_indices", |tx| {
            // Delete paths count references by foreign key
            tx.execute("CREATE INDEX IF NOT EXISTS idx_rooms_room_type ON rooms(room_type_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_reservations_customer ON reservations(customer_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_details_room ON booking_details(room_id)", [])?;
            // Availability scans filter details by date interval
            tx.execute("CREATE INDEX IF NOT EXISTS idx_details_start ON booking_details(start_date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in order.
    ///
    /// Pending migrations run inside one transaction: a failure rolls back
    /// everything and leaves the recorded version untouched.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as (version, name, applied_at), oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Development-only rollback: removes migration records beyond the
    /// target version without reversing schema changes.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));

        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;

        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies all pending migrations to the given connection.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version of the given connection.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// True when the schema is behind the latest registered migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}
