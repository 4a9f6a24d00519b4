//! Database layer for the innkeep application.
//!
//! Type-safe SQLite persistence for all hotel entities: one accessor struct
//! per table group, SQL kept as constants, and a versioned migration system
//! for schema evolution. Each accessor constructs its own store handle;
//! there is no shared global connection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use innkeep::db::customers::Customers;
//! use innkeep::libs::customer::{Customer, CustomerFilter};
//!
//! let mut customers = Customers::new()?;
//! let customer = Customer::new("Ann Smith", "ann@example.com", None, None, None);
//! customers.create(&customer)?;
//! let active = customers.fetch(CustomerFilter::Active)?;
//! # anyhow::Ok(())
//! ```

/// Core database connection handle.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Customer records with soft/hard delete lifecycle.
pub mod customers;

/// Room type catalog with in-use delete protection.
pub mod room_types;

/// Room inventory with availability queries.
pub mod rooms;

/// Booking reservations and their per-room detail rows.
pub mod bookings;
