//! # Innkeep - Hotel Management Toolkit
//!
//! A command-line utility for managing hotel customers, room inventory,
//! room types and booking reservations over a local SQLite store.
//!
//! ## Features
//!
//! - **Customer Records**: Create, update, search and lifecycle-aware deletion
//! - **Room Inventory**: Rooms and room types with uniqueness and usage guards
//! - **Booking Reservations**: Availability checking and transactional booking
//! - **Data Export**: Export data to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use innkeep::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
