//! Core library modules for the innkeep application.
//!
//! Domain types, pure business rules (validation, availability), and the
//! ambient infrastructure the commands rely on: configuration, storage
//! paths, messaging, table views and data export.

pub mod availability;
pub mod booking;
pub mod config;
pub mod customer;
pub mod data_storage;
pub mod export;
pub mod lifecycle;
pub mod messages;
pub mod room;
pub mod room_type;
pub mod validation;
pub mod view;
