//! Display implementation for innkeep application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! in the terminal. All user-facing wording lives in this single place so
//! commands never format strings themselves.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === CUSTOMER MESSAGES ===
            Message::CustomerCreated(name) => format!("Customer '{}' created successfully", name),
            Message::CustomerUpdated(name) => format!("Customer '{}' updated successfully", name),
            Message::CustomerHardDeleted(id) => format!("Customer {} removed (no bookings on record)", id),
            Message::CustomerSoftDeleted(id) => format!("Customer {} marked as deleted (bookings on record are kept)", id),
            Message::CustomerNotFound(ident) => format!("Customer '{}' not found", ident),
            Message::CustomerRejected(reason) => format!("Customer rejected: {}", reason),
            Message::CustomersHeader => "Customers:".to_string(),
            Message::NoCustomersFound => "No customers found".to_string(),
            Message::EmailAlreadyExists(email) => format!("A customer with email '{}' already exists", email),
            Message::ConfirmDeleteCustomer(name) => format!("Delete customer '{}'?", name),
            Message::PromptCustomerName => "Full name".to_string(),
            Message::PromptCustomerEmail => "Email address".to_string(),
            Message::PromptCustomerPhone => "Telephone (optional)".to_string(),
            Message::PromptCustomerBirthday => "Birthday YYYY-MM-DD (optional)".to_string(),

            // === ROOM TYPE MESSAGES ===
            Message::RoomTypeCreated(name) => format!("Room type '{}' created successfully", name),
            Message::RoomTypeUpdated(name) => format!("Room type '{}' updated successfully", name),
            Message::RoomTypeDeleted(id) => format!("Room type {} removed", id),
            Message::RoomTypeNotFound(ident) => format!("Room type '{}' not found", ident),
            Message::RoomTypeInUse(id, count) => format!("Room type {} is in use by {} room(s) and cannot be removed", id, count),
            Message::RoomTypesHeader => "Room types:".to_string(),
            Message::NoRoomTypesFound => "No room types found".to_string(),
            Message::PromptRoomTypeName => "Type name".to_string(),
            Message::PromptRoomTypeDescription => "Description (optional)".to_string(),
            Message::PromptRoomTypeNote => "Note (optional)".to_string(),

            // === ROOM MESSAGES ===
            Message::RoomCreated(number) => format!("Room '{}' created successfully", number),
            Message::RoomUpdated(number) => format!("Room '{}' updated successfully", number),
            Message::RoomHardDeleted(id) => format!("Room {} removed (never booked)", id),
            Message::RoomSoftDeleted(id) => format!("Room {} marked as deleted (booking history is kept)", id),
            Message::RoomNotFound(ident) => format!("Room '{}' not found", ident),
            Message::RoomRejected(reason) => format!("Room rejected: {}", reason),
            Message::RoomNumberAlreadyExists(number) => format!("Room number '{}' is already taken", number),
            Message::RoomsHeader => "Rooms:".to_string(),
            Message::AvailableRoomsHeader(start, end) => format!("Rooms available from {} to {}:", start, end),
            Message::NoRoomsFound => "No rooms found".to_string(),
            Message::NoRoomsAvailable => "No rooms available for the requested dates".to_string(),
            Message::ConfirmDeleteRoom(number) => format!("Delete room '{}'?", number),
            Message::PromptRoomNumber => "Room number".to_string(),
            Message::PromptRoomDescription => "Description (optional)".to_string(),
            Message::PromptRoomCapacity => "Max capacity (optional)".to_string(),
            Message::PromptRoomPrice => "Price per day (optional)".to_string(),
            Message::PromptRoomTypeId => "Room type ID".to_string(),

            // === BOOKING MESSAGES ===
            Message::BookingCreated(id) => format!("Booking reservation {} created", id),
            Message::BookingUpdated(id) => format!("Booking reservation {} updated", id),
            Message::BookingDeleted(id) => format!("Booking reservation {} and its details removed", id),
            Message::BookingNotFound(id) => format!("Booking reservation {} not found", id),
            Message::BookingRejected(reason) => format!("Booking rejected: {}", reason),
            Message::BookingDetailAdded(id, room_id) => format!("Room {} added to reservation {}", room_id, id),
            Message::BookingDetailUpdated(id, room_id) => format!("Stay for room {} in reservation {} updated", room_id, id),
            Message::BookingDetailRemoved(id, room_id) => format!("Room {} removed from reservation {}", room_id, id),
            Message::BookingDetailNotFound(id, room_id) => format!("Reservation {} has no stay for room {}", id, room_id),
            Message::BookingsHeader => "Booking reservations:".to_string(),
            Message::BookingDetailsHeader(id) => format!("Details of reservation {}:", id),
            Message::NoBookingsFound => "No booking reservations found".to_string(),
            Message::ConfirmDeleteBooking(id, count) => format!("Delete reservation {} with {} detail row(s)?", id, count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptHotelName => "Hotel name".to_string(),
            Message::PromptCurrency => "Currency symbol".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::NothingToExport => "Nothing to export".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidDate(value) => format!("'{}' is not a valid date (expected YYYY-MM-DD)", value),
            Message::InvalidInterval => "End date must be after start date".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::Custom(text) => text.clone(),
        };

        write!(f, "{}", message)
    }
}
