//! Record status flags and typed deletion outcomes.
//!
//! Customers and rooms are never silently dropped while bookings reference
//! them; deletion downgrades to a status flip instead. The outcome enums
//! make that distinction visible to callers instead of collapsing it into
//! a boolean.

use crate::libs::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Logical lifecycle state of a customer or room row.
///
/// Stored as an integer column: 1 = active, 2 = deleted. Soft-deleted rows
/// stay in the store for referential history but are excluded from active
/// listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Deleted,
}

impl RecordStatus {
    pub fn as_i32(self) -> i32 {
        match self {
            RecordStatus::Active => 1,
            RecordStatus::Deleted => 2,
        }
    }

    /// Unknown status values are treated as deleted so they never leak
    /// into active listings.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => RecordStatus::Active,
            _ => RecordStatus::Deleted,
        }
    }
}

/// Result of a create or update on a customer, room or room type.
///
/// Validation failures and uniqueness conflicts are expected rejections
/// surfaced as values; only store failures travel as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// Row written; carries the row id.
    Written(i32),
    Invalid(ValidationError),
    /// Uniqueness conflict, e.g. a duplicate email or room number.
    Conflict(String),
    /// Update target does not exist.
    NotFound,
}

/// Result of deleting a customer or room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row removed entirely; nothing referenced it.
    HardDeleted,
    /// Row retained with status flipped to deleted; bookings reference it.
    SoftDeleted,
    NotFound,
}

/// Result of deleting a room type.
///
/// Room types are referenced by rooms, never by bookings directly, so there
/// is no soft-delete path: the delete either goes through or is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeleteOutcome {
    Deleted,
    /// Refused; the payload is the number of rooms still referencing the type.
    InUse(usize),
    NotFound,
}
