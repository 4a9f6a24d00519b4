//! Pure field validators used before any write.
//!
//! Every validator is a side-effect-free function returning a typed
//! [`ValidationError`] on rejection. Uniqueness checks need the store and
//! live in the db layer; everything shape- or range-related lives here.

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// Minimum accepted length for a telephone number, separators included.
const MIN_PHONE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email address is required")]
    EmailMissing,
    #[error("'{0}' is not a valid email address")]
    EmailInvalid(String),
    #[error("'{0}' is not a valid telephone number")]
    PhoneInvalid(String),
    #[error("birthday {0} is in the future")]
    BirthdayInFuture(NaiveDate),
    #[error("room number is required")]
    RoomNumberMissing,
    #[error("room type name is required")]
    TypeNameMissing,
    #[error("room type reference is required")]
    RoomTypeMissing,
    #[error("capacity must be a positive number")]
    CapacityNotPositive,
    #[error("price per day must not be negative")]
    PriceNegative,
    #[error("end date must be after start date")]
    EmptyInterval,
}

/// Checks the general `local@domain.tld` shape: exactly one '@', no
/// whitespace on either side and at least one '.' in the domain part.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let shape_ok = !local.is_empty()
        && !domain.is_empty()
        && !local.chars().any(char::is_whitespace)
        && !domain.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.');
    if shape_ok {
        Ok(())
    } else {
        Err(ValidationError::EmailInvalid(email.to_string()))
    }
}

/// Telephone numbers are optional; when present they may contain digits,
/// `+`, `-`, spaces and parentheses and must be at least ten characters.
pub fn validate_phone(phone: Option<&str>) -> Result<(), ValidationError> {
    let phone = match phone {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Ok(()),
    };
    let chars_ok = phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    if chars_ok && phone.len() >= MIN_PHONE_LEN {
        Ok(())
    } else {
        Err(ValidationError::PhoneInvalid(phone.to_string()))
    }
}

/// A birthday may be unset, but never in the future.
pub fn validate_birthday(birthday: Option<NaiveDate>) -> Result<(), ValidationError> {
    match birthday {
        Some(date) if date > Local::now().date_naive() => Err(ValidationError::BirthdayInFuture(date)),
        _ => Ok(()),
    }
}

/// Room numbers must be non-empty after trimming. Uniqueness is checked
/// against the store separately.
pub fn validate_room_number(number: &str) -> Result<(), ValidationError> {
    if number.trim().is_empty() {
        Err(ValidationError::RoomNumberMissing)
    } else {
        Ok(())
    }
}

pub fn validate_room_type_id(room_type_id: i32) -> Result<(), ValidationError> {
    if room_type_id <= 0 {
        Err(ValidationError::RoomTypeMissing)
    } else {
        Ok(())
    }
}

pub fn validate_capacity(capacity: Option<i32>) -> Result<(), ValidationError> {
    match capacity {
        Some(c) if c <= 0 => Err(ValidationError::CapacityNotPositive),
        _ => Ok(()),
    }
}

pub fn validate_price(price: Option<f64>) -> Result<(), ValidationError> {
    match price {
        Some(p) if p < 0.0 => Err(ValidationError::PriceNegative),
        _ => Ok(()),
    }
}

/// Booking intervals are half-open; a zero-length or inverted interval is
/// rejected here, before the availability checker ever runs.
pub fn validate_interval(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end > start {
        Ok(())
    } else {
        Err(ValidationError::EmptyInterval)
    }
}
