//! Structured user-facing messages.
//!
//! Every string shown to the user is a [`Message`] variant rendered through
//! its `Display` impl; the `msg_*` macros route the text to the console or
//! the tracing system.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
