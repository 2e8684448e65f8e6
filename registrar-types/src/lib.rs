//! Core type definitions for the registrar API client.
//!
//! This crate defines the fundamental, entity-agnostic types used by the
//! mapping layer and every entity built on it:
//! - [`WireValue`], the JSON-compatible shape exchanged with the remote API
//! - [`Symbol`], the internal form of enumerated string values
//! - the wire time format ([`format_wire_time`], [`parse_wire_time`])
//! - [`ConversionError`], raised when a value cannot cross the wire boundary
//!
//! Entity-specific types (domains, mailboxes, zones, ...) belong in
//! `registrar-entities`, not here.

mod symbol;
mod time;
mod wire;

pub use symbol::Symbol;
pub use time::{WIRE_TIME_FORMAT, format_wire_time, parse_wire_time, truncate_to_seconds};
pub use wire::{WireValue, kind_of};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors raised while converting a value to or from its wire representation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid integer {0:?}")]
    InvalidInteger(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown variant {0:?}")]
    UnknownVariant(String),

    /// Two keys of one object map to the same key after relabeling.
    #[error("key {0:?} appears twice after relabeling")]
    KeyCollision(String),

    /// The instant's year has no four-digit wire spelling.
    #[error("instant {0} is outside the wire year range 0000..=9999")]
    TimeOutOfRange(String),

    #[error("non-finite float {0} has no wire representation")]
    NonFiniteFloat(f64),
}
