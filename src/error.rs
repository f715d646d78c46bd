//! Error types for tutordesk.
//!
//! Every variant carries a fixed, user-facing message. Command handlers and
//! the storage layer surface these messages verbatim, so the exact strings
//! are part of the crate's contract and are pinned by tests.

use thiserror::Error;

/// Result type alias for parsing and reconstruction operations
pub type ParseResult<T> = Result<T, ParseError>;

/// A data-constraint violation, raised when parsing command input or when
/// reconstructing entities from persisted records.
///
/// No error is ever recovered internally; the first failure propagates to
/// the caller. Collection parsers stop at the first invalid element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field's textual form fails its validity predicate. Carries the
    /// value type's constraint message.
    #[error("{0}")]
    InvalidFormat(&'static str),

    /// A required field is absent from a persisted record
    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Index text is not a non-zero unsigned integer
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// Structural or calendar failure while parsing a date-time. Carries
    /// either the February guard message or the generic format message.
    #[error("{0}")]
    InvalidDate(&'static str),

    /// Non-numeric hours input
    #[error("Hours should be a number.")]
    InvalidNumeric,

    /// A persisted list contains two entries with the same identity
    #[error("{0}")]
    DuplicateEntity(&'static str),
}
