//! Error types for tyname
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error is surfaced immediately to the direct caller. Nothing in this
//! crate retries or recovers: most of these indicate a malformed input
//! handed over by the caller, not a transient condition.

use thiserror::Error;

/// Result type alias for tyname operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tyname
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Slice or index request outside the sequence bounds, or `start > end`
    #[error("Index out of range: [{start}, {end}) on length {len}")]
    OutOfRange {
        /// Requested start index (inclusive)
        start: usize,
        /// Requested end index (exclusive)
        end: usize,
        /// Length of the sequence
        len: usize,
    },

    /// Type name lacks the two `::` delimiters
    #[error("Invalid type name format: {0}")]
    InvalidTypeNameFormat(String),

    /// Character outside `0-9a-fA-F` handed to hex decoding
    #[error("Invalid hex character 0x{character:02x} at position {position}")]
    InvalidHexCharacter {
        /// The offending byte
        character: u8,
        /// Position in the input
        position: usize,
    },

    /// Byte outside the 7-bit ASCII range
    #[error("Invalid ASCII character 0x{byte:02x} at position {position}")]
    InvalidAsciiCharacter {
        /// The offending byte
        byte: u8,
        /// Position in the input
        position: usize,
    },

    /// Hex or binary identifier of the wrong width
    #[error("Invalid identifier length: expected {expected}, got {actual}")]
    InvalidIdLength {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Type name longer than the configured limit
    #[error("Type name too long: {length} bytes (max {max})")]
    TypeNameTooLong {
        /// Actual length in bytes
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// No type name registered for a Rust type
    #[error("Type not registered: {0}")]
    TypeNotRegistered(String),

    /// `add` on an occupied attribute slot
    #[error("Field already exists: {0}")]
    FieldAlreadyExists(String),

    /// `remove` or typed read on an empty attribute slot
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Stored value kind differs from the requested one
    #[error("Field type mismatch for {key}: expected {expected}, found {actual}")]
    FieldTypeMismatch {
        /// Field being accessed
        key: String,
        /// Kind the caller asked for
        expected: String,
        /// Kind actually stored
        actual: String,
    },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Out-of-range error for a single index lookup
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange {
            start: index,
            end: index.saturating_add(1),
            len,
        }
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
