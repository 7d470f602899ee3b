//! Error types for deltacast.
//!
//! Decode errors carry the offending raw value or field name so callers can
//! report a precise diagnostic. Every decode error is fatal to the whole
//! transcoding call; there is no skip-and-continue mode and nothing is
//! retried.

use thiserror::Error;

/// The main error type for deltacast operations.
#[derive(Debug, Error)]
pub enum CastError {
    /// A required header field is absent, or a header field has the wrong
    /// type.
    #[error("missing or invalid header field: {field}")]
    MissingOrInvalidField {
        /// The field that failed validation (nested fields are dotted, e.g.
        /// `theme.fg`).
        field: String,
    },

    /// The first element of an event record is not a number.
    #[error("invalid event time: {value}")]
    InvalidTime {
        /// The offending raw value, rendered as JSON.
        value: String,
    },

    /// The second element of an event record is not a string.
    #[error("invalid event code: {value}")]
    InvalidCode {
        /// The offending raw value, rendered as JSON.
        value: String,
    },

    /// A record is not valid JSON or does not have the required shape.
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// Why the record was rejected.
        reason: String,
    },

    /// An I/O error on the underlying input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for deltacast operations.
pub type Result<T> = std::result::Result<T, CastError>;

impl CastError {
    /// Create a missing-or-invalid-field error for a header field.
    pub fn field(field: impl Into<String>) -> Self {
        Self::MissingOrInvalidField {
            field: field.into(),
        }
    }

    /// Create an invalid-time error from the offending raw value.
    pub fn invalid_time(value: impl Into<String>) -> Self {
        Self::InvalidTime {
            value: value.into(),
        }
    }

    /// Create an invalid-code error from the offending raw value.
    pub fn invalid_code(value: impl Into<String>) -> Self {
        Self::InvalidCode {
            value: value.into(),
        }
    }

    /// Create a malformed-record error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// Check if this error came from decoding rather than stream I/O.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Get the offending raw value if this error carries one.
    #[must_use]
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::InvalidTime { value } | Self::InvalidCode { value } => Some(value),
            _ => None,
        }
    }
}
