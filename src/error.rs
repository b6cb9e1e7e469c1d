//! Error types for QR payload encoding.
//!
//! Every failure is deterministic: the same input always fails the same way,
//! so nothing here is retried or partially recovered. When an encode call
//! returns an error, no payload string is produced.
//!
//! ## Error Categories
//!
//! - **Validation**: a mandatory business field is empty or the expiry is not a
//!   calendar date (detected before any tree is built)
//! - **Length**: a value does not fit its declared maximum or the two-digit
//!   length field (detected during serialization)
//! - **Structure**: malformed tags or a checksum tag that is missing or not last
//! - **I/O**: writer failures in [`crate::to_writer`]
//!
//! ## Examples
//!
//! ```rust
//! use sgqr::{generate_paynow_qr, Error, PayNowOptions};
//!
//! let options = PayNowOptions::new("+6581010321", "");
//! let result = generate_paynow_qr(&options);
//!
//! assert!(matches!(result, Err(Error::MissingRequiredField { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A mandatory business field was empty.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// The supplied expiry is not an 8-digit `YYYYMMDD` calendar date.
    #[error("expiry must be a valid date in the format YYYYMMDD, got {value:?}: {reason}")]
    InvalidDateFormat { value: String, reason: String },

    /// An encoded value is longer than its field allows.
    #[error("tag {tag} ({label}) value length {length} exceeds max length {max_length}")]
    LengthExceeded {
        tag: String,
        label: String,
        length: usize,
        max_length: usize,
    },

    /// A tag that is not exactly two ASCII digits.
    #[error("invalid tag {tag:?}: tags must be exactly two ASCII digits")]
    InvalidTag { tag: String },

    /// A data object was placed after the checksum tag.
    #[error("checksum tag {tag} must be the last data object in the payload")]
    ChecksumNotLast { tag: String },

    /// A root payload that does not end with the checksum tag.
    #[error("payload must end with checksum tag {tag}")]
    MissingChecksum { tag: String },

    /// IO error while writing an encoded payload
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a missing-field error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgqr::Error;
    ///
    /// let err = Error::missing_field("amount");
    /// assert_eq!(err.to_string(), "missing required field: amount");
    /// ```
    pub fn missing_field(field: &str) -> Self {
        Error::MissingRequiredField {
            field: field.to_string(),
        }
    }

    /// Creates a date format error for an expiry that failed to parse.
    pub fn invalid_date<T: fmt::Display>(value: &str, reason: T) -> Self {
        Error::InvalidDateFormat {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a length error for the data object identified by `tag` and `label`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgqr::Error;
    ///
    /// let err = Error::length_exceeded("59", "Merchant Name", 26, 25);
    /// assert!(err.to_string().contains("exceeds max length 25"));
    /// ```
    pub fn length_exceeded(tag: &str, label: &str, length: usize, max_length: usize) -> Self {
        Error::LengthExceeded {
            tag: tag.to_string(),
            label: label.to_string(),
            length,
            max_length,
        }
    }

    pub fn invalid_tag(tag: &str) -> Self {
        Error::InvalidTag {
            tag: tag.to_string(),
        }
    }

    pub fn checksum_not_last(tag: &str) -> Self {
        Error::ChecksumNotLast {
            tag: tag.to_string(),
        }
    }

    pub fn missing_checksum(tag: &str) -> Self {
        Error::MissingChecksum {
            tag: tag.to_string(),
        }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for failures caught before any serialization started.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredField { .. } | Error::InvalidDateFormat { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
