//! # sgqr
//!
//! An encoder for Singapore PayNow and SGQR merchant-presented QR payloads.
//!
//! ## What does it produce?
//!
//! The EMVCo merchant-presented QR format is a flat string of tag-length-value
//! data objects, some of them nested, terminated by a CRC16 checksum tag. That
//! string is what a banking app reads when it scans a PayNow code. This crate
//! builds the string; turning it into a QR image is left to a QR library.
//!
//! ## Key Features
//!
//! - **Typed TLV trees**: every data object is a leaf or a branch, checked at
//!   compile time
//! - **Length enforcement**: per-field maximums plus the two-digit length cap
//! - **CRC-16/CCITT-FALSE**: the exact checksum variant scanners expect
//! - **Deterministic**: pure in-memory encoding, safe to call from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use sgqr::{generate_paynow_qr, PayNowOptions};
//!
//! let options = PayNowOptions::new("+6581010321", "10.50")
//!     .with_expiry("20251228")
//!     .with_reference("REF123");
//!
//! let qr = generate_paynow_qr(&options).unwrap();
//! assert_eq!(
//!     qr,
//!     "00020101021226500009SG.PAYNOW010100211+658101032103010040820251228\
//!      520400005303702540510.505802SG5902NA6009Singapore62100106REF1236304ED0A"
//! );
//! ```
//!
//! ### Generic SGQR with a UEN receiver
//!
//! ```rust
//! use sgqr::{generate_sgqr, ReceiverType, SgqrOptions};
//!
//! let options = SgqrOptions::new(ReceiverType::Uen, "T11LL1111C", "10.50")
//!     .with_sgqr_id("SGQR1234567890")
//!     .with_merchant_name("sgqr_test");
//!
//! let qr = generate_sgqr(&options).unwrap();
//! assert!(qr.contains("5114SGQR1234567890"));
//! ```
//!
//! ### Custom trees
//!
//! ```rust
//! use sgqr::{data_object, to_string, Payload};
//!
//! let mut payload = Payload::new();
//! payload.push(data_object!("00", "Payload Format Indicator", 2, "01"));
//! payload.push(data_object!("62", "Additional Data Fields", 99, [
//!     ("01", "Reference Number", 25, "REF123"),
//! ]));
//! payload.push_checksum();
//!
//! let encoded = to_string(&payload).unwrap();
//! assert!(encoded.starts_with("00020162100106REF1236304"));
//! ```
//!
//! ## Logging
//!
//! Enable the `tracing` feature to instrument the entry points with
//! [`tracing`](https://docs.rs/tracing) spans and debug events.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the wire format and the PayNow tag catalog.

pub mod assemble;
pub mod crc;
pub mod error;
pub mod format;
pub mod macros;
pub mod object;
pub mod options;
pub mod payload;
pub mod ser;

pub use error::{Error, Result};
pub use object::{Content, DataObject};
pub use options::{MerchantDefaults, PayNowOptions, PointOfInitiation, ReceiverType, SgqrOptions};
pub use payload::Payload;
pub use ser::{encode_object, Serializer};

use std::io;

/// Encodes a PayNow-only QR payload.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] or [`Error::InvalidDateFormat`] when
/// the options are rejected, and [`Error::LengthExceeded`] when a value does
/// not fit its field. No partial string is ever returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
#[cfg_attr(feature = "tracing", tracing::instrument(skip(options), err))]
pub fn generate_paynow_qr(options: &PayNowOptions) -> Result<String> {
    let payload = assemble::paynow_payload(options)?;
    to_string(&payload)
}

/// Encodes a generic SGQR payload.
///
/// # Errors
///
/// Same as [`generate_paynow_qr`].
#[must_use = "this returns the result of the operation, errors must be handled"]
#[cfg_attr(feature = "tracing", tracing::instrument(skip(options), fields(receiver = ?options.receiver_type), err))]
pub fn generate_sgqr(options: &SgqrOptions) -> Result<String> {
    let payload = assemble::sgqr_payload(options)?;
    to_string(&payload)
}

/// Encodes a root payload, computing its terminating CRC tag.
///
/// # Errors
///
/// Returns an error if any data object has an invalid tag or exceeds its
/// length, or if the payload does not end with the CRC tag.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(payload: &Payload) -> Result<String> {
    let mut serializer = Serializer::new();
    serializer.serialize_payload(payload)?;
    Ok(serializer.into_inner())
}

/// Encodes a root payload into a writer.
///
/// Nothing is written when encoding fails.
///
/// # Examples
///
/// ```rust
/// use sgqr::{to_writer, DataObject, Payload};
///
/// let mut payload = Payload::new();
/// payload.push(DataObject::leaf("00", "Payload Format Indicator", 2, "01"));
/// payload.push_checksum();
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &payload).unwrap();
/// assert_eq!(buffer, b"0002016304AAE6");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, payload: &Payload) -> Result<()>
where
    W: io::Write,
{
    let encoded = to_string(payload)?;
    writer
        .write_all(encoded.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYNOW_REFERENCE: &str = "00020101021226500009SG.PAYNOW010100211+658101032103010040820251228520400005303702540510.505802SG5902NA6009Singapore62100106REF1236304ED0A";

    fn reference_options() -> PayNowOptions {
        PayNowOptions::new("+6581010321", "10.50")
            .with_editable(false)
            .with_expiry("20251228")
            .with_reference("REF123")
    }

    #[test]
    fn test_paynow_reference_payload() {
        assert_eq!(
            generate_paynow_qr(&reference_options()).unwrap(),
            PAYNOW_REFERENCE
        );
    }

    #[test]
    fn test_sgqr_reference_payload() {
        let options = SgqrOptions::new(ReceiverType::Uen, "T11LL1111C", "10.50")
            .with_expiry("20251228")
            .with_sgqr_id("SGQR1234567890")
            .with_merchant_name("sgqr_test")
            .with_reference("REF123");
        assert_eq!(
            generate_sgqr(&options).unwrap(),
            "00020101021226490009SG.PAYNOW010120210T11LL1111C030100408202512285114SGQR1234567890520400005303702540510.505802SG5909sgqr_test6009Singapore62100106REF1236304D040"
        );
    }

    #[test]
    fn test_to_writer_matches_to_string() {
        let payload = assemble::paynow_payload(&reference_options()).unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &payload).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), PAYNOW_REFERENCE);
    }

    #[test]
    fn test_to_writer_writes_nothing_on_error() {
        let mut payload = Payload::new();
        payload.push(DataObject::leaf("59", "Merchant Name", 25, "x".repeat(26)));
        payload.push_checksum();

        let mut buffer = Vec::new();
        assert!(to_writer(&mut buffer, &payload).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_empty_amount_rejected() {
        let options = PayNowOptions::new("+6581010321", "");
        assert_eq!(
            generate_paynow_qr(&options),
            Err(Error::missing_field("amount"))
        );
    }
}
