//! TLV serialization.
//!
//! This module provides the [`Serializer`] that renders [`DataObject`] trees and
//! root [`Payload`]s into the EMVCo text form `ID + LL + value`.
//!
//! ## Overview
//!
//! - **Leaves** render their text verbatim after a two-digit length.
//! - **Branches** render their children depth-first, left to right, and use the
//!   concatenation as their value.
//! - **The CRC tag** is handled only by the root walk: it renders as
//!   `63 04 XXXX` where `XXXX` is the CRC16 of everything before it plus `6304`.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use sgqr::{generate_paynow_qr, PayNowOptions};
//!
//! let options = PayNowOptions::new("+6581010321", "10.50").with_expiry("20251228");
//! let qr = generate_paynow_qr(&options).unwrap();
//! assert!(qr.starts_with("000201010212"));
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use sgqr::{DataObject, Serializer};
//!
//! let mut serializer = Serializer::new();
//! serializer
//!     .serialize_object(&DataObject::leaf("53", "Transaction Currency", 3, "702"))
//!     .unwrap();
//! assert_eq!(serializer.into_inner(), "5303702");
//! ```

use crate::payload::{CHECKSUM_LENGTH, CHECKSUM_TAG};
use crate::{crc, object, Content, DataObject, Error, Payload, Result};

/// Largest value length the two-digit length field can express.
pub const MAX_VALUE_LENGTH: usize = 99;

/// The TLV serializer.
///
/// Output accumulates across calls; each payload's checksum covers only that
/// payload. A failed call leaves the output exactly as it was before the call.
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Returns the output accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Appends one data object (leaf or branch) to the output.
    pub fn serialize_object(&mut self, object: &DataObject) -> Result<()> {
        let encoded = encode_object(object)?;
        self.output.push_str(&encoded);
        Ok(())
    }

    /// Walks a root payload left to right and appends the complete encoding,
    /// including the CRC tag, to the output.
    ///
    /// The checksum covers only this payload, so earlier output does not affect
    /// it and a serializer can encode several payloads back to back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChecksum`] if the payload does not end with the
    /// CRC tag and [`Error::ChecksumNotLast`] if anything follows it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, payload), fields(objects = payload.len())))]
    pub fn serialize_payload(&mut self, payload: &Payload) -> Result<()> {
        let mut acc = String::with_capacity(128);
        let last = payload.len().saturating_sub(1);

        for (index, object) in payload.iter().enumerate() {
            if object.tag == CHECKSUM_TAG {
                if index != last {
                    return Err(Error::checksum_not_last(CHECKSUM_TAG));
                }
                let field = checksum_field(&acc);
                #[cfg(feature = "tracing")]
                tracing::debug!(checksum = %&field[4..], length = acc.len() + field.len(), "payload encoded");
                acc.push_str(&field);
            } else {
                acc.push_str(&encode_object(object)?);
            }
        }

        if !payload.ends_with_checksum() {
            return Err(Error::missing_checksum(CHECKSUM_TAG));
        }

        self.output.push_str(&acc);
        Ok(())
    }
}

/// Encodes one data object as `tag ++ LL ++ value`.
///
/// # Errors
///
/// Returns [`Error::InvalidTag`] if the tag is not two ASCII digits and
/// [`Error::LengthExceeded`] if the value (or any nested value) is longer than
/// its `max_length` or than [`MAX_VALUE_LENGTH`].
///
/// # Examples
///
/// ```rust
/// use sgqr::{encode_object, DataObject};
///
/// let additional = DataObject::branch("62", "Additional Data Fields", 99)
///     .with_child(DataObject::leaf("01", "Reference Number", 25, "REF123"));
/// assert_eq!(encode_object(&additional).unwrap(), "62100106REF123");
/// ```
pub fn encode_object(object: &DataObject) -> Result<String> {
    if !object::is_valid_tag(&object.tag) {
        return Err(Error::invalid_tag(&object.tag));
    }

    let value = match &object.content {
        Content::Leaf(text) => {
            check_max_length(object, text.len())?;
            std::borrow::Cow::Borrowed(text.as_str())
        }
        Content::Branch(children) => {
            let mut body = String::new();
            for child in children {
                body.push_str(&encode_object(child)?);
            }
            check_max_length(object, body.len())?;
            std::borrow::Cow::Owned(body)
        }
    };

    let length = format_length(object, value.len())?;
    let mut out = String::with_capacity(4 + value.len());
    out.push_str(&object.tag);
    out.push_str(&length);
    out.push_str(&value);
    Ok(out)
}

/// Formats a value length as exactly two zero-padded decimal digits.
///
/// Lengths above [`MAX_VALUE_LENGTH`] are rejected here regardless of the
/// object's declared `max_length`, so a misconfigured limit can never produce
/// a three-digit or truncated length field.
pub fn format_length(object: &DataObject, length: usize) -> Result<String> {
    if length > MAX_VALUE_LENGTH {
        return Err(Error::length_exceeded(
            &object.tag,
            &object.label,
            length,
            MAX_VALUE_LENGTH.min(object.max_length),
        ));
    }
    Ok(format!("{:02}", length))
}

fn check_max_length(object: &DataObject, length: usize) -> Result<()> {
    if length > object.max_length {
        return Err(Error::length_exceeded(
            &object.tag,
            &object.label,
            length,
            object.max_length,
        ));
    }
    Ok(())
}

/// Renders the CRC tag for a payload whose preceding bytes are `prefix`.
fn checksum_field(prefix: &str) -> String {
    let mut covered = String::with_capacity(prefix.len() + 4);
    covered.push_str(prefix);
    covered.push_str(CHECKSUM_TAG);
    covered.push_str(CHECKSUM_LENGTH);

    let mut field = String::with_capacity(8);
    field.push_str(CHECKSUM_TAG);
    field.push_str(CHECKSUM_LENGTH);
    field.push_str(&crc::crc16_hex(covered.as_bytes()));
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tag: &str, max: usize, value: &str) -> DataObject {
        DataObject::leaf(tag, "test", max, value)
    }

    #[test]
    fn test_leaf_encoding() {
        assert_eq!(encode_object(&leaf("53", 3, "702")).unwrap(), "5303702");
        assert_eq!(encode_object(&leaf("62", 99, "")).unwrap(), "6200");
    }

    #[test]
    fn test_leaf_at_max_length() {
        let obj = leaf("59", 25, &"A".repeat(25));
        let encoded = encode_object(&obj).unwrap();
        assert!(encoded.starts_with("5925"));
        assert_eq!(encoded.len(), 29);
    }

    #[test]
    fn test_leaf_over_max_length() {
        let obj = leaf("59", 25, &"A".repeat(26));
        assert_eq!(
            encode_object(&obj),
            Err(Error::length_exceeded("59", "test", 26, 25))
        );
    }

    #[test]
    fn test_branch_encoding() {
        let obj = DataObject::branch("26", "Merchant Account Information", 99)
            .with_child(leaf("00", 32, "SG.PAYNOW"))
            .with_child(leaf("01", 1, "0"));
        assert_eq!(encode_object(&obj).unwrap(), "26180009SG.PAYNOW01010");
    }

    #[test]
    fn test_branch_max_length_applies_to_body() {
        // Body "0003abc" is 7 characters
        let fits = DataObject::branch("62", "b", 7).with_child(leaf("00", 3, "abc"));
        assert_eq!(encode_object(&fits).unwrap(), "62070003abc");

        let too_small = DataObject::branch("62", "b", 6).with_child(leaf("00", 3, "abc"));
        assert!(matches!(
            encode_object(&too_small),
            Err(Error::LengthExceeded {
                length: 7,
                max_length: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_child_error_propagates() {
        let obj = DataObject::branch("62", "b", 99)
            .with_child(leaf("01", 25, "ok"))
            .with_child(leaf("02", 2, "too long"))
            .with_child(leaf("03", 1, "also too long"));
        match encode_object(&obj) {
            Err(Error::LengthExceeded { tag, .. }) => assert_eq!(tag, "02"),
            other => panic!("expected LengthExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_length_field_guard_ignores_misconfigured_max() {
        let obj = leaf("51", 150, &"9".repeat(100));
        assert!(matches!(
            encode_object(&obj),
            Err(Error::LengthExceeded { length: 100, .. })
        ));

        let obj = leaf("51", 150, &"9".repeat(99));
        assert!(encode_object(&obj).unwrap().starts_with("5199"));
    }

    #[test]
    fn test_invalid_tag_rejected() {
        assert_eq!(
            encode_object(&leaf("5", 3, "702")),
            Err(Error::invalid_tag("5"))
        );
        assert_eq!(
            encode_object(&leaf("x1", 3, "702")),
            Err(Error::invalid_tag("x1"))
        );
    }

    #[test]
    fn test_root_checksum_appended() {
        let mut payload = Payload::new();
        payload.push(leaf("00", 2, "01"));
        payload.push_checksum();

        let mut serializer = Serializer::new();
        serializer.serialize_payload(&payload).unwrap();
        assert_eq!(serializer.into_inner(), "0002016304AAE6");
    }

    #[test]
    fn test_root_only_checksum() {
        let mut payload = Payload::new();
        payload.push_checksum();

        let mut serializer = Serializer::new();
        serializer.serialize_payload(&payload).unwrap();
        assert_eq!(serializer.into_inner(), "63046007");
    }

    #[test]
    fn test_checksum_ignores_supplied_value() {
        let payload = Payload::from(vec![
            leaf("00", 2, "01"),
            DataObject::leaf("63", "CRC", 4, "FFFF"),
        ]);
        let mut serializer = Serializer::new();
        serializer.serialize_payload(&payload).unwrap();
        assert_eq!(serializer.into_inner(), "0002016304AAE6");
    }

    #[test]
    fn test_checksum_must_be_last() {
        let mut payload = Payload::new();
        payload.push_checksum();
        payload.push(leaf("00", 2, "01"));

        let mut serializer = Serializer::new();
        assert_eq!(
            serializer.serialize_payload(&payload),
            Err(Error::checksum_not_last("63"))
        );
        assert_eq!(serializer.as_str(), "");
    }

    #[test]
    fn test_checksum_required() {
        let payload = Payload::from(vec![leaf("00", 2, "01")]);
        let mut serializer = Serializer::new();
        assert_eq!(
            serializer.serialize_payload(&payload),
            Err(Error::missing_checksum("63"))
        );
        assert_eq!(serializer.as_str(), "");

        assert_eq!(
            serializer.serialize_payload(&Payload::new()),
            Err(Error::missing_checksum("63"))
        );
    }

    #[test]
    fn test_reused_serializer_checksums_each_payload() {
        let mut payload = Payload::new();
        payload.push(leaf("00", 2, "01"));
        payload.push_checksum();

        let mut serializer = Serializer::new();
        serializer.serialize_payload(&payload).unwrap();
        assert_eq!(serializer.as_str(), "0002016304AAE6");

        serializer.serialize_payload(&payload).unwrap();
        assert_eq!(serializer.as_str(), "0002016304AAE60002016304AAE6");
    }

    #[test]
    fn test_prior_object_output_not_covered() {
        let mut serializer = Serializer::new();
        serializer.serialize_object(&leaf("53", 3, "702")).unwrap();

        let payload = Payload::from(vec![leaf("00", 2, "01"), DataObject::leaf("63", "CRC", 4, "")]);
        serializer.serialize_payload(&payload).unwrap();
        assert_eq!(serializer.into_inner(), "53037020002016304AAE6");
    }

    #[test]
    fn test_failed_walk_appends_nothing() {
        let mut ok = Payload::new();
        ok.push(leaf("00", 2, "01"));
        ok.push_checksum();

        let mut serializer = Serializer::new();
        serializer.serialize_payload(&ok).unwrap();

        let mut bad = Payload::from(vec![leaf("01", 2, "12"), leaf("59", 2, "too long")]);
        bad.push_checksum();
        assert!(serializer.serialize_payload(&bad).is_err());
        assert_eq!(serializer.as_str(), "0002016304AAE6");
    }
}
