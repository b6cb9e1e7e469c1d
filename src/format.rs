//! EMVCo Merchant-Presented QR Payload Format
//!
//! This module documents the payload format produced by this library.
//!
//! # Overview
//!
//! A merchant-presented QR payload is a flat ASCII string of data objects. Each
//! data object is:
//!
//! ```text
//! ID   LL   VALUE
//! 53   03   702
//! ```
//!
//! - **ID**: exactly two decimal digits (`00`-`99`)
//! - **LL**: value length as exactly two zero-padded decimal digits (`00`-`99`)
//! - **VALUE**: `LL` characters, copied verbatim (no escaping exists)
//!
//! There are no delimiters and no trailing newline. The string is what a QR
//! image layer encodes into the symbol.
//!
//! # Templates
//!
//! Some IDs are templates: their value is itself a sequence of data objects.
//! IDs are scoped to their template, so `01` inside merchant account
//! information is unrelated to the root-level `01`.
//!
//! ```text
//! 26 50
//!    00 09 SG.PAYNOW
//!    01 01 0
//!    02 11 +6581010321
//!    03 01 0
//!    04 08 20251228
//! ```
//!
//! The template's `LL` counts the full serialized children (`50` above), not
//! the number of children.
//!
//! # Lengths
//!
//! A two-digit length field caps any single value at 99 characters. A longer
//! value is rejected; it is never truncated or widened to three digits. Each
//! field also has its own smaller maximum (`59` Merchant Name is 25, for
//! example), enforced before the length field is written.
//!
//! # CRC
//!
//! The last data object is always `63`, with length `04` and a value of four
//! uppercase hex digits:
//!
//! ```text
//! ...6009Singapore62100106REF123 6304 ED0A
//! ```
//!
//! The checksum is CRC-16/CCITT-FALSE:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Width | 16 |
//! | Polynomial | `0x1021` |
//! | Initial value | `0xFFFF` |
//! | Reflect in/out | no |
//! | Final XOR | `0x0000` |
//! | Check (`"123456789"`) | `0x29B1` |
//!
//! It covers every byte before it **plus** its own `6304` prefix, but not its
//! own value. A scanner recomputes it over all but the last four characters.
//!
//! # PayNow Profile
//!
//! | ID | Meaning | Value |
//! |----|---------|-------|
//! | `00` | Payload Format Indicator | `01` |
//! | `01` | Point of Initiation | `11` static, `12` dynamic |
//! | `26` | Merchant Account Information | template (see above) |
//! | `52` | Merchant Category Code | `0000` unless set |
//! | `53` | Currency | `702` (SGD) unless set |
//! | `54` | Amount | caller supplied |
//! | `58` | Country | `SG` unless set |
//! | `59` | Merchant Name | `NA` unless set |
//! | `60` | Merchant City | `Singapore` unless set |
//! | `62` | Additional Data | template, `01` reference number |
//! | `63` | CRC | computed |
//!
//! The SGQR profile inserts `51` (SGQR ID) after `26`, and sets the proxy type
//! `26/01` to `0` for a mobile number or `2` for a UEN.
//!
//! # Limitations
//!
//! - **No decoding**: this crate only produces payloads
//! - **No images**: rendering the QR symbol is left to a QR library
//! - **No business validation**: phone numbers and UENs are not checked beyond
//!   being non-empty and fitting their field

// This module contains only documentation; no implementation code
