//! Payload assembly for the PayNow and SGQR profiles.
//!
//! Both profiles produce the same root layout, in this order:
//!
//! | Tag | Field | Max |
//! |-----|-------|-----|
//! | `00` | Payload Format Indicator (`01`) | 2 |
//! | `01` | Point of Initiation Method (`11` static, `12` dynamic) | 2 |
//! | `26` | Merchant Account Information, PayNow (branch) | 99 |
//! | `51` | SGQR ID (SGQR profile only) | 99 |
//! | `52` | Merchant Category Code | 4 |
//! | `53` | Transaction Currency | 3 |
//! | `54` | Transaction Amount | 13 |
//! | `58` | Country Code | 2 |
//! | `59` | Merchant Name | 25 |
//! | `60` | Merchant City | 15 |
//! | `62` | Additional Data Fields (branch) | 99 |
//! | `63` | CRC | 4 |
//!
//! Merchant account information nests `00` scheme indicator, `01` proxy type,
//! `02` account number, `03` editable flag and `04` expiry. Additional data
//! fields nest `01` reference number.
//!
//! Validation runs before any tree is built. Only the expiry default reads the
//! wall clock; the `*_at` variants take "now" explicitly.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::options::{
    default_expiry_window, MerchantDefaults, PointOfInitiation, ReceiverType,
    DEFAULT_MERCHANT_NAME, EXPIRY_FORMAT, PAYNOW_INDICATOR,
};
use crate::{DataObject, Error, PayNowOptions, Payload, Result, SgqrOptions};

const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Fields common to both profiles, borrowed from the caller's options.
struct Fields<'a> {
    receiver_type: ReceiverType,
    account_number: &'a str,
    amount: &'a str,
    editable: bool,
    expiry: Option<&'a str>,
    sgqr_id: Option<&'a str>,
    merchant_name: Option<&'a str>,
    reference_number: &'a str,
    point_of_initiation: PointOfInitiation,
    merchant: &'a MerchantDefaults,
}

impl<'a> From<&'a PayNowOptions> for Fields<'a> {
    fn from(options: &'a PayNowOptions) -> Self {
        Fields {
            receiver_type: ReceiverType::Mobile,
            account_number: &options.mobile_number,
            amount: &options.amount,
            editable: options.editable,
            expiry: options.expiry.as_deref(),
            sgqr_id: None,
            merchant_name: options.merchant_name.as_deref(),
            reference_number: &options.reference_number,
            point_of_initiation: options.point_of_initiation,
            merchant: &options.merchant,
        }
    }
}

impl<'a> From<&'a SgqrOptions> for Fields<'a> {
    fn from(options: &'a SgqrOptions) -> Self {
        Fields {
            receiver_type: options.receiver_type,
            account_number: &options.account_number,
            amount: &options.amount,
            editable: options.editable,
            expiry: options.expiry.as_deref(),
            sgqr_id: Some(options.sgqr_id.as_str()),
            merchant_name: options.merchant_name.as_deref(),
            reference_number: &options.reference_number,
            point_of_initiation: options.point_of_initiation,
            merchant: &options.merchant,
        }
    }
}

/// Builds the root payload for a PayNow-only QR code.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] for an empty mobile number or amount
/// and [`Error::InvalidDateFormat`] for an expiry that is not `YYYYMMDD`.
pub fn paynow_payload(options: &PayNowOptions) -> Result<Payload> {
    paynow_payload_at(options, Local::now().naive_local())
}

/// Like [`paynow_payload`], with the clock pinned to `now`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use sgqr::{assemble::paynow_payload_at, PayNowOptions};
///
/// let now = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap().and_hms_opt(23, 30, 0).unwrap();
/// let payload = paynow_payload_at(&PayNowOptions::new("+6581010321", "1.00"), now).unwrap();
///
/// let expiry = payload.get("26").and_then(|mai| mai.child("04")).and_then(|e| e.as_str());
/// assert_eq!(expiry, Some("20260101"));
/// ```
pub fn paynow_payload_at(options: &PayNowOptions, now: NaiveDateTime) -> Result<Payload> {
    let fields = Fields::from(options);
    validate(&fields, "mobile_number")?;
    Ok(build(&fields, now))
}

/// Builds the root payload for a generic SGQR code.
///
/// # Errors
///
/// Same validation as [`paynow_payload`], with `account_number` as the
/// required account field.
pub fn sgqr_payload(options: &SgqrOptions) -> Result<Payload> {
    sgqr_payload_at(options, Local::now().naive_local())
}

/// Like [`sgqr_payload`], with the clock pinned to `now`.
pub fn sgqr_payload_at(options: &SgqrOptions, now: NaiveDateTime) -> Result<Payload> {
    let fields = Fields::from(options);
    validate(&fields, "account_number")?;
    Ok(build(&fields, now))
}

/// Parses an 8-digit `YYYYMMDD` calendar date.
///
/// # Examples
///
/// ```rust
/// use sgqr::assemble::parse_expiry;
///
/// assert!(parse_expiry("20251228").is_ok());
/// assert!(parse_expiry("20250230").is_err());
/// assert!(parse_expiry("2025-12-28").is_err());
/// ```
pub fn parse_expiry(value: &str) -> Result<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_date(value, "expected exactly 8 digits"));
    }
    NaiveDate::parse_from_str(value, EXPIRY_FORMAT).map_err(|e| Error::invalid_date(value, e))
}

/// Formats the default expiry: `now` plus the expiry window, as `YYYYMMDD`.
#[must_use]
pub fn default_expiry(now: NaiveDateTime) -> String {
    (now + default_expiry_window())
        .format(EXPIRY_FORMAT)
        .to_string()
}

fn validate(fields: &Fields<'_>, account_field: &str) -> Result<()> {
    let result = check_fields(fields, account_field);
    if let Err(_err) = &result {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %_err, "rejected payload options");
    }
    result
}

fn check_fields(fields: &Fields<'_>, account_field: &str) -> Result<()> {
    if fields.account_number.is_empty() {
        return Err(Error::missing_field(account_field));
    }
    if let Some(expiry) = fields.expiry.filter(|e| !e.is_empty()) {
        parse_expiry(expiry)?;
    }
    if fields.amount.is_empty() {
        return Err(Error::missing_field("amount"));
    }
    Ok(())
}

fn build(fields: &Fields<'_>, now: NaiveDateTime) -> Payload {
    let merchant = fields.merchant;
    let mut payload = Payload::with_capacity(12);

    payload.push(DataObject::leaf(
        "00",
        "Payload Format Indicator",
        2,
        PAYLOAD_FORMAT_INDICATOR,
    ));
    payload.push(DataObject::leaf(
        "01",
        "Point of Initiation Method",
        2,
        fields.point_of_initiation.as_str(),
    ));
    payload.push(merchant_account_information(fields, now));
    if let Some(sgqr_id) = fields.sgqr_id {
        payload.push(DataObject::leaf("51", "SGQR ID", 99, sgqr_id));
    }
    payload.push(DataObject::leaf(
        "52",
        "Merchant Category Code",
        4,
        merchant.merchant_category_code(),
    ));
    payload.push(DataObject::leaf(
        "53",
        "Transaction Currency",
        3,
        merchant.currency(),
    ));
    payload.push(DataObject::leaf(
        "54",
        "Transaction Amount",
        13,
        fields.amount,
    ));
    payload.push(DataObject::leaf(
        "58",
        "Country Code",
        2,
        merchant.country_code(),
    ));
    payload.push(DataObject::leaf(
        "59",
        "Merchant Name",
        25,
        fields.merchant_name.unwrap_or(DEFAULT_MERCHANT_NAME),
    ));
    payload.push(DataObject::leaf(
        "60",
        "Merchant City",
        15,
        merchant.merchant_city(),
    ));
    payload.push(
        DataObject::branch("62", "Additional Data Fields", 99).with_child(DataObject::leaf(
            "01",
            "Reference Number",
            25,
            fields.reference_number,
        )),
    );
    payload.push_checksum();
    payload
}

fn merchant_account_information(fields: &Fields<'_>, now: NaiveDateTime) -> DataObject {
    let expiry = match fields.expiry {
        Some(expiry) if !expiry.is_empty() => expiry.to_string(),
        _ => default_expiry(now),
    };

    DataObject::branch("26", "Merchant Account Information - PayNow", 99)
        .with_child(DataObject::leaf("00", "PayNow Indicator", 32, PAYNOW_INDICATOR))
        .with_child(DataObject::leaf(
            "01",
            "Mobile Or UEN Account",
            1,
            fields.receiver_type.as_str(),
        ))
        .with_child(DataObject::leaf(
            "02",
            "Mobile or UEN Account Number",
            13,
            fields.account_number,
        ))
        .with_child(DataObject::leaf(
            "03",
            "Payment amount editable",
            1,
            if fields.editable { "1" } else { "0" },
        ))
        .with_child(DataObject::leaf("04", "Expiry Date", 8, expiry))
}
