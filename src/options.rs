//! Caller-facing options for PayNow and SGQR payloads.
//!
//! This module provides:
//!
//! - [`PayNowOptions`]: PayNow-only QR (mobile proxy)
//! - [`SgqrOptions`]: generic SGQR with an SGQR ID and a mobile/UEN receiver
//! - [`ReceiverType`] and [`PointOfInitiation`] discriminators
//! - Named defaults for every field the assembler fills in when absent
//!
//! Both option structs deserialize with `#[serde(default)]`, so partial
//! configuration documents are accepted.
//!
//! ## Examples
//!
//! ```rust
//! use sgqr::{PayNowOptions, PointOfInitiation};
//!
//! let options = PayNowOptions::new("+6581010321", "10.50")
//!     .with_merchant_name("Kopi Stall")
//!     .with_reference("INV-42")
//!     .with_editable(true)
//!     .with_point_of_initiation(PointOfInitiation::Static);
//!
//! assert!(options.editable);
//! assert_eq!(options.merchant_name.as_deref(), Some("Kopi Stall"));
//! ```

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Merchant category code used when no MCC applies.
pub const DEFAULT_MERCHANT_CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for SGD.
pub const DEFAULT_CURRENCY: &str = "702";
pub const DEFAULT_COUNTRY_CODE: &str = "SG";
pub const DEFAULT_MERCHANT_CITY: &str = "Singapore";
/// Placeholder name used when none is given; an empty `59` is rejected by
/// many scanners.
pub const DEFAULT_MERCHANT_NAME: &str = "NA";
/// `chrono` format of the expiry sub-tag.
pub const EXPIRY_FORMAT: &str = "%Y%m%d";
/// Payment scheme indicator for PayNow inside merchant account information.
pub const PAYNOW_INDICATOR: &str = "SG.PAYNOW";

/// Expiry applied when the caller supplies none.
#[must_use]
pub fn default_expiry_window() -> Duration {
    Duration::hours(1)
}

/// Kind of PayNow proxy the account number refers to.
///
/// # Examples
///
/// ```rust
/// use sgqr::ReceiverType;
///
/// assert_eq!(ReceiverType::Mobile.as_str(), "0");
/// assert_eq!(ReceiverType::Uen.as_str(), "2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverType {
    #[default]
    Mobile,
    Uen,
}

impl ReceiverType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReceiverType::Mobile => "0",
            ReceiverType::Uen => "2",
        }
    }
}

/// Whether the QR code is reused (static) or single use (dynamic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointOfInitiation {
    Static,
    #[default]
    Dynamic,
}

impl PointOfInitiation {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PointOfInitiation::Static => "11",
            PointOfInitiation::Dynamic => "12",
        }
    }
}

/// Field overrides shared by both payload profiles.
///
/// `None` means "use the named default".
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantDefaults {
    pub merchant_category_code: Option<String>,
    pub currency: Option<String>,
    pub country_code: Option<String>,
    pub merchant_city: Option<String>,
}

impl MerchantDefaults {
    pub(crate) fn merchant_category_code(&self) -> &str {
        self.merchant_category_code
            .as_deref()
            .unwrap_or(DEFAULT_MERCHANT_CATEGORY_CODE)
    }

    pub(crate) fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    pub(crate) fn country_code(&self) -> &str {
        self.country_code.as_deref().unwrap_or(DEFAULT_COUNTRY_CODE)
    }

    pub(crate) fn merchant_city(&self) -> &str {
        self.merchant_city.as_deref().unwrap_or(DEFAULT_MERCHANT_CITY)
    }
}

/// Options for a PayNow-only QR code.
///
/// # Examples
///
/// ```rust
/// use sgqr::PayNowOptions;
///
/// let options: PayNowOptions = serde_json::from_str(
///     r#"{"mobile_number": "+6581010321", "amount": "10.50", "expiry": "20251228"}"#,
/// ).unwrap();
/// assert_eq!(options.expiry.as_deref(), Some("20251228"));
/// assert!(!options.editable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayNowOptions {
    pub mobile_number: String,
    pub amount: String,
    pub editable: bool,
    /// `YYYYMMDD`; defaults to one hour from now.
    pub expiry: Option<String>,
    pub merchant_name: Option<String>,
    pub reference_number: String,
    pub point_of_initiation: PointOfInitiation,
    #[serde(flatten)]
    pub merchant: MerchantDefaults,
}

impl PayNowOptions {
    #[must_use]
    pub fn new(mobile_number: &str, amount: &str) -> Self {
        PayNowOptions {
            mobile_number: mobile_number.to_string(),
            amount: amount.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    #[must_use]
    pub fn with_expiry(mut self, expiry: &str) -> Self {
        self.expiry = Some(expiry.to_string());
        self
    }

    #[must_use]
    pub fn with_merchant_name(mut self, name: &str) -> Self {
        self.merchant_name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference_number = reference.to_string();
        self
    }

    #[must_use]
    pub fn with_point_of_initiation(mut self, method: PointOfInitiation) -> Self {
        self.point_of_initiation = method;
        self
    }

    #[must_use]
    pub fn with_merchant_city(mut self, city: &str) -> Self {
        self.merchant.merchant_city = Some(city.to_string());
        self
    }

    #[must_use]
    pub fn with_merchant_category_code(mut self, mcc: &str) -> Self {
        self.merchant.merchant_category_code = Some(mcc.to_string());
        self
    }
}

/// Options for a generic SGQR code.
///
/// # Examples
///
/// ```rust
/// use sgqr::{ReceiverType, SgqrOptions};
///
/// let options = SgqrOptions::new(ReceiverType::Uen, "T11LL1111C", "10.50")
///     .with_sgqr_id("SGQR1234567890")
///     .with_merchant_name("sgqr_test");
/// assert_eq!(options.receiver_type, ReceiverType::Uen);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SgqrOptions {
    pub receiver_type: ReceiverType,
    pub account_number: String,
    pub amount: String,
    pub editable: bool,
    /// `YYYYMMDD`; defaults to one hour from now.
    pub expiry: Option<String>,
    pub sgqr_id: String,
    pub merchant_name: Option<String>,
    pub reference_number: String,
    pub point_of_initiation: PointOfInitiation,
    #[serde(flatten)]
    pub merchant: MerchantDefaults,
}

impl SgqrOptions {
    #[must_use]
    pub fn new(receiver_type: ReceiverType, account_number: &str, amount: &str) -> Self {
        SgqrOptions {
            receiver_type,
            account_number: account_number.to_string(),
            amount: amount.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_sgqr_id(mut self, sgqr_id: &str) -> Self {
        self.sgqr_id = sgqr_id.to_string();
        self
    }

    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    #[must_use]
    pub fn with_expiry(mut self, expiry: &str) -> Self {
        self.expiry = Some(expiry.to_string());
        self
    }

    #[must_use]
    pub fn with_merchant_name(mut self, name: &str) -> Self {
        self.merchant_name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference_number = reference.to_string();
        self
    }

    #[must_use]
    pub fn with_point_of_initiation(mut self, method: PointOfInitiation) -> Self {
        self.point_of_initiation = method;
        self
    }

    #[must_use]
    pub fn with_merchant_city(mut self, city: &str) -> Self {
        self.merchant.merchant_city = Some(city.to_string());
        self
    }

    #[must_use]
    pub fn with_merchant_category_code(mut self, mcc: &str) -> Self {
        self.merchant.merchant_category_code = Some(mcc.to_string());
        self
    }
}
