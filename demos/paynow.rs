//! Generate a PayNow QR payload for a mobile number.
//!
//! Run with: cargo run --example paynow

use sgqr::{generate_paynow_qr, PayNowOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = PayNowOptions::new("+6581010321", "10.50")
        .with_expiry("20251228")
        .with_merchant_name("Kopi Stall")
        .with_reference("REF123");

    let qr = generate_paynow_qr(&options)?;
    println!("PayNow payload:\n{}\n", qr);

    // Without an expiry the code is valid for one hour
    let qr = generate_paynow_qr(&PayNowOptions::new("+6581010321", "3.20"))?;
    println!("One-hour payload:\n{}", qr);

    Ok(())
}
