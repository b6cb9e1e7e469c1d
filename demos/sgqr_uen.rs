//! Generate an SGQR payload paying a business UEN, with options loaded from JSON.
//!
//! Run with: cargo run --example sgqr_uen

use sgqr::{generate_sgqr, Error, SgqrOptions};

const CONFIG: &str = r#"{
    "receiver_type": "uen",
    "account_number": "T11LL1111C",
    "amount": "10.50",
    "expiry": "20251228",
    "sgqr_id": "SGQR1234567890",
    "merchant_name": "sgqr_test",
    "reference_number": "REF123",
    "merchant_city": "Singapore"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options: SgqrOptions = serde_json::from_str(CONFIG)?;
    println!("SGQR payload:\n{}\n", generate_sgqr(&options)?);

    let oversized = SgqrOptions {
        merchant_name: Some("A merchant name that is far too long".to_string()),
        ..options
    };
    match generate_sgqr(&oversized) {
        Err(err @ Error::LengthExceeded { .. }) => println!("Rejected as expected: {}", err),
        other => println!("Unexpected result: {:?}", other),
    }

    Ok(())
}
