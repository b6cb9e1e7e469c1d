//! Build a payload tree by hand and write it to stdout.
//!
//! Run with: cargo run --example custom_tree

use sgqr::{data_object, to_writer, Payload};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut payload = Payload::new();
    payload.push(data_object!("00", "Payload Format Indicator", 2, "01"));
    payload.push(data_object!("01", "Point of Initiation Method", 2, "11"));
    payload.push(data_object!("26", "Merchant Account Information - PayNow", 99, [
        ("00", "PayNow Indicator", 32, "SG.PAYNOW"),
        ("01", "Mobile Or UEN Account", 1, "2"),
        ("02", "Mobile or UEN Account Number", 13, "T11LL1111C"),
        ("03", "Payment amount editable", 1, "1"),
        ("04", "Expiry Date", 8, "20991231"),
    ]));
    payload.push(data_object!("52", "Merchant Category Code", 4, "5812"));
    payload.push(data_object!("53", "Transaction Currency", 3, "702"));
    payload.push(data_object!("58", "Country Code", 2, "SG"));
    payload.push(data_object!("59", "Merchant Name", 25, "Hawker Centre #01-23"));
    payload.push(data_object!("60", "Merchant City", 15, "Singapore"));
    payload.push_checksum();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    to_writer(&mut handle, &payload)?;
    writeln!(handle)?;

    Ok(())
}
