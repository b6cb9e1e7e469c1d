use sgqr::crc::crc16_hex;
use sgqr::{
    data_object, generate_paynow_qr, generate_sgqr, to_string, Error, PayNowOptions, Payload,
    ReceiverType, SgqrOptions,
};

/// Splits a flat TLV string into `(tag, declared length, value)` triples.
fn split_tlv(s: &str) -> Vec<(String, usize, String)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < s.len() {
        let tag = &s[i..i + 2];
        let len: usize = s[i + 2..i + 4].parse().expect("two-digit length");
        let value = &s[i + 4..i + 4 + len];
        out.push((tag.to_string(), len, value.to_string()));
        i += 4 + len;
    }
    assert_eq!(i, s.len(), "trailing bytes after last data object");
    out
}

fn sample_sgqr() -> String {
    let options = SgqrOptions::new(ReceiverType::Uen, "T11LL1111C", "10.50")
        .with_expiry("20251228")
        .with_sgqr_id("SGQR1234567890")
        .with_merchant_name("sgqr_test")
        .with_reference("REF123");
    generate_sgqr(&options).unwrap()
}

#[test]
fn test_root_tag_sequence() {
    let qr = sample_sgqr();
    let tags: Vec<_> = split_tlv(&qr).into_iter().map(|(t, _, _)| t).collect();
    assert_eq!(
        tags,
        vec!["00", "01", "26", "51", "52", "53", "54", "58", "59", "60", "62", "63"]
    );
}

#[test]
fn test_nested_templates_parse() {
    let qr = sample_sgqr();
    let root = split_tlv(&qr);

    let (_, _, mai) = root.iter().find(|(t, _, _)| t == "26").unwrap();
    let nested: Vec<_> = split_tlv(mai)
        .into_iter()
        .map(|(t, _, v)| (t, v))
        .collect();
    assert_eq!(
        nested,
        vec![
            ("00".to_string(), "SG.PAYNOW".to_string()),
            ("01".to_string(), "2".to_string()),
            ("02".to_string(), "T11LL1111C".to_string()),
            ("03".to_string(), "0".to_string()),
            ("04".to_string(), "20251228".to_string()),
        ]
    );

    let (_, _, additional) = root.iter().find(|(t, _, _)| t == "62").unwrap();
    assert_eq!(
        split_tlv(additional),
        vec![("01".to_string(), 6, "REF123".to_string())]
    );
}

#[test]
fn test_every_length_field_matches_value() {
    let qr = generate_paynow_qr(
        &PayNowOptions::new("+6581010321", "10.50")
            .with_expiry("20251228")
            .with_reference("REF123"),
    )
    .unwrap();
    for (tag, len, value) in split_tlv(&qr) {
        assert_eq!(len, value.len(), "tag {}", tag);
    }
}

#[test]
fn test_checksum_recomputes() {
    let qr = sample_sgqr();
    let (body, checksum) = qr.split_at(qr.len() - 4);
    assert!(body.ends_with("6304"));
    assert_eq!(crc16_hex(body.as_bytes()), checksum);
    assert!(checksum
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
}

#[test]
fn test_value_passed_through_verbatim() {
    let mut payload = Payload::new();
    payload.push(data_object!("62", "Additional Data Fields", 99, [
        ("01", "Reference Number", 25, "a b|c:d,e"),
    ]));
    payload.push_checksum();

    let encoded = to_string(&payload).unwrap();
    assert!(encoded.starts_with("62130109a b|c:d,e6304"));
}

#[test]
fn test_template_over_99_rejected() {
    let mut payload = Payload::new();
    payload.push(data_object!("62", "Additional Data Fields", 150, [
        ("01", "Reference Number", 60, &"R".repeat(60)),
        ("05", "Reference Label", 60, &"L".repeat(60)),
    ]));
    payload.push_checksum();

    assert!(matches!(
        to_string(&payload),
        Err(Error::LengthExceeded { ref tag, length: 128, .. }) if tag == "62"
    ));
}

#[test]
fn test_payload_without_checksum_rejected() {
    let mut payload = Payload::new();
    payload.push(data_object!("00", "Payload Format Indicator", 2, "01"));
    assert_eq!(to_string(&payload), Err(Error::missing_checksum("63")));

    let mut buffer = Vec::new();
    assert!(sgqr::to_writer(&mut buffer, &payload).is_err());
    assert!(buffer.is_empty());
}
