//! CRC-16/CCITT-FALSE checksum used by the EMVCo QR `63` tag.
//!
//! Parameters: polynomial `0x1021`, initial register `0xFFFF`, MSB-first,
//! no reflection, no final XOR. Other CRC16 variants (XMODEM, ARC, KERMIT)
//! produce payloads that scanners reject.

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Computes the CRC-16/CCITT-FALSE checksum of `bytes`.
///
/// # Examples
///
/// ```rust
/// use sgqr::crc::crc16;
///
/// // Standard check value for this parameterization
/// assert_eq!(crc16(b"123456789"), 0x29B1);
/// ```
#[must_use]
pub fn crc16(bytes: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &b in bytes {
        crc ^= u16::from(b) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Renders a checksum as four zero-padded uppercase hex digits.
///
/// ```rust
/// use sgqr::crc::to_hex;
///
/// assert_eq!(to_hex(0x0A1F), "0A1F");
/// ```
#[must_use]
pub fn to_hex(checksum: u16) -> String {
    format!("{:04X}", checksum)
}

/// Computes the checksum of `bytes` and renders it as four uppercase hex digits.
#[must_use]
pub fn crc16_hex(bytes: &[u8]) -> String {
    to_hex(crc16(bytes))
}
