/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QRIS CRC16 checksum calculation.
//!
//! QRIS payloads end with tag 63, a CRC16-CCITT (polynomial 0x1021, seed
//! 0xFFFF, no reflection, no final XOR) over every preceding character,
//! including the literal `6304` header of the checksum field itself.

/// CRC16-CCITT generator polynomial.
pub const POLYNOMIAL: u16 = 0x1021;

/// Initial accumulator value.
pub const SEED: u16 = 0xFFFF;

/// Header of the checksum field: tag 63, length 04.
pub const CRC_FIELD_HEADER: &str = "6304";

/// How a checksum value is rendered as hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrcFormat {
    /// Uppercase hex with a single `0` prepended only when the natural
    /// representation is three digits. Values below 0x0100 stay one or two
    /// digits long. Existing QRIS verifiers compare against this rendering.
    #[default]
    Legacy,
    /// Uppercase hex, always four digits, as EMVCo requires on the wire.
    Fixed,
}

/// Calculates the CRC16 of raw bytes.
///
/// # Arguments
/// * `data` - The bytes to checksum
///
/// # Example
/// ```
/// use qris_tlv::calculate_crc16;
///
/// assert_eq!(calculate_crc16(b"123456789"), 0x29B1);
/// ```
#[inline]
#[must_use]
pub fn calculate_crc16(data: &[u8]) -> u16 {
    data.iter().fold(SEED, |crc, &b| update(crc, b))
}

/// Calculates the CRC16 of a string, one character at a time.
///
/// Each character contributes the low byte of its code point. For ASCII input,
/// which is all QRIS allows, this equals [`calculate_crc16`] over the bytes.
#[inline]
#[must_use]
pub fn crc16_str(data: &str) -> u16 {
    data.chars().fold(SEED, |crc, c| update(crc, (u32::from(c) & 0xFF) as u8))
}

#[inline]
fn update(crc: u16, byte: u8) -> u16 {
    let mut crc = crc ^ (u16::from(byte) << 8);
    for _ in 0..8 {
        crc = if crc & 0x8000 != 0 {
            (crc << 1) ^ POLYNOMIAL
        } else {
            crc << 1
        };
    }
    crc
}

/// Formats a checksum value as uppercase hexadecimal.
///
/// # Arguments
/// * `crc` - The checksum value
/// * `format` - Padding policy
#[must_use]
pub fn format_crc16(crc: u16, format: CrcFormat) -> String {
    match format {
        CrcFormat::Fixed => format!("{crc:04X}"),
        CrcFormat::Legacy => {
            let hex = format!("{crc:X}");
            if hex.len() == 3 { format!("0{hex}") } else { hex }
        }
    }
}

/// Computes the checksum of a payload prefix, rendered in [`CrcFormat::Legacy`].
///
/// `payload` should run up to and including the `6304` header.
///
/// # Example
/// ```
/// use qris_tlv::compute_crc16;
///
/// assert_eq!(compute_crc16("000201010211"), "0449");
/// ```
#[inline]
#[must_use]
pub fn compute_crc16(payload: &str) -> String {
    format_crc16(crc16_str(payload), CrcFormat::Legacy)
}

/// Parses a four-digit hexadecimal checksum, in either case.
///
/// # Returns
/// `Some(checksum)` if valid, `None` otherwise.
#[must_use]
pub fn parse_crc16(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}
