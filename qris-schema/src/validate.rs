/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Payload validation.
//!
//! Decoding is lenient and never fails. These checks are the strict layer a
//! caller can put on top: checksum verification, mandatory-tag presence,
//! numeric amounts, and the payload size ceiling.

use qris_core::error::DecodeError;
use qris_core::field::Tag;
use qris_core::record::QrisRecord;
use qris_core::tags;
use qris_tlv::checksum::CRC_FIELD_HEADER;
use qris_tlv::{Decoder, crc16_str, parse_crc16};
use smallvec::SmallVec;

type Presence = fn(&QrisRecord) -> bool;

/// Top-level tags every QRIS payload must carry, besides a merchant account
/// template.
const MANDATORY: [(Tag, Presence); 7] = [
    (tags::PAYLOAD_FORMAT_INDICATOR, |r| r.payload_format_indicator.is_some()),
    (tags::MERCHANT_CATEGORY_CODE, |r| r.merchant_category_code.is_some()),
    (tags::TRANSACTION_CURRENCY, |r| r.transaction_currency.is_some()),
    (tags::COUNTRY_CODE, |r| r.country_code.is_some()),
    (tags::MERCHANT_NAME, |r| r.merchant_name.is_some()),
    (tags::MERCHANT_CITY, |r| r.merchant_city.is_some()),
    (tags::CRC, |r| r.crc.is_some()),
];

/// Checks the payload length against a ceiling.
///
/// # Errors
/// Returns `DecodeError::PayloadTooLarge` if the payload has more than `max_len` characters.
pub fn check_length(payload: &str, max_len: usize) -> Result<(), DecodeError> {
    let size = payload.chars().count();
    if size > max_len {
        return Err(DecodeError::PayloadTooLarge {
            size,
            max_size: max_len,
        });
    }
    Ok(())
}

/// Verifies the tag 63 checksum against the payload it closes.
///
/// The checksum must be the last top-level field, exactly four hex digits,
/// and equal to the CRC16 of everything before it, `6304` header included.
/// Values are compared numerically, so the case of the hex digits and the
/// padding policy used by the producer do not matter.
///
/// # Errors
/// - `DecodeError::MissingChecksum` if no tag 63 is present
/// - `DecodeError::ChecksumNotLast` if any data follows it
/// - `DecodeError::InvalidChecksum` if its value is not four hex digits
/// - `DecodeError::ChecksumMismatch` if the values differ
pub fn verify_crc(payload: &str) -> Result<(), DecodeError> {
    let mut decoder = Decoder::new(payload);
    let mut seen_crc = false;
    let mut last = None;
    loop {
        let start = decoder.offset();
        let Some(field) = decoder.next_field() else {
            break;
        };
        seen_crc |= field.tag_number() == Some(tags::CRC);
        last = Some((start, decoder.offset(), field));
    }

    let (start, end, field) = match last {
        Some((start, end, field)) if field.tag_number() == Some(tags::CRC) => (start, end, field),
        _ if seen_crc => return Err(DecodeError::ChecksumNotLast),
        _ => return Err(DecodeError::MissingChecksum),
    };
    // A malformed header after the checksum ends the scan without a field.
    if end != payload.len() {
        return Err(DecodeError::ChecksumNotLast);
    }
    if field.length != 4 || field.is_truncated() {
        return Err(DecodeError::InvalidChecksum(field.value.to_string()));
    }
    let declared =
        parse_crc16(field.value).ok_or_else(|| DecodeError::InvalidChecksum(field.value.to_string()))?;

    // The header is four ASCII characters, so this lands on a char boundary.
    let covered = &payload[..start + CRC_FIELD_HEADER.len()];
    let calculated = crc16_str(covered);
    if calculated != declared {
        return Err(DecodeError::ChecksumMismatch {
            calculated,
            declared,
        });
    }
    Ok(())
}

/// Lists the mandatory top-level tags missing from a record.
///
/// Merchant account templates are not part of this list; see
/// [`check_mandatory`].
#[must_use]
pub fn missing_tags(record: &QrisRecord) -> SmallVec<[Tag; 8]> {
    MANDATORY
        .iter()
        .filter(|(_, present)| !present(record))
        .map(|&(tag, _)| tag)
        .collect()
}

/// Checks that every mandatory field is present.
///
/// # Errors
/// Returns `DecodeError::MissingRequiredField` for the first missing tag, or
/// `DecodeError::MissingMerchantAccount` if no template in 26-45 was decoded.
pub fn check_mandatory(record: &QrisRecord) -> Result<(), DecodeError> {
    if let Some(tag) = missing_tags(record).first() {
        return Err(DecodeError::MissingRequiredField { tag: tag.value() });
    }
    if record.merchant_account_info.is_none() {
        return Err(DecodeError::MissingMerchantAccount);
    }
    Ok(())
}

/// Checks that the amount and fee fields, when present, are decimal numbers.
///
/// # Errors
/// Returns `DecodeError::InvalidFieldValue` naming the offending tag.
pub fn check_amounts(record: &QrisRecord) -> Result<(), DecodeError> {
    record.amount()?;
    record.convenience_fee_fixed_amount()?;
    record.convenience_fee_percentage_value()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_qris;
    use crate::decoder::QrisDecoder;

    const VALID: &str = "00020101021226530012COM.XXXX.WWW0118120000123400001234020412340303UMI51380014ID.CO.QRIS.WWW02091234567890303UMI5204723053033605405100005802ID5915TOKO MIXUE BARU6015Kabupaten Tokyo610612313162210110MIXUE BARU0703K196304198D";

    #[test]
    fn test_verify_crc_valid() {
        assert_eq!(verify_crc(VALID), Ok(()));
    }

    #[test]
    fn test_verify_crc_accepts_lowercase() {
        let lower = VALID.replace("6304198D", "6304198d");
        assert_eq!(verify_crc(&lower), Ok(()));
    }

    #[test]
    fn test_verify_crc_mismatch() {
        let tampered = VALID.replace("10000", "90000");
        assert!(matches!(
            verify_crc(&tampered),
            Err(DecodeError::ChecksumMismatch {
                declared: 0x198D,
                ..
            })
        ));
    }

    #[test]
    fn test_verify_crc_missing() {
        assert_eq!(
            verify_crc("000201010211"),
            Err(DecodeError::MissingChecksum)
        );
        assert_eq!(verify_crc(""), Err(DecodeError::MissingChecksum));
    }

    #[test]
    fn test_verify_crc_not_last() {
        let trailing = format!("{VALID}9902ab");
        assert_eq!(verify_crc(&trailing), Err(DecodeError::ChecksumNotLast));

        let dangling = format!("{VALID}99");
        assert_eq!(verify_crc(&dangling), Err(DecodeError::ChecksumNotLast));
    }

    #[test]
    fn test_verify_crc_rejects_unframed_trailer() {
        let junk = format!("{VALID}99ZZjunkjunk");
        assert_eq!(verify_crc(&junk), Err(DecodeError::ChecksumNotLast));
        assert!(matches!(
            QrisDecoder::default().decode_strict(&junk),
            Err(DecodeError::ChecksumNotLast)
        ));
    }

    #[test]
    fn test_verify_crc_invalid_value() {
        assert_eq!(
            verify_crc("0002016304ZZZZ"),
            Err(DecodeError::InvalidChecksum("ZZZZ".to_string()))
        );
        assert_eq!(
            verify_crc("00020163024A"),
            Err(DecodeError::InvalidChecksum("4A".to_string()))
        );
    }

    #[test]
    fn test_check_length() {
        assert_eq!(check_length(VALID, 512), Ok(()));
        assert_eq!(
            check_length(VALID, 10),
            Err(DecodeError::PayloadTooLarge {
                size: VALID.len(),
                max_size: 10,
            })
        );
    }

    #[test]
    fn test_check_mandatory() {
        assert_eq!(check_mandatory(&decode_qris(VALID)), Ok(()));

        let record = decode_qris("000201010211");
        assert_eq!(
            missing_tags(&record).as_slice(),
            &[
                tags::MERCHANT_CATEGORY_CODE,
                tags::TRANSACTION_CURRENCY,
                tags::COUNTRY_CODE,
                tags::MERCHANT_NAME,
                tags::MERCHANT_CITY,
                tags::CRC,
            ]
        );
        assert_eq!(
            check_mandatory(&record),
            Err(DecodeError::MissingRequiredField { tag: 52 })
        );
    }

    #[test]
    fn test_check_mandatory_requires_merchant_account() {
        let without_account = VALID.replace(
            "26530012COM.XXXX.WWW0118120000123400001234020412340303UMI",
            "",
        );
        assert_eq!(
            check_mandatory(&decode_qris(&without_account)),
            Err(DecodeError::MissingMerchantAccount)
        );
    }

    #[test]
    fn test_check_amounts() {
        assert_eq!(check_amounts(&decode_qris(VALID)), Ok(()));
        assert!(matches!(
            check_amounts(&decode_qris("5403abc")),
            Err(DecodeError::InvalidFieldValue { tag: 54, .. })
        ));
    }
}
