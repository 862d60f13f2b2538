/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QRIS payload decoder.
//!
//! [`QrisDecoder::decode`] is a pure, infallible transformation from payload
//! string to [`QrisRecord`]. Absent tags leave attributes unset; unknown tags
//! are skipped; a trailing fragment too short to be a field is dropped.
//! [`QrisDecoder::decode_strict`] layers the checks in [`crate::validate`] on
//! top for callers that need them.

use crate::config::QrisConfig;
use crate::mapping::TOP_LEVEL;
use crate::validate;
use qris_core::error::DecodeError;
use qris_core::record::QrisRecord;
use qris_tlv::{crc16_str, format_crc16};
use tracing::debug;

/// Decoder for QRIS payloads.
#[derive(Debug, Clone, Default)]
pub struct QrisDecoder {
    config: QrisConfig,
}

impl QrisDecoder {
    /// Creates a decoder with the given configuration.
    #[must_use]
    pub const fn new(config: QrisConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &QrisConfig {
        &self.config
    }

    /// Decodes a payload. Never fails.
    ///
    /// # Arguments
    /// * `payload` - The payload string, already stripped of surrounding whitespace
    #[must_use]
    pub fn decode(&self, payload: &str) -> QrisRecord {
        TOP_LEVEL.decode(payload)
    }

    /// Computes the checksum of `payload`, rendered per the configured format.
    #[must_use]
    pub fn checksum(&self, payload: &str) -> String {
        format_crc16(crc16_str(payload), self.config.crc_format)
    }

    /// Decodes a payload and validates it according to the configuration.
    ///
    /// The size ceiling and the decimal amount fields are always checked; the
    /// checksum and mandatory tags are checked when enabled.
    ///
    /// # Errors
    /// Returns the first `DecodeError` found.
    pub fn decode_strict(&self, payload: &str) -> Result<QrisRecord, DecodeError> {
        self.validate(payload)
            .inspect_err(|e| debug!(error = %e, "payload rejected"))
    }

    fn validate(&self, payload: &str) -> Result<QrisRecord, DecodeError> {
        validate::check_length(payload, self.config.max_payload_len)?;
        if self.config.validate_checksum {
            validate::verify_crc(payload)?;
        }
        let record = self.decode(payload);
        if self.config.validate_mandatory {
            validate::check_mandatory(&record)?;
        }
        validate::check_amounts(&record)?;
        Ok(record)
    }
}

/// Decodes a QRIS payload with the default configuration. Never fails.
///
/// # Example
/// ```
/// use qris_schema::decode_qris;
/// use qris_core::PointOfInitiation;
///
/// let record = decode_qris("000201010211");
/// assert_eq!(record.payload_format_indicator.as_deref(), Some("01"));
/// assert_eq!(record.point_of_initiation_method, Some(PointOfInitiation::Static));
/// ```
#[must_use]
pub fn decode_qris(payload: &str) -> QrisRecord {
    TOP_LEVEL.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qris_core::field::Tag;
    use qris_core::types::{MerchantCriteria, PointOfInitiation};
    use qris_tlv::CrcFormat;
    use rust_decimal::Decimal;

    const VALID: &str = "00020101021226530012COM.XXXX.WWW0118120000123400001234020412340303UMI51380014ID.CO.QRIS.WWW02091234567890303UMI5204723053033605405100005802ID5915TOKO MIXUE BARU6015Kabupaten Tokyo610612313162210110MIXUE BARU0703K196304198D";

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_qris(""), QrisRecord::default());
    }

    #[test]
    fn test_decode_format_and_initiation() {
        let record = decode_qris("000201010211");
        assert_eq!(record.payload_format_indicator.as_deref(), Some("01"));
        assert_eq!(
            record.point_of_initiation_method,
            Some(PointOfInitiation::Static)
        );
        assert!(record.additional_data.is_none());
    }

    #[test]
    fn test_decode_dynamic_initiation() {
        let record = decode_qris("010212");
        assert_eq!(
            record.point_of_initiation_method,
            Some(PointOfInitiation::Dynamic)
        );
    }

    #[test]
    fn test_decode_additional_data() {
        let record = decode_qris("62100206123456");
        let data = record.additional_data.unwrap();
        assert_eq!(data.mobile_number.as_deref(), Some("123456"));
        assert!(data.bill_number.is_none());
    }

    #[test]
    fn test_decode_merchant_account() {
        let record = decode_qris("26160012345678901234");
        let info = record.merchant_account_info.unwrap();
        assert_eq!(info.reverse_domain.as_deref(), Some("345678901234"));
        assert_eq!(record.merchant_accounts.len(), 1);
        assert_eq!(record.merchant_accounts[&Tag::new(26)], info);
    }

    #[test]
    fn test_decode_language() {
        let record = decode_qris("64060002ID");
        let language = record.merchant_info_language.unwrap();
        assert_eq!(language.language_preference.as_deref(), Some("ID"));
        assert!(language.merchant_name_alt_language.is_none());
    }

    #[test]
    fn test_decode_crc() {
        assert_eq!(decode_qris("6304004A").crc.as_deref(), Some("004A"));
    }

    #[test]
    fn test_decode_unreserved() {
        assert_eq!(decode_qris("99020102").unreserved.as_deref(), Some("01"));
    }

    #[test]
    fn test_decode_rfu_last_write_wins() {
        let record = decode_qris("6502aa7902bb");
        assert_eq!(record.rfu.as_deref(), Some("bb"));
    }

    #[test]
    fn test_later_merchant_account_overwrites() {
        let record = decode_qris("26080004AAAA45080004BBBB");
        assert_eq!(
            record
                .merchant_account_info
                .as_ref()
                .and_then(|i| i.reverse_domain.as_deref()),
            Some("BBBB")
        );
        assert_eq!(record.merchant_accounts.len(), 2);
        assert_eq!(
            record.merchant_accounts[&Tag::new(26)]
                .reverse_domain
                .as_deref(),
            Some("AAAA")
        );
    }

    #[test]
    fn test_repeated_scalar_tag_keeps_last() {
        let record = decode_qris("5904TOKO5905WARUNG6007JAKARTA");
        assert_eq!(record.merchant_name.as_deref(), Some("WARUN"));
        assert_eq!(record.merchant_city, None);
    }

    #[test]
    fn test_decode_full_payload() {
        let record = decode_qris(VALID);

        assert_eq!(record.payload_format_indicator.as_deref(), Some("01"));
        assert_eq!(
            record.point_of_initiation_method,
            Some(PointOfInitiation::Dynamic)
        );

        // Tag 51 lies outside 26-45 and is skipped.
        assert_eq!(record.merchant_accounts.len(), 1);
        let info = record.merchant_account_info.as_ref().unwrap();
        assert_eq!(info.reverse_domain.as_deref(), Some("COM.XXXX.WWW"));
        assert_eq!(info.global_id.as_deref(), Some("120000123400001234"));
        assert_eq!(info.id.as_deref(), Some("1234"));
        assert_eq!(info.criteria(), Some(MerchantCriteria::Micro));

        assert_eq!(record.merchant_category_code.as_deref(), Some("7230"));
        assert_eq!(record.transaction_currency.as_deref(), Some("360"));
        assert_eq!(record.amount(), Ok(Some(Decimal::from(10_000))));
        assert_eq!(record.country_code.as_deref(), Some("ID"));
        assert_eq!(record.merchant_name.as_deref(), Some("TOKO MIXUE BARU"));
        assert_eq!(record.merchant_city.as_deref(), Some("Kabupaten Tokyo"));
        assert_eq!(record.postal_code.as_deref(), Some("123131"));

        let data = record.additional_data.as_ref().unwrap();
        assert_eq!(data.bill_number.as_deref(), Some("MIXUE BARU"));
        assert_eq!(data.terminal_label.as_deref(), Some("K19"));

        assert_eq!(record.crc.as_deref(), Some("198D"));
        assert!(record.merchant_info_language.is_none());
        assert!(record.rfu.is_none());
        assert!(record.unreserved.is_none());
    }

    #[test]
    fn test_decode_malformed_nested_length() {
        // The additional data template declares "MI" as a length.
        let payload = "622001MIXUE BARU70703K19630433CE";
        let record = decode_qris(payload);
        assert_eq!(record.additional_data, Some(Default::default()));
        assert_eq!(record.crc.as_deref(), Some("33CE"));
    }

    #[test]
    fn test_decode_never_panics_on_garbage() {
        for payload in ["0", "000", "00ZZ0102", "99", "62990102", "é€12345678", "0002é€"] {
            let _ = decode_qris(payload);
        }
    }

    #[test]
    fn test_checksum_uses_configured_format() {
        let legacy = QrisDecoder::default();
        let fixed = QrisDecoder::new(QrisConfig::new().with_crc_format(CrcFormat::Fixed));
        assert_eq!(legacy.checksum("0E"), "FB");
        assert_eq!(fixed.checksum("0E"), "00FB");
        assert_eq!(legacy.checksum("123456789"), "29B1");
    }

    #[test]
    fn test_decode_strict() {
        let decoder = QrisDecoder::default();
        assert_eq!(decoder.decode_strict(VALID), Ok(decode_qris(VALID)));

        let tampered = VALID.replace("TOKO", "TOKE");
        assert!(matches!(
            decoder.decode_strict(&tampered),
            Err(DecodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_strict_respects_config() {
        let lenient = QrisDecoder::new(
            QrisConfig::new()
                .with_checksum_validation(false)
                .with_mandatory_validation(false),
        );
        assert!(lenient.decode_strict("000201010211").is_ok());

        let small = QrisDecoder::new(QrisConfig::new().with_max_payload_len(8));
        assert!(matches!(
            small.decode_strict(VALID),
            Err(DecodeError::PayloadTooLarge { .. })
        ));
    }
}
