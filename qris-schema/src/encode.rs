/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Encoding of [`QrisRecord`] values back into payload strings.

use qris_core::error::EncodeError;
use qris_core::field::Tag;
use qris_core::record::{AdditionalData, LanguageInfo, MerchantAccountInfo, QrisRecord};
use qris_core::tags::{self, additional_data, language, merchant_account};
use qris_tlv::Encoder;
use tracing::debug;

/// Encodes a record as a finalized payload.
///
/// Fields are written in ascending tag order, except that the checksum is
/// always last. The record's own `crc` is ignored and a fresh four-digit
/// checksum is computed. Every entry of `merchant_accounts` is written under
/// its tag, and `merchant_account_info` is then not written at all. When that
/// map is empty, `merchant_account_info` is written under tag 26. `rfu` is
/// written as tag 65 and `unreserved` as tag 80.
///
/// # Errors
/// - `EncodeError::FieldTooLong` if any value, nested templates included,
///   exceeds 99 characters
/// - `EncodeError::InvalidTag` if a `merchant_accounts` key lies outside 26-45
pub fn encode_qris(record: &QrisRecord) -> Result<String, EncodeError> {
    let mut enc = Encoder::new();

    put(&mut enc, tags::PAYLOAD_FORMAT_INDICATOR, &record.payload_format_indicator)?;
    if let Some(method) = record.point_of_initiation_method {
        enc.put_str(tags::POINT_OF_INITIATION_METHOD, method.code())?;
    }

    if record.merchant_accounts.is_empty() {
        if let Some(info) = &record.merchant_account_info {
            enc.put_nested(tags::MERCHANT_ACCOUNT_INFO_PRIMARY, &merchant_account_template(info)?)?;
        }
    } else {
        if record.merchant_account_info.as_ref() != record.merchant_accounts.values().next_back() {
            debug!("merchant_account_info differs from merchant_accounts and is not written");
        }
        for (&tag, info) in &record.merchant_accounts {
            if !tag.is_merchant_account() {
                return Err(EncodeError::InvalidTag(tag.value()));
            }
            enc.put_nested(tag, &merchant_account_template(info)?)?;
        }
    }

    put(&mut enc, tags::MERCHANT_CATEGORY_CODE, &record.merchant_category_code)?;
    put(&mut enc, tags::TRANSACTION_CURRENCY, &record.transaction_currency)?;
    put(&mut enc, tags::TRANSACTION_AMOUNT, &record.transaction_amount)?;
    put(
        &mut enc,
        tags::TIP_OR_CONVENIENCE_INDICATOR,
        &record.tip_or_convenience_indicator,
    )?;
    put(&mut enc, tags::CONVENIENCE_FEE_FIXED, &record.convenience_fee_fixed)?;
    put(
        &mut enc,
        tags::CONVENIENCE_FEE_PERCENTAGE,
        &record.convenience_fee_percentage,
    )?;
    put(&mut enc, tags::COUNTRY_CODE, &record.country_code)?;
    put(&mut enc, tags::MERCHANT_NAME, &record.merchant_name)?;
    put(&mut enc, tags::MERCHANT_CITY, &record.merchant_city)?;
    put(&mut enc, tags::POSTAL_CODE, &record.postal_code)?;

    if let Some(data) = &record.additional_data {
        enc.put_nested(tags::ADDITIONAL_DATA, &additional_data_template(data)?)?;
    }
    if let Some(info) = &record.merchant_info_language {
        enc.put_nested(tags::MERCHANT_INFO_LANGUAGE, &language_template(info)?)?;
    }
    put(&mut enc, tags::RFU_FIRST, &record.rfu)?;
    put(&mut enc, tags::UNRESERVED_FIRST, &record.unreserved)?;

    Ok(String::from_utf8_lossy(&enc.finish()).into_owned())
}

fn put(enc: &mut Encoder, tag: Tag, value: &Option<String>) -> Result<(), EncodeError> {
    match value {
        Some(v) => enc.put_str(tag, v),
        None => Ok(()),
    }
}

fn merchant_account_template(info: &MerchantAccountInfo) -> Result<Encoder, EncodeError> {
    let mut enc = Encoder::with_capacity(64);
    put(&mut enc, merchant_account::REVERSE_DOMAIN, &info.reverse_domain)?;
    put(&mut enc, merchant_account::GLOBAL_ID, &info.global_id)?;
    put(&mut enc, merchant_account::ID, &info.id)?;
    put(&mut enc, merchant_account::TYPE, &info.r#type)?;
    Ok(enc)
}

fn additional_data_template(data: &AdditionalData) -> Result<Encoder, EncodeError> {
    let mut enc = Encoder::with_capacity(64);
    put(&mut enc, additional_data::BILL_NUMBER, &data.bill_number)?;
    put(&mut enc, additional_data::MOBILE_NUMBER, &data.mobile_number)?;
    put(&mut enc, additional_data::STORE_LABEL, &data.store_label)?;
    put(&mut enc, additional_data::LOYALTY_NUMBER, &data.loyalty_number)?;
    put(&mut enc, additional_data::REFERENCE_LABEL, &data.reference_label)?;
    put(&mut enc, additional_data::CUSTOMER_LABEL, &data.customer_label)?;
    put(&mut enc, additional_data::TERMINAL_LABEL, &data.terminal_label)?;
    put(
        &mut enc,
        additional_data::PURPOSE_OF_TRANSACTION,
        &data.purpose_of_transaction,
    )?;
    put(
        &mut enc,
        additional_data::ADDITIONAL_CONSUMER_DATA_REQUEST,
        &data.additional_consumer_data_request,
    )?;
    put(&mut enc, additional_data::MERCHANT_TAX_ID, &data.merchant_tax_id)?;
    put(&mut enc, additional_data::MERCHANT_CHANNEL, &data.merchant_channel)?;
    Ok(enc)
}

fn language_template(info: &LanguageInfo) -> Result<Encoder, EncodeError> {
    let mut enc = Encoder::with_capacity(32);
    put(&mut enc, language::LANGUAGE_PREFERENCE, &info.language_preference)?;
    put(
        &mut enc,
        language::MERCHANT_NAME_ALT_LANGUAGE,
        &info.merchant_name_alt_language,
    )?;
    put(
        &mut enc,
        language::MERCHANT_CITY_ALT_LANGUAGE,
        &info.merchant_city_alt_language,
    )?;
    Ok(enc)
}
