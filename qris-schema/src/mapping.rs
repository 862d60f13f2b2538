/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QRIS tag mappings.
//!
//! Four immutable dispatch tables describe the payload: the top level and the
//! three nested templates. Nested templates are decoded by re-running the TLV
//! decoder over the template's value; none of them defines a nested range of
//! its own, so recursion stops one level down.

use qris_core::field::{MERCHANT_ACCOUNT_RANGE, RFU_RANGE, UNRESERVED_RANGE};
use qris_core::record::{AdditionalData, LanguageInfo, MerchantAccountInfo, QrisRecord};
use qris_core::tags::{self, additional_data, language, merchant_account};
use qris_core::types::PointOfInitiation;
use qris_tlv::TagMap;
use std::sync::LazyLock;

/// Merchant account information template (inside tags 26-45).
pub static MERCHANT_ACCOUNT: LazyLock<TagMap<MerchantAccountInfo>> = LazyLock::new(|| {
    TagMap::<MerchantAccountInfo>::new()
        .on(merchant_account::REVERSE_DOMAIN, |r, _, v| {
            r.reverse_domain = Some(v.to_owned());
        })
        .on(merchant_account::GLOBAL_ID, |r, _, v| r.global_id = Some(v.to_owned()))
        .on(merchant_account::ID, |r, _, v| r.id = Some(v.to_owned()))
        .on(merchant_account::TYPE, |r, _, v| r.r#type = Some(v.to_owned()))
});

/// Additional data field template (inside tag 62).
pub static ADDITIONAL_DATA: LazyLock<TagMap<AdditionalData>> = LazyLock::new(|| {
    TagMap::<AdditionalData>::new()
        .on(additional_data::BILL_NUMBER, |r, _, v| r.bill_number = Some(v.to_owned()))
        .on(additional_data::MOBILE_NUMBER, |r, _, v| {
            r.mobile_number = Some(v.to_owned());
        })
        .on(additional_data::STORE_LABEL, |r, _, v| r.store_label = Some(v.to_owned()))
        .on(additional_data::LOYALTY_NUMBER, |r, _, v| {
            r.loyalty_number = Some(v.to_owned());
        })
        .on(additional_data::REFERENCE_LABEL, |r, _, v| {
            r.reference_label = Some(v.to_owned());
        })
        .on(additional_data::CUSTOMER_LABEL, |r, _, v| {
            r.customer_label = Some(v.to_owned());
        })
        .on(additional_data::TERMINAL_LABEL, |r, _, v| {
            r.terminal_label = Some(v.to_owned());
        })
        .on(additional_data::PURPOSE_OF_TRANSACTION, |r, _, v| {
            r.purpose_of_transaction = Some(v.to_owned());
        })
        .on(additional_data::ADDITIONAL_CONSUMER_DATA_REQUEST, |r, _, v| {
            r.additional_consumer_data_request = Some(v.to_owned());
        })
        .on(additional_data::MERCHANT_TAX_ID, |r, _, v| {
            r.merchant_tax_id = Some(v.to_owned());
        })
        .on(additional_data::MERCHANT_CHANNEL, |r, _, v| {
            r.merchant_channel = Some(v.to_owned());
        })
});

/// Merchant information language template (inside tag 64).
pub static LANGUAGE: LazyLock<TagMap<LanguageInfo>> = LazyLock::new(|| {
    TagMap::<LanguageInfo>::new()
        .on(language::LANGUAGE_PREFERENCE, |r, _, v| {
            r.language_preference = Some(v.to_owned());
        })
        .on(language::MERCHANT_NAME_ALT_LANGUAGE, |r, _, v| {
            r.merchant_name_alt_language = Some(v.to_owned());
        })
        .on(language::MERCHANT_CITY_ALT_LANGUAGE, |r, _, v| {
            r.merchant_city_alt_language = Some(v.to_owned());
        })
});

/// Top-level payload.
pub static TOP_LEVEL: LazyLock<TagMap<QrisRecord>> = LazyLock::new(|| {
    TagMap::<QrisRecord>::new()
        .on(tags::PAYLOAD_FORMAT_INDICATOR, |r, _, v| {
            r.payload_format_indicator = Some(v.to_owned());
        })
        .on(tags::POINT_OF_INITIATION_METHOD, |r, _, v| {
            r.point_of_initiation_method = Some(PointOfInitiation::from_code(v));
        })
        .on_range(MERCHANT_ACCOUNT_RANGE, |r, tag, v| {
            let info = MERCHANT_ACCOUNT.decode(v);
            r.merchant_accounts.insert(tag, info.clone());
            r.merchant_account_info = Some(info);
        })
        .on(tags::MERCHANT_CATEGORY_CODE, |r, _, v| {
            r.merchant_category_code = Some(v.to_owned());
        })
        .on(tags::TRANSACTION_CURRENCY, |r, _, v| {
            r.transaction_currency = Some(v.to_owned());
        })
        .on(tags::TRANSACTION_AMOUNT, |r, _, v| {
            r.transaction_amount = Some(v.to_owned());
        })
        .on(tags::TIP_OR_CONVENIENCE_INDICATOR, |r, _, v| {
            r.tip_or_convenience_indicator = Some(v.to_owned());
        })
        .on(tags::CONVENIENCE_FEE_FIXED, |r, _, v| {
            r.convenience_fee_fixed = Some(v.to_owned());
        })
        .on(tags::CONVENIENCE_FEE_PERCENTAGE, |r, _, v| {
            r.convenience_fee_percentage = Some(v.to_owned());
        })
        .on(tags::COUNTRY_CODE, |r, _, v| r.country_code = Some(v.to_owned()))
        .on(tags::MERCHANT_NAME, |r, _, v| r.merchant_name = Some(v.to_owned()))
        .on(tags::MERCHANT_CITY, |r, _, v| r.merchant_city = Some(v.to_owned()))
        .on(tags::POSTAL_CODE, |r, _, v| r.postal_code = Some(v.to_owned()))
        .on(tags::ADDITIONAL_DATA, |r, _, v| {
            r.additional_data = Some(ADDITIONAL_DATA.decode(v));
        })
        .on(tags::CRC, |r, _, v| r.crc = Some(v.to_owned()))
        .on(tags::MERCHANT_INFO_LANGUAGE, |r, _, v| {
            r.merchant_info_language = Some(LANGUAGE.decode(v));
        })
        .on_range(RFU_RANGE, |r, _, v| r.rfu = Some(v.to_owned()))
        .on_range(UNRESERVED_RANGE, |r, _, v| r.unreserved = Some(v.to_owned()))
});
