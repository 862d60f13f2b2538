/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decoded QRIS records.
//!
//! Every attribute is optional: the decoder never enforces tag presence, so a
//! tag missing from the payload simply leaves its attribute unset. Records are
//! plain owned values produced in a single decode pass.

use crate::error::DecodeError;
use crate::field::Tag;
use crate::tags;
use crate::types::{MerchantCriteria, PointOfInitiation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Merchant account information template (tags 26-45).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantAccountInfo {
    /// Reverse domain of the acquirer (sub-tag 00).
    pub reverse_domain: Option<String>,
    /// Merchant PAN / global identifier (sub-tag 01).
    pub global_id: Option<String>,
    /// Merchant ID (sub-tag 02).
    pub id: Option<String>,
    /// Merchant criteria code (sub-tag 03).
    #[serde(rename = "type")]
    pub r#type: Option<String>,
}

impl MerchantAccountInfo {
    /// Returns the merchant criteria named by sub-tag 03, if present.
    #[must_use]
    pub fn criteria(&self) -> Option<MerchantCriteria> {
        self.r#type.as_deref().map(MerchantCriteria::from_code)
    }
}

/// Additional data field template (tag 62).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    pub bill_number: Option<String>,
    pub mobile_number: Option<String>,
    pub store_label: Option<String>,
    pub loyalty_number: Option<String>,
    pub reference_label: Option<String>,
    pub customer_label: Option<String>,
    pub terminal_label: Option<String>,
    pub purpose_of_transaction: Option<String>,
    pub additional_consumer_data_request: Option<String>,
    pub merchant_tax_id: Option<String>,
    pub merchant_channel: Option<String>,
}

/// Merchant information in an alternate language (tag 64).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub language_preference: Option<String>,
    pub merchant_name_alt_language: Option<String>,
    pub merchant_city_alt_language: Option<String>,
}

/// A decoded QRIS payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrisRecord {
    /// Tag 00.
    pub payload_format_indicator: Option<String>,
    /// Tag 01.
    pub point_of_initiation_method: Option<PointOfInitiation>,
    /// The last merchant account template seen among tags 26-45.
    pub merchant_account_info: Option<MerchantAccountInfo>,
    /// Every merchant account template, keyed by the tag it was carried under.
    ///
    /// When non-empty, encoding writes these and ignores `merchant_account_info`.
    pub merchant_accounts: BTreeMap<Tag, MerchantAccountInfo>,
    /// Tag 52.
    pub merchant_category_code: Option<String>,
    /// Tag 53, ISO 4217 numeric.
    pub transaction_currency: Option<String>,
    /// Tag 54.
    pub transaction_amount: Option<String>,
    /// Tag 55.
    pub tip_or_convenience_indicator: Option<String>,
    /// Tag 56.
    pub convenience_fee_fixed: Option<String>,
    /// Tag 57.
    pub convenience_fee_percentage: Option<String>,
    /// Tag 58, ISO 3166-1 alpha-2.
    pub country_code: Option<String>,
    /// Tag 59.
    pub merchant_name: Option<String>,
    /// Tag 60.
    pub merchant_city: Option<String>,
    /// Tag 61.
    pub postal_code: Option<String>,
    /// Tag 62.
    pub additional_data: Option<AdditionalData>,
    /// Tag 63, exactly as it appeared in the payload.
    pub crc: Option<String>,
    /// Tag 64.
    pub merchant_info_language: Option<LanguageInfo>,
    /// The last value seen among tags 65-79.
    pub rfu: Option<String>,
    /// The last value seen among tags 80-99.
    pub unreserved: Option<String>,
}

impl QrisRecord {
    /// Returns true if the point of initiation is static.
    #[inline]
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.point_of_initiation_method == Some(PointOfInitiation::Static)
    }

    /// Parses the transaction amount (tag 54).
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidFieldValue` if the amount is not a decimal number.
    pub fn amount(&self) -> Result<Option<Decimal>, DecodeError> {
        parse_decimal(tags::TRANSACTION_AMOUNT, self.transaction_amount.as_deref())
    }

    /// Parses the fixed convenience fee (tag 56).
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidFieldValue` if the fee is not a decimal number.
    pub fn convenience_fee_fixed_amount(&self) -> Result<Option<Decimal>, DecodeError> {
        parse_decimal(
            tags::CONVENIENCE_FEE_FIXED,
            self.convenience_fee_fixed.as_deref(),
        )
    }

    /// Parses the percentage convenience fee (tag 57).
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidFieldValue` if the fee is not a decimal number.
    pub fn convenience_fee_percentage_value(&self) -> Result<Option<Decimal>, DecodeError> {
        parse_decimal(
            tags::CONVENIENCE_FEE_PERCENTAGE,
            self.convenience_fee_percentage.as_deref(),
        )
    }
}

fn parse_decimal(tag: Tag, value: Option<&str>) -> Result<Option<Decimal>, DecodeError> {
    value
        .map(|s| {
            Decimal::from_str(s).map_err(|e| DecodeError::InvalidFieldValue {
                tag: tag.value(),
                reason: format!("failed to parse '{s}' as decimal: {e}"),
            })
        })
        .transpose()
}
