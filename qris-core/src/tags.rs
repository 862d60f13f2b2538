/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Well-known QRIS tag numbers, grouped by the template they appear in.

use crate::field::Tag;

/// Payload format indicator, always `01`.
pub const PAYLOAD_FORMAT_INDICATOR: Tag = Tag::new(0);
/// Point of initiation method: `11` static, `12` dynamic.
pub const POINT_OF_INITIATION_METHOD: Tag = Tag::new(1);
/// First merchant account template tag, used when encoding a single account.
pub const MERCHANT_ACCOUNT_INFO_PRIMARY: Tag = Tag::new(26);
/// ISO 18245 merchant category code.
pub const MERCHANT_CATEGORY_CODE: Tag = Tag::new(52);
/// ISO 4217 numeric currency code (`360` for IDR).
pub const TRANSACTION_CURRENCY: Tag = Tag::new(53);
/// Transaction amount.
pub const TRANSACTION_AMOUNT: Tag = Tag::new(54);
/// Tip or convenience fee indicator.
pub const TIP_OR_CONVENIENCE_INDICATOR: Tag = Tag::new(55);
/// Fixed convenience fee.
pub const CONVENIENCE_FEE_FIXED: Tag = Tag::new(56);
/// Convenience fee percentage.
pub const CONVENIENCE_FEE_PERCENTAGE: Tag = Tag::new(57);
/// ISO 3166-1 alpha-2 country code.
pub const COUNTRY_CODE: Tag = Tag::new(58);
/// Merchant name.
pub const MERCHANT_NAME: Tag = Tag::new(59);
/// Merchant city.
pub const MERCHANT_CITY: Tag = Tag::new(60);
/// Postal code.
pub const POSTAL_CODE: Tag = Tag::new(61);
/// Additional data field template.
pub const ADDITIONAL_DATA: Tag = Tag::new(62);
/// CRC16 checksum, always the last field.
pub const CRC: Tag = Tag::new(63);
/// Merchant information language template.
pub const MERCHANT_INFO_LANGUAGE: Tag = Tag::new(64);
/// First tag reserved for future use; encoding writes `rfu` here.
pub const RFU_FIRST: Tag = Tag::new(65);
/// First unreserved template tag; encoding writes `unreserved` here.
pub const UNRESERVED_FIRST: Tag = Tag::new(80);

/// Tags inside a merchant account information template (26-45).
pub mod merchant_account {
    use crate::field::Tag;

    /// Globally unique identifier, as a reverse domain name.
    pub const REVERSE_DOMAIN: Tag = Tag::new(0);
    /// Merchant PAN.
    pub const GLOBAL_ID: Tag = Tag::new(1);
    /// Merchant ID.
    pub const ID: Tag = Tag::new(2);
    /// Merchant criteria code (`UMI`, `UKE`, `UME`, `UBE`, `URE`).
    pub const TYPE: Tag = Tag::new(3);
}

/// Tags inside the additional data template (62).
pub mod additional_data {
    use crate::field::Tag;

    /// Bill number.
    pub const BILL_NUMBER: Tag = Tag::new(1);
    /// Mobile number.
    pub const MOBILE_NUMBER: Tag = Tag::new(2);
    /// Store label.
    pub const STORE_LABEL: Tag = Tag::new(3);
    /// Loyalty number.
    pub const LOYALTY_NUMBER: Tag = Tag::new(4);
    /// Reference label.
    pub const REFERENCE_LABEL: Tag = Tag::new(5);
    /// Customer label.
    pub const CUSTOMER_LABEL: Tag = Tag::new(6);
    /// Terminal label.
    pub const TERMINAL_LABEL: Tag = Tag::new(7);
    /// Purpose of transaction.
    pub const PURPOSE_OF_TRANSACTION: Tag = Tag::new(8);
    /// Additional consumer data request.
    pub const ADDITIONAL_CONSUMER_DATA_REQUEST: Tag = Tag::new(9);
    /// Merchant tax ID.
    pub const MERCHANT_TAX_ID: Tag = Tag::new(10);
    /// Merchant channel.
    pub const MERCHANT_CHANNEL: Tag = Tag::new(11);
}

/// Tags inside the merchant information language template (64).
pub mod language {
    use crate::field::Tag;

    /// ISO 639 language code.
    pub const LANGUAGE_PREFERENCE: Tag = Tag::new(0);
    /// Merchant name in the alternate language.
    pub const MERCHANT_NAME_ALT_LANGUAGE: Tag = Tag::new(1);
    /// Merchant city in the alternate language.
    pub const MERCHANT_CITY_ALT_LANGUAGE: Tag = Tag::new(2);
}
