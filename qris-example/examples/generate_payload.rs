//! QRIS generation example.
//!
//! Builds a static merchant record, encodes it into a checksummed payload, and
//! decodes it back.

use qris::prelude::*;
use qris_example::init_logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let record = QrisRecord {
        payload_format_indicator: Some("01".to_string()),
        point_of_initiation_method: Some(PointOfInitiation::Static),
        merchant_account_info: Some(MerchantAccountInfo {
            reverse_domain: Some("ID.CO.QRIS.WWW".to_string()),
            id: Some("ID1020000000001".to_string()),
            r#type: Some(MerchantCriteria::Micro.code().to_string()),
            ..MerchantAccountInfo::default()
        }),
        merchant_category_code: Some("5812".to_string()),
        transaction_currency: Some("360".to_string()),
        country_code: Some("ID".to_string()),
        merchant_name: Some("WARUNG MAKAN".to_string()),
        merchant_city: Some("JAKARTA".to_string()),
        postal_code: Some("10110".to_string()),
        ..QrisRecord::default()
    };

    let payload = encode_qris(&record)?;
    info!("Generated payload: {}", payload);

    verify_crc(&payload)?;
    info!("Checksum {} verified", &payload[payload.len() - 4..]);

    let decoded = QrisDecoder::default().decode_strict(&payload)?;
    info!(
        "Round trip merchant: {}",
        decoded.merchant_name.as_deref().unwrap_or("-")
    );

    println!("{payload}");
    Ok(())
}
