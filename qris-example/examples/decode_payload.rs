//! QRIS decoding example.
//!
//! Decodes a payload given as the first argument, or in `QRIS_PAYLOAD`, or the
//! built-in sample, then runs strict validation on it.
//!
//! Run with `RUST_LOG=debug` to list the raw top-level fields, or
//! `RUST_LOG=trace` to see every field as it is extracted.

use qris::prelude::*;
use qris_example::{init_logging, payload_from_env};
use qris::tlv::collect_fields;
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    init_logging();

    let payload = payload_from_env();
    info!("Decoding {} characters", payload.chars().count());

    let decoder = QrisDecoder::default();
    let record = decoder.decode(&payload);

    info!(
        "Merchant: {} ({})",
        record.merchant_name.as_deref().unwrap_or("-"),
        record.merchant_city.as_deref().unwrap_or("-")
    );
    if let Some(method) = record.point_of_initiation_method {
        info!("Point of initiation: {}", method);
    }
    if let Some(amount) = record.amount()? {
        info!(
            "Amount: {} {}",
            amount,
            record.transaction_currency.as_deref().unwrap_or("")
        );
    }
    for (tag, account) in &record.merchant_accounts {
        info!(
            "Merchant account {}: {} criteria={}",
            tag,
            account.reverse_domain.as_deref().unwrap_or("-"),
            account.criteria().unwrap_or_default()
        );
    }

    for field in collect_fields(&payload) {
        let kind = match field.tag_number() {
            Some(tag) if tag.is_merchant_account() => "merchant account",
            Some(tag) if tag.is_rfu() => "reserved",
            Some(tag) if tag.is_unreserved() => "unreserved",
            Some(_) => "field",
            None => "unknown",
        };
        debug!("{} {} [{}] {:?}", field.tag, kind, field.length, field.value);
    }

    match decoder.decode_strict(&payload) {
        Ok(_) => info!("Payload is valid"),
        Err(e) => warn!("Payload failed validation: {}", e),
    }

    println!("{record:#?}");
    Ok(())
}
