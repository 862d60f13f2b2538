//! Common utilities shared across the QRIS demos.

use std::env;

/// Environment variable holding a payload to decode.
pub const PAYLOAD_ENV: &str = "QRIS_PAYLOAD";

/// Sample dynamic merchant payload with a valid checksum.
pub const SAMPLE_PAYLOAD: &str = "00020101021226530012COM.XXXX.WWW0118120000123400001234020412340303UMI51380014ID.CO.QRIS.WWW02091234567890303UMI5204723053033605405100005802ID5915TOKO MIXUE BARU6015Kabupaten Tokyo610612313162210110MIXUE BARU0703K196304198D";

/// Returns the payload to work on: the first CLI argument, then
/// `QRIS_PAYLOAD`, then [`SAMPLE_PAYLOAD`]. Surrounding whitespace is trimmed.
#[must_use]
pub fn payload_from_env() -> String {
    env::args()
        .nth(1)
        .or_else(|| env::var(PAYLOAD_ENV).ok())
        .unwrap_or_else(|| SAMPLE_PAYLOAD.to_string())
        .trim()
        .to_string()
}

/// Initializes logging for the demos.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
