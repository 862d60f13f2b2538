/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decoder configuration.
//!
//! This module provides the options used by [`crate::QrisDecoder`]. None of
//! them affects plain decoding; they govern checksum rendering and the
//! opt-in strict validation.

use qris_tlv::CrcFormat;

/// Maximum payload length allowed by QRIS, in characters.
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 512;

/// Configuration for a [`crate::QrisDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrisConfig {
    /// Rendering used by `QrisDecoder::checksum`.
    pub crc_format: CrcFormat,
    /// Maximum payload size in characters, checked by strict decoding.
    pub max_payload_len: usize,
    /// Whether strict decoding verifies the tag 63 checksum.
    pub validate_checksum: bool,
    /// Whether strict decoding requires the mandatory tags.
    pub validate_mandatory: bool,
}

impl QrisConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            crc_format: CrcFormat::Legacy,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
            validate_checksum: true,
            validate_mandatory: true,
        }
    }

    /// Sets the checksum rendering.
    #[must_use]
    pub const fn with_crc_format(mut self, format: CrcFormat) -> Self {
        self.crc_format = format;
        self
    }

    /// Sets the maximum payload size.
    #[must_use]
    pub const fn with_max_payload_len(mut self, len: usize) -> Self {
        self.max_payload_len = len;
        self
    }

    /// Sets whether strict decoding verifies the checksum.
    #[must_use]
    pub const fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Sets whether strict decoding requires the mandatory tags.
    #[must_use]
    pub const fn with_mandatory_validation(mut self, validate: bool) -> Self {
        self.validate_mandatory = validate;
        self
    }
}

impl Default for QrisConfig {
    fn default() -> Self {
        Self::new()
    }
}
