/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for QRIS payload handling.
//!
//! Decoding a payload never fails: every input string is accepted and decoded
//! best-effort. The errors below are produced only by the opt-in layers built
//! on top of the decoder (checksum verification, mandatory-tag checks, typed
//! accessors) and by the encoder.

use thiserror::Error;

/// Result type alias using [`QrisError`] as the error type.
pub type Result<T> = std::result::Result<T, QrisError>;

/// Top-level error type for all QRIS operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrisError {
    /// Error while validating a decoded payload.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error while building a payload.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors reported when validating a QRIS payload or reading a typed value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Checksum mismatch between calculated and declared values.
    #[error("checksum mismatch: calculated {calculated:04X}, declared {declared:04X}")]
    ChecksumMismatch {
        /// Checksum calculated over the payload.
        calculated: u16,
        /// Checksum declared in tag 63.
        declared: u16,
    },

    /// The payload carries no checksum field (tag 63).
    #[error("missing checksum field (tag 63)")]
    MissingChecksum,

    /// The checksum field is present but is not the final field.
    #[error("checksum field (tag 63) must be the last field")]
    ChecksumNotLast,

    /// The checksum value is not four hexadecimal digits.
    #[error("invalid checksum value: {0:?}")]
    InvalidChecksum(String),

    /// Missing mandatory field.
    #[error("missing required field: tag {tag:02}")]
    MissingRequiredField {
        /// The tag number of the missing field.
        tag: u8,
    },

    /// No merchant account information template (tags 26-45) was found.
    #[error("missing merchant account information (tags 26-45)")]
    MissingMerchantAccount,

    /// Invalid field value for the expected type.
    #[error("invalid field value for tag {tag:02}: {reason}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u8,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Payload exceeds maximum allowed size.
    #[error("payload too large: {size} characters exceeds maximum {max_size}")]
    PayloadTooLarge {
        /// Actual payload size in characters.
        size: usize,
        /// Maximum allowed size in characters.
        max_size: usize,
    },
}

/// Errors that occur while encoding a QRIS payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Tag number does not fit in two decimal digits.
    #[error("invalid tag {0}: tags must be between 00 and 99")]
    InvalidTag(u8),

    /// Field value exceeds maximum length.
    #[error("field value too long for tag {tag:02}: {length} exceeds max {max_length}")]
    FieldTooLong {
        /// The tag number of the field.
        tag: u8,
        /// Actual length of the value in characters.
        length: usize,
        /// Maximum allowed length.
        max_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_mismatch_display() {
        let err = DecodeError::ChecksumMismatch {
            calculated: 0xAA72,
            declared: 0x004A,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: calculated AA72, declared 004A"
        );
    }

    #[test]
    fn test_missing_required_field_display() {
        let err = DecodeError::MissingRequiredField { tag: 0 };
        assert_eq!(err.to_string(), "missing required field: tag 00");
    }

    #[test]
    fn test_qris_error_from_decode() {
        let qris_err: QrisError = DecodeError::MissingChecksum.into();
        assert!(matches!(
            qris_err,
            QrisError::Decode(DecodeError::MissingChecksum)
        ));
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::FieldTooLong {
            tag: 59,
            length: 120,
            max_length: 99,
        };
        assert_eq!(
            err.to_string(),
            "field value too long for tag 59: 120 exceeds max 99"
        );
    }
}
