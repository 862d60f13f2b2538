/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # QRIS
//!
//! Decoding, validation, and generation of QRIS (Quick Response Code
//! Indonesian Standard) payloads, the EMVCo merchant-presented QR format.
//!
//! A payload is a flat run of two-digit tag / two-digit length / value fields,
//! where some tags (26-45, 62, 64) carry nested fields of their own, closed by
//! a CRC16 checksum in tag 63.
//!
//! ## Features
//!
//! - **Lenient decoding**: Any string decodes; absent tags are simply unset
//! - **Zero-copy scanning**: The TLV layer borrows from the payload
//! - **Opt-in validation**: Checksum, mandatory tags, amounts, size
//! - **Generation**: Encode a record into a checksummed payload
//!
//! ## Quick Start
//!
//! ```rust
//! use qris::prelude::*;
//!
//! let record = decode_qris("000201010211");
//! assert_eq!(record.point_of_initiation_method, Some(PointOfInitiation::Static));
//!
//! assert_eq!(compute_crc16("123456789"), "29B1");
//! assert_eq!(MerchantCriteria::from_code("UMI"), MerchantCriteria::Micro);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Records, tags, enumerations, and error definitions
//! - [`tlv`]: Zero-copy TLV decoding, dispatch tables, encoding, CRC16
//! - [`schema`]: QRIS tag mappings, decoder, validation, record encoding

pub mod core {
    //! Records, tags, enumerations, and error definitions.
    pub use qris_core::*;
}

pub mod tlv {
    //! Zero-copy TLV decoding, dispatch tables, encoding, and CRC16.
    pub use qris_tlv::*;
}

pub mod schema {
    //! QRIS tag mappings, decoder, validation, and record encoding.
    pub use qris_schema::*;
}

pub use qris_schema::decode_qris;
pub use qris_tlv::compute_crc16;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use qris_core::{
        AdditionalData, DecodeError, EncodeError, FieldRef, LanguageInfo, MerchantAccountInfo,
        MerchantCriteria, PointOfInitiation, QrisError, QrisRecord, Result, Tag,
    };

    // TLV layer
    pub use qris_tlv::{CrcFormat, Decoder, Encoder, TagMap, compute_crc16};

    // Schema
    pub use qris_schema::{QrisConfig, QrisDecoder, decode_qris, encode_qris, verify_crc};
}
