/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # QRIS TLV
//!
//! Zero-copy decoding and encoding of the two-digit tag-length-value format
//! used by EMVCo merchant-presented QR payloads.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Field values borrow from the payload string
//! - **Table dispatch**: `TagMap` routes tags to value handlers, with range registration
//! - **Checksum calculation**: CRC16-CCITT as carried in tag 63

pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod mapping;

pub use checksum::{CrcFormat, calculate_crc16, compute_crc16, crc16_str, format_crc16, parse_crc16};
pub use decoder::{Decoder, collect_fields};
pub use encoder::Encoder;
pub use mapping::{Handler, TagMap};
pub use qris_core::field::FieldRef;
