/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # QRIS Schema
//!
//! The QRIS payload schema on top of the generic TLV layer.
//!
//! This crate provides:
//! - **Tag mappings**: Top-level, merchant account, additional data, and language templates
//! - **Decoding**: `decode_qris` and the configurable `QrisDecoder`
//! - **Validation**: Checksum, mandatory tag, and amount checks
//! - **Encoding**: `encode_qris` builds a finalized payload from a record

pub mod config;
pub mod decoder;
pub mod encode;
pub mod mapping;
pub mod validate;

pub use config::QrisConfig;
pub use decoder::{QrisDecoder, decode_qris};
pub use encode::encode_qris;
pub use validate::{check_mandatory, verify_crc};
