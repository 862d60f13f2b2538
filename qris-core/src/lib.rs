/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # QRIS Core
//!
//! Core types, records, and error definitions shared by the QRIS crates.
//!
//! This crate provides the fundamental building blocks used across the workspace:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `Tag` and the zero-copy `FieldRef`
//! - **Records**: `QrisRecord` and its nested templates
//! - **Enumerations**: `PointOfInitiation`, `MerchantCriteria`

pub mod error;
pub mod field;
pub mod record;
pub mod tags;
pub mod types;

pub use error::{DecodeError, EncodeError, QrisError, Result};
pub use field::{FieldRef, Tag};
pub use record::{AdditionalData, LanguageInfo, MerchantAccountInfo, QrisRecord};
pub use types::{MerchantCriteria, PointOfInitiation};
