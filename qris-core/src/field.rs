/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field types for QRIS TLV payloads.
//!
//! This module provides:
//! - [`Tag`]: Type-safe wrapper for two-digit QRIS tag numbers
//! - [`FieldRef`]: Zero-copy reference to a field within a payload string

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Highest tag number expressible in two decimal digits.
pub const MAX_TAG: u8 = 99;

/// Number of distinct two-digit tags (`00` through `99`).
pub const TAG_COUNT: usize = MAX_TAG as usize + 1;

/// Tags carrying merchant account information templates.
pub const MERCHANT_ACCOUNT_RANGE: RangeInclusive<u8> = 26..=45;

/// Tags reserved for future use.
pub const RFU_RANGE: RangeInclusive<u8> = 65..=79;

/// Unreserved templates.
pub const UNRESERVED_RANGE: RangeInclusive<u8> = 80..=99;

/// QRIS field tag number.
///
/// Tags are written on the wire as exactly two decimal digits, so valid tags
/// lie in `00..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Tag(u8);

impl Tag {
    /// Creates a new tag.
    ///
    /// # Arguments
    /// * `tag` - The tag number (should be <= 99 to be encodable)
    #[inline]
    #[must_use]
    pub const fn new(tag: u8) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parses a tag from its two-character wire form.
    ///
    /// Returns `None` unless `raw` is exactly two ASCII digits.
    #[inline]
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.as_bytes() {
            [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => {
                Some(Self((hi - b'0') * 10 + (lo - b'0')))
            }
            _ => None,
        }
    }

    /// Returns true if the tag fits in two decimal digits.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 <= MAX_TAG
    }

    /// Returns true if this tag carries a merchant account template (26-45).
    #[inline]
    #[must_use]
    pub fn is_merchant_account(self) -> bool {
        MERCHANT_ACCOUNT_RANGE.contains(&self.0)
    }

    /// Returns true if this tag is reserved for future use (65-79).
    #[inline]
    #[must_use]
    pub fn is_rfu(self) -> bool {
        RFU_RANGE.contains(&self.0)
    }

    /// Returns true if this tag is an unreserved template (80-99).
    #[inline]
    #[must_use]
    pub fn is_unreserved(self) -> bool {
        UNRESERVED_RANGE.contains(&self.0)
    }
}

impl From<u8> for Tag {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Zero-copy reference to a field within a QRIS payload.
///
/// `length` is the declared length from the header. When the payload ends
/// early, `value` holds whatever characters remained and is shorter than
/// `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    /// The raw two-character tag as it appeared in the payload.
    pub tag: &'a str,
    /// The declared value length in characters.
    pub length: usize,
    /// The field value.
    pub value: &'a str,
}

impl<'a> FieldRef<'a> {
    /// Creates a new field reference.
    #[inline]
    #[must_use]
    pub const fn new(tag: &'a str, length: usize, value: &'a str) -> Self {
        Self { tag, length, value }
    }

    /// Returns the numeric tag, or `None` if the raw tag is not two digits.
    #[inline]
    #[must_use]
    pub fn tag_number(&self) -> Option<Tag> {
        Tag::parse(self.tag)
    }

    /// Returns true if fewer than `length` characters were available.
    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.value.chars().count() < self.length
    }
}
