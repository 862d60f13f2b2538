/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QRIS payload encoder.
//!
//! This module builds payloads in the two-digit tag / two-digit length format
//! and finalizes them with the tag 63 checksum.

use crate::checksum::{CRC_FIELD_HEADER, CrcFormat, crc16_str, format_crc16};
use bytes::{BufMut, BytesMut};
use qris_core::error::EncodeError;
use qris_core::field::Tag;

/// Maximum value length expressible in a two-digit length header.
pub const MAX_VALUE_LEN: usize = 99;

/// QRIS payload encoder.
///
/// Fields are appended in call order. Nested templates (merchant account,
/// additional data, language) are built with their own `Encoder` and written
/// with [`Encoder::put_nested`].
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    /// Encoded fields so far.
    buf: BytesMut,
    /// Length of `buf` in characters.
    chars: usize,
}

impl Encoder {
    /// Creates a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new encoder with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            chars: 0,
        }
    }

    /// Appends a field with a string value.
    ///
    /// # Arguments
    /// * `tag` - The field tag
    /// * `value` - The field value, at most 99 characters
    ///
    /// # Errors
    /// Returns `EncodeError::InvalidTag` for tags above 99 and
    /// `EncodeError::FieldTooLong` for values over 99 characters.
    pub fn put_str(&mut self, tag: Tag, value: &str) -> Result<(), EncodeError> {
        let length = value.chars().count();
        self.put_header(tag, length)?;
        self.buf.put_slice(value.as_bytes());
        self.chars += length;
        Ok(())
    }

    /// Appends a nested template built by another encoder.
    ///
    /// # Errors
    /// Same as [`Encoder::put_str`], applied to the nested payload.
    pub fn put_nested(&mut self, tag: Tag, nested: &Encoder) -> Result<(), EncodeError> {
        self.put_header(tag, nested.chars)?;
        self.buf.put_slice(&nested.buf);
        self.chars += nested.chars;
        Ok(())
    }

    fn put_header(&mut self, tag: Tag, length: usize) -> Result<(), EncodeError> {
        if !tag.is_valid() {
            return Err(EncodeError::InvalidTag(tag.value()));
        }
        if length > MAX_VALUE_LEN {
            return Err(EncodeError::FieldTooLong {
                tag: tag.value(),
                length,
                max_length: MAX_VALUE_LEN,
            });
        }
        self.buf.put_slice(format!("{tag}{length:02}").as_bytes());
        self.chars += 4;
        Ok(())
    }

    /// Finalizes the payload by appending the checksum field.
    ///
    /// The checksum covers every field written so far plus the `6304` header,
    /// and is always rendered as four hex digits.
    #[must_use]
    pub fn finish(mut self) -> BytesMut {
        self.buf.put_slice(CRC_FIELD_HEADER.as_bytes());
        let crc = crc16_str(&self.as_string());
        self.buf
            .put_slice(format_crc16(crc, CrcFormat::Fixed).as_bytes());
        self.buf
    }

    /// Returns the encoded fields without a checksum.
    #[must_use]
    pub fn into_bytes(self) -> BytesMut {
        self.buf
    }

    /// Returns the encoded fields as a string.
    #[must_use]
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    /// Returns the encoded length in characters.
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.chars
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the encoder for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
        self.chars = 0;
    }
}
