/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Zero-copy TLV field decoder.
//!
//! A QRIS payload is a flat run of fields, each written as a two-character
//! tag, a two-digit decimal length, and exactly that many characters of value.
//! The decoder walks the payload left to right and hands out each field as a
//! [`FieldRef`] borrowing from the input. Lengths are counted in characters.
//!
//! The decoder never fails:
//! - a trailing fragment shorter than a four-character header is dropped;
//! - a value cut short by the end of input is returned as whatever remains;
//! - a length header that is not two ASCII digits cannot be framed, so the
//!   rest of the input is dropped like a dangling header.

use qris_core::field::FieldRef;
use smallvec::SmallVec;

/// Width of the tag part of a field header.
pub const TAG_LEN: usize = 2;

/// Width of a full field header (tag plus length).
pub const HEADER_LEN: usize = 4;

/// Zero-copy TLV decoder over one nesting level of a payload.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    /// Input payload.
    input: &'a str,
    /// Byte offset of the first unconsumed character.
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder for the given payload.
    ///
    /// # Arguments
    /// * `input` - The payload to decode
    #[inline]
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Parses the next field.
    ///
    /// # Returns
    /// The next field, or `None` once fewer than four characters remain or a
    /// malformed length header ends the scan.
    pub fn next_field(&mut self) -> Option<FieldRef<'a>> {
        let remaining = self.remaining();
        let (header, rest) = split_chars(remaining, HEADER_LEN);
        if header.chars().count() < HEADER_LEN {
            return None;
        }

        let (tag, length) = split_chars(header, TAG_LEN);
        let Some(length) = parse_length(length) else {
            self.offset = self.input.len();
            return None;
        };

        let (value, rest) = split_chars(rest, length);
        self.offset = self.input.len() - rest.len();

        Some(FieldRef::new(tag, length, value))
    }

    /// Returns the current byte offset in the payload.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the unconsumed part of the payload.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Returns true if the payload has been fully consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Resets the decoder to the beginning of the payload.
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = FieldRef<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_field()
    }
}

/// Collects every field of one nesting level.
#[must_use]
pub fn collect_fields(input: &str) -> SmallVec<[FieldRef<'_>; 16]> {
    Decoder::new(input).collect()
}

/// Splits `s` after `n` characters, or returns `(s, "")` if it is shorter.
#[inline]
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}

/// Parses a two-digit decimal length header.
#[inline]
fn parse_length(raw: &str) -> Option<usize> {
    match raw.as_bytes() {
        [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => {
            Some(usize::from(hi - b'0') * 10 + usize::from(lo - b'0'))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("00"), Some(0));
        assert_eq!(parse_length("07"), Some(7));
        assert_eq!(parse_length("99"), Some(99));
        assert_eq!(parse_length("9"), None);
        assert_eq!(parse_length("MI"), None);
        assert_eq!(parse_length("0A"), None);
    }

    #[test]
    fn test_next_field() {
        let mut decoder = Decoder::new("000201010211");

        let field1 = decoder.next_field().unwrap();
        assert_eq!(field1.tag, "00");
        assert_eq!(field1.length, 2);
        assert_eq!(field1.value, "01");

        let field2 = decoder.next_field().unwrap();
        assert_eq!(field2.tag, "01");
        assert_eq!(field2.value, "11");

        assert!(decoder.next_field().is_none());
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_decoder_empty() {
        let mut decoder = Decoder::new("");
        assert!(decoder.next_field().is_none());
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_dangling_header_is_dropped() {
        let mut decoder = Decoder::new("000201630");
        assert_eq!(decoder.next_field().unwrap().value, "01");
        assert!(decoder.next_field().is_none());
        assert_eq!(decoder.remaining(), "630");
    }

    #[test]
    fn test_truncated_value_takes_remainder() {
        let mut decoder = Decoder::new("5910TOKO");
        let field = decoder.next_field().unwrap();
        assert_eq!(field.tag, "59");
        assert_eq!(field.length, 10);
        assert_eq!(field.value, "TOKO");
        assert!(field.is_truncated());
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_zero_length_field() {
        let fields = collect_fields("01000002ID");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].value, "");
        assert_eq!(fields[1].value, "ID");
    }

    #[test]
    fn test_malformed_length_ends_scan() {
        let mut decoder = Decoder::new("01MIXUE BARU0002ID");
        assert!(decoder.next_field().is_none());
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_unknown_tags_are_still_framed() {
        let fields = collect_fields("AB02xy0002ID");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].tag, "AB");
        assert_eq!(fields[0].tag_number(), None);
        assert_eq!(fields[1].value, "ID");
    }

    #[test]
    fn test_lengths_count_characters() {
        let fields = collect_fields("5905Café!6002ID");
        assert_eq!(fields[0].value, "Café!");
        assert_eq!(fields[1].value, "ID");
    }

    #[test]
    fn test_reset() {
        let mut decoder = Decoder::new("0002ID");
        assert!(decoder.next_field().is_some());
        decoder.reset();
        assert_eq!(decoder.offset(), 0);
        assert_eq!(decoder.count(), 1);
    }
}
