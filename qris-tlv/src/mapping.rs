/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Tag dispatch tables.
//!
//! A [`TagMap`] routes each decoded field to a handler that writes the value
//! into an accumulator. Tags without a handler are skipped, which keeps
//! decoding forward-compatible with reserved and not-yet-defined tags.

use crate::decoder::Decoder;
use qris_core::field::{TAG_COUNT, Tag};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::trace;

/// Writes one field value into an accumulator.
///
/// The handler receives the tag it was dispatched for, so one handler can be
/// registered across a range and still tell the tags apart.
pub type Handler<T> = fn(&mut T, Tag, &str);

/// Mapping from two-digit tags to value handlers.
pub struct TagMap<T> {
    handlers: [Option<Handler<T>>; TAG_COUNT],
}

impl<T> TagMap<T> {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: [None; TAG_COUNT],
        }
    }

    /// Registers a handler for one tag, replacing any previous one.
    ///
    /// Tags above 99 cannot appear in a payload and are ignored.
    #[must_use]
    pub fn on(mut self, tag: Tag, handler: Handler<T>) -> Self {
        if let Some(slot) = self.handlers.get_mut(usize::from(tag.value())) {
            *slot = Some(handler);
        }
        self
    }

    /// Registers the same handler for every tag in an inclusive range.
    #[must_use]
    pub fn on_range(self, tags: RangeInclusive<u8>, handler: Handler<T>) -> Self {
        tags.fold(self, |map, tag| map.on(Tag::new(tag), handler))
    }

    /// Returns the handler registered for `tag`.
    #[inline]
    #[must_use]
    pub fn handler(&self, tag: Tag) -> Option<Handler<T>> {
        self.handlers
            .get(usize::from(tag.value()))
            .copied()
            .flatten()
    }

    /// Returns the number of tags with a registered handler.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.iter().filter(|h| h.is_some()).count()
    }

    /// Returns true if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes one nesting level of `input` into `acc`.
    ///
    /// Fields are applied in payload order, so a tag that occurs twice, or two
    /// tags sharing a destination, leave the last value in place.
    pub fn decode_into(&self, input: &str, acc: &mut T) {
        for field in Decoder::new(input) {
            trace!(
                tag = field.tag,
                length = field.length,
                value = field.value,
                "tlv field"
            );
            match field.tag_number().and_then(|tag| Some((tag, self.handler(tag)?))) {
                Some((tag, handler)) => handler(acc, tag, field.value),
                None => trace!(tag = field.tag, "skipping unmapped tag"),
            }
        }
    }

    /// Decodes one nesting level of `input` into a fresh accumulator.
    #[must_use]
    pub fn decode(&self, input: &str) -> T
    where
        T: Default,
    {
        let mut acc = T::default();
        self.decode_into(input, &mut acc);
        acc
    }
}

impl<T> Default for TagMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TagMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<Tag> = (0..=qris_core::field::MAX_TAG)
            .map(Tag::new)
            .filter(|&tag| self.handler(tag).is_some())
            .collect();
        f.debug_struct("TagMap").field("tags", &tags).finish()
    }
}
