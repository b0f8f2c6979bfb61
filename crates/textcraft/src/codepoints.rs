//! Decoding text into position-tagged Unicode scalar values.
//!
//! [`Codepoints`] walks the UTF-8 bytes of a `str` lazily and yields
//! `(byte_offset, char)` pairs, where `byte_offset` is the index of the first
//! byte of that scalar value's encoding.
//!
//! Invariants
//! - Offsets are strictly increasing and emitted in byte order.
//! - A full iteration consumes exactly `byte_len` bytes.
//! - Decoding never fails: input is a `str` (or a [`Text`]), so it was
//!   validated when it was constructed. Untrusted bytes are checked by
//!   [`Text::from_utf8`], not here.
//!
//! The iterator is not restartable; ask the source for a fresh one instead.

use core::iter::FusedIterator;

use crate::Text;

/// Lazily decoded `(byte_offset, scalar)` pairs over a text.
///
/// ```rust
/// use textcraft::Text;
///
/// let text = Text::from("aé🦇");
/// let pairs: Vec<_> = text.codepoints().collect();
/// assert_eq!(pairs, [(0, 'a'), (1, 'é'), (3, '🦇')]);
/// ```
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Codepoints<'a> {
    /// Starts decoding at the beginning of `s`.
    #[must_use]
    pub fn new(s: &'a str) -> Self {
        Self {
            bytes: s.as_bytes(),
            offset: 0,
        }
    }

    /// Byte offset of the next scalar value to be emitted.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet decoded.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }
}

impl Iterator for Codepoints<'_> {
    type Item = (usize, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(&self.bytes[self.offset..]);
        debug_assert!(ch.is_some(), "str held invalid utf-8 at {}", self.offset);
        let ch = ch?;
        let start = self.offset;
        self.offset += len;
        Some((start, ch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bytes.len() - self.offset;
        // Every scalar takes between one and four bytes.
        (rest.div_ceil(4), Some(rest))
    }
}

impl FusedIterator for Codepoints<'_> {}

/// Decodes `text` into position-tagged scalar values.
pub fn decode(text: &Text) -> Codepoints<'_> {
    text.codepoints()
}

/// Counts the scalar values in `s`.
///
/// The only correct character count for UTF-8: it differs from `s.len()`
/// whenever any scalar value needs more than one byte.
#[must_use]
pub fn count_scalars(s: &str) -> usize {
    Codepoints::new(s).count()
}
