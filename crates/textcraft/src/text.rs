//! Immutable, shareable UTF-8 text.
//!
//! A [`Text`] owns a reference-counted `str`, so cloning is O(1) and the value
//! can be handed to any number of readers across threads. Every constructor
//! either starts from something Rust already guarantees to be UTF-8 (`&str`,
//! `String`, `char`) or validates, so no code past construction ever has to
//! re-check the encoding.
//!
//! Byte access ([`Text::byte_len`], [`Text::byte_at`], [`Text::as_bytes`]) and
//! scalar-value access ([`Text::codepoints`], [`Text::char_count`]) are kept
//! under distinct names: a byte offset is never silently a character index.

use alloc::{string::String, sync::Arc, vec::Vec};
use core::{borrow::Borrow, fmt, fmt::Write as _, ops::Range};

use crate::{
    Codepoints, TextBuffer,
    error::{EncodingError, InvalidArgument, TextError},
};

/// An immutable sequence of bytes that is always valid UTF-8.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text(Arc<str>);

impl Text {
    /// Returns the empty text.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::from(""))
    }

    /// Validates `bytes` and copies them into a new `Text`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if `bytes` is not well-formed UTF-8, including
    /// input that ends in the middle of a multi-byte sequence. No partially
    /// valid text is ever produced.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, EncodingError> {
        let s = core::str::from_utf8(bytes)?;
        Ok(Self(Arc::from(s)))
    }

    /// Validates an owned byte vector and turns it into a `Text`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if `bytes` is not well-formed UTF-8.
    pub fn from_utf8_vec(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        let s = String::from_utf8(bytes).map_err(|e| EncodingError::from(e.utf8_error()))?;
        Ok(Self::from(s))
    }

    /// Number of bytes in the UTF-8 encoding.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }

    /// Whether the text holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw byte at `index`, or `None` past the end.
    ///
    /// This is a byte, not a character: for non-ASCII text it may be a lead or
    /// continuation byte of a longer sequence.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.0.as_bytes().get(index).copied()
    }

    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Borrows the content as a `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position-tagged scalar values, see [`Codepoints`].
    pub fn codepoints(&self) -> Codepoints<'_> {
        Codepoints::new(&self.0)
    }

    /// Number of Unicode scalar values.
    ///
    /// Computed by decoding the whole text, so O(n). Equal to
    /// [`byte_len`](Self::byte_len) only for ASCII content.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.codepoints().count()
    }

    /// Whether every scalar value is a single byte.
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        self.0.is_ascii()
    }

    /// Copies the bytes in `range` into a new `Text`.
    ///
    /// # Errors
    ///
    /// - [`InvalidArgument::ByteRangeOutOfBounds`] if the range is reversed or
    ///   reaches past the end.
    /// - [`EncodingError`] if either bound falls inside a multi-byte scalar
    ///   value, since the bytes in between are then not valid UTF-8.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, TextError> {
        let len = self.byte_len();
        let Some(bytes) = self.as_bytes().get(range.clone()) else {
            return Err(InvalidArgument::ByteRangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            }
            .into());
        };
        Self::from_utf8(bytes).map_err(|e| e.offset_by(range.start).into())
    }

    /// Returns `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Text) -> Self {
        // Exact-size iterator, so the bytes are written once into the Arc.
        let bytes: Arc<[u8]> = self
            .as_bytes()
            .iter()
            .chain(other.as_bytes())
            .copied()
            .collect();
        // SAFETY: the bytes are two valid UTF-8 strings back to back, and
        // `str` has the same layout as `[u8]`.
        Self(unsafe { Arc::from_raw(Arc::into_raw(bytes) as *const str) })
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *self == &*other.0
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl From<char> for Text {
    fn from(ch: char) -> Self {
        let mut tmp = [0u8; 4];
        Self::from(&*ch.encode_utf8(&mut tmp))
    }
}

impl From<Text> for Arc<str> {
    fn from(text: Text) -> Self {
        text.0
    }
}

impl From<Arc<str>> for Text {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl Text {
    fn from_display(value: &impl fmt::Display) -> Self {
        let mut buffer = TextBuffer::with_capacity(20);
        // Writing into a TextBuffer cannot fail.
        let _ = write!(buffer, "{value}");
        buffer.to_text()
    }
}

impl From<i64> for Text {
    fn from(n: i64) -> Self {
        Self::from_display(&n)
    }
}

impl From<u64> for Text {
    fn from(n: u64) -> Self {
        Self::from_display(&n)
    }
}

impl TryFrom<&[u8]> for Text {
    type Error = EncodingError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_utf8(bytes)
    }
}

impl TryFrom<Vec<u8>> for Text {
    type Error = EncodingError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_utf8_vec(bytes)
    }
}
