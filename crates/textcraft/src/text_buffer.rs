//! Amortized-growth accumulator for building text incrementally.
//!
//! Growth policy
//! - Logical length never exceeds capacity.
//! - When an append does not fit, capacity becomes the largest of: twice the
//!   current capacity, the required length, and
//!   [`BufferOptions::min_capacity`]. Over N appended bytes this bounds the
//!   bytes copied by reallocation to O(N) and the number of reallocations to
//!   O(log N).
//! - Capacity never shrinks implicitly; [`TextBuffer::reset`] keeps it for the
//!   next round of appends.
//!
//! Validation
//! - Content appended through [`TextBuffer::append_bytes`] is unchecked until
//!   [`TextBuffer::snapshot`], so a multi-byte sequence may legitimately be
//!   split across two appends.
//! - The buffer remembers how far it has validated. A snapshot only checks
//!   bytes added since the last successful check, and scalar/text appends onto
//!   fully checked content need no check at all.
//!
//! The buffer is single-writer: mutation requires `&mut self`, and it performs
//! no internal synchronization.

use alloc::vec::Vec;
use core::{cell::Cell, cmp, fmt};

use crate::{BufferOptions, Text, error::EncodingError};

/// A growable byte store that snapshots into [`Text`].
///
/// ```rust
/// use textcraft::TextBuffer;
///
/// let mut builder = TextBuffer::new();
/// builder.append_str("Guten");
/// builder.append_scalar(' ');
/// builder.append_str("Tag!");
/// assert_eq!(builder.snapshot()?, "Guten Tag!");
///
/// builder.reset();
/// assert!(builder.is_empty());
/// # Ok::<(), textcraft::EncodingError>(())
/// ```
#[derive(Debug)]
pub struct TextBuffer {
    bytes: Vec<u8>,
    /// Prefix length known to be valid UTF-8. Always on a char boundary.
    checked: Cell<usize>,
    reallocations: usize,
    options: BufferOptions,
}

impl TextBuffer {
    /// Creates an empty buffer with default [`BufferOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BufferOptions::default())
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(BufferOptions {
            initial_capacity: capacity,
            ..BufferOptions::default()
        })
    }

    /// Creates an empty buffer configured by `options`.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            bytes: Vec::with_capacity(options.initial_capacity),
            checked: Cell::new(0),
            reallocations: 0,
            options,
        }
    }

    /// Logical length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no bytes have been appended since creation or the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes that can be held before the next reallocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// How many times the storage has grown.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Current content, which may not be valid UTF-8 yet.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends raw bytes.
    ///
    /// The caller must make sure the cumulative content is valid UTF-8 by the
    /// time [`snapshot`](Self::snapshot) is called; until then a fragment may
    /// end in the middle of a multi-byte sequence.
    pub fn append_bytes(&mut self, fragment: &[u8]) {
        self.reserve(fragment.len());
        self.bytes.extend_from_slice(fragment);
    }

    /// Encodes `value` as UTF-8 and appends it.
    pub fn append_scalar(&mut self, value: char) {
        let mut tmp = [0u8; 4];
        self.append_valid(value.encode_utf8(&mut tmp));
    }

    /// Appends the bytes of another text verbatim.
    pub fn append_text(&mut self, value: &Text) {
        self.append_valid(value.as_str());
    }

    /// Appends a string slice verbatim.
    pub fn append_str(&mut self, value: &str) {
        self.append_valid(value);
    }

    /// Produces an immutable [`Text`] of the current content.
    ///
    /// The buffer's content is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if bytes appended through
    /// [`append_bytes`](Self::append_bytes) left the content invalid,
    /// including a trailing incomplete sequence. The reported offset is
    /// relative to the start of the buffer.
    pub fn snapshot(&self) -> Result<Text, EncodingError> {
        let checked = self.checked.get();
        let s = match core::str::from_utf8(&self.bytes[checked..]) {
            Ok(_) => {
                self.checked.set(self.bytes.len());
                // SAFETY: `bytes[..checked]` was validated earlier and ends on a
                // char boundary; `bytes[checked..]` was just validated. The
                // concatenation of two valid UTF-8 strings is valid UTF-8.
                unsafe { core::str::from_utf8_unchecked(&self.bytes) }
            }
            Err(e) => {
                let err = EncodingError::from(e).offset_by(checked);
                log::trace!("text buffer snapshot rejected: {err}");
                return Err(err);
            }
        };
        Ok(Text::from(s))
    }

    /// Zeroes the logical length; capacity is kept for reuse.
    pub fn reset(&mut self) {
        self.bytes.clear();
        self.checked.set(0);
    }

    /// Snapshot for buffers fed only through the validating appends.
    pub(crate) fn to_text(&self) -> Text {
        let text = self.snapshot();
        debug_assert!(text.is_ok(), "buffer fed only valid text");
        text.unwrap_or_default()
    }

    fn append_valid(&mut self, s: &str) {
        let was_checked = self.checked.get() == self.bytes.len();
        self.reserve(s.len());
        self.bytes.extend_from_slice(s.as_bytes());
        if was_checked {
            self.checked.set(self.bytes.len());
        }
    }

    /// Ensures room for `additional` more bytes, growing geometrically.
    fn reserve(&mut self, additional: usize) {
        let required = self.bytes.len().saturating_add(additional);
        let capacity = self.bytes.capacity();
        if required <= capacity {
            return;
        }
        let target = cmp::max(
            cmp::max(capacity.saturating_mul(2), required),
            self.options.min_capacity,
        );
        self.bytes.reserve_exact(target - self.bytes.len());
        self.reallocations += 1;
        log::trace!(
            "text buffer grew from {capacity} to {} bytes",
            self.bytes.capacity()
        );
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append_scalar(c);
        Ok(())
    }
}

impl Extend<char> for TextBuffer {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for ch in iter {
            self.append_scalar(ch);
        }
    }
}

impl<'a> Extend<&'a str> for TextBuffer {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for s in iter {
            self.append_str(s);
        }
    }
}
