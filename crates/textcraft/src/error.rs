use alloc::string::String;
use core::{fmt, str::Utf8Error};

use thiserror::Error;

/// Bytes presented as text did not form valid UTF-8.
///
/// Raised wherever a [`Text`](crate::Text) is materialized from bytes that
/// have not been checked yet: [`Text::from_utf8`](crate::Text::from_utf8),
/// [`TextBuffer::snapshot`](crate::TextBuffer::snapshot), or a byte-range
/// [`Text::slice`](crate::Text::slice) that cuts through a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingError {
    pub(crate) valid_up_to: usize,
    pub(crate) error_len: Option<u8>,
}

impl EncodingError {
    /// Byte offset up to which the input was valid UTF-8.
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Length of the offending byte sequence, or `None` if the input ended in
    /// the middle of a multi-byte sequence.
    #[must_use]
    pub fn error_len(&self) -> Option<usize> {
        self.error_len.map(usize::from)
    }

    /// Whether the input was cut short rather than malformed.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.error_len.is_none()
    }

    /// Shifts the reported offset when only a suffix of the bytes was checked.
    pub(crate) fn offset_by(mut self, base: usize) -> Self {
        self.valid_up_to += base;
        self
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_len {
            Some(len) => write!(
                f,
                "invalid utf-8: invalid sequence of {len} byte(s) at offset {}",
                self.valid_up_to
            ),
            None => write!(
                f,
                "invalid utf-8: truncated sequence at offset {}",
                self.valid_up_to
            ),
        }
    }
}

impl core::error::Error for EncodingError {}

impl From<Utf8Error> for EncodingError {
    // A UTF-8 error never spans more than three bytes.
    #[allow(clippy::cast_possible_truncation)]
    fn from(err: Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len().map(|len| len as u8),
        }
    }
}

/// A structurally meaningless request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("separator must not be empty")]
    EmptySeparator,
    #[error("needle must not be empty")]
    EmptyNeedle,
    #[error("count must not be negative, got {0}")]
    NegativeCount(i64),
    #[error("repeat count overflows the addressable length")]
    CountOverflow,
    #[error("byte range {start}..{end} out of bounds for length {len}")]
    ByteRangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Malformed pattern source, reported by [`Pattern::compile`].
///
/// [`Pattern::compile`]: crate::Pattern::compile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternSyntaxError {
    #[error("invalid pattern {pattern:?}: {message}")]
    Syntax { pattern: String, message: String },
    #[error("pattern {pattern:?} exceeds the compiled size limit of {limit} bytes")]
    TooBig { pattern: String, limit: usize },
}

/// Any failure reported by this crate.
///
/// Convenient when chaining operations from different components with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("pattern syntax error: {0}")]
    PatternSyntax(#[from] PatternSyntaxError),
}
