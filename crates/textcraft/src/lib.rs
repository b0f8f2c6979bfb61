//! UTF-8 text handling with an explicit line between bytes and characters.
//!
//! - [`Text`]: immutable, cheaply cloned text that is valid UTF-8 by
//!   construction.
//! - [`Codepoints`]: lazy `(byte_offset, char)` decoding of a text.
//! - [`TextBuffer`]: amortized-growth builder that snapshots into [`Text`].
//! - [`segment`]: split/join/search/replace/trim/case/repeat helpers.
//! - [`Pattern`]: compile-once pattern matching returning byte-offset
//!   [`Match`]es (behind the default `pattern` feature).
//!
//! ```rust
//! use textcraft::{TextBuffer, segment};
//!
//! let mut builder = TextBuffer::new();
//! builder.append_str("apple🍎, orange🍊");
//! builder.append_scalar(',');
//! builder.append_str(" bananas🍌");
//! let fruits = builder.snapshot()?;
//!
//! assert_eq!(segment::split(&fruits, ",")?.len(), 3);
//! assert_eq!(fruits.char_count(), 25);
//! assert_eq!(fruits.byte_len(), 34);
//!
//! #[cfg(feature = "pattern")]
//! {
//!     use textcraft::{Limit, Pattern};
//!
//!     let words = Pattern::compile(r"[a-z]+")?;
//!     assert_eq!(words.find_all_text(&fruits, Limit::AtMost(2)), ["apple", "orange"]);
//! }
//! # Ok::<(), textcraft::TextError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codepoints;
mod error;
mod options;
#[cfg(feature = "pattern")]
mod pattern;
pub mod segment;
mod text;
mod text_buffer;

#[cfg(test)]
mod tests;

pub use codepoints::{Codepoints, count_scalars, decode};
pub use error::{EncodingError, InvalidArgument, PatternSyntaxError, TextError};
pub use options::{BufferOptions, Limit, PatternOptions};
#[cfg(feature = "pattern")]
pub use pattern::{Match, Pattern};
pub use text::Text;
pub use text_buffer::TextBuffer;
