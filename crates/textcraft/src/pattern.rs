//! Compiled patterns and match extraction.
//!
//! Matching is delegated to the `regex` crate; this module only fixes the
//! contract around it:
//! - compile once with [`Pattern::compile`], then reuse the value across any
//!   number of texts and threads;
//! - [`Pattern::find_all`] returns non-overlapping leftmost matches in
//!   left-to-right order, up to a [`Limit`];
//! - a text that matches nothing gives an empty result, never an error.
//!
//! Bounding matching work on adversarial input is left to the caller; the
//! only knob here is [`PatternOptions::size_limit`], which caps the size of
//! the compiled program.

use alloc::{string::ToString, vec::Vec};
use core::{fmt, ops::Range};

use regex::{Regex, RegexBuilder};

use crate::{Limit, PatternOptions, Text, error::PatternSyntaxError};

/// An immutable, precompiled matching rule.
///
/// ```rust
/// use textcraft::{Limit, Pattern, Text};
///
/// let digits = Pattern::compile(r"\d+")?;
/// let slogan = Text::from("I'm Batman 123 And 55");
/// let found = digits.find_all_text(&slogan, Limit::All);
/// assert_eq!(found, ["123", "55"]);
/// # Ok::<(), textcraft::PatternSyntaxError>(())
/// ```
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    options: PatternOptions,
}

impl Pattern {
    /// Compiles `source` with default [`PatternOptions`].
    ///
    /// # Errors
    ///
    /// [`PatternSyntaxError`] if `source` is malformed.
    pub fn compile(source: &str) -> Result<Self, PatternSyntaxError> {
        Self::with_options(source, PatternOptions::default())
    }

    /// Compiles `source` with the given flags.
    ///
    /// # Errors
    ///
    /// - [`PatternSyntaxError::Syntax`] if `source` is malformed.
    /// - [`PatternSyntaxError::TooBig`] if the compiled program exceeds
    ///   [`PatternOptions::size_limit`].
    pub fn with_options(source: &str, options: PatternOptions) -> Result<Self, PatternSyntaxError> {
        let mut builder = RegexBuilder::new(source);
        builder
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line);
        if let Some(limit) = options.size_limit {
            builder.size_limit(limit);
        }

        let regex = builder.build().map_err(|err| match err {
            regex::Error::CompiledTooBig(limit) => PatternSyntaxError::TooBig {
                pattern: source.to_string(),
                limit,
            },
            other => PatternSyntaxError::Syntax {
                pattern: source.to_string(),
                message: other.to_string(),
            },
        })?;
        log::debug!("compiled pattern {source:?} with {options:?}");
        Ok(Self { regex, options })
    }

    /// The source this pattern was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The flags this pattern was compiled with.
    #[must_use]
    pub fn options(&self) -> PatternOptions {
        self.options
    }

    /// Whether the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &Text) -> bool {
        self.regex.is_match(text.as_str())
    }

    /// The leftmost match, if any.
    #[must_use]
    pub fn find(&self, text: &Text) -> Option<Match> {
        self.regex
            .find(text.as_str())
            .map(|m| Match::new(m.start(), m.end(), m.as_str()))
    }

    /// Up to `limit` non-overlapping leftmost matches, in order.
    #[must_use]
    pub fn find_all(&self, text: &Text, limit: Limit) -> Vec<Match> {
        let found = self
            .regex
            .find_iter(text.as_str())
            .map(|m| Match::new(m.start(), m.end(), m.as_str()));
        match limit {
            Limit::All => found.collect(),
            Limit::AtMost(n) => found.take(n).collect(),
        }
    }

    /// Like [`find_all`](Self::find_all), keeping only the matched text.
    #[must_use]
    pub fn find_all_text(&self, text: &Text, limit: Limit) -> Vec<Text> {
        self.find_all(text, limit)
            .into_iter()
            .map(Match::into_text)
            .collect()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One match of a [`Pattern`] against a specific source text.
///
/// Offsets are byte offsets into that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    start: usize,
    end: usize,
    text: Text,
}

impl Match {
    fn new(start: usize, end: usize, matched: &str) -> Self {
        Self {
            start,
            end,
            text: Text::from(matched),
        }
    }

    /// Byte offset where the match begins.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// `start..end`.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the match in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match is empty (a zero-width match).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text.
    #[must_use]
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// The matched text as a `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Consumes the match, keeping only its text.
    #[must_use]
    pub fn into_text(self) -> Text {
        self.text
    }
}
