/// Configuration for a [`TextBuffer`](crate::TextBuffer).
///
/// # Examples
///
/// ```rust
/// use textcraft::{BufferOptions, TextBuffer};
///
/// let buffer = TextBuffer::with_options(BufferOptions {
///     initial_capacity: 64,
///     ..Default::default()
/// });
/// assert!(buffer.capacity() >= 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Bytes to allocate up front.
    ///
    /// # Default
    ///
    /// `0` (no allocation until the first append)
    pub initial_capacity: usize,

    /// Smallest allocation made once the buffer grows at all.
    ///
    /// Keeps a buffer that starts empty from reallocating on each of its first
    /// few single-byte appends.
    ///
    /// # Default
    ///
    /// `16`
    pub min_capacity: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            min_capacity: 16,
        }
    }
}

/// Flags applied when compiling a [`Pattern`](crate::Pattern).
///
/// All flags default to `false`; `size_limit` defaults to the engine's own
/// limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PatternOptions {
    /// Match letters regardless of case (`(?i)`).
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries (`(?m)`).
    pub multi_line: bool,

    /// `.` also matches `\n` (`(?s)`).
    pub dot_matches_new_line: bool,

    /// Upper bound, in bytes, on the compiled program.
    ///
    /// Compilation fails with
    /// [`PatternSyntaxError::TooBig`](crate::PatternSyntaxError::TooBig)
    /// when exceeded. Useful when pattern sources come from untrusted input.
    pub size_limit: Option<usize>,
}

/// How many occurrences an operation may act on.
///
/// Shared by [`segment::replace`](crate::segment::replace) and
/// [`Pattern::find_all`](crate::Pattern::find_all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Limit {
    /// Every occurrence.
    #[default]
    All,
    /// At most this many occurrences, leftmost first.
    AtMost(usize),
}

impl Limit {
    /// Maps the "negative means unbounded" calling convention onto [`Limit`].
    ///
    /// ```rust
    /// use textcraft::Limit;
    ///
    /// assert_eq!(Limit::from_signed(-1), Limit::All);
    /// assert_eq!(Limit::from_signed(2), Limit::AtMost(2));
    /// ```
    #[must_use]
    pub fn from_signed(n: i64) -> Self {
        usize::try_from(n).map_or(Limit::All, Limit::AtMost)
    }

    /// Whether `taken` occurrences already exhaust this limit.
    #[inline]
    pub(crate) fn is_reached(self, taken: usize) -> bool {
        match self {
            Limit::All => false,
            Limit::AtMost(max) => taken >= max,
        }
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::AtMost(n)
    }
}
