//! Splitting, joining, searching and case mapping over immutable text.
//!
//! Every function here is pure: inputs are borrowed, results are new
//! [`Text`] values or plain metadata.
//!
//! Substring search works on bytes. That is correct for valid UTF-8 because
//! the encoding is self-synchronizing: a valid needle can only match starting
//! at a scalar boundary of a valid haystack. All searches use the same
//! non-overlapping leftmost discipline: after a match, scanning resumes at the
//! first byte past the matched span.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{
    Limit, Text, TextBuffer,
    error::InvalidArgument,
};

/// Splits `text` on every non-overlapping occurrence of `separator`.
///
/// Consecutive separators produce empty elements; nothing is filtered. An
/// empty `text` yields a single empty element.
///
/// ```rust
/// use textcraft::segment::split;
///
/// let parts = split("a,b,,c", ",")?;
/// assert_eq!(parts, ["a", "b", "", "c"]);
/// # Ok::<(), textcraft::InvalidArgument>(())
/// ```
///
/// # Errors
///
/// [`InvalidArgument::EmptySeparator`] if `separator` is empty.
pub fn split<T, S>(text: &T, separator: &S) -> Result<Vec<Text>, InvalidArgument>
where
    T: AsRef<str> + ?Sized,
    S: AsRef<str> + ?Sized,
{
    let separator = separator.as_ref();
    if separator.is_empty() {
        return Err(InvalidArgument::EmptySeparator);
    }
    Ok(text.as_ref().split(separator).map(Text::from).collect())
}

/// Splits `text` around runs of whitespace scalar values.
///
/// Unlike [`split`], never yields empty elements.
#[must_use]
pub fn fields<T: AsRef<str> + ?Sized>(text: &T) -> Vec<Text> {
    text.as_ref().split_whitespace().map(Text::from).collect()
}

/// Concatenates `parts` with `separator` between neighbours.
///
/// For a non-empty `separator`, `join(split(t, sep), sep) == t`.
#[must_use]
pub fn join<P, S>(parts: &[P], separator: &S) -> Text
where
    P: AsRef<str>,
    S: AsRef<str> + ?Sized,
{
    let separator = separator.as_ref();
    let total = parts.iter().map(|p| p.as_ref().len()).sum::<usize>()
        + separator.len() * parts.len().saturating_sub(1);
    let mut buffer = TextBuffer::with_capacity(total);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            buffer.append_str(separator);
        }
        buffer.append_str(part.as_ref());
    }
    buffer.to_text()
}

/// Whether `needle` occurs anywhere in `text`. The empty needle always does.
#[must_use]
pub fn contains<T, N>(text: &T, needle: &N) -> bool
where
    T: AsRef<str> + ?Sized,
    N: AsRef<str> + ?Sized,
{
    find(text, needle).is_some()
}

/// Byte offset of the leftmost occurrence of `needle`.
#[must_use]
pub fn find<T, N>(text: &T, needle: &N) -> Option<usize>
where
    T: AsRef<str> + ?Sized,
    N: AsRef<str> + ?Sized,
{
    text.as_ref().as_bytes().find(needle.as_ref().as_bytes())
}

/// Whether `text` starts with `prefix`.
#[must_use]
pub fn has_prefix<T, P>(text: &T, prefix: &P) -> bool
where
    T: AsRef<str> + ?Sized,
    P: AsRef<str> + ?Sized,
{
    text.as_ref().as_bytes().starts_with_str(prefix.as_ref())
}

/// Whether `text` ends with `suffix`.
#[must_use]
pub fn has_suffix<T, S>(text: &T, suffix: &S) -> bool
where
    T: AsRef<str> + ?Sized,
    S: AsRef<str> + ?Sized,
{
    text.as_ref().as_bytes().ends_with_str(suffix.as_ref())
}

/// Replaces up to `limit` non-overlapping leftmost occurrences of `needle`.
///
/// After a replacement, scanning resumes right after the replaced span, so
/// `replace("aaa", "aa", "b", Limit::All)` is `"ba"`.
///
/// # Errors
///
/// [`InvalidArgument::EmptyNeedle`] if `needle` is empty.
pub fn replace<T, N, R>(
    text: &T,
    needle: &N,
    replacement: &R,
    limit: Limit,
) -> Result<Text, InvalidArgument>
where
    T: AsRef<str> + ?Sized,
    N: AsRef<str> + ?Sized,
    R: AsRef<str> + ?Sized,
{
    let (text, needle, replacement) = (text.as_ref(), needle.as_ref(), replacement.as_ref());
    if needle.is_empty() {
        return Err(InvalidArgument::EmptyNeedle);
    }

    let mut buffer = TextBuffer::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = 0;
    for start in text.as_bytes().find_iter(needle) {
        if limit.is_reached(replaced) {
            break;
        }
        buffer.append_str(&text[last..start]);
        buffer.append_str(replacement);
        last = start + needle.len();
        replaced += 1;
    }
    buffer.append_str(&text[last..]);
    Ok(buffer.to_text())
}

/// Counts non-overlapping leftmost occurrences of `needle`.
///
/// Uses the same scan as [`replace`]: `count_occurrences("aaaa", "aa")` is 2.
///
/// # Errors
///
/// [`InvalidArgument::EmptyNeedle`] if `needle` is empty.
pub fn count_occurrences<T, N>(text: &T, needle: &N) -> Result<usize, InvalidArgument>
where
    T: AsRef<str> + ?Sized,
    N: AsRef<str> + ?Sized,
{
    let needle = needle.as_ref();
    if needle.is_empty() {
        return Err(InvalidArgument::EmptyNeedle);
    }
    Ok(text.as_ref().as_bytes().find_iter(needle).count())
}

/// Removes leading and trailing whitespace scalar values.
///
/// Whitespace is the Unicode `White_Space` property, not just ASCII space.
#[must_use]
pub fn trim_space<T: AsRef<str> + ?Sized>(text: &T) -> Text {
    Text::from(text.as_ref().trim_matches(char::is_whitespace))
}

/// Maps every scalar value to lowercase, which may change the byte length.
#[must_use]
pub fn to_lower<T: AsRef<str> + ?Sized>(text: &T) -> Text {
    Text::from(text.as_ref().to_lowercase())
}

/// Maps every scalar value to uppercase, which may change the byte length.
#[must_use]
pub fn to_upper<T: AsRef<str> + ?Sized>(text: &T) -> Text {
    Text::from(text.as_ref().to_uppercase())
}

/// Concatenates `n` copies of `text`.
///
/// # Errors
///
/// - [`InvalidArgument::NegativeCount`] if `n < 0`.
/// - [`InvalidArgument::CountOverflow`] if the result would not fit in
///   memory's addressable length.
pub fn repeat<T: AsRef<str> + ?Sized>(text: &T, n: i64) -> Result<Text, InvalidArgument> {
    let text = text.as_ref();
    let n = usize::try_from(n).map_err(|_| {
        if n < 0 {
            InvalidArgument::NegativeCount(n)
        } else {
            InvalidArgument::CountOverflow
        }
    })?;
    if text.is_empty() || n == 0 {
        return Ok(Text::new());
    }
    let total = text
        .len()
        .checked_mul(n)
        .filter(|&total| isize::try_from(total).is_ok())
        .ok_or(InvalidArgument::CountOverflow)?;

    let mut buffer = TextBuffer::with_capacity(total);
    for _ in 0..n {
        buffer.append_str(text);
    }
    Ok(buffer.to_text())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const FRUITS: &str = "apple🍎, orange🍊, bananas🍌";

    #[test]
    fn split_keeps_empty_elements() {
        assert_eq!(split("a,b,,c", ",").unwrap(), ["a", "b", "", "c"]);
        assert_eq!(split("", ",").unwrap(), [""]);
        assert_eq!(split(",", ",").unwrap(), ["", ""]);
    }

    #[test]
    fn split_on_emoji_text() {
        assert_eq!(
            split(FRUITS, ",").unwrap(),
            ["apple🍎", " orange🍊", " bananas🍌"]
        );
        assert_eq!(
            split("GRU🧠-Vympel⚔️-Alpha🛡️-SSO🥷🏻-Frogmen⚓", "-").unwrap(),
            ["GRU🧠", "Vympel⚔️", "Alpha🛡️", "SSO🥷🏻", "Frogmen⚓"]
        );
    }

    #[test]
    fn split_rejects_empty_separator() {
        assert_eq!(split("abc", ""), Err(InvalidArgument::EmptySeparator));
    }

    #[test]
    fn join_inverts_split() {
        let parts = split("a,b,,c", ",").unwrap();
        assert_eq!(join(&parts, ","), "a,b,,c");

        let jets = ["Su-27", "Mig-29", "Su-57", "Su-35"];
        assert_eq!(join(&jets, " 🔥 "), "Su-27 🔥 Mig-29 🔥 Su-57 🔥 Su-35");
        assert_eq!(join::<&str, _>(&[], ","), "");
    }

    #[test]
    fn containment() {
        assert!(contains("Mig-29", "Mig-29"));
        assert!(!contains(FRUITS, "zzz"));
        assert!(contains(FRUITS, ""));
        assert_eq!(find(FRUITS, "orange"), Some(11));
        assert!(has_prefix("Batman🦇", "Ba"));
        assert!(has_suffix("Spiderman🕷️", "an🕷️"));
        assert!(!has_suffix("Spiderman🕷️", "an"));
        assert!(has_prefix("x", ""));
    }

    #[test]
    fn replace_first_occurrence_only() {
        let replaced = replace(FRUITS, "orange🍊", "cherry🍒", Limit::AtMost(1)).unwrap();
        assert_eq!(replaced, "apple🍎, cherry🍒, bananas🍌");
    }

    #[rstest]
    #[case("aaa", "aa", "b", Limit::All, "ba")]
    #[case("aaaa", "a", "", Limit::AtMost(2), "aa")]
    #[case("abab", "ab", "xyz", Limit::All, "xyzxyz")]
    #[case("abc", "zz", "y", Limit::All, "abc")]
    #[case("abc", "b", "y", Limit::AtMost(0), "abc")]
    fn replace_scan(
        #[case] text: &str,
        #[case] needle: &str,
        #[case] replacement: &str,
        #[case] limit: Limit,
        #[case] expected: &str,
    ) {
        assert_eq!(replace(text, needle, replacement, limit).unwrap(), expected);
    }

    #[test]
    fn empty_needle_is_rejected() {
        assert_eq!(
            replace("abc", "", "x", Limit::All),
            Err(InvalidArgument::EmptyNeedle)
        );
        assert_eq!(count_occurrences("abc", ""), Err(InvalidArgument::EmptyNeedle));
    }

    #[test]
    fn counts_do_not_overlap() {
        assert_eq!(count_occurrences("aaaa", "aa").unwrap(), 2);
        assert_eq!(count_occurrences(FRUITS, "a").unwrap(), 5);
        assert_eq!(count_occurrences("🍎🍎", "🍎").unwrap(), 2);
    }

    #[test]
    fn trims_unicode_whitespace() {
        assert_eq!(trim_space("     Hallo Leute  "), "Hallo Leute");
        assert_eq!(trim_space("\u{3000}\tx y\u{2009}\n"), "x y");
        assert_eq!(trim_space("   "), "");
    }

    #[test]
    fn case_mapping_is_scalar_aware() {
        assert_eq!(to_lower("     Hallo Leute  "), "     hallo leute  ");
        assert_eq!(to_upper("     Hallo Leute  "), "     HALLO LEUTE  ");
        assert_eq!(to_upper("straße"), "STRASSE");
        assert_eq!(to_lower("ΑΒΓ"), "αβγ");
    }

    #[test]
    fn repeats() {
        assert_eq!(
            repeat("Scramble!⚠️ ", 3).unwrap(),
            "Scramble!⚠️ Scramble!⚠️ Scramble!⚠️ "
        );
        assert_eq!(repeat("abc", 0).unwrap(), "");
        assert_eq!(repeat("abc", -1), Err(InvalidArgument::NegativeCount(-1)));
        assert_eq!(repeat("abc", i64::MAX), Err(InvalidArgument::CountOverflow));
        assert_eq!(repeat("", i64::MAX).unwrap(), "");
        assert_eq!(repeat("", -2), Err(InvalidArgument::NegativeCount(-2)));
    }

    #[test]
    fn fields_skip_runs() {
        assert_eq!(fields("  a \t b\n\nc "), ["a", "b", "c"]);
        assert!(fields(" \t ").is_empty());
    }

    #[test]
    fn accepts_text_arguments() {
        let text = Text::from("x=1;y=2");
        let sep = Text::from(";");
        assert_eq!(split(&text, &sep).unwrap(), ["x=1", "y=2"]);
        assert!(contains(&text, "y="));
    }
}
