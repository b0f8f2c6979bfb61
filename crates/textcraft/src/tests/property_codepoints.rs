use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{arbitrary::DenseText, test_count};
use crate::{Codepoints, Text, count_scalars};

/// Property: decoding a text and re-encoding every emitted scalar reproduces
/// the original bytes, and offsets are the lead byte of each scalar.
#[test]
fn decode_reencode_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: String) -> bool {
        let text = Text::from(src.as_str());
        let mut rebuilt = Vec::with_capacity(text.byte_len());
        let mut expected_offset = 0;
        for (offset, ch) in text.codepoints() {
            if offset != expected_offset {
                return false;
            }
            let mut tmp = [0u8; 4];
            rebuilt.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
            expected_offset = rebuilt.len();
        }
        rebuilt == text.as_bytes() && expected_offset == text.byte_len()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: the scalar count never exceeds the byte length, and equals it
/// exactly when the content is ASCII.
#[test]
fn scalar_count_bounded_by_bytes_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: DenseText) -> bool {
        let count = count_scalars(&src.0);
        count <= src.0.len() && (count == src.0.len()) == src.0.is_ascii()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(DenseText) -> bool);
}

/// Property: validated construction accepts exactly what the standard
/// library accepts, and never yields a partial text.
#[test]
fn from_utf8_agrees_with_core_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        match (Text::from_utf8(&bytes), core::str::from_utf8(&bytes)) {
            (Ok(text), Ok(s)) => text == s,
            (Err(ours), Err(theirs)) => {
                ours.valid_up_to() == theirs.valid_up_to()
                    && ours.error_len() == theirs.error_len()
            }
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: every strict prefix that ends inside a multi-byte scalar is
/// rejected as truncated.
#[quickcheck]
fn truncated_prefix_rejected(ch: char) -> bool {
    let mut tmp = [0u8; 4];
    let encoded = ch.encode_utf8(&mut tmp).as_bytes();
    (1..encoded.len()).all(|cut| Text::from_utf8(&encoded[..cut]).is_err_and(|e| e.is_truncated()))
        && Codepoints::new(&String::from(ch)).count() == 1
}
