#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcraft::{Limit, Text, TextBuffer, segment};

#[derive(Debug, Arbitrary)]
struct Input {
    split_seed: u64,
    needle: String,
    replacement: String,
    bytes: Vec<u8>,
}

fn run(input: Input) {
    // Feed raw bytes in seed-sized pieces, ignoring scalar boundaries.
    let mut buffer = TextBuffer::new();
    for piece in split_into_chunks(&input.bytes, input.split_seed) {
        buffer.append_bytes(piece);
        assert!(buffer.len() <= buffer.capacity());
    }

    let expected = core::str::from_utf8(&input.bytes);
    let text = match (buffer.snapshot(), expected) {
        (Ok(text), Ok(s)) => {
            assert_eq!(text, s);
            text
        }
        (Err(ours), Err(theirs)) => {
            assert_eq!(ours.valid_up_to(), theirs.valid_up_to());
            assert!(Text::from_utf8(&input.bytes).is_err());
            return;
        }
        (ours, theirs) => panic!("validation disagrees: {ours:?} vs {theirs:?}"),
    };

    // Decoding consumes exactly the byte length, offsets strictly increasing.
    let mut next = 0;
    for (offset, ch) in text.codepoints() {
        assert_eq!(offset, next);
        next += ch.len_utf8();
    }
    assert_eq!(next, text.byte_len());

    if input.needle.is_empty() {
        assert!(segment::split(&text, &input.needle).is_err());
        return;
    }

    let parts = segment::split(&text, &input.needle).expect("non-empty separator");
    assert_eq!(segment::join(&parts, &input.needle), text);

    let replaced = segment::replace(&text, &input.needle, &input.replacement, Limit::All)
        .expect("non-empty needle");
    assert_eq!(
        replaced,
        text.as_str().replace(input.needle.as_str(), &input.replacement).as_str()
    );
    assert_eq!(
        segment::count_occurrences(&text, &input.needle),
        Ok(parts.len() - 1)
    );
}

fuzz_target!(|input: Input| run(input));

/// Split `bytes` into pieces of at least one byte whose sizes derive from
/// `split_seed`.
fn split_into_chunks(bytes: &[u8], split_seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut seed = split_seed;

    while start < bytes.len() {
        let remaining = bytes.len() - start;
        let size = (seed as usize % remaining) + 1;
        chunks.push(&bytes[start..start + size]);
        start += size;
        seed = seed.rotate_left(7) ^ 0x9E37_79B9_7F4A_7C15;
    }

    chunks
}
