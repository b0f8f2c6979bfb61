//! Benchmark – `textcraft::TextBuffer` against repeated concatenation
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textcraft::{Text, TextBuffer};

const FRAGMENT: &str = "Wie geht's Brudi?👋🏻 ";

/// Builds the text by appending every fragment into one buffer.
fn build_with_buffer(fragments: usize) -> Text {
    let mut buffer = TextBuffer::new();
    for _ in 0..fragments {
        buffer.append_str(FRAGMENT);
    }
    buffer.snapshot().expect("fragments are valid utf-8")
}

/// Builds the text by concatenating whole values, copying the prefix every
/// time.
fn build_with_concat(fragments: usize) -> Text {
    let fragment = Text::from(FRAGMENT);
    let mut acc = Text::new();
    for _ in 0..fragments {
        acc = acc.concat(&fragment);
    }
    acc
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_text");
    for fragments in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("buffer", fragments), &fragments, |b, &n| {
            b.iter(|| black_box(build_with_buffer(n)));
        });
        group.bench_with_input(BenchmarkId::new("concat", fragments), &fragments, |b, &n| {
            b.iter(|| black_box(build_with_concat(n)));
        });
    }
    group.finish();
}

fn bench_reuse(c: &mut Criterion) {
    c.bench_function("reset_and_rebuild", |b| {
        let mut buffer = TextBuffer::new();
        b.iter(|| {
            buffer.reset();
            for _ in 0..256 {
                buffer.append_str(FRAGMENT);
            }
            black_box(buffer.snapshot().expect("fragments are valid utf-8"))
        });
    });
}

criterion_group!(benches, bench_build, bench_reuse);
criterion_main!(benches);
