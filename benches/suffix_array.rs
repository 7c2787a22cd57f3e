//! Suffix array construction and query benchmarks
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sax::search::longest_repeated_substring;
use sax::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig};

/// Prose-like text built from a fixed vocabulary
fn prose(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "it", "was", "the", "best", "of", "times", "worst", "age", "wisdom", "foolishness",
        "epoch", "belief", "incredulity", "season", "light", "darkness",
    ];

    let mut text = Vec::with_capacity(len + 16);
    let mut state: u32 = 0x9e37_79b9;
    while text.len() < len {
        // xorshift keeps the sequence deterministic across runs
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        text.extend_from_slice(WORDS[state as usize % WORDS.len()].as_bytes());
        text.push(b' ');
    }
    text.truncate(len);
    text
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [1_000, 10_000, 100_000] {
        let text = prose(size);
        group.bench_with_input(BenchmarkId::new("prose", size), &text, |b, text| {
            b.iter(|| SuffixArray::new(black_box(text.clone())))
        });
    }

    // Long shared prefixes push the sort deep
    let repetitive = b"abcabcabd".repeat(2_000);
    group.bench_function("repetitive_18k", |b| {
        b.iter(|| SuffixArray::new(black_box(repetitive.clone())))
    });

    group.finish();
}

fn bench_cutoff(c: &mut Criterion) {
    let text = prose(50_000);
    let mut group = c.benchmark_group("insertion_cutoff");

    for cutoff in [1, 4, 8, 15, 32] {
        let config = SuffixArrayConfig {
            insertion_cutoff: cutoff,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(cutoff), &config, |b, config| {
            b.iter(|| {
                SuffixArrayBuilder::new(config.clone())
                    .unwrap()
                    .build(black_box(text.clone()))
            })
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let sa = SuffixArray::new(prose(100_000));
    let mut group = c.benchmark_group("queries");

    for key in ["the", "wisdom of the", "zzz"] {
        group.bench_with_input(BenchmarkId::new("rank", key), &key, |b, key| {
            b.iter(|| sa.rank(black_box(key.as_bytes())))
        });
        group.bench_with_input(BenchmarkId::new("count", key), &key, |b, key| {
            b.iter(|| sa.count(black_box(key.as_bytes())))
        });
    }

    group.bench_function("longest_repeated_substring", |b| {
        b.iter(|| longest_repeated_substring(black_box(&sa)))
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_cutoff, bench_queries);
criterion_main!(benches);
