//! Benchmarks for TOC construction and frequency counting.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use folio::construct_toc;
use folio::stats::{ngram_counts, preprocess, remove_stopwords, word_frequency};

/// Synthesize a large, well-formed table of contents.
fn toc_lines() -> Vec<String> {
    let romans = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];
    let mut lines = Vec::new();
    let mut chapter = 0;

    for (p, roman) in romans.iter().enumerate() {
        lines.push(format!("Part {}: Part number {}", roman, p + 1));
        for _ in 0..12 {
            chapter += 1;
            lines.push(format!("Chapter {chapter} Chapter number {chapter}"));
            for s in 1..=8 {
                lines.push(format!("{chapter}.{s} Subsection {chapter}.{s}"));
            }
        }
    }

    lines
}

fn sample_text() -> String {
    "Call me Ishmael. Some years ago, having little or no money in my purse, \
     I thought I would sail about a little and see the watery part of the world. "
        .repeat(500)
}

// ============================================================================
// TOC Benchmarks
// ============================================================================

fn bench_construct_toc(c: &mut Criterion) {
    let lines = toc_lines();
    c.bench_function("construct_toc", |b| {
        b.iter(|| construct_toc(&lines, "Benchmark Book", true).unwrap());
    });
}

fn bench_preorder_traversal(c: &mut Criterion) {
    let lines = toc_lines();
    let toc = construct_toc(&lines, "Benchmark Book", true).unwrap();
    c.bench_function("preorder_traversal", |b| {
        b.iter(|| toc.iter().count());
    });
}

fn bench_depth_lookup(c: &mut Criterion) {
    let lines = toc_lines();
    let toc = construct_toc(&lines, "Benchmark Book", true).unwrap();
    c.bench_function("depth_lookup_deep", |b| {
        b.iter(|| toc.depth("Subsection 96.8"));
    });
}

// ============================================================================
// Stats Benchmarks
// ============================================================================

fn bench_preprocess(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("preprocess", |b| {
        b.iter(|| preprocess(&text, true));
    });
}

fn bench_word_frequency(c: &mut Criterion) {
    let pre = preprocess(&sample_text(), true);
    let (kept, _) = remove_stopwords(&pre.tokens);
    c.bench_function("word_frequency", |b| {
        b.iter(|| word_frequency(&kept));
    });
}

fn bench_bigrams(c: &mut Criterion) {
    let pre = preprocess(&sample_text(), true);
    let (kept, _) = remove_stopwords(&pre.tokens);
    c.bench_function("bigram_counts", |b| {
        b.iter(|| ngram_counts(&kept, 2));
    });
}

criterion_group!(
    benches,
    bench_construct_toc,
    bench_preorder_traversal,
    bench_depth_lookup,
    bench_preprocess,
    bench_word_frequency,
    bench_bigrams,
);
criterion_main!(benches);
