//! Criterion benchmarks for spellmend.
//!
//! Covers the three pipeline stages on synthetic boolean queries:
//! - Query tokenization
//! - Correction aggregation
//! - Full suggestion processing

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use spellmend::spelling::{RawCorrection, SpellingConfig, SpellingProcessor, aggregate, tokenize};
use std::hint::black_box;

/// Build a boolean query with `terms` words, phrases and operators.
fn generate_query(terms: usize) -> String {
    let words = [
        "history", "grumble", "\"civil war\"", "maps", "grimble", "letters", "(archive", "1862)",
    ];
    let operators = ["AND", "OR", "NOT"];

    let mut parts = Vec::with_capacity(terms * 2);
    for i in 0..terms {
        if i > 0 {
            parts.push(operators[i % operators.len()]);
        }
        parts.push(words[i % words.len()]);
    }
    parts.join(" ")
}

/// Build corrections for every bare word in the query plus some stale ones.
fn generate_corrections(query: &str, candidates: usize) -> Vec<RawCorrection> {
    tokenize(query)
        .into_iter()
        .chain((0..10).map(|i| format!("stale{i}")))
        .enumerate()
        .map(|(i, term)| {
            (0..candidates).fold(RawCorrection::new(term.clone(), i as u64), |c, j| {
                c.with_candidate(format!("{term}{j}"), (j * 7) as u64)
            })
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for terms in [4, 32, 256] {
        let query = generate_query(terms);
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_function(format!("{terms}_terms"), |b| {
            b.iter(|| tokenize(black_box(&query)))
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let query = generate_query(32);
    let tokens = tokenize(&query);
    let corrections = generate_corrections(&query, 10);
    let config = SpellingConfig::default();

    c.bench_function("aggregate_32_terms", |b| {
        b.iter(|| aggregate(black_box(&corrections), black_box(&tokens), &config))
    });
}

fn bench_correct(c: &mut Criterion) {
    let query = generate_query(32);
    let corrections = generate_corrections(&query, 10);

    let mut group = c.benchmark_group("correct");
    for (name, config) in [
        ("default", SpellingConfig::default()),
        ("phrase", SpellingConfig::default().with_phrase(true)),
    ] {
        let processor = SpellingProcessor::with_config(config);
        group.bench_function(name, |b| {
            b.iter(|| processor.correct(black_box(&corrections), black_box(&query), "AllFields"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_aggregate, bench_correct);
criterion_main!(benches);
