// Copyright 2026 The lexiscan authors
// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexiscan::{Document, EngineConfig, SearchEngine};

const TITLES: &[&str] = &[
    "Introduction to search engines",
    "Understanding inverted indexes",
    "BM25 ranking in practice",
    "Fuzzy matching with Levenshtein distance",
    "Tokenization and Unicode text",
    "Building a web crawler",
    "Caching strategies for APIs",
    "Designing REST interfaces",
    "An overview of hash maps",
    "Sorting algorithms compared",
];

fn build_engine(document_count: usize) -> SearchEngine {
    let config = EngineConfig::builder()
        .id_field("path")
        .field("title")
        .field("body")
        .build()
        .unwrap();
    let mut engine = SearchEngine::new(config);

    for i in 0..document_count {
        let title = TITLES[i % TITLES.len()];
        let body = format!("{title} discussed in document number {i} with extra detail.");
        engine
            .add_document(
                Document::new()
                    .with("path", format!("/doc/{i}"))
                    .with("title", title)
                    .with("body", body),
            )
            .unwrap();
    }

    engine
}

fn bench_add_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_document");
    for &n in &[100usize, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_engine(n)));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &n in &[100usize, 1_000, 5_000] {
        let engine = build_engine(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(engine.search("search engine", None)));
        });
    }
    group.finish();
}

fn bench_wildcard(c: &mut Criterion) {
    let config = EngineConfig::builder()
        .id_field("path")
        .field("title")
        .initial_results((0..34).map(|i| format!("/doc/{i}")))
        .build()
        .unwrap();
    let mut engine = SearchEngine::new(config);
    for i in 0..1_000 {
        engine
            .add_document(Document::new().with("path", format!("/doc/{i}")).with("title", "x"))
            .unwrap();
    }

    c.bench_function("wildcard_search", |b| {
        b.iter(|| black_box(engine.search("*", None)));
    });
}

criterion_group!(benches, bench_add_document, bench_search, bench_wildcard);
criterion_main!(benches);
