use core::tokenizer::tokenize;
use core::Engine;
use criterion::{criterion_group, criterion_main, Criterion};

const WORDS: &[&str] = &[
    "hunter", "desert", "river", "treasure", "mountain", "journey", "king", "stone", "shadow",
    "night", "fire", "storm", "silver", "ancient", "ruin",
];

fn synthetic_corpus(num_docs: usize) -> Vec<(String, Vec<String>)> {
    (0..num_docs)
        .map(|d| {
            let tokens: Vec<String> = (0..200)
                .map(|i| WORDS[(d * 7 + i * 13) % WORDS.len()].to_string())
                .collect();
            (format!("doc {d:03}"), tokens)
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "The hunters crossed the burning desert, following the river toward the ruined city of the ancient kings."
        .repeat(50);
    c.bench_function("tokenize_paragraphs", |b| b.iter(|| tokenize(&text)));
}

fn bench_build(c: &mut Criterion) {
    let documents = synthetic_corpus(100);
    c.bench_function("engine_build_100_docs", |b| {
        b.iter(|| Engine::build(documents.clone()).unwrap())
    });
}

fn bench_rank(c: &mut Criterion) {
    let engine = Engine::build(synthetic_corpus(100)).unwrap();
    c.bench_function("rank_retrieve_top10", |b| {
        b.iter(|| engine.query_ranked("treasure hunter in the mountain storm", 10))
    });
}

criterion_group!(benches, bench_tokenize, bench_build, bench_rank);
criterion_main!(benches);
