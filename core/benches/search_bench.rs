use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docsearch::document::document;
use docsearch::tokenizer::tokenize;
use docsearch::{Document, Engine, QueryOptions};

const WORDS: &[&str] = &[
    "rust", "search", "index", "vector", "engine", "query", "apple", "field", "weight", "score",
    "token", "corpus", "boost", "norm", "cosine", "ranking", "document", "term", "memory", "fast",
];

fn corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            let title: Vec<&str> = (0..4).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect();
            let body: Vec<&str> = (0..40).map(|j| WORDS[(i * 13 + j * 5 + j / 3) % WORDS.len()]).collect();
            document([("title", title.join(" ")), ("body", body.join(", "))])
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "The quick, brown fox jumps over the lazy dog; it's a well-known pangram! ".repeat(50);
    c.bench_function("tokenize_paragraph", |b| b.iter(|| tokenize(black_box(&text))));
}

fn bench_build(c: &mut Criterion) {
    let docs = corpus(1_000);
    c.bench_function("build_engine_1k", |b| {
        b.iter(|| Engine::from_documents(black_box(docs.clone())))
    });
}

fn bench_query(c: &mut Criterion) {
    let engine = match Engine::from_documents(corpus(5_000)) {
        Ok(engine) => engine,
        Err(e) => panic!("corpus should index: {e}"),
    };
    let opts = QueryOptions::default().with_boost("title", 1.5);
    c.bench_function("query_5k_three_terms", |b| {
        b.iter(|| engine.query(black_box("rust search ranking"), &opts))
    });
}

criterion_group!(benches, bench_tokenize, bench_build, bench_query);
criterion_main!(benches);
