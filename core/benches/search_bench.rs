use criterion::{criterion_group, criterion_main, Criterion};
use searchlite_core::tokenizer::tokenize;
use searchlite_core::Indexer;

fn bench_tokenize(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog and runs on ".repeat(200);
    c.bench_function("tokenize_prose", |b| b.iter(|| tokenize(&text)));
}

fn bench_search(c: &mut Criterion) {
    let mut idx = Indexer::new();
    for i in 0..500 {
        idx.add_document(
            format!("doc{i}"),
            format!("alpha beta gamma delta epsilon tag{i} quick brown fox"),
        );
    }
    c.bench_function("search_500_docs", |b| b.iter(|| idx.search("alpha quick tag42", 100)));
}

criterion_group!(benches, bench_tokenize, bench_search);
criterion_main!(benches);
