use criterion::{criterion_group, criterion_main, Criterion};
use stegano_lcg_core::huffman;

const TEXT: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, \
    it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity";

pub fn huffman_encoding(c: &mut Criterion) {
    c.bench_function("Huffman Encoding", |b| {
        b.iter(|| huffman::encode(TEXT));
    });

    let (payload, table) = huffman::encode(TEXT);
    c.bench_function("Huffman Decoding", |b| {
        b.iter(|| table.decode(&payload));
    });
}

criterion_group!(benches, huffman_encoding);
criterion_main!(benches);
