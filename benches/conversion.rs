//! Criterion benchmarks for the conversion hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csd::{decode, encode, encode_int, longest_repeated_substring};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_f64", |b| {
        b.iter(|| encode(black_box(107.625), black_box(8)).unwrap());
    });
    c.bench_function("encode_int", |b| {
        b.iter(|| encode_int(black_box(987_654_321)));
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode", |b| {
        b.iter(|| decode(black_box("+00-0-00.-0+0")).unwrap());
    });
}

fn bench_pattern(c: &mut Criterion) {
    let input = "+-00+-00+-00+-0".repeat(4);
    c.bench_function("longest_repeated_substring", |b| {
        b.iter(|| longest_repeated_substring(black_box(&input)));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_pattern);
criterion_main!(benches);
