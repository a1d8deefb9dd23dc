//! Microbenchmarks for the LZ78 and Huffman pipelines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textcomp::{huffman, lz78};

fn make_text(len: usize) -> String {
    let pattern = "The quick brown fox jumps over the lazy dog. ";
    let mut out = String::with_capacity(len + pattern.len());
    while out.len() < len {
        out.push_str(pattern);
    }
    out.truncate(len);
    out
}

fn bench_lz78(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz78");

    for size in [1 << 10, 1 << 14, 1 << 17] {
        let text = make_text(size);
        let pairs = lz78::encode(&text);
        let blob = lz78::serialize(&pairs);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| lz78::encode(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &pairs, |b, pairs| {
            b.iter(|| lz78::decode(black_box(pairs)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &blob, |b, blob| {
            b.iter(|| lz78::parse(black_box(blob)).unwrap())
        });
    }

    group.finish();
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");

    for size in [1 << 10, 1 << 14, 1 << 17] {
        let text = make_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| huffman::analyze(black_box(text)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lz78, bench_huffman);
criterion_main!(benches);
