//! Criterion benchmarks for the burrow transform pipeline
//!
//! This benchmark suite evaluates:
//! - BWT forward/inverse transform speed
//! - MTF encode/decode speed
//! - Full pipeline roundtrip throughput (MB/s)
//! - Performance across various data patterns

use burrow_codec::{bwt, compress, expand, mtf};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (worst case for the rotation sort)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (nothing to cluster)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repetitive pattern - good for BWT clustering
    pub fn repetitive(size: usize) -> Vec<u8> {
        let pattern = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(pattern.len());
            data.extend_from_slice(&pattern[..chunk_size]);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

/// Standard data sizes for benchmarking
/// Note: the rotation sort is quadratic on highly repetitive data, so sizes stay moderate
mod data_sizes {
    pub const TINY: usize = 1024; // 1 KB
    pub const SMALL: usize = 10 * 1024; // 10 KB
    pub const MEDIUM: usize = 64 * 1024; // 64 KB
}

/// Benchmark BWT forward transform performance
fn bench_bwt_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_transform");

    let sizes = [
        ("1KB", data_sizes::TINY),
        ("10KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
    ];

    for (size_name, size) in sizes {
        let data = test_data::text_like(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let (transformed, first) = bwt::transform(black_box(data));
                black_box((transformed, first));
            });
        });
    }

    group.finish();
}

/// Benchmark BWT inverse transform performance
fn bench_bwt_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_inverse");

    let sizes = [
        ("1KB", data_sizes::TINY),
        ("10KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
    ];

    for (size_name, size) in sizes {
        let data = test_data::text_like(size);
        let (transformed, first) = bwt::transform(&data);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &(transformed, first),
            |b, (transformed, first)| {
                b.iter(|| {
                    let reconstructed = bwt::inverse_transform(black_box(transformed), *first);
                    black_box(reconstructed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark MTF encode and decode speed
fn bench_mtf(c: &mut Criterion) {
    let mut group = c.benchmark_group("mtf");

    let size = data_sizes::MEDIUM;
    let data = test_data::text_like(size);
    let (transformed, _) = bwt::transform(&data);
    let codes = mtf::encode(&transformed);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(
        BenchmarkId::from_parameter("encode"),
        &transformed,
        |b, transformed| {
            b.iter(|| {
                let codes = mtf::encode(black_box(transformed));
                black_box(codes);
            });
        },
    );
    group.bench_with_input(BenchmarkId::from_parameter("decode"), &codes, |b, codes| {
        b.iter(|| {
            let bytes = mtf::decode(black_box(codes));
            black_box(bytes);
        });
    });

    group.finish();
}

/// Benchmark the full pipeline for different data types
fn bench_pipeline_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_data_types");

    let patterns: [(&str, PatternGenerator); 4] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("repetitive", test_data::repetitive as PatternGenerator),
        ("text", test_data::text_like as PatternGenerator),
    ];

    // Uniform data hits the quadratic sort path, so the shared size stays small
    let size = data_sizes::SMALL;

    for (pattern_name, generator) in patterns {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let frame = compress(black_box(data));
                    black_box(frame);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark roundtrip (compress + expand)
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let sizes = [
        ("1KB", data_sizes::TINY),
        ("10KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
    ];

    for (size_name, size) in sizes {
        let data = test_data::text_like(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let frame = compress(black_box(data));
                let recovered = expand(&frame).unwrap();
                black_box(recovered);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bwt_transform,
    bench_bwt_inverse,
    bench_mtf,
    bench_pipeline_data_types,
    bench_roundtrip,
);

criterion_main!(benches);
