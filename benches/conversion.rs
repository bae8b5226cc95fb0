//! Benchmarks for Matrix Market parsing and ELLPACK conversions

use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ellconv::{LayoutConfig, TripleStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Renders a random general matrix with roughly `nnz_per_row` entries per row
fn random_mtx(n: usize, nnz_per_row: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nnz = n * nnz_per_row;

    let mut text = String::with_capacity(nnz * 24);
    writeln!(text, "%%MatrixMarket matrix coordinate real general").unwrap();
    writeln!(text, "{} {} {}", n, n, nnz).unwrap();
    for _ in 0..nnz {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        let val: f64 = rng.gen_range(-10.0..10.0);
        writeln!(text, "{} {} {}", row, col, val).unwrap();
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &n in &[1_000usize, 10_000] {
        let text = random_mtx(n, 8, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| {
                let store: TripleStore = black_box(text.as_str()).parse().unwrap();
                black_box(store)
            })
        });
    }

    group.finish();
}

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");
    let config = LayoutConfig::default();

    for &n in &[1_000usize, 10_000] {
        let store: TripleStore = random_mtx(n, 8, 7).parse().unwrap();

        group.bench_with_input(BenchmarkId::new("ellpack_f64", n), &store, |b, store| {
            b.iter(|| black_box(store.to_ellpack::<f64>()))
        });
        group.bench_with_input(BenchmarkId::new("soa_ellpack_f32", n), &store, |b, store| {
            b.iter(|| black_box(store.to_soa_ellpack::<f32>()))
        });
        group.bench_with_input(BenchmarkId::new("padded_i32", n), &store, |b, store| {
            b.iter(|| black_box(store.to_padded_soa_ellpack_with(0i32, &config).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_layouts);
criterion_main!(benches);
