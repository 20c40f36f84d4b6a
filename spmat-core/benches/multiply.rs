//! Sparse arithmetic benchmarks
//!
//! Compares the two multiplication strategies across matrix sizes and
//! densities, and measures elementwise addition and text parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spmat_core::{parse_matrix, HeaderPolicy, MultiplyStrategy, SparseMatrix};

fn random_matrix(rng: &mut StdRng, n: usize, density: f64) -> SparseMatrix {
    let nnz = ((n * n) as f64 * density) as usize;
    let triplets = (0..nnz).map(|_| {
        (
            rng.gen_range(0..n),
            rng.gen_range(0..n),
            rng.gen_range(-10.0..10.0),
        )
    });
    SparseMatrix::from_triplets(n, n, triplets.collect::<Vec<_>>()).unwrap()
}

// =============================================================================
// MULTIPLICATION
// =============================================================================

fn bench_multiply_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(42);

    for &(n, density) in &[(100, 0.01), (500, 0.005), (1000, 0.001)] {
        let a = random_matrix(&mut rng, n, density);
        let b = random_matrix(&mut rng, n, density);
        group.throughput(Throughput::Elements(a.nnz() as u64));

        for strategy in [MultiplyStrategy::RowIndexed, MultiplyStrategy::ColumnScan] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), n),
                &(&a, &b),
                |bench, (a, b)| {
                    bench.iter(|| black_box(a.multiply_with(b, strategy).unwrap()));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// ELEMENTWISE AND PARSING
// =============================================================================

fn bench_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_matrix(&mut rng, 1000, 0.01);
    let b = random_matrix(&mut rng, 1000, 0.01);

    c.bench_function("add/1000x1000", |bench| {
        bench.iter(|| black_box(a.add(&b).unwrap()));
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let text = random_matrix(&mut rng, 1000, 0.01).to_text();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("10k_entries", |bench| {
        bench.iter(|| black_box(parse_matrix::<f64>(&text, HeaderPolicy::Advisory).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_multiply_strategies, bench_add, bench_parse);
criterion_main!(benches);
