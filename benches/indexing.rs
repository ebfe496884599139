//! Benchmarks for tensor construction and element addressing.
//!
//! Run with:
//! ```bash
//! cargo bench --bench indexing
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tensr::{Index, Shape, Tensor};

/// Benchmark zeros creation for various sizes
fn bench_zeros(c: &mut Criterion) {
    let mut group = c.benchmark_group("zeros");

    let sizes = vec![
        ("small_2d", vec![100, 100]),
        ("medium_2d", vec![1000, 1000]),
        ("small_3d", vec![50, 50, 50]),
        ("small_4d", vec![10, 20, 30, 40]),
    ];

    for (name, shape) in sizes {
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &shape, |b, shape| {
            b.iter(|| {
                let tensor = Tensor::<f64>::zeros(black_box(shape)).unwrap();
                black_box(tensor);
            });
        });
    }

    group.finish();
}

/// Benchmark from_vec creation (shape inference plus buffer move)
fn bench_from_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_vec");

    for total in [10_000usize, 1_000_000] {
        let data: Vec<f64> = (0..total).map(|x| x as f64).collect();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(total), &data, |b, data| {
            b.iter(|| {
                let tensor = Tensor::from_vec(black_box(data.clone())).unwrap();
                black_box(tensor);
            });
        });
    }

    group.finish();
}

/// Benchmark checked intake of integer literals
fn bench_from_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_ints");

    for total in [10_000usize, 100_000] {
        let values: Vec<i64> = (0..total).map(|x| (x % 127) as i64).collect();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(total), &values, |b, values| {
            b.iter(|| {
                let tensor = tensr::TensorI32::from_ints(black_box(values)).unwrap();
                black_box(tensor);
            });
        });
    }

    group.finish();
}

/// Benchmark flat offset computation alone
fn bench_offset_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset_of");

    let shape_2d = Shape::new(&[1000, 1000]).unwrap();
    let shape_3d = Shape::new(&[100, 100, 100]).unwrap();
    let shape_4d = Shape::new(&[50, 50, 50, 50]).unwrap();

    let idx_2d = Index::from([500, 500]);
    let idx_3d = Index::from([50, 50, 50]);
    let idx_4d = Index::from([25, 25, 25, 25]);

    group.bench_function("2d", |b| {
        b.iter(|| black_box(shape_2d.offset_of(black_box(&idx_2d)).unwrap()));
    });
    group.bench_function("3d", |b| {
        b.iter(|| black_box(shape_3d.offset_of(black_box(&idx_3d)).unwrap()));
    });
    group.bench_function("4d", |b| {
        b.iter(|| black_box(shape_4d.offset_of(black_box(&idx_4d)).unwrap()));
    });

    group.finish();
}

/// Benchmark element access (indexing)
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");

    let tensor_2d = Tensor::<f64>::ones(&[1000, 1000]).unwrap();
    let tensor_3d = Tensor::<f64>::ones(&[100, 100, 100]).unwrap();
    let tensor_4d = Tensor::<f64>::ones(&[50, 50, 50, 50]).unwrap();

    let idx_2d = Index::from([500, 500]);
    let idx_3d = Index::from([50, 50, 50]);
    let idx_4d = Index::from([25, 25, 25, 25]);

    group.bench_function("2d_read", |b| {
        b.iter(|| {
            let val = tensor_2d.get(black_box(&idx_2d)).unwrap();
            black_box(val);
        });
    });

    group.bench_function("3d_read", |b| {
        b.iter(|| {
            let val = tensor_3d.get(black_box(&idx_3d)).unwrap();
            black_box(val);
        });
    });

    group.bench_function("4d_read", |b| {
        b.iter(|| {
            let val = tensor_4d.get(black_box(&idx_4d)).unwrap();
            black_box(val);
        });
    });

    let mut tensor_2d_mut = Tensor::<f64>::ones(&[1000, 1000]).unwrap();

    group.bench_function("2d_write", |b| {
        b.iter(|| {
            tensor_2d_mut
                .set(black_box(&idx_2d), black_box(42.0))
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark a full coordinate sweep against flat iteration
fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_sweep");

    let tensor = Tensor::<f64>::ones(&[100, 100]).unwrap();
    group.throughput(Throughput::Elements(tensor.numel() as u64));

    group.bench_function("by_index", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..100 {
                for j in 0..100 {
                    acc += tensor.get(&Index::from([i, j])).unwrap();
                }
            }
            black_box(acc);
        });
    });

    group.bench_function("by_iter", |b| {
        b.iter(|| {
            let acc: f64 = tensor.iter().sum();
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_zeros,
    bench_from_vec,
    bench_from_ints,
    bench_offset_of,
    bench_indexing,
    bench_full_sweep
);

criterion_main!(benches);
