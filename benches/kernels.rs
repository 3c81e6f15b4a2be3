//! Benchmarks for the numeric kernels and the Gaussian fill.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use medir::prelude::*;

fn filled_pair(n: usize) -> (Vector<f64>, Vector<f64>) {
    let fill = BoxMullerFill;
    let mut x = Vector::try_zeros(n).unwrap();
    let mut y = Vector::try_zeros(n).unwrap();
    fill.fill_gaussian(x.as_mut_slice(), 0.0, 3.0, 1337).unwrap();
    fill.fill_gaussian(y.as_mut_slice(), 0.0, 3.0, 1338).unwrap();
    (x, y)
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    for size in [1_000, 100_000, 1_000_000].iter() {
        let (x, y) = filled_pair(*size);
        let scalar = ScalarBackend;
        let parallel = ParallelBackend;

        group.bench_with_input(BenchmarkId::new("scalar", size), size, |b, _| {
            b.iter(|| scalar.dot(black_box(x.as_slice()), black_box(y.as_slice())).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| parallel.dot(black_box(x.as_slice()), black_box(y.as_slice())).unwrap());
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [1_000, 100_000, 1_000_000].iter() {
        let (x, y) = filled_pair(*size);
        let mut out = Vector::try_zeros(*size).unwrap();
        let scalar = ScalarBackend;
        let parallel = ParallelBackend;

        group.bench_with_input(BenchmarkId::new("scalar", size), size, |b, _| {
            b.iter(|| {
                scalar
                    .add(black_box(x.as_slice()), black_box(y.as_slice()), out.as_mut_slice())
                    .unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                parallel
                    .add(black_box(x.as_slice()), black_box(y.as_slice()), out.as_mut_slice())
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_gemv(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemv");
    let fill = BoxMullerFill;

    for (m, k) in [(100, 1_000), (500, 5_000)].iter() {
        let mut a = Matrix::try_zeros(*m, *k).unwrap();
        let mut b_vec = Vector::try_zeros(*k).unwrap();
        fill.fill_gaussian(a.as_mut_slice(), 0.0, 3.0, 1337).unwrap();
        fill.fill_gaussian(b_vec.as_mut_slice(), 0.0, 3.0, 1338).unwrap();
        let scalar = ScalarBackend;
        let parallel = ParallelBackend;

        group.bench_with_input(
            BenchmarkId::new("scalar", format!("{m}x{k}")),
            &(m, k),
            |bench, _| {
                bench.iter(|| {
                    let mut c_vec = vec![2.0; *m];
                    scalar
                        .gemv(black_box(&a), black_box(b_vec.as_slice()), 2.0, 1.0, &mut c_vec)
                        .unwrap()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{m}x{k}")),
            &(m, k),
            |bench, _| {
                bench.iter(|| {
                    let mut c_vec = vec![2.0; *m];
                    parallel
                        .gemv(black_box(&a), black_box(b_vec.as_slice()), 2.0, 1.0, &mut c_vec)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_gaussian");
    let fill = BoxMullerFill;

    for size in [10_000, 1_000_000].iter() {
        let mut buf = Vector::try_zeros(*size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| fill.fill_gaussian(buf.as_mut_slice(), 0.0, 3.0, black_box(1337)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dot, bench_add, bench_gemv, bench_fill);
criterion_main!(benches);
