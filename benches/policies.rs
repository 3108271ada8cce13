//! Policy × size grids for every workload group
//!
//! Run with: cargo bench --bench policies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parbench::generators;
use parbench::workloads::{counting, dot, sort_points, trig};
use parbench::ExecutionPolicy;
use std::f64::consts::FRAC_PI_2;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");

    for size in SIZES {
        let mut input = vec![0.0f64; size];
        generators::fill_uniform(&mut input, 0.0..FRAC_PI_2);
        let mut out = input.clone();

        group.throughput(Throughput::Elements(size as u64));
        for policy in ExecutionPolicy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.label(), size), &size, |b, _| {
                b.iter(|| trig::execute(policy, black_box(&input), &mut out));
            });
        }
    }

    group.finish();
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");

    for size in SIZES {
        let mut a = vec![0.0f64; size];
        let mut b = vec![0.0f64; size];
        generators::par_fill_uniform(&mut a, 0.0..1.0);
        generators::par_fill_uniform(&mut b, 0.0..1.0);

        group.throughput(Throughput::Elements(size as u64));
        for policy in ExecutionPolicy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.label(), size), &size, |bench, _| {
                bench.iter(|| dot::execute(policy, black_box(&a), black_box(&b)));
            });
        }
    }

    group.finish();
}

fn bench_sort_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_points");

    for size in SIZES {
        let points = sort_points::random_points(size);
        let mut scratch = points.clone();

        group.throughput(Throughput::Elements(size as u64));
        for policy in ExecutionPolicy::COMPARISON {
            group.bench_with_input(BenchmarkId::new(policy.label(), size), &size, |b, _| {
                b.iter(|| sort_points::execute(policy, black_box(&points), &mut scratch));
            });
        }
    }

    group.finish();
}

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");

    for size in SIZES {
        let mut basket = counting::Basket::new(size);

        group.throughput(Throughput::Elements(size as u64));
        for policy in ExecutionPolicy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.label(), size), &size, |b, _| {
                b.iter(|| counting::execute(policy, &mut basket));
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_trig,
    bench_dot,
    bench_sort_points,
    bench_counting
);
criterion_main!(benches);
