// ============================================================================
// Sigfloat Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - annotating values with a precision
// 2. Arithmetic - additive and multiplicative propagation
// 3. Formatting - rounding and notation selection
// 4. Wrapped math - precision carry through libm functions
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sigfloat::math;
use sigfloat::prelude::*;
use std::f64::consts::PI;

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("exact", |b| {
        b.iter(|| black_box(SigFloat::new(black_box(123.456))));
    });

    group.bench_function("with_sigfigs", |b| {
        b.iter(|| black_box(SigFloat::with_sigfigs(black_box(123.456), 4).unwrap()));
    });

    group.bench_function("with_lsd", |b| {
        b.iter(|| black_box(SigFloat::with_lsd(black_box(123.456), -2)));
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// Additive (lsd) vs multiplicative (sigfigs) propagation cost
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = SigFloat::with_sigfigs(123.456, 4).unwrap();
    let b = SigFloat::with_sigfigs(0.9876, 3).unwrap();

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)));
    });

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a).checked_mul(black_box(b)).unwrap()));
    });

    group.bench_function("pow", |bench| {
        bench.iter(|| black_box(black_box(a).checked_pow(black_box(2.0)).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    for sigfigs in [1u32, 4, 12].iter() {
        let value = SigFloat::with_sigfigs(PI * 1e5, *sigfigs).unwrap();
        group.bench_with_input(
            BenchmarkId::new("scientific", sigfigs),
            &value,
            |bench, value| {
                bench.iter(|| black_box(value.to_string()));
            },
        );

        let value = SigFloat::with_sigfigs(PI, *sigfigs).unwrap();
        group.bench_with_input(
            BenchmarkId::new("standard", sigfigs),
            &value,
            |bench, value| {
                bench.iter(|| black_box(value.to_string()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Wrapped Math Benchmarks
// ============================================================================

fn benchmark_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("math");

    let angle = SigFloat::with_sigfigs(PI / 4.0, 3).unwrap();

    group.bench_function("sin_tracked", |bench| {
        bench.iter(|| black_box(math::sin(black_box(angle))));
    });

    group.bench_function("sin_plain", |bench| {
        bench.iter(|| black_box(math::sin(black_box(PI / 4.0))));
    });

    group.bench_function("atan2_tracked", |bench| {
        bench.iter(|| black_box(math::atan2(black_box(angle), black_box(2.0)).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_arithmetic,
    benchmark_formatting,
    benchmark_math
);
criterion_main!(benches);
