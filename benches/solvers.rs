use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scalaroots::bracket::Bounds;
use scalaroots::config::SolverConfig;
use scalaroots::solver::{bisection, halley_method, newton_raphson, regula_falsi, secant};
use scalaroots::wrap::{RealFnAndFirst, RealFnAndFirstSecond};

// Wikipedia bisection cubic, root near 1.5213797
fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

fn cubic_df(x: f64) -> f64 {
    3.0 * x * x - 1.0
}

fn cubic_d2f(x: f64) -> f64 {
    6.0 * x
}

fn bench_solvers(c: &mut Criterion) {
    let cfg = SolverConfig::new(1e-10);
    let bounds = Bounds::new(1.0, 2.0);
    let f1 = RealFnAndFirst::new(&cubic, &cubic_df);
    let f2 = RealFnAndFirstSecond::new(&cubic, &cubic_df, &cubic_d2f);

    c.bench_function("bisection", |b| {
        b.iter(|| bisection(&cubic, black_box(&bounds), &cfg).expect("root"))
    });
    c.bench_function("regula_falsi", |b| {
        b.iter(|| regula_falsi(&cubic, black_box(&bounds), &cfg).expect("root"))
    });
    c.bench_function("newton_raphson", |b| {
        b.iter(|| newton_raphson(&f1, black_box(1.0), &cfg).expect("root"))
    });
    c.bench_function("halley_method", |b| {
        b.iter(|| halley_method(&f2, black_box(1.0), &cfg).expect("root"))
    });
    c.bench_function("secant", |b| {
        b.iter(|| secant(&cubic, black_box(1.0), black_box(2.0), &cfg).expect("root"))
    });
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
