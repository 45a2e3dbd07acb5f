//! Criterion micro-benchmarks for assignment and propagation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use i3d::engine::Engine;
use i3d::mesh::{candidate_point_counts, divisors};
use i3d_bench::reference_set;

fn bench_set_triad(c: &mut Criterion) {
    let mut params = reference_set();
    let mut flip = false;
    c.bench_function("set_domain_length", |b| {
        b.iter(|| {
            flip = !flip;
            let xlx = if flip { 12.0 } else { 24.0 };
            params.set("xlx", black_box(xlx)).unwrap();
        });
    });
}

fn bench_set_periodicity(c: &mut Criterion) {
    // Each flip cascades through boundary coupling, periodicity, the triad
    // and the footprint.
    let mut params = reference_set();
    let mut periodic = true;
    c.bench_function("set_periodicity_flip", |b| {
        b.iter(|| {
            periodic = !periodic;
            let code = if periodic { 0 } else { 2 };
            params.set("nclx1", black_box(code)).unwrap();
        });
    });
}

fn bench_set_rejected(c: &mut Criterion) {
    let mut params = reference_set();
    c.bench_function("set_rejected_point_count", |b| {
        b.iter(|| params.set("ny", black_box(128)).unwrap_err());
    });
}

fn bench_initial_state(c: &mut Criterion) {
    let engine = Engine::default();
    c.bench_function("initial_state", |b| {
        b.iter(|| black_box(&engine).initial_state());
    });
}

fn bench_mesh_tables(c: &mut Criterion) {
    c.bench_function("candidate_point_counts_cached", |b| {
        b.iter(|| candidate_point_counts(black_box(false)).len());
    });
    c.bench_function("divisors_720720", |b| {
        b.iter(|| divisors(black_box(720_720)).count());
    });
}

criterion_group!(
    benches,
    bench_set_triad,
    bench_set_periodicity,
    bench_set_rejected,
    bench_initial_state,
    bench_mesh_tables
);
criterion_main!(benches);
