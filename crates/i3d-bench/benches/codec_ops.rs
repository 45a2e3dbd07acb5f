//! Criterion micro-benchmarks for namelist parsing and serialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use i3d::namelist::{parse_i3d, Format};
use i3d::ParameterSet;
use i3d_bench::{reference_set, reference_text};
use i3d_test_utils::{CHANNEL_PRM, LOCK_EXCHANGE_I3D};

fn bench_parse_i3d(c: &mut Criterion) {
    let text = reference_text();
    c.bench_function("parse_i3d_reference", |b| {
        b.iter(|| parse_i3d(black_box(&text)).unwrap());
    });
    c.bench_function("parse_i3d_commented", |b| {
        b.iter(|| Format::Primary.parse(black_box(LOCK_EXCHANGE_I3D)).unwrap());
    });
}

fn bench_parse_prm(c: &mut Criterion) {
    c.bench_function("parse_prm_channel", |b| {
        b.iter(|| Format::Legacy.parse(black_box(CHANNEL_PRM)).unwrap());
    });
}

fn bench_serialize(c: &mut Criterion) {
    let params = reference_set();
    c.bench_function("to_i3d_reference", |b| {
        b.iter(|| black_box(&params).to_i3d());
    });
}

fn bench_load(c: &mut Criterion) {
    let text = reference_text();
    c.bench_function("load_str_reference", |b| {
        b.iter(|| {
            let mut params = ParameterSet::new();
            params.load_str(black_box(&text), Format::Primary).unwrap();
            params
        });
    });
}

criterion_group!(
    benches,
    bench_parse_i3d,
    bench_parse_prm,
    bench_serialize,
    bench_load
);
criterion_main!(benches);
