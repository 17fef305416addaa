#[macro_use]
extern crate criterion;

extern crate bls12_381_sswu;
use bls12_381_sswu::*;

use criterion::{black_box, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let u = Fp::from_bytes(&hex_literal::hex!(
        "0ba14bd907ad64a016293ee7c2d276b8eae71f25a4b941eece7b0d89f17f75cb3ae5438a614fb61d6835ad59f29c564f"
    ))
    .unwrap();
    let bytes = u.to_bytes();
    let p = map_to_curve_simple_swu(&u);

    c.bench_function("map_to_curve", move |b| {
        b.iter(|| map_to_curve(black_box(&u)))
    });
    c.bench_function("map_to_curve_bytes", move |b| {
        b.iter(|| map_to_curve_bytes(black_box(&bytes[..])))
    });
    c.bench_function("simple SWU", move |b| {
        b.iter(|| map_to_curve_simple_swu(black_box(&u)))
    });
    c.bench_function("11-isogeny", move |b| {
        b.iter(|| ISO11.evaluate(black_box(&p)))
    });
    c.bench_function("Fp invert", move |b| b.iter(|| black_box(u).invert()));
    c.bench_function("Fp sqrt", move |b| b.iter(|| black_box(u).sqrt()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
