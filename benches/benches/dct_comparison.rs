//! Benchmark comparing the naive O(N^4) 8x8 DCT against the separable
//! row/column implementation used by the driver.
//!
//! Run with: cargo bench --bench dct_comparison

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bm3d_core::consts::{BLOCK_AREA, GROUP_VOLUME};
use bm3d_transform::dct::{dct8x8_forward_naive, dct8x8_inverse_naive};
use bm3d_transform::{dct3d_forward, dct3d_inverse, dct8x8_forward, dct8x8_inverse};

fn bench_dct_8x8_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8 Comparison");
    let input: [f32; BLOCK_AREA] = core::array::from_fn(|i| (i as f32) / 64.0);

    group.bench_function("naive_forward", |b| {
        let mut output = [0.0f32; BLOCK_AREA];
        b.iter(|| {
            dct8x8_forward_naive(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable_forward", |b| {
        b.iter(|| {
            let mut block = input;
            dct8x8_forward(black_box(&mut block));
        });
    });

    group.bench_function("naive_inverse", |b| {
        let mut output = [0.0f32; BLOCK_AREA];
        b.iter(|| {
            dct8x8_inverse_naive(black_box(&input), black_box(&mut output));
        });
    });

    group.bench_function("separable_inverse", |b| {
        b.iter(|| {
            let mut block = input;
            dct8x8_inverse(black_box(&mut block));
        });
    });

    group.finish();
}

fn bench_dct3d_group_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 3D Group Cube");
    let cube: [f32; GROUP_VOLUME] = core::array::from_fn(|i| (i as f32 % 255.0) / 255.0);

    group.bench_function("forward", |b| {
        b.iter(|| {
            let mut c = cube;
            dct3d_forward(black_box(&mut c));
        });
    });

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let mut c = cube;
            dct3d_forward(black_box(&mut c));
            dct3d_inverse(black_box(&mut c));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dct_8x8_comparison, bench_dct3d_group_cube);
criterion_main!(benches);
