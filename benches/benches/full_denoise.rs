//! End-to-end benchmark: the full spatial BM3D pipeline (block matching,
//! group shrinkage, aggregation) over a noisy plane.
//!
//! Run with: cargo bench --bench full_denoise

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bm3d::{denoise_spatial, Bm3dParams, PlaneView};

fn noisy_plane(width: usize, height: usize) -> Vec<f32> {
    let mut state: u32 = 0x9e3779b9;
    (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            0.5 + ((state >> 16) as i32 % 21 - 10) as f32 * 0.01
        })
        .collect()
}

fn benchmark_spatial_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("denoise_spatial");

    for &size in &[32usize, 64, 128] {
        let data = noisy_plane(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("hard_threshold_only", size), &size, |b, &size| {
            let params = Bm3dParams::builder()
                .sigma_luma(0.05)
                .final_pass(false)
                .build()
                .unwrap();
            b.iter(|| {
                let view = PlaneView::new(&data, size, size, size).unwrap();
                let out = denoise_spatial(black_box(&[view]), black_box(&params)).unwrap();
                black_box(out);
            });
        });

        group.bench_with_input(BenchmarkId::new("with_wiener_pass", size), &size, |b, &size| {
            let params = Bm3dParams::builder()
                .sigma_luma(0.05)
                .final_pass(true)
                .build()
                .unwrap();
            b.iter(|| {
                let view = PlaneView::new(&data, size, size, size).unwrap();
                let out = denoise_spatial(black_box(&[view]), black_box(&params)).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

fn benchmark_block_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("denoise_block_step");
    let size = 64;
    let data = noisy_plane(size, size);

    for &step in &[2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("step", step), &step, |b, &step| {
            let params = Bm3dParams::builder()
                .sigma_luma(0.05)
                .block_step(step)
                .final_pass(false)
                .build()
                .unwrap();
            b.iter(|| {
                let view = PlaneView::new(&data, size, size, size).unwrap();
                let out = denoise_spatial(black_box(&[view]), black_box(&params)).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_spatial_sizes, benchmark_block_step);
criterion_main!(benches);
