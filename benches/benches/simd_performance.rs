use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bm3d_core::consts::GROUP_VOLUME;
use bm3d_transform::{dct3d_forward, dct3d_forward_auto, dct3d_inverse, dct3d_inverse_auto, SimdLevel};

fn sample_cube() -> [f32; GROUP_VOLUME] {
    core::array::from_fn(|i| (i as f32 % 97.0) * 0.2)
}

/// Benchmark the 3D DCT against the capability-dispatched path.
fn benchmark_dct3d_simd(c: &mut Criterion) {
    let mut group = c.benchmark_group("dct3d");
    let cube = sample_cube();

    group.bench_function("scalar_forward", |b| {
        b.iter(|| {
            let mut c = cube;
            dct3d_forward(black_box(&mut c));
        });
    });

    group.bench_function("auto_forward", |b| {
        b.iter(|| {
            let mut c = cube;
            dct3d_forward_auto(black_box(&mut c));
        });
    });

    group.bench_function("scalar_inverse", |b| {
        let mut transformed = cube;
        dct3d_forward(&mut transformed);
        b.iter(|| {
            let mut c = transformed;
            dct3d_inverse(black_box(&mut c));
        });
    });

    group.bench_function("auto_inverse", |b| {
        let mut transformed = cube;
        dct3d_forward(&mut transformed);
        b.iter(|| {
            let mut c = transformed;
            dct3d_inverse_auto(black_box(&mut c));
        });
    });

    group.finish();
}

/// Benchmark group-cube throughput across a batch of cubes, as the driver
/// processes one per anchor.
fn benchmark_dct3d_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("dct3d_throughput");

    for num_groups in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements((*num_groups * GROUP_VOLUME) as u64));
        let cube = sample_cube();

        group.bench_with_input(
            BenchmarkId::new("scalar", num_groups),
            num_groups,
            |b, &num_groups| {
                b.iter(|| {
                    for _ in 0..num_groups {
                        let mut c = cube;
                        dct3d_forward(black_box(&mut c));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("auto", num_groups),
            num_groups,
            |b, &num_groups| {
                b.iter(|| {
                    for _ in 0..num_groups {
                        let mut c = cube;
                        dct3d_forward_auto(black_box(&mut c));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Print the detected SIMD level once so `cargo bench` output records which
/// dispatch path the other benchmarks actually took.
fn print_simd_info(c: &mut Criterion) {
    let level = SimdLevel::detect();
    println!("\n=== SIMD Capabilities ===");
    println!("Detected SIMD level: {}", level.name());
    println!("=========================\n");

    c.bench_function("simd_detection", |b| {
        b.iter(|| SimdLevel::detect());
    });
}

criterion_group!(
    benches,
    print_simd_info,
    benchmark_dct3d_simd,
    benchmark_dct3d_throughput
);
criterion_main!(benches);
