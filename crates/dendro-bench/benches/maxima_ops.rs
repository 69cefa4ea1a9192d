//! Criterion micro-benchmarks for local-maxima detection.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dendro_bench::{reference_cube, reference_image};
use dendro_kernels::{local_maxima_2d, local_maxima_3d, MaximaWindow};
use dendro_space::Lattice;

/// Benchmark: maxima over the 256x256 reference image at several radii.
fn bench_maxima_image(c: &mut Criterion) {
    let profile = reference_image(42);
    let mut out = vec![0u8; profile.extent.cell_count()];

    let mut group = c.benchmark_group("maxima_image_256");
    for radius in [1usize, 2, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| {
                local_maxima_2d(&profile.grid, &profile.extent, r, &mut out).unwrap();
                std::hint::black_box(&out);
            });
        });
    }
    group.finish();
}

/// Benchmark: maxima over the 64x64x32 reference cube, with and without a
/// wider spectral window.
fn bench_maxima_cube(c: &mut Criterion) {
    let profile = reference_cube(42);
    let mut out = vec![0u8; profile.extent.cell_count()];

    let mut group = c.benchmark_group("maxima_cube_64x64x32");
    for window in [MaximaWindow::isotropic(1), MaximaWindow::new(1, 3)] {
        let id = format!("xy{}_z{}", window.radius_xy, window.radius_z);
        group.bench_with_input(BenchmarkId::from_parameter(id), &window, |b, &w| {
            b.iter(|| {
                local_maxima_3d(&profile.grid, &profile.extent, w, &mut out).unwrap();
                std::hint::black_box(&out);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_maxima_image, bench_maxima_cube);
criterion_main!(benches);
