//! Benchmark grid profiles for the Dendro kernels.
//!
//! - [`reference_image`]: 256x256 plane (64K cells) of scattered peaks
//! - [`reference_cube`]: 64x64x32 spectral cube (128K cells)
//! - [`stress_image`]: 1024x1024 plane (~1M cells) for fill stack growth
//!
//! Fields are smooth sums of Gaussian sources over a small noise floor, so
//! maxima are sparse and fills grow large connected regions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dendro_space::{Cell2, Cell3, Extent2, Extent3, Lattice};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A benchmark grid: shape, values and a seed cell inside the brightest
/// source.
#[derive(Clone, Debug)]
pub struct Profile<E: Lattice> {
    pub extent: E,
    pub grid: Vec<f64>,
    pub seed: E::Cell,
}

const NOISE_FLOOR: f64 = 0.01;

fn source(d2: f64, sigma: f64) -> f64 {
    (-d2 / (2.0 * sigma * sigma)).exp()
}

/// Plane of `sources` Gaussian sources over uniform noise.
pub fn image_profile(xsize: usize, ysize: usize, sources: usize, seed: u64) -> Profile<Extent2> {
    let extent = Extent2::new(xsize, ysize).expect("profile dimensions are non-zero");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let peaks: Vec<(f64, f64, f64, f64)> = (0..sources)
        .map(|_| {
            (
                rng.random_range(1.0..(xsize as f64 - 1.0).max(1.5)),
                rng.random_range(1.0..(ysize as f64 - 1.0).max(1.5)),
                rng.random_range(1.0..10.0),
                rng.random_range(2.0..12.0),
            )
        })
        .collect();

    let grid = extent
        .cells()
        .map(|cell| {
            let signal: f64 = peaks
                .iter()
                .map(|&(px, py, height, sigma)| {
                    let dx = cell.x as f64 - px;
                    let dy = cell.y as f64 - py;
                    height * source(dx * dx + dy * dy, sigma)
                })
                .sum();
            signal + NOISE_FLOOR * rng.random::<f64>()
        })
        .collect::<Vec<f64>>();

    let seed = brightest_interior(&extent, &grid).unwrap_or(Cell2::new(xsize / 2, ysize / 2));
    Profile { extent, grid, seed }
}

/// Cube of `sources` sources, elongated along the spectral axis.
pub fn cube_profile(
    (xsize, ysize, zsize): (usize, usize, usize),
    sources: usize,
    seed: u64,
) -> Profile<Extent3> {
    let extent = Extent3::new(xsize, ysize, zsize).expect("profile dimensions are non-zero");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let peaks: Vec<[f64; 5]> = (0..sources)
        .map(|_| {
            [
                rng.random_range(0.0..xsize as f64),
                rng.random_range(0.0..ysize as f64),
                rng.random_range(0.0..zsize as f64),
                rng.random_range(1.0..10.0),
                rng.random_range(1.5..6.0),
            ]
        })
        .collect();

    let grid = extent
        .cells()
        .map(|cell| {
            let signal: f64 = peaks
                .iter()
                .map(|&[px, py, pz, height, sigma]| {
                    let dx = cell.x as f64 - px;
                    let dy = cell.y as f64 - py;
                    let dz = (cell.z as f64 - pz) * 0.5;
                    height * source(dx * dx + dy * dy + dz * dz, sigma)
                })
                .sum();
            signal + NOISE_FLOOR * rng.random::<f64>()
        })
        .collect::<Vec<f64>>();

    let seed = brightest_interior(&extent, &grid)
        .unwrap_or(Cell3::new(xsize / 2, ysize / 2, zsize / 2));
    Profile { extent, grid, seed }
}

/// 256x256 plane with 24 sources.
pub fn reference_image(seed: u64) -> Profile<Extent2> {
    image_profile(256, 256, 24, seed)
}

/// 64x64x32 cube with 12 sources.
pub fn reference_cube(seed: u64) -> Profile<Extent3> {
    cube_profile((64, 64, 32), 12, seed)
}

/// 1024x1024 plane with 64 sources.
pub fn stress_image(seed: u64) -> Profile<Extent2> {
    image_profile(1024, 1024, 64, seed)
}

/// Interior cell holding the largest value.
pub fn brightest_interior<L: Lattice>(lattice: &L, grid: &[f64]) -> Option<L::Cell> {
    (0..lattice.cell_count())
        .filter_map(|off| lattice.cell_at(off))
        .filter(|&cell| lattice.is_interior(cell))
        .max_by(|&a, &b| grid[lattice.offset(a)].total_cmp(&grid[lattice.offset(b)]))
}
