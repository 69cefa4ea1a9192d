//! Reusable grids for kernel tests and benchmarks.
//!
//! - [`plateau_block_5x5`]: the flat-topped block used by the fill and
//!   maxima scenarios.
//! - [`gaussian_peaks_2d`] / [`gaussian_peaks_3d`]: smooth fields with
//!   isolated, well-separated maxima.
//! - [`random_grid`] / [`quantized_grid`]: deterministic noise from a
//!   `u64` seed. The quantised variant has many ties, which is what
//!   exercises strictness.

use dendro_space::{Cell2, Cell3, Extent2, Extent3, Lattice};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// 5×5 zeros with a 2×2 block of `3.0` at x, y in `1..=2`.
///
/// Returns `(grid, xsize, ysize)`.
pub fn plateau_block_5x5() -> (Vec<f64>, usize, usize) {
    let mut grid = vec![0.0; 25];
    for y in 1..=2 {
        for x in 1..=2 {
            grid[x + y * 5] = 3.0;
        }
    }
    (grid, 5, 5)
}

/// A Gaussian bump: centre cell, peak height and width in cells.
#[derive(Clone, Copy, Debug)]
pub struct Peak<C> {
    pub center: C,
    pub height: f64,
    pub sigma: f64,
}

fn gaussian(d2: f64, sigma: f64) -> f64 {
    (-d2 / (2.0 * sigma * sigma)).exp()
}

/// Sum of Gaussian bumps over a plane.
pub fn gaussian_peaks_2d(extent: &Extent2, peaks: &[Peak<Cell2>]) -> Vec<f64> {
    extent
        .cells()
        .map(|cell| {
            peaks
                .iter()
                .map(|p| {
                    let dx = cell.x as f64 - p.center.x as f64;
                    let dy = cell.y as f64 - p.center.y as f64;
                    p.height * gaussian(dx * dx + dy * dy, p.sigma)
                })
                .sum()
        })
        .collect()
}

/// Sum of Gaussian bumps over a volume.
pub fn gaussian_peaks_3d(extent: &Extent3, peaks: &[Peak<Cell3>]) -> Vec<f64> {
    extent
        .cells()
        .map(|cell| {
            peaks
                .iter()
                .map(|p| {
                    let dx = cell.x as f64 - p.center.x as f64;
                    let dy = cell.y as f64 - p.center.y as f64;
                    let dz = cell.z as f64 - p.center.z as f64;
                    p.height * gaussian(dx * dx + dy * dy + dz * dz, p.sigma)
                })
                .sum()
        })
        .collect()
}

/// Peaks scattered at random over a plane, away from the ring.
pub fn scattered_peaks_2d(extent: &Extent2, count: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let peaks: Vec<Peak<Cell2>> = (0..count)
        .map(|_| Peak {
            center: Cell2::new(
                rng.random_range(0..extent.xsize()),
                rng.random_range(0..extent.ysize()),
            ),
            height: rng.random_range(1.0..10.0),
            sigma: rng.random_range(1.0..4.0),
        })
        .collect();
    gaussian_peaks_2d(extent, &peaks)
}

/// Uniform noise in `[0, 1)`, one value per cell.
pub fn random_grid(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<f64>()).collect()
}

/// Integer-valued noise in `0..levels`, one value per cell.
///
/// `levels` of 0 is treated as 1 (an all-zero grid).
pub fn quantized_grid(len: usize, levels: u32, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let levels = levels.max(1);
    (0..len)
        .map(|_| f64::from(rng.random_range(0..levels)))
        .collect()
}

/// Constant field over any lattice.
pub fn constant<L: Lattice>(lattice: &L, value: f64) -> Vec<f64> {
    vec![value; lattice.cell_count()]
}
