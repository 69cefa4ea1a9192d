//! Brute-force reference implementations.
//!
//! Written with plain index arithmetic and no shared code from the
//! kernels, so a bug in the lattice or window types cannot hide in both.

use dendro_core::Connectivity;
use std::collections::VecDeque;

fn span(center: usize, radius: usize, len: usize) -> std::ops::RangeInclusive<usize> {
    center.saturating_sub(radius)..=(center + radius).min(len - 1)
}

/// Strict local maxima of a plane, by exhaustive window scan.
pub fn local_maxima_2d(grid: &[f64], xsize: usize, ysize: usize, radius: usize) -> Vec<u8> {
    let mut out = vec![0u8; xsize * ysize];
    for y in 0..ysize {
        for x in 0..xsize {
            let v = grid[x + y * xsize];
            let mut is_max = true;
            for wy in span(y, radius, ysize) {
                for wx in span(x, radius, xsize) {
                    if (wx, wy) != (x, y) && !(v > grid[wx + wy * xsize]) {
                        is_max = false;
                    }
                }
            }
            out[x + y * xsize] = u8::from(is_max);
        }
    }
    out
}

/// Strict local maxima of a volume, by exhaustive window scan.
pub fn local_maxima_3d(
    grid: &[f64],
    xsize: usize,
    ysize: usize,
    zsize: usize,
    radius_xy: usize,
    radius_z: usize,
) -> Vec<u8> {
    let plane = xsize * ysize;
    let mut out = vec![0u8; plane * zsize];
    for z in 0..zsize {
        for y in 0..ysize {
            for x in 0..xsize {
                let off = x + y * xsize + z * plane;
                let v = grid[off];
                let mut is_max = true;
                for wz in span(z, radius_z, zsize) {
                    for wy in span(y, radius_xy, ysize) {
                        for wx in span(x, radius_xy, xsize) {
                            let w = wx + wy * xsize + wz * plane;
                            if w != off && !(v > grid[w]) {
                                is_max = false;
                            }
                        }
                    }
                }
                out[off] = u8::from(is_max);
            }
        }
    }
    out
}

fn adjacent(d: &[isize], connectivity: Connectivity) -> bool {
    let moved = d.iter().filter(|&&c| c != 0).count();
    match connectivity {
        Connectivity::Direct => moved == 1,
        Connectivity::Full => moved >= 1,
    }
}

/// Breadth-first reference for the fill: the 0/1 mask of the connected
/// open-interior component above `threshold` containing `seed`.
pub fn component_2d(
    grid: &[f64],
    xsize: usize,
    ysize: usize,
    seed: (usize, usize),
    connectivity: Connectivity,
    threshold: f64,
) -> Vec<u8> {
    let inside = |x: usize, y: usize| x >= 1 && y >= 1 && x + 1 < xsize && y + 1 < ysize;
    let accept = |x: usize, y: usize| inside(x, y) && grid[x + y * xsize] > threshold;

    let mut out = vec![0u8; xsize * ysize];
    if !accept(seed.0, seed.1) {
        return out;
    }
    let mut queue = VecDeque::from([seed]);
    out[seed.0 + seed.1 * xsize] = 1;
    while let Some((x, y)) = queue.pop_front() {
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if !adjacent(&[dx, dy], connectivity) {
                    continue;
                }
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if nx < xsize && ny < ysize && out[nx + ny * xsize] == 0 && accept(nx, ny) {
                    out[nx + ny * xsize] = 1;
                    queue.push_back((nx, ny));
                }
            }
        }
    }
    out
}

/// Volume counterpart of [`component_2d`].
pub fn component_3d(
    grid: &[f64],
    (xsize, ysize, zsize): (usize, usize, usize),
    seed: (usize, usize, usize),
    connectivity: Connectivity,
    threshold: f64,
) -> Vec<u8> {
    let plane = xsize * ysize;
    let inside = |x: usize, y: usize, z: usize| {
        x >= 1 && y >= 1 && z >= 1 && x + 1 < xsize && y + 1 < ysize && z + 1 < zsize
    };
    let accept = |x, y, z| inside(x, y, z) && grid[x + y * xsize + z * plane] > threshold;

    let mut out = vec![0u8; plane * zsize];
    if !accept(seed.0, seed.1, seed.2) {
        return out;
    }
    let mut queue = VecDeque::from([seed]);
    out[seed.0 + seed.1 * xsize + seed.2 * plane] = 1;
    while let Some((x, y, z)) = queue.pop_front() {
        for dz in -1isize..=1 {
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    if !adjacent(&[dx, dy, dz], connectivity) {
                        continue;
                    }
                    let (Some(nx), Some(ny), Some(nz)) = (
                        x.checked_add_signed(dx),
                        y.checked_add_signed(dy),
                        z.checked_add_signed(dz),
                    ) else {
                        continue;
                    };
                    if nx >= xsize || ny >= ysize || nz >= zsize {
                        continue;
                    }
                    let off = nx + ny * xsize + nz * plane;
                    if out[off] == 0 && accept(nx, ny, nz) {
                        out[off] = 1;
                        queue.push_back((nx, ny, nz));
                    }
                }
            }
        }
    }
    out
}
