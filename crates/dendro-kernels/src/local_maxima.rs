//! Strict local-maxima detection over clamped rectangular windows.
//!
//! A cell is a local maximum when its value is strictly greater than the
//! value of every other cell in its window. Equal values disqualify, so a
//! plateau never yields a maximum. Windows are clamped to the grid rather
//! than wrapped, which means edge and corner cells compete against fewer
//! neighbours and can still be maxima. A window that collapses to the
//! cell itself (e.g. a 1×1 grid, or radius 0) has no competitors and the
//! cell is always marked.
//!
//! Every output byte is written exactly once, so the output buffer does
//! not need initialising.

use crate::config::MaximaWindow;
use crate::error::{check_len, KernelError};
use dendro_space::{Cell2, Cell3, Extent2, Extent3, Lattice};

/// Mark the strict local maxima of a plane.
///
/// Writes `1` to `out` for every maximum and `0` elsewhere.
///
/// # Errors
///
/// `KernelError::LengthMismatch` if `grid` or `out` does not hold one
/// element per cell.
pub fn local_maxima_2d(
    grid: &[f64],
    extent: &Extent2,
    radius: usize,
    out: &mut [u8],
) -> Result<(), KernelError> {
    check_len("grid", extent.cell_count(), grid.len())?;
    check_len("output", extent.cell_count(), out.len())?;
    for (off, cell) in extent.cells().enumerate() {
        let value = grid[off];
        let window = extent.window(cell, radius);
        let is_max = window
            .neighbours()
            .all(|nb| value > grid[extent.offset(nb)]);
        out[off] = u8::from(is_max);
    }
    Ok(())
}

/// Mark the strict local maxima of a volume.
///
/// `window.radius_xy` applies to x and y, `window.radius_z` to z.
///
/// # Errors
///
/// `KernelError::LengthMismatch` if `grid` or `out` does not hold one
/// element per cell.
pub fn local_maxima_3d(
    grid: &[f64],
    extent: &Extent3,
    window: MaximaWindow,
    out: &mut [u8],
) -> Result<(), KernelError> {
    check_len("grid", extent.cell_count(), grid.len())?;
    check_len("output", extent.cell_count(), out.len())?;
    for (off, cell) in extent.cells().enumerate() {
        let value = grid[off];
        let is_max = extent
            .window(cell, window.radius_xy, window.radius_z)
            .neighbours()
            .all(|nb| value > grid[extent.offset(nb)]);
        out[off] = u8::from(is_max);
    }
    Ok(())
}

/// Local-maxima mask of an `xsize × ysize` plane.
///
/// # Examples
///
/// ```
/// use dendro_kernels::detect_local_maxima_2d;
///
/// let grid = [0.0, 1.0, 0.0,
///             1.0, 5.0, 1.0,
///             0.0, 1.0, 0.0];
/// let mask = detect_local_maxima_2d(&grid, 1, 3, 3).unwrap();
/// assert_eq!(mask, vec![0, 0, 0, 0, 1, 0, 0, 0, 0]);
/// ```
///
/// # Errors
///
/// `KernelError::Space` for a zero-length axis,
/// `KernelError::LengthMismatch` if `grid` does not hold `xsize * ysize`
/// values.
pub fn detect_local_maxima_2d(
    grid: &[f64],
    radius: usize,
    xsize: usize,
    ysize: usize,
) -> Result<Vec<u8>, KernelError> {
    let extent = Extent2::new(xsize, ysize)?;
    let mut mask = vec![0u8; extent.cell_count()];
    local_maxima_2d(grid, &extent, radius, &mut mask)?;
    Ok(mask)
}

/// Local-maxima mask of an `xsize × ysize × zsize` volume.
///
/// # Errors
///
/// `KernelError::Space` for a zero-length axis,
/// `KernelError::LengthMismatch` if `grid` does not hold
/// `xsize * ysize * zsize` values.
pub fn detect_local_maxima_3d(
    grid: &[f64],
    radius_xy: usize,
    radius_z: usize,
    xsize: usize,
    ysize: usize,
    zsize: usize,
) -> Result<Vec<u8>, KernelError> {
    let extent = Extent3::new(xsize, ysize, zsize)?;
    let mut mask = vec![0u8; extent.cell_count()];
    local_maxima_3d(
        grid,
        &extent,
        MaximaWindow::new(radius_xy, radius_z),
        &mut mask,
    )?;
    Ok(mask)
}

/// Coordinates of the strict local maxima of a plane, in offset order.
pub fn local_maxima_cells_2d(
    grid: &[f64],
    extent: &Extent2,
    radius: usize,
) -> Result<Vec<Cell2>, KernelError> {
    let mut mask = vec![0u8; extent.cell_count()];
    local_maxima_2d(grid, extent, radius, &mut mask)?;
    Ok(extent
        .cells()
        .zip(mask)
        .filter_map(|(cell, m)| (m == 1).then_some(cell))
        .collect())
}

/// Coordinates of the strict local maxima of a volume, in offset order.
pub fn local_maxima_cells_3d(
    grid: &[f64],
    extent: &Extent3,
    window: MaximaWindow,
) -> Result<Vec<Cell3>, KernelError> {
    let mut mask = vec![0u8; extent.cell_count()];
    local_maxima_3d(grid, extent, window, &mut mask)?;
    Ok(extent
        .cells()
        .zip(mask)
        .filter_map(|(cell, m)| (m == 1).then_some(cell))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dendro_test_utils::{fixtures, oracle};
    use proptest::prelude::*;

    // ── Plane ───────────────────────────────────────────────────

    #[test]
    fn plateau_block_has_no_maxima() {
        let (grid, xsize, ysize) = fixtures::plateau_block_5x5();
        let mask = detect_local_maxima_2d(&grid, 1, xsize, ysize).unwrap();
        assert!(mask.iter().all(|&m| m == 0), "plateau produced a maximum: {mask:?}");
    }

    #[test]
    fn single_peak_is_found() {
        let mut grid = vec![0.0; 25];
        grid[12] = 1.0;
        let mask = detect_local_maxima_2d(&grid, 2, 5, 5).unwrap();
        let expected: Vec<u8> = (0..25).map(|i| u8::from(i == 12)).collect();
        assert_eq!(mask, expected);
    }

    #[test]
    fn boundary_cell_can_be_a_maximum() {
        // Increasing ramp along x: only the last column survives.
        let grid: Vec<f64> = (0..12).map(|i| (i % 4) as f64).collect();
        let extent = Extent2::new(4, 3).unwrap();
        let cells = local_maxima_cells_2d(&grid, &extent, 1).unwrap();
        assert!(cells.is_empty(), "ties along y must disqualify: {cells:?}");

        let grid = [0.0, 1.0, 2.0, 3.0];
        let mask = detect_local_maxima_2d(&grid, 1, 4, 1).unwrap();
        assert_eq!(mask, vec![0, 0, 0, 1]);
    }

    #[test]
    fn single_cell_grid_is_trivially_a_maximum() {
        assert_eq!(detect_local_maxima_2d(&[7.0], 3, 1, 1).unwrap(), vec![1]);
    }

    #[test]
    fn zero_radius_marks_every_cell() {
        let grid = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(detect_local_maxima_2d(&grid, 0, 2, 2).unwrap(), vec![1; 4]);
    }

    #[test]
    fn two_equal_cells_are_not_maxima() {
        assert_eq!(detect_local_maxima_2d(&[2.0, 2.0], 1, 2, 1).unwrap(), vec![0, 0]);
    }

    #[test]
    fn radius_reaches_distant_competitor() {
        let grid = [5.0, 0.0, 0.0, 9.0];
        assert_eq!(detect_local_maxima_2d(&grid, 1, 4, 1).unwrap(), vec![1, 0, 0, 1]);
        assert_eq!(detect_local_maxima_2d(&grid, 3, 4, 1).unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn nan_is_never_a_maximum() {
        // NaN loses every comparison, and so does anything compared to it.
        let grid = [f64::NAN, 0.0, 1.0];
        assert_eq!(detect_local_maxima_2d(&grid, 1, 3, 1).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = detect_local_maxima_2d(&[0.0; 5], 1, 2, 2).unwrap_err();
        assert_eq!(
            err,
            KernelError::LengthMismatch {
                buffer: "grid",
                expected: 4,
                actual: 5
            }
        );
        let extent = Extent2::new(2, 2).unwrap();
        let mut out = [0u8; 3];
        assert!(local_maxima_2d(&[0.0; 4], &extent, 1, &mut out).is_err());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            detect_local_maxima_2d(&[], 1, 0, 3),
            Err(KernelError::Space(_))
        ));
    }

    #[test]
    fn output_needs_no_initialisation() {
        let extent = Extent2::new(3, 1).unwrap();
        let mut out = [9u8; 3];
        local_maxima_2d(&[0.0, 4.0, 1.0], &extent, 1, &mut out).unwrap();
        assert_eq!(out, [0, 1, 0]);
    }

    // ── Volume ──────────────────────────────────────────────────

    #[test]
    fn volume_peak_with_spectral_radius() {
        let extent = Extent3::new(3, 3, 7).unwrap();
        let mut grid = vec![0.0; extent.cell_count()];
        grid[extent.offset(Cell3::new(1, 1, 1))] = 4.0;
        grid[extent.offset(Cell3::new(1, 1, 5))] = 6.0;

        // z radius 1: both peaks are isolated.
        let cells = local_maxima_cells_3d(&grid, &extent, MaximaWindow::new(1, 1)).unwrap();
        assert_eq!(cells, vec![Cell3::new(1, 1, 1), Cell3::new(1, 1, 5)]);

        // z radius 4: the brighter channel suppresses the other.
        let cells = local_maxima_cells_3d(&grid, &extent, MaximaWindow::new(1, 4)).unwrap();
        assert_eq!(cells, vec![Cell3::new(1, 1, 5)]);
    }

    #[test]
    fn volume_plateau_has_no_maxima() {
        let grid = vec![3.0; 27];
        let mask = detect_local_maxima_3d(&grid, 1, 1, 3, 3, 3).unwrap();
        assert!(mask.iter().all(|&m| m == 0));
    }

    #[test]
    fn volume_degenerate_window_marks_every_cell() {
        let grid = vec![3.0; 8];
        let mask = detect_local_maxima_3d(&grid, 0, 0, 2, 2, 2).unwrap();
        assert_eq!(mask, vec![1; 8]);
    }

    proptest! {
        #[test]
        fn plane_matches_brute_force(
            xsize in 1usize..9, ysize in 1usize..9, radius in 0usize..4,
            seed in any::<u64>(),
        ) {
            let grid = fixtures::quantized_grid(xsize * ysize, 4, seed);
            let mask = detect_local_maxima_2d(&grid, radius, xsize, ysize).unwrap();
            let expected = oracle::local_maxima_2d(&grid, xsize, ysize, radius);
            prop_assert_eq!(mask, expected);
        }

        #[test]
        fn volume_matches_brute_force(
            xsize in 1usize..6, ysize in 1usize..6, zsize in 1usize..6,
            radius_xy in 0usize..3, radius_z in 0usize..3,
            seed in any::<u64>(),
        ) {
            let grid = fixtures::quantized_grid(xsize * ysize * zsize, 5, seed);
            let mask = detect_local_maxima_3d(&grid, radius_xy, radius_z, xsize, ysize, zsize).unwrap();
            let expected = oracle::local_maxima_3d(&grid, xsize, ysize, zsize, radius_xy, radius_z);
            prop_assert_eq!(mask, expected);
        }

        #[test]
        fn marked_cells_are_strictly_greater_than_window(
            xsize in 1usize..10, ysize in 1usize..10, radius in 0usize..3,
            seed in any::<u64>(),
        ) {
            let extent = Extent2::new(xsize, ysize).unwrap();
            let grid = fixtures::quantized_grid(extent.cell_count(), 3, seed);
            let mut mask = vec![0u8; extent.cell_count()];
            local_maxima_2d(&grid, &extent, radius, &mut mask).unwrap();
            for cell in extent.cells() {
                let off = extent.offset(cell);
                let strictly_greater = extent
                    .window(cell, radius)
                    .neighbours()
                    .all(|nb| grid[off] > grid[extent.offset(nb)]);
                prop_assert_eq!(mask[off] == 1, strictly_greater);
            }
        }
    }
}
