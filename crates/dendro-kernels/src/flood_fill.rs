//! Threshold-gated flood fill from a seed cell.
//!
//! Grows the connected set of open-interior cells whose value is strictly
//! greater than a threshold, starting from a seed. The traversal uses an
//! explicit [`OffsetStack`] rather than recursion, so a region may cover
//! the whole grid.
//!
//! The caller-owned mask doubles as the visited set, using the three
//! [`CellState`]s:
//!
//! - a cell becomes [`Member`](CellState::Member) the moment it is pushed,
//!   so it is never pushed twice;
//! - a neighbour that fails the interior or threshold test the first time
//!   it is seen becomes [`Rejected`](CellState::Rejected) and is never
//!   tested again.
//!
//! The fill itself never clears the `Rejected` sentinels. That is the job
//! of [`fill`](crate::fill()), which normalises the mask after every run.
//! The mask must be all [`Unvisited`](CellState::Unvisited) on entry.

use crate::config::FillConfig;
use crate::error::{check_len, KernelError};
use crate::stack::{margin_for, OffsetStack};
use dendro_core::{CellState, Connectivity};
use dendro_space::{Cell2, Cell3, Extent2, Extent3, Lattice};
use std::fmt;

/// Why a seed was refused without touching the mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedRejection {
    /// The seed lies on the outermost ring (or the grid has no interior).
    OnBoundary,
    /// The seed value is not strictly greater than the threshold.
    BelowThreshold,
}

impl fmt::Display for SeedRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnBoundary => write!(f, "seed lies outside the open interior"),
            Self::BelowThreshold => write!(f, "seed value does not exceed the threshold"),
        }
    }
}

/// Result of a completed fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// The seed was refused; the mask is unchanged.
    SeedRejected(SeedRejection),
    /// The region was grown to completion.
    Filled {
        /// Number of member cells, seed included.
        members: usize,
    },
}

impl FillOutcome {
    /// Number of member cells added by the fill (0 for a rejected seed).
    pub fn members(&self) -> usize {
        match self {
            Self::SeedRejected(_) => 0,
            Self::Filled { members } => *members,
        }
    }

    /// Whether the seed was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::SeedRejected(_))
    }
}

/// Grow the region around `seed` into `mask`.
///
/// Leaves [`CellState::Rejected`] sentinels in the mask; see the module
/// docs.
///
/// # Errors
///
/// - `KernelError::LengthMismatch` if `grid` or `mask` does not hold one
///   element per cell (checked before any write).
/// - `KernelError::Space` if `seed` lies outside the lattice.
/// - `KernelError::AllocationFailed` if the stack cannot grow. The mask
///   keeps every decision made so far.
/// - `KernelError::InvalidMaskState` if a mask byte outside `0..=2` is
///   met during the traversal.
pub fn flood_fill<L: Lattice>(
    grid: &[f64],
    lattice: &L,
    seed: L::Cell,
    config: &FillConfig,
    mask: &mut [u8],
) -> Result<FillOutcome, KernelError> {
    check_len("grid", lattice.cell_count(), grid.len())?;
    check_len("mask", lattice.cell_count(), mask.len())?;
    let seed = lattice.checked(seed)?;

    if !lattice.is_interior(seed) {
        log::debug!("fill seed {seed:?} rejected: on boundary");
        return Ok(FillOutcome::SeedRejected(SeedRejection::OnBoundary));
    }
    let seed_offset = lattice.offset(seed);
    if !(grid[seed_offset] > config.threshold) {
        log::debug!(
            "fill seed {seed:?} rejected: value {} <= threshold {}",
            grid[seed_offset],
            config.threshold
        );
        return Ok(FillOutcome::SeedRejected(SeedRejection::BelowThreshold));
    }

    let mut stack = OffsetStack::new(
        lattice.leading_len(),
        lattice.cell_count(),
        margin_for(lattice.ndim()),
        config.stack_limit,
    )?;
    mask[seed_offset] = CellState::Member.as_byte();
    stack.push(seed_offset);

    let mut members = 0usize;
    while !stack.is_empty() {
        if let Err(err) = stack.ensure_headroom() {
            log::warn!("fill from {seed:?} aborted after {members} members: {err}");
            return Err(err);
        }
        let Some(offset) = stack.pop() else {
            break;
        };
        mask[offset] = CellState::Member.as_byte();
        members += 1;

        // Every pushed offset came from `lattice.offset`, so it decodes.
        let decoded = lattice.cell_at(offset);
        debug_assert!(decoded.is_some(), "stack offset {offset} outside lattice");
        let Some(cell) = decoded else {
            continue;
        };
        for nb in lattice.neighbours(cell, config.connectivity) {
            let nb_offset = lattice.offset(nb);
            let state = CellState::try_from(mask[nb_offset]).map_err(|bad| {
                KernelError::InvalidMaskState {
                    offset: nb_offset,
                    value: bad.0,
                }
            })?;
            if state != CellState::Unvisited {
                continue;
            }
            if lattice.is_interior(nb) && grid[nb_offset] > config.threshold {
                mask[nb_offset] = CellState::Member.as_byte();
                stack.push(nb_offset);
            } else {
                mask[nb_offset] = CellState::Rejected.as_byte();
            }
        }
    }

    log::debug!("fill from {seed:?} complete: {members} members");
    Ok(FillOutcome::Filled { members })
}

/// Flood fill an `xsize × ysize` plane from `(seed_x, seed_y)`.
///
/// `mask` must be zeroed by the caller and is left holding transient
/// `2` sentinels; pass it through
/// [`normalize_fill_mask`](dendro_core::normalize_fill_mask) (or use
/// [`fill`](crate::fill())) before reading it as a 0/1 mask.
///
/// # Errors
///
/// See [`flood_fill`]; additionally `KernelError::Space` for a
/// zero-length axis or a seed outside the plane.
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_2d(
    grid: &[f64],
    xsize: usize,
    ysize: usize,
    seed_x: usize,
    seed_y: usize,
    connectivity: Connectivity,
    threshold: f64,
    mask: &mut [u8],
) -> Result<FillOutcome, KernelError> {
    let extent = Extent2::new(xsize, ysize)?;
    let seed: Cell2 = extent.checked_cell(seed_x, seed_y)?;
    flood_fill(
        grid,
        &extent,
        seed,
        &FillConfig::new(connectivity, threshold),
        mask,
    )
}

/// Flood fill an `xsize × ysize × zsize` volume from
/// `(seed_x, seed_y, seed_z)`.
///
/// Same mask contract as [`flood_fill_2d`].
///
/// # Errors
///
/// See [`flood_fill`]; additionally `KernelError::Space` for a
/// zero-length axis or a seed outside the volume.
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_3d(
    grid: &[f64],
    xsize: usize,
    ysize: usize,
    zsize: usize,
    seed_x: usize,
    seed_y: usize,
    seed_z: usize,
    connectivity: Connectivity,
    threshold: f64,
    mask: &mut [u8],
) -> Result<FillOutcome, KernelError> {
    let extent = Extent3::new(xsize, ysize, zsize)?;
    let seed: Cell3 = extent.checked_cell(seed_x, seed_y, seed_z)?;
    flood_fill(
        grid,
        &extent,
        seed,
        &FillConfig::new(connectivity, threshold),
        mask,
    )
}
