//! Fill entry points that always hand back a clean 0/1 mask.
//!
//! [`flood_fill`](crate::flood_fill()) leaves `Rejected` sentinels behind.
//! [`fill`] runs it for a plane or a volume and then normalises the mask,
//! on success and on an aborted fill alike. [`grow_region_2d`] and
//! [`grow_region_3d`] go one step further and own the mask.

use crate::config::FillConfig;
use crate::error::{check_len, KernelError};
use crate::flood_fill::{flood_fill, FillOutcome};
use dendro_core::{mask_to_bools, normalize_fill_mask};
use dendro_space::{Cell2, Cell3, Extent2, Extent3, Lattice};

/// Where to fill: the grid shape plus the seed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRequest {
    /// Fill a plane.
    Plane {
        /// Grid shape.
        extent: Extent2,
        /// Seed cell.
        seed: Cell2,
    },
    /// Fill a volume.
    Volume {
        /// Grid shape.
        extent: Extent3,
        /// Seed cell.
        seed: Cell3,
    },
}

impl FillRequest {
    /// Plane request from raw dimensions and seed coordinates.
    ///
    /// # Errors
    ///
    /// `KernelError::Space` for a zero-length axis or a seed outside the
    /// plane.
    pub fn plane(xsize: usize, ysize: usize, x: usize, y: usize) -> Result<Self, KernelError> {
        let extent = Extent2::new(xsize, ysize)?;
        let seed = extent.checked_cell(x, y)?;
        Ok(Self::Plane { extent, seed })
    }

    /// Volume request from raw dimensions and seed coordinates.
    ///
    /// # Errors
    ///
    /// `KernelError::Space` for a zero-length axis or a seed outside the
    /// volume.
    pub fn volume(
        (xsize, ysize, zsize): (usize, usize, usize),
        (x, y, z): (usize, usize, usize),
    ) -> Result<Self, KernelError> {
        let extent = Extent3::new(xsize, ysize, zsize)?;
        let seed = extent.checked_cell(x, y, z)?;
        Ok(Self::Volume { extent, seed })
    }

    /// Number of cells the grid and mask must hold.
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Plane { extent, .. } => extent.cell_count(),
            Self::Volume { extent, .. } => extent.cell_count(),
        }
    }
}

/// Fill `mask` from the request's seed and normalise it to 0/1.
///
/// `mask` must be zeroed on entry. The normalisation runs even when the
/// fill aborts, so a caller that sees `AllocationFailed` still holds a
/// valid 0/1 mask of the members confirmed before the abort.
///
/// # Errors
///
/// - `KernelError::LengthMismatch` if `grid` or `mask` has the wrong
///   length; nothing is written.
/// - Any error from [`flood_fill`](crate::flood_fill()).
pub fn fill(
    grid: &[f64],
    mask: &mut [u8],
    request: &FillRequest,
    config: &FillConfig,
) -> Result<FillOutcome, KernelError> {
    check_len("grid", request.cell_count(), grid.len())?;
    check_len("mask", request.cell_count(), mask.len())?;

    let result = match *request {
        FillRequest::Plane { extent, seed } => flood_fill(grid, &extent, seed, config, mask),
        FillRequest::Volume { extent, seed } => flood_fill(grid, &extent, seed, config, mask),
    };
    let cleared = normalize_fill_mask(mask);
    log::trace!("cleared {cleared} rejected cells from fill mask");
    result
}

/// A grown region: membership per cell plus the fill outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    members: Vec<bool>,
    outcome: FillOutcome,
}

impl Region {
    /// Membership flag per cell, in offset order.
    pub fn mask(&self) -> &[bool] {
        &self.members
    }

    /// Consume the region, returning the membership mask.
    pub fn into_mask(self) -> Vec<bool> {
        self.members
    }

    /// Whether the cell at `offset` belongs to the region.
    pub fn contains(&self, offset: usize) -> bool {
        self.members.get(offset).copied().unwrap_or(false)
    }

    /// Number of member cells.
    pub fn len(&self) -> usize {
        self.outcome.members()
    }

    /// Whether the region has no members (the seed was rejected).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How the fill ended.
    pub fn outcome(&self) -> FillOutcome {
        self.outcome
    }

    /// Offsets of the member cells, ascending.
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(off, &m)| m.then_some(off))
    }
}

fn grow_region(
    grid: &[f64],
    request: &FillRequest,
    config: &FillConfig,
) -> Result<Region, KernelError> {
    let mut mask = vec![0u8; request.cell_count()];
    let outcome = fill(grid, &mut mask, request, config)?;
    Ok(Region {
        members: mask_to_bools(&mask),
        outcome,
    })
}

/// Grow the region around `seed` in a plane, allocating the mask.
///
/// # Errors
///
/// Same as [`fill`]. On an aborted fill the partial mask is dropped.
pub fn grow_region_2d(
    grid: &[f64],
    extent: &Extent2,
    seed: Cell2,
    config: &FillConfig,
) -> Result<Region, KernelError> {
    grow_region(
        grid,
        &FillRequest::Plane {
            extent: *extent,
            seed,
        },
        config,
    )
}

/// Grow the region around `seed` in a volume, allocating the mask.
///
/// # Errors
///
/// Same as [`fill`]. On an aborted fill the partial mask is dropped.
pub fn grow_region_3d(
    grid: &[f64],
    extent: &Extent3,
    seed: Cell3,
    config: &FillConfig,
) -> Result<Region, KernelError> {
    grow_region(
        grid,
        &FillRequest::Volume {
            extent: *extent,
            seed,
        },
        config,
    )
}
