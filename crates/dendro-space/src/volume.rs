//! Dense 3D volume addressed by `(x, y, z)`.
//!
//! For spectral cubes `z` is the spectral axis; windows may use a
//! separate radius along it (see [`Extent3::window`]).

use crate::error::SpaceError;
use crate::lattice::Lattice;
use crate::offsets;
use crate::window::{AxisSpan, Window3};
use dendro_core::Connectivity;
use smallvec::{smallvec, SmallVec};

/// A cell coordinate in a volume: `x` fastest, `z` slowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell3 {
    /// Index along x, `0 <= x < xsize`.
    pub x: usize,
    /// Index along y, `0 <= y < ysize`.
    pub y: usize,
    /// Index along z, `0 <= z < zsize`.
    pub z: usize,
}

impl Cell3 {
    /// Shorthand constructor.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Dimensions of a dense row-major volume.
///
/// Offset of `(x, y, z)` is `x + y * xsize + z * xsize * ysize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent3 {
    xsize: usize,
    ysize: usize,
    zsize: usize,
    /// Precomputed `xsize * ysize`.
    plane_len: usize,
    cell_count: usize,
}

impl Extent3 {
    /// Create a volume of `xsize * ysize * zsize` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if any axis is 0, or
    /// `Err(SpaceError::CellCountOverflow)` if the cell count does not fit
    /// in `usize`.
    pub fn new(xsize: usize, ysize: usize, zsize: usize) -> Result<Self, SpaceError> {
        if xsize == 0 || ysize == 0 || zsize == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let overflow = || SpaceError::CellCountOverflow {
            dims: smallvec![xsize, ysize, zsize],
        };
        let plane_len = xsize.checked_mul(ysize).ok_or_else(overflow)?;
        let cell_count = plane_len.checked_mul(zsize).ok_or_else(overflow)?;
        Ok(Self {
            xsize,
            ysize,
            zsize,
            plane_len,
            cell_count,
        })
    }

    /// Length of the x axis.
    pub fn xsize(&self) -> usize {
        self.xsize
    }

    /// Length of the y axis.
    pub fn ysize(&self) -> usize {
        self.ysize
    }

    /// Length of the z axis.
    pub fn zsize(&self) -> usize {
        self.zsize
    }

    /// Validate a raw coordinate triple against this extent.
    pub fn checked_cell(&self, x: usize, y: usize, z: usize) -> Result<Cell3, SpaceError> {
        let cell = Cell3 { x, y, z };
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                coord: smallvec![x, y, z],
                bounds: format!(
                    "[0, {}) x [0, {}) x [0, {})",
                    self.xsize, self.ysize, self.zsize
                ),
            })
        }
    }

    /// Whether every axis is long enough to have an open interior.
    pub fn has_interior(&self) -> bool {
        self.xsize > 2 && self.ysize > 2 && self.zsize > 2
    }

    /// Clamped window around `cell`: `radius_xy` on x and y, `radius_z` on z.
    pub fn window(&self, cell: Cell3, radius_xy: usize, radius_z: usize) -> Window3 {
        Window3::new(
            cell,
            AxisSpan::clamped(cell.x, radius_xy, self.xsize),
            AxisSpan::clamped(cell.y, radius_xy, self.ysize),
            AxisSpan::clamped(cell.z, radius_z, self.zsize),
        )
    }

    /// The cell displaced by `(dx, dy, dz)`, if it stays inside the volume.
    pub fn shifted(&self, cell: Cell3, dx: isize, dy: isize, dz: isize) -> Option<Cell3> {
        let x = cell.x.checked_add_signed(dx).filter(|&x| x < self.xsize)?;
        let y = cell.y.checked_add_signed(dy).filter(|&y| y < self.ysize)?;
        let z = cell.z.checked_add_signed(dz).filter(|&z| z < self.zsize)?;
        Some(Cell3 { x, y, z })
    }

    /// All cells in offset order.
    pub fn cells(&self) -> impl Iterator<Item = Cell3> + '_ {
        (0..self.zsize).flat_map(move |z| {
            (0..self.ysize).flat_map(move |y| (0..self.xsize).map(move |x| Cell3 { x, y, z }))
        })
    }
}

impl Lattice for Extent3 {
    type Cell = Cell3;

    fn ndim(&self) -> usize {
        3
    }

    fn cell_count(&self) -> usize {
        self.cell_count
    }

    fn leading_len(&self) -> usize {
        self.xsize
    }

    #[inline]
    fn offset(&self, cell: Cell3) -> usize {
        debug_assert!(self.contains(cell), "{cell:?} outside {self:?}");
        cell.x + cell.y * self.xsize + cell.z * self.plane_len
    }

    #[inline]
    fn cell_at(&self, offset: usize) -> Option<Cell3> {
        (offset < self.cell_count).then(|| Cell3 {
            x: offset % self.xsize,
            y: (offset / self.xsize) % self.ysize,
            z: offset / self.plane_len,
        })
    }

    #[inline]
    fn contains(&self, cell: Cell3) -> bool {
        cell.x < self.xsize && cell.y < self.ysize && cell.z < self.zsize
    }

    fn checked(&self, cell: Cell3) -> Result<Cell3, SpaceError> {
        self.checked_cell(cell.x, cell.y, cell.z)
    }

    #[inline]
    fn is_interior(&self, cell: Cell3) -> bool {
        cell.x >= 1
            && cell.x + 2 <= self.xsize
            && cell.y >= 1
            && cell.y + 2 <= self.ysize
            && cell.z >= 1
            && cell.z + 2 <= self.zsize
    }

    fn neighbours(&self, cell: Cell3, connectivity: Connectivity) -> SmallVec<[Cell3; 26]> {
        offsets::volume_offsets(connectivity)
            .iter()
            .filter_map(|&(dx, dy, dz)| self.shifted(cell, dx, dy, dz))
            .collect()
    }

    fn interior_cell_count(&self) -> usize {
        self.xsize.saturating_sub(2) * self.ysize.saturating_sub(2) * self.zsize.saturating_sub(2)
    }
}
