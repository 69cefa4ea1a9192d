//! Dense 2D plane addressed by `(x, y)`.

use crate::error::SpaceError;
use crate::lattice::Lattice;
use crate::offsets;
use crate::window::{AxisSpan, Window2};
use dendro_core::Connectivity;
use smallvec::{smallvec, SmallVec};

/// A cell coordinate in a plane: `x` is the fast axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell2 {
    /// Column index, `0 <= x < xsize`.
    pub x: usize,
    /// Row index, `0 <= y < ysize`.
    pub y: usize,
}

impl Cell2 {
    /// Shorthand constructor.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Dimensions of a dense row-major plane.
///
/// Offset of `(x, y)` is `x + y * xsize`.
///
/// # Examples
///
/// ```
/// use dendro_space::{Cell2, Extent2, Lattice};
///
/// let plane = Extent2::new(5, 4).unwrap();
/// assert_eq!(plane.cell_count(), 20);
/// assert_eq!(plane.offset(Cell2::new(2, 3)), 17);
/// assert_eq!(plane.cell_at(17), Some(Cell2::new(2, 3)));
/// assert!(plane.checked_cell(5, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent2 {
    xsize: usize,
    ysize: usize,
    cell_count: usize,
}

impl Extent2 {
    /// Create a plane of `xsize * ysize` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either axis is 0, or
    /// `Err(SpaceError::CellCountOverflow)` if the cell count does not fit
    /// in `usize`.
    pub fn new(xsize: usize, ysize: usize) -> Result<Self, SpaceError> {
        if xsize == 0 || ysize == 0 {
            return Err(SpaceError::EmptySpace);
        }
        let cell_count = xsize
            .checked_mul(ysize)
            .ok_or_else(|| SpaceError::CellCountOverflow {
                dims: smallvec![xsize, ysize],
            })?;
        Ok(Self {
            xsize,
            ysize,
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

    /// Validate a raw coordinate pair against this extent.
    pub fn checked_cell(&self, x: usize, y: usize) -> Result<Cell2, SpaceError> {
        let cell = Cell2 { x, y };
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                coord: smallvec![x, y],
                bounds: format!("[0, {}) x [0, {})", self.xsize, self.ysize),
            })
        }
    }

    /// Whether every axis is long enough to have an open interior.
    pub fn has_interior(&self) -> bool {
        self.xsize > 2 && self.ysize > 2
    }

    /// Clamped comparison window of the given radius around `cell`.
    pub fn window(&self, cell: Cell2, radius: usize) -> Window2 {
        Window2::new(
            cell,
            AxisSpan::clamped(cell.x, radius, self.xsize),
            AxisSpan::clamped(cell.y, radius, self.ysize),
        )
    }

    /// The cell displaced by `(dx, dy)`, if it stays inside the plane.
    pub fn shifted(&self, cell: Cell2, dx: isize, dy: isize) -> Option<Cell2> {
        let x = cell.x.checked_add_signed(dx).filter(|&x| x < self.xsize)?;
        let y = cell.y.checked_add_signed(dy).filter(|&y| y < self.ysize)?;
        Some(Cell2 { x, y })
    }

    /// All cells in offset order.
    pub fn cells(&self) -> impl Iterator<Item = Cell2> + '_ {
        (0..self.ysize).flat_map(move |y| (0..self.xsize).map(move |x| Cell2 { x, y }))
    }
}

impl Lattice for Extent2 {
    type Cell = Cell2;

    fn ndim(&self) -> usize {
        2
    }

    fn cell_count(&self) -> usize {
        self.cell_count
    }

    fn leading_len(&self) -> usize {
        self.xsize
    }

    #[inline]
    fn offset(&self, cell: Cell2) -> usize {
        debug_assert!(self.contains(cell), "{cell:?} outside {self:?}");
        cell.x + cell.y * self.xsize
    }

    #[inline]
    fn cell_at(&self, offset: usize) -> Option<Cell2> {
        (offset < self.cell_count).then(|| Cell2 {
            x: offset % self.xsize,
            y: offset / self.xsize,
        })
    }

    #[inline]
    fn contains(&self, cell: Cell2) -> bool {
        cell.x < self.xsize && cell.y < self.ysize
    }

    fn checked(&self, cell: Cell2) -> Result<Cell2, SpaceError> {
        self.checked_cell(cell.x, cell.y)
    }

    #[inline]
    fn is_interior(&self, cell: Cell2) -> bool {
        cell.x >= 1 && cell.x + 2 <= self.xsize && cell.y >= 1 && cell.y + 2 <= self.ysize
    }

    fn neighbours(&self, cell: Cell2, connectivity: Connectivity) -> SmallVec<[Cell2; 26]> {
        offsets::plane_offsets(connectivity)
            .iter()
            .filter_map(|&(dx, dy)| self.shifted(cell, dx, dy))
            .collect()
    }

    fn interior_cell_count(&self) -> usize {
        self.xsize.saturating_sub(2) * self.ysize.saturating_sub(2)
    }
}
