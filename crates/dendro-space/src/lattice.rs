//! The `Lattice` trait shared by the plane and volume backends.

use crate::error::SpaceError;
use dendro_core::Connectivity;
use smallvec::SmallVec;
use std::fmt;

/// A dense, row-major rectangular grid that the kernels walk by offset.
///
/// Implemented by [`Extent2`](crate::Extent2) and
/// [`Extent3`](crate::Extent3). Kernels written against this trait are
/// shared between the 2D and 3D variants; only the coordinate type and
/// the neighbour table differ.
///
/// Implementations must keep [`offset`](Self::offset) and
/// [`cell_at`](Self::cell_at) mutually inverse over
/// `0..cell_count()`.
pub trait Lattice {
    /// Coordinate type addressing one cell.
    type Cell: Copy + fmt::Debug + PartialEq;

    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Length of the fastest-varying (first) axis.
    fn leading_len(&self) -> usize;

    /// Linear offset of an in-bounds cell.
    ///
    /// Passing a cell outside the extent is a logic error; the result is
    /// unspecified (and panics in debug builds).
    fn offset(&self, cell: Self::Cell) -> usize;

    /// The cell at a linear offset, or `None` past the end.
    fn cell_at(&self, offset: usize) -> Option<Self::Cell>;

    /// Whether `cell` lies inside the extent.
    fn contains(&self, cell: Self::Cell) -> bool;

    /// Return `cell` unchanged if it lies inside the extent, or
    /// `Err(SpaceError::CellOutOfBounds)` describing the valid range.
    fn checked(&self, cell: Self::Cell) -> Result<Self::Cell, SpaceError>;

    /// Whether `cell` lies in the open interior: `1 <= c <= len - 2` on
    /// every axis. The outermost one-cell ring is never interior, so an
    /// extent with any axis shorter than 3 has no interior at all.
    fn is_interior(&self, cell: Self::Cell) -> bool;

    /// In-bounds neighbours of `cell` under `connectivity`.
    ///
    /// Neighbours that would leave the extent are omitted. Order is
    /// deterministic: face neighbours first, then diagonals.
    fn neighbours(&self, cell: Self::Cell, connectivity: Connectivity) -> SmallVec<[Self::Cell; 26]>;

    /// Number of cells in the open interior.
    fn interior_cell_count(&self) -> usize;
}
