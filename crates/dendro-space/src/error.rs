//! Error types for grid construction and coordinate checks.

use smallvec::SmallVec;
use std::fmt;

/// Errors arising from extent construction or coordinate validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct an extent with a zero-length axis.
    EmptySpace,
    /// The product of the axis lengths does not fit in `usize`.
    CellCountOverflow {
        /// The offending axis lengths.
        dims: SmallVec<[usize; 3]>,
    },
    /// A coordinate is outside the bounds of the extent.
    CellOutOfBounds {
        /// The offending coordinate.
        coord: SmallVec<[usize; 3]>,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell on every axis"),
            Self::CellCountOverflow { dims } => {
                write!(f, "grid dimensions {dims:?} overflow the addressable cell count")
            }
            Self::CellOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
