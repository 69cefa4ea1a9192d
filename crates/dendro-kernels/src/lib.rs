//! Local-maxima detection and threshold flood fill over dense grids.
//!
//! These are the two building blocks of dendrogram construction on 2D
//! images and 3D spectral cubes: maxima seed the leaves, and fills grow
//! the region above each contour level.
//!
//! # Kernels
//!
//! 1. [`detect_local_maxima_2d`] / [`detect_local_maxima_3d`]: strict
//!    maxima over clamped windows, as a 0/1 mask.
//! 2. [`flood_fill_2d`] / [`flood_fill_3d`]: grow the open-interior region
//!    of values above a threshold into a caller-zeroed mask. The mask may
//!    hold `2` sentinels afterwards.
//! 3. [`fill()`]: run a fill for a [`FillRequest`] and normalise the mask to
//!    0/1, including after an aborted fill.
//!
//! The generic [`flood_fill()`] walks any [`Lattice`](dendro_space::Lattice)
//! with an explicit [`OffsetStack`](stack::OffsetStack).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod fill;
pub mod flood_fill;
pub mod local_maxima;
pub mod stack;

pub use config::{FillConfig, FillConfigBuilder, MaximaWindow};
pub use error::KernelError;
pub use fill::{fill, grow_region_2d, grow_region_3d, FillRequest, Region};
pub use flood_fill::{flood_fill, flood_fill_2d, flood_fill_3d, FillOutcome, SeedRejection};
pub use local_maxima::{
    detect_local_maxima_2d, detect_local_maxima_3d, local_maxima_2d, local_maxima_3d,
    local_maxima_cells_2d, local_maxima_cells_3d,
};
