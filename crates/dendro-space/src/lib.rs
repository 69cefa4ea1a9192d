//! Grid geometry for the Dendro kernels.
//!
//! This crate defines the [`Lattice`] trait, the abstraction both fill
//! kernels walk, along with the two dense row-major backends and the
//! clamped comparison windows used by local-maxima detection.
//!
//! # Backends
//!
//! - [`Extent2`]: `xsize × ysize` plane addressed by [`Cell2`]
//! - [`Extent3`]: `xsize × ysize × zsize` volume addressed by [`Cell3`]
//!
//! Linear offsets are fastest-axis first: `x + y*xsize (+ z*xsize*ysize)`.
//! Out-of-range coordinates are rejected when a cell is checked against
//! its extent, and windows are clamped once per axis by [`AxisSpan`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod offsets;
pub mod plane;
pub mod volume;
pub mod window;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use lattice::Lattice;
pub use plane::{Cell2, Extent2};
pub use volume::{Cell3, Extent3};
pub use window::{AxisSpan, Window2, Window3};
