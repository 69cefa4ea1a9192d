//! Core types for the Dendro grid kernels.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-cell mask encoding shared by the flood-fill kernels and the
//! connectivity rule that selects which neighbours a fill explores.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod mask;

pub use connectivity::Connectivity;
pub use mask::{count_members, mask_to_bools, normalize_fill_mask, CellState, InvalidCellState};
