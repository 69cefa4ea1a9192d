//! Dendro: grid kernels for dendrogram construction.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Dendro sub-crates. Adding `dendro` as a single dependency is enough
//! for most hosts.
//!
//! # Quick start
//!
//! ```rust
//! use dendro::prelude::*;
//!
//! // A 5×5 image with a single bright 2×2 block.
//! let mut grid = vec![0.0; 25];
//! for offset in [6, 7, 11, 12] {
//!     grid[offset] = 3.0;
//! }
//!
//! // The flat top has no strict maximum.
//! let maxima = detect_local_maxima_2d(&grid, 1, 5, 5).unwrap();
//! assert!(maxima.iter().all(|&m| m == 0));
//!
//! // Fill the block from its corner and get a clean 0/1 mask back.
//! let request = FillRequest::plane(5, 5, 2, 2).unwrap();
//! let config = FillConfig::new(Connectivity::Full, 1.0);
//! let mut mask = vec![0u8; 25];
//! let outcome = fill(&grid, &mut mask, &request, &config).unwrap();
//! assert_eq!(outcome, FillOutcome::Filled { members: 4 });
//! assert_eq!(mask.iter().filter(|&&m| m == 1).count(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dendro-core` | Cell states, connectivity, mask helpers |
//! | [`space`] | `dendro-space` | Extents, cells, clamped windows, the `Lattice` trait |
//! | [`kernels`] | `dendro-kernels` | Maxima and fill kernels, configuration, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states, connectivity and mask helpers (`dendro-core`).
pub use dendro_core as types;

/// Grid geometry (`dendro-space`).
///
/// Provides the [`space::Lattice`] trait and the [`space::Extent2`] and
/// [`space::Extent3`] backends.
pub use dendro_space as space;

/// Local-maxima and flood-fill kernels (`dendro-kernels`).
pub use dendro_kernels as kernels;

/// Common imports for typical Dendro usage.
///
/// ```rust
/// use dendro::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use dendro_core::{normalize_fill_mask, CellState, Connectivity};

    // Space
    pub use dendro_space::{Cell2, Cell3, Extent2, Extent3, Lattice};

    // Kernels
    pub use dendro_kernels::{
        detect_local_maxima_2d, detect_local_maxima_3d, fill, flood_fill_2d, flood_fill_3d,
        grow_region_2d, grow_region_3d, FillConfig, FillOutcome, FillRequest, MaximaWindow,
        Region, SeedRejection,
    };

    // Errors
    pub use dendro_kernels::KernelError;
    pub use dendro_space::SpaceError;
}
