//! Neighbour offset tables.
//!
//! Each table lists face neighbours first so that the direct
//! neighbourhood is a prefix of the full one.

use dendro_core::Connectivity;

/// All 8 plane offsets `(dx, dy)`: 4 faces, then 4 diagonals.
pub const PLANE_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// All 26 volume offsets `(dx, dy, dz)`: 6 faces, 12 edges, 8 corners.
pub const VOLUME_OFFSETS: [(isize, isize, isize); 26] = [
    (0, 0, 1),
    (0, 0, -1),
    (0, 1, 0),
    (0, -1, 0),
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
    (-1, 1, 1),
    (-1, 1, -1),
    (-1, -1, 1),
    (-1, -1, -1),
];

/// Plane offsets selected by `connectivity`.
pub fn plane_offsets(connectivity: Connectivity) -> &'static [(isize, isize)] {
    &PLANE_OFFSETS[..connectivity.neighbour_count(2)]
}

/// Volume offsets selected by `connectivity`.
pub fn volume_offsets(connectivity: Connectivity) -> &'static [(isize, isize, isize)] {
    &VOLUME_OFFSETS[..connectivity.neighbour_count(3)]
}
