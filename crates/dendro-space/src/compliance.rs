//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants the fill kernels rely on. Reused across the plane and
//! volume test modules.

use crate::lattice::Lattice;
use dendro_core::Connectivity;
use indexmap::IndexSet;
use std::hash::Hash;

fn all_cells<L: Lattice>(lattice: &L) -> Vec<L::Cell> {
    (0..lattice.cell_count())
        .map(|off| {
            lattice
                .cell_at(off)
                .unwrap_or_else(|| panic!("cell_at({off}) returned None below cell_count"))
        })
        .collect()
}

/// Assert that `offset(cell_at(i)) == i` for every offset.
pub fn assert_offsets_round_trip<L: Lattice>(lattice: &L) {
    for (off, cell) in all_cells(lattice).into_iter().enumerate() {
        assert!(lattice.contains(cell), "{cell:?} from cell_at({off}) not contained");
        assert_eq!(lattice.offset(cell), off, "offset({cell:?}) != {off}");
    }
    assert!(lattice.cell_at(lattice.cell_count()).is_none());
}

/// Assert that `cell_at` enumerates exactly `cell_count` unique cells.
pub fn assert_cells_unique<L: Lattice>(lattice: &L)
where
    L::Cell: Hash + Eq,
{
    let unique: IndexSet<_> = all_cells(lattice).into_iter().collect();
    assert_eq!(unique.len(), lattice.cell_count(), "cell enumeration has duplicates");
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, and
/// that no cell neighbours itself.
pub fn assert_neighbours_symmetric<L: Lattice>(lattice: &L) {
    for connectivity in [Connectivity::Direct, Connectivity::Full] {
        for cell in all_cells(lattice) {
            let nbs = lattice.neighbours(cell, connectivity);
            assert!(!nbs.contains(&cell), "{cell:?} neighbours itself");
            for nb in nbs {
                assert!(lattice.contains(nb), "neighbour {nb:?} of {cell:?} out of bounds");
                assert!(
                    lattice.neighbours(nb, connectivity).contains(&cell),
                    "neighbour symmetry violated: {nb:?} in N({cell:?}) but not vice versa"
                );
            }
        }
    }
}

/// Assert that interior cells have the full neighbour count and that
/// `interior_cell_count` agrees with `is_interior`.
pub fn assert_interior_consistent<L: Lattice>(lattice: &L) {
    let ndim = lattice.ndim() as u32;
    let mut interior = 0;
    for cell in all_cells(lattice) {
        if lattice.is_interior(cell) {
            interior += 1;
            for connectivity in [Connectivity::Direct, Connectivity::Full] {
                assert_eq!(
                    lattice.neighbours(cell, connectivity).len(),
                    connectivity.neighbour_count(ndim),
                    "interior cell {cell:?} is missing {connectivity} neighbours"
                );
            }
        }
    }
    assert_eq!(interior, lattice.interior_cell_count());
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance<L: Lattice>(lattice: &L)
where
    L::Cell: Hash + Eq,
{
    assert_offsets_round_trip(lattice);
    assert_cells_unique(lattice);
    assert_neighbours_symmetric(lattice);
    assert_interior_consistent(lattice);
}
