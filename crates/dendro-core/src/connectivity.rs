//! Neighbour connectivity rules for region growing.

use std::fmt;

/// Which neighbours of a cell count as adjacent during a fill.
///
/// # Examples
///
/// ```
/// use dendro_core::Connectivity;
///
/// assert_eq!(Connectivity::Direct.neighbour_count(2), 4);
/// assert_eq!(Connectivity::Full.neighbour_count(2), 8);
/// assert_eq!(Connectivity::Direct.neighbour_count(3), 6);
/// assert_eq!(Connectivity::Full.neighbour_count(3), 26);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Face adjacency only: 4 neighbours in 2D, 6 in 3D.
    Direct,
    /// Face, edge and corner adjacency: 8 neighbours in 2D, 26 in 3D.
    #[default]
    Full,
}

impl Connectivity {
    /// Map a host-side "all neighbours" flag onto a connectivity rule.
    ///
    /// `true` selects [`Full`](Self::Full), `false` selects
    /// [`Direct`](Self::Direct).
    pub const fn from_flag(all: bool) -> Self {
        if all {
            Self::Full
        } else {
            Self::Direct
        }
    }

    /// Number of neighbours of an interior cell in an `ndim`-dimensional
    /// grid under this rule.
    pub const fn neighbour_count(self, ndim: u32) -> usize {
        match self {
            Self::Direct => 2 * ndim as usize,
            Self::Full => 3usize.pow(ndim) - 1,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Full => write!(f, "full"),
        }
    }
}
