//! Per-cell mask encoding used by the flood-fill kernels.
//!
//! A fill mask is a caller-owned `u8` buffer with one byte per grid cell.
//! While a fill is running each byte holds one of three [`CellState`]s.
//! The [`Rejected`](CellState::Rejected) sentinel is transient: a mask is
//! only final once [`normalize_fill_mask`] has folded every sentinel back
//! to [`Unvisited`](CellState::Unvisited), leaving a pure 0/1 mask.

use std::error::Error;
use std::fmt;

/// Traversal state of a single cell in a fill mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Not yet examined by the fill.
    Unvisited = 0,
    /// Confirmed region member, or queued on the traversal stack.
    Member = 1,
    /// Examined and rejected: at or below threshold, or outside the
    /// fillable interior. Never re-examined during the same fill.
    Rejected = 2,
}

impl CellState {
    /// Byte encoding of this state in a mask buffer.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Decode a mask byte.
    ///
    /// Returns `None` for bytes outside the three-state encoding.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Unvisited),
            1 => Some(Self::Member),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether this state survives normalisation as a set bit.
    #[inline]
    pub const fn is_member(self) -> bool {
        matches!(self, Self::Member)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvisited => write!(f, "unvisited"),
            Self::Member => write!(f, "member"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A mask byte that does not decode to a [`CellState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCellState(pub u8);

impl fmt::Display for InvalidCellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mask byte {} (expected 0, 1 or 2)", self.0)
    }
}

impl Error for InvalidCellState {}

impl TryFrom<u8> for CellState {
    type Error = InvalidCellState;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(InvalidCellState(byte))
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state.as_byte()
    }
}

/// Fold every [`Rejected`](CellState::Rejected) sentinel back to
/// [`Unvisited`](CellState::Unvisited).
///
/// Returns the number of sentinels cleared. Running it on an already
/// normalised mask changes nothing and returns 0.
pub fn normalize_fill_mask(mask: &mut [u8]) -> usize {
    let rejected = CellState::Rejected.as_byte();
    let mut cleared = 0;
    for byte in mask.iter_mut().filter(|b| **b == rejected) {
        *byte = CellState::Unvisited.as_byte();
        cleared += 1;
    }
    cleared
}

/// Number of [`Member`](CellState::Member) cells in a mask.
pub fn count_members(mask: &[u8]) -> usize {
    mask.iter().filter(|&&b| byte_is_member(b)).count()
}

/// Convert a mask to the external two-valued form.
///
/// Only [`Member`](CellState::Member) bytes map to `true`, so a mask that
/// still carries sentinels converts the same as its normalised form.
pub fn mask_to_bools(mask: &[u8]) -> Vec<bool> {
    mask.iter().map(|&b| byte_is_member(b)).collect()
}

#[inline]
fn byte_is_member(byte: u8) -> bool {
    CellState::from_byte(byte).is_some_and(CellState::is_member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn byte_encoding_matches_fill_contract() {
        assert_eq!(CellState::Unvisited.as_byte(), 0);
        assert_eq!(CellState::Member.as_byte(), 1);
        assert_eq!(CellState::Rejected.as_byte(), 2);
        for state in [CellState::Unvisited, CellState::Member, CellState::Rejected] {
            assert_eq!(CellState::from_byte(state.as_byte()), Some(state));
        }
    }

    #[test]
    fn try_from_rejects_unknown_bytes() {
        assert_eq!(CellState::try_from(3), Err(InvalidCellState(3)));
        assert_eq!(CellState::try_from(255), Err(InvalidCellState(255)));
        assert_eq!(CellState::try_from(1), Ok(CellState::Member));
    }

    #[test]
    fn normalize_clears_only_sentinels() {
        let mut mask = vec![0, 1, 2, 2, 1, 0, 2];
        assert_eq!(normalize_fill_mask(&mut mask), 3);
        assert_eq!(mask, vec![0, 1, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn normalize_empty_mask() {
        let mut mask: Vec<u8> = Vec::new();
        assert_eq!(normalize_fill_mask(&mut mask), 0);
    }

    #[test]
    fn bools_ignore_sentinels() {
        assert_eq!(mask_to_bools(&[0, 1, 2]), vec![false, true, false]);
        assert_eq!(count_members(&[0, 1, 2, 1]), 2);
    }

    #[test]
    fn only_member_state_counts() {
        assert!(CellState::Member.is_member());
        assert!(!CellState::Unvisited.is_member());
        assert!(!CellState::Rejected.is_member());
        // Undecodable bytes are never members.
        assert_eq!(count_members(&[1, 7, 255]), 1);
        assert_eq!(mask_to_bools(&[7, 1]), vec![false, true]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(mut mask in proptest::collection::vec(0u8..3, 0..64)) {
            normalize_fill_mask(&mut mask);
            let once = mask.clone();
            prop_assert_eq!(normalize_fill_mask(&mut mask), 0);
            prop_assert_eq!(mask, once);
        }

        #[test]
        fn normalize_preserves_members(mask in proptest::collection::vec(0u8..3, 0..64)) {
            let mut normalised = mask.clone();
            normalize_fill_mask(&mut normalised);
            prop_assert_eq!(count_members(&mask), count_members(&normalised));
            prop_assert!(normalised.iter().all(|&b| b <= 1));
        }
    }
}
