//! Axis-aligned comparison windows clamped to grid bounds.
//!
//! A window never wraps: near the boundary it is truncated, so edge and
//! corner cells are compared against fewer neighbours than interior
//! cells.

use crate::plane::Cell2;
use crate::volume::Cell3;

/// Inclusive index range `[lo, hi]` along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSpan {
    /// First index in the span.
    pub lo: usize,
    /// Last index in the span (inclusive).
    pub hi: usize,
}

impl AxisSpan {
    /// The span `[center - radius, center + radius]` clamped to `[0, len - 1]`.
    ///
    /// `center` must be less than `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendro_space::AxisSpan;
    ///
    /// assert_eq!(AxisSpan::clamped(0, 2, 10), AxisSpan { lo: 0, hi: 2 });
    /// assert_eq!(AxisSpan::clamped(5, 2, 10), AxisSpan { lo: 3, hi: 7 });
    /// assert_eq!(AxisSpan::clamped(9, 2, 10), AxisSpan { lo: 7, hi: 9 });
    /// ```
    pub fn clamped(center: usize, radius: usize, len: usize) -> Self {
        debug_assert!(center < len, "center {center} outside axis of length {len}");
        Self {
            lo: center.saturating_sub(radius),
            hi: center.saturating_add(radius).min(len - 1),
        }
    }

    /// Number of indices in the span.
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Always `false`: a span contains at least its center.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the indices of the span.
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.lo..=self.hi
    }
}

/// Clamped rectangular window around a plane cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window2 {
    /// Span along x.
    pub x: AxisSpan,
    /// Span along y.
    pub y: AxisSpan,
    center: Cell2,
}

impl Window2 {
    pub(crate) fn new(center: Cell2, x: AxisSpan, y: AxisSpan) -> Self {
        Self { x, y, center }
    }

    /// The cell the window was built around.
    pub fn center(&self) -> Cell2 {
        self.center
    }

    /// Number of cells in the window, center included.
    pub fn cell_count(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// Number of cells the center is compared against.
    pub fn neighbour_count(&self) -> usize {
        self.cell_count() - 1
    }

    /// Every window cell except the center, y-major.
    pub fn neighbours(&self) -> impl Iterator<Item = Cell2> + '_ {
        let center = self.center;
        self.y
            .iter()
            .flat_map(move |y| self.x.iter().map(move |x| Cell2 { x, y }))
            .filter(move |&c| c != center)
    }
}

/// Clamped box window around a volume cell.
///
/// The z span may use a different radius from x and y, matching the
/// spectral axis of a data cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window3 {
    /// Span along x.
    pub x: AxisSpan,
    /// Span along y.
    pub y: AxisSpan,
    /// Span along z.
    pub z: AxisSpan,
    center: Cell3,
}

impl Window3 {
    pub(crate) fn new(center: Cell3, x: AxisSpan, y: AxisSpan, z: AxisSpan) -> Self {
        Self { x, y, z, center }
    }

    /// The cell the window was built around.
    pub fn center(&self) -> Cell3 {
        self.center
    }

    /// Number of cells in the window, center included.
    pub fn cell_count(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }

    /// Number of cells the center is compared against.
    pub fn neighbour_count(&self) -> usize {
        self.cell_count() - 1
    }

    /// Every window cell except the center, z-major.
    pub fn neighbours(&self) -> impl Iterator<Item = Cell3> + '_ {
        let center = self.center;
        self.z
            .iter()
            .flat_map(move |z| {
                self.y
                    .iter()
                    .flat_map(move |y| self.x.iter().map(move |x| Cell3 { x, y, z }))
            })
            .filter(move |&c| c != center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Extent2, Extent3};

    #[test]
    fn span_zero_radius_is_single_index() {
        let s = AxisSpan::clamped(3, 0, 5);
        assert_eq!(s.len(), 1);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn span_radius_larger_than_axis() {
        let s = AxisSpan::clamped(1, 100, 4);
        assert_eq!(s, AxisSpan { lo: 0, hi: 3 });
    }

    #[test]
    fn span_huge_radius_does_not_overflow() {
        let s = AxisSpan::clamped(2, usize::MAX, 4);
        assert_eq!(s, AxisSpan { lo: 0, hi: 3 });
    }

    // ── Window2 ─────────────────────────────────────────────────

    #[test]
    fn plane_corner_window_is_truncated() {
        let e = Extent2::new(10, 10).unwrap();
        let w = e.window(Cell2 { x: 0, y: 0 }, 2);
        assert_eq!(w.cell_count(), 9);
        assert_eq!(w.neighbour_count(), 8);
        assert_eq!(w.neighbours().count(), 8);
    }

    #[test]
    fn plane_interior_window_is_full() {
        let e = Extent2::new(10, 10).unwrap();
        let w = e.window(Cell2 { x: 5, y: 5 }, 2);
        assert_eq!(w.neighbour_count(), 24);
        assert!(w.neighbours().all(|c| c != w.center()));
    }

    #[test]
    fn plane_degenerate_window_has_no_neighbours() {
        let e = Extent2::new(1, 1).unwrap();
        let w = e.window(Cell2 { x: 0, y: 0 }, 3);
        assert_eq!(w.neighbour_count(), 0);
        assert_eq!(w.neighbours().count(), 0);
    }

    // ── Window3 ─────────────────────────────────────────────────

    #[test]
    fn volume_window_is_anisotropic() {
        let e = Extent3::new(9, 9, 9).unwrap();
        let w = e.window(Cell3 { x: 4, y: 4, z: 4 }, 1, 3);
        assert_eq!(w.x.len(), 3);
        assert_eq!(w.y.len(), 3);
        assert_eq!(w.z.len(), 7);
        assert_eq!(w.neighbours().count(), 3 * 3 * 7 - 1);
    }

    #[test]
    fn volume_corner_window_is_truncated() {
        let e = Extent3::new(5, 5, 5).unwrap();
        let w = e.window(Cell3 { x: 4, y: 0, z: 4 }, 1, 1);
        assert_eq!(w.neighbour_count(), 7);
    }
}
