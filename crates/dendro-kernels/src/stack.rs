//! Growable LIFO stack of linear offsets for region growing.
//!
//! The stack starts small (one leading-axis length) and doubles whenever
//! the free headroom drops below a margin that covers every neighbour a
//! single pop can push. Growth is capped at the grid cell count: a fill
//! never pushes the same offset twice, so the stack can never hold more.
//! Growth goes through `try_reserve_exact`, so an allocation failure is
//! reported instead of aborting the process.

use crate::error::KernelError;

/// Headroom kept free on a plane fill (8 full-connectivity neighbours,
/// rounded up).
pub const PLANE_MARGIN: usize = 10;

/// Headroom kept free on a volume fill (26 full-connectivity neighbours,
/// rounded up).
pub const VOLUME_MARGIN: usize = 30;

/// Headroom margin for an `ndim`-dimensional fill.
pub const fn margin_for(ndim: usize) -> usize {
    if ndim <= 2 {
        PLANE_MARGIN
    } else {
        VOLUME_MARGIN
    }
}

/// Offset stack owned by a single fill invocation.
#[derive(Debug)]
pub struct OffsetStack {
    items: Vec<usize>,
    /// Logical capacity; the backing `Vec` holds at least this much.
    capacity: usize,
    /// Growth never goes past this (the grid cell count).
    max_capacity: usize,
    /// Optional caller-imposed ceiling below `max_capacity`.
    limit: Option<usize>,
    margin: usize,
}

impl OffsetStack {
    /// Allocate a stack with `initial` slots that may grow to `max_capacity`.
    ///
    /// `initial` is clamped to `[1, max_capacity]` and to `limit`.
    pub fn new(
        initial: usize,
        max_capacity: usize,
        margin: usize,
        limit: Option<usize>,
    ) -> Result<Self, KernelError> {
        let max_capacity = max_capacity.max(1);
        let mut capacity = initial.clamp(1, max_capacity);
        if let Some(limit) = limit {
            capacity = capacity.min(limit.max(1));
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| KernelError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self {
            items,
            capacity,
            max_capacity,
            limit,
            margin,
        })
    }

    /// Push an offset. Callers keep headroom via
    /// [`ensure_headroom`](Self::ensure_headroom) before each expansion.
    #[inline]
    pub fn push(&mut self, offset: usize) {
        self.items.push(offset);
    }

    /// Pop the most recently pushed offset.
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    /// Number of offsets on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots before the logical capacity is reached.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    /// Double the capacity (repeatedly, for a stack that started below the
    /// margin) if fewer than `margin` slots are free.
    ///
    /// Returns `Ok(true)` if the stack grew. Once the capacity reaches the
    /// cell count no further growth is needed and `Ok(false)` is returned
    /// regardless of headroom.
    ///
    /// # Errors
    ///
    /// `KernelError::AllocationFailed` if the reservation fails or the
    /// configured limit leaves fewer than `margin` free slots.
    pub fn ensure_headroom(&mut self) -> Result<bool, KernelError> {
        if self.items.len() + self.margin <= self.capacity || self.capacity >= self.max_capacity {
            return Ok(false);
        }
        let needed = self.items.len() + self.margin;
        let mut wanted = self.capacity.saturating_mul(2);
        while wanted < needed && wanted < self.max_capacity {
            wanted = wanted.saturating_mul(2);
        }
        let wanted = wanted.min(self.max_capacity);
        let target = match self.limit {
            Some(limit) => wanted.min(limit),
            None => wanted,
        };
        // A limited stack that cannot cover the margin would overrun the
        // limit on the next expansion.
        if target <= self.capacity || (target < needed && target < self.max_capacity) {
            return Err(KernelError::AllocationFailed { requested: wanted });
        }
        let additional = target - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| KernelError::AllocationFailed { requested: target })?;
        log::trace!("fill stack grew from {} to {target} offsets", self.capacity);
        self.capacity = target;
        Ok(true)
    }
}
