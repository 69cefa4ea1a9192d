//! Kernel configuration parameters.

use dendro_core::Connectivity;

/// Comparison window radii for local-maxima detection.
///
/// `radius_xy` applies to x and y; `radius_z` applies to the third
/// (spectral) axis of a volume and is ignored for planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaximaWindow {
    /// Half-width of the window along x and y.
    pub radius_xy: usize,
    /// Half-width of the window along z.
    pub radius_z: usize,
}

impl MaximaWindow {
    /// Default radius on every axis.
    pub const DEFAULT_RADIUS: usize = 1;

    /// Window with independent spatial and spectral radii.
    pub const fn new(radius_xy: usize, radius_z: usize) -> Self {
        Self {
            radius_xy,
            radius_z,
        }
    }

    /// Window with the same radius on every axis.
    pub const fn isotropic(radius: usize) -> Self {
        Self::new(radius, radius)
    }
}

impl Default for MaximaWindow {
    fn default() -> Self {
        Self::isotropic(Self::DEFAULT_RADIUS)
    }
}

/// Configuration for a threshold flood fill.
///
/// Cells join the region when their value is strictly greater than
/// `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillConfig {
    /// Which neighbours count as adjacent.
    pub connectivity: Connectivity,
    /// Values at or below this are excluded.
    pub threshold: f64,
    /// Ceiling on traversal stack capacity, in offsets.
    ///
    /// The stack never holds more offsets than this. A fill that would need
    /// more (including headroom for one cell's neighbours) aborts with
    /// [`KernelError::AllocationFailed`](crate::KernelError::AllocationFailed),
    /// exactly as a failed allocation would. `None` means the stack may
    /// grow up to the grid cell count.
    pub stack_limit: Option<usize>,
}

impl FillConfig {
    /// Default threshold.
    pub const DEFAULT_THRESHOLD: f64 = 0.0;

    /// Unlimited fill with the given connectivity and threshold.
    pub const fn new(connectivity: Connectivity, threshold: f64) -> Self {
        Self {
            connectivity,
            threshold,
            stack_limit: None,
        }
    }

    /// Create a new builder for configuring a fill.
    pub fn builder() -> FillConfigBuilder {
        FillConfigBuilder {
            connectivity: Connectivity::default(),
            threshold: Self::DEFAULT_THRESHOLD,
            stack_limit: None,
        }
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self::new(Connectivity::default(), Self::DEFAULT_THRESHOLD)
    }
}

/// Builder for [`FillConfig`].
pub struct FillConfigBuilder {
    connectivity: Connectivity,
    threshold: f64,
    stack_limit: Option<usize>,
}

impl FillConfigBuilder {
    /// Set the connectivity (default: Full).
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the threshold (default: 0.0).
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Cap the traversal stack capacity (default: no cap).
    pub fn stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    /// Build the config, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `threshold` is NaN
    /// - `stack_limit` is 0
    pub fn build(self) -> Result<FillConfig, String> {
        if self.threshold.is_nan() {
            return Err("threshold must not be NaN".to_string());
        }
        if self.stack_limit == Some(0) {
            return Err("stack_limit must be >= 1".to_string());
        }
        Ok(FillConfig {
            connectivity: self.connectivity,
            threshold: self.threshold,
            stack_limit: self.stack_limit,
        })
    }
}
