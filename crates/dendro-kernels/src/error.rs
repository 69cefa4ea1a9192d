//! Kernel error types.

use dendro_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors returned by the maxima and fill kernels.
///
/// A rejected fill seed is not an error; it is reported through
/// [`FillOutcome::SeedRejected`](crate::FillOutcome::SeedRejected).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Dimensions or a coordinate failed validation.
    Space(SpaceError),
    /// A buffer does not hold one element per grid cell.
    LengthMismatch {
        /// Which buffer (`"grid"`, `"mask"` or `"output"`).
        buffer: &'static str,
        /// Cell count of the grid.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// The traversal stack could not grow. The fill was aborted and the
    /// mask holds whatever was decided before the failure.
    AllocationFailed {
        /// Stack capacity (in offsets) that was requested.
        requested: usize,
    },
    /// A fill met a mask byte that is not a valid cell state.
    InvalidMaskState {
        /// Offset of the offending byte.
        offset: usize,
        /// The byte found there.
        value: u8,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(err) => write!(f, "invalid grid geometry: {err}"),
            Self::LengthMismatch {
                buffer,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{buffer} buffer has {actual} elements, grid has {expected} cells"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(
                    f,
                    "fill stack allocation failed: requested capacity {requested}"
                )
            }
            Self::InvalidMaskState { offset, value } => {
                write!(f, "invalid fill mask byte {value} at offset {offset}")
            }
        }
    }
}

impl Error for KernelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for KernelError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}

/// Check that `buffer` holds exactly `expected` elements.
pub(crate) fn check_len(
    buffer: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), KernelError> {
    if expected == actual {
        Ok(())
    } else {
        Err(KernelError::LengthMismatch {
            buffer,
            expected,
            actual,
        })
    }
}
