//! Error types for pixel operations.

use blendkit_core::{Rect, Surface};
use thiserror::Error;

/// Error type for pixel operations.
///
/// Every operation validates its inputs before touching a single pixel,
/// so a returned error guarantees the destination is unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Participating surfaces have different dimensions.
    #[error("size mismatch: {expected_width}x{expected_height} vs {actual_width}x{actual_height}")]
    SizeMismatch {
        /// Width of the reference surface.
        expected_width: u32,
        /// Height of the reference surface.
        expected_height: u32,
        /// Width of the offending surface.
        actual_width: u32,
        /// Height of the offending surface.
        actual_height: u32,
    },

    /// A requested rectangle or region extends past a surface.
    #[error("region {region} exceeds surface bounds {bounds}")]
    RegionOutOfBounds {
        /// Bounding box of the request.
        region: Rect,
        /// Bounds of the surface it was checked against.
        bounds: Rect,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl OpsError {
    /// Creates a [`OpsError::SizeMismatch`] from the two surfaces.
    pub fn size_mismatch(expected: &Surface, actual: &Surface) -> Self {
        Self::SizeMismatch {
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
        }
    }

    /// Creates a [`OpsError::RegionOutOfBounds`].
    pub fn region_out_of_bounds(region: Rect, bounds: Rect) -> Self {
        Self::RegionOutOfBounds { region, bounds }
    }

    /// Creates an [`OpsError::InvalidParameter`].
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Result type for pixel operations.
pub type OpsResult<T> = Result<T, OpsError>;
