//! Error types for surface construction and addressing.

use thiserror::Error;

/// Convenience alias for core results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`crate::Surface`] construction and checked access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinate outside the surface.
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} surface")]
    OutOfBounds {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Surface width.
        width: u32,
        /// Surface height.
        height: u32,
    },

    /// Dimensions and buffer length disagree, or dimensions are unusable.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// What was wrong.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`].
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`].
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::out_of_bounds(10, 20, 8, 8);
        assert_eq!(e.to_string(), "pixel (10, 20) out of bounds for 8x8 surface");

        let e = Error::invalid_dimensions(4, 4, "buffer holds 15 pixels, need 16");
        assert!(e.to_string().contains("invalid dimensions 4x4"));
    }
}
