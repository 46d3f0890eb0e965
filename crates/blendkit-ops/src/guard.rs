//! Input validation guards for pixel operations.
//!
//! Operations never write partial output: each entry point runs the
//! relevant guards here before its first pixel access, so any error
//! leaves every surface untouched.
//!
//! # Example
//!
//! ```rust
//! use blendkit_core::{Rect, Surface};
//! use blendkit_ops::guard::ensure_rect_in_bounds;
//!
//! let surface = Surface::new(8, 8);
//! assert!(ensure_rect_in_bounds(Rect::new(0, 0, 8, 8), surface.bounds()).is_ok());
//! assert!(ensure_rect_in_bounds(Rect::new(4, 4, 8, 8), surface.bounds()).is_err());
//! ```

use blendkit_core::{Rect, Region, Surface};

use crate::{OpsError, OpsResult};

/// Validates that `rect` lies fully inside `bounds`.
///
/// Empty rects pass: they cover nothing, so an operation over them is a
/// no-op rather than an error.
pub fn ensure_rect_in_bounds(rect: Rect, bounds: Rect) -> OpsResult<()> {
    if bounds.contains_rect(&rect) {
        Ok(())
    } else {
        Err(OpsError::region_out_of_bounds(rect, bounds))
    }
}

/// Validates that every pixel covered by `region` lies inside `bounds`.
///
/// The check uses the region's bounding box, so the error reports the
/// overall extent rather than the first offending rect.
pub fn ensure_region_in_bounds(region: &Region, bounds: Rect) -> OpsResult<()> {
    if region.contained_in(bounds) {
        Ok(())
    } else {
        Err(OpsError::region_out_of_bounds(region.bounds(), bounds))
    }
}

/// Validates that two surfaces have identical dimensions.
pub fn ensure_same_size(expected: &Surface, actual: &Surface) -> OpsResult<()> {
    if expected.width() == actual.width() && expected.height() == actual.height() {
        Ok(())
    } else {
        Err(OpsError::size_mismatch(expected, actual))
    }
}
