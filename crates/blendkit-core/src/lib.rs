//! # blendkit-core
//!
//! Core types for the blendkit raster engine.
//!
//! This crate provides the foundational types the operation crates build
//! on:
//!
//! - [`Bgra`] - 4-channel 8-bit pixel with straight alpha
//! - [`Rect`], [`Region`] - integer rectangles with inclusive edges, and
//!   ordered rectangle lists
//! - [`Surface`] - dense row-major pixel buffer with bounds-checked
//!   addressing
//! - [`recip`] - the divide-free reciprocal table the compositor uses
//!
//! ## Design Philosophy
//!
//! Everything is **deterministic byte math**. The pixel format is fixed
//! (BGRA, 8 bits per channel, straight alpha) and every rounding step is
//! fixed-point, so results are bit-identical across platforms and across
//! sequential and parallel execution. There is no floating point on any
//! compositing path and no unsafe pixel addressing.
//!
//! ## Crate Structure
//!
//! ```text
//! blendkit-core (this crate)
//!    ^
//!    |
//!    +-- blendkit-ops (pixel-operation framework, blend modes)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod recip;
pub mod rect;
pub mod surface;

// Re-exports for convenience
pub use error::{Error, Result};
pub use pixel::{clamp, clamp_to_byte, scale, scale_bytes, Bgra};
pub use rect::{Rect, Region};
pub use surface::Surface;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use blendkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{clamp, clamp_to_byte, scale, scale_bytes, Bgra};
    pub use crate::rect::{Rect, Region};
    pub use crate::surface::Surface;
}
