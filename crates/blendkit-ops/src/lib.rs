//! # blendkit-ops
//!
//! Region-based pixel operations and alpha compositing over
//! [`blendkit_core`] surfaces.
//!
//! # Modules
//!
//! - [`unary`], [`binary`] - the pixel-operation framework: implement
//!   one scalar method, get validated rect/region/surface application
//! - [`blend`] - the 14 blend modes and the shared fixed-point
//!   compositing skeleton
//! - [`pointwise`] - ready-made unary operations (invert, desaturate)
//! - [`scheduler`] - the row fan-out behind every surface entry point
//! - [`guard`] - the validation each entry point runs before writing
//!
//! # Example
//!
//! ```rust
//! use blendkit_core::{Bgra, Surface};
//! use blendkit_ops::{BinaryPixelOp, BlendMode, BlendOp};
//!
//! let mut background = Surface::filled(64, 64, Bgra::new(30, 30, 30, 255));
//! let layer = Surface::filled(64, 64, Bgra::new(200, 180, 90, 128));
//!
//! BlendOp::new(BlendMode::Screen).apply_to(&mut background, &layer)?;
//! # Ok::<(), blendkit_ops::OpsError>(())
//! ```
//!
//! # Determinism
//!
//! Operations fan out per destination row, on the rayon pool when the
//! default `parallel` feature is enabled. Rows never share output
//! pixels and all math is fixed-point, so sequential and parallel runs
//! produce bit-identical surfaces. Use
//! [`scheduler::set_single_threaded`] to pin everything to the calling
//! thread at runtime.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod binary;
pub mod blend;
pub mod guard;
pub mod pointwise;
pub mod scheduler;
pub mod unary;

pub use binary::BinaryPixelOp;
pub use blend::{BlendMode, BlendOp};
pub use error::{OpsError, OpsResult};
pub use pointwise::{DesaturateOp, InvertOp};
pub use unary::UnaryPixelOp;
