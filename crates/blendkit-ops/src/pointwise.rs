//! Ready-made unary pixel operations.

use blendkit_core::Bgra;

use crate::unary::UnaryPixelOp;

/// Inverts the color channels, leaving alpha unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertOp;

impl UnaryPixelOp for InvertOp {
    #[inline]
    fn apply(&self, color: Bgra) -> Bgra {
        Bgra::new(255 - color.b, 255 - color.g, 255 - color.r, color.a)
    }
}

/// Replaces the color channels with their perceptual intensity, leaving
/// alpha unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesaturateOp;

impl UnaryPixelOp for DesaturateOp {
    #[inline]
    fn apply(&self, color: Bgra) -> Bgra {
        let i = color.intensity();
        Bgra::new(i, i, i, color.a)
    }
}
