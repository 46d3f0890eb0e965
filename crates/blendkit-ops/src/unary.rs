//! One-input pixel operations.
//!
//! A [`UnaryPixelOp`] is a pure pixel-to-pixel function lifted over rows,
//! rectangles, regions, and whole surfaces by the trait's provided
//! methods. Implementors write exactly one method, [`UnaryPixelOp::apply`];
//! everything else (validation, row scheduling, in-place vs.
//! source-to-destination plumbing) is shared.
//!
//! Region application walks the rects in order. Regions are allowed to
//! overlap themselves, in which case the overlapped pixels are processed
//! once per covering rect.

use blendkit_core::{Bgra, Rect, Region, Surface};
use tracing::trace;

use crate::guard;
use crate::scheduler;
use crate::OpsResult;

/// A pixel operation that maps each input pixel to one output pixel,
/// independent of its neighbors and its coordinates.
pub trait UnaryPixelOp: Send + Sync {
    /// Transforms one pixel.
    fn apply(&self, color: Bgra) -> Bgra;

    /// Transforms a row in place.
    #[inline]
    fn apply_row(&self, row: &mut [Bgra]) {
        for px in row.iter_mut() {
            *px = self.apply(*px);
        }
    }

    /// Transforms `src` into `dst`, pixel for pixel. The slices must have
    /// equal length.
    #[inline]
    fn apply_row_into(&self, src: &[Bgra], dst: &mut [Bgra]) {
        debug_assert_eq!(src.len(), dst.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = self.apply(*s);
        }
    }

    /// Applies the operation in place over one rectangle of `surface`.
    fn apply_rect(&self, surface: &mut Surface, rect: Rect) -> OpsResult<()> {
        guard::ensure_rect_in_bounds(rect, surface.bounds())?;
        trace!(%rect, "unary apply over rect");
        scheduler::for_each_row(surface, rect, |_, row| {
            self.apply_row(row);
            Ok(())
        })
    }

    /// Applies the operation in place over every rect of `region`.
    ///
    /// The whole region is validated first, so either all rects run or
    /// none do.
    fn apply_region(&self, surface: &mut Surface, region: &Region) -> OpsResult<()> {
        guard::ensure_region_in_bounds(region, surface.bounds())?;
        trace!(rects = region.len(), "unary apply over region");
        for rect in region {
            scheduler::for_each_row(surface, *rect, |_, row| {
                self.apply_row(row);
                Ok(())
            })?;
        }
        Ok(())
    }

    /// Applies the operation in place over the whole surface.
    fn apply_surface(&self, surface: &mut Surface) -> OpsResult<()> {
        let bounds = surface.bounds();
        self.apply_rect(surface, bounds)
    }

    /// Reads `src` and writes transformed pixels to `dst` over one
    /// rectangle, which must lie inside both surfaces.
    fn apply_src_rect(&self, src: &Surface, dst: &mut Surface, rect: Rect) -> OpsResult<()> {
        guard::ensure_rect_in_bounds(rect, src.bounds())?;
        guard::ensure_rect_in_bounds(rect, dst.bounds())?;
        trace!(%rect, "unary apply src to dst over rect");
        copy_transform(self, src, dst, rect)
    }

    /// Reads `src` and writes transformed pixels to `dst` over every rect
    /// of `region`, which must lie inside both surfaces.
    fn apply_src_region(&self, src: &Surface, dst: &mut Surface, region: &Region) -> OpsResult<()> {
        guard::ensure_region_in_bounds(region, src.bounds())?;
        guard::ensure_region_in_bounds(region, dst.bounds())?;
        trace!(rects = region.len(), "unary apply src to dst over region");
        for rect in region {
            copy_transform(self, src, dst, *rect)?;
        }
        Ok(())
    }

    /// Reads all of `src` and writes transformed pixels to `dst`. The
    /// surfaces must have identical dimensions.
    fn apply_src(&self, src: &Surface, dst: &mut Surface) -> OpsResult<()> {
        guard::ensure_same_size(src, dst)?;
        let bounds = src.bounds();
        self.apply_src_rect(src, dst, bounds)
    }
}

fn copy_transform<O: UnaryPixelOp + ?Sized>(
    op: &O,
    src: &Surface,
    dst: &mut Surface,
    rect: Rect,
) -> OpsResult<()> {
    let left = rect.left() as usize;
    let width = rect.width.max(0) as usize;
    scheduler::for_each_row(dst, rect, |y, out| {
        let src_row = &src.row(y as u32)[left..left + width];
        op.apply_row_into(src_row, out);
        Ok(())
    })
}
