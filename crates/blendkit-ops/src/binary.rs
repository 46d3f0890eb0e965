//! Two-input pixel operations.
//!
//! A [`BinaryPixelOp`] combines a left-hand pixel (destination or
//! background) with a right-hand pixel (source or layer being applied)
//! into one output pixel. As with the unary trait, implementors write
//! only [`BinaryPixelOp::apply`]; the surface-level entry points come in
//! two shapes:
//!
//! - *in place*: `dst = op(dst, src)`, the compositing form
//! - *three surface*: `dst = op(lhs, rhs)` with an untouched destination
//!
//! Both validate everything before writing and fan out per destination
//! row.

use blendkit_core::{Bgra, Rect, Region, Surface};
use tracing::trace;

use crate::guard;
use crate::scheduler;
use crate::OpsResult;

/// A pixel operation that combines two input pixels into one output
/// pixel, independent of neighbors and coordinates.
pub trait BinaryPixelOp: Send + Sync {
    /// Combines one left-hand and one right-hand pixel.
    fn apply(&self, lhs: Bgra, rhs: Bgra) -> Bgra;

    /// Combines `lhs` and `rhs` rows into `dst`. All three slices must
    /// have equal length.
    #[inline]
    fn apply_rows(&self, lhs: &[Bgra], rhs: &[Bgra], dst: &mut [Bgra]) {
        debug_assert_eq!(lhs.len(), dst.len());
        debug_assert_eq!(rhs.len(), dst.len());
        for ((d, l), r) in dst.iter_mut().zip(lhs).zip(rhs) {
            *d = self.apply(*l, *r);
        }
    }

    /// Combines `dst` (as left-hand side) with `src` in place. The
    /// slices must have equal length.
    #[inline]
    fn apply_rows_in_place(&self, dst: &mut [Bgra], src: &[Bgra]) {
        debug_assert_eq!(src.len(), dst.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = self.apply(*d, *s);
        }
    }

    /// `dst = op(dst, src)` over one rectangle, which must lie inside
    /// both surfaces.
    fn apply_to_rect(&self, dst: &mut Surface, src: &Surface, rect: Rect) -> OpsResult<()> {
        guard::ensure_rect_in_bounds(rect, dst.bounds())?;
        guard::ensure_rect_in_bounds(rect, src.bounds())?;
        trace!(%rect, "binary apply in place over rect");
        combine_in_place(self, dst, src, rect)
    }

    /// `dst = op(dst, src)` over every rect of `region`, which must lie
    /// inside both surfaces.
    fn apply_to_region(&self, dst: &mut Surface, src: &Surface, region: &Region) -> OpsResult<()> {
        guard::ensure_region_in_bounds(region, dst.bounds())?;
        guard::ensure_region_in_bounds(region, src.bounds())?;
        trace!(rects = region.len(), "binary apply in place over region");
        for rect in region {
            combine_in_place(self, dst, src, *rect)?;
        }
        Ok(())
    }

    /// `dst = op(dst, src)` over the whole surface. The surfaces must
    /// have identical dimensions.
    fn apply_to(&self, dst: &mut Surface, src: &Surface) -> OpsResult<()> {
        guard::ensure_same_size(dst, src)?;
        let bounds = dst.bounds();
        self.apply_to_rect(dst, src, bounds)
    }

    /// `dst = op(lhs, rhs)` over one rectangle, which must lie inside all
    /// three surfaces.
    fn apply_into_rect(
        &self,
        dst: &mut Surface,
        lhs: &Surface,
        rhs: &Surface,
        rect: Rect,
    ) -> OpsResult<()> {
        guard::ensure_rect_in_bounds(rect, dst.bounds())?;
        guard::ensure_rect_in_bounds(rect, lhs.bounds())?;
        guard::ensure_rect_in_bounds(rect, rhs.bounds())?;
        trace!(%rect, "binary apply into dst over rect");
        combine_into(self, dst, lhs, rhs, rect)
    }

    /// `dst = op(lhs, rhs)` over every rect of `region`, which must lie
    /// inside all three surfaces.
    fn apply_into_region(
        &self,
        dst: &mut Surface,
        lhs: &Surface,
        rhs: &Surface,
        region: &Region,
    ) -> OpsResult<()> {
        guard::ensure_region_in_bounds(region, dst.bounds())?;
        guard::ensure_region_in_bounds(region, lhs.bounds())?;
        guard::ensure_region_in_bounds(region, rhs.bounds())?;
        trace!(rects = region.len(), "binary apply into dst over region");
        for rect in region {
            combine_into(self, dst, lhs, rhs, *rect)?;
        }
        Ok(())
    }

    /// `dst = op(lhs, rhs)` over whole surfaces of identical dimensions.
    fn apply_into(&self, dst: &mut Surface, lhs: &Surface, rhs: &Surface) -> OpsResult<()> {
        guard::ensure_same_size(dst, lhs)?;
        guard::ensure_same_size(dst, rhs)?;
        let bounds = dst.bounds();
        self.apply_into_rect(dst, lhs, rhs, bounds)
    }
}

fn combine_in_place<O: BinaryPixelOp + ?Sized>(
    op: &O,
    dst: &mut Surface,
    src: &Surface,
    rect: Rect,
) -> OpsResult<()> {
    let left = rect.left() as usize;
    let width = rect.width.max(0) as usize;
    scheduler::for_each_row(dst, rect, |y, out| {
        let src_row = &src.row(y as u32)[left..left + width];
        op.apply_rows_in_place(out, src_row);
        Ok(())
    })
}

fn combine_into<O: BinaryPixelOp + ?Sized>(
    op: &O,
    dst: &mut Surface,
    lhs: &Surface,
    rhs: &Surface,
    rect: Rect,
) -> OpsResult<()> {
    let left = rect.left() as usize;
    let width = rect.width.max(0) as usize;
    scheduler::for_each_row(dst, rect, |y, out| {
        let lhs_row = &lhs.row(y as u32)[left..left + width];
        let rhs_row = &rhs.row(y as u32)[left..left + width];
        op.apply_rows(lhs_row, rhs_row, out);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    /// Keeps the channel-wise maximum of the two pixels.
    struct MaxOp;

    impl BinaryPixelOp for MaxOp {
        fn apply(&self, lhs: Bgra, rhs: Bgra) -> Bgra {
            Bgra::new(
                lhs.b.max(rhs.b),
                lhs.g.max(rhs.g),
                lhs.r.max(rhs.r),
                lhs.a.max(rhs.a),
            )
        }
    }

    #[test]
    fn test_apply_to_in_place() {
        let mut dst = Surface::filled(3, 3, Bgra::new(10, 200, 10, 200));
        let src = Surface::filled(3, 3, Bgra::new(100, 20, 100, 20));
        MaxOp.apply_to(&mut dst, &src).unwrap();
        assert_eq!(dst.get_pixel(1, 1), Some(Bgra::new(100, 200, 100, 200)));
    }

    #[test]
    fn test_apply_to_rect_touches_only_rect() {
        let mut dst = Surface::filled(4, 4, Bgra::new(0, 0, 0, 0));
        let src = Surface::filled(4, 4, Bgra::new(9, 9, 9, 9));
        MaxOp.apply_to_rect(&mut dst, &src, Rect::new(1, 1, 2, 2)).unwrap();
        assert_eq!(dst.get_pixel(0, 0), Some(Bgra::TRANSPARENT));
        assert_eq!(dst.get_pixel(1, 1), Some(Bgra::new(9, 9, 9, 9)));
        assert_eq!(dst.get_pixel(3, 3), Some(Bgra::TRANSPARENT));
    }

    #[test]
    fn test_apply_into_three_surfaces() {
        let lhs = Surface::filled(2, 2, Bgra::new(5, 0, 5, 0));
        let rhs = Surface::filled(2, 2, Bgra::new(0, 5, 0, 5));
        let mut dst = Surface::filled(2, 2, Bgra::new(99, 99, 99, 99));
        MaxOp.apply_into(&mut dst, &lhs, &rhs).unwrap();
        assert_eq!(dst.get_pixel(0, 0), Some(Bgra::new(5, 5, 5, 5)));
        // inputs untouched
        assert_eq!(lhs.get_pixel(0, 0), Some(Bgra::new(5, 0, 5, 0)));
        assert_eq!(rhs.get_pixel(0, 0), Some(Bgra::new(0, 5, 0, 5)));
    }

    #[test]
    fn test_size_mismatch_checked_before_writing() {
        let mut dst = Surface::filled(3, 3, Bgra::WHITE);
        let before = dst.clone();
        let src = Surface::new(3, 2);
        assert!(matches!(
            MaxOp.apply_to(&mut dst, &src),
            Err(OpsError::SizeMismatch { .. })
        ));
        assert_eq!(dst, before);
    }

    #[test]
    fn test_region_out_of_bounds_rejected() {
        let mut dst = Surface::new(4, 4);
        let src = Surface::new(4, 4);
        let region = Region::from_rects(vec![Rect::new(2, 2, 3, 1)]);
        assert!(matches!(
            MaxOp.apply_to_region(&mut dst, &src, &region),
            Err(OpsError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_region_rects_apply_in_order() {
        // second rect reads what the first rect wrote where they overlap
        struct AddOne;
        impl BinaryPixelOp for AddOne {
            fn apply(&self, lhs: Bgra, rhs: Bgra) -> Bgra {
                lhs.with_alpha(lhs.a.saturating_add(rhs.a))
            }
        }
        let mut dst = Surface::filled(3, 1, Bgra::new(0, 0, 0, 0));
        let src = Surface::filled(3, 1, Bgra::new(0, 0, 0, 1));
        let region = Region::from_rects(vec![Rect::new(0, 0, 2, 1), Rect::new(1, 0, 2, 1)]);
        AddOne.apply_to_region(&mut dst, &src, &region).unwrap();
        let alphas: Vec<u8> = (0..3).map(|x| dst.get_pixel(x, 0).unwrap().a).collect();
        assert_eq!(alphas, vec![1, 2, 1]);
    }
}
