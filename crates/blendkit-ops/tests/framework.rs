//! Integration tests for the pixel-operation framework: region
//! application semantics, validation ordering, and scheduler
//! determinism.

use blendkit_core::{Bgra, Rect, Region, Surface};
use blendkit_ops::{
    scheduler, BinaryPixelOp, BlendMode, BlendOp, DesaturateOp, InvertOp, OpsError, UnaryPixelOp,
};

/// A surface whose pixels encode their own coordinates, so any misplaced
/// read or write shows up as a wrong value.
fn coordinate_surface(width: u32, height: u32) -> Surface {
    let mut s = Surface::new(width, height);
    for y in 0..height {
        for x in 0..width {
            s.set_pixel(x, y, Bgra::new(x as u8, y as u8, (x + y) as u8, 255))
                .unwrap();
        }
    }
    s
}

#[test]
fn unary_region_touches_exactly_the_covered_pixels() {
    let mut surface = coordinate_surface(8, 8);
    let before = surface.clone();
    let region = Region::from_rects(vec![Rect::new(0, 0, 2, 2), Rect::new(5, 6, 3, 1)]);

    InvertOp.apply_region(&mut surface, &region).unwrap();

    for y in 0..8i32 {
        for x in 0..8i32 {
            let covered = region.rects().iter().any(|r| r.contains(x, y));
            let got = surface.get_pixel(x as u32, y as u32).unwrap();
            let was = before.get_pixel(x as u32, y as u32).unwrap();
            if covered {
                assert_eq!(got, InvertOp.apply(was), "({x}, {y})");
            } else {
                assert_eq!(got, was, "({x}, {y})");
            }
        }
    }
}

#[test]
fn overlapping_rects_apply_once_per_covering_rect() {
    // invert twice is the identity, so the overlap column comes back
    // unchanged while single-covered columns are inverted
    let mut surface = coordinate_surface(6, 1);
    let before = surface.clone();
    let region = Region::from_rects(vec![Rect::new(0, 0, 4, 1), Rect::new(3, 0, 3, 1)]);

    InvertOp.apply_region(&mut surface, &region).unwrap();

    for x in 0..6u32 {
        let was = before.get_pixel(x, 0).unwrap();
        let got = surface.get_pixel(x, 0).unwrap();
        if x == 3 {
            assert_eq!(got, was, "overlap column");
        } else {
            assert_eq!(got, InvertOp.apply(was), "column {x}");
        }
    }
}

#[test]
fn region_validation_precedes_all_writes() {
    let mut surface = coordinate_surface(8, 8);
    let before = surface.clone();
    // first rect is fine; second pokes one pixel past the right edge
    let region = Region::from_rects(vec![Rect::new(0, 0, 8, 8), Rect::new(7, 0, 2, 1)]);

    let err = InvertOp.apply_region(&mut surface, &region).unwrap_err();
    assert!(matches!(err, OpsError::RegionOutOfBounds { .. }));
    assert_eq!(surface, before, "failed apply must not write");
}

#[test]
fn binary_region_validation_covers_both_surfaces() {
    let mut dst = coordinate_surface(8, 8);
    let src = coordinate_surface(8, 4);
    let before = dst.clone();
    // inside dst, outside the shorter src
    let region = Region::from(Rect::new(0, 0, 8, 8));

    let err = BlendOp::new(BlendMode::Normal)
        .apply_to_region(&mut dst, &src, &region)
        .unwrap_err();
    assert!(matches!(err, OpsError::RegionOutOfBounds { .. }));
    assert_eq!(dst, before);
}

#[test]
fn negative_origin_rect_is_rejected() {
    let mut surface = coordinate_surface(8, 8);
    let err = InvertOp
        .apply_rect(&mut surface, Rect::new(-1, 0, 4, 4))
        .unwrap_err();
    assert!(matches!(err, OpsError::RegionOutOfBounds { .. }));
}

#[test]
fn empty_region_and_empty_rects_are_noops() {
    let mut surface = coordinate_surface(8, 8);
    let before = surface.clone();

    InvertOp.apply_region(&mut surface, &Region::new()).unwrap();
    assert_eq!(surface, before);

    InvertOp
        .apply_region(&mut surface, &Region::from(Rect::EMPTY))
        .unwrap();
    assert_eq!(surface, before);

    InvertOp.apply_rect(&mut surface, Rect::new(3, 3, 0, 5)).unwrap();
    assert_eq!(surface, before);
}

#[test]
fn zero_sized_surface_full_apply_is_a_noop() {
    let mut surface = Surface::new(0, 0);
    InvertOp.apply_surface(&mut surface).unwrap();
    DesaturateOp.apply_surface(&mut surface).unwrap();
    assert!(surface.is_empty());
}

#[test]
fn single_row_rect_works() {
    let mut surface = coordinate_surface(8, 8);
    InvertOp.apply_rect(&mut surface, Rect::new(0, 3, 8, 1)).unwrap();
    assert_eq!(
        surface.get_pixel(2, 3),
        Some(InvertOp.apply(Bgra::new(2, 3, 5, 255)))
    );
    assert_eq!(surface.get_pixel(2, 2), Some(Bgra::new(2, 2, 4, 255)));
}

#[test]
fn parallel_and_sequential_runs_are_bit_identical() {
    let src = coordinate_surface(64, 48);
    let layer = {
        let mut s = coordinate_surface(64, 48);
        InvertOp.apply_surface(&mut s).unwrap();
        s
    };
    let region = Region::from_rects(vec![
        Rect::new(0, 0, 64, 10),
        Rect::new(10, 5, 40, 40),
        Rect::new(63, 47, 1, 1),
    ]);
    let op = BlendOp::with_opacity(BlendMode::Overlay, 200).unwrap();

    let mut parallel = src.clone();
    scheduler::set_single_threaded(false);
    op.apply_to_region(&mut parallel, &layer, &region).unwrap();

    let mut sequential = src.clone();
    scheduler::set_single_threaded(true);
    let run = op.apply_to_region(&mut sequential, &layer, &region);
    scheduler::set_single_threaded(false);
    run.unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn unary_parallel_and_sequential_runs_are_bit_identical() {
    let base = coordinate_surface(64, 48);
    let region = Region::from_rects(vec![Rect::new(0, 0, 64, 12), Rect::new(8, 4, 50, 40)]);

    let mut parallel = base.clone();
    scheduler::set_single_threaded(false);
    InvertOp.apply_region(&mut parallel, &region).unwrap();

    let mut sequential = base.clone();
    scheduler::set_single_threaded(true);
    let run = InvertOp.apply_region(&mut sequential, &region);
    scheduler::set_single_threaded(false);
    run.unwrap();

    assert_eq!(parallel, sequential);

    // and a whole-surface op with no region structure at all
    let mut parallel = base.clone();
    DesaturateOp.apply_surface(&mut parallel).unwrap();

    let mut sequential = base.clone();
    scheduler::set_single_threaded(true);
    let run = DesaturateOp.apply_surface(&mut sequential);
    scheduler::set_single_threaded(false);
    run.unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn desaturate_then_desaturate_is_idempotent() {
    let mut once = coordinate_surface(16, 16);
    DesaturateOp.apply_surface(&mut once).unwrap();
    let mut twice = once.clone();
    DesaturateOp.apply_surface(&mut twice).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn src_to_dst_apply_reads_only_the_source() {
    let src = coordinate_surface(8, 8);
    let mut dst = Surface::filled(8, 8, Bgra::new(7, 7, 7, 7));
    InvertOp
        .apply_src_rect(&src, &mut dst, Rect::new(2, 2, 4, 4))
        .unwrap();

    // inside the rect: transformed source, not transformed destination
    assert_eq!(
        dst.get_pixel(3, 3),
        Some(InvertOp.apply(Bgra::new(3, 3, 6, 255)))
    );
    // outside the rect: original destination
    assert_eq!(dst.get_pixel(0, 0), Some(Bgra::new(7, 7, 7, 7)));
    // source untouched
    assert_eq!(src.get_pixel(3, 3), Some(Bgra::new(3, 3, 6, 255)));
}

#[test]
fn three_surface_blend_leaves_inputs_alone() {
    let lhs = coordinate_surface(8, 8);
    let rhs = {
        let mut s = coordinate_surface(8, 8);
        InvertOp.apply_surface(&mut s).unwrap();
        s
    };
    let lhs_before = lhs.clone();
    let rhs_before = rhs.clone();

    let mut dst = Surface::new(8, 8);
    BlendOp::new(BlendMode::Multiply)
        .apply_into(&mut dst, &lhs, &rhs)
        .unwrap();

    assert_eq!(lhs, lhs_before);
    assert_eq!(rhs, rhs_before);
    assert_eq!(
        dst.get_pixel(5, 2),
        Some(BlendOp::new(BlendMode::Multiply).apply(
            lhs.get_pixel(5, 2).unwrap(),
            rhs.get_pixel(5, 2).unwrap()
        ))
    );
}
