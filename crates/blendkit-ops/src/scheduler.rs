//! Row-parallel fan-out for rectangle operations.
//!
//! Every operation in this crate is independent per destination row, so
//! the scheduler carves the destination buffer into disjoint `&mut` row
//! slices and hands each row to the callback, either sequentially or on
//! the rayon pool. The callback sees the same rows with the same
//! contents either way, so output is bit-identical regardless of how the
//! work was scheduled.
//!
//! Parallel execution requires the default `parallel` feature and can be
//! disabled at runtime with [`set_single_threaded`] (useful for
//! profiling and for debugging row callbacks). Rects of height 1 always
//! run inline.

use std::sync::atomic::{AtomicBool, Ordering};

use blendkit_core::{Bgra, Rect, Surface};
use tracing::trace;

use crate::OpsResult;

static SINGLE_THREADED: AtomicBool = AtomicBool::new(false);

/// Forces all subsequent row fan-out onto the calling thread.
pub fn set_single_threaded(enabled: bool) {
    SINGLE_THREADED.store(enabled, Ordering::Relaxed);
}

/// `true` when parallel fan-out is disabled at runtime.
pub fn single_threaded() -> bool {
    SINGLE_THREADED.load(Ordering::Relaxed)
}

/// Runs `f` once per row of `rect` within `surface`.
///
/// The callback receives the row's y coordinate and the mutable pixel
/// slice covering exactly the rect's columns of that row. Row order is
/// unspecified under parallel execution; the first error wins and is
/// returned after the fan-out drains.
///
/// The rect must already be validated against the surface bounds; an
/// empty rect is a no-op.
pub fn for_each_row<F>(surface: &mut Surface, rect: Rect, f: F) -> OpsResult<()>
where
    F: Fn(i32, &mut [Bgra]) -> OpsResult<()> + Send + Sync,
{
    if rect.is_empty() {
        return Ok(());
    }

    let stride = surface.stride();
    let top = rect.top() as usize;
    let left = rect.left() as usize;
    let width = rect.width as usize;
    let height = rect.height as usize;
    let band = &mut surface.pixels_mut()[top * stride..(top + height) * stride];

    #[cfg(feature = "parallel")]
    if height > 1 && !single_threaded() {
        use rayon::prelude::*;

        trace!(rows = height, "scheduling rows on rayon pool");
        return band
            .par_chunks_mut(stride)
            .enumerate()
            .try_for_each(|(i, row)| f(rect.y + i as i32, &mut row[left..left + width]));
    }

    trace!(rows = height, "scheduling rows inline");
    for (i, row) in band.chunks_mut(stride).enumerate() {
        f(rect.y + i as i32, &mut row[left..left + width])?;
    }
    Ok(())
}
