//! Divide-free reciprocal table for the compositing inner loop.
//!
//! Blending a pixel requires dividing a weighted channel sum by the
//! combined coverage `total` (1..=255). Doing that with an integer divide
//! per channel per pixel is slow, so the engine precomputes one
//! `(mul, add, shift)` triple per possible divisor and replaces the divide
//! with a multiply-add-shift:
//!
//! ```text
//! u / total  ==  (u * mul + add) >> shift      (round half up)
//! ```
//!
//! Each triple is *exact* for every dividend the compositor can produce,
//! i.e. `0..=255*255`: the weighted sum is at most `255 * total`, and the
//! dodge/burn mix functions feed at most `255 * 255`. The table is built
//! once on first use and is immutable afterwards, so lookups are plain
//! reads from any thread.

use std::sync::OnceLock;

/// Largest dividend the compositor ever divides: `255 * 255`.
const MAX_DIVIDEND: u64 = 255 * 255;

/// One fixed-point reciprocal: `u / total == (u * mul + add) >> shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reciprocal {
    /// Multiplier.
    pub mul: u64,
    /// Rounding bias, always `(1 << shift) >> 1`.
    pub add: u64,
    /// Right shift.
    pub shift: u32,
}

impl Reciprocal {
    /// Divides `dividend` by the divisor this entry encodes, rounding
    /// half up. Exact for `dividend` in `0..=255*255`.
    #[inline]
    pub fn div(&self, dividend: i32) -> i32 {
        debug_assert!((0..=MAX_DIVIDEND as i32).contains(&dividend));
        ((dividend as u64 * self.mul + self.add) >> self.shift) as i32
    }
}

static TABLE: OnceLock<[Reciprocal; 256]> = OnceLock::new();

/// The full table, indexed by divisor. Entry 0 is unused (all zero).
pub fn table() -> &'static [Reciprocal; 256] {
    TABLE.get_or_init(build)
}

/// Reciprocal for `total`, which must be in `1..=255`.
#[inline]
pub fn for_total(total: i32) -> Reciprocal {
    debug_assert!((1..=255).contains(&total));
    table()[total as usize]
}

fn build() -> [Reciprocal; 256] {
    let mut entries = [Reciprocal::default(); 256];
    for total in 1..=255u64 {
        entries[total as usize] = find_exact(total);
    }
    entries
}

/// Finds the smallest-shift triple exact over the whole dividend range.
///
/// For a given shift the only candidates worth testing are
/// `floor(2^shift / total)` and its successor; with `shift = 31` the
/// rounded-up multiplier is always exact for dividends up to `255*255`,
/// so the ascending search cannot fail.
fn find_exact(total: u64) -> Reciprocal {
    for shift in 8..=31u32 {
        let add = (1u64 << shift) >> 1;
        let base = (1u64 << shift) / total;
        for mul in [base, base + 1] {
            let entry = Reciprocal { mul, add, shift };
            if is_exact(entry, total) {
                return entry;
            }
        }
    }
    unreachable!("no exact reciprocal for divisor {total}")
}

fn is_exact(entry: Reciprocal, total: u64) -> bool {
    // Error accumulates with the dividend, so walking downwards rejects
    // bad candidates after a handful of probes.
    let half = total / 2;
    (0..=MAX_DIVIDEND)
        .rev()
        .all(|u| (u * entry.mul + entry.add) >> entry.shift == (u + half) / total)
}
