//! Integer rectangles and rectangle lists.
//!
//! A [`Rect`] stores origin and extent; the derived `right`/`bottom`
//! edges are *inclusive* (`x + width - 1`), matching the coordinate
//! convention of the compositing operations, and a rect is empty exactly
//! when either extent is non-positive. Intersection canonicalizes every
//! empty result to [`Rect::EMPTY`] so empties compare equal regardless of
//! where the miss happened.
//!
//! A [`Region`] is an ordered list of rects. It makes no disjointness
//! promise: an operation applied to a region touches each rect in order,
//! so pixels covered twice are processed twice.

use std::fmt;

/// An axis-aligned integer rectangle with inclusive right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent; non-positive means empty.
    pub width: i32,
    /// Vertical extent; non-positive means empty.
    pub height: i32,
}

impl Rect {
    /// The canonical empty rectangle at the origin.
    pub const EMPTY: Rect = Rect::new(0, 0, 0, 0);

    /// Creates a rectangle from origin and extent.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin with the given extent.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from inclusive edge coordinates.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left + 1, bottom - top + 1)
    }

    /// Left edge (same as `x`).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (same as `y`).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Inclusive right edge, `x + width - 1`.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Inclusive bottom edge, `y + height - 1`.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// `true` when either extent is non-positive.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of pixels covered; 0 for empty rects.
    #[inline]
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    /// `true` when the point lies inside (edges inclusive).
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty()
            && x >= self.left()
            && x <= self.right()
            && y >= self.top()
            && y <= self.bottom()
    }

    /// `true` when every pixel of `other` lies inside `self`.
    /// An empty `other` is contained in anything.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        if other.is_empty() {
            return true;
        }
        !self.is_empty()
            && other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersection of two rectangles, [`Rect::EMPTY`] when they do not
    /// overlap.
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::EMPTY;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left > right || top > bottom {
            Rect::EMPTY
        } else {
            Rect::from_ltrb(left, top, right, bottom)
        }
    }

    /// Smallest rectangle covering both operands; empty operands are
    /// ignored.
    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// An ordered list of rectangles describing where an operation applies.
///
/// Rect order is preserved and overlap is allowed; see the module docs
/// for the double-application consequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// Creates an empty region.
    #[inline]
    pub const fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Creates a region from a list of rectangles, keeping their order.
    #[inline]
    pub fn from_rects(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// Appends a rectangle.
    #[inline]
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// The rectangles in application order.
    #[inline]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Number of rectangles (including empty ones).
    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// `true` when the region holds no rectangles at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Bounding box of the whole region; [`Rect::EMPTY`] when nothing is
    /// covered.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds_of(0, self.rects.len())
    }

    /// Bounding box of the `len` rectangles starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + len` exceeds the rect count, like slice
    /// indexing.
    pub fn bounds_of(&self, start: usize, len: usize) -> Rect {
        self.rects[start..start + len]
            .iter()
            .fold(Rect::EMPTY, |acc, r| acc.union(r))
    }

    /// `true` when every covered pixel lies inside `bounds`.
    ///
    /// A region covering nothing is contained in anything.
    #[inline]
    pub fn contained_in(&self, bounds: Rect) -> bool {
        bounds.contains_rect(&self.bounds())
    }
}

impl From<Rect> for Region {
    #[inline]
    fn from(rect: Rect) -> Self {
        Self { rects: vec![rect] }
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
