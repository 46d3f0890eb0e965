//! Owned BGRA raster storage.
//!
//! A [`Surface`] is a dense row-major buffer of [`Bgra`] pixels with no
//! padding: the stride equals the width. All addressing goes through
//! bounds-checked slices; there is no raw-pointer access, and operations
//! that may run per-row in parallel carve the buffer into disjoint
//! mutable row slices instead of sharing it.

use crate::error::{Error, Result};
use crate::pixel::Bgra;
use crate::rect::Rect;

/// A dense, row-major BGRA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<Bgra>,
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Bgra::TRANSPARENT)
    }

    /// Creates a surface filled with one color.
    pub fn filled(width: u32, height: u32, color: Bgra) -> Self {
        Self {
            width,
            height,
            data: vec![color; width as usize * height as usize],
        }
    }

    /// Wraps an existing pixel buffer.
    ///
    /// Fails with [`Error::InvalidDimensions`] when the buffer length
    /// does not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Bgra>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("buffer holds {} pixels, need {expected}", data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Surface width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per row. Equal to the width; rows are never padded.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.width as usize
    }

    /// The covered area as a rectangle anchored at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width as i32, self.height as i32)
    }

    /// `true` when the surface holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `y` as a shared slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Bgra] {
        let stride = self.stride();
        &self.data[y as usize * stride..][..stride]
    }

    /// Row `y` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Bgra] {
        let stride = self.stride();
        &mut self.data[y as usize * stride..][..stride]
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Bgra> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.stride() + x as usize])
        } else {
            None
        }
    }

    /// Pixel at `(x, y)`, or [`Error::OutOfBounds`].
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Result<Bgra> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Writes the pixel at `(x, y)`, failing with [`Error::OutOfBounds`]
    /// outside the surface.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Bgra) -> Result<()> {
        if x < self.width && y < self.height {
            let i = y as usize * self.stride() + x as usize;
            self.data[i] = color;
            Ok(())
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Fills the whole surface with one color.
    pub fn fill(&mut self, color: Bgra) {
        self.data.fill(color);
    }

    /// Fills a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Bgra) {
        let clipped = rect.intersect(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        let left = clipped.left() as usize;
        let width = clipped.width as usize;
        for y in clipped.top()..=clipped.bottom() {
            self.row_mut(y as u32)[left..left + width].fill(color);
        }
    }

    /// The whole buffer in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Bgra] {
        &self.data
    }

    /// The whole buffer in row-major order, mutable. Row `y` occupies
    /// `[y * stride, (y + 1) * stride)`.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Bgra] {
        &mut self.data
    }

    /// Consumes the surface, returning the pixel buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<Bgra> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transparent() {
        let s = Surface::new(3, 2);
        assert_eq!(s.width(), 3);
        assert_eq!(s.height(), 2);
        assert_eq!(s.pixels().len(), 6);
        assert!(s.pixels().iter().all(|p| *p == Bgra::TRANSPARENT));
        assert_eq!(s.bounds(), Rect::new(0, 0, 3, 2));
    }

    #[test]
    fn test_from_pixels_length_check() {
        let ok = Surface::from_pixels(2, 2, vec![Bgra::BLACK; 4]);
        assert!(ok.is_ok());

        let err = Surface::from_pixels(2, 2, vec![Bgra::BLACK; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 2, height: 2, .. }));
    }

    #[test]
    fn test_rows_and_pixels() {
        let mut s = Surface::new(4, 3);
        s.set_pixel(2, 1, Bgra::WHITE).unwrap();
        assert_eq!(s.get_pixel(2, 1), Some(Bgra::WHITE));
        assert_eq!(s.row(1)[2], Bgra::WHITE);
        assert_eq!(s.row(0)[2], Bgra::TRANSPARENT);

        s.row_mut(2).fill(Bgra::BLACK);
        assert!(s.row(2).iter().all(|p| *p == Bgra::BLACK));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut s = Surface::new(2, 2);
        assert_eq!(s.get_pixel(2, 0), None);
        assert!(matches!(s.pixel(0, 2), Err(Error::OutOfBounds { .. })));
        assert!(s.set_pixel(5, 5, Bgra::WHITE).is_err());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut s = Surface::filled(4, 4, Bgra::BLACK);
        s.fill_rect(Rect::new(2, 2, 5, 5), Bgra::WHITE);
        assert_eq!(s.get_pixel(1, 1), Some(Bgra::BLACK));
        assert_eq!(s.get_pixel(2, 2), Some(Bgra::WHITE));
        assert_eq!(s.get_pixel(3, 3), Some(Bgra::WHITE));

        // entirely outside: no-op
        let before = s.clone();
        s.fill_rect(Rect::new(10, 10, 2, 2), Bgra::BLACK);
        assert_eq!(s, before);
    }

    #[test]
    fn test_zero_sized() {
        let s = Surface::new(0, 5);
        assert!(s.is_empty());
        assert!(s.bounds().is_empty());
    }
}
