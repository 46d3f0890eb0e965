//! The `Bgra` pixel type and byte-domain math helpers.
//!
//! Everything in this engine operates on fixed 4-channel 8-bit color with
//! straight (non-premultiplied) alpha. The channel order in memory is
//! B, G, R, A — the packed [`u32`] form puts blue in the low byte and alpha
//! in the high byte.
//!
//! # Fixed-point arithmetic
//!
//! Compositing never divides at runtime. [`scale`] implements the exact
//! nearest-integer `a * b / 255` using the `+0x80` shift idiom; division by
//! an arbitrary coverage total goes through [`crate::recip`]. Reproducing
//! these idioms exactly (rather than rounding through floating point) is
//! what keeps output bit-identical across platforms and thread counts.
//!
//! # Example
//!
//! ```rust
//! use blendkit_core::Bgra;
//!
//! let c = Bgra::new(255, 0, 0, 255); // opaque blue
//! assert_eq!(c.to_u32(), 0xFF0000FF);
//! assert_eq!(Bgra::from_u32(c.to_u32()), c);
//! ```

use std::fmt;

/// A 4-channel 8-bit pixel: blue, green, red, alpha.
///
/// Field order matches the in-memory layout of a packed BGRA raster, so a
/// `&[Bgra]` row can be reinterpreted as raw bytes without shuffling.
/// Alpha is straight, never premultiplied. Plain `Copy` value type; the
/// engine never owns pixel storage, only reads and writes through the
/// caller's [`crate::Surface`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bgra {
    /// Blue channel.
    pub b: u8,
    /// Green channel.
    pub g: u8,
    /// Red channel.
    pub r: u8,
    /// Alpha channel (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Bgra {
    /// Fully transparent zero pixel (all channels 0).
    pub const TRANSPARENT: Bgra = Bgra::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Bgra = Bgra::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Bgra = Bgra::new(255, 255, 255, 255);

    /// Creates a pixel from channel values in B, G, R, A order.
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Creates a pixel from channel values in the conventional R, G, B, A order.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Creates an opaque pixel from color channels.
    #[inline]
    pub const fn opaque(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    /// Unpacks a pixel from its 32-bit form (B low byte, A high byte).
    #[inline]
    pub const fn from_u32(bgra: u32) -> Self {
        Self {
            b: (bgra & 0xFF) as u8,
            g: ((bgra >> 8) & 0xFF) as u8,
            r: ((bgra >> 16) & 0xFF) as u8,
            a: ((bgra >> 24) & 0xFF) as u8,
        }
    }

    /// Packs the pixel into its 32-bit form (B low byte, A high byte).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.b as u32 | (self.g as u32) << 8 | (self.r as u32) << 16 | (self.a as u32) << 24
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Perceptual intensity of the color channels as a byte.
    ///
    /// Uses the fixed-point Rec.601-style weights
    /// `(7471*B + 38470*G + 19595*R) >> 16`.
    #[inline]
    pub const fn intensity(self) -> u8 {
        ((7471 * self.b as u32 + 38470 * self.g as u32 + 19595 * self.r as u32) >> 16) as u8
    }

    /// `true` when alpha is 0.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// `true` when alpha is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<u32> for Bgra {
    #[inline]
    fn from(bgra: u32) -> Self {
        Bgra::from_u32(bgra)
    }
}

impl From<Bgra> for u32 {
    #[inline]
    fn from(c: Bgra) -> Self {
        c.to_u32()
    }
}

impl fmt::Display for Bgra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bgra({}, {}, {}, a={})", self.b, self.g, self.r, self.a)
    }
}

/// Clamps `x` into `[min, max]`.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, min: T, max: T) -> T {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Saturates an integer to the byte range.
#[inline]
pub const fn clamp_to_byte(x: i32) -> u8 {
    if x > 255 {
        255
    } else if x < 0 {
        0
    } else {
        x as u8
    }
}

/// Saturates a float to the byte range, truncating the fraction.
#[inline]
pub fn clamp_to_byte_f32(x: f32) -> u8 {
    if x > 255.0 {
        255
    } else if x < 0.0 {
        0
    } else {
        x as u8
    }
}

/// Saturates a double to the byte range, truncating the fraction.
#[inline]
pub fn clamp_to_byte_f64(x: f64) -> u8 {
    if x > 255.0 {
        255
    } else if x < 0.0 {
        0
    } else {
        x as u8
    }
}

/// Exact nearest-integer `a * b / 255` for byte-range operands.
///
/// This is the `+0x80; ((r >> 8) + r) >> 8` idiom every rounding step of
/// the compositor uses. Inputs must lie in `[0, 255]`.
#[inline]
pub const fn scale(a: i32, b: i32) -> i32 {
    let r = a * b + 0x80;
    ((r >> 8) + r) >> 8
}

/// Byte form of [`scale`].
#[inline]
pub const fn scale_bytes(a: u8, b: u8) -> u8 {
    scale(a as i32, b as i32) as u8
}
