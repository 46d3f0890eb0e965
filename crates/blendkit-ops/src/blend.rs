//! Alpha-compositing blend operations.
//!
//! Every blend mode shares one fixed-point compositing skeleton and
//! differs only in its color *mix* function. For left-hand (background)
//! alpha `la` and right-hand (layer) alpha `ra`, with `scale(a, b)` the
//! exact byte product `a * b / 255`:
//!
//! ```text
//! y     = scale(la, 255 - ra)      weight of background showing through
//! x     = scale(la, ra)            weight of the blended color
//! z     = ra - x                   weight of the layer alone
//! total = y + ra                   output alpha (Porter-Duff union)
//!
//! out_c = (lc*y + rc*z + mix(lc, rc)*x) / total     per color channel
//! ```
//!
//! The division by `total` goes through the reciprocal table in
//! [`blendkit_core::recip`], so the whole pipeline is integer math with
//! deterministic round-half-up behavior. When `total` is 0 both inputs
//! are fully transparent and the output is the transparent zero pixel.
//!
//! A [`BlendOp`] pairs a [`BlendMode`] with a layer opacity and
//! implements [`BinaryPixelOp`], so all the rect/region/surface entry
//! points of that trait apply.

use std::fmt;
use std::str::FromStr;

use blendkit_core::{recip, scale, scale_bytes, Bgra};

use crate::binary::BinaryPixelOp;
use crate::{OpsError, OpsResult};

/// How the color channels of two overlapping pixels combine.
///
/// The mode only affects color; output alpha is always the Porter-Duff
/// union of the input alphas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// The layer color replaces the background color.
    #[default]
    Normal,
    /// Product of the channels; always darkens.
    Multiply,
    /// Saturating sum of the channels.
    Additive,
    /// Darkens the background toward the layer.
    ColorBurn,
    /// Brightens the background by the inverse of the layer.
    ColorDodge,
    /// Brightens based on the square of the background.
    Reflect,
    /// [`BlendMode::Reflect`] with the operands swapped.
    Glow,
    /// Multiply in the shadows, screen in the highlights.
    Overlay,
    /// Absolute difference of the channels.
    Difference,
    /// Inverted difference from full intensity.
    Negation,
    /// Channel-wise maximum.
    Lighten,
    /// Channel-wise minimum.
    Darken,
    /// Inverse product of the inverses; always brightens.
    Screen,
    /// Bitwise exclusive or of the channels.
    Xor,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 14] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Additive,
        BlendMode::ColorBurn,
        BlendMode::ColorDodge,
        BlendMode::Reflect,
        BlendMode::Glow,
        BlendMode::Overlay,
        BlendMode::Difference,
        BlendMode::Negation,
        BlendMode::Lighten,
        BlendMode::Darken,
        BlendMode::Screen,
        BlendMode::Xor,
    ];

    /// Canonical lowercase name, accepted back by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Additive => "additive",
            BlendMode::ColorBurn => "colorburn",
            BlendMode::ColorDodge => "colordodge",
            BlendMode::Reflect => "reflect",
            BlendMode::Glow => "glow",
            BlendMode::Overlay => "overlay",
            BlendMode::Difference => "difference",
            BlendMode::Negation => "negation",
            BlendMode::Lighten => "lighten",
            BlendMode::Darken => "darken",
            BlendMode::Screen => "screen",
            BlendMode::Xor => "xor",
        }
    }

    /// A full-opacity [`BlendOp`] for this mode.
    pub const fn op(self) -> BlendOp {
        BlendOp::new(self)
    }

    /// Mixes one pair of color channel values, both in `[0, 255]`.
    ///
    /// The result is always in `[0, 255]`; modes whose formula can
    /// overshoot clamp exactly where the byte pipeline demands it.
    fn mix(self, l: i32, r: i32) -> i32 {
        match self {
            BlendMode::Normal => r,
            BlendMode::Multiply => scale(l, r),
            BlendMode::Additive => (l + r).min(255),
            BlendMode::ColorBurn => {
                if r == 0 {
                    0
                } else {
                    (255 - recip::for_total(r).div((255 - l) * 255)).max(0)
                }
            }
            BlendMode::ColorDodge => {
                if r == 255 {
                    255
                } else {
                    recip::for_total(255 - r).div(l * 255).min(255)
                }
            }
            BlendMode::Reflect => {
                if r == 255 {
                    255
                } else {
                    recip::for_total(255 - r).div(l * l).min(255)
                }
            }
            BlendMode::Glow => BlendMode::Reflect.mix(r, l),
            BlendMode::Overlay => {
                if l < 128 {
                    scale(2 * l, r)
                } else {
                    255 - scale(2 * (255 - l), 255 - r)
                }
            }
            BlendMode::Difference => (l - r).abs(),
            BlendMode::Negation => 255 - (255 - l - r).abs(),
            BlendMode::Lighten => l.max(r),
            BlendMode::Darken => l.min(r),
            BlendMode::Screen => r + l - scale(r, l),
            BlendMode::Xor => l ^ r,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    /// Parses a mode name case-insensitively, tolerating spaces
    /// (`"color dodge"` and `"ColorDodge"` both parse).
    fn from_str(s: &str) -> OpsResult<Self> {
        let folded: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == folded)
            .ok_or_else(|| OpsError::invalid_parameter(format!("unknown blend mode {s:?}")))
    }
}

/// A blend mode paired with a layer opacity, applied through
/// [`BinaryPixelOp`] with the background as the left-hand input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendOp {
    mode: BlendMode,
    opacity: u8,
}

impl BlendOp {
    /// Creates a full-opacity blend operation.
    pub const fn new(mode: BlendMode) -> Self {
        Self { mode, opacity: 255 }
    }

    /// Creates a blend operation whose layer alpha is pre-scaled by
    /// `opacity`.
    ///
    /// Fails with [`OpsError::InvalidParameter`] when `opacity` lies
    /// outside `[0, 255]`.
    pub fn with_opacity(mode: BlendMode, opacity: i32) -> OpsResult<Self> {
        if !(0..=255).contains(&opacity) {
            return Err(OpsError::invalid_parameter(format!(
                "opacity {opacity} outside [0, 255]"
            )));
        }
        Ok(Self {
            mode,
            opacity: opacity as u8,
        })
    }

    /// The blend mode.
    pub const fn mode(&self) -> BlendMode {
        self.mode
    }

    /// The layer opacity, 255 meaning the layer's own alpha is used
    /// unmodified.
    pub const fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Composites one layer pixel over one background pixel.
    pub fn blend(&self, lhs: Bgra, rhs: Bgra) -> Bgra {
        let la = lhs.a as i32;
        let ra = if self.opacity == 255 {
            rhs.a as i32
        } else {
            scale_bytes(rhs.a, self.opacity) as i32
        };

        let y = scale(la, 255 - ra);
        let total = y + ra;
        if total == 0 {
            return Bgra::TRANSPARENT;
        }

        let x = scale(la, ra);
        let z = ra - x;
        let div = recip::for_total(total);
        let mode = self.mode;

        let channel = |lc: u8, rc: u8| -> u8 {
            let (lc, rc) = (lc as i32, rc as i32);
            // weighted sum is at most 255 * total, so the quotient fits a byte
            div.div(lc * y + rc * z + mode.mix(lc, rc) * x) as u8
        };

        Bgra::new(
            channel(lhs.b, rhs.b),
            channel(lhs.g, rhs.g),
            channel(lhs.r, rhs.r),
            total as u8,
        )
    }
}

impl From<BlendMode> for BlendOp {
    fn from(mode: BlendMode) -> Self {
        BlendOp::new(mode)
    }
}

impl BinaryPixelOp for BlendOp {
    #[inline]
    fn apply(&self, lhs: Bgra, rhs: Bgra) -> Bgra {
        self.blend(lhs, rhs)
    }
}
