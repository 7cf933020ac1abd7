//! Gamma-encoded sRGB colors.
//!
//! [`Srgb`] stores display-referred components that are nominally in
//! `[0, 1]`. Nothing enforces the range: conversions from OkLab/OkLCh may
//! produce values outside the cube, and [`Srgb::is_inside`] is how callers
//! find out.
//!
//! # Usage
//!
//! ```rust
//! use okshade_color::Srgb;
//!
//! let c = Srgb::from_hex("#1A2B3C")?;
//! assert_eq!(c.to_u8_array(), [0x1A, 0x2B, 0x3C]);
//! assert_eq!(c.to_hex(), "1A2B3C");
//! # Ok::<(), okshade_color::ColorError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use okshade_math::{ColorTriple, Triple, impl_color_ops};

use crate::{ColorError, ColorResult};

const R_MASK: u32 = 0xFF0000;
const G_MASK: u32 = 0x00FF00;
const B_MASK: u32 = 0x0000FF;

/// sRGB color with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Srgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit components (`v / 255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(u8_to_unit(r), u8_to_unit(g), u8_to_unit(b))
    }

    /// Red as an 8-bit value.
    #[inline]
    pub fn r_u8(&self) -> u8 {
        unit_to_u8(self.r)
    }

    /// Green as an 8-bit value.
    #[inline]
    pub fn g_u8(&self) -> u8 {
        unit_to_u8(self.g)
    }

    /// Blue as an 8-bit value.
    #[inline]
    pub fn b_u8(&self) -> u8 {
        unit_to_u8(self.b)
    }

    /// All three components as 8-bit values.
    #[inline]
    pub fn to_u8_array(&self) -> [u8; 3] {
        [self.r_u8(), self.g_u8(), self.b_u8()]
    }

    /// Returns true if every component lies in `[0, 1]`.
    ///
    /// NaN components are never inside.
    #[inline]
    pub fn is_inside(&self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }

    /// Clamps every component into `[0, 1]` in place.
    #[inline]
    pub fn clamp(&mut self) {
        *self = self.clamped();
    }

    /// Returns a copy with every component clamped into `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Parses a 24-bit hex color such as `"1A2B3C"` or `"#ff8000"`.
    ///
    /// Exactly six hex digits are required. Case is ignored.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix alone would also accept a sign
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;

        Ok(Self::from_u8(
            ((value & R_MASK) >> 16) as u8,
            ((value & G_MASK) >> 8) as u8,
            (value & B_MASK) as u8,
        ))
    }

    /// Formats as six uppercase hex digits, without a `#` prefix.
    ///
    /// Components are quantized with the same rounding and clamping as
    /// [`Srgb::r_u8`].
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8_array();
        let packed = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
        format!("{:06X}", packed)
    }

    /// Components multiplied by `max_value`, space separated.
    ///
    /// `debug_scaled(255.0)` shows unquantized byte values.
    pub fn debug_scaled(&self, max_value: f64) -> String {
        (self.to_triple() * max_value).to_string()
    }

    /// Quantized 8-bit components, space separated.
    pub fn debug_u8(&self) -> String {
        let [r, g, b] = self.to_u8_array();
        format!("{} {} {}", r, g, b)
    }
}

/// Converts a byte to `[0, 1]`.
#[inline]
pub fn u8_to_unit(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Quantizes a `[0, 1]` value to a byte: scale by 255, round to nearest,
/// clamp to `[0, 255]`. NaN maps to 0.
#[inline]
pub fn unit_to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl ColorTriple for Srgb {
    #[inline]
    fn to_triple(self) -> Triple {
        Triple::new(self.r, self.g, self.b)
    }

    #[inline]
    fn from_triple(t: Triple) -> Self {
        Self::new(t.a, t.b, t.c)
    }
}

impl_color_ops!(Srgb);

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_triple(), f)
    }
}

impl FromStr for Srgb {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::from_hex(s.trim())
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(v: [u8; 3]) -> Self {
        Self::from_u8(v[0], v[1], v[2])
    }
}
