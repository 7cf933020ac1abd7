//! OkLCh: polar form of OkLab.
//!
//! `L` is the OkLab lightness, `C = sqrt(a² + b²)` the chroma and
//! `h = atan2(b, a)` the hue in radians.
//!
//! # Hue invariant
//!
//! The hue of an [`OkLch`] is always in `[0, 2π)`. Constructors, setters and
//! every arithmetic operator wrap it with [`wrap_angle`]; this is the only
//! place where OkLCh arithmetic differs from plain component-wise math:
//!
//! ```rust
//! use okshade_color::OkLch;
//!
//! let x = OkLch::from_degrees(0.5, 0.1, 350.0);
//! let y = OkLch::from_degrees(0.1, 0.0, 30.0);
//! assert!(((x + y).hue_degrees() - 20.0).abs() < 1e-9);
//! ```
//!
//! NaN hues are not wrapped, they stay NaN.

use std::fmt;

use okshade_math::{ColorTriple, RAD_TO_DEG, DEG_TO_RAD, Triple, impl_color_ops, wrap_angle};

use crate::oklab::{lab_to_srgb, srgb_to_lab};
use crate::{OkLab, Srgb};

#[inline]
fn lab_to_lch(lab: Triple) -> Triple {
    let c = (lab.b * lab.b + lab.c * lab.c).sqrt();
    let h = wrap_angle(lab.c.atan2(lab.b));
    Triple::new(lab.a, c, h)
}

#[inline]
fn lch_to_lab(lch: Triple) -> Triple {
    Triple::new(lch.a, lch.b * lch.c.cos(), lch.b * lch.c.sin())
}

/// OkLCh color: lightness, chroma, hue (radians).
///
/// Fields are private to keep the hue invariant; use the accessors and
/// setters.
///
/// # Example
///
/// ```rust
/// use okshade_color::{OkLch, Srgb};
///
/// let red = OkLch::from_srgb(Srgb::new(1.0, 0.0, 0.0));
/// assert!((red.l() - 0.628).abs() < 1e-3);
/// assert!((red.c() - 0.258).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct OkLch {
    l: f64,
    c: f64,
    h: f64,
}

impl OkLch {
    /// Creates a new color; `h` is in radians and gets wrapped into `[0, 2π)`.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h: wrap_angle(h) }
    }

    /// Creates a new color with the hue given in degrees.
    #[inline]
    pub fn from_degrees(l: f64, c: f64, h_deg: f64) -> Self {
        Self::new(l, c, h_deg * DEG_TO_RAD)
    }

    /// Lightness.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Chroma.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Hue in radians, in `[0, 2π)`.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Hue in degrees. For display only, internal math stays in radians.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.h * RAD_TO_DEG
    }

    /// Sets the lightness.
    #[inline]
    pub fn set_l(&mut self, l: f64) {
        self.l = l;
    }

    /// Sets the chroma.
    #[inline]
    pub fn set_c(&mut self, c: f64) {
        self.c = c;
    }

    /// Sets the hue in radians, wrapping it into `[0, 2π)`.
    #[inline]
    pub fn set_h(&mut self, h: f64) {
        self.h = wrap_angle(h);
    }

    /// Converts from OkLab.
    pub fn from_oklab(lab: OkLab) -> Self {
        Self::from_triple(lab_to_lch(lab.to_triple()))
    }

    /// Converts to OkLab.
    pub fn to_oklab(self) -> OkLab {
        OkLab::from_triple(lch_to_lab(self.to_triple()))
    }

    /// Converts from gamma-encoded sRGB in one pass.
    ///
    /// Bit-identical to `OkLch::from_oklab(OkLab::from_srgb(srgb))`.
    pub fn from_srgb(srgb: Srgb) -> Self {
        Self::from_triple(lab_to_lch(srgb_to_lab(srgb.to_triple())))
    }

    /// Converts to gamma-encoded sRGB in one pass. The result may lie
    /// outside `[0, 1]`.
    ///
    /// Bit-identical to `self.to_oklab().to_srgb()`.
    pub fn to_srgb(self) -> Srgb {
        Srgb::from_triple(lab_to_srgb(lch_to_lab(self.to_triple())))
    }

    /// Returns true if the color maps inside the sRGB cube.
    #[inline]
    pub fn is_inside_srgb(&self) -> bool {
        self.to_srgb().is_inside()
    }

    /// Space separated `L C h`, hue in radians or degrees.
    pub fn debug_string(&self, in_degrees: bool) -> String {
        let h = if in_degrees { self.hue_degrees() } else { self.h };
        Triple::new(self.l, self.c, h).to_string()
    }
}

impl ColorTriple for OkLch {
    #[inline]
    fn to_triple(self) -> Triple {
        Triple::new(self.l, self.c, self.h)
    }

    #[inline]
    fn from_triple(t: Triple) -> Self {
        Self { l: t.a, c: t.b, h: t.c }
    }

    #[inline]
    fn normalize(self) -> Self {
        Self { h: wrap_angle(self.h), ..self }
    }
}

impl_color_ops!(OkLch);

impl fmt::Display for OkLch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_triple(), f)
    }
}

impl From<OkLab> for OkLch {
    fn from(lab: OkLab) -> Self {
        Self::from_oklab(lab)
    }
}

impl From<OkLch> for OkLab {
    fn from(lch: OkLch) -> Self {
        lch.to_oklab()
    }
}

impl From<Srgb> for OkLch {
    fn from(srgb: Srgb) -> Self {
        Self::from_srgb(srgb)
    }
}

impl From<OkLch> for Srgb {
    fn from(lch: OkLch) -> Self {
        lch.to_srgb()
    }
}

impl From<[f64; 3]> for OkLch {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<OkLch> for [f64; 3] {
    fn from(lch: OkLch) -> Self {
        lch.to_triple().to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use okshade_math::TAU;
    use std::f64::consts::PI;

    #[test]
    fn test_new_wraps_hue() {
        assert_abs_diff_eq!(OkLch::new(0.5, 0.1, -PI / 2.0).h(), 1.5 * PI, epsilon = 1e-12);
        assert_eq!(OkLch::new(0.5, 0.1, TAU).h(), 0.0);
        assert_abs_diff_eq!(OkLch::from_degrees(0.5, 0.1, 720.0 + 45.0).hue_degrees(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_setters() {
        let mut c = OkLch::default();
        c.set_l(0.7);
        c.set_c(0.2);
        c.set_h(-PI);
        assert_eq!(c.l(), 0.7);
        assert_eq!(c.c(), 0.2);
        assert_abs_diff_eq!(c.h(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_conversion() {
        let lab = OkLab::new(0.6, 0.0, -0.1);
        let lch = OkLch::from_oklab(lab);
        assert_eq!(lch.l(), 0.6);
        assert_abs_diff_eq!(lch.c(), 0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(lch.h(), 1.5 * PI, epsilon = 1e-12);

        let back = lch.to_oklab();
        assert_abs_diff_eq!(back.a, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.b, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let lch = OkLch::from_oklab(OkLab::new(0.4, 0.0, 0.0));
        assert_eq!(lch.c(), 0.0);
        assert_eq!(lch.h(), 0.0);
        assert!(lch.h().is_sign_positive());
    }

    #[test]
    fn test_fused_matches_composition() {
        for srgb in [
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(0.1, 0.7, 0.3),
            Srgb::new(0.02, 0.03, 0.9),
            Srgb::new(0.5, 0.5, 0.5),
        ] {
            let fused = OkLch::from_srgb(srgb);
            let composed = OkLch::from_oklab(OkLab::from_srgb(srgb));
            assert_eq!(fused, composed);
            assert_eq!(fused.to_srgb(), fused.to_oklab().to_srgb());
        }
    }

    #[test]
    fn test_hue_wraps_after_add() {
        let x = OkLch::from_degrees(0.5, 0.1, 350.0);
        let y = OkLch::from_degrees(0.1, 0.05, 30.0);
        let sum = x + y;
        assert_abs_diff_eq!(sum.hue_degrees(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sum.l(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.c(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_hue_wraps_after_every_op() {
        let x = OkLch::from_degrees(0.5, 0.1, 10.0);
        let y = OkLch::from_degrees(0.5, 0.1, 40.0);

        let mut d = x;
        d -= y;
        assert_abs_diff_eq!(d.hue_degrees(), 330.0, epsilon = 1e-9);

        let m = OkLch::new(0.5, 0.1, 4.0) * 3.0;
        assert_abs_diff_eq!(m.h(), 12.0 - TAU, epsilon = 1e-12);

        let p = OkLch::new(0.5, 0.1, 4.0) * OkLch::new(1.0, 1.0, 2.0);
        assert_abs_diff_eq!(p.h(), 8.0 - TAU, epsilon = 1e-12);

        let q = OkLch::new(0.5, 0.1, 1.0) / OkLch::new(1.0, 1.0, 0.1);
        assert_abs_diff_eq!(q.h(), 10.0 - TAU, epsilon = 1e-12);

        for v in [d, m, p, q] {
            assert!(v.h() >= 0.0 && v.h() < TAU);
        }
    }

    #[test]
    fn test_debug_string() {
        let c = OkLch::new(0.5, 0.25, PI);
        assert_eq!(c.debug_string(true), "0.500000 0.250000 180.000000");
        assert_eq!(c.debug_string(false), "0.500000 0.250000 3.141593");
        assert_eq!(c.to_string(), c.debug_string(false));
    }
}
