//! OkLab: perceptually uniform Cartesian color space.
//!
//! # Pipeline
//!
//! ```text
//! sRGB --eotf--> linear RGB --RGB_TO_LMS--> LMS --cbrt--> LMS' --LMS_TO_OKLAB--> OkLab
//! sRGB <--oetf-- linear RGB <--LMS_TO_RGB-- LMS <--cube-- LMS' <--OKLAB_TO_LMS-- OkLab
//! ```
//!
//! The matrices are the high-precision variants used by existing OkLab
//! tooling. They are reproduced digit for digit; changing a single constant
//! breaks interoperability of stored OkLab values.

use std::fmt;

use okshade_math::{ColorTriple, Mat3, Triple, impl_color_ops};

use crate::{Srgb, transfer};

/// Linear sRGB -> LMS cone response.
pub const RGB_TO_LMS: Mat3 = Mat3::from_rows([
    [0.41224204988807, 0.53626162185168, 0.05142804288870],
    [0.21194297298929, 0.68070218481804, 0.10737408156507],
    [0.08835888958899, 0.28184744754987, 0.63012965338243],
]);

/// Non-linear LMS -> OkLab.
pub const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.21045425666795, 0.79361779015852, -0.00407204682647],
    [1.97799849510000, -2.42859220500000, 0.45059370990000],
    [0.02590402925006, 0.78277173659806, -0.80867576584811],
]);

/// OkLab -> non-linear LMS.
pub const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.39633779217377, 0.21580375806076],
    [1.0, -0.10556134232366, -0.06385417477171],
    [1.0, -0.08948418209497, -1.29148553786409],
]);

/// LMS -> linear sRGB.
pub const LMS_TO_RGB: Mat3 = Mat3::from_rows([
    [4.07653881638861, -3.30709682773943, 0.23082245163012],
    [-1.26860625095165, 2.60974767679763, -0.34116363525495],
    [-0.00419756377401, -0.70356840947339, 1.70720561792434],
]);

/// Gamma-encoded sRGB components to OkLab components.
#[inline]
pub(crate) fn srgb_to_lab(rgb: Triple) -> Triple {
    let linear = rgb.map(transfer::eotf);
    let lms = (RGB_TO_LMS * linear).map(f64::cbrt);
    LMS_TO_OKLAB * lms
}

/// OkLab components to gamma-encoded sRGB components. No clamping.
#[inline]
pub(crate) fn lab_to_srgb(lab: Triple) -> Triple {
    let lms = (OKLAB_TO_LMS * lab).map(|v| v * v * v);
    let linear = LMS_TO_RGB * lms;
    linear.map(transfer::oetf)
}

/// How [`OkLab::distance`] compares two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMode {
    /// Euclidean distance over `(L, a, b)`.
    #[default]
    Euclidean,
    /// Absolute lightness difference only. Cheaper, ignores hue and chroma.
    Lightness,
}

/// OkLab color.
///
/// `l` is perceptual lightness (0 black, 1 white for in-gamut colors),
/// `a` and `b` are signed green-red and blue-yellow offsets.
///
/// # Example
///
/// ```rust
/// use okshade_color::{OkLab, Srgb};
///
/// let lab = OkLab::from_srgb(Srgb::new(0.2, 0.4, 0.6));
/// let back = lab.to_srgb();
/// assert!((back.g - 0.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OkLab {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl OkLab {
    /// Creates a new color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts from gamma-encoded sRGB.
    pub fn from_srgb(srgb: Srgb) -> Self {
        Self::from_triple(srgb_to_lab(srgb.to_triple()))
    }

    /// Converts to gamma-encoded sRGB. The result may lie outside `[0, 1]`.
    pub fn to_srgb(self) -> Srgb {
        Srgb::from_triple(lab_to_srgb(self.to_triple()))
    }

    /// Returns true if the color maps inside the sRGB cube.
    #[inline]
    pub fn is_inside_srgb(&self) -> bool {
        self.to_srgb().is_inside()
    }

    /// Distance between two colors. Symmetric and non-negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use okshade_color::{DistanceMode, OkLab};
    ///
    /// let x = OkLab::new(0.5, 0.3, 0.0);
    /// let y = OkLab::new(0.2, 0.0, 0.4);
    /// assert!((OkLab::distance(x, y, DistanceMode::Euclidean) - 0.5830951894845301).abs() < 1e-12);
    /// assert!((OkLab::distance(x, y, DistanceMode::Lightness) - 0.3).abs() < 1e-12);
    /// ```
    pub fn distance(x: OkLab, y: OkLab, mode: DistanceMode) -> f64 {
        match mode {
            DistanceMode::Lightness => (x.l - y.l).abs(),
            DistanceMode::Euclidean => (x - y).to_triple().length(),
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn delta_e(self, other: OkLab) -> f64 {
        Self::distance(self, other, DistanceMode::Euclidean)
    }
}

impl ColorTriple for OkLab {
    #[inline]
    fn to_triple(self) -> Triple {
        Triple::new(self.l, self.a, self.b)
    }

    #[inline]
    fn from_triple(t: Triple) -> Self {
        Self::new(t.a, t.b, t.c)
    }
}

impl_color_ops!(OkLab);

impl fmt::Display for OkLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_triple(), f)
    }
}

impl From<Srgb> for OkLab {
    fn from(srgb: Srgb) -> Self {
        Self::from_srgb(srgb)
    }
}

impl From<OkLab> for Srgb {
    fn from(lab: OkLab) -> Self {
        lab.to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_and_black() {
        let white = OkLab::from_srgb(Srgb::WHITE);
        assert_abs_diff_eq!(white.l, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(white.a, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(white.b, 0.0, epsilon = 1e-4);

        let black = OkLab::from_srgb(Srgb::BLACK);
        assert_eq!(black, OkLab::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_primaries() {
        let red = OkLab::from_srgb(Srgb::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(red.l, 0.627987, epsilon = 1e-5);
        assert_abs_diff_eq!(red.a, 0.224840, epsilon = 1e-5);
        assert_abs_diff_eq!(red.b, 0.125799, epsilon = 1e-5);

        let blue = OkLab::from_srgb(Srgb::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(blue.l, 0.451978, epsilon = 1e-5);
        assert_abs_diff_eq!(blue.b, -0.311611, epsilon = 1e-5);
    }

    #[test]
    fn test_matches_reference_expression_order() {
        // Hand-expanded first row of the forward pipeline for mid gray.
        let v = ((0.5_f64 + 0.055) / 1.055).powf(2.4);
        let l = (0.41224204988807 * v + 0.53626162185168 * v + 0.05142804288870 * v).cbrt();
        let m = (0.21194297298929 * v + 0.68070218481804 * v + 0.10737408156507 * v).cbrt();
        let s = (0.08835888958899 * v + 0.28184744754987 * v + 0.63012965338243 * v).cbrt();
        let expected = 0.21045425666795 * l + 0.79361779015852 * m - 0.00407204682647 * s;

        let lab = OkLab::from_srgb(Srgb::new(0.5, 0.5, 0.5));
        assert_eq!(lab.l, expected);
    }

    #[test]
    fn test_roundtrip() {
        let c = Srgb::new(0.9, 0.1, 0.35);
        let back = OkLab::from_srgb(c).to_srgb();
        assert_abs_diff_eq!(back.r, c.r, epsilon = 1e-9);
        assert_abs_diff_eq!(back.g, c.g, epsilon = 1e-9);
        assert_abs_diff_eq!(back.b, c.b, epsilon = 1e-9);
    }

    #[test]
    fn test_is_inside_srgb() {
        assert!(OkLab::new(0.5, 0.0, 0.0).is_inside_srgb());
        assert!(!OkLab::new(0.5, 0.4, 0.0).is_inside_srgb());
        assert!(!OkLab::new(1.5, 0.0, 0.0).is_inside_srgb());
    }

    #[test]
    fn test_distance() {
        let x = OkLab::new(0.5, 0.1, -0.1);
        let y = OkLab::new(0.7, -0.1, 0.0);
        let d = OkLab::distance(x, y, DistanceMode::Euclidean);
        assert_abs_diff_eq!(d, 0.3, epsilon = 1e-12);
        assert_eq!(d, OkLab::distance(y, x, DistanceMode::Euclidean));
        assert_abs_diff_eq!(OkLab::distance(x, y, DistanceMode::Lightness), 0.2, epsilon = 1e-12);
        assert_eq!(x.delta_e(x), 0.0);
    }

    #[test]
    fn test_arithmetic_has_no_postcondition() {
        let x = OkLab::new(0.5, 0.1, -0.2) + OkLab::new(0.1, 0.1, -10.0);
        assert_abs_diff_eq!(x.l, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(x.b, -10.2, epsilon = 1e-12);
        assert_eq!(OkLab::new(1.0, 2.0, 3.0) * 2.0, OkLab::new(2.0, 4.0, 6.0));
    }
}
