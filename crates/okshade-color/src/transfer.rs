//! sRGB transfer function.
//!
//! Piecewise curve: a linear segment near black and a 2.4 power curve for
//! the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1], values outside are passed through the same
//!   formulas without clamping
//!
//! # Thresholds
//!
//! The decode threshold is the usual `0.04045`. The encode threshold is
//! `0.00313058`, which is the value existing OkLab tooling uses together with
//! the high-precision matrices in [`crate::oklab`]. Keep both constants as
//! they are, the round-trip tests depend on them.

/// Decode threshold (encoded domain).
pub const EOTF_THRESHOLD: f64 = 0.04045;

/// Encode threshold (linear domain).
pub const OETF_THRESHOLD: f64 = 0.00313058;

/// sRGB EOTF: decodes gamma-encoded sRGB to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use okshade_color::transfer::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= EOTF_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light to gamma-encoded sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.00313058:
///     V = 12.92 * L
/// else:
///     V = L^(1/2.4) * 1.055 - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= OETF_THRESHOLD {
        12.92 * l
    } else {
        (l.powf(1.0 / 2.4) * 1.055) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-6, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_segment() {
        assert_eq!(eotf(0.04), 0.04 / 12.92);
        assert_eq!(oetf(0.002), 12.92 * 0.002);
        // negative light stays on the linear segment
        assert_eq!(oetf(-0.5), -6.46);
    }

    #[test]
    fn test_midpoint() {
        let linear = eotf(0.5);
        assert!((linear - 0.214).abs() < 0.01);
    }
}
