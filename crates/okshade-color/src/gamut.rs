//! Gamut mapping by chroma reduction.
//!
//! Perceptual-space operations (interpolation, hue rotation, chroma boosts)
//! can produce OkLCh colors that have no sRGB equivalent. [`OkLch::fallback`]
//! pulls such a color back into the sRGB cube:
//!
//! 1. Lightness is clamped into `[0, 1]`. Black and white have no chroma,
//!    so a clamped lightness of exactly 0 or 1 also zeroes chroma.
//! 2. While the color is outside the cube, chroma is decreased by a fixed
//!    `step`, stopping early once it reaches 0.
//!
//! Hue is never touched, and lightness only changes through the clamp.
//!
//! # Choosing a step
//!
//! The search is linear, so it runs at most `ceil(C / step) + 1` iterations.
//! A large step converges quickly but overshoots the gamut boundary by up
//! to `step`, desaturating more than needed. A small step lands closer to
//! the boundary at proportionally higher cost. [`DEFAULT_STEP`] (0.001) is
//! well below the visible threshold for OkLCh chroma and needs at most a
//! few hundred iterations for any sRGB-adjacent color.
//!
//! # Example
//!
//! ```rust
//! use okshade_color::{OkLch, gamut::DEFAULT_STEP};
//!
//! let mut vivid = OkLch::from_degrees(0.7, 0.4, 140.0);
//! assert!(!vivid.is_inside_srgb());
//!
//! vivid.fallback(DEFAULT_STEP)?;
//! assert!(vivid.is_inside_srgb());
//! assert!(vivid.c() < 0.4);
//! # Ok::<(), okshade_color::ColorError>(())
//! ```

use tracing::{debug, trace};

use crate::{ColorError, ColorResult, OkLch};

/// Default chroma decrement for [`OkLch::fallback`].
pub const DEFAULT_STEP: f64 = 0.001;

impl OkLch {
    /// Reduces chroma in place until the color fits in the sRGB cube.
    ///
    /// Returns the number of chroma decrements performed. Afterwards either
    /// [`OkLch::is_inside_srgb`] holds or chroma is 0 (a lightness of
    /// exactly 1 with zero chroma still lands slightly outside the cube
    /// with these matrices, and there is nothing left to reduce).
    ///
    /// A non-finite chroma, or a decrement too small to change the chroma
    /// at all, collapses chroma to 0 so the search always terminates.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidValue`] if `step` is not finite and positive.
    /// The color is left untouched in that case.
    pub fn fallback(&mut self, step: f64) -> ColorResult<u64> {
        if !(step.is_finite() && step > 0.0) {
            debug!(step, "rejected fallback step");
            return Err(ColorError::InvalidValue(format!(
                "fallback step must be finite and positive, got {}",
                step
            )));
        }
        trace!(l = self.l(), c = self.c(), h = self.h(), step, "fallback");

        self.set_l(self.l().clamp(0.0, 1.0));
        if self.l() == 0.0 || self.l() == 1.0 {
            self.set_c(0.0);
        }
        if !self.c().is_finite() {
            debug!(c = self.c(), "non-finite chroma collapsed to 0");
            self.set_c(0.0);
        }

        let mut iterations: u64 = 0;
        let mut current = self.to_srgb();
        while !current.is_inside() {
            iterations += 1;
            let next = (self.c() - step).max(0.0);
            if next == self.c() && next != 0.0 {
                debug!(c = next, step, "step below chroma precision, collapsing to 0");
                self.set_c(0.0);
            } else {
                self.set_c(next);
            }

            if self.c() == 0.0 {
                break;
            }
            current = self.to_srgb();
        }

        debug!(
            iterations,
            l = self.l(),
            c = self.c(),
            inside = current.is_inside(),
            "fallback done"
        );
        Ok(iterations)
    }

    /// By-value form of [`OkLch::fallback`].
    pub fn gamut_mapped(mut self, step: f64) -> ColorResult<Self> {
        self.fallback(step)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    #[test]
    fn test_in_gamut_is_untouched() {
        let mut c = OkLch::from_srgb(Srgb::new(0.3, 0.6, 0.2));
        let before = c;
        assert_eq!(c.fallback(DEFAULT_STEP), Ok(0));
        assert_eq!(c, before);
    }

    #[test]
    fn test_reduces_chroma_only() {
        let mut c = OkLch::from_degrees(0.7, 0.4, 140.0);
        let h = c.h();
        let n = c.fallback(0.01).unwrap();

        assert!(n > 0);
        assert!(c.is_inside_srgb());
        assert_eq!(c.h(), h);
        assert_eq!(c.l(), 0.7);
        // one step less reduction would still be outside
        let mut prev = c;
        prev.set_c(c.c() + 0.01);
        assert!(!prev.is_inside_srgb());
    }

    #[test]
    fn test_iteration_bound() {
        let mut c = OkLch::from_degrees(0.5, 2.0, 270.0);
        let n = c.fallback(0.05).unwrap();
        assert!(n <= (2.0_f64 / 0.05).ceil() as u64 + 1);
    }

    #[test]
    fn test_lightness_clamp_kills_chroma() {
        let mut c = OkLch::new(1.3, 0.2, 1.0);
        c.fallback(DEFAULT_STEP).unwrap();
        assert_eq!(c.l(), 1.0);
        assert_eq!(c.c(), 0.0);
        assert_eq!(c.h(), 1.0);

        let mut c = OkLch::new(-0.2, 0.2, 1.0);
        c.fallback(DEFAULT_STEP).unwrap();
        assert_eq!(c.l(), 0.0);
        assert_eq!(c.c(), 0.0);
        assert!(c.is_inside_srgb());
    }

    #[test]
    fn test_invalid_step() {
        let mut c = OkLch::from_degrees(0.7, 0.4, 140.0);
        let before = c;
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(c.fallback(step), Err(ColorError::InvalidValue(_))));
        }
        assert_eq!(c, before);
    }

    #[test]
    fn test_degenerate_chroma_terminates() {
        let mut c = OkLch::new(0.5, f64::INFINITY, 0.5);
        c.fallback(DEFAULT_STEP).unwrap();
        assert_eq!(c.c(), 0.0);

        // step far below the ULP of the chroma
        let mut c = OkLch::new(0.5, 1e20, 0.5);
        c.fallback(1e-10).unwrap();
        assert_eq!(c.c(), 0.0);

        let mut c = OkLch::new(0.5, f64::NAN, 0.5);
        c.fallback(DEFAULT_STEP).unwrap();
        assert_eq!(c.c(), 0.0);
    }

    #[test]
    fn test_gamut_mapped() {
        let c = OkLch::from_degrees(0.6, 0.5, 30.0);
        let mapped = c.gamut_mapped(DEFAULT_STEP).unwrap();
        assert!(mapped.is_inside_srgb());
        assert_eq!(mapped.h(), c.h());
        assert!(mapped.c() < c.c());
    }
}
