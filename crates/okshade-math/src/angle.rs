//! Angle constants and circular arithmetic.

/// Full turn in radians (2π).
pub const TAU: f64 = std::f64::consts::TAU;

/// Radians to degrees factor.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Degrees to radians factor.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Modulo that never returns a negative value.
///
/// For finite `x` and positive `m` the result lies in `[0, m)`:
///
/// - negative inputs wrap from the top (`-0.5` mod `1` is `0.5`)
/// - exact multiples of `m`, including `m` itself, map to `0`
/// - a tiny negative input whose wrapped value rounds up to exactly `m`
///   maps to `0`
/// - `-0.0` maps to `+0.0`
///
/// NaN and infinite `x` give NaN.
///
/// # Example
///
/// ```rust
/// use okshade_math::{unsigned_mod, TAU};
///
/// assert_eq!(unsigned_mod(-1.0, 4.0), 3.0);
/// assert_eq!(unsigned_mod(TAU, TAU), 0.0);
/// ```
#[inline]
pub fn unsigned_mod(x: f64, m: f64) -> f64 {
    let r = x.rem_euclid(m);
    if r >= m {
        0.0
    } else {
        // -0.0 + 0.0 == +0.0
        r + 0.0
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
#[inline]
pub fn wrap_angle(rad: f64) -> f64 {
    unsigned_mod(rad, TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_positive_values() {
        assert_eq!(unsigned_mod(5.0, 4.0), 1.0);
        assert_eq!(unsigned_mod(3.5, 4.0), 3.5);
        assert_eq!(unsigned_mod(0.0, 4.0), 0.0);
    }

    #[test]
    fn test_negative_values_wrap() {
        assert_eq!(unsigned_mod(-1.0, 4.0), 3.0);
        assert_eq!(unsigned_mod(-5.0, 4.0), 3.0);
        assert_abs_diff_eq!(wrap_angle(-std::f64::consts::FRAC_PI_2), 1.5 * std::f64::consts::PI);
    }

    #[test]
    fn test_exact_divisor_maps_to_zero() {
        assert_eq!(unsigned_mod(TAU, TAU), 0.0);
        assert_eq!(unsigned_mod(2.0 * TAU, TAU), 0.0);
        assert_eq!(unsigned_mod(-TAU, TAU), 0.0);
    }

    #[test]
    fn test_tiny_negative_stays_below_divisor() {
        let r = unsigned_mod(-1e-300, TAU);
        assert!(r >= 0.0 && r < TAU, "r={}", r);
        let r = unsigned_mod(-f64::EPSILON * 1e-3, TAU);
        assert!(r >= 0.0 && r < TAU, "r={}", r);
    }

    #[test]
    fn test_negative_zero() {
        let r = unsigned_mod(-0.0, TAU);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_non_finite() {
        assert!(unsigned_mod(f64::NAN, TAU).is_nan());
        assert!(unsigned_mod(f64::INFINITY, TAU).is_nan());
    }

    #[test]
    fn test_degree_factors() {
        assert_abs_diff_eq!(180.0 * DEG_TO_RAD, std::f64::consts::PI);
        assert_abs_diff_eq!(std::f64::consts::PI * RAD_TO_DEG, 180.0);
    }
}
