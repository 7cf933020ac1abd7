//! Generic three-component numeric vector.
//!
//! [`Triple`] is the shared value type behind every color space in okshade.
//! It carries no interpretation of its components: sRGB stores `(r, g, b)`,
//! OkLab `(L, a, b)` and OkLCh `(L, C, h)` in the same three slots.
//!
//! # Arithmetic
//!
//! All operators are component-wise and perform no validation. Division by
//! a zero component yields `inf` or `NaN`, which propagates silently:
//!
//! ```rust
//! use okshade_math::Triple;
//!
//! let t = Triple::new(1.0, 2.0, 3.0) / Triple::new(0.0, 1.0, 1.0);
//! assert!(t.a.is_infinite());
//! assert_eq!(t.b, 2.0);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

/// An ordered triple of `f64` components.
///
/// # Example
///
/// ```rust
/// use okshade_math::Triple;
///
/// let mut t = Triple::new(0.25, 0.5, 0.75);
/// t += Triple::splat(0.25);
/// t *= 2.0;
/// assert_eq!(t, Triple::new(1.0, 1.5, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    /// First component.
    pub a: f64,
    /// Second component.
    pub b: f64,
    /// Third component.
    pub c: f64,
}

impl Triple {
    /// Zero triple (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One triple (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new triple.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates a triple with all components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.a), f(self.b), f(self.c))
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        (self.a * self.a + self.b * self.b + self.c * self.c).sqrt()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.a.is_nan() || self.b.is_nan() || self.c.is_nan()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.a, self.b, self.c)
    }
}

impl Index<usize> for Triple {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            _ => panic!("Triple index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Triple {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.a,
            1 => &mut self.b,
            2 => &mut self.c,
            _ => panic!("Triple index out of bounds: {}", i),
        }
    }
}

// Component-wise in-place ops; the by-value ops below are built on these.
impl AddAssign for Triple {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.a += rhs.a;
        self.b += rhs.b;
        self.c += rhs.c;
    }
}

impl SubAssign for Triple {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.a -= rhs.a;
        self.b -= rhs.b;
        self.c -= rhs.c;
    }
}

impl MulAssign for Triple {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.a *= rhs.a;
        self.b *= rhs.b;
        self.c *= rhs.c;
    }
}

impl DivAssign for Triple {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.a /= rhs.a;
        self.b /= rhs.b;
        self.c /= rhs.c;
    }
}

impl MulAssign<f64> for Triple {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.a *= rhs;
        self.b *= rhs;
        self.c *= rhs;
    }
}

impl Add for Triple {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Triple {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for Triple {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Div for Triple {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl Mul<f64> for Triple {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: f64) -> Self {
        self *= rhs;
        self
    }
}

impl From<[f64; 3]> for Triple {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Triple> for [f64; 3] {
    #[inline]
    fn from(t: Triple) -> [f64; 3] {
        t.to_array()
    }
}
