//! Capability interface shared by all color-space value types.
//!
//! Every color space stores three `f64` components and gets its arithmetic
//! from [`Triple`]. A space differs only in the post-condition it applies
//! after an arithmetic mutation: Cartesian spaces keep the result as is,
//! polar spaces wrap their hue back into `[0, 2π)`.
//!
//! [`impl_color_ops!`](crate::impl_color_ops) derives the operator set from
//! a [`ColorTriple`] implementation:
//!
//! ```text
//! lhs op rhs  ==  from_triple(lhs.to_triple() op rhs.to_triple()).normalize()
//! ```

use crate::Triple;

/// A color value that can be viewed as a generic [`Triple`].
pub trait ColorTriple: Copy {
    /// Returns the raw components.
    fn to_triple(self) -> Triple;

    /// Rebuilds the value from raw components, without applying
    /// [`normalize`](ColorTriple::normalize).
    fn from_triple(t: Triple) -> Self;

    /// Post-condition applied after every arithmetic mutation.
    ///
    /// Identity by default.
    #[inline]
    fn normalize(self) -> Self {
        self
    }
}

impl ColorTriple for Triple {
    #[inline]
    fn to_triple(self) -> Triple {
        self
    }

    #[inline]
    fn from_triple(t: Triple) -> Self {
        t
    }
}

/// Implements component-wise `+ - * /`, `* f64` and their `*Assign` forms
/// for a [`ColorTriple`] type.
///
/// Each operation delegates to [`Triple`] and then calls
/// [`ColorTriple::normalize`] on the result.
#[macro_export]
macro_rules! impl_color_ops {
    (@assign $ty:ty, $assign:ident, $assign_fn:ident, $op:ident, $op_fn:ident) => {
        impl ::std::ops::$assign for $ty {
            #[inline]
            fn $assign_fn(&mut self, rhs: $ty) {
                let mut t = $crate::ColorTriple::to_triple(*self);
                ::std::ops::$assign::$assign_fn(&mut t, $crate::ColorTriple::to_triple(rhs));
                *self = $crate::ColorTriple::normalize(
                    <$ty as $crate::ColorTriple>::from_triple(t),
                );
            }
        }

        impl ::std::ops::$op for $ty {
            type Output = $ty;

            #[inline]
            fn $op_fn(mut self, rhs: $ty) -> $ty {
                ::std::ops::$assign::$assign_fn(&mut self, rhs);
                self
            }
        }
    };
    ($ty:ty) => {
        $crate::impl_color_ops!(@assign $ty, AddAssign, add_assign, Add, add);
        $crate::impl_color_ops!(@assign $ty, SubAssign, sub_assign, Sub, sub);
        $crate::impl_color_ops!(@assign $ty, MulAssign, mul_assign, Mul, mul);
        $crate::impl_color_ops!(@assign $ty, DivAssign, div_assign, Div, div);

        impl ::std::ops::MulAssign<f64> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f64) {
                let mut t = $crate::ColorTriple::to_triple(*self);
                t *= rhs;
                *self = $crate::ColorTriple::normalize(
                    <$ty as $crate::ColorTriple>::from_triple(t),
                );
            }
        }

        impl ::std::ops::Mul<f64> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(mut self, rhs: f64) -> $ty {
                self *= rhs;
                self
            }
        }
    };
}
