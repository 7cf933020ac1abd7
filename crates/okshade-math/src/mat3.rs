//! 3x3 matrix type for linear color transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Each row is evaluated strictly left to right. Published OkLab constants
//! are only reproducible bit-for-bit with this evaluation order, so
//! [`Mat3::mul_triple`] never uses fused multiply-add or reassociation.

use crate::Triple;
use std::ops::Mul;

/// A 3x3 `f64` matrix.
///
/// # Example
///
/// ```rust
/// use okshade_math::{Mat3, Triple};
///
/// let v = Triple::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Returns a row as a [`Triple`].
    #[inline]
    pub fn row(&self, i: usize) -> Triple {
        Triple::from_array(self.m[i])
    }

    /// Matrix * column vector.
    #[inline]
    pub fn mul_triple(&self, v: Triple) -> Triple {
        let m = &self.m;
        Triple::new(
            m[0][0] * v.a + m[0][1] * v.b + m[0][2] * v.c,
            m[1][0] * v.a + m[1][1] * v.b + m[1][2] * v.c,
            m[2][0] * v.a + m[2][1] * v.b + m[2][2] * v.c,
        )
    }

    /// Matrix * matrix.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Triple> for Mat3 {
    type Output = Triple;

    #[inline]
    fn mul(self, rhs: Triple) -> Triple {
        self.mul_triple(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let v = Triple::new(0.25, -0.5, 4.0);
        assert_eq!(Mat3::IDENTITY * v, v);
        assert_eq!(Mat3::IDENTITY * Mat3::IDENTITY, Mat3::IDENTITY);
    }

    #[test]
    fn test_mul_triple_row_order() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 1.0],
        ]);
        let v = Triple::new(1.0, 1.0, 2.0);
        assert_eq!(m * v, Triple::new(9.0, 1.0, 1.0));
        assert_eq!(m.row(0), Triple::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mul_mat() {
        let s = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let v = Triple::splat(1.5);
        assert_eq!((s * s) * v, Triple::splat(6.0));
    }
}
