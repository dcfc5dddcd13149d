// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::Vec2;

/// Column-major 2×2 matrix.
///
/// Element `i` of [`Mat2::as_array`] is row `i % 2`, column `i / 2`:
///
/// ```text
/// | m[0] m[2] |
/// | m[1] m[3] |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat2 {
    pub(crate) m: [f64; 4],
}

impl_matrix!(Mat2, 4, "mat2", 0.0);

/// Lower/diagonal/upper factors of a [`Mat2`], see [`Mat2::ldu`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ldu {
    /// Unit lower-triangular factor.
    pub l: Mat2,
    /// Diagonal factor.
    pub d: Mat2,
    /// Unit upper-triangular factor.
    pub u: Mat2,
}

impl Mat2 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0],
    };

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from column-major elements.
    pub const fn new(m00: f64, m01: f64, m10: f64, m11: f64) -> Self {
        Self {
            m: [m00, m01, m10, m11],
        }
    }

    /// Overwrites every element (column-major order).
    pub fn set(&mut self, m00: f64, m01: f64, m10: f64, m11: f64) -> &mut Self {
        self.m = [m00, m01, m10, m11];
        self
    }

    /// `self = aᵀ`.
    pub fn transpose(&mut self, a: &Self) -> &mut Self {
        let [a0, a1, a2, a3] = a.m;
        self.m = [a0, a2, a1, a3];
        self
    }

    /// Transposes `self`.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        self.m.swap(1, 2);
        self
    }

    /// `self = a⁻¹`, or `None` when `a` is singular (determinant exactly 0).
    #[must_use]
    pub fn invert(&mut self, a: &Self) -> Option<&mut Self> {
        let [a0, a1, a2, a3] = a.m;
        let det = a0 * a3 - a2 * a1;
        if det == 0.0 {
            trace!("mat2 invert: singular matrix");
            return None;
        }
        let inv = 1.0 / det;
        self.m = [a3 * inv, -a1 * inv, -a2 * inv, a0 * inv];
        Some(self)
    }

    /// `self = adj(a)`.
    pub fn adjoint(&mut self, a: &Self) -> &mut Self {
        let [a0, a1, a2, a3] = a.m;
        self.m = [a3, -a1, -a2, a0];
        self
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        self.m[0] * self.m[3] - self.m[2] * self.m[1]
    }

    /// `self = a * b`.
    pub fn multiply(&mut self, a: &Self, b: &Self) -> &mut Self {
        let [a0, a1, a2, a3] = a.m;
        let [b0, b1, b2, b3] = b.m;
        self.m = [
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
        ];
        self
    }

    /// `self = a * R(rad)`.
    pub fn rotate(&mut self, a: &Self, rad: f64) -> &mut Self {
        let [a0, a1, a2, a3] = a.m;
        let (s, c) = rad.sin_cos();
        self.m = [
            a0 * c + a2 * s,
            a1 * c + a3 * s,
            a0 * -s + a2 * c,
            a1 * -s + a3 * c,
        ];
        self
    }

    /// `self = a * S(v)`: scales the columns of `a` by `v.x` and `v.y`.
    pub fn scale(&mut self, a: &Self, v: &Vec2) -> &mut Self {
        let [a0, a1, a2, a3] = a.m;
        self.m = [a0 * v.x, a1 * v.x, a2 * v.y, a3 * v.y];
        self
    }

    /// `self = R(rad)`.
    pub fn from_rotation(&mut self, rad: f64) -> &mut Self {
        let (s, c) = rad.sin_cos();
        self.m = [c, s, -s, c];
        self
    }

    /// `self = S(v)`.
    pub fn from_scaling(&mut self, v: &Vec2) -> &mut Self {
        self.m = [v.x, 0.0, 0.0, v.y];
        self
    }

    /// Factors `self` as `L * D * U` with unit-triangular `L`, `U` and
    /// diagonal `D`.
    ///
    /// Returns `None` when the leading element is zero, where the
    /// factorisation without pivoting does not exist.
    pub fn ldu(&self) -> Option<Ldu> {
        let [a, b, c, d] = self.m;
        if a == 0.0 {
            trace!("mat2 ldu: zero pivot");
            return None;
        }
        let l10 = b / a;
        Some(Ldu {
            l: Self::new(1.0, l10, 0.0, 1.0),
            d: Self::new(a, 0.0, 0.0, d - l10 * c),
            u: Self::new(1.0, 0.0, c / a, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn multiply_matches_hand_computation() {
        let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
        let b = Mat2::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!((a * b).to_array(), [23.0, 34.0, 31.0, 46.0]);
    }

    #[test]
    fn invert_reports_singular() {
        let mut out = Mat2::new(9.0, 9.0, 9.0, 9.0);
        assert!(out.invert(&Mat2::new(1.0, 2.0, 2.0, 4.0)).is_none());
        assert_eq!(out, Mat2::new(9.0, 9.0, 9.0, 9.0));
    }

    #[test]
    fn invert_round_trips() {
        let a = Mat2::new(4.0, 7.0, 2.0, 6.0);
        let inv = a.inverted().unwrap();
        assert!((a * inv).equals(&Mat2::IDENTITY));
    }

    #[test]
    fn rotation_turns_x_into_y() {
        let mut r = Mat2::IDENTITY;
        r.from_rotation(FRAC_PI_2);
        assert!((r * Vec2::new(1.0, 0.0)).equals(&Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotate_equals_multiply_by_rotation() {
        let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
        let mut r = Mat2::IDENTITY;
        r.from_rotation(0.3);
        let mut out = Mat2::IDENTITY;
        out.rotate(&a, 0.3);
        assert!(out.equals(&(a * r)));
    }

    #[test]
    fn ldu_reconstructs_matrix() {
        let a = Mat2::new(4.0, 6.0, 3.0, 3.0);
        let Ldu { l, d, u } = a.ldu().unwrap();
        assert!((l * d * u).equals(&a));
        assert_eq!(l.as_array()[2], 0.0);
        assert_eq!(u.as_array()[1], 0.0);
    }

    #[test]
    fn ldu_needs_nonzero_pivot() {
        assert!(Mat2::new(0.0, 1.0, 1.0, 0.0).ldu().is_none());
    }

    #[test]
    fn frob_and_display() {
        let a = Mat2::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(a.frob(), 5.0);
        assert_eq!(a.to_string(), "mat2(1, 2, 2, 4)");
    }
}
