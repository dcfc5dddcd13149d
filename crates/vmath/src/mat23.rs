// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::Vec2;

/// 2D affine transform: a 2×2 linear part plus a translation.
///
/// Stores six elements `[a, b, c, d, tx, ty]` standing for the 3×3 matrix
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0   1 |
/// ```
///
/// The bottom row is implicit and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat23 {
    pub(crate) m: [f64; 6],
}

impl_matrix!(Mat23, 6, "mat23", 1.0);

impl Mat23 {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a transform from its six stored elements.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self {
            m: [a, b, c, d, tx, ty],
        }
    }

    /// Overwrites every stored element.
    pub fn set(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> &mut Self {
        self.m = [a, b, c, d, tx, ty];
        self
    }

    /// Transposes the linear part of `a`; the translation is copied unchanged.
    pub fn transpose(&mut self, a: &Self) -> &mut Self {
        let [a0, a1, a2, a3, a4, a5] = a.m;
        self.m = [a0, a2, a1, a3, a4, a5];
        self
    }

    /// Transposes the linear part of `self`.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        self.m.swap(1, 2);
        self
    }

    /// `self = a⁻¹`, or `None` when the linear part is singular.
    #[must_use]
    pub fn invert(&mut self, a: &Self) -> Option<&mut Self> {
        let [aa, ab, ac, ad, atx, aty] = a.m;
        let det = aa * ad - ab * ac;
        if det == 0.0 {
            trace!("mat23 invert: singular matrix");
            return None;
        }
        let inv = 1.0 / det;
        self.m = [
            ad * inv,
            -ab * inv,
            -ac * inv,
            aa * inv,
            (ac * aty - ad * atx) * inv,
            (ab * atx - aa * aty) * inv,
        ];
        Some(self)
    }

    /// Writes the top two rows of the 3×3 adjugate of `a`.
    ///
    /// Dividing by the determinant gives the inverse, so this is defined for
    /// singular transforms too.
    pub fn adjoint(&mut self, a: &Self) -> &mut Self {
        let [aa, ab, ac, ad, atx, aty] = a.m;
        self.m = [ad, -ab, -ac, aa, ac * aty - ad * atx, ab * atx - aa * aty];
        self
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    /// `self = a * b` as 3×3 affine matrices.
    pub fn multiply(&mut self, a: &Self, b: &Self) -> &mut Self {
        let [a0, a1, a2, a3, a4, a5] = a.m;
        let [b0, b1, b2, b3, b4, b5] = b.m;
        self.m = [
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
            a0 * b4 + a2 * b5 + a4,
            a1 * b4 + a3 * b5 + a5,
        ];
        self
    }

    /// `self = a * R(rad)`; the translation is kept.
    pub fn rotate(&mut self, a: &Self, rad: f64) -> &mut Self {
        let [a0, a1, a2, a3, a4, a5] = a.m;
        let (s, c) = rad.sin_cos();
        self.m = [
            a0 * c + a2 * s,
            a1 * c + a3 * s,
            a0 * -s + a2 * c,
            a1 * -s + a3 * c,
            a4,
            a5,
        ];
        self
    }

    /// `self = a * S(v)`; the translation is kept.
    pub fn scale(&mut self, a: &Self, v: &Vec2) -> &mut Self {
        let [a0, a1, a2, a3, a4, a5] = a.m;
        self.m = [a0 * v.x, a1 * v.x, a2 * v.y, a3 * v.y, a4, a5];
        self
    }

    /// `self = a * T(v)`.
    pub fn translate(&mut self, a: &Self, v: &Vec2) -> &mut Self {
        self.m[..4].copy_from_slice(&a.m[..4]);
        self.write_translation(&a.m, v)
    }

    /// `self = self * T(v)`; only the translation is rewritten.
    pub fn translate_in_place(&mut self, v: &Vec2) -> &mut Self {
        let src = self.m;
        self.write_translation(&src, v)
    }

    fn write_translation(&mut self, a: &[f64; 6], v: &Vec2) -> &mut Self {
        self.m[4] = a[0] * v.x + a[2] * v.y + a[4];
        self.m[5] = a[1] * v.x + a[3] * v.y + a[5];
        self
    }

    /// `self = R(rad)`.
    pub fn from_rotation(&mut self, rad: f64) -> &mut Self {
        let (s, c) = rad.sin_cos();
        self.m = [c, s, -s, c, 0.0, 0.0];
        self
    }

    /// `self = S(v)`.
    pub fn from_scaling(&mut self, v: &Vec2) -> &mut Self {
        self.m = [v.x, 0.0, 0.0, v.y, 0.0, 0.0];
        self
    }

    /// `self = T(v)`.
    pub fn from_translation(&mut self, v: &Vec2) -> &mut Self {
        self.m = [1.0, 0.0, 0.0, 1.0, v.x, v.y];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frob_counts_implicit_row() {
        assert_eq!(Mat23::IDENTITY.frob(), 3.0_f64.sqrt());
    }

    #[test]
    fn translate_then_transform() {
        let mut m = Mat23::IDENTITY;
        m.rotate(&Mat23::IDENTITY, core::f64::consts::FRAC_PI_2);
        m.translate_in_place(&Vec2::new(1.0, 0.0));
        // Translation is applied in the rotated frame.
        assert!((m * Vec2::ZERO).equals(&Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn translate_matches_in_place_form() {
        let a = Mat23::new(2.0, 1.0, -1.0, 3.0, 4.0, 5.0);
        let v = Vec2::new(0.5, -2.0);
        let mut out = Mat23::IDENTITY;
        out.translate(&a, &v);
        let mut b = a;
        b.translate_in_place(&v);
        assert_eq!(out, b);
    }

    #[test]
    fn adjoint_over_determinant_is_inverse() {
        let a = Mat23::new(2.0, 1.0, -1.0, 3.0, 4.0, 5.0);
        let mut adj = Mat23::IDENTITY;
        adj.adjoint(&a);
        let scaled = adj * (1.0 / a.determinant());
        assert!(scaled.equals(&a.inverted().unwrap()));
    }

    #[test]
    fn singular_linear_part_has_no_inverse() {
        let mut out = Mat23::IDENTITY;
        assert!(out.invert(&Mat23::new(1.0, 2.0, 2.0, 4.0, 7.0, 7.0)).is_none());
        assert_eq!(out, Mat23::IDENTITY);
    }

    #[test]
    fn transpose_keeps_translation() {
        let a = Mat23::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(a.transposed().to_array(), [1.0, 3.0, 2.0, 4.0, 5.0, 6.0]);
    }
}
