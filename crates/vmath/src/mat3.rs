// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::{Mat23, Mat4, Quaternion, Vec2};

/// Column-major 3×3 matrix.
///
/// Serves both as a 3D linear map (normal matrices, rotations from
/// quaternions) and as a 2D homogeneous transform (`translate`, `rotate`,
/// `scale` take [`Vec2`] arguments).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat3 {
    pub(crate) m: [f64; 9],
}

impl_matrix!(Mat3, 9, "mat3", 0.0);

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from column-major elements (`mCR`: column `C`, row `R`).
    pub const fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self {
            m: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    /// Overwrites every element (column-major order).
    pub fn set(
        &mut self,
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> &mut Self {
        self.m = [m00, m01, m02, m10, m11, m12, m20, m21, m22];
        self
    }

    /// `self = aᵀ`.
    pub fn transpose(&mut self, a: &Self) -> &mut Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a.m;
        self.m = [a00, a10, a20, a01, a11, a21, a02, a12, a22];
        self
    }

    /// Transposes `self`.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        self.m.swap(1, 3);
        self.m.swap(2, 6);
        self.m.swap(5, 7);
        self
    }

    /// `self = a⁻¹`, or `None` when `a` is singular.
    #[must_use]
    pub fn invert(&mut self, a: &Self) -> Option<&mut Self> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a.m;

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        if det == 0.0 {
            trace!("mat3 invert: singular matrix");
            return None;
        }
        let det = 1.0 / det;

        self.m = [
            b01 * det,
            (-a22 * a01 + a02 * a21) * det,
            (a12 * a01 - a02 * a11) * det,
            b11 * det,
            (a22 * a00 - a02 * a20) * det,
            (-a12 * a00 + a02 * a10) * det,
            b21 * det,
            (-a21 * a00 + a01 * a20) * det,
            (a11 * a00 - a01 * a10) * det,
        ];
        Some(self)
    }

    /// `self = adj(a)`.
    pub fn adjoint(&mut self, a: &Self) -> &mut Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a.m;
        self.m = [
            a11 * a22 - a12 * a21,
            a02 * a21 - a01 * a22,
            a01 * a12 - a02 * a11,
            a12 * a20 - a10 * a22,
            a00 * a22 - a02 * a20,
            a02 * a10 - a00 * a12,
            a10 * a21 - a11 * a20,
            a01 * a20 - a00 * a21,
            a00 * a11 - a01 * a10,
        ];
        self
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.m;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// `self = a * b`.
    pub fn multiply(&mut self, a: &Self, b: &Self) -> &mut Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a.m;
        let [b00, b01, b02, b10, b11, b12, b20, b21, b22] = b.m;
        self.m = [
            b00 * a00 + b01 * a10 + b02 * a20,
            b00 * a01 + b01 * a11 + b02 * a21,
            b00 * a02 + b01 * a12 + b02 * a22,
            b10 * a00 + b11 * a10 + b12 * a20,
            b10 * a01 + b11 * a11 + b12 * a21,
            b10 * a02 + b11 * a12 + b12 * a22,
            b20 * a00 + b21 * a10 + b22 * a20,
            b20 * a01 + b21 * a11 + b22 * a21,
            b20 * a02 + b21 * a12 + b22 * a22,
        ];
        self
    }

    /// `self = a * T(v)` in 2D homogeneous coordinates.
    pub fn translate(&mut self, a: &Self, v: &Vec2) -> &mut Self {
        self.m[..6].copy_from_slice(&a.m[..6]);
        self.write_translation(&a.m, v)
    }

    /// `self = self * T(v)`; only the third column is rewritten.
    pub fn translate_in_place(&mut self, v: &Vec2) -> &mut Self {
        let src = self.m;
        self.write_translation(&src, v)
    }

    fn write_translation(&mut self, a: &[f64; 9], v: &Vec2) -> &mut Self {
        let (x, y) = (v.x, v.y);
        self.m[6] = x * a[0] + y * a[3] + a[6];
        self.m[7] = x * a[1] + y * a[4] + a[7];
        self.m[8] = x * a[2] + y * a[5] + a[8];
        self
    }

    /// `self = a * R(rad)` in 2D homogeneous coordinates.
    pub fn rotate(&mut self, a: &Self, rad: f64) -> &mut Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a.m;
        let (s, c) = rad.sin_cos();
        self.m = [
            c * a00 + s * a10,
            c * a01 + s * a11,
            c * a02 + s * a12,
            c * a10 - s * a00,
            c * a11 - s * a01,
            c * a12 - s * a02,
            a20,
            a21,
            a22,
        ];
        self
    }

    /// `self = a * S(v)` in 2D homogeneous coordinates.
    pub fn scale(&mut self, a: &Self, v: &Vec2) -> &mut Self {
        let (x, y) = (v.x, v.y);
        let a = &a.m;
        self.m = [
            x * a[0],
            x * a[1],
            x * a[2],
            y * a[3],
            y * a[4],
            y * a[5],
            a[6],
            a[7],
            a[8],
        ];
        self
    }

    /// `self = T(v)`.
    pub fn from_translation(&mut self, v: &Vec2) -> &mut Self {
        self.m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, v.x, v.y, 1.0];
        self
    }

    /// `self = R(rad)` about the implicit Z axis.
    pub fn from_rotation(&mut self, rad: f64) -> &mut Self {
        let (s, c) = rad.sin_cos();
        self.m = [c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0];
        self
    }

    /// `self = S(v)`.
    pub fn from_scaling(&mut self, v: &Vec2) -> &mut Self {
        self.m = [v.x, 0.0, 0.0, 0.0, v.y, 0.0, 0.0, 0.0, 1.0];
        self
    }

    /// Embeds a 2D affine transform.
    pub fn from_mat23(&mut self, a: &Mat23) -> &mut Self {
        let [a0, a1, a2, a3, a4, a5] = a.m;
        self.m = [a0, a1, 0.0, a2, a3, 0.0, a4, a5, 1.0];
        self
    }

    /// Copies the upper-left 3×3 block of `a`.
    pub fn from_mat4(&mut self, a: &Mat4) -> &mut Self {
        let a = &a.m;
        self.m = [a[0], a[1], a[2], a[4], a[5], a[6], a[8], a[9], a[10]];
        self
    }

    /// Rotation matrix of the unit quaternion `q`.
    pub fn from_quat<Q: Quaternion + ?Sized>(&mut self, q: &Q) -> &mut Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        self.m = [
            1.0 - yy - zz,
            yx + wz,
            zx - wy,
            yx - wz,
            1.0 - xx - zz,
            zy + wx,
            zx + wy,
            zy - wx,
            1.0 - xx - yy,
        ];
        self
    }

    /// Normal matrix of `a`: the inverse transpose of its upper-left 3×3
    /// block. `None` when `a` is singular.
    #[must_use]
    pub fn normal_from_mat4(&mut self, a: &Mat4) -> Option<&mut Self> {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] = a.m;

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            trace!("mat3 normal_from_mat4: singular matrix");
            return None;
        }
        let det = 1.0 / det;

        self.m = [
            (a11 * b11 - a12 * b10 + a13 * b09) * det,
            (a12 * b08 - a10 * b11 - a13 * b07) * det,
            (a10 * b10 - a11 * b08 + a13 * b06) * det,
            (a02 * b10 - a01 * b11 - a03 * b09) * det,
            (a00 * b11 - a02 * b08 + a03 * b07) * det,
            (a01 * b08 - a00 * b10 - a03 * b06) * det,
            (a31 * b05 - a32 * b04 + a33 * b03) * det,
            (a32 * b02 - a30 * b05 - a33 * b01) * det,
            (a30 * b04 - a31 * b02 + a33 * b00) * det,
        ];
        Some(self)
    }
}
