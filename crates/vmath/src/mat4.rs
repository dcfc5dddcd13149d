// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::{to_radians, MathError, Quaternion, Vec3, EPSILON};

/// Column-major 4×4 matrix for 3D affine and projective transforms.
///
/// - Element `i` of [`Mat4::as_array`] is row `i % 4`, column `i / 4`; the
///   translation occupies elements 12, 13, 14.
/// - Projections follow the OpenGL clip-space convention (right-handed view
///   space looking down `-Z`, depth mapped to `[-1, 1]`).
///
/// # Examples
/// ```
/// use vmath::{Mat4, Vec3};
/// let mut m = Mat4::identity();
/// m.from_translation(&Vec3::new(5.0, -3.0, 2.0));
/// let mut p = Vec3::zero();
/// p.transform_mat4(&Vec3::new(2.0, 4.0, -1.0), &m);
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    pub(crate) m: [f64; 16],
}

impl_matrix!(Mat4, 16, "mat4", 0.0);

/// Asymmetric field of view, as reported by head-mounted displays.
///
/// Each angle is measured in degrees from the view axis to the matching edge
/// of the view volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldOfView {
    /// Angle to the top edge.
    pub up_degrees: f64,
    /// Angle to the bottom edge.
    pub down_degrees: f64,
    /// Angle to the left edge.
    pub left_degrees: f64,
    /// Angle to the right edge.
    pub right_degrees: f64,
}

/// Normalises a rotation axis, or `None` when it is shorter than `EPSILON`.
fn unit_axis(axis: &Vec3) -> Option<(f64, f64, f64)> {
    let len = axis.length();
    if len.abs() < EPSILON {
        trace!(length = len, "mat4: degenerate rotation axis");
        return None;
    }
    let inv = 1.0 / len;
    Some((axis.x * inv, axis.y * inv, axis.z * inv))
}

/// Products shared by the quaternion conversions.
#[derive(Clone, Copy)]
struct QuatTerms {
    xx: f64,
    xy: f64,
    xz: f64,
    yy: f64,
    yz: f64,
    zz: f64,
    wx: f64,
    wy: f64,
    wz: f64,
}

impl QuatTerms {
    fn of<Q: Quaternion + ?Sized>(q: &Q) -> Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let (x2, y2, z2) = (x + x, y + y, z + z);
        Self {
            xx: x * x2,
            xy: x * y2,
            xz: x * z2,
            yy: y * y2,
            yz: y * z2,
            zz: z * z2,
            wx: w * x2,
            wy: w * y2,
            wz: w * z2,
        }
    }

    /// Rotation columns scaled by `s`, with the translation left at zero.
    fn scaled_basis(&self, s: &Vec3) -> [f64; 16] {
        let Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
            wx,
            wy,
            wz,
        } = *self;
        [
            (1.0 - (yy + zz)) * s.x, (xy + wz) * s.x, (xz - wy) * s.x, 0.0, // col 0
            (xy - wz) * s.y, (1.0 - (xx + zz)) * s.y, (yz + wx) * s.y, 0.0, // col 1
            (xz + wy) * s.z, (yz - wx) * s.z, (1.0 - (xx + yy)) * s.z, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ]
    }
}

impl Mat4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ],
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
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m30: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self {
            m: [
                m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
            ],
        }
    }

    /// Overwrites every element (column-major order).
    pub fn set(
        &mut self,
        m00: f64,
        m01: f64,
        m02: f64,
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m30: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> &mut Self {
        *self = Self::new(
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        );
        self
    }

    /// `self = aᵀ`.
    pub fn transpose(&mut self, a: &Self) -> &mut Self {
        let a = &a.m;
        self.m = [
            a[0], a[4], a[8], a[12], // col 0
            a[1], a[5], a[9], a[13], // col 1
            a[2], a[6], a[10], a[14], // col 2
            a[3], a[7], a[11], a[15], // col 3
        ];
        self
    }

    /// Transposes `self`; the diagonal is not touched.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        for (i, j) in [(1, 4), (2, 8), (3, 12), (6, 9), (7, 13), (11, 14)] {
            self.m.swap(i, j);
        }
        self
    }

    /// `self = a⁻¹`, or `None` when `a` is singular.
    #[must_use]
    pub fn invert(&mut self, a: &Self) -> Option<&mut Self> {
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
            trace!("mat4 invert: singular matrix");
            return None;
        }
        let det = 1.0 / det;

        self.m = [
            (a11 * b11 - a12 * b10 + a13 * b09) * det,
            (a02 * b10 - a01 * b11 - a03 * b09) * det,
            (a31 * b05 - a32 * b04 + a33 * b03) * det,
            (a22 * b04 - a21 * b05 - a23 * b03) * det,
            (a12 * b08 - a10 * b11 - a13 * b07) * det,
            (a00 * b11 - a02 * b08 + a03 * b07) * det,
            (a32 * b02 - a30 * b05 - a33 * b01) * det,
            (a20 * b05 - a22 * b02 + a23 * b01) * det,
            (a10 * b10 - a11 * b08 + a13 * b06) * det,
            (a01 * b08 - a00 * b10 - a03 * b06) * det,
            (a30 * b04 - a31 * b02 + a33 * b00) * det,
            (a21 * b02 - a20 * b04 - a23 * b00) * det,
            (a11 * b07 - a10 * b09 - a12 * b06) * det,
            (a00 * b09 - a01 * b07 + a02 * b06) * det,
            (a31 * b01 - a30 * b03 - a32 * b00) * det,
            (a20 * b03 - a21 * b01 + a22 * b00) * det,
        ];
        Some(self)
    }

    /// `self = adj(a)`.
    pub fn adjoint(&mut self, a: &Self) -> &mut Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] = a.m;
        self.m = [
            a11 * (a22 * a33 - a23 * a32) - a21 * (a12 * a33 - a13 * a32) + a31 * (a12 * a23 - a13 * a22),
            -(a01 * (a22 * a33 - a23 * a32) - a21 * (a02 * a33 - a03 * a32) + a31 * (a02 * a23 - a03 * a22)),
            a01 * (a12 * a33 - a13 * a32) - a11 * (a02 * a33 - a03 * a32) + a31 * (a02 * a13 - a03 * a12),
            -(a01 * (a12 * a23 - a13 * a22) - a11 * (a02 * a23 - a03 * a22) + a21 * (a02 * a13 - a03 * a12)),
            -(a10 * (a22 * a33 - a23 * a32) - a20 * (a12 * a33 - a13 * a32) + a30 * (a12 * a23 - a13 * a22)),
            a00 * (a22 * a33 - a23 * a32) - a20 * (a02 * a33 - a03 * a32) + a30 * (a02 * a23 - a03 * a22),
            -(a00 * (a12 * a33 - a13 * a32) - a10 * (a02 * a33 - a03 * a32) + a30 * (a02 * a13 - a03 * a12)),
            a00 * (a12 * a23 - a13 * a22) - a10 * (a02 * a23 - a03 * a22) + a20 * (a02 * a13 - a03 * a12),
            a10 * (a21 * a33 - a23 * a31) - a20 * (a11 * a33 - a13 * a31) + a30 * (a11 * a23 - a13 * a21),
            -(a00 * (a21 * a33 - a23 * a31) - a20 * (a01 * a33 - a03 * a31) + a30 * (a01 * a23 - a03 * a21)),
            a00 * (a11 * a33 - a13 * a31) - a10 * (a01 * a33 - a03 * a31) + a30 * (a01 * a13 - a03 * a11),
            -(a00 * (a11 * a23 - a13 * a21) - a10 * (a01 * a23 - a03 * a21) + a20 * (a01 * a13 - a03 * a11)),
            -(a10 * (a21 * a32 - a22 * a31) - a20 * (a11 * a32 - a12 * a31) + a30 * (a11 * a22 - a12 * a21)),
            a00 * (a21 * a32 - a22 * a31) - a20 * (a01 * a32 - a02 * a31) + a30 * (a01 * a22 - a02 * a21),
            -(a00 * (a11 * a32 - a12 * a31) - a10 * (a01 * a32 - a02 * a31) + a30 * (a01 * a12 - a02 * a11)),
            a00 * (a11 * a22 - a12 * a21) - a10 * (a01 * a22 - a02 * a21) + a20 * (a01 * a12 - a02 * a11),
        ];
        self
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.m;

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

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// `self = a * b`.
    ///
    /// Column-major semantics: applying the result to a vector applies `b`
    /// first, then `a`.
    pub fn multiply(&mut self, a: &Self, b: &Self) -> &mut Self {
        let a = &a.m;
        let mut out = [0.0; 16];
        for (dst, col) in out.chunks_exact_mut(4).zip(b.m.chunks_exact(4)) {
            let (b0, b1, b2, b3) = (col[0], col[1], col[2], col[3]);
            for (row, d) in dst.iter_mut().enumerate() {
                *d = b0 * a[row] + b1 * a[4 + row] + b2 * a[8 + row] + b3 * a[12 + row];
            }
        }
        self.m = out;
        self
    }

    /// `self = a * T(v)`.
    pub fn translate(&mut self, a: &Self, v: &Vec3) -> &mut Self {
        self.m[..12].copy_from_slice(&a.m[..12]);
        self.write_translation(&a.m, v)
    }

    /// `self = self * T(v)`; only the translation column is rewritten.
    pub fn translate_in_place(&mut self, v: &Vec3) -> &mut Self {
        let src = self.m;
        self.write_translation(&src, v)
    }

    fn write_translation(&mut self, a: &[f64; 16], v: &Vec3) -> &mut Self {
        let (x, y, z) = (v.x, v.y, v.z);
        for row in 0..4 {
            self.m[12 + row] = a[row] * x + a[4 + row] * y + a[8 + row] * z + a[12 + row];
        }
        self
    }

    /// `self = a * S(v)`: scales the first three columns of `a`.
    pub fn scale(&mut self, a: &Self, v: &Vec3) -> &mut Self {
        let factors = [v.x, v.y, v.z, 1.0];
        for (i, slot) in self.m.iter_mut().enumerate() {
            *slot = a.m[i] * factors[i / 4];
        }
        self
    }

    /// `self = a * R(rad, axis)`.
    ///
    /// Returns `None`, leaving `self` untouched, when `axis` is shorter than
    /// [`EPSILON`].
    #[must_use]
    pub fn rotate(&mut self, a: &Self, rad: f64, axis: &Vec3) -> Option<&mut Self> {
        let axis = unit_axis(axis)?;
        self.m[12..].copy_from_slice(&a.m[12..]);
        Some(self.write_rotation(&a.m, rad, axis))
    }

    /// `self = self * R(rad, axis)`; the translation column is not touched.
    #[must_use]
    pub fn rotate_in_place(&mut self, rad: f64, axis: &Vec3) -> Option<&mut Self> {
        let axis = unit_axis(axis)?;
        let src = self.m;
        Some(self.write_rotation(&src, rad, axis))
    }

    fn write_rotation(&mut self, a: &[f64; 16], rad: f64, (x, y, z): (f64, f64, f64)) -> &mut Self {
        let (s, c) = rad.sin_cos();
        let t = 1.0 - c;

        let r = [
            [x * x * t + c, y * x * t + z * s, z * x * t - y * s],
            [x * y * t - z * s, y * y * t + c, z * y * t + x * s],
            [x * z * t + y * s, y * z * t - x * s, z * z * t + c],
        ];

        for (col, [r0, r1, r2]) in r.into_iter().enumerate() {
            for row in 0..4 {
                self.m[col * 4 + row] = a[row] * r0 + a[4 + row] * r1 + a[8 + row] * r2;
            }
        }
        self
    }

    /// `self = a * Rx(rad)`.
    pub fn rotate_x(&mut self, a: &Self, rad: f64) -> &mut Self {
        self.m[..4].copy_from_slice(&a.m[..4]);
        self.m[12..].copy_from_slice(&a.m[12..]);
        self.write_axis_rotation(&a.m, rad, 1, 2)
    }

    /// `self = a * Ry(rad)`.
    pub fn rotate_y(&mut self, a: &Self, rad: f64) -> &mut Self {
        self.m[4..8].copy_from_slice(&a.m[4..8]);
        self.m[12..].copy_from_slice(&a.m[12..]);
        self.write_axis_rotation(&a.m, rad, 2, 0)
    }

    /// `self = a * Rz(rad)`.
    pub fn rotate_z(&mut self, a: &Self, rad: f64) -> &mut Self {
        self.m[8..].copy_from_slice(&a.m[8..]);
        self.write_axis_rotation(&a.m, rad, 0, 1)
    }

    /// `self = self * Rx(rad)`; rewrites columns 1 and 2 only.
    pub fn rotate_x_in_place(&mut self, rad: f64) -> &mut Self {
        let src = self.m;
        self.write_axis_rotation(&src, rad, 1, 2)
    }

    /// `self = self * Ry(rad)`; rewrites columns 0 and 2 only.
    pub fn rotate_y_in_place(&mut self, rad: f64) -> &mut Self {
        let src = self.m;
        self.write_axis_rotation(&src, rad, 2, 0)
    }

    /// `self = self * Rz(rad)`; rewrites columns 0 and 1 only.
    pub fn rotate_z_in_place(&mut self, rad: f64) -> &mut Self {
        let src = self.m;
        self.write_axis_rotation(&src, rad, 0, 1)
    }

    /// Rotates column `u` towards column `v` by `rad`:
    /// `u' = u cos + v sin`, `v' = v cos - u sin`.
    fn write_axis_rotation(&mut self, a: &[f64; 16], rad: f64, u: usize, v: usize) -> &mut Self {
        let (s, c) = rad.sin_cos();
        for row in 0..4 {
            let (au, av) = (a[u * 4 + row], a[v * 4 + row]);
            self.m[u * 4 + row] = au * c + av * s;
            self.m[v * 4 + row] = av * c - au * s;
        }
        self
    }

    /// `self = T(v)`.
    pub fn from_translation(&mut self, v: &Vec3) -> &mut Self {
        *self = Self::IDENTITY;
        self.m[12] = v.x;
        self.m[13] = v.y;
        self.m[14] = v.z;
        self
    }

    /// `self = S(v)`.
    pub fn from_scaling(&mut self, v: &Vec3) -> &mut Self {
        *self = Self::IDENTITY;
        self.m[0] = v.x;
        self.m[5] = v.y;
        self.m[10] = v.z;
        self
    }

    /// `self = R(rad, axis)`, or `None` when `axis` is shorter than
    /// [`EPSILON`].
    #[must_use]
    pub fn from_rotation(&mut self, rad: f64, axis: &Vec3) -> Option<&mut Self> {
        let axis = unit_axis(axis)?;
        *self = Self::IDENTITY;
        Some(self.write_rotation(&Self::IDENTITY.m, rad, axis))
    }

    /// Value form of [`Mat4::from_rotation`].
    pub fn try_from_rotation(rad: f64, axis: &Vec3) -> Result<Self, MathError> {
        let mut out = Self::IDENTITY;
        if out.from_rotation(rad, axis).is_none() {
            return Err(MathError::DegenerateAxis {
                length: axis.length(),
            });
        }
        Ok(out)
    }

    /// `self = Rx(rad)`.
    pub fn from_x_rotation(&mut self, rad: f64) -> &mut Self {
        *self = Self::IDENTITY;
        self.rotate_x_in_place(rad)
    }

    /// `self = Ry(rad)`.
    pub fn from_y_rotation(&mut self, rad: f64) -> &mut Self {
        *self = Self::IDENTITY;
        self.rotate_y_in_place(rad)
    }

    /// `self = Rz(rad)`.
    pub fn from_z_rotation(&mut self, rad: f64) -> &mut Self {
        *self = Self::IDENTITY;
        self.rotate_z_in_place(rad)
    }

    /// Rotation matrix of the unit quaternion `q`.
    pub fn from_quat<Q: Quaternion + ?Sized>(&mut self, q: &Q) -> &mut Self {
        self.m = QuatTerms::of(q).scaled_basis(&Vec3::new(1.0, 1.0, 1.0));
        self
    }

    /// `self = T(v) * R(q)`.
    pub fn from_rotation_translation<Q: Quaternion + ?Sized>(&mut self, q: &Q, v: &Vec3) -> &mut Self {
        self.from_rotation_translation_scale(q, v, &Vec3::new(1.0, 1.0, 1.0))
    }

    /// `self = T(v) * R(q) * S(s)`.
    pub fn from_rotation_translation_scale<Q: Quaternion + ?Sized>(
        &mut self,
        q: &Q,
        v: &Vec3,
        s: &Vec3,
    ) -> &mut Self {
        self.m = QuatTerms::of(q).scaled_basis(s);
        self.m[12] = v.x;
        self.m[13] = v.y;
        self.m[14] = v.z;
        self
    }

    /// `self = T(v) * T(o) * R(q) * S(s) * T(-o)`: rotation and scale about
    /// the pivot `o`.
    pub fn from_rotation_translation_scale_origin<Q: Quaternion + ?Sized>(
        &mut self,
        q: &Q,
        v: &Vec3,
        s: &Vec3,
        o: &Vec3,
    ) -> &mut Self {
        let m = QuatTerms::of(q).scaled_basis(s);
        let (ox, oy, oz) = (o.x, o.y, o.z);
        self.m = m;
        self.m[12] = v.x + ox - (m[0] * ox + m[4] * oy + m[8] * oz);
        self.m[13] = v.y + oy - (m[1] * ox + m[5] * oy + m[9] * oz);
        self.m[14] = v.z + oz - (m[2] * ox + m[6] * oy + m[10] * oz);
        self
    }

    /// Writes the translation column into `out`.
    pub fn get_translation<'o>(&self, out: &'o mut Vec3) -> &'o mut Vec3 {
        out.set(self.m[12], self.m[13], self.m[14])
    }

    /// Writes the length of each of the first three columns into `out`.
    ///
    /// Exact for matrices built from rotation, positive scale and
    /// translation; shear is not separated out.
    pub fn get_scaling<'o>(&self, out: &'o mut Vec3) -> &'o mut Vec3 {
        let m = &self.m;
        out.set(
            (m[0] * m[0] + m[1] * m[1] + m[2] * m[2]).sqrt(),
            (m[4] * m[4] + m[5] * m[5] + m[6] * m[6]).sqrt(),
            (m[8] * m[8] + m[9] * m[9] + m[10] * m[10]).sqrt(),
        )
    }

    /// Extracts the rotation of an unscaled rotation matrix as a quaternion.
    ///
    /// Branches on the largest diagonal term for numerical stability. The sign
    /// of the result is unspecified: `q` and `-q` are the same rotation.
    pub fn get_rotation<'o, Q: Quaternion + ?Sized>(&self, out: &'o mut Q) -> &'o mut Q {
        let m = &self.m;
        let trace = m[0] + m[5] + m[10];

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            out.set_xyzw((m[6] - m[9]) / s, (m[8] - m[2]) / s, (m[1] - m[4]) / s, 0.25 * s);
        } else if m[0] > m[5] && m[0] > m[10] {
            let s = (1.0 + m[0] - m[5] - m[10]).sqrt() * 2.0;
            out.set_xyzw(0.25 * s, (m[1] + m[4]) / s, (m[8] + m[2]) / s, (m[6] - m[9]) / s);
        } else if m[5] > m[10] {
            let s = (1.0 + m[5] - m[0] - m[10]).sqrt() * 2.0;
            out.set_xyzw((m[1] + m[4]) / s, 0.25 * s, (m[6] + m[9]) / s, (m[8] - m[2]) / s);
        } else {
            let s = (1.0 + m[10] - m[0] - m[5]).sqrt() * 2.0;
            out.set_xyzw((m[8] + m[2]) / s, (m[6] + m[9]) / s, 0.25 * s, (m[1] - m[4]) / s);
        }
        out
    }

    /// Perspective projection for the view frustum bounded by the given
    /// planes. `near == far` (or a zero-width side) divides by zero.
    pub fn frustum(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> &mut Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let nf = 1.0 / (near - far);
        self.m = [
            near * 2.0 * rl, 0.0, 0.0, 0.0, // col 0
            0.0, near * 2.0 * tb, 0.0, 0.0, // col 1
            (right + left) * rl, (top + bottom) * tb, (far + near) * nf, -1.0, // col 2
            0.0, 0.0, far * near * 2.0 * nf, 0.0, // col 3
        ];
        self
    }

    /// Symmetric perspective projection.
    ///
    /// `fovy` is the vertical field of view in radians; `aspect` is
    /// width / height.
    pub fn perspective(&mut self, fovy: f64, aspect: f64, near: f64, far: f64) -> &mut Self {
        let f = 1.0 / (fovy / 2.0).tan();
        let nf = 1.0 / (near - far);
        self.m = [
            f / aspect, 0.0, 0.0, 0.0, // col 0
            0.0, f, 0.0, 0.0, // col 1
            0.0, 0.0, (far + near) * nf, -1.0, // col 2
            0.0, 0.0, 2.0 * far * near * nf, 0.0, // col 3
        ];
        self
    }

    /// Perspective projection from an asymmetric [`FieldOfView`].
    ///
    /// Unlike [`Mat4::perspective`], depth maps to `[0, 1]`.
    pub fn perspective_from_field_of_view(
        &mut self,
        fov: &FieldOfView,
        near: f64,
        far: f64,
    ) -> &mut Self {
        let up_tan = to_radians(fov.up_degrees).tan();
        let down_tan = to_radians(fov.down_degrees).tan();
        let left_tan = to_radians(fov.left_degrees).tan();
        let right_tan = to_radians(fov.right_degrees).tan();
        let x_scale = 2.0 / (left_tan + right_tan);
        let y_scale = 2.0 / (up_tan + down_tan);

        self.m = [
            x_scale, 0.0, 0.0, 0.0, // col 0
            0.0, y_scale, 0.0, 0.0, // col 1
            -((left_tan - right_tan) * x_scale * 0.5),
            (up_tan - down_tan) * y_scale * 0.5,
            far / (near - far),
            -1.0, // col 2
            0.0, 0.0, far * near / (near - far), 0.0, // col 3
        ];
        self
    }

    /// Orthographic projection for the box bounded by the given planes.
    pub fn ortho(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> &mut Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);
        self.m = [
            -2.0 * lr, 0.0, 0.0, 0.0, // col 0
            0.0, -2.0 * bt, 0.0, 0.0, // col 1
            0.0, 0.0, 2.0 * nf, 0.0, // col 2
            (left + right) * lr, (top + bottom) * bt, (far + near) * nf, 1.0, // col 3
        ];
        self
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// * `eye` within [`EPSILON`] of `center` on every axis yields the
    ///   identity.
    /// * An `up` parallel to the view direction collapses the side axis to
    ///   zero instead of dividing by zero; the result is then degenerate.
    pub fn look_at(&mut self, eye: &Vec3, center: &Vec3, up: &Vec3) -> &mut Self {
        if (eye.x - center.x).abs() < EPSILON
            && (eye.y - center.y).abs() < EPSILON
            && (eye.z - center.z).abs() < EPSILON
        {
            trace!("mat4 look_at: eye coincides with center");
            return self.set_identity();
        }

        let mut forward = Vec3::ZERO;
        forward.subtract(eye, center);
        let z = forward.normalized();

        let mut x = Vec3::ZERO;
        x.cross(up, &z);
        if x.length() == 0.0 {
            trace!("mat4 look_at: up is parallel to the view direction");
        }
        let x = x.normalized();

        let mut y = Vec3::ZERO;
        y.cross(&z, &x);
        let y = y.normalized();

        self.m = [
            x.x, y.x, z.x, 0.0, // col 0
            x.y, y.y, z.y, 0.0, // col 1
            x.z, y.z, z.z, 0.0, // col 2
            -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0, // col 3
        ];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn sample() -> Mat4 {
        Mat4::new(
            1.0, 2.0, 0.0, 0.0, //
            0.0, 1.0, 3.0, 0.0, //
            4.0, 0.0, 1.0, 0.0, //
            5.0, 6.0, 7.0, 1.0,
        )
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let a = sample();
        assert_eq!(a * Mat4::IDENTITY, a);
        assert_eq!(Mat4::IDENTITY * a, a);
    }

    #[test]
    fn translate_in_place_matches_out_form() {
        let a = sample();
        let v = Vec3::new(1.0, -2.0, 0.5);
        let mut out = Mat4::IDENTITY;
        out.translate(&a, &v);
        let mut b = a;
        b.translate_in_place(&v);
        assert_eq!(out, b);
    }

    #[test]
    fn axis_rotations_match_general_rotate() {
        let a = sample();
        let rad = 0.7;
        for (i, axis) in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z].into_iter().enumerate() {
            let mut expected = Mat4::IDENTITY;
            assert!(expected.rotate(&a, rad, &axis).is_some());
            let mut got = Mat4::IDENTITY;
            match i {
                0 => got.rotate_x(&a, rad),
                1 => got.rotate_y(&a, rad),
                _ => got.rotate_z(&a, rad),
            };
            assert!(got.equals(&expected), "{axis}: {got} != {expected}");
        }
    }

    #[test]
    fn axis_rotation_in_place_matches_out_form() {
        let a = sample();
        let mut out = Mat4::IDENTITY;
        out.rotate_y(&a, 1.1);
        let mut b = a;
        b.rotate_y_in_place(1.1);
        assert_eq!(out, b);
    }

    #[test]
    fn degenerate_axis_leaves_output_untouched() {
        let mut out = sample();
        assert!(out.rotate(&Mat4::IDENTITY, 1.0, &Vec3::ZERO).is_none());
        assert!(out.from_rotation(1.0, &Vec3::new(0.0, 1e-9, 0.0)).is_none());
        assert!(out.rotate_in_place(1.0, &Vec3::ZERO).is_none());
        assert_eq!(out, sample());
        assert_eq!(
            Mat4::try_from_rotation(1.0, &Vec3::ZERO),
            Err(MathError::DegenerateAxis { length: 0.0 })
        );
    }

    #[test]
    fn from_axis_rotations_match_from_rotation() {
        let mut expected = Mat4::IDENTITY;
        let mut got = Mat4::IDENTITY;
        assert!(expected.from_rotation(FRAC_PI_4, &Vec3::UNIT_Z).is_some());
        got.from_z_rotation(FRAC_PI_4);
        assert!(got.equals(&expected));
        assert!(expected.from_rotation(FRAC_PI_4, &Vec3::UNIT_X).is_some());
        got.from_x_rotation(FRAC_PI_4);
        assert!(got.equals(&expected));
    }

    #[test]
    fn get_translation_and_scaling() {
        let q = [0.0, FRAC_PI_4.sin(), 0.0, FRAC_PI_4.cos()];
        let mut m = Mat4::IDENTITY;
        m.from_rotation_translation_scale(&q, &Vec3::new(1.0, 2.0, 3.0), &Vec3::new(2.0, 3.0, 4.0));
        let mut t = Vec3::ZERO;
        let mut s = Vec3::ZERO;
        assert_eq!(*m.get_translation(&mut t), Vec3::new(1.0, 2.0, 3.0));
        assert!(m.get_scaling(&mut s).equals(&Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn get_rotation_recovers_half_turn() {
        // Trace is negative: exercises the non-trace branches.
        let q = [0.0, 0.0, 1.0, 0.0];
        let mut m = Mat4::IDENTITY;
        m.from_quat(&q);
        let mut back = [0.0; 4];
        m.get_rotation(&mut back);
        assert!(back.iter().zip(q).all(|(a, b)| crate::equals(a.abs(), b)));
    }

    #[test]
    fn look_at_same_point_is_identity() {
        let mut m = sample();
        let eye = Vec3::new(1.0, 2.0, 3.0);
        m.look_at(&eye, &eye, &Vec3::UNIT_Y);
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn look_at_parallel_up_zeroes_side_axis() {
        let mut m = Mat4::IDENTITY;
        m.look_at(&Vec3::new(0.0, 5.0, 0.0), &Vec3::ZERO, &Vec3::UNIT_Y);
        let cols = m.to_array();
        assert_eq!([cols[0], cols[4], cols[8]], [0.0, 0.0, 0.0]);
        assert!(cols.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn right_angle_perspective_has_unit_focal_length() {
        let mut p = Mat4::IDENTITY;
        p.perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
        assert!(crate::equals(p[0], 1.0));
        assert!(crate::equals(p[5], 1.0));
        assert_eq!(p[11], -1.0);
        assert_eq!(p[15], 0.0);
    }
}
