// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use core::f64::consts::{PI, TAU};

use crate::{Mat3, Mat4, Quaternion, RandomSource};

/// Three-component vector used for positions, directions and scale factors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl_vector!(Vec3, 3, "vec3", x, y, z);

impl Vec3 {
    /// Unit vector along the X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product `a × b`.
    pub fn cross(&mut self, a: &Self, b: &Self) -> &mut Self {
        let (ax, ay, az) = (a.x, a.y, a.z);
        let (bx, by, bz) = (b.x, b.y, b.z);
        self.x = ay * bz - az * by;
        self.y = az * bx - ax * bz;
        self.z = ax * by - ay * bx;
        self
    }

    /// Hermite interpolation between `a` and `d` with control points `b` and
    /// `c`.
    pub fn hermite(&mut self, a: &Self, b: &Self, c: &Self, d: &Self, t: f64) -> &mut Self {
        let t2 = t * t;
        let f1 = t2 * (2.0 * t - 3.0) + 1.0;
        let f2 = t2 * (t - 2.0) + t;
        let f3 = t2 * (t - 1.0);
        let f4 = t2 * (3.0 - 2.0 * t);
        self.blend(a, b, c, d, [f1, f2, f3, f4])
    }

    /// Cubic Bézier interpolation between `a` and `d` with control points `b`
    /// and `c`.
    pub fn bezier(&mut self, a: &Self, b: &Self, c: &Self, d: &Self, t: f64) -> &mut Self {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        let f1 = inv2 * inv;
        let f2 = 3.0 * t * inv2;
        let f3 = 3.0 * t2 * inv;
        let f4 = t2 * t;
        self.blend(a, b, c, d, [f1, f2, f3, f4])
    }

    fn blend(&mut self, a: &Self, b: &Self, c: &Self, d: &Self, f: [f64; 4]) -> &mut Self {
        self.x = a.x * f[0] + b.x * f[1] + c.x * f[2] + d.x * f[3];
        self.y = a.y * f[0] + b.y * f[1] + c.y * f[2] + d.y * f[3];
        self.z = a.z * f[0] + b.z * f[1] + c.z * f[2] + d.z * f[3];
        self
    }

    /// Random direction of length `scale` drawn from `rng`, uniform over the
    /// sphere.
    pub fn random_with<R: RandomSource + ?Sized>(&mut self, rng: &mut R, scale: f64) -> &mut Self {
        let r = rng.next_f64() * TAU;
        let z = rng.next_f64() * 2.0 - 1.0;
        let z_scale = (1.0 - z * z).sqrt() * scale;
        self.x = r.cos() * z_scale;
        self.y = r.sin() * z_scale;
        self.z = z * scale;
        self
    }

    /// Applies `m` to the point `(a, 1)` with perspective divide.
    ///
    /// A homogeneous `w` of zero is treated as 1.
    pub fn transform_mat4(&mut self, a: &Self, m: &Mat4) -> &mut Self {
        let m = &m.m;
        let (x, y, z) = (a.x, a.y, a.z);
        let mut w = m[3] * x + m[7] * y + m[11] * z + m[15];
        if w == 0.0 || w.is_nan() {
            tracing::trace!("vec3 transform_mat4: w is zero, skipping divide");
            w = 1.0;
        }
        self.x = (m[0] * x + m[4] * y + m[8] * z + m[12]) / w;
        self.y = (m[1] * x + m[5] * y + m[9] * z + m[13]) / w;
        self.z = (m[2] * x + m[6] * y + m[10] * z + m[14]) / w;
        self
    }

    /// `self = m * a`.
    pub fn transform_mat3(&mut self, a: &Self, m: &Mat3) -> &mut Self {
        let m = &m.m;
        let (x, y, z) = (a.x, a.y, a.z);
        self.x = x * m[0] + y * m[3] + z * m[6];
        self.y = x * m[1] + y * m[4] + z * m[7];
        self.z = x * m[2] + y * m[5] + z * m[8];
        self
    }

    /// Rotates `a` by the unit quaternion `q` (`q * a * q⁻¹`).
    pub fn transform_quat<Q: Quaternion + ?Sized>(&mut self, a: &Self, q: &Q) -> &mut Self {
        let (x, y, z) = (a.x, a.y, a.z);
        let (qx, qy, qz, qw) = (q.x(), q.y(), q.z(), q.w());

        // q * v
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // (q * v) * conj(q)
        self.x = ix * qw + iw * -qx + iy * -qz - iz * -qy;
        self.y = iy * qw + iw * -qy + iz * -qx - ix * -qz;
        self.z = iz * qw + iw * -qz + ix * -qy - iy * -qx;
        self
    }

    /// Rotates `a` about the X axis through `origin` by `rad`.
    pub fn rotate_x(&mut self, a: &Self, origin: &Self, rad: f64) -> &mut Self {
        let (s, c) = rad.sin_cos();
        let p = [a.x - origin.x, a.y - origin.y, a.z - origin.z];
        let r = [p[0], p[1] * c - p[2] * s, p[1] * s + p[2] * c];
        self.set(r[0] + origin.x, r[1] + origin.y, r[2] + origin.z)
    }

    /// Rotates `a` about the Y axis through `origin` by `rad`.
    pub fn rotate_y(&mut self, a: &Self, origin: &Self, rad: f64) -> &mut Self {
        let (s, c) = rad.sin_cos();
        let p = [a.x - origin.x, a.y - origin.y, a.z - origin.z];
        let r = [p[2] * s + p[0] * c, p[1], p[2] * c - p[0] * s];
        self.set(r[0] + origin.x, r[1] + origin.y, r[2] + origin.z)
    }

    /// Rotates `a` about the Z axis through `origin` by `rad`.
    pub fn rotate_z(&mut self, a: &Self, origin: &Self, rad: f64) -> &mut Self {
        let (s, c) = rad.sin_cos();
        let p = [a.x - origin.x, a.y - origin.y, a.z - origin.z];
        let r = [p[0] * c - p[1] * s, p[0] * s + p[1] * c, p[2]];
        self.set(r[0] + origin.x, r[1] + origin.y, r[2] + origin.z)
    }

    /// Angle between `self` and `b` in radians, in `[0, π]`.
    ///
    /// Rounding that pushes the cosine outside `[-1, 1]` is clamped to the
    /// matching end of the range.
    pub fn angle(&self, b: &Self) -> f64 {
        let cosine = self.normalized().dot(&b.normalized());
        if cosine > 1.0 {
            0.0
        } else if cosine < -1.0 {
            PI
        } else {
            cosine.acos()
        }
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        let mut out = Vec3::ZERO;
        out.transform_mat3(&rhs, &self);
        out
    }
}
