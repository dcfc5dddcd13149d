// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::{Mat4, Quaternion, RandomSource};

/// Four-component vector, typically a homogeneous coordinate or an RGBA colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec4 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// W component.
    pub w: f64,
}

impl_vector!(Vec4, 4, "vec4", x, y, z, w);

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Random direction of length `scale` drawn from `rng`.
    ///
    /// Normalises four uniform draws, so the distribution is not uniform over
    /// the 4-sphere.
    pub fn random_with<R: RandomSource + ?Sized>(&mut self, rng: &mut R, scale: f64) -> &mut Self {
        let raw = Self::new(rng.next_f64(), rng.next_f64(), rng.next_f64(), rng.next_f64());
        self.normalize(&raw);
        let unit = *self;
        self.scale(&unit, scale)
    }

    /// `self = m * a`.
    pub fn transform_mat4(&mut self, a: &Self, m: &Mat4) -> &mut Self {
        let m = &m.m;
        let (x, y, z, w) = (a.x, a.y, a.z, a.w);
        self.x = m[0] * x + m[4] * y + m[8] * z + m[12] * w;
        self.y = m[1] * x + m[5] * y + m[9] * z + m[13] * w;
        self.z = m[2] * x + m[6] * y + m[10] * z + m[14] * w;
        self.w = m[3] * x + m[7] * y + m[11] * z + m[15] * w;
        self
    }

    /// Rotates the `xyz` part of `a` by the unit quaternion `q`; `w` passes
    /// through.
    pub fn transform_quat<Q: Quaternion + ?Sized>(&mut self, a: &Self, q: &Q) -> &mut Self {
        let (x, y, z) = (a.x, a.y, a.z);
        let (qx, qy, qz, qw) = (q.x(), q.y(), q.z(), q.w());

        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        self.x = ix * qw + iw * -qx + iy * -qz - iz * -qy;
        self.y = iy * qw + iw * -qy + iz * -qx - ix * -qz;
        self.z = iz * qw + iw * -qz + ix * -qy - iy * -qx;
        self.w = a.w;
        self
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        let mut out = Vec4::ZERO;
        out.transform_mat4(&rhs, &self);
        out
    }
}
