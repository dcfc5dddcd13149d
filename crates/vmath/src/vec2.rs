// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use core::f64::consts::TAU;

use crate::{Mat2, Mat23, Mat3, Mat4, RandomSource, Vec3};

/// Two-component vector.
///
/// Used for 2D positions, texture coordinates and the 2D affine pipeline
/// ([`Mat23`], [`Mat3`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl_vector!(Vec2, 2, "vec2", x, y);

impl Vec2 {
    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 2D cross product, written as the z axis of a [`Vec3`] (`x = y = 0`).
    pub fn cross<'o>(out: &'o mut Vec3, a: &Self, b: &Self) -> &'o mut Vec3 {
        out.set(0.0, 0.0, a.x * b.y - a.y * b.x)
    }

    /// Random direction of length `scale` drawn from `rng`.
    pub fn random_with<R: RandomSource + ?Sized>(&mut self, rng: &mut R, scale: f64) -> &mut Self {
        let r = rng.next_f64() * TAU;
        self.x = r.cos() * scale;
        self.y = r.sin() * scale;
        self
    }

    /// `self = m * a`.
    pub fn transform_mat2(&mut self, a: &Self, m: &Mat2) -> &mut Self {
        let [m00, m01, m02, m03] = m.m;
        let (x, y) = (a.x, a.y);
        self.x = m00 * x + m02 * y;
        self.y = m01 * x + m03 * y;
        self
    }

    /// Applies the affine transform `m` to the point `a`.
    pub fn transform_mat23(&mut self, a: &Self, m: &Mat23) -> &mut Self {
        let [m00, m01, m02, m03, m04, m05] = m.m;
        let (x, y) = (a.x, a.y);
        self.x = m00 * x + m02 * y + m04;
        self.y = m01 * x + m03 * y + m05;
        self
    }

    /// Applies `m` to `(a.x, a.y, 1)` and drops the third component.
    pub fn transform_mat3(&mut self, a: &Self, m: &Mat3) -> &mut Self {
        let m = &m.m;
        let (x, y) = (a.x, a.y);
        self.x = m[0] * x + m[3] * y + m[6];
        self.y = m[1] * x + m[4] * y + m[7];
        self
    }

    /// Applies `m` to `(a.x, a.y, 0, 1)` and keeps `x`, `y`.
    pub fn transform_mat4(&mut self, a: &Self, m: &Mat4) -> &mut Self {
        let m = &m.m;
        let (x, y) = (a.x, a.y);
        self.x = m[0] * x + m[4] * y + m[12];
        self.y = m[1] * x + m[5] * y + m[13];
        self
    }
}

impl core::ops::Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        let mut out = Vec2::ZERO;
        out.transform_mat2(&rhs, &self);
        out
    }
}

impl core::ops::Mul<Vec2> for Mat23 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        let mut out = Vec2::ZERO;
        out.transform_mat23(&rhs, &self);
        out
    }
}
