// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use vmath::{Mat4, Vec3};

pub fn approx_eq(a: f64, b: f64) {
    assert!(vmath::equals(a, b), "expected {b}, got {a} (diff {})", (a - b).abs());
}

pub fn approx_vec3(a: Vec3, b: Vec3) {
    assert!(a.equals(&b), "expected {b}, got {a}");
}

pub fn approx_mat4(a: &Mat4, b: &Mat4) {
    assert!(a.equals(b), "expected {b}, got {a}");
}

/// A well-conditioned affine transform used across tests.
pub fn sample_transform() -> Mat4 {
    let q = quat_axis_angle(Vec3::new(1.0, 2.0, 2.0), 0.9);
    let mut m = Mat4::identity();
    m.from_rotation_translation_scale(&q, &Vec3::new(3.0, -1.0, 2.0), &Vec3::new(1.5, 0.5, 2.0));
    m
}

/// Unit quaternion `[x, y, z, w]` for a rotation of `rad` about `axis`.
pub fn quat_axis_angle(axis: Vec3, rad: f64) -> [f64; 4] {
    let n = axis.normalized();
    let (s, c) = (rad * 0.5).sin_cos();
    [n.x * s, n.y * s, n.z * s, c]
}
