// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::FRAC_PI_2;

use vmath::{FieldOfView, Mat4, Vec3, Vec4};

mod common;
use common::{approx_eq, approx_mat4, approx_vec3};

fn project(m: &Mat4, p: Vec3) -> Vec3 {
    let mut out = Vec3::zero();
    out.transform_mat4(&p, m);
    out
}

#[test]
fn ortho_maps_box_to_clip_cube() {
    let mut m = Mat4::identity();
    m.ortho(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0);
    approx_vec3(project(&m, Vec3::new(-2.0, -1.0, -0.5)), Vec3::new(-1.0, -1.0, -1.0));
    approx_vec3(project(&m, Vec3::new(2.0, 1.0, -10.0)), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn frustum_maps_near_corners_to_clip_corners() {
    let mut m = Mat4::identity();
    m.frustum(-1.0, 1.0, -0.5, 0.5, 1.0, 50.0);
    approx_vec3(project(&m, Vec3::new(1.0, 0.5, -1.0)), Vec3::new(1.0, 1.0, -1.0));
    approx_vec3(project(&m, Vec3::new(-50.0, -25.0, -50.0)), Vec3::new(-1.0, -1.0, 1.0));
}

#[test]
fn symmetric_frustum_equals_perspective() {
    let (near, far) = (0.1, 100.0);
    let fovy = 1.0_f64;
    let aspect = 16.0 / 9.0;
    let top = near * (fovy / 2.0).tan();
    let right = top * aspect;

    let mut p = Mat4::identity();
    p.perspective(fovy, aspect, near, far);
    let mut f = Mat4::identity();
    f.frustum(-right, right, -top, top, near, far);
    approx_mat4(&p, &f);
}

#[test]
fn field_of_view_projection_matches_perspective_in_xy() {
    let fov = FieldOfView {
        up_degrees: 45.0,
        down_degrees: 45.0,
        left_degrees: 45.0,
        right_degrees: 45.0,
    };
    let mut m = Mat4::identity();
    m.perspective_from_field_of_view(&fov, 1.0, 10.0);
    let mut p = Mat4::identity();
    p.perspective(FRAC_PI_2, 1.0, 1.0, 10.0);

    for i in [0, 1, 4, 5, 8, 9, 11] {
        approx_eq(m[i], p[i]);
    }
    // Depth lands in [0, 1].
    approx_eq(project(&m, Vec3::new(0.0, 0.0, -1.0)).z, 0.0);
    approx_eq(project(&m, Vec3::new(0.0, 0.0, -10.0)).z, 1.0);
}

#[test]
fn asymmetric_field_of_view_shifts_center() {
    let fov = FieldOfView {
        up_degrees: 30.0,
        down_degrees: 30.0,
        left_degrees: 20.0,
        right_degrees: 40.0,
    };
    let mut m = Mat4::identity();
    m.perspective_from_field_of_view(&fov, 1.0, 10.0);
    // The right edge of the view volume at depth 1 lands on x = +1.
    let right_edge = vmath::to_radians(40.0).tan();
    approx_eq(project(&m, Vec3::new(right_edge, 0.0, -1.0)).x, 1.0);
    let left_edge = -vmath::to_radians(20.0).tan();
    approx_eq(project(&m, Vec3::new(left_edge, 0.0, -1.0)).x, -1.0);
}

#[test]
fn look_at_places_target_on_negative_z() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let center = Vec3::new(-1.0, 0.5, 2.0);
    let mut view = Mat4::identity();
    view.look_at(&eye, &center, &Vec3::new(0.0, 1.0, 0.0));

    approx_vec3(project(&view, eye), Vec3::zero());
    let target = project(&view, center);
    approx_eq(target.x, 0.0);
    approx_eq(target.y, 0.0);
    approx_eq(target.z, -eye.distance(&center));

    // Rigid: the upper 3x3 is orthonormal.
    let mut scale = Vec3::zero();
    view.get_scaling(&mut scale);
    approx_vec3(scale, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn look_at_with_coincident_points_is_identity() {
    let mut view = Mat4::identity();
    view.from_translation(&Vec3::new(9.0, 9.0, 9.0));
    let p = Vec3::new(1.0, 1.0, 1.0);
    view.look_at(&p, &Vec3::new(1.0, 1.0, 1.0 + 1e-8), &Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(view, Mat4::identity());
}

#[test]
fn view_projection_pipeline() {
    let mut view = Mat4::identity();
    view.look_at(&Vec3::new(0.0, 0.0, 5.0), &Vec3::zero(), &Vec3::new(0.0, 1.0, 0.0));
    let mut proj = Mat4::identity();
    proj.perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    let clip = proj * view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    approx_eq(clip.w, 5.0);
    approx_eq(clip.x, 0.0);
    approx_eq(clip.y, 0.0);
}
