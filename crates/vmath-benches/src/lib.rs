// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for the vmath benchmarks.

use vmath::{Mat4, Vec3};

/// Deterministic batch of `n` points spread over a cube of side 20.
pub fn point_cloud(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Vec3::new((t * 0.37).sin() * 10.0, (t * 0.11).cos() * 10.0, t % 20.0 - 10.0)
        })
        .collect()
}

/// A typical model-view-projection chain: perspective, camera, then a TRS model.
pub fn mvp() -> Mat4 {
    let mut proj = Mat4::identity();
    proj.perspective(core::f64::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
    let mut view = Mat4::identity();
    view.look_at(
        &Vec3::new(4.0, 3.0, 8.0),
        &Vec3::ZERO,
        &Vec3::new(0.0, 1.0, 0.0),
    );
    let mut model = Mat4::identity();
    model.from_rotation_translation_scale(
        &[0.0, 0.382_683_432_365_089_8, 0.0, 0.923_879_532_511_286_7],
        &Vec3::new(1.0, -2.0, 0.5),
        &Vec3::new(2.0, 2.0, 2.0),
    );
    proj * view * model
}
