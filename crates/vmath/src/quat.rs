// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Field contract for quaternions owned by the caller.
///
/// This crate performs no quaternion algebra; it only reads `(x, y, z, w)`
/// when converting to matrices or rotating vectors, and writes them when
/// extracting a rotation from a matrix. Normalisation is the implementor's
/// responsibility; the conversions assume a unit quaternion.
///
/// Implemented for `[f64; 4]` laid out as `[x, y, z, w]`.
pub trait Quaternion {
    /// Imaginary `i` component.
    fn x(&self) -> f64;
    /// Imaginary `j` component.
    fn y(&self) -> f64;
    /// Imaginary `k` component.
    fn z(&self) -> f64;
    /// Real component.
    fn w(&self) -> f64;
    /// Overwrites all four components.
    fn set_xyzw(&mut self, x: f64, y: f64, z: f64, w: f64);
}

impl Quaternion for [f64; 4] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn z(&self) -> f64 {
        self[2]
    }

    fn w(&self) -> f64 {
        self[3]
    }

    fn set_xyzw(&mut self, x: f64, y: f64, z: f64, w: f64) {
        *self = [x, y, z, w];
    }
}
