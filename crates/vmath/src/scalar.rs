// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector and matrix modules.

use core::f64::consts::PI;

/// Global epsilon used by tolerance comparisons and degeneracy guards.
pub const EPSILON: f64 = 1e-6;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Absolute/relative tolerance pair used by every `equals_with` comparison.
///
/// Two values compare equal when `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
/// [`Tolerance::DEFAULT`] uses [`EPSILON`] for both terms, which is exactly the
/// mixed rule behind [`equals`]: absolute for magnitudes up to 1, relative above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Allowed error for values near zero.
    pub absolute: f64,
    /// Allowed error as a fraction of the larger magnitude.
    pub relative: f64,
}

impl Tolerance {
    /// `EPSILON` absolute and relative tolerance.
    pub const DEFAULT: Self = Self {
        absolute: EPSILON,
        relative: EPSILON,
    };

    /// Builds a tolerance with independent absolute and relative terms.
    pub const fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Largest difference accepted between `a` and `b`.
    pub fn allowed_error(&self, a: f64, b: f64) -> f64 {
        self.absolute.max(self.relative * a.abs().max(b.abs()))
    }

    /// Returns `true` when `a` and `b` are within tolerance of each other.
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.allowed_error(a, b)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tests whether `a` and `b` are approximately equal.
///
/// Uses `|a - b| <= EPSILON * max(1, |a|, |b|)`: an absolute tolerance for
/// magnitudes up to 1 and a relative one beyond.
pub fn equals(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * 1.0_f64.max(a.abs()).max(b.abs())
}

/// Tests whether `a` and `b` differ by at most `max_diff`.
///
/// Pass [`EPSILON`] for the conventional default.
pub fn approx(a: f64, b: f64, max_diff: f64) -> bool {
    (a - b).abs() <= max_diff
}

/// Clamps `value` to `[min, max]`.
///
/// The lower bound is checked first, so with `min > max` any value below
/// `min` yields `min` and everything else yields `max`. No range validation is
/// performed.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Returns `true` if `x` is a power of two. Zero is not.
pub fn is_power_of_two(x: u64) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Linear interpolation `from * (1 - t) + to * t`.
///
/// Returns `from` exactly at `t = 0` and `to` exactly at `t = 1`. `t` is not
/// clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// Converts degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Rounds half-way cases toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_switches_from_absolute_to_relative() {
        assert!(equals(0.0, 1e-7));
        assert!(!equals(0.0, 1e-5));
        assert!(equals(1e6, 1e6 + 0.5));
        assert!(!equals(1e6, 1e6 + 2.0));
    }

    #[test]
    fn default_tolerance_matches_equals() {
        let tol = Tolerance::default();
        for (a, b) in [(0.0, 9e-7), (0.0, 2e-6), (1e6, 1e6 + 0.9), (-3.0, -3.000004)] {
            assert_eq!(tol.accepts(a, b), equals(a, b), "{a} vs {b}");
        }
    }

    #[test]
    fn round_half_up_matches_reference_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }

    #[test]
    fn clamp_with_inverted_bounds_takes_first_branch() {
        assert_eq!(clamp(-1.0, 2.0, 1.0), 2.0);
        assert_eq!(clamp(1.5, 2.0, 1.0), 2.0);
        assert_eq!(clamp(3.0, 2.0, 1.0), 1.0);
    }
}
