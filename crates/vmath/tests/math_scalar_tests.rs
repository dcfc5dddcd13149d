// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use vmath::{
    approx, clamp, clamp01, equals, is_power_of_two, lerp, random_range_int_with,
    random_range_with, to_degrees, to_radians, Prng, Tolerance, EPSILON,
};

mod common;
use common::approx_eq;

#[test]
fn is_power_of_two_cases() {
    assert!(!is_power_of_two(0));
    assert!(is_power_of_two(1));
    assert!(!is_power_of_two(3));
    assert!(!is_power_of_two(1023));
    assert!(is_power_of_two(1024));
    assert!(is_power_of_two(1 << 63));
    assert!(!is_power_of_two(u64::MAX));
}

#[test]
fn clamp_and_clamp01() {
    assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
    assert_eq!(clamp(-5.0, 0.0, 3.0), 0.0);
    assert_eq!(clamp(1.5, 0.0, 3.0), 1.5);
    assert_eq!(clamp01(1.2), 1.0);
    assert_eq!(clamp01(-0.2), 0.0);
}

#[test]
fn lerp_extrapolates_outside_unit_interval() {
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
    assert_eq!(lerp(2.0, 4.0, -1.0), 0.0);
}

#[test]
fn lerp_endpoints_are_exact() {
    let (a, b) = (25.73004860596238, -47.842221048227664);
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
}

#[test]
fn deg_rad_roundtrip_basic_angles() {
    for deg in [0.0, 45.0, 90.0, 180.0, -90.0, 720.0] {
        approx_eq(to_degrees(to_radians(deg)), deg);
    }
    approx_eq(to_radians(180.0), core::f64::consts::PI);
}

#[test]
fn approx_uses_caller_bound() {
    assert!(approx(1.0, 1.05, 0.1));
    assert!(!approx(1.0, 1.05, 0.01));
    assert!(approx(1.0, 1.0 + EPSILON / 2.0, EPSILON));
}

#[test]
fn equals_is_reflexive_and_symmetric() {
    for v in [0.0, -1.0, 1e-9, 1e9, f64::MIN_POSITIVE] {
        assert!(equals(v, v));
    }
    assert_eq!(equals(1.0, 1.0 + 5e-7), equals(1.0 + 5e-7, 1.0));
}

#[test]
fn custom_tolerance_widens_comparison() {
    let loose = Tolerance::new(1e-2, 1e-2);
    assert!(loose.accepts(1.0, 1.005));
    assert!(!Tolerance::DEFAULT.accepts(1.0, 1.005));
}

#[test]
fn seeded_random_range_is_reproducible_and_bounded() {
    let mut a = Prng::from_seed_u64(42);
    let mut b = Prng::from_seed_u64(42);
    for _ in 0..256 {
        let x = random_range_with(&mut a, -2.0, 5.0);
        let y = random_range_with(&mut b, -2.0, 5.0);
        assert_eq!(x.to_bits(), y.to_bits());
        assert!((-2.0..5.0).contains(&x));
    }
    let mut rng = Prng::from_seed_u64(1);
    let mut seen = [false; 3];
    for _ in 0..256 {
        let i = random_range_int_with(&mut rng, 0.0, 3.0);
        seen[usize::try_from(i).unwrap()] = true;
    }
    assert_eq!(seen, [true; 3]);
}

#[test]
fn default_source_stays_in_range() {
    for _ in 0..64 {
        let r = vmath::random();
        assert!((0.0..1.0).contains(&r));
        let v = vmath::random_range(10.0, 11.0);
        assert!((10.0..11.0).contains(&v));
        let i = vmath::random_range_int(-4.0, -1.0);
        assert!((-4..-1).contains(&i));
    }
}
