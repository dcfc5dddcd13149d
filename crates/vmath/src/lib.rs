// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! vmath: fixed-size vectors and matrices for real-time graphics and simulation.
//!
//! The crate provides `Vec2`/`Vec3`/`Vec4`, the square matrices
//! `Mat2`/`Mat3`/`Mat4`, the 2D affine `Mat23`, and a handful of scalar helpers
//! (`clamp`, `lerp`, tolerance comparisons, angle conversion, random variates).
//!
//! # Calling convention
//!
//! Every mutating operation takes its output as the `&mut self` receiver,
//! writes into it, and returns it for chaining. Both call forms work:
//! `Mat4::multiply(&mut out, &a, &b)` and `out.multiply(&a, &b)`.
//!
//! ```
//! use vmath::{Mat4, Vec3};
//! let mut m = Mat4::identity();
//! let mut p = Vec3::zero();
//! Mat4::from_translation(&mut m, &Vec3::new(1.0, 2.0, 3.0));
//! Vec3::transform_mat4(&mut p, &Vec3::new(1.0, 1.0, 1.0), &m);
//! assert_eq!(p.to_array(), [2.0, 3.0, 4.0]);
//! ```
//!
//! Borrowing rules forbid passing `out` as an input too; operations whose
//! aliased form matters (`transpose`, `translate`, `rotate*`) have explicit
//! `*_in_place` variants, and `update_in_place` covers the rest.
//!
//! Degenerate inputs (singular matrices, zero-length rotation axes) yield
//! `None` instead of a result; nothing in this crate panics on numeric input.
//! Operators (`+`, `-`, `*`) are available as a by-value convenience layer
//! implemented on top of the out-parameter forms.
//!
//! All matrices are column-major: element `m[col * rows + row]`.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]
// Column-major formulas read best with gl-style element names.
#![allow(clippy::similar_names, clippy::too_many_arguments)]

#[macro_use]
mod macros;

pub mod buffer;
mod error;
mod mat2;
mod mat23;
mod mat3;
mod mat4;
mod quat;
mod random;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use buffer::{for_each, PackedVector};
pub use error::MathError;
pub use mat2::{Ldu, Mat2};
pub use mat23::Mat23;
pub use mat3::Mat3;
pub use mat4::{FieldOfView, Mat4};
pub use quat::Quaternion;
pub use random::{
    random, random_range, random_range_int, random_range_int_with, random_range_with, Prng,
    RandomSource,
};
pub use scalar::{
    approx, clamp, clamp01, equals, is_power_of_two, lerp, to_degrees, to_radians, Tolerance,
    EPSILON,
};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
