// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Operation sets shared by every vector arity and every matrix size.
//!
//! Arity-specific formulas (cross products, transforms, projections) live in
//! the per-type modules; these macros only cover the componentwise and
//! elementwise surface that is identical across sizes.

use core::fmt;

/// Writes `label(c0, c1, ...)`.
pub(crate) fn write_components(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    components: &[f64],
) -> fmt::Result {
    write!(f, "{label}(")?;
    for (i, v) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str(")")
}

/// Componentwise vector operations. The receiver of every `&mut self`
/// operation is the output.
macro_rules! impl_vector {
    ($name:ident, $n:literal, $label:literal, $($f:ident),+) => {
        impl $name {
            /// Vector with every component zero.
            pub const ZERO: Self = Self { $($f: 0.0),+ };

            /// Creates a zero vector.
            pub const fn zero() -> Self {
                Self::ZERO
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [f64; $n] {
                [$(self.$f),+]
            }

            /// Copies `a` into `self`.
            pub fn copy(&mut self, a: &Self) -> &mut Self {
                *self = *a;
                self
            }

            /// Overwrites every component.
            pub fn set(&mut self, $($f: f64),+) -> &mut Self {
                $(self.$f = $f;)+
                self
            }

            /// `self = a + b`.
            pub fn add(&mut self, a: &Self, b: &Self) -> &mut Self {
                $(self.$f = a.$f + b.$f;)+
                self
            }

            /// `self = a - b`.
            pub fn subtract(&mut self, a: &Self, b: &Self) -> &mut Self {
                $(self.$f = a.$f - b.$f;)+
                self
            }

            /// Componentwise product.
            pub fn multiply(&mut self, a: &Self, b: &Self) -> &mut Self {
                $(self.$f = a.$f * b.$f;)+
                self
            }

            /// Componentwise quotient. Zero divisors follow IEEE-754.
            pub fn divide(&mut self, a: &Self, b: &Self) -> &mut Self {
                $(self.$f = a.$f / b.$f;)+
                self
            }

            /// Componentwise ceiling.
            pub fn ceil(&mut self, a: &Self) -> &mut Self {
                $(self.$f = a.$f.ceil();)+
                self
            }

            /// Componentwise floor.
            pub fn floor(&mut self, a: &Self) -> &mut Self {
                $(self.$f = a.$f.floor();)+
                self
            }

            /// Componentwise rounding; half-way cases round toward `+inf`.
            pub fn round(&mut self, a: &Self) -> &mut Self {
                $(self.$f = crate::scalar::round_half_up(a.$f);)+
                self
            }

            /// Componentwise minimum.
            pub fn min(&mut self, a: &Self, b: &Self) -> &mut Self {
                $(self.$f = a.$f.min(b.$f);)+
                self
            }

            /// Componentwise maximum.
            pub fn max(&mut self, a: &Self, b: &Self) -> &mut Self {
                $(self.$f = a.$f.max(b.$f);)+
                self
            }

            /// `self = a * s`.
            pub fn scale(&mut self, a: &Self, s: f64) -> &mut Self {
                $(self.$f = a.$f * s;)+
                self
            }

            /// `self = a + b * s`.
            pub fn scale_and_add(&mut self, a: &Self, b: &Self, s: f64) -> &mut Self {
                $(self.$f = a.$f + b.$f * s;)+
                self
            }

            /// Euclidean distance to `b`.
            pub fn distance(&self, b: &Self) -> f64 {
                self.squared_distance(b).sqrt()
            }

            /// Squared Euclidean distance to `b`.
            pub fn squared_distance(&self, b: &Self) -> f64 {
                let d = Self { $($f: b.$f - self.$f),+ };
                d.dot(&d)
            }

            /// Euclidean length.
            pub fn length(&self) -> f64 {
                self.squared_length().sqrt()
            }

            /// Squared Euclidean length.
            pub fn squared_length(&self) -> f64 {
                self.dot(self)
            }

            /// Dot product.
            pub fn dot(&self, b: &Self) -> f64 {
                let mut sum = 0.0;
                $(sum += self.$f * b.$f;)+
                sum
            }

            /// `self = -a`.
            pub fn negate(&mut self, a: &Self) -> &mut Self {
                $(self.$f = -a.$f;)+
                self
            }

            /// Componentwise reciprocal; zero components become `inf`.
            pub fn inverse(&mut self, a: &Self) -> &mut Self {
                $(self.$f = 1.0 / a.$f;)+
                self
            }

            /// Componentwise reciprocal that writes `0` for any component
            /// whose magnitude is below [`EPSILON`](crate::EPSILON).
            pub fn inverse_safe(&mut self, a: &Self) -> &mut Self {
                $(
                    self.$f = if a.$f.abs() < crate::EPSILON { 0.0 } else { 1.0 / a.$f };
                )+
                self
            }

            /// Scales `a` to unit length.
            ///
            /// When `a` has zero length `self` is left as it was.
            pub fn normalize(&mut self, a: &Self) -> &mut Self {
                let len = a.squared_length();
                if len > 0.0 {
                    let inv = 1.0 / len.sqrt();
                    $(self.$f = a.$f * inv;)+
                }
                self
            }

            /// Returns a unit-length copy; a zero vector is returned unchanged.
            pub fn normalized(&self) -> Self {
                let mut out = *self;
                out.normalize(self);
                out
            }

            /// Componentwise [`lerp`](crate::lerp) from `a` to `b`; both
            /// endpoints are reproduced exactly.
            pub fn lerp(&mut self, a: &Self, b: &Self, t: f64) -> &mut Self {
                $(self.$f = crate::scalar::lerp(a.$f, b.$f, t);)+
                self
            }

            /// Random direction scaled to length `scale`, from the thread default
            /// source.
            pub fn random(&mut self, scale: f64) -> &mut Self {
                crate::random::with_default(|rng| {
                    self.random_with(rng, scale);
                });
                self
            }

            /// Runs an out-parameter operation with `self` as both input and
            /// output.
            ///
            /// ```
            #[doc = concat!("use vmath::", stringify!($name), ";")]
            #[doc = concat!("let mut v = ", stringify!($name), "::from([3.0; ", $n, "]);")]
            /// v.update_in_place(|out, a| {
            ///     out.scale(a, 2.0);
            /// });
            #[doc = concat!("assert_eq!(v.to_array(), [6.0; ", $n, "]);")]
            /// ```
            pub fn update_in_place(&mut self, f: impl FnOnce(&mut Self, &Self)) -> &mut Self {
                let a = *self;
                f(self, &a);
                self
            }

            /// Bitwise (`==`) equality of every component.
            pub fn exact_equals(&self, b: &Self) -> bool {
                true $(&& self.$f == b.$f)+
            }

            /// [`equals`](crate::equals) applied to every component.
            pub fn equals(&self, b: &Self) -> bool {
                true $(&& crate::scalar::equals(self.$f, b.$f))+
            }

            /// Componentwise comparison under a caller-chosen tolerance.
            pub fn equals_with(&self, b: &Self, tolerance: crate::Tolerance) -> bool {
                true $(&& tolerance.accepts(self.$f, b.$f))+
            }

            /// Applies `f` to every vector packed in `buffer`.
            ///
            /// `stride` of 0 means tightly packed; `count` of 0 visits every
            /// vector up to the end of the buffer. Returns the number of
            /// vectors visited. See [`crate::buffer::for_each`].
            pub fn for_each(
                buffer: &mut [f64],
                stride: usize,
                offset: usize,
                count: usize,
                f: impl FnMut(&mut Self),
            ) -> usize {
                crate::buffer::for_each::<Self>(buffer, stride, offset, count, f)
            }

            /// Views a tightly packed scalar buffer as vectors without copying.
            pub fn slice_from_flat(flat: &[f64]) -> Result<&[Self], crate::MathError> {
                crate::buffer::view(flat)
            }

            /// Mutable variant of [`Self::slice_from_flat`].
            pub fn slice_from_flat_mut(flat: &mut [f64]) -> Result<&mut [Self], crate::MathError> {
                crate::buffer::view_mut(flat)
            }

            /// Views vectors as their packed scalar components.
            pub fn flatten(vectors: &[Self]) -> &[f64] {
                crate::buffer::flatten(vectors)
            }
        }

        impl From<[f64; $n]> for $name {
            fn from(value: [f64; $n]) -> Self {
                let [$($f),+] = value;
                Self { $($f),+ }
            }
        }

        impl From<$name> for [f64; $n] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                crate::macros::write_components(f, $label, &self.to_array())
            }
        }

        impl crate::buffer::PackedVector for $name {
            const COMPONENTS: usize = $n;

            fn read_from(src: &[f64]) -> Self {
                let mut out = Self::ZERO;
                let mut it = src.iter().copied();
                $(out.$f = it.next().unwrap_or(0.0);)+
                out
            }

            fn write_to(&self, dst: &mut [f64]) {
                for (slot, v) in dst.iter_mut().zip(self.to_array()) {
                    *slot = v;
                }
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                let mut out = Self::ZERO;
                $name::add(&mut out, &self, &rhs);
                out
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                let mut out = Self::ZERO;
                out.subtract(&self, &rhs);
                out
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                let mut out = Self::ZERO;
                out.negate(&self);
                out
            }
        }

        impl core::ops::Mul<f64> for $name {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                let mut out = Self::ZERO;
                out.scale(&self, rhs);
                out
            }
        }

        impl core::ops::Mul<$name> for f64 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign<f64> for $name {
            fn mul_assign(&mut self, rhs: f64) {
                *self = *self * rhs;
            }
        }
    };
}

/// Elementwise matrix operations over the column-major `m` array. Each type
/// supplies `IDENTITY` and `invert`; `$frob_bias` accounts for implicit
/// elements (the affine bottom row) in the Frobenius norm.
macro_rules! impl_matrix {
    ($name:ident, $n:literal, $label:literal, $frob_bias:expr) => {
        impl $name {
            /// Builds a matrix from column-major elements.
            pub const fn from_array(m: [f64; $n]) -> Self {
                Self { m }
            }

            /// Returns the column-major elements.
            pub const fn to_array(self) -> [f64; $n] {
                self.m
            }

            /// Borrows the column-major elements.
            pub fn as_array(&self) -> &[f64; $n] {
                &self.m
            }

            /// Mutably borrows the column-major elements.
            pub fn as_mut_array(&mut self) -> &mut [f64; $n] {
                &mut self.m
            }

            /// Copies `a` into `self`.
            pub fn copy(&mut self, a: &Self) -> &mut Self {
                self.m = a.m;
                self
            }

            /// Resets `self` to the identity.
            pub fn set_identity(&mut self) -> &mut Self {
                *self = Self::IDENTITY;
                self
            }

            /// `self = a + b`, elementwise.
            pub fn add(&mut self, a: &Self, b: &Self) -> &mut Self {
                self.m = core::array::from_fn(|i| a.m[i] + b.m[i]);
                self
            }

            /// `self = a - b`, elementwise.
            pub fn subtract(&mut self, a: &Self, b: &Self) -> &mut Self {
                self.m = core::array::from_fn(|i| a.m[i] - b.m[i]);
                self
            }

            /// `self = a * s`, elementwise.
            pub fn multiply_scalar(&mut self, a: &Self, s: f64) -> &mut Self {
                self.m = core::array::from_fn(|i| a.m[i] * s);
                self
            }

            /// `self = a + b * s`, elementwise.
            pub fn multiply_scalar_and_add(&mut self, a: &Self, b: &Self, s: f64) -> &mut Self {
                self.m = core::array::from_fn(|i| a.m[i] + b.m[i] * s);
                self
            }

            /// Frobenius norm.
            pub fn frob(&self) -> f64 {
                let sum: f64 = self.m.iter().map(|v| v * v).sum();
                (sum + $frob_bias).sqrt()
            }

            /// Returns the transpose.
            pub fn transposed(&self) -> Self {
                let mut out = *self;
                out.transpose(self);
                out
            }

            /// Returns the inverse, or [`MathError::SingularMatrix`](crate::MathError).
            pub fn inverted(&self) -> Result<Self, crate::MathError> {
                let mut out = *self;
                if out.invert(self).is_none() {
                    return Err(crate::MathError::SingularMatrix);
                }
                Ok(out)
            }

            /// Runs an out-parameter operation with `self` as both input and
            /// output.
            pub fn update_in_place(&mut self, f: impl FnOnce(&mut Self, &Self)) -> &mut Self {
                let a = *self;
                f(self, &a);
                self
            }

            /// Bitwise (`==`) equality of every element.
            pub fn exact_equals(&self, b: &Self) -> bool {
                self.m == b.m
            }

            /// [`equals`](crate::equals) applied to every element.
            pub fn equals(&self, b: &Self) -> bool {
                self.m
                    .iter()
                    .zip(&b.m)
                    .all(|(&x, &y)| crate::scalar::equals(x, y))
            }

            /// Elementwise comparison under a caller-chosen tolerance.
            pub fn equals_with(&self, b: &Self, tolerance: crate::Tolerance) -> bool {
                self.m.iter().zip(&b.m).all(|(&x, &y)| tolerance.accepts(x, y))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl From<[f64; $n]> for $name {
            fn from(m: [f64; $n]) -> Self {
                Self { m }
            }
        }

        impl From<$name> for [f64; $n] {
            fn from(value: $name) -> Self {
                value.m
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f64;
            fn index(&self, index: usize) -> &f64 {
                &self.m[index]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                &mut self.m[index]
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                crate::macros::write_components(f, $label, &self.m)
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                let mut out = self;
                $name::add(&mut out, &self, &rhs);
                out
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                let mut out = self;
                out.subtract(&self, &rhs);
                out
            }
        }

        impl core::ops::Mul<f64> for $name {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                let mut out = self;
                out.multiply_scalar(&self, rhs);
                out
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let mut out = self;
                out.multiply(&self, &rhs);
                out
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}
