// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by the value-returning convenience layer.
///
/// The out-parameter API signals degenerate input with `None`; these variants
/// carry the same conditions for callers that prefer `?`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix determinant is exactly zero.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// A rotation axis was shorter than `EPSILON`.
    #[error("rotation axis is degenerate (length {length})")]
    DegenerateAxis {
        /// Euclidean length of the rejected axis.
        length: f64,
    },

    /// A flat scalar buffer cannot be viewed as whole vectors.
    #[error("buffer of {len} scalars is not a whole number of {components}-component vectors")]
    BufferLength {
        /// Number of scalars in the buffer.
        len: usize,
        /// Components per vector.
        components: usize,
    },
}
