// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Packed scalar buffers.
//!
//! Vertex data usually arrives as one flat `[f64]` holding interleaved
//! attributes. [`for_each`] walks such a buffer with an arbitrary stride and
//! offset; [`view`]/[`view_mut`]/[`flatten`] reinterpret tightly packed
//! buffers as vector slices without copying.

use bytemuck::Pod;

use crate::MathError;

/// A vector type stored as `COMPONENTS` consecutive `f64`s.
pub trait PackedVector: Pod {
    /// Number of scalar components.
    const COMPONENTS: usize;

    /// Reads a vector from the first `COMPONENTS` scalars of `src`.
    /// Missing trailing components read as zero.
    fn read_from(src: &[f64]) -> Self;

    /// Writes the components into the first `COMPONENTS` scalars of `dst`.
    fn write_to(&self, dst: &mut [f64]);
}

/// Applies `f` to each vector packed in `buffer`, writing the result back.
///
/// * `stride` is the distance in scalars between consecutive vectors; 0 means
///   `V::COMPONENTS` (tightly packed).
/// * `offset` is the index of the first vector's first component.
/// * `count` limits the number of vectors; 0 walks to the end of the buffer.
///
/// A trailing vector that would extend past the end of `buffer` is skipped.
/// Returns the number of vectors visited.
///
/// ```
/// use vmath::{for_each, Vec2};
/// // x, y, pad
/// let mut buf = [1.0, 2.0, 0.0, 3.0, 4.0, 0.0];
/// let visited = for_each::<Vec2>(&mut buf, 3, 0, 0, |v| *v = *v * 10.0);
/// assert_eq!(visited, 2);
/// assert_eq!(buf, [10.0, 20.0, 0.0, 30.0, 40.0, 0.0]);
/// ```
pub fn for_each<V: PackedVector>(
    buffer: &mut [f64],
    stride: usize,
    offset: usize,
    count: usize,
    mut f: impl FnMut(&mut V),
) -> usize {
    let stride = if stride == 0 { V::COMPONENTS } else { stride };
    let limit = if count == 0 {
        buffer.len()
    } else {
        count
            .saturating_mul(stride)
            .saturating_add(offset)
            .min(buffer.len())
    };

    let mut visited = 0;
    let mut start = offset;
    while start < limit {
        let Some(slot) = buffer.get_mut(start..start + V::COMPONENTS) else {
            tracing::trace!(start, len = limit, "for_each: skipping partial trailing vector");
            break;
        };
        let mut v = V::read_from(slot);
        f(&mut v);
        v.write_to(slot);
        visited += 1;
        start = start.saturating_add(stride);
    }
    visited
}

/// Views a tightly packed buffer as a slice of vectors.
///
/// Fails with [`MathError::BufferLength`] when `flat.len()` is not a multiple
/// of `V::COMPONENTS`.
pub fn view<V: PackedVector>(flat: &[f64]) -> Result<&[V], MathError> {
    bytemuck::try_cast_slice(flat).map_err(|_| MathError::BufferLength {
        len: flat.len(),
        components: V::COMPONENTS,
    })
}

/// Mutable variant of [`view`].
pub fn view_mut<V: PackedVector>(flat: &mut [f64]) -> Result<&mut [V], MathError> {
    let len = flat.len();
    bytemuck::try_cast_slice_mut(flat).map_err(|_| MathError::BufferLength {
        len,
        components: V::COMPONENTS,
    })
}

/// Views a slice of vectors as their packed components.
pub fn flatten<V: PackedVector>(vectors: &[V]) -> &[f64] {
    bytemuck::cast_slice(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec3, Vec4};

    #[test]
    fn offset_and_count_limit_the_walk() {
        let mut buf = [9.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let visited = for_each::<Vec3>(&mut buf, 0, 1, 2, |v| v.x = 0.0);
        assert_eq!(visited, 2);
        assert_eq!(buf, [9.0, 0.0, 2.0, 3.0, 0.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn partial_trailing_vector_is_skipped() {
        let mut buf = [1.0, 1.0, 1.0, 1.0, 1.0];
        let visited = for_each::<Vec3>(&mut buf, 0, 0, 0, |v| *v = Vec3::ZERO);
        assert_eq!(visited, 1);
        assert_eq!(buf, [0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn count_beyond_buffer_is_clamped() {
        let mut buf = [1.0; 8];
        let visited = for_each::<Vec4>(&mut buf, 4, 0, 10, |v| v.w = 2.0);
        assert_eq!(visited, 2);
        assert_eq!(buf[3], 2.0);
        assert_eq!(buf[7], 2.0);
    }

    #[test]
    fn view_rejects_ragged_buffers() {
        let flat = [0.0; 7];
        assert_eq!(
            view::<Vec3>(&flat).err(),
            Some(MathError::BufferLength {
                len: 7,
                components: 3
            })
        );
    }

    #[test]
    fn view_and_flatten_share_storage() {
        let mut flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        {
            let vs = view_mut::<Vec3>(&mut flat).unwrap();
            vs[1].y = 50.0;
        }
        let vs = view::<Vec3>(&flat).unwrap();
        assert_eq!(vs.len(), 2);
        assert_eq!(flatten(vs), &[1.0, 2.0, 3.0, 4.0, 50.0, 6.0]);
    }
}
