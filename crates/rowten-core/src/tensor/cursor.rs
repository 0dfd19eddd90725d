//! Chained per-dimension indexing cursors.
//!
//! A cursor is a transient view produced by [`Tensor::at`](super::Tensor::at)
//! or [`Tensor::at_mut`](super::Tensor::at_mut). Each application of
//! [`at`](Cursor::at) appends one index, recomputes the stride for the new
//! depth from the tensor's shape, and accumulates `index * stride` into the
//! running flat offset, progressively narrowing the addressed region until
//! a scalar is reached.
//!
//! Cursors borrow the originating tensor, so the tensor cannot be resized
//! (or otherwise mutated) while a cursor is live; the invalidation hazard
//! of a raw-pointer cursor becomes a compile-time error here.
//!
//! Indices are not validated against the dimension extents: a wild index
//! produces an out-of-range flat offset, and the storage access panics at
//! the allocation boundary rather than reading or writing outside it.

use crate::checks;
use crate::layout;
use crate::types::Shape;
use smallvec::smallvec;

/// Read-only chained-indexing cursor.
///
/// Holds the originating tensor's storage and shape, the index list
/// accumulated so far, the resulting flat offset, and the stride consumed
/// by the most recent index.
///
/// # Examples
///
/// ```
/// use rowten_core::Tensor;
///
/// let mut tensor = Tensor::<f64>::zeros(&[6, 5, 4]);
/// tensor[&[1, 2, 3]] = 8.0;
///
/// let cursor = tensor.at(1).at(2);
/// assert_eq!(cursor.depth(), 2);
/// assert_eq!(cursor.offset(), 1 * 20 + 2 * 4);
/// assert_eq!(*cursor.at(3).value(), 8.0);
/// ```
pub struct Cursor<'a, T> {
    data: &'a [T],
    shape: &'a [usize],
    indices: Shape,
    offset: usize,
    stride: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(data: &'a [T], shape: &'a [usize], index: usize) -> Self {
        let stride = layout::stride(shape, 0);
        Self {
            data,
            shape,
            indices: smallvec![index],
            offset: index * stride,
            stride,
        }
    }

    /// Apply the next per-dimension index, narrowing the addressed region.
    ///
    /// # Preconditions
    ///
    /// The cursor must not already be fully indexed (checked when
    /// [`checks`](crate::checks) are enabled). `index` itself is not
    /// validated against the dimension's extent.
    pub fn at(mut self, index: usize) -> Self {
        let dim = self.indices.len();
        checks::require(dim < self.shape.len(), || {
            format!(
                "cursor already fully indexed for rank {} tensor",
                self.shape.len()
            )
        });
        self.stride = layout::stride(self.shape, dim);
        self.offset += index * self.stride;
        self.indices.push(index);
        self
    }

    /// Number of indices applied so far.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Flat offset currently addressed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Stride consumed by the most recently applied index.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Read the element at the current flat offset.
    ///
    /// Valid at any depth; a partially indexed cursor reads the first
    /// element of the remaining subarray.
    ///
    /// # Panics
    ///
    /// Panics if the accumulated offset is outside the tensor's storage.
    pub fn value(&self) -> &'a T {
        &self.data[self.offset]
    }
}

/// Mutable chained-indexing cursor.
///
/// Like [`Cursor`], but borrows the tensor mutably so the final element
/// can be written through with [`set`](Self::set) or
/// [`value_mut`](Self::value_mut).
///
/// # Examples
///
/// ```
/// use rowten_core::Tensor;
///
/// let mut tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
/// tensor.at_mut(1).at(2).at(0).set(3.5);
/// assert_eq!(tensor[&[1, 2, 0]], 3.5);
///
/// *tensor.at_mut(1).at(2).at(0).value_mut() += 1.0;
/// assert_eq!(tensor[&[1, 2, 0]], 4.5);
/// ```
pub struct CursorMut<'a, T> {
    data: &'a mut [T],
    shape: &'a [usize],
    indices: Shape,
    offset: usize,
    stride: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], shape: &'a [usize], index: usize) -> Self {
        let stride = layout::stride(shape, 0);
        Self {
            data,
            shape,
            indices: smallvec![index],
            offset: index * stride,
            stride,
        }
    }

    /// Apply the next per-dimension index, narrowing the addressed region.
    ///
    /// Preconditions as for [`Cursor::at`].
    pub fn at(mut self, index: usize) -> Self {
        let dim = self.indices.len();
        checks::require(dim < self.shape.len(), || {
            format!(
                "cursor already fully indexed for rank {} tensor",
                self.shape.len()
            )
        });
        self.stride = layout::stride(self.shape, dim);
        self.offset += index * self.stride;
        self.indices.push(index);
        self
    }

    /// Number of indices applied so far.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Flat offset currently addressed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Stride consumed by the most recently applied index.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Read the element at the current flat offset.
    pub fn value(&self) -> &T {
        &self.data[self.offset]
    }

    /// Mutably borrow the element at the current flat offset.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.data[self.offset]
    }

    /// Write `value` through to the element at the current flat offset.
    pub fn set(&mut self, value: T) {
        self.data[self.offset] = value;
    }
}

#[cfg(test)]
mod tests {
    use crate::Tensor;

    #[test]
    fn test_cursor_accumulates_offset_and_stride() {
        let tensor = Tensor::<f64>::zeros(&[6, 5, 4]);

        let first = tensor.at(2);
        assert_eq!(first.depth(), 1);
        assert_eq!(first.stride(), 20);
        assert_eq!(first.offset(), 40);

        let second = first.at(3);
        assert_eq!(second.depth(), 2);
        assert_eq!(second.stride(), 4);
        assert_eq!(second.offset(), 52);

        let third = second.at(1);
        assert_eq!(third.depth(), 3);
        assert_eq!(third.stride(), 1);
        assert_eq!(third.offset(), 53);
    }

    #[test]
    fn test_full_chain_matches_direct_access() {
        let mut tensor = Tensor::<i64>::zeros(&[3, 4, 5]);
        tensor.fill_with(|idx| (idx[0] * 100 + idx[1] * 10 + idx[2]) as i64);

        for i in 0..3 {
            for j in 0..4 {
                for k in 0..5 {
                    assert_eq!(*tensor.at(i).at(j).at(k).value(), tensor[&[i, j, k]]);
                }
            }
        }
    }

    #[test]
    fn test_partial_cursor_reads_subarray_start() {
        let mut tensor = Tensor::<i64>::zeros(&[2, 3]);
        tensor.fill_with(|idx| (idx[0] * 3 + idx[1]) as i64);

        // Offset of row 1 is the first element of that row.
        assert_eq!(*tensor.at(1).value(), 3);
    }

    #[test]
    fn test_cursor_mut_set_and_value_mut() {
        let mut tensor = Tensor::<f64>::zeros(&[2, 2]);
        tensor.at_mut(0).at(1).set(2.5);
        *tensor.at_mut(1).at(0).value_mut() = 4.5;

        assert_eq!(tensor[&[0, 1]], 2.5);
        assert_eq!(tensor[&[1, 0]], 4.5);
    }

    #[test]
    #[should_panic(expected = "fully indexed")]
    fn test_chaining_past_rank_panics() {
        let tensor = Tensor::<f64>::zeros(&[2, 2]);
        let _ = tensor.at(0).at(1).at(0);
    }
}
