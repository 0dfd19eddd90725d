//! Row-major layout arithmetic.
//!
//! Pure functions translating between per-dimension indices and offsets
//! into flat, contiguous storage. Dimension 0 is the outermost
//! (slowest-varying) axis. Everything here is recomputed from the shape on
//! every call, so the functions stay correct across arbitrary reshapes.

use crate::types::Shape;

/// Total number of elements a shape addresses.
///
/// The empty product is 1, so a zero-rank shape holds a single element;
/// any zero extent yields zero elements.
///
/// # Examples
///
/// ```
/// use rowten_core::layout::element_count;
///
/// assert_eq!(element_count(&[2, 3, 4]), 24);
/// assert_eq!(element_count(&[]), 1);
/// assert_eq!(element_count(&[5, 0, 2]), 0);
/// ```
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Stride of dimension `dim`: the number of flat positions one step along
/// `dim` advances, equal to the product of all extents after it.
///
/// # Panics
///
/// Panics if `dim` is not a valid dimension of `shape`.
///
/// # Examples
///
/// ```
/// use rowten_core::layout::stride;
///
/// assert_eq!(stride(&[6, 5, 4], 0), 20);
/// assert_eq!(stride(&[6, 5, 4], 1), 4);
/// assert_eq!(stride(&[6, 5, 4], 2), 1);
/// ```
pub fn stride(shape: &[usize], dim: usize) -> usize {
    shape[dim + 1..].iter().product()
}

/// Row-major (C-contiguous) strides for every dimension of `shape`.
///
/// # Examples
///
/// ```
/// use rowten_core::layout::contiguous_strides;
///
/// let strides = contiguous_strides(&[2, 3, 4]);
/// assert_eq!(&strides[..], &[12, 4, 1]);
/// ```
pub fn contiguous_strides(shape: &[usize]) -> Shape {
    let mut strides = Shape::from_elem(1, shape.len());
    for d in (0..shape.len().saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * shape[d + 1];
    }
    strides
}

/// Flat offset addressed by a (possibly partial) multi-index.
///
/// For each index in order, the stride is recomputed as the product of the
/// extents beyond that dimension and `index * stride` is accumulated. A
/// partial index list addresses the first element of the remaining
/// subarray. Indices are not validated against the extents.
///
/// # Examples
///
/// ```
/// use rowten_core::layout::flat_offset;
///
/// assert_eq!(flat_offset(&[6, 5, 4], &[2, 3, 1]), 2 * 20 + 3 * 4 + 1);
/// assert_eq!(flat_offset(&[6, 5, 4], &[2]), 40);
/// ```
pub fn flat_offset(shape: &[usize], indices: &[usize]) -> usize {
    indices
        .iter()
        .enumerate()
        .map(|(d, &index)| index * stride(shape, d))
        .sum()
}
