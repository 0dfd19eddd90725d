//! Core type aliases for rowten tensors.

use smallvec::SmallVec;

/// Type alias for tensor rank (number of dimensions).
///
/// # Examples
///
/// ```
/// use rowten_core::{Rank, Tensor};
///
/// let matrix = Tensor::<f64>::zeros(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 dimensions (covers most use cases).
/// Automatically falls back to heap allocation for higher-rank tensors.
///
/// # Examples
///
/// ```
/// use rowten_core::Shape;
///
/// let shape = Shape::from_slice(&[2, 3, 4]);
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
