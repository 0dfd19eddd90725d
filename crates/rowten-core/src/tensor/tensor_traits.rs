//! # Tensor - Trait Implementations
//!
//! This module contains trait implementations for `Tensor`.
//!
//! ## Implemented Traits
//!
//! - `Index` / `IndexMut` (direct multi-index access)
//! - `IntoIterator` (flat row-major iteration, by reference)
//! - `Debug`
//! - `Default`

use super::types::Tensor;
use crate::layout;
use num_traits::Num;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    /// Direct multi-index access: the flat offset is computed in one pass
    /// over `index` without intermediate cursors. Indices are not
    /// validated against the dimension extents; an out-of-range flat
    /// offset panics at the storage boundary.
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[layout::flat_offset(&self.shape, index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        let offset = layout::flat_offset(&self.shape, index);
        &mut self.data[offset]
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Clone + Num> Default for Tensor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Tensor<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        let mut tensor = Tensor::<f64>::zeros(&[2, 3]);
        tensor[&[0, 2]] = 1.5;
        tensor[&[1, 0]] = 2.5;
        assert_eq!(tensor[&[0, 2]], 1.5);
        assert_eq!(tensor[&[1, 0]], 2.5);
    }

    #[test]
    fn test_for_loop_over_references() {
        let tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let mut collected = Vec::new();
        for x in &tensor {
            collected.push(*x);
        }
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_for_loop_mutation() {
        let mut tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        for x in &mut tensor {
            *x *= 10;
        }
        assert_eq!(tensor.to_vec(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_debug_includes_shape_and_rank() {
        let tensor = Tensor::<i64>::zeros(&[2, 2]);
        let repr = format!("{:?}", tensor);
        assert!(repr.contains("shape"));
        assert!(repr.contains("rank"));
    }

    #[test]
    fn test_default_is_empty() {
        let tensor = Tensor::<f64>::default();
        assert_eq!(tensor.len(), 0);
        assert_eq!(tensor.rank(), 0);
    }
}
