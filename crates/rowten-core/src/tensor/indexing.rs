//! Checked element access.
//!
//! The fast paths (`tensor[&[i, j, k]]` and cursor chains) perform no
//! per-dimension validation. The methods here are the fully checked
//! alternatives: every index is compared against its dimension's extent
//! before the flat offset is formed.

use super::types::Tensor;
use crate::layout;
use num_traits::Num;

impl<T> Tensor<T>
where
    T: Clone + Num,
{
    /// Get an element by index without panicking
    ///
    /// # Arguments
    ///
    /// * `index` - Multi-dimensional index
    ///
    /// # Returns
    ///
    /// Some reference to the element if the index is valid, None otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        for (d, &idx) in index.iter().enumerate() {
            if idx >= self.shape[d] {
                return None;
            }
        }
        self.data.get(layout::flat_offset(&self.shape, index))
    }

    /// Get a mutable reference to an element by index without panicking
    ///
    /// # Arguments
    ///
    /// * `index` - Multi-dimensional index
    ///
    /// # Returns
    ///
    /// Some mutable reference to the element if the index is valid, None otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// if let Some(elem) = tensor.get_mut(&[0, 1]) {
    ///     *elem = 10.0;
    /// }
    /// assert_eq!(tensor[&[0, 1]], 10.0);
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        if index.len() != self.rank() {
            return None;
        }
        for (d, &idx) in index.iter().enumerate() {
            if idx >= self.shape[d] {
                return None;
            }
        }
        let offset = layout::flat_offset(&self.shape, index);
        self.data.get_mut(offset)
    }

    /// Get element with detailed error reporting on out-of-bounds access
    ///
    /// Similar to `get()` but returns a Result with detailed error messages
    /// instead of Option, making it easier to debug indexing issues.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(*tensor.get_checked(&[0, 1]).unwrap(), 2.0);
    ///
    /// // Out of bounds gives clear error
    /// assert!(tensor.get_checked(&[5, 5]).is_err());
    /// ```
    pub fn get_checked(&self, index: &[usize]) -> anyhow::Result<&T> {
        if index.len() != self.rank() {
            anyhow::bail!(
                "Index has {} dimensions but tensor has rank {}",
                index.len(),
                self.rank()
            );
        }
        for (d, &idx) in index.iter().enumerate() {
            if idx >= self.shape[d] {
                anyhow::bail!(
                    "Index {} is out of bounds for dimension {} with size {}",
                    idx,
                    d,
                    self.shape[d]
                );
            }
        }
        Ok(&self.data[layout::flat_offset(&self.shape, index)])
    }

    /// Get mutable element with detailed error reporting
    ///
    /// Similar to `get_mut()` but returns a Result with detailed error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[2, 2]);
    /// *tensor.get_checked_mut(&[0, 1]).unwrap() = 5.0;
    /// assert_eq!(tensor[&[0, 1]], 5.0);
    /// ```
    pub fn get_checked_mut(&mut self, index: &[usize]) -> anyhow::Result<&mut T> {
        if index.len() != self.rank() {
            anyhow::bail!(
                "Index has {} dimensions but tensor has rank {}",
                index.len(),
                self.rank()
            );
        }
        for (d, &idx) in index.iter().enumerate() {
            if idx >= self.shape[d] {
                anyhow::bail!(
                    "Index {} is out of bounds for dimension {} with size {}",
                    idx,
                    d,
                    self.shape[d]
                );
            }
        }
        let offset = layout::flat_offset(&self.shape, index);
        Ok(&mut self.data[offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_agrees_with_index_operator() {
        let mut tensor = Tensor::<i64>::zeros(&[3, 4]);
        tensor.fill_with(|idx| (idx[0] * 4 + idx[1]) as i64);

        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(tensor.get(&[i, j]), Some(&tensor[&[i, j]]));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let tensor = Tensor::<f64>::zeros(&[2, 2]);
        assert_eq!(tensor.get(&[2, 0]), None);
        assert_eq!(tensor.get(&[0, 2]), None);
        assert_eq!(tensor.get(&[0]), None);
        assert_eq!(tensor.get(&[0, 0, 0]), None);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut tensor = Tensor::<f64>::zeros(&[2, 2]);
        if let Some(elem) = tensor.get_mut(&[1, 0]) {
            *elem = 6.0;
        }
        assert_eq!(tensor[&[1, 0]], 6.0);
        assert_eq!(tensor.get_mut(&[9, 9]), None);
    }

    #[test]
    fn test_get_checked_success() {
        let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(*tensor.get_checked(&[0, 0]).unwrap(), 1.0);
        assert_eq!(*tensor.get_checked(&[1, 1]).unwrap(), 4.0);
    }

    #[test]
    fn test_get_checked_out_of_bounds() {
        let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert!(tensor.get_checked(&[5, 0]).is_err());
        assert!(tensor.get_checked(&[0, 5]).is_err());
        assert!(tensor.get_checked(&[2, 2]).is_err());
    }

    #[test]
    fn test_get_checked_wrong_rank() {
        let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert!(tensor.get_checked(&[0]).is_err());
        assert!(tensor.get_checked(&[0, 0, 0]).is_err());
    }

    #[test]
    fn test_get_checked_mut() {
        let mut tensor = Tensor::<f64>::zeros(&[2, 2]);
        *tensor.get_checked_mut(&[0, 1]).unwrap() = 5.0;
        assert_eq!(tensor[&[0, 1]], 5.0);
        assert!(tensor.get_checked_mut(&[5, 0]).is_err());
    }
}
