//! Dense tensor type definition and basic operations
//!
//! This module defines the core `Tensor<T>` type and provides creation,
//! resizing, and accessor methods. Indexing, arithmetic, and trait
//! implementations are organized in separate modules.

use super::cursor::{Cursor, CursorMut};
use crate::checks;
use crate::layout;
use crate::types::{Rank, Shape};
use num_traits::Num;

/// Dense N-dimensional tensor with row-major contiguous storage.
///
/// A `Tensor<T>` owns an ordered sequence of dimension extents (its shape,
/// dimension 0 outermost) and a flat `Vec<T>` whose length equals the
/// product of the extents. All addressing goes through row-major stride
/// arithmetic recomputed from the current shape, so [`resize`](Self::resize)
/// never leaves stale layout state behind.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Ownership
///
/// A tensor exclusively owns its shape and storage. Cloning deep-copies
/// both; tensors produced by arithmetic own fresh storage. There is no
/// shared or reference-counted storage anywhere.
///
/// # Examples
///
/// ```
/// use rowten_core::Tensor;
///
/// // Create a 3D tensor of zeros
/// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone)]
pub struct Tensor<T> {
    /// Dimension extents, outermost first
    pub(crate) shape: Shape,
    /// Flat row-major storage, one entry per addressable element
    pub(crate) data: Vec<T>,
}

impl<T> Tensor<T>
where
    T: Clone + Num,
{
    /// Create an empty tensor with no shape and no storage.
    ///
    /// This is the state of a tensor before its first [`resize`](Self::resize);
    /// it holds zero elements and cannot be indexed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::new();
    /// assert_eq!(tensor.len(), 0);
    /// assert!(tensor.shape().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            shape: Shape::new(),
            data: Vec::new(),
        }
    }

    /// Create a tensor of zeros
    ///
    /// Equivalent to default-constructing and then resizing to `shape`.
    ///
    /// # Arguments
    ///
    /// * `shape` - The shape of the tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor[&[0, 0, 0]], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor of ones
    ///
    /// # Arguments
    ///
    /// * `shape` - The shape of the tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::ones(&[2, 3]);
    /// assert_eq!(tensor[&[1, 2]], 1.0);
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Arguments
    ///
    /// * `shape` - The shape of the tensor
    /// * `value` - The fill value
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor[&[0, 0]], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            shape: Shape::from_slice(shape),
            data: vec![value; layout::element_count(shape)],
        }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Returns
    ///
    /// A tensor with the specified shape, or an error if dimensions don't match
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = Tensor::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total = layout::element_count(shape);
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            data: vec,
        })
    }

    /// Replace the shape and storage with a freshly zeroed allocation
    ///
    /// This is a destructive reshape: prior contents are discarded, not
    /// rearranged, and every element of the new allocation starts at zero.
    /// Zero extents are legal and yield a tensor with no elements.
    ///
    /// # Arguments
    ///
    /// * `shape` - The new dimension extents, outermost first
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::<i64>::zeros(&[2, 2]);
    /// tensor[&[1, 1]] = 9;
    ///
    /// tensor.resize(&[3, 3]);
    /// assert_eq!(tensor.len(), 9);
    /// assert!(tensor.iter().all(|&x| x == 0));
    /// ```
    pub fn resize(&mut self, shape: &[usize]) {
        self.shape = Shape::from_slice(shape);
        self.data.clear();
        self.data.resize(layout::element_count(shape), T::zero());
    }

    /// Get the rank (number of dimensions) of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.shape(), &[2, 3, 4]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get a copy of the shape as a vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.shape_vec(), vec![2, 3, 4]);
    /// ```
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape.to_vec()
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if two tensors have the same shape
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let a = Tensor::<f64>::zeros(&[2, 3]);
    /// let b = Tensor::<f64>::ones(&[2, 3]);
    /// let c = Tensor::<f64>::zeros(&[3, 2]);
    /// assert!(a.same_shape(&b));
    /// assert!(!a.same_shape(&c));
    /// ```
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape == other.shape
    }

    /// Get the underlying data as a flat slice in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying data as a mutable flat slice in row-major order
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Convert the tensor to a flat vector in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the tensor and return the underlying data as a flat vector
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.into_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Fill the tensor with values produced by a function
    ///
    /// The function receives each multi-dimensional index in row-major
    /// order (outermost dimension slowest).
    ///
    /// # Arguments
    ///
    /// * `f` - Function that takes a multi-dimensional index and returns a value
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[2, 3]);
    /// tensor.fill_with(|idx| (idx[0] + idx[1]) as f64);
    /// assert_eq!(tensor[&[0, 0]], 0.0);
    /// assert_eq!(tensor[&[1, 2]], 3.0);
    /// ```
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(&[usize]) -> T,
    {
        let mut indices = vec![0; self.shape.len()];
        for flat in 0..self.data.len() {
            // Convert linear index to multi-dimensional index (row-major order)
            let mut remaining = flat;
            for d in (0..self.shape.len()).rev() {
                indices[d] = remaining % self.shape[d];
                remaining /= self.shape[d];
            }
            self.data[flat] = f(&indices);
        }
    }

    /// Create an iterator over all elements in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let sum: f64 = tensor.iter().sum();
    /// assert_eq!(sum, 10.0);
    /// ```
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Create a mutable iterator over all elements in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// for elem in tensor.iter_mut() {
    ///     *elem *= 2.0;
    /// }
    /// assert_eq!(tensor[&[1, 1]], 8.0);
    /// ```
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Begin a chain of per-dimension indexing
    ///
    /// Returns a [`Cursor`] bound to this tensor's storage and shape with
    /// `index` applied along dimension 0. Further [`Cursor::at`] calls
    /// narrow the addressed region one dimension at a time; see the cursor
    /// documentation for the full contract.
    ///
    /// The cursor borrows the tensor, so resizing while a cursor is live
    /// is rejected at compile time.
    ///
    /// # Preconditions
    ///
    /// The tensor must have a non-empty shape (checked when
    /// [`checks`](crate::checks) are enabled). `index` itself is not
    /// validated against the extent of dimension 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[6, 5, 4]);
    /// tensor[&[2, 3, 1]] = 42.0;
    /// assert_eq!(*tensor.at(2).at(3).at(1).value(), 42.0);
    /// ```
    pub fn at(&self, index: usize) -> Cursor<'_, T> {
        checks::require(!self.shape.is_empty(), || {
            "cannot index a tensor with no shape".to_string()
        });
        Cursor::new(&self.data, &self.shape, index)
    }

    /// Begin a mutable chain of per-dimension indexing
    ///
    /// The mutable counterpart of [`at`](Self::at); the final
    /// [`CursorMut`] can write through to the addressed element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowten_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[2, 3]);
    /// tensor.at_mut(1).at(2).set(7.5);
    /// assert_eq!(tensor[&[1, 2]], 7.5);
    /// ```
    pub fn at_mut(&mut self, index: usize) -> CursorMut<'_, T> {
        checks::require(!self.shape.is_empty(), || {
            "cannot index a tensor with no shape".to_string()
        });
        CursorMut::new(&mut self.data, &self.shape, index)
    }
}
