//! # rowten-core
//!
//! Dense N-dimensional tensor container with row-major strided layout.
//!
//! This crate provides the foundational container for the RowTen stack:
//!
//! - **Dense tensor representation** ([`Tensor`]) over flat contiguous storage
//! - **Row-major layout arithmetic** ([`layout`]) mapping multi-indices to flat offsets
//! - **Chained per-dimension indexing** ([`Cursor`], [`CursorMut`])
//! - **Elementwise arithmetic** between equal-shaped tensors
//! - **Lockstep pairwise traversal** ([`zip_mut`]) backing the operators
//!
//! ## Core Principles
//!
//! ### Memory Layout
//!
//! Storage is always C-contiguous (row-major): dimension 0 is the
//! outermost, slowest-varying axis, and the flat storage length equals the
//! product of the dimension extents at all times. Strides are recomputed
//! from the shape on demand, never cached, so [`Tensor::resize`] can
//! replace the shape wholesale without stale layout state.
//!
//! ### Ownership
//!
//! A tensor exclusively owns its shape and storage. `clone()` deep-copies
//! both, and tensors produced by arithmetic own fresh storage: no
//! aliasing, no reference counting. Cursors borrow the tensor they came
//! from, so resizing a tensor while a cursor is live is a compile-time
//! error rather than a dangling view.
//!
//! ### Safety
//!
//! The fast access paths skip per-dimension bounds validation, matching
//! the cost model of a raw strided container; the storage access itself is
//! a safe slice index, so a wild offset panics at the allocation boundary
//! instead of touching foreign memory. Fully validated access is available
//! through [`Tensor::get`] and friends. No unsafe code.
//!
//! ## Quick Start
//!
//! ```
//! use rowten_core::Tensor;
//!
//! // Create a 3D tensor of zeros
//! let mut tensor = Tensor::<f64>::zeros(&[6, 5, 4]);
//! assert_eq!(tensor.shape(), &[6, 5, 4]);
//! assert_eq!(tensor.len(), 120);
//!
//! // Direct multi-index access
//! tensor[&[2, 3, 1]] = 42.0;
//!
//! // Chained per-dimension indexing reaches the same element
//! assert_eq!(*tensor.at(2).at(3).at(1).value(), 42.0);
//! ```
//!
//! ## Creating Tensors
//!
//! ```
//! use rowten_core::Tensor;
//!
//! // Empty (no shape, no storage); resize before indexing
//! let mut empty = Tensor::<f64>::new();
//! empty.resize(&[2, 3]);
//!
//! // Zeros / ones / fill value
//! let zeros = Tensor::<f64>::zeros(&[2, 3]);
//! let ones = Tensor::<f64>::ones(&[2, 3]);
//! let fives = Tensor::from_elem(&[2, 3], 5.0);
//!
//! // From a flat vector (row-major order)
//! let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! assert_eq!(tensor[&[1, 0]], 3.0);
//! # assert_eq!(zeros.len(), 6);
//! # assert_eq!(ones.len(), 6);
//! # assert_eq!(fives[&[0, 0]], 5.0);
//! ```
//!
//! ## Resizing
//!
//! [`Tensor::resize`] is a destructive reshape: it replaces the shape and
//! reallocates storage zero-filled, discarding prior contents entirely.
//!
//! ```
//! use rowten_core::Tensor;
//!
//! let mut tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! tensor.resize(&[3, 3, 3]);
//! assert_eq!(tensor.len(), 27);
//! assert!(tensor.iter().all(|&x| x == 0));
//! ```
//!
//! ## Elementwise Arithmetic
//!
//! Operands must have element-wise identical shapes; there is no
//! broadcasting. Compound assignment mutates in place, binary operators
//! return a new tensor.
//!
//! ```
//! use rowten_core::Tensor;
//!
//! let mut a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let b = Tensor::from_vec(vec![10.0, 20.0, 30.0, 40.0], &[2, 2]).unwrap();
//!
//! a += &b;
//! assert_eq!(a.to_vec(), vec![11.0, 22.0, 33.0, 44.0]);
//!
//! let diff = &a - &b;
//! assert_eq!(diff.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! ## Precondition Checking
//!
//! Shape agreement for arithmetic and a non-empty shape before chained
//! indexing are preconditions: violating one panics with a diagnostic.
//! The [`checks`] module toggles enforcement at runtime, so both the
//! checked and unchecked contracts are testable without recompiling.
//!
//! ## Error Handling
//!
//! Recoverable failures return `Result<T, anyhow::Error>`:
//!
//! ```
//! use rowten_core::Tensor;
//!
//! // This will fail - three elements cannot fill a 2x2 shape
//! let result = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]);
//! assert!(result.is_err());
//!
//! // Checked access reports the offending dimension
//! let tensor = Tensor::<f64>::zeros(&[2, 2]);
//! assert!(tensor.get_checked(&[5, 0]).is_err());
//! ```

#![deny(warnings)]

pub mod checks;
pub mod layout;
pub mod tensor;
pub mod types;
pub mod zip;

#[cfg(test)]
mod property_tests;

pub use tensor::{Cursor, CursorMut, Tensor};
pub use types::{Rank, Shape};
pub use zip::{zip_mut, ZipMut};
