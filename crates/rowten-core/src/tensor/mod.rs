//! Dense tensor facade and operations
//!
//! This module provides the [`Tensor`] container and its operations,
//! organized into functional sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod arithmetic;
mod cursor;
mod indexing;

// Supporting modules
mod tensor_traits;

// Re-export the main types
pub use cursor::{Cursor, CursorMut};
pub use types::Tensor;
