//! # tensr
//!
//! **Dense n-dimensional array primitives: shapes, indices, and typed tensors.**
//!
//! tensr is the foundation layer for numeric code that needs multi-dimensional
//! addressing without pulling in a full array-programming stack. It provides
//! three value types and nothing else:
//!
//! - [`Shape`]: per-dimension extents, validated at construction
//! - [`Index`]: per-dimension coordinates, validated at the point of use
//! - [`Tensor`]: a contiguous row-major buffer bound to a shape, with
//!   bounds-checked element access
//!
//! Every contract violation (out-of-range axis, out-of-bounds coordinate,
//! rank or element-count mismatch, unrepresentable value) surfaces as a typed
//! [`Error`] at the offending call. Nothing is clamped, wrapped, or silently
//! recovered.
//!
//! ## Quick Start
//!
//! ```
//! use tensr::{Index, Tensor};
//!
//! // Explicit shape: 2 rows, 3 columns, row-major.
//! let mut t = Tensor::from_slice(&[1, 2, 3, 4, 5, 6], &[2, 3])?;
//! assert_eq!(t.get(&Index::from([1, 2]))?, 6);
//!
//! t.set(&Index::from([0, 0]), 9)?;
//! assert_eq!(t.to_string(), "[9, 2, 3, 4, 5, 6]");
//!
//! // Inferred shape: rank-1 with extent = data length.
//! let v = Tensor::from_vec(vec![1, 3, 5])?;
//! assert_eq!(v.shape().as_slice(), &[3]);
//! # Ok::<(), tensr::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization for [`Shape`] and [`Index`] (shape validation is
//!   preserved through deserialization)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod tensor;

#[cfg(test)]
mod property_tests;

pub use dtype::{DType, Element};
pub use error::{Error, Result};
pub use tensor::{
    Index, Shape, Strides, Tensor, TensorF32, TensorF64, TensorI16, TensorI32, TensorI64,
    TensorI8, TensorU16, TensorU32, TensorU64, TensorU8,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::tensor::{Index, Shape, Tensor};
}
