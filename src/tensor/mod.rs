//! Tensor types: shapes, indices, and the dense array built from them
//!
//! This module provides the core `Tensor` type, a dense n-dimensional array
//! addressed by [`Index`] values validated against its [`Shape`].

mod core;
mod index;
mod shape;

pub use self::core::{
    Tensor, TensorF32, TensorF64, TensorI16, TensorI32, TensorI64, TensorI8, TensorU16, TensorU32,
    TensorU64, TensorU8,
};
pub use index::Index;
pub use shape::{Shape, Strides};
