//! Core Tensor type

use super::{Index, Shape, Strides};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;
use std::ops;

/// Dense n-dimensional array with a fixed shape and element type
///
/// `Tensor` is the fundamental data structure in tensr. It consists of:
/// - **Shape**: per-dimension extents, fixed at construction
/// - **Data**: a contiguous row-major buffer of exactly `shape.numel()`
///   elements, owned exclusively by the tensor
///
/// The element type is chosen at compile time through the [`Element`] trait;
/// [`dtype()`](Tensor::dtype) reports it at runtime. Element values may be
/// overwritten in place, but the shape and the buffer length never change
/// after construction. There is no resizing, reshaping, or view sharing;
/// callers that need a different shape build a new tensor.
///
/// # Example
///
/// ```
/// use tensr::{Index, Tensor};
///
/// let t = Tensor::from_slice(&[1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
/// assert_eq!(t.get(&Index::from([1, 2])).unwrap(), 6);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T: Element> {
    /// Per-dimension extents
    shape: Shape,
    /// Row-major element buffer, length always equals `shape.numel()`
    data: Vec<T>,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor from a buffer and an already-built shape
    ///
    /// Fails with [`Error::ShapeMismatch`] if `data.len()` does not equal the
    /// product of the shape's extents.
    pub fn from_parts(data: Vec<T>, shape: Shape) -> Result<Self> {
        if data.len() != shape.numel() {
            return Err(Error::shape_mismatch(&shape, data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Create a rank-1 tensor from a flat buffer, inferring the shape
    ///
    /// The shape becomes `[data.len()]`. An empty buffer is rejected, since a
    /// zero extent is not a valid shape.
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1, 3, 5]).unwrap();
    /// assert_eq!(t.shape().as_slice(), &[3]);
    /// assert_eq!(t.to_string(), "[1, 3, 5]");
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        let shape = Shape::vector(data.len())?;
        Ok(Self { shape, data })
    }

    /// Create a tensor from a slice of data and explicit extents
    ///
    /// Fails with [`Error::ShapeMismatch`] if `data.len()` does not equal the
    /// product of the `shape` extents, and with [`Error::ZeroExtent`] if any
    /// extent is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::Tensor;
    ///
    /// let t = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(t.numel(), 4);
    /// ```
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_parts(data.to_vec(), Shape::new(shape)?)
    }

    /// Create a rank-0 tensor holding a single value
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Shape::scalar(),
            data: vec![value],
        }
    }

    /// Create a tensor with every element set to `value`
    pub fn full(shape: &[usize], value: T) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let data = vec![value; shape.numel()];
        Ok(Self { shape, data })
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(shape, T::one())
    }

    /// Create a rank-1 tensor from integer literals, checking each value
    ///
    /// Every value must be representable in `T`; the first one that is not
    /// fails the whole construction with [`Error::InvalidValue`].
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::TensorI8;
    ///
    /// assert!(TensorI8::from_ints(&[1, 3, 5]).is_ok());
    /// assert!(TensorI8::from_ints(&[1, 128]).is_err());
    /// ```
    pub fn from_ints(values: &[i64]) -> Result<Self> {
        let data = Self::convert_ints(values)?;
        let shape = Shape::vector(values.len())?;
        Ok(Self { shape, data })
    }

    /// Create a tensor from integer literals and explicit extents
    pub fn from_ints_with_shape(values: &[i64], shape: &[usize]) -> Result<Self> {
        Self::from_parts(Self::convert_ints(values)?, Shape::new(shape)?)
    }

    /// Create a rank-1 tensor from float literals, checking each value
    ///
    /// Integer element types reject non-finite values, fractional values, and
    /// values outside their range with [`Error::InvalidValue`].
    pub fn from_floats(values: &[f64]) -> Result<Self> {
        let data = Self::convert_floats(values)?;
        let shape = Shape::vector(values.len())?;
        Ok(Self { shape, data })
    }

    /// Create a tensor from float literals and explicit extents
    pub fn from_floats_with_shape(values: &[f64], shape: &[usize]) -> Result<Self> {
        Self::from_parts(Self::convert_floats(values)?, Shape::new(shape)?)
    }

    fn convert_ints(values: &[i64]) -> Result<Vec<T>> {
        values
            .iter()
            .map(|&v| T::from_i64(v).ok_or_else(|| Error::invalid_value(v, T::DTYPE)))
            .collect()
    }

    fn convert_floats(values: &[f64]) -> Result<Vec<T>> {
        values
            .iter()
            .map(|&v| T::from_f64(v).ok_or_else(|| Error::invalid_value(v, T::DTYPE)))
            .collect()
    }

    // ===== Accessors =====

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    /// Row-major strides of this tensor's shape
    #[inline]
    pub fn strides(&self) -> Strides {
        self.shape.strides()
    }

    // ===== Element Access =====

    /// Read the element addressed by `index`
    ///
    /// Fails with [`Error::RankMismatch`] when the index rank disagrees with
    /// the tensor rank, and [`Error::IndexOutOfBounds`] when any coordinate
    /// reaches its extent.
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::{Index, Tensor};
    ///
    /// let t = Tensor::from_slice(&[1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&Index::from([0, 0])).unwrap(), 1);
    /// assert_eq!(t.get(&Index::from([1, 1])).unwrap(), 5);
    /// assert!(t.get(&Index::from([2, 0])).is_err());
    /// ```
    pub fn get(&self, index: &Index) -> Result<T> {
        let offset = self.shape.offset_of(index)?;
        Ok(self.data[offset])
    }

    /// Mutable reference to the element addressed by `index`
    pub fn get_mut(&mut self, index: &Index) -> Result<&mut T> {
        let offset = self.shape.offset_of(index)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the element addressed by `index`
    pub fn set(&mut self, index: &Index, value: T) -> Result<()> {
        let offset = self.shape.offset_of(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Extract the value from a single-element tensor
    ///
    /// Works for the rank-0 scalar shape and for shapes like `[1]` or
    /// `[1, 1, 1]`. Fails with [`Error::ShapeMismatch`] on anything holding
    /// more than one element.
    pub fn item(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::shape_mismatch(&self.shape, 1));
        }
        Ok(self.data[0])
    }

    // ===== Data Access =====

    /// View the elements as a flat row-major slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable flat row-major slice
    ///
    /// The slice has fixed length; element values may change but the buffer
    /// cannot grow or shrink.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// View the element buffer as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Iterate over the elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in row-major order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Copy the elements into a new `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the tensor and return its element buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Overwrite every element with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

/// Panicking index sugar: `t[&index]`
///
/// Prefer [`Tensor::get`] when the index is not known to be valid.
impl<T: Element> ops::Index<&Index> for Tensor<T> {
    type Output = T;

    fn index(&self, index: &Index) -> &T {
        match self.shape.offset_of(index) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("tensor index failed: {e}"),
        }
    }
}

impl<T: Element> ops::IndexMut<&Index> for Tensor<T> {
    fn index_mut(&mut self, index: &Index) -> &mut T {
        match self.shape.offset_of(index) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("tensor index failed: {e}"),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .field("numel", &self.numel())
            .finish()
    }
}

/// Flat rendering of the elements in row-major order
///
/// A tensor of `[1, 3, 5]` renders as exactly `"[1, 3, 5]"`. Rank does not
/// change the rendering; a `[2, 2]` tensor still renders its four elements as
/// one flat bracketed list.
impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// 8-bit signed integer tensor
pub type TensorI8 = Tensor<i8>;
/// 16-bit signed integer tensor
pub type TensorI16 = Tensor<i16>;
/// 32-bit signed integer tensor
pub type TensorI32 = Tensor<i32>;
/// 64-bit signed integer tensor
pub type TensorI64 = Tensor<i64>;
/// 8-bit unsigned integer tensor
pub type TensorU8 = Tensor<u8>;
/// 16-bit unsigned integer tensor
pub type TensorU16 = Tensor<u16>;
/// 32-bit unsigned integer tensor
pub type TensorU32 = Tensor<u32>;
/// 64-bit unsigned integer tensor
pub type TensorU64 = Tensor<u64>;
/// 32-bit float tensor
pub type TensorF32 = Tensor<f32>;
/// 64-bit float tensor
pub type TensorF64 = Tensor<f64>;
