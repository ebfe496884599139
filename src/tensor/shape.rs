//! Shape type: per-dimension extents of a tensor

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

use super::index::Index;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Strides type: element offsets between consecutive elements along each dimension
///
/// Strides are in ELEMENTS, not bytes. Storage here is always contiguous
/// row-major, so strides are derived from the shape and never negative.
pub type Strides = SmallVec<[usize; STACK_DIMS]>;

/// Shape type: per-dimension extents of a tensor
///
/// A shape is an ordered sequence of positive extents, one per dimension.
/// Construction rejects zero extents; a rank-0 shape (no dimensions) is the
/// shape of a scalar and holds exactly one element. Once built, a shape never
/// changes, so its element count and strides are always consistent with its
/// extents.
///
/// `Shape` and [`Index`] are deliberately distinct types even though both wrap
/// a small integer sequence: an extent is not a coordinate, and the type
/// system should refuse one where the other is expected.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create a shape from per-dimension extents
    ///
    /// Fails with [`Error::ZeroExtent`] if any extent is zero.
    ///
    /// # Example
    /// ```
    /// use tensr::Shape;
    /// let shape = Shape::new(&[2, 3, 4]).unwrap();
    /// assert_eq!(shape.rank(), 3);
    /// assert_eq!(shape.numel(), 24);
    /// ```
    pub fn new(dims: &[usize]) -> Result<Self> {
        Self::from_dims(dims.iter().copied().collect())
    }

    /// Create a rank-1 shape of the given length
    pub fn vector(len: usize) -> Result<Self> {
        Self::new(&[len])
    }

    /// Create a rank-0 (scalar) shape
    ///
    /// A scalar shape has no dimensions and exactly one element.
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    fn from_dims(dims: SmallVec<[usize; STACK_DIMS]>) -> Result<Self> {
        if let Some(axis) = dims.iter().position(|&extent| extent == 0) {
            return Err(Error::ZeroExtent { axis });
        }
        Ok(Self(dims))
    }

    /// Number of dimensions in this shape
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Extent along `axis`
    ///
    /// Fails with [`Error::AxisOutOfRange`] when `axis >= rank()`.
    pub fn extent(&self, axis: usize) -> Result<usize> {
        self.0.get(axis).copied().ok_or(Error::AxisOutOfRange {
            axis,
            rank: self.rank(),
        })
    }

    /// Total number of elements a tensor of this shape holds
    ///
    /// The empty product makes this 1 for a scalar shape.
    #[inline]
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Whether this is the rank-0 scalar shape
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Row-major (last-dimension-fastest) strides for this shape
    ///
    /// # Example
    /// ```
    /// use tensr::Shape;
    /// let shape = Shape::new(&[2, 3, 4]).unwrap();
    /// assert_eq!(shape.strides().as_slice(), &[12, 4, 1]);
    /// ```
    pub fn strides(&self) -> Strides {
        if self.0.is_empty() {
            return SmallVec::new();
        }

        let mut strides: Strides = SmallVec::with_capacity(self.0.len());
        let mut stride = 1usize;

        // Compute strides from last dimension to first
        for &extent in self.0.iter().rev() {
            strides.push(stride);
            stride *= extent;
        }

        strides.reverse();
        strides
    }

    /// Flat storage offset of the element addressed by `index`
    ///
    /// Validates the index against this shape: the ranks must agree and every
    /// coordinate must be below its extent. The returned offset is always in
    /// `0..numel()`.
    ///
    /// # Example
    /// ```
    /// use tensr::{Index, Shape};
    /// let shape = Shape::new(&[2, 3, 4]).unwrap();
    /// assert_eq!(shape.offset_of(&Index::from([1, 2, 3])).unwrap(), 23);
    /// assert!(shape.offset_of(&Index::from([1, 3, 0])).is_err());
    /// ```
    pub fn offset_of(&self, index: &Index) -> Result<usize> {
        if index.rank() != self.rank() {
            return Err(Error::RankMismatch {
                expected: self.rank(),
                got: index.rank(),
            });
        }

        let mut offset = 0usize;
        let mut stride = 1usize;

        for axis in (0..self.rank()).rev() {
            let coord = index[axis];
            let extent = self.0[axis];
            if coord >= extent {
                return Err(Error::IndexOutOfBounds {
                    axis,
                    index: coord,
                    extent,
                });
            }
            offset += coord * stride;
            stride *= extent;
        }

        Ok(offset)
    }

    /// View the extents as a slice
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = Error;

    fn try_from(value: Vec<usize>) -> Result<Self> {
        Self::from_dims(value.into_iter().collect())
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = Error;

    fn try_from(value: &[usize]) -> Result<Self> {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Shape {
    type Error = Error;

    fn try_from(value: [usize; N]) -> Result<Self> {
        Self::from_dims(value.into_iter().collect())
    }
}

impl From<Shape> for Vec<usize> {
    fn from(value: Shape) -> Self {
        value.0.into_vec()
    }
}
