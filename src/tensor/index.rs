//! Index type: per-dimension coordinates of one tensor element

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

use super::shape::STACK_DIMS;

/// Index type: per-dimension coordinates of one tensor element
///
/// An index is an ordered sequence of coordinates, one per dimension. It
/// carries no extents of its own; a given index is valid for any
/// [`Shape`](super::Shape) of matching rank whose extents exceed every
/// coordinate, and validation happens at the point of use
/// ([`Shape::offset_of`](super::Shape::offset_of)).
///
/// Structurally this is the same small integer sequence as a shape, but the
/// two are distinct types on purpose: code expecting an extent list will not
/// accept a coordinate list, and vice versa.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Index(SmallVec<[usize; STACK_DIMS]>);

impl Index {
    /// Create an index from per-dimension coordinates
    ///
    /// # Example
    /// ```
    /// use tensr::Index;
    /// let index = Index::new(&[1, 2, 3]);
    /// assert_eq!(index.rank(), 3);
    /// ```
    pub fn new(coords: &[usize]) -> Self {
        Self(coords.iter().copied().collect())
    }

    /// Create the rank-0 index addressing a scalar tensor's sole element
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    /// Number of dimensions this index addresses
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Coordinate along `axis`
    ///
    /// Fails with [`Error::AxisOutOfRange`] when `axis >= rank()`.
    pub fn coord(&self, axis: usize) -> Result<usize> {
        self.0.get(axis).copied().ok_or(Error::AxisOutOfRange {
            axis,
            rank: self.rank(),
        })
    }

    /// View the coordinates as a slice
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl Deref for Index {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl AsRef<[usize]> for Index {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}

impl From<Vec<usize>> for Index {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Index {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Index {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Index {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Index> for Vec<usize> {
    fn from(value: Index) -> Self {
        value.0.into_vec()
    }
}
