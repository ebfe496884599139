//! Error types for tensr

use crate::dtype::DType;
use std::fmt;
use thiserror::Error;

/// Result type alias using tensr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when building or addressing shapes and tensors
///
/// Every variant is a precondition violation surfaced at the point of the
/// offending call. Nothing is retried, clamped, or partially constructed;
/// callers validate their inputs or re-report the failure with their own
/// context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Axis read past the rank of a shape or index
    #[error("axis {axis} out of range for rank {rank}")]
    AxisOutOfRange {
        /// The requested axis
        axis: usize,
        /// Number of dimensions actually present
        rank: usize,
    },

    /// Coordinate at or past the extent of its dimension
    #[error("index {index} out of bounds for extent {extent} along axis {axis}")]
    IndexOutOfBounds {
        /// Axis on which the violation occurred
        axis: usize,
        /// The offending coordinate
        index: usize,
        /// Extent of that axis
        extent: usize,
    },

    /// Index rank disagrees with the rank of the shape being addressed
    #[error("rank mismatch: expected {expected}, got {got}")]
    RankMismatch {
        /// Rank of the shape
        expected: usize,
        /// Rank of the supplied index
        got: usize,
    },

    /// Extent product of an explicit shape disagrees with the element count
    #[error("shape {shape:?} requires {expected} elements, got {got}")]
    ShapeMismatch {
        /// The explicit shape's extents
        shape: Vec<usize>,
        /// Element count the shape requires
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },

    /// Shape construction with an extent of zero
    #[error("zero extent at axis {axis}: every extent must be at least 1")]
    ZeroExtent {
        /// Axis holding the zero extent
        axis: usize,
    },

    /// A supplied value cannot be represented in the tensor's element type
    #[error("value {value} cannot be represented as {dtype}")]
    InvalidValue {
        /// Textual form of the offending value
        value: String,
        /// Element type it was destined for
        dtype: DType,
    },
}

impl Error {
    /// Create a shape mismatch error from the extents and the supplied count
    pub fn shape_mismatch(dims: &[usize], got: usize) -> Self {
        Self::ShapeMismatch {
            shape: dims.to_vec(),
            expected: dims.iter().product(),
            got,
        }
    }

    /// Create an invalid value error for a value destined for `dtype`
    pub fn invalid_value(value: impl fmt::Display, dtype: DType) -> Self {
        Self::InvalidValue {
            value: value.to_string(),
            dtype,
        }
    }
}
