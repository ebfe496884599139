//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to tensr's runtime dtype system.
/// It is implemented for exactly the ten primitive numeric types a
/// [`Tensor`](crate::tensor::Tensor) supports; the set is closed and the
/// trait is not meant to be implemented outside this crate.
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison
/// - `Debug + Display` - Element rendering for tensor display
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
pub trait Element:
    Copy
    + Clone
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
    + fmt::Debug
    + fmt::Display
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric inspection
    fn to_f64(self) -> f64;

    /// Checked conversion from an i64 literal
    ///
    /// Returns `None` when `v` does not fit the target type. Float targets
    /// accept every i64 (rounding to the nearest representable value).
    fn from_i64(v: i64) -> Option<Self>;

    /// Checked conversion from an f64 literal
    ///
    /// Integer targets require `v` to be finite, to have no fractional part,
    /// and to lie within the target's range; anything else returns `None`.
    /// Float targets accept any value whose cast stays finite (plus the
    /// non-finite values themselves, which pass through unchanged).
    fn from_f64(v: f64) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;
}

// Shared range check for f64 -> integer conversions up to 32 bits wide.
// i64/u64 get their own bounds below since their MAX is not exactly
// representable in f64.
#[inline]
fn f64_is_integral(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Some(v as f32)
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        // Finite doubles beyond f32 range would cast to infinity; refuse
        // those rather than silently overflow. NaN and infinities pass
        // through as themselves.
        let out = v as f32;
        if v.is_finite() && !out.is_finite() {
            None
        } else {
            Some(out)
        }
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Some(v as f64)
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        Some(v)
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for i8 {
    const DTYPE: DType = DType::I8;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        if f64_is_integral(v) && v >= Self::MIN as f64 && v <= Self::MAX as f64 {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for i16 {
    const DTYPE: DType = DType::I16;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        if f64_is_integral(v) && v >= Self::MIN as f64 && v <= Self::MAX as f64 {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        if f64_is_integral(v) && v >= Self::MIN as f64 && v <= Self::MAX as f64 {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Some(v)
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        // i64::MAX as f64 rounds up to 2^63, which does not fit; the strict
        // upper bound keeps the accepted range exactly representable.
        if f64_is_integral(v) && v >= (Self::MIN as f64) && v < (Self::MAX as f64) {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for u8 {
    const DTYPE: DType = DType::U8;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        if f64_is_integral(v) && v >= 0.0 && v <= Self::MAX as f64 {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for u16 {
    const DTYPE: DType = DType::U16;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        if f64_is_integral(v) && v >= 0.0 && v <= Self::MAX as f64 {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for u32 {
    const DTYPE: DType = DType::U32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        if f64_is_integral(v) && v >= 0.0 && v <= Self::MAX as f64 {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for u64 {
    const DTYPE: DType = DType::U64;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }

    #[inline]
    fn from_f64(v: f64) -> Option<Self> {
        // Same rounding caveat as i64: u64::MAX as f64 is 2^64.
        if f64_is_integral(v) && v >= 0.0 && v < (Self::MAX as f64) {
            Some(v as Self)
        } else {
            None
        }
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}
