use std::{
    fmt::Debug,
    ops::{Add, Mul, Neg, Sub},
};

/// An ordered one-dimensional quantity, such as an objective value.
///
/// A scalar need not be a plain number: it may carry physical units, as long
/// as it supports comparison, addition, subtraction and scaling by a
/// dimensionless `f64`. Conversions through [`Scalar::base`] expose the value
/// in base (SI) units, which is how dimensionless ratios are formed.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Creates a scalar from a value in base units.
    fn from_base(value: f64) -> Self;

    /// Returns the value in base units.
    fn base(self) -> f64;

    /// Returns the additive identity.
    #[must_use]
    fn zero() -> Self {
        Self::from_base(0.0)
    }

    /// Returns the absolute value.
    #[must_use]
    fn abs(self) -> Self {
        Self::from_base(self.base().abs())
    }

    /// Returns the dimensionless ratio `self / other`.
    #[must_use]
    fn ratio(self, other: Self) -> f64 {
        self.base() / other.base()
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_base(value: f64) -> Self {
        value
    }

    #[inline]
    fn base(self) -> f64 {
        self
    }
}
