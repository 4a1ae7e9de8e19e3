//! Special-value predicates, tolerance comparison and ordering

use super::Algebra;
use crate::error::Result;
use std::cmp::Ordering;

/// NaN support
pub trait NanOps: Algebra {
    /// Fill every component of `out` with NaN
    fn nan(&self, out: &mut Self::Value) -> Result<()>;

    /// Whether any component is NaN
    fn is_nan(&self, a: &Self::Value) -> bool;
}

/// Infinity support
pub trait InfiniteOps: Algebra {
    /// Fill every component of `out` with +∞
    fn infinite(&self, out: &mut Self::Value) -> Result<()>;

    /// Whether no component is NaN and at least one is infinite
    fn is_infinite(&self, a: &Self::Value) -> bool;
}

/// Approximate equality
pub trait Tolerance: Algebra {
    /// Whether every component of `a` is within `tol` of the matching
    /// component of `b`
    ///
    /// A NaN component is never within tolerance.
    fn within(&self, tol: f64, a: &Self::Value, b: &Self::Value) -> bool;
}

/// Total ordering (Real, Boolean)
pub trait Ordered: Algebra {
    /// Compare two values; NaN sorts after every number
    fn compare(&self, a: &Self::Value, b: &Self::Value) -> Ordering;

    /// out = min(a, b)
    fn min(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = max(a, b)
    fn max(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// -1, 0 or 1
    fn signum(&self, a: &Self::Value) -> i32;

    /// out = |a|
    fn abs(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}
