//! Core algebra traits: construction, additive group, multiplication, division

use crate::error::Result;
use crate::literal::FromLiteral;
use std::fmt;

/// A kernel exposing the operation contract for one kind of value
///
/// Kernels are stateless and shared process-wide. Every operation takes its
/// inputs by shared reference and writes into a caller-owned output, so no
/// operation allocates behind the caller's back except when an output has to
/// change shape.
///
/// The borrow checker keeps `out` distinct from every input, so an operation
/// never observes its own partial writes.
pub trait Algebra: Send + Sync {
    /// Value type operated on by this kernel
    type Value: Clone
        + Default
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + FromLiteral
        + Send
        + Sync;

    /// Short name of the value kind, e.g. `"complex"` or `"real vector"`
    fn kind_name(&self) -> &'static str;

    /// New zero (or empty) value
    fn construct(&self) -> Self::Value {
        Self::Value::default()
    }

    /// Deep copy of `other`
    fn construct_copy(&self, other: &Self::Value) -> Self::Value {
        other.clone()
    }

    /// Value parsed from the bracketed literal form
    fn construct_from_str(&self, s: &str) -> Result<Self::Value> {
        Self::Value::from_literal(s)
    }

    /// Content equality
    fn is_equal(&self, a: &Self::Value, b: &Self::Value) -> bool {
        a == b
    }

    /// Deep copy `from` into `to`
    fn assign(&self, from: &Self::Value, to: &mut Self::Value) {
        to.clone_from(from);
    }

    /// Set `out` to zero, keeping its shape
    fn zero(&self, out: &mut Self::Value);

    /// Whether every component is zero
    fn is_zero(&self, a: &Self::Value) -> bool;
}

/// Abelian group under addition
pub trait AdditiveGroup: Algebra {
    /// out = a + b
    fn add(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a - b
    fn subtract(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = -a
    fn negate(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Multiplication with a unity
///
/// Multiplication need not commute (quaternions) or associate (octonions).
pub trait Multiplication: Algebra {
    /// out = a · b
    fn multiply(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a^n
    ///
    /// `n = 0` yields unity, except that `0^0` yields NaN where the kind has
    /// a NaN. Negative `n` requires an inverse.
    fn power(&self, n: i32, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// Set `out` to the multiplicative identity
    fn unity(&self, out: &mut Self::Value);

    /// Whether `a` is the multiplicative identity
    fn is_unity(&self, a: &Self::Value) -> bool;
}

/// Division (field or skew field)
///
/// A zero-modulus divisor yields a NaN-filled value, not an error.
pub trait Division: Multiplication {
    /// out = a · b⁻¹
    fn divide(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a⁻¹
    fn invert(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Marker: multiplication commutes
pub trait Commutative: Multiplication {}
