//! Unary value traits: conjugate, norm, real/unreal split, exponential family

use super::Algebra;
use crate::error::Result;

/// Conjugation
pub trait Conjugate: Algebra {
    /// Negate every imaginary component; the real component is unchanged
    fn conjugate(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Euclidean norm
pub trait Norm: Algebra {
    /// Euclidean norm, computed with max-normalization so that components
    /// near the float limits neither overflow nor underflow
    fn norm(&self, a: &Self::Value) -> f64;
}

/// Split into real and unreal parts
pub trait RealUnreal: Algebra {
    /// Real component
    fn real_part(&self, a: &Self::Value) -> f64;

    /// out = a with the real component cleared
    fn unreal_part(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Exponential and natural logarithm
pub trait Exponential: Algebra {
    /// out = e^a
    fn exp(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = ln(a), principal branch
    fn log(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Principal roots
pub trait Roots: Algebra {
    /// out = √a
    fn sqrt(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = ∛a
    fn cbrt(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Power with a value exponent
pub trait Pow: Algebra {
    /// out = a^b = exp(ln(a) · b)
    fn pow(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;
}
