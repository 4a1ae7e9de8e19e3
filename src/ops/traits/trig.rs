//! Trigonometric and hyperbolic families

use super::Algebra;
use crate::error::Result;

/// Circular functions
pub trait Trigonometric: Algebra {
    /// out = sin(a)
    fn sin(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = cos(a)
    fn cos(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = tan(a)
    fn tan(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = csc(a) = 1 / sin(a)
    fn csc(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = sec(a) = 1 / cos(a)
    fn sec(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = cot(a) = cos(a) / sin(a)
    fn cot(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// Compute sin(a) and cos(a) together
    fn sincos(&self, a: &Self::Value, s: &mut Self::Value, c: &mut Self::Value) -> Result<()> {
        self.sin(a, s)?;
        self.cos(a, c)
    }
}

/// Inverse circular functions, principal branches
pub trait InverseTrigonometric: Algebra {
    /// out = asin(a)
    fn asin(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = acos(a)
    fn acos(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = atan(a)
    fn atan(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = acsc(a) = asin(1/a)
    fn acsc(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = asec(a) = acos(1/a)
    fn asec(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = acot(a) = atan(1/a)
    fn acot(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Hyperbolic functions
pub trait Hyperbolic: Algebra {
    /// out = sinh(a)
    fn sinh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = cosh(a)
    fn cosh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = tanh(a)
    fn tanh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = csch(a) = 1 / sinh(a)
    fn csch(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = sech(a) = 1 / cosh(a)
    fn sech(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = coth(a) = cosh(a) / sinh(a)
    fn coth(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// Compute sinh(a) and cosh(a) together
    fn sinhcosh(&self, a: &Self::Value, s: &mut Self::Value, c: &mut Self::Value) -> Result<()> {
        self.sinh(a, s)?;
        self.cosh(a, c)
    }
}

/// Inverse hyperbolic functions, principal branches
pub trait InverseHyperbolic: Algebra {
    /// out = asinh(a)
    fn asinh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = acosh(a)
    fn acosh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = atanh(a)
    fn atanh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = acsch(a) = asinh(1/a)
    fn acsch(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = asech(a) = acosh(1/a)
    fn asech(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = acoth(a) = atanh(1/a)
    fn acoth(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}
