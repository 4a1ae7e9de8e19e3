//! Scaling by real factors, named constants and imaginary units

use super::Algebra;
use crate::error::Result;
use num_rational::{BigRational, Rational64};

/// Multiplication by a real factor
///
/// The exact-factor variants convert each component to an arbitrary
/// precision rational, scale exactly, and round once on the way back.
pub trait Scaling: Algebra {
    /// out = factor · a, exact until the final rounding
    fn scale_by_high_prec(
        &self,
        factor: &BigRational,
        a: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;

    /// out = factor · a, exact until the final rounding
    fn scale_by_rational(
        &self,
        factor: &Rational64,
        a: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;

    /// out = factor · a in plain f64 arithmetic
    fn scale_by_double(&self, factor: f64, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a / 2ⁿ
    fn scale_by_one_half(&self, n: u32, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a · 2ⁿ
    fn scale_by_two(&self, n: u32, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}

/// Named real constants embedded in the value kind
pub trait Constants: Algebra {
    /// out = π
    fn pi(&self, out: &mut Self::Value);

    /// out = e
    fn e(&self, out: &mut Self::Value);

    /// out = γ (Euler-Mascheroni)
    fn gamma(&self, out: &mut Self::Value);

    /// out = φ (golden ratio)
    fn phi(&self, out: &mut Self::Value);
}

/// Access to the imaginary basis units
pub trait ImaginaryUnits: Algebra {
    /// Number of imaginary units (1, 3 or 7)
    const UNIT_COUNT: usize;

    /// out = imaginary unit `index` (0 is `i`)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= UNIT_COUNT`.
    fn imaginary_unit(&self, index: usize, out: &mut Self::Value) -> Result<()>;
}
