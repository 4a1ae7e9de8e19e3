//! Componentwise rounding

use super::Algebra;
use crate::error::Result;

/// Direction used when rounding a component to a multiple of `delta`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Truncate toward zero
    TowardsZero,
    /// Round away from zero
    AwayFromZero,
    /// Round toward +∞ (ceiling)
    Positive,
    /// Round toward -∞ (floor)
    Negative,
    /// Round to nearest, ties away from zero
    Nearest,
    /// Round to nearest, ties to even
    Even,
}

/// Rounding to a grid
pub trait Rounding: Algebra {
    /// Round every real-valued component of `a` independently to a multiple
    /// of `delta`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `delta` is not finite and positive.
    fn round(
        &self,
        mode: RoundingMode,
        delta: f64,
        a: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;
}
