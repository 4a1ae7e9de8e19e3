//! Random value generation

use super::Algebra;
use crate::error::Result;

/// Random values
///
/// Generators are thread-local (`rand::rng()`), so kernels stay shareable
/// across threads without a lock.
pub trait Random: Algebra {
    /// Fill every component of `out` independently from uniform [0, 1)
    fn random(&self, out: &mut Self::Value) -> Result<()>;
}
