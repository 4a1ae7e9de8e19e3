//! Logical operations trait.

use super::Algebra;
use crate::error::Result;

/// Boolean connectives
pub trait LogicalOps: Algebra {
    /// out = a ∧ b
    fn logical_and(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a ∨ b
    fn logical_or(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a ⊕ b
    fn logical_xor(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = ¬a
    fn logical_not(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;
}
