//! Boolean kernel
//!
//! `bool` as the two-element field GF(2): addition is exclusive or,
//! multiplication is conjunction. The logical connectives are exposed
//! separately through [`LogicalOps`].

use crate::error::{Error, Result};
use crate::ops::traits::{
    AdditiveGroup, Algebra, Commutative, Conjugate, LogicalOps, Multiplication, Ordered, Random,
};
use rand::Rng;
use std::cmp::Ordering;

/// Kernel for `bool`
#[derive(Copy, Clone, Debug, Default)]
pub struct BooleanAlgebra;

/// Shared boolean kernel
pub static BOOLEAN: BooleanAlgebra = BooleanAlgebra;

impl Algebra for BooleanAlgebra {
    type Value = bool;

    fn kind_name(&self) -> &'static str {
        "boolean"
    }

    fn zero(&self, out: &mut bool) {
        *out = false;
    }

    fn is_zero(&self, a: &bool) -> bool {
        !*a
    }
}

impl AdditiveGroup for BooleanAlgebra {
    fn add(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = a ^ b;
        Ok(())
    }

    fn subtract(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = a ^ b;
        Ok(())
    }

    // every element is its own additive inverse
    fn negate(&self, a: &bool, out: &mut bool) -> Result<()> {
        *out = *a;
        Ok(())
    }
}

impl Multiplication for BooleanAlgebra {
    fn multiply(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = *a && *b;
        Ok(())
    }

    /// `a^0` is `true` for both values since booleans have no NaN; a
    /// negative power of `false` has no inverse to raise.
    fn power(&self, n: i32, a: &bool, out: &mut bool) -> Result<()> {
        if n < 0 && !*a {
            return Err(Error::invalid_argument(
                "n",
                format!("false has no inverse, cannot raise to {}", n),
            ));
        }
        *out = n == 0 || *a;
        Ok(())
    }

    fn unity(&self, out: &mut bool) {
        *out = true;
    }

    fn is_unity(&self, a: &bool) -> bool {
        *a
    }
}

impl Commutative for BooleanAlgebra {}

impl Conjugate for BooleanAlgebra {
    fn conjugate(&self, a: &bool, out: &mut bool) -> Result<()> {
        *out = *a;
        Ok(())
    }
}

impl LogicalOps for BooleanAlgebra {
    fn logical_and(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = *a && *b;
        Ok(())
    }

    fn logical_or(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = *a || *b;
        Ok(())
    }

    fn logical_xor(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = a ^ b;
        Ok(())
    }

    fn logical_not(&self, a: &bool, out: &mut bool) -> Result<()> {
        *out = !*a;
        Ok(())
    }
}

impl Ordered for BooleanAlgebra {
    fn compare(&self, a: &bool, b: &bool) -> Ordering {
        a.cmp(b)
    }

    fn min(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = *a && *b;
        Ok(())
    }

    fn max(&self, a: &bool, b: &bool, out: &mut bool) -> Result<()> {
        *out = *a || *b;
        Ok(())
    }

    fn signum(&self, a: &bool) -> i32 {
        i32::from(*a)
    }

    fn abs(&self, a: &bool, out: &mut bool) -> Result<()> {
        *out = *a;
        Ok(())
    }
}

impl Random for BooleanAlgebra {
    fn random(&self, out: &mut bool) -> Result<()> {
        *out = rand::rng().random::<bool>();
        Ok(())
    }
}
