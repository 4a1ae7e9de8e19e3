//! Integer powers by repeated multiplication

use crate::error::Result;
use crate::ops::traits::{Division, Multiplication};

/// out = a^n for n ≥ 1, multiplying left to right
///
/// Left-to-right repetition only needs power associativity, which octonions
/// have, so the same loop serves every kind.
pub fn repeat_multiply<A: Multiplication>(
    alg: &A,
    n: u32,
    a: &A::Value,
    out: &mut A::Value,
) -> Result<()> {
    debug_assert!(n >= 1);
    let mut acc = a.clone();
    let mut tmp = alg.construct_copy(a);
    for _ in 1..n {
        alg.multiply(&acc, a, &mut tmp)?;
        std::mem::swap(&mut acc, &mut tmp);
    }
    *out = acc;
    Ok(())
}

/// out = a^n for any n ≠ 0; negative exponents invert first
pub fn signed_power<A: Division>(alg: &A, n: i32, a: &A::Value, out: &mut A::Value) -> Result<()> {
    debug_assert!(n != 0);
    if n > 0 {
        return repeat_multiply(alg, n.unsigned_abs(), a, out);
    }
    let mut inv = alg.construct_copy(a);
    alg.invert(a, &mut inv)?;
    repeat_multiply(alg, n.unsigned_abs(), &inv, out)
}
