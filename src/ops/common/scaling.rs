//! Exact scaling through arbitrary precision rationals
//!
//! Every finite `f64` is a dyadic rational, so converting a component to a
//! `BigRational`, multiplying by the factor and converting back rounds
//! exactly once.

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use num_traits::{One, ToPrimitive};

/// `x · factor` rounded once to the nearest `f64`
///
/// NaN and infinite components have no rational form and are scaled in
/// plain f64 arithmetic.
pub fn scale_exact(factor: &BigRational, x: f64) -> f64 {
    match BigRational::from_float(x) {
        Some(r) => (r * factor).to_f64().unwrap_or(f64::NAN),
        None => x * factor.to_f64().unwrap_or(f64::NAN),
    }
}

/// Widen a 64-bit rational
pub fn big_rational(r: &Rational64) -> BigRational {
    BigRational::new(BigInt::from(*r.numer()), BigInt::from(*r.denom()))
}

/// Largest binary exponent kept exact by the power-of-two factors
///
/// Every finite non-zero `f64` lies in `[2⁻¹⁰⁷⁴, 2¹⁰²⁴)`, so scaling by
/// `2^±2100` already overflows to infinity or rounds to zero. Larger
/// exponents are clamped here and give the same results.
pub const MAX_BINARY_EXPONENT: u32 = 2100;

/// 2ⁿ as an exact rational, with `n` clamped to [`MAX_BINARY_EXPONENT`]
pub fn power_of_two(n: u32) -> BigRational {
    BigRational::from_integer(BigInt::one() << n.min(MAX_BINARY_EXPONENT) as usize)
}

/// 2⁻ⁿ as an exact rational, with `n` clamped to [`MAX_BINARY_EXPONENT`]
pub fn power_of_one_half(n: u32) -> BigRational {
    BigRational::new(BigInt::one(), BigInt::one() << n.min(MAX_BINARY_EXPONENT) as usize)
}

/// Scale every component of `src` into `dst`
pub fn scale_components(factor: &BigRational, src: &[f64], dst: &mut [f64]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = scale_exact(factor, s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_exact_rounds_once() {
        // plain f64 rounds 1/10 before multiplying and lands on 0.30000000000000004
        let tenth = big_rational(&Rational64::new(1, 10));
        assert_eq!(scale_exact(&tenth, 3.0), 0.3);
        assert_ne!(3.0 * 0.1, 0.3);
        let third = big_rational(&Rational64::new(1, 3));
        assert_eq!(scale_exact(&third, 3.0), 1.0);
    }

    #[test]
    fn test_powers_of_two() {
        assert_eq!(scale_exact(&power_of_two(10), 1.5), 1536.0);
        assert_eq!(scale_exact(&power_of_one_half(3), 1.0), 0.125);
    }

    #[test]
    fn test_huge_exponents_saturate() {
        assert_eq!(power_of_two(u32::MAX), power_of_two(MAX_BINARY_EXPONENT));
        assert_eq!(scale_exact(&power_of_two(u32::MAX), 5e-324), f64::INFINITY);
        assert_eq!(scale_exact(&power_of_two(u32::MAX), -5e-324), f64::NEG_INFINITY);
        assert_eq!(scale_exact(&power_of_one_half(u32::MAX), f64::MAX), 0.0);
        assert_eq!(scale_exact(&power_of_one_half(MAX_BINARY_EXPONENT), f64::MAX), 0.0);
        assert_eq!(scale_exact(&power_of_two(1100), 5e-324), 2f64.powi(26));
    }

    #[test]
    fn test_non_finite_components() {
        let two = power_of_two(1);
        assert!(scale_exact(&two, f64::NAN).is_nan());
        assert_eq!(scale_exact(&two, f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
