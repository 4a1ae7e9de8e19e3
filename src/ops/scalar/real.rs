//! Real kernel on `f64`
//!
//! Division follows IEEE 754: `1/0 = +∞` and `0/0 = NaN`. Functions outside
//! their real domain (`log(-1)`, `asin(2)`) return NaN rather than an error.

use super::componentwise::impl_componentwise_kernel;
use crate::error::Result;
use crate::ops::common::signed_power;
use crate::ops::traits::{
    Commutative, Division, Exponential, Hyperbolic, InverseHyperbolic, InverseTrigonometric,
    Multiplication, Ordered, Pow, Roots, Trigonometric,
};
use std::cmp::Ordering;

/// Kernel for `f64`
#[derive(Copy, Clone, Debug, Default)]
pub struct RealAlgebra;

/// Shared real kernel
pub static REAL: RealAlgebra = RealAlgebra;

impl_componentwise_kernel!(RealAlgebra, f64, "real");

impl Multiplication for RealAlgebra {
    fn multiply(&self, a: &f64, b: &f64, out: &mut f64) -> Result<()> {
        *out = a * b;
        Ok(())
    }

    fn power(&self, n: i32, a: &f64, out: &mut f64) -> Result<()> {
        if n == 0 {
            *out = if *a == 0.0 { f64::NAN } else { 1.0 };
            return Ok(());
        }
        signed_power(self, n, a, out)
    }

    fn unity(&self, out: &mut f64) {
        *out = 1.0;
    }

    fn is_unity(&self, a: &f64) -> bool {
        *a == 1.0
    }
}

impl Division for RealAlgebra {
    fn divide(&self, a: &f64, b: &f64, out: &mut f64) -> Result<()> {
        *out = a / b;
        Ok(())
    }

    fn invert(&self, a: &f64, out: &mut f64) -> Result<()> {
        *out = a.recip();
        Ok(())
    }
}

impl Commutative for RealAlgebra {}

impl Pow for RealAlgebra {
    fn pow(&self, a: &f64, b: &f64, out: &mut f64) -> Result<()> {
        *out = if *a == 0.0 {
            if *b > 0.0 { 0.0 } else { f64::NAN }
        } else {
            a.powf(*b)
        };
        Ok(())
    }
}

macro_rules! real_fns {
    ($($trait:ident { $($method:ident => $f:expr),+ $(,)? })+) => {
        $(
            impl $trait for RealAlgebra {
                $(
                    #[inline]
                    fn $method(&self, a: &f64, out: &mut f64) -> Result<()> {
                        let f: fn(f64) -> f64 = $f;
                        *out = f(*a);
                        Ok(())
                    }
                )+
            }
        )+
    };
}

real_fns! {
    Exponential {
        exp => f64::exp,
        log => f64::ln,
    }
    Roots {
        sqrt => f64::sqrt,
        cbrt => f64::cbrt,
    }
    Trigonometric {
        sin => f64::sin,
        cos => f64::cos,
        tan => f64::tan,
        csc => |x| x.sin().recip(),
        sec => |x| x.cos().recip(),
        cot => |x| x.tan().recip(),
    }
    InverseTrigonometric {
        asin => f64::asin,
        acos => f64::acos,
        atan => f64::atan,
        acsc => |x| x.recip().asin(),
        asec => |x| x.recip().acos(),
        acot => |x| x.recip().atan(),
    }
    Hyperbolic {
        sinh => f64::sinh,
        cosh => f64::cosh,
        tanh => f64::tanh,
        csch => |x| x.sinh().recip(),
        sech => |x| x.cosh().recip(),
        coth => |x| x.tanh().recip(),
    }
    InverseHyperbolic {
        asinh => f64::asinh,
        acosh => f64::acosh,
        atanh => f64::atanh,
        acsch => |x| x.recip().asinh(),
        asech => |x| x.recip().acosh(),
        acoth => |x| x.recip().atanh(),
    }
}

impl Ordered for RealAlgebra {
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // -0.0 and 0.0 compare equal, matching PartialEq
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }

    fn min(&self, a: &f64, b: &f64, out: &mut f64) -> Result<()> {
        *out = if a.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            a.min(*b)
        };
        Ok(())
    }

    fn max(&self, a: &f64, b: &f64, out: &mut f64) -> Result<()> {
        *out = if a.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            a.max(*b)
        };
        Ok(())
    }

    fn signum(&self, a: &f64) -> i32 {
        if *a > 0.0 {
            1
        } else if *a < 0.0 {
            -1
        } else {
            0
        }
    }

    fn abs(&self, a: &f64, out: &mut f64) -> Result<()> {
        *out = a.abs();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::traits::*;

    #[test]
    fn test_power() {
        let mut out = 0.0;
        REAL.power(3, &2.0, &mut out).unwrap();
        assert_eq!(out, 8.0);
        REAL.power(-2, &2.0, &mut out).unwrap();
        assert_eq!(out, 0.25);
        REAL.power(0, &5.0, &mut out).unwrap();
        assert_eq!(out, 1.0);
        REAL.power(0, &0.0, &mut out).unwrap();
        assert!(out.is_nan());
    }

    #[test]
    fn test_ieee_division() {
        let mut out = 0.0;
        REAL.divide(&1.0, &0.0, &mut out).unwrap();
        assert_eq!(out, f64::INFINITY);
        assert!(REAL.is_infinite(&out));
        REAL.divide(&0.0, &0.0, &mut out).unwrap();
        assert!(REAL.is_nan(&out));
    }

    #[test]
    fn test_pow_zero_base() {
        let mut out = 1.0;
        REAL.pow(&0.0, &2.0, &mut out).unwrap();
        assert_eq!(out, 0.0);
        REAL.pow(&0.0, &-1.0, &mut out).unwrap();
        assert!(out.is_nan());
        REAL.pow(&4.0, &0.5, &mut out).unwrap();
        assert_eq!(out, 2.0);
    }

    #[test]
    fn test_reciprocal_trig() {
        let x = 0.4f64;
        let mut out = 0.0;
        REAL.sec(&x, &mut out).unwrap();
        assert!((out - 1.0 / x.cos()).abs() < 1e-15);
        REAL.acoth(&3.0, &mut out).unwrap();
        assert!((out.tanh() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_ordering_puts_nan_last() {
        let mut values = [3.0, f64::NAN, -1.0, 0.5];
        values.sort_by(|a, b| REAL.compare(a, b));
        assert_eq!(&values[..3], &[-1.0, 0.5, 3.0]);
        assert!(values[3].is_nan());
        assert_eq!(REAL.compare(&0.0, &-0.0), Ordering::Equal);
    }

    #[test]
    fn test_min_max_signum() {
        let mut out = 0.0;
        REAL.min(&2.0, &-3.0, &mut out).unwrap();
        assert_eq!(out, -3.0);
        REAL.max(&2.0, &f64::NAN, &mut out).unwrap();
        assert!(out.is_nan());
        assert_eq!(REAL.signum(&-0.5), -1);
        assert_eq!(REAL.signum(&0.0), 0);
        assert_eq!(REAL.signum(&f64::NAN), 0);
    }

    #[test]
    fn test_componentwise_contract() {
        let mut out = 0.0;
        REAL.conjugate(&-2.0, &mut out).unwrap();
        assert_eq!(out, -2.0);
        REAL.unreal_part(&-2.0, &mut out).unwrap();
        assert_eq!(out, 0.0);
        assert_eq!(REAL.norm(&-2.0), 2.0);
        REAL.round(RoundingMode::Even, 1.0, &2.5, &mut out).unwrap();
        assert_eq!(out, 2.0);
        REAL.scale_by_one_half(3, &1.0, &mut out).unwrap();
        assert_eq!(out, 0.125);
        REAL.random(&mut out).unwrap();
        assert!((0.0..1.0).contains(&out));
    }

    #[test]
    fn test_parse_through_kernel() {
        assert_eq!(REAL.construct_from_str("(2.5)").unwrap(), 2.5);
        assert!(REAL.construct_from_str("(2.5,1)").is_err());
    }
}
