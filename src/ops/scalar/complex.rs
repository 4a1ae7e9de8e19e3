//! Complex kernel
//!
//! Products and quotients are computed on max-normalized operands so that
//! intermediate values neither overflow nor underflow when the true result
//! is representable. The circular and hyperbolic functions are the
//! exponential identities (`sin z = (e^{iz} - e^{-iz}) / 2i`, ...) expanded
//! into real and imaginary parts, which avoids the cancellation the literal
//! difference of exponentials suffers near zero.
//!
//! The free functions in this module are also the complex subalgebra used by
//! the quaternion and octonion inverse functions.

use super::componentwise::impl_componentwise_kernel;
use crate::dtype::ComplexFloat64;
use crate::error::{Error, Result};
use crate::ops::common::{max_abs, signed_power};
use crate::ops::traits::{
    Commutative, Division, Exponential, Hyperbolic, ImaginaryUnits, InverseHyperbolic,
    InverseTrigonometric, Multiplication, Pow, Roots, Trigonometric,
};
use std::f64::consts::FRAC_PI_2;

type C = ComplexFloat64;

const NAN: C = C::new(f64::NAN, f64::NAN);

/// Kernel for [`ComplexFloat64`]
#[derive(Copy, Clone, Debug, Default)]
pub struct ComplexAlgebra;

/// Shared complex kernel
pub static COMPLEX: ComplexAlgebra = ComplexAlgebra;

impl_componentwise_kernel!(ComplexAlgebra, ComplexFloat64, "complex");

// ============================================================================
// Arithmetic
// ============================================================================

#[inline]
fn mul_naive(a: C, b: C) -> C {
    C::new(a.r * b.r - a.i * b.i, a.r * b.i + a.i * b.r)
}

/// a · b on max-normalized operands
pub(crate) fn mul(a: C, b: C) -> C {
    let sa = max_abs([a.r, a.i]);
    let sb = max_abs([b.r, b.i]);
    if sa == 0.0 || sb == 0.0 || !sa.is_finite() || !sb.is_finite() {
        return mul_naive(a, b);
    }
    let p = mul_naive(a / sa, b / sb);
    p * sa * sb
}

/// a / b on max-normalized operands; a zero divisor gives NaN
pub(crate) fn div(a: C, b: C) -> C {
    let sb = max_abs([b.r, b.i]);
    if sb == 0.0 || sb.is_nan() {
        return NAN;
    }
    if sb.is_infinite() {
        let d = b.r * b.r + b.i * b.i;
        return mul_naive(a, conj(b)) / d;
    }
    let sa = max_abs([a.r, a.i]);
    if sa == 0.0 {
        return C::ZERO;
    }
    if !sa.is_finite() {
        let bn = b / sb;
        let d = bn.r * bn.r + bn.i * bn.i;
        return mul_naive(a, conj(bn)) / (d * sb);
    }
    let an = a / sa;
    let bn = b / sb;
    let d = bn.r * bn.r + bn.i * bn.i;
    mul_naive(an, conj(bn)) / d * (sa / sb)
}

#[inline]
pub(crate) fn conj(a: C) -> C {
    C::new(a.r, -a.i)
}

#[inline]
pub(crate) fn inv(a: C) -> C {
    div(C::ONE, a)
}

#[inline]
fn is_zero(a: C) -> bool {
    a.r == 0.0 && a.i == 0.0
}

// ============================================================================
// Exponential family
// ============================================================================

pub(crate) fn exp(a: C) -> C {
    let m = a.r.exp();
    if a.i == 0.0 {
        return C::new(m, a.i);
    }
    let (s, c) = a.i.sin_cos();
    C::new(m * c, m * s)
}

pub(crate) fn ln(a: C) -> C {
    C::new(a.r.hypot(a.i).ln(), a.i.atan2(a.r))
}

/// Principal square root, stable for either sign of the real part
pub(crate) fn sqrt(a: C) -> C {
    let m = a.r.hypot(a.i);
    if m == 0.0 {
        return C::ZERO;
    }
    if a.r >= 0.0 {
        let t = ((m + a.r) / 2.0).sqrt();
        C::new(t, a.i / (2.0 * t))
    } else {
        let t = ((m - a.r) / 2.0).sqrt();
        C::new(a.i.abs() / (2.0 * t), t.copysign(a.i))
    }
}

/// Principal cube root from the polar form
pub(crate) fn cbrt(a: C) -> C {
    if is_zero(a) {
        return C::ZERO;
    }
    let m = a.r.hypot(a.i).cbrt();
    let (s, c) = (a.i.atan2(a.r) / 3.0).sin_cos();
    C::new(m * c, m * s)
}

/// a^b = exp(b · ln a); a zero base gives 0 for a positive real exponent
/// and NaN otherwise
pub(crate) fn pow(a: C, b: C) -> C {
    if is_zero(a) {
        return if b.r > 0.0 { C::ZERO } else { NAN };
    }
    exp(mul(ln(a), b))
}

// ============================================================================
// Circular and hyperbolic
// ============================================================================

pub(crate) fn sin(a: C) -> C {
    let (s, c) = a.r.sin_cos();
    C::new(s * a.i.cosh(), c * a.i.sinh())
}

pub(crate) fn cos(a: C) -> C {
    let (s, c) = a.r.sin_cos();
    C::new(c * a.i.cosh(), -s * a.i.sinh())
}

/// tan z = (sin 2x + i sinh 2y) / (cos 2x + cosh 2y)
pub(crate) fn tan(a: C) -> C {
    let (x, y) = (2.0 * a.r, 2.0 * a.i);
    let d = x.cos() + y.cosh();
    if d.is_infinite() {
        // |y| large: tan z → ±i
        return C::new(0.0, y.signum());
    }
    C::new(x.sin() / d, y.sinh() / d)
}

pub(crate) fn sinh(a: C) -> C {
    let (s, c) = a.i.sin_cos();
    C::new(a.r.sinh() * c, a.r.cosh() * s)
}

pub(crate) fn cosh(a: C) -> C {
    let (s, c) = a.i.sin_cos();
    C::new(a.r.cosh() * c, a.r.sinh() * s)
}

/// tanh z = -i tan(iz)
pub(crate) fn tanh(a: C) -> C {
    let t = tan(C::new(-a.i, a.r));
    C::new(t.i, -t.r)
}

// ============================================================================
// Inverse circular and hyperbolic
// ============================================================================

#[inline]
fn times_i(a: C) -> C {
    C::new(-a.i, a.r)
}

#[inline]
fn times_minus_i(a: C) -> C {
    C::new(a.i, -a.r)
}

/// asin z = -i ln(iz + √(1 - z²))
pub(crate) fn asin(a: C) -> C {
    let root = sqrt(C::ONE - mul(a, a));
    times_minus_i(ln(times_i(a) + root))
}

/// acos z = π/2 - asin z
pub(crate) fn acos(a: C) -> C {
    C::from_real(FRAC_PI_2) - asin(a)
}

/// atan z = (i/2) (ln(1 - iz) - ln(1 + iz))
pub(crate) fn atan(a: C) -> C {
    let iz = times_i(a);
    times_i(ln(C::ONE - iz) - ln(C::ONE + iz)) * 0.5
}

/// asinh z = ln(z + √(z² + 1))
pub(crate) fn asinh(a: C) -> C {
    ln(a + sqrt(mul(a, a) + C::ONE))
}

/// acosh z = ln(z + √(z + 1) √(z - 1))
pub(crate) fn acosh(a: C) -> C {
    ln(a + mul(sqrt(a + C::ONE), sqrt(a - C::ONE)))
}

/// atanh z = (ln(1 + z) - ln(1 - z)) / 2
pub(crate) fn atanh(a: C) -> C {
    (ln(C::ONE + a) - ln(C::ONE - a)) * 0.5
}

// ============================================================================
// Kernel trait implementations
// ============================================================================

impl ComplexAlgebra {
    /// out = i
    pub fn i(&self, out: &mut C) {
        *out = C::I;
    }

    /// out = aⁿ from the polar form `rⁿ (cos nθ, sin nθ)`
    ///
    /// Agrees with [`Multiplication::power`] up to rounding; `0^0` is NaN.
    pub fn power_polar(&self, n: i32, a: &C, out: &mut C) -> Result<()> {
        if is_zero(*a) && n == 0 {
            *out = NAN;
            return Ok(());
        }
        let r = a.r.hypot(a.i).powi(n);
        let (s, c) = (f64::from(n) * a.i.atan2(a.r)).sin_cos();
        *out = C::new(r * c, r * s);
        Ok(())
    }
}

impl Multiplication for ComplexAlgebra {
    fn multiply(&self, a: &C, b: &C, out: &mut C) -> Result<()> {
        *out = mul(*a, *b);
        Ok(())
    }

    fn power(&self, n: i32, a: &C, out: &mut C) -> Result<()> {
        if n == 0 {
            *out = if is_zero(*a) { NAN } else { C::ONE };
            return Ok(());
        }
        signed_power(self, n, a, out)
    }

    fn unity(&self, out: &mut C) {
        *out = C::ONE;
    }

    fn is_unity(&self, a: &C) -> bool {
        *a == C::ONE
    }
}

impl Division for ComplexAlgebra {
    fn divide(&self, a: &C, b: &C, out: &mut C) -> Result<()> {
        *out = div(*a, *b);
        Ok(())
    }

    fn invert(&self, a: &C, out: &mut C) -> Result<()> {
        *out = inv(*a);
        Ok(())
    }
}

impl Commutative for ComplexAlgebra {}

impl ImaginaryUnits for ComplexAlgebra {
    const UNIT_COUNT: usize = 1;

    fn imaginary_unit(&self, index: usize, out: &mut C) -> Result<()> {
        if index >= Self::UNIT_COUNT {
            return Err(Error::IndexOutOfBounds {
                index,
                size: Self::UNIT_COUNT,
            });
        }
        *out = C::I;
        Ok(())
    }
}

/// Implement a one-argument kernel method from a free function
macro_rules! unary_fns {
    ($($method:ident => $body:expr),+ $(,)?) => {
        $(
            fn $method(&self, a: &C, out: &mut C) -> Result<()> {
                let f: fn(C) -> C = $body;
                *out = f(*a);
                Ok(())
            }
        )+
    };
}

impl Exponential for ComplexAlgebra {
    unary_fns!(exp => exp, log => ln);
}

impl Roots for ComplexAlgebra {
    unary_fns!(sqrt => sqrt, cbrt => cbrt);
}

impl Pow for ComplexAlgebra {
    fn pow(&self, a: &C, b: &C, out: &mut C) -> Result<()> {
        *out = pow(*a, *b);
        Ok(())
    }
}

impl Trigonometric for ComplexAlgebra {
    unary_fns!(
        sin => sin,
        cos => cos,
        tan => tan,
        csc => |z| inv(sin(z)),
        sec => |z| inv(cos(z)),
        cot => |z| inv(tan(z)),
    );
}

impl InverseTrigonometric for ComplexAlgebra {
    unary_fns!(
        asin => asin,
        acos => acos,
        atan => atan,
        acsc => |z| asin(inv(z)),
        asec => |z| acos(inv(z)),
        acot => |z| atan(inv(z)),
    );
}

impl Hyperbolic for ComplexAlgebra {
    unary_fns!(
        sinh => sinh,
        cosh => cosh,
        tanh => tanh,
        csch => |z| inv(sinh(z)),
        sech => |z| inv(cosh(z)),
        coth => |z| inv(tanh(z)),
    );
}

impl InverseHyperbolic for ComplexAlgebra {
    unary_fns!(
        asinh => asinh,
        acosh => acosh,
        atanh => atanh,
        acsch => |z| asinh(inv(z)),
        asech => |z| acosh(inv(z)),
        acoth => |z| atanh(inv(z)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::traits::{Algebra, Conjugate, NanOps, Norm, Tolerance};

    fn close(a: C, b: C) -> bool {
        COMPLEX.within(1e-12, &a, &b)
    }

    #[test]
    fn test_norm_three_four() {
        assert_eq!(COMPLEX.norm(&C::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_norm_no_overflow() {
        let n = COMPLEX.norm(&C::new(1e300, 1e300));
        assert!(n.is_finite());
        assert!((n / 1e300 - std::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_mul_div_extremes() {
        let big = C::new(1e300, 1e300);
        let q = div(big, big);
        assert!(close(q, C::ONE));
        let tiny = C::new(1e-300, 1e-300);
        let p = mul(tiny, C::new(1e300, 0.0));
        assert!(close(p, C::new(1.0, 1.0)));
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        let mut out = C::ZERO;
        COMPLEX.divide(&C::ONE, &C::ZERO, &mut out).unwrap();
        assert!(COMPLEX.is_nan(&out));
        COMPLEX.invert(&C::ZERO, &mut out).unwrap();
        assert!(COMPLEX.is_nan(&out));
    }

    #[test]
    fn test_power() {
        let mut out = C::ZERO;
        COMPLEX.power(0, &C::ZERO, &mut out).unwrap();
        assert!(COMPLEX.is_nan(&out));
        COMPLEX.power(0, &C::new(2.0, 1.0), &mut out).unwrap();
        assert_eq!(out, C::ONE);
        COMPLEX.power(2, &C::I, &mut out).unwrap();
        assert!(close(out, C::new(-1.0, 0.0)));
        COMPLEX.power(-1, &C::new(0.0, 2.0), &mut out).unwrap();
        assert!(close(out, C::new(0.0, -0.5)));
        let mut polar = C::ZERO;
        COMPLEX.power_polar(5, &C::new(1.0, 1.0), &mut polar).unwrap();
        COMPLEX.power(5, &C::new(1.0, 1.0), &mut out).unwrap();
        assert!(close(out, polar));
    }

    #[test]
    fn test_exp_log_inverse() {
        let z = C::new(0.3, -1.2);
        assert!(close(exp(ln(z)), z));
        assert!(close(ln(exp(z)), z));
        assert!(close(exp(C::new(0.0, std::f64::consts::PI)), C::new(-1.0, 0.0)));
    }

    #[test]
    fn test_roots() {
        assert!(close(sqrt(C::new(-4.0, 0.0)), C::new(0.0, 2.0)));
        let z = C::new(-3.0, 4.0);
        let r = sqrt(z);
        assert!(close(mul(r, r), z));
        let c = cbrt(z);
        assert!(close(mul(mul(c, c), c), z));
        assert!(close(cbrt(C::new(8.0, 0.0)), C::new(2.0, 0.0)));
    }

    #[test]
    fn test_trig_identities() {
        let z = C::new(0.7, 0.4);
        let s = sin(z);
        let c = cos(z);
        assert!(close(mul(s, s) + mul(c, c), C::ONE));
        assert!(close(tan(z), div(s, c)));
        assert!(close(tanh(z), div(sinh(z), cosh(z))));
        assert!(close(sin(C::new(1e-20, 0.0)), C::new(1e-20, 0.0)));
        assert!(close(tan(C::new(0.3, 800.0)), C::I));
    }

    #[test]
    fn test_inverse_functions() {
        let z = C::new(0.4, -0.3);
        assert!(close(sin(asin(z)), z));
        assert!(close(cos(acos(z)), z));
        assert!(close(tan(atan(z)), z));
        assert!(close(sinh(asinh(z)), z));
        assert!(close(cosh(acosh(z)), z));
        assert!(close(tanh(atanh(z)), z));
        assert!(close(asin(C::new(0.5, 0.0)), C::new(0.5f64.asin(), 0.0)));
    }

    #[test]
    fn test_conjugate_involution() {
        let z = C::new(1.5, -2.0);
        let mut c = C::ZERO;
        let mut cc = C::ZERO;
        COMPLEX.conjugate(&z, &mut c).unwrap();
        COMPLEX.conjugate(&c, &mut cc).unwrap();
        assert_eq!(c, C::new(1.5, 2.0));
        assert!(COMPLEX.is_equal(&cc, &z));
    }

    #[test]
    fn test_imaginary_unit() {
        let mut out = C::ZERO;
        COMPLEX.imaginary_unit(0, &mut out).unwrap();
        assert_eq!(out, C::I);
        assert!(COMPLEX.imaginary_unit(1, &mut out).is_err());
    }
}
