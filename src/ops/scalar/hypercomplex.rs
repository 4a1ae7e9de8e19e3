//! Formulas shared by the quaternion and octonion kernels
//!
//! A hypercomplex value `a = r + u` splits into its real part `r` and its
//! unreal part `u`. The elementary functions only depend on `r` and `|u|`,
//! and map `u` onto its own direction:
//!
//! ```text
//! exp(a)  = e^r (cos|u| + sinc_pi(|u|) u)
//! sin(a)  = sin r cosh|u| + cos r sinhc_pi(|u|) u
//! cos(a)  = cos r cosh|u| - sin r sinhc_pi(|u|) u
//! sinh(a) = cos|u| sinh r + cosh r sinc_pi(|u|) u
//! cosh(a) = cos|u| cosh r + sinh r sinc_pi(|u|) u
//! ```
//!
//! Every such function reduces to its real counterpart when `u = 0`. The
//! inverse functions use the same observation in reverse: `1` and `û = u/|u|`
//! span a subalgebra isomorphic to the complex numbers, so the complex
//! principal branch is computed on `r + i|u|` and mapped back along `û`.

use super::complex as cx;
use crate::dtype::{ComplexFloat64, Components};
use crate::ops::common::{max_abs, scaled_norm, sinc_pi, sinhc_pi};

/// Values with a hard-coded multiplication table
pub(crate) trait Hypercomplex: Components + From<f64> {
    /// a · b
    fn mul(a: &Self, b: &Self) -> Self;
}

#[inline]
fn nan<T: Hypercomplex>() -> T {
    let mut out = T::default();
    out.components_mut().fill(f64::NAN);
    out
}

#[inline]
fn unreal_norm<T: Components>(a: &T) -> f64 {
    scaled_norm(a.components()[1..].iter().copied())
}

/// `re + scale · u` where `u` is the unreal part of `a`
#[inline]
fn with_unreal<T: Hypercomplex>(re: f64, scale: f64, a: &T) -> T {
    let mut out = T::default();
    let dst = out.components_mut();
    dst[0] = re;
    for (d, &x) in dst[1..].iter_mut().zip(&a.components()[1..]) {
        *d = scale * x;
    }
    out
}

/// Unit direction of the unreal part, `i` when there is none
///
/// With infinite components the direction is taken over those components
/// alone.
fn unreal_axis<T: Hypercomplex>(a: &T) -> T {
    let mut axis = T::default();
    let u = &a.components()[1..];
    let s = max_abs(u.iter().copied());
    if s == 0.0 || s.is_nan() {
        axis.components_mut()[1] = 1.0;
        return axis;
    }
    let dst = axis.components_mut();
    for (d, &x) in dst[1..].iter_mut().zip(u) {
        // infinite components dominate; finite ones vanish beside them
        *d = if s.is_infinite() {
            if x.is_infinite() { x.signum() } else { 0.0 }
        } else {
            x / s
        };
    }
    let n = scaled_norm(dst[1..].iter().copied());
    for d in dst[1..].iter_mut() {
        *d /= n;
    }
    axis
}

/// Evaluate a complex function on the complex plane containing `a`
fn lift<T: Hypercomplex>(a: &T, f: fn(ComplexFloat64) -> ComplexFloat64) -> T {
    let z = ComplexFloat64::new(a.components()[0], unreal_norm(a));
    let w = f(z);
    let axis = unreal_axis(a);
    with_unreal(w.r, w.i, &axis)
}

pub(crate) fn conj<T: Hypercomplex>(a: &T) -> T {
    with_unreal(a.components()[0], -1.0, a)
}

/// conj(a) / |a|², evaluated on `a / max|aₖ|`; a zero modulus gives NaN
pub(crate) fn invert<T: Hypercomplex>(a: &T) -> T {
    let s = max_abs(a.components().iter().copied());
    if s == 0.0 || s.is_nan() {
        return nan();
    }
    let mut out = conj(a);
    if s.is_infinite() {
        let d: f64 = a.components().iter().map(|x| x * x).sum();
        for c in out.components_mut() {
            *c /= d;
        }
        return out;
    }
    let d: f64 = a.components().iter().map(|x| (x / s) * (x / s)).sum();
    for c in out.components_mut() {
        *c = (*c / s / d) / s;
    }
    out
}

pub(crate) fn divide<T: Hypercomplex>(a: &T, b: &T) -> T {
    T::mul(a, &invert(b))
}

pub(crate) fn scale<T: Hypercomplex>(a: &T, f: f64) -> T {
    let mut out = *a;
    for c in out.components_mut() {
        *c *= f;
    }
    out
}

pub(crate) fn exp<T: Hypercomplex>(a: &T) -> T {
    let r = a.components()[0];
    let m = unreal_norm(a);
    let e = r.exp();
    with_unreal(e * m.cos(), e * sinc_pi(m), a)
}

/// Principal logarithm: `ln|a| + θ û` with `θ = atan2(|u|, r)`
///
/// A negative real argument has no unreal direction; its logarithm takes
/// `π` along `i`.
pub(crate) fn log<T: Hypercomplex>(a: &T) -> T {
    let r = a.components()[0];
    let n = scaled_norm(a.components().iter().copied());
    let m = unreal_norm(a);
    if m == 0.0 {
        let mut out = T::from(n.ln());
        if r < 0.0 {
            out.components_mut()[1] = std::f64::consts::PI;
        }
        return out;
    }
    let theta = m.atan2(r);
    with_unreal(n.ln(), theta / m, a)
}

#[inline]
fn is_zero<T: Components>(a: &T) -> bool {
    a.components().iter().all(|&c| c == 0.0)
}

/// a^p for a real exponent p
pub(crate) fn pow_real<T: Hypercomplex>(a: &T, p: f64) -> T {
    if is_zero(a) {
        return if p > 0.0 { T::default() } else { nan() };
    }
    exp(&scale(&log(a), p))
}

/// a^b = exp(ln(a) · b)
pub(crate) fn pow<T: Hypercomplex>(a: &T, b: &T) -> T {
    if is_zero(a) {
        return if b.components()[0] > 0.0 {
            T::default()
        } else {
            nan()
        };
    }
    exp(&T::mul(&log(a), b))
}

pub(crate) fn sin<T: Hypercomplex>(a: &T) -> T {
    let r = a.components()[0];
    let m = unreal_norm(a);
    let (s, c) = r.sin_cos();
    with_unreal(s * m.cosh(), c * sinhc_pi(m), a)
}

pub(crate) fn cos<T: Hypercomplex>(a: &T) -> T {
    let r = a.components()[0];
    let m = unreal_norm(a);
    let (s, c) = r.sin_cos();
    with_unreal(c * m.cosh(), -s * sinhc_pi(m), a)
}

pub(crate) fn sinh<T: Hypercomplex>(a: &T) -> T {
    let r = a.components()[0];
    let m = unreal_norm(a);
    with_unreal(m.cos() * r.sinh(), r.cosh() * sinc_pi(m), a)
}

pub(crate) fn cosh<T: Hypercomplex>(a: &T) -> T {
    let r = a.components()[0];
    let m = unreal_norm(a);
    with_unreal(m.cos() * r.cosh(), r.sinh() * sinc_pi(m), a)
}

// sin(a) and cos(a) lie in the same complex plane and commute, so the
// order of the quotient does not matter.

pub(crate) fn tan<T: Hypercomplex>(a: &T) -> T {
    divide(&sin(a), &cos(a))
}

pub(crate) fn cot<T: Hypercomplex>(a: &T) -> T {
    divide(&cos(a), &sin(a))
}

pub(crate) fn tanh<T: Hypercomplex>(a: &T) -> T {
    divide(&sinh(a), &cosh(a))
}

pub(crate) fn coth<T: Hypercomplex>(a: &T) -> T {
    divide(&cosh(a), &sinh(a))
}

pub(crate) fn asin<T: Hypercomplex>(a: &T) -> T {
    lift(a, cx::asin)
}

pub(crate) fn acos<T: Hypercomplex>(a: &T) -> T {
    lift(a, cx::acos)
}

pub(crate) fn atan<T: Hypercomplex>(a: &T) -> T {
    lift(a, cx::atan)
}

pub(crate) fn asinh<T: Hypercomplex>(a: &T) -> T {
    lift(a, cx::asinh)
}

pub(crate) fn acosh<T: Hypercomplex>(a: &T) -> T {
    lift(a, cx::acosh)
}

pub(crate) fn atanh<T: Hypercomplex>(a: &T) -> T {
    lift(a, cx::atanh)
}

/// Implement multiplication, division and the transcendental traits for a
/// kernel whose value implements [`Hypercomplex`].
macro_rules! impl_hypercomplex_kernel {
    ($kernel:ident, $value:ty) => {
        impl $crate::ops::traits::Multiplication for $kernel {
            fn multiply(&self, a: &$value, b: &$value, out: &mut $value) -> $crate::error::Result<()> {
                *out = <$value as $crate::ops::scalar::hypercomplex::Hypercomplex>::mul(a, b);
                Ok(())
            }

            fn power(&self, n: i32, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                if n == 0 {
                    if $crate::dtype::Element::is_zero(a) {
                        $crate::ops::traits::NanOps::nan(self, out)?;
                    } else {
                        *out = <$value>::ONE;
                    }
                    return Ok(());
                }
                $crate::ops::common::signed_power(self, n, a, out)
            }

            fn unity(&self, out: &mut $value) {
                *out = <$value>::ONE;
            }

            fn is_unity(&self, a: &$value) -> bool {
                *a == <$value>::ONE
            }
        }

        impl $crate::ops::traits::Division for $kernel {
            fn divide(&self, a: &$value, b: &$value, out: &mut $value) -> $crate::error::Result<()> {
                *out = $crate::ops::scalar::hypercomplex::divide(a, b);
                Ok(())
            }

            fn invert(&self, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                *out = $crate::ops::scalar::hypercomplex::invert(a);
                Ok(())
            }
        }

        impl $crate::ops::traits::Pow for $kernel {
            fn pow(&self, a: &$value, b: &$value, out: &mut $value) -> $crate::error::Result<()> {
                *out = $crate::ops::scalar::hypercomplex::pow(a, b);
                Ok(())
            }
        }

        $crate::ops::scalar::hypercomplex::impl_hypercomplex_kernel!(@unary $kernel, $value,
            Exponential {
                exp => |a| exp(a),
                log => |a| log(a),
            }
            Roots {
                sqrt => |a| pow_real(a, 0.5),
                cbrt => |a| pow_real(a, 1.0 / 3.0),
            }
            Trigonometric {
                sin => |a| sin(a),
                cos => |a| cos(a),
                tan => |a| tan(a),
                csc => |a| invert(&sin(a)),
                sec => |a| invert(&cos(a)),
                cot => |a| cot(a),
            }
            InverseTrigonometric {
                asin => |a| asin(a),
                acos => |a| acos(a),
                atan => |a| atan(a),
                acsc => |a| asin(&invert(a)),
                asec => |a| acos(&invert(a)),
                acot => |a| atan(&invert(a)),
            }
            Hyperbolic {
                sinh => |a| sinh(a),
                cosh => |a| cosh(a),
                tanh => |a| tanh(a),
                csch => |a| invert(&sinh(a)),
                sech => |a| invert(&cosh(a)),
                coth => |a| coth(a),
            }
            InverseHyperbolic {
                asinh => |a| asinh(a),
                acosh => |a| acosh(a),
                atanh => |a| atanh(a),
                acsch => |a| asinh(&invert(a)),
                asech => |a| acosh(&invert(a)),
                acoth => |a| atanh(&invert(a)),
            }
        );
    };

    (@unary $kernel:ident, $value:ty, $($trait:ident { $($method:ident => $body:expr),+ $(,)? })+) => {
        $(
            impl $crate::ops::traits::$trait for $kernel {
                $(
                    fn $method(&self, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                        #[allow(unused_imports)]
                        use $crate::ops::scalar::hypercomplex::*;
                        let f: fn(&$value) -> $value = $body;
                        *out = f(a);
                        Ok(())
                    }
                )+
            }
        )+
    };
}

pub(crate) use impl_hypercomplex_kernel;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::QuaternionFloat64 as Q;

    #[test]
    fn test_unreal_axis_is_unit() {
        let axis = unreal_axis(&Q::new(5.0, 0.0, 3.0, -4.0));
        assert_eq!(axis, Q::new(0.0, 0.0, 0.6, -0.8));
        assert_eq!(unreal_axis(&Q::new(2.0, 0.0, 0.0, 0.0)), Q::I);
        assert_eq!(unreal_axis(&Q::new(0.0, f64::NAN, 1.0, 0.0)), Q::I);
    }

    #[test]
    fn test_unreal_axis_with_infinite_components() {
        let axis = unreal_axis(&Q::new(1.0, f64::INFINITY, 7.0, 0.0));
        assert_eq!(axis, Q::I);

        let axis = unreal_axis(&Q::new(0.0, f64::INFINITY, f64::NEG_INFINITY, 3.0));
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!((axis.components()[1] - h).abs() < 1e-15);
        assert!((axis.components()[2] + h).abs() < 1e-15);
        assert_eq!(axis.components()[3], 0.0);

        let w = lift(&Q::new(0.0, 0.0, f64::NEG_INFINITY, 0.0), |_| {
            ComplexFloat64::new(1.0, 2.0)
        });
        assert_eq!(w, Q::new(1.0, 0.0, -2.0, 0.0));
    }
}
