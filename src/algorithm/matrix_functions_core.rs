//! Series evaluation of analytic functions over a ring kernel
//!
//! These routines only use ring operations plus exact power-of-two scaling,
//! so the same code evaluates `exp(A)` for a real matrix, a quaternion
//! matrix, or a plain scalar. Convergence is controlled by shrinking the
//! argument first:
//!
//! - `exp`: scaling and squaring, `exp(A) = exp(A / 2^s)^(2^s)`
//! - `sin`/`cos`: halving, then the double-angle identities
//!   `cos 2x = 2cos²x - 1` and `sin 2x = 2 sin x cos x`
//! - `sinh`/`cosh`: the same with `cosh 2x = 2cosh²x - 1`
//! - `log`: the Mercator series for `log(I + X)`, which only converges for
//!   `‖X‖ < 1`
//!
//! The Frobenius norm bounds the spectral radius, so `‖A / 2^s‖ < 1/2`
//! guarantees fast convergence of every series used here.

use crate::error::Result;
use crate::ops::traits::{AdditiveGroup, Multiplication, Norm, Scaling};

// ============================================================================
// Convergence Constants
// ============================================================================

/// Terms of the Taylor series for exp once the argument is scaled
const EXP_TAYLOR_TERMS: usize = 20;

/// Terms of the sin/cos and sinh/cosh series once the argument is halved
const TRIG_TAYLOR_TERMS: usize = 20;

/// Terms of the Mercator series for log(I + X)
const LOG_TAYLOR_TERMS: usize = 40;

/// Arguments are halved until their norm drops below this
const EXP_SCALING_THRESHOLD: f64 = 0.5;

/// Upper bound on halvings; beyond this the result overflows anyway
const MAX_SQUARINGS: u32 = 64;

/// Ring operations every series below needs
pub trait SeriesRing: Multiplication + AdditiveGroup + Norm + Scaling {}

impl<K> SeriesRing for K where K: Multiplication + AdditiveGroup + Norm + Scaling {}

/// Number of halvings that bring `a` below the scaling threshold
fn squarings<K: SeriesRing>(k: &K, a: &K::Value) -> u32 {
    let norm = k.norm(a);
    if norm > EXP_SCALING_THRESHOLD {
        let s = (norm / EXP_SCALING_THRESHOLD).log2().ceil();
        (s as u32).min(MAX_SQUARINGS)
    } else {
        0
    }
}

/// Identity shaped like `a`
fn unity_like<K: SeriesRing>(k: &K, a: &K::Value) -> K::Value {
    let mut one = k.construct_copy(a);
    k.unity(&mut one);
    one
}

/// acc += term, in place
fn accumulate<K: SeriesRing>(k: &K, acc: &mut K::Value, term: &K::Value) -> Result<()> {
    let sum = acc.clone();
    k.add(&sum, term, acc)
}

/// term ← term · x · factor
fn advance<K: SeriesRing>(k: &K, term: &mut K::Value, x: &K::Value, factor: f64) -> Result<()> {
    let mut prod = k.construct_copy(term);
    k.multiply(term, x, &mut prod)?;
    k.scale_by_double(factor, &prod, term)
}

/// out = exp(a) by scaling and squaring
pub fn exp<K: SeriesRing>(k: &K, a: &K::Value, out: &mut K::Value) -> Result<()> {
    let s = squarings(k, a);
    let mut x = k.construct_copy(a);
    k.scale_by_one_half(s, a, &mut x)?;
    tracing::trace!(s, kind = k.kind_name(), "exp scaling");

    let mut sum = unity_like(k, a);
    let mut term = sum.clone();
    for n in 1..=EXP_TAYLOR_TERMS {
        advance(k, &mut term, &x, 1.0 / n as f64)?;
        accumulate(k, &mut sum, &term)?;
    }

    let mut tmp = sum.clone();
    for _ in 0..s {
        k.multiply(&sum, &sum, &mut tmp)?;
        std::mem::swap(&mut sum, &mut tmp);
    }
    *out = sum;
    Ok(())
}

/// Taylor series of the odd and even parts at a scaled argument `x`
///
/// `sign` is -1 for sin/cos, +1 for sinh/cosh.
fn odd_even_series<K: SeriesRing>(
    k: &K,
    x: &K::Value,
    sign: f64,
) -> Result<(K::Value, K::Value)> {
    let mut x2 = k.construct_copy(x);
    k.multiply(x, x, &mut x2)?;

    let mut odd = x.clone();
    let mut odd_term = x.clone();
    let mut even = unity_like(k, x);
    let mut even_term = even.clone();
    for n in 1..=TRIG_TAYLOR_TERMS {
        let m = 2.0 * n as f64;
        advance(k, &mut even_term, &x2, sign / ((m - 1.0) * m))?;
        accumulate(k, &mut even, &even_term)?;
        advance(k, &mut odd_term, &x2, sign / (m * (m + 1.0)))?;
        accumulate(k, &mut odd, &odd_term)?;
    }
    Ok((odd, even))
}

/// Undo `s` halvings with the double-angle identities
fn double_angle<K: SeriesRing>(
    k: &K,
    s: u32,
    odd: &mut K::Value,
    even: &mut K::Value,
) -> Result<()> {
    let one = unity_like(k, odd);
    let mut sq = k.construct_copy(even);
    let mut prod = k.construct_copy(odd);
    for _ in 0..s {
        // odd' = 2 · odd · even
        k.multiply(odd, even, &mut prod)?;
        k.scale_by_two(1, &prod, odd)?;
        // even' = 2 · even² - 1, for both cos and cosh
        k.multiply(even, even, &mut sq)?;
        k.scale_by_two(1, &sq, &mut prod)?;
        k.subtract(&prod, &one, even)?;
    }
    Ok(())
}

fn odd_even<K: SeriesRing>(
    k: &K,
    a: &K::Value,
    sign: f64,
    odd: &mut K::Value,
    even: &mut K::Value,
) -> Result<()> {
    let s = squarings(k, a);
    let mut x = k.construct_copy(a);
    k.scale_by_one_half(s, a, &mut x)?;
    tracing::trace!(s, kind = k.kind_name(), "trig halving");

    let (mut o, mut e) = odd_even_series(k, &x, sign)?;
    double_angle(k, s, &mut o, &mut e)?;
    *odd = o;
    *even = e;
    Ok(())
}

/// s = sin(a), c = cos(a)
pub fn sin_cos<K: SeriesRing>(k: &K, a: &K::Value, s: &mut K::Value, c: &mut K::Value) -> Result<()> {
    odd_even(k, a, -1.0, s, c)
}

/// s = sinh(a), c = cosh(a)
pub fn sinh_cosh<K: SeriesRing>(
    k: &K,
    a: &K::Value,
    s: &mut K::Value,
    c: &mut K::Value,
) -> Result<()> {
    odd_even(k, a, 1.0, s, c)
}

/// out = log(a) through the series for log(I + X) with X = a - I
///
/// The series diverges once `‖X‖ ≥ 1`; the partial sum is returned anyway.
pub fn log<K: SeriesRing>(k: &K, a: &K::Value, out: &mut K::Value) -> Result<()> {
    let one = unity_like(k, a);
    let mut x = k.construct_copy(a);
    k.subtract(a, &one, &mut x)?;
    let norm = k.norm(&x);
    if norm >= 1.0 {
        tracing::debug!(norm, kind = k.kind_name(), "log series outside its radius of convergence");
    }

    let mut sum = x.clone();
    let mut power = x.clone();
    let mut tmp = k.construct_copy(&x);
    let mut term = k.construct_copy(&x);
    for n in 2..=LOG_TAYLOR_TERMS {
        k.multiply(&power, &x, &mut tmp)?;
        std::mem::swap(&mut power, &mut tmp);
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        k.scale_by_double(sign / n as f64, &power, &mut term)?;
        accumulate(k, &mut sum, &term)?;
    }
    *out = sum;
    Ok(())
}
