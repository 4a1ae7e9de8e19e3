//! Rounding a real component to a multiple of a grid spacing

use crate::error::{Error, Result};
use crate::ops::traits::RoundingMode;

/// Check that a rounding grid spacing is usable
///
/// # Errors
///
/// Returns `InvalidArgument` unless `delta` is finite and positive.
pub fn validate_delta(delta: f64) -> Result<()> {
    if delta.is_finite() && delta > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_argument(
            "delta",
            format!("rounding delta must be finite and positive, got {}", delta),
        ))
    }
}

/// Round `x` to a multiple of `delta`
///
/// NaN and infinite components pass through unchanged.
#[inline]
pub fn round_to(mode: RoundingMode, delta: f64, x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let q = x / delta;
    let n = match mode {
        RoundingMode::TowardsZero => q.trunc(),
        RoundingMode::AwayFromZero => {
            if q < 0.0 {
                q.floor()
            } else {
                q.ceil()
            }
        }
        RoundingMode::Positive => q.ceil(),
        RoundingMode::Negative => q.floor(),
        RoundingMode::Nearest => q.round(),
        RoundingMode::Even => q.round_ties_even(),
    };
    n * delta
}

/// Round every component of `src` into `dst`
pub fn round_components(mode: RoundingMode, delta: f64, src: &[f64], dst: &mut [f64]) -> Result<()> {
    validate_delta(delta)?;
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = round_to(mode, delta, s);
    }
    Ok(())
}
