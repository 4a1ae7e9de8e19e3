//! Max-normalized magnitude helpers
//!
//! Summing squares of components near `f64::MAX` overflows, and near
//! `f64::MIN_POSITIVE` underflows. Dividing every component by the largest
//! magnitude first keeps the squares in `[0, 1]`.

/// Largest absolute value in `values`, propagating NaN
///
/// `f64::max` discards NaN, which would let a NaN component go unnoticed.
pub fn max_abs<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut max = 0.0f64;
    for v in values {
        let a = v.abs();
        if a.is_nan() {
            return f64::NAN;
        }
        if a > max {
            max = a;
        }
    }
    max
}

/// Euclidean length of `values` using max-normalization
///
/// ```
/// use numtower::ops::common::scaled_norm;
/// assert_eq!(scaled_norm([3.0, 4.0]), 5.0);
/// assert!(scaled_norm([1e300, 1e300]).is_finite());
/// ```
pub fn scaled_norm<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let max = max_abs(iter.clone());
    if max == 0.0 || !max.is_finite() {
        // 0, NaN or +inf is already the answer
        return max;
    }
    let sum: f64 = iter
        .map(|v| {
            let s = v / max;
            s * s
        })
        .sum();
    max * sum.sqrt()
}
