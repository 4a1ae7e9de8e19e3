//! Tensor powers by repeated outer product
//!
//! `a^n = a ⊗ a ⊗ ... ⊗ a` has rank `n · rank(a)` and `dim_count^(n·rank)`
//! elements, so the size is checked before anything is allocated.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::traits::Multiplication;
use crate::tensor::CartesianTensor;

/// Element count of the `n`-fold power of `a`, if it fits in `usize`
pub fn power_elem_count<T: Element>(n: u32, a: &CartesianTensor<T>) -> Option<usize> {
    let rank = a.rank().checked_mul(n as usize)?;
    a.dim_count().checked_pow(u32::try_from(rank).ok()?)
}

/// out = a ⊗ ... ⊗ a (`n ≥ 1` factors), where the kernel's multiplication
/// is the outer product
///
/// # Errors
///
/// Returns `InvalidArgument` if the result would not be addressable.
pub fn tensor_power<K, T>(
    k: &K,
    n: u32,
    a: &CartesianTensor<T>,
    out: &mut CartesianTensor<T>,
) -> Result<()>
where
    K: Multiplication<Value = CartesianTensor<T>>,
    T: Element,
{
    debug_assert!(n >= 1);
    if power_elem_count(n, a).is_none() {
        return Err(Error::invalid_argument(
            "n",
            format!(
                "{}-fold power of a rank-{} tensor over {} dimensions is too large",
                n,
                a.rank(),
                a.dim_count()
            ),
        ));
    }
    tracing::trace!(n, rank = a.rank(), dim_count = a.dim_count(), "tensor power");

    let mut acc = a.clone();
    let mut tmp = CartesianTensor::new();
    for _ in 1..n {
        k.multiply(&acc, a, &mut tmp)?;
        std::mem::swap(&mut acc, &mut tmp);
    }
    *out = acc;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_elem_count() {
        let v = CartesianTensor::<f64>::with_shape(1, 3).unwrap();
        assert_eq!(power_elem_count(2, &v), Some(9));
        let m = CartesianTensor::<f64>::with_shape(2, 2).unwrap();
        assert_eq!(power_elem_count(3, &m), Some(64));
        assert_eq!(power_elem_count(70, &CartesianTensor::<f64>::with_shape(1, 2).unwrap()), None);
        assert_eq!(power_elem_count(5, &CartesianTensor::<f64>::new()), Some(1));
    }
}
