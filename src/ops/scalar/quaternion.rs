//! Quaternion kernel
//!
//! Hamilton's basis: `i² = j² = k² = ijk = -1`, so `ij = k` but `ji = -k`.
//! Multiplication associates but does not commute.

use super::componentwise::impl_componentwise_kernel;
use super::hypercomplex::{Hypercomplex, impl_hypercomplex_kernel};
use crate::dtype::QuaternionFloat64;
use crate::error::{Error, Result};
use crate::ops::traits::ImaginaryUnits;

type Q = QuaternionFloat64;

/// Kernel for [`QuaternionFloat64`]
#[derive(Copy, Clone, Debug, Default)]
pub struct QuaternionAlgebra;

/// Shared quaternion kernel
pub static QUATERNION: QuaternionAlgebra = QuaternionAlgebra;

impl Hypercomplex for QuaternionFloat64 {
    #[inline]
    fn mul(a: &Q, b: &Q) -> Q {
        Q::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
            a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
            a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
        )
    }
}

impl_componentwise_kernel!(QuaternionAlgebra, QuaternionFloat64, "quaternion");
impl_hypercomplex_kernel!(QuaternionAlgebra, QuaternionFloat64);

const UNITS: [Q; 3] = [Q::I, Q::J, Q::K];

impl QuaternionAlgebra {
    /// out = i
    pub fn i(&self, out: &mut Q) {
        *out = Q::I;
    }

    /// out = j
    pub fn j(&self, out: &mut Q) {
        *out = Q::J;
    }

    /// out = k
    pub fn k(&self, out: &mut Q) {
        *out = Q::K;
    }
}

impl ImaginaryUnits for QuaternionAlgebra {
    const UNIT_COUNT: usize = 3;

    fn imaginary_unit(&self, index: usize, out: &mut Q) -> Result<()> {
        *out = *UNITS.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: Self::UNIT_COUNT,
        })?;
        Ok(())
    }
}
