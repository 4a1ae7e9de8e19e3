//! Octonion kernel
//!
//! The basis multiplication table (row · column):
//!
//! ```text
//!  ·  |  i    j    k    l    i0   j0   k0
//! ----+-----------------------------------
//!  i  | -1    k   -j  -i0    l  -k0   j0
//!  j  | -k   -1    i  -j0   k0    l  -i0
//!  k  |  j   -i   -1  -k0  -j0   i0    l
//!  l  |  i0   j0   k0  -1   -i   -j   -k
//!  i0 | -l  -k0   j0    i   -1   -k    j
//!  j0 |  k0  -l  -i0    j    k   -1   -i
//!  k0 | -j0   i0  -l    k   -j    i   -1
//! ```
//!
//! Multiplication neither commutes nor associates (`(ij)l = -k0` but
//! `i(jl) = k0`). It is alternative, so powers of a single value are well
//! defined, and the norm is multiplicative.

use super::componentwise::impl_componentwise_kernel;
use super::hypercomplex::{Hypercomplex, impl_hypercomplex_kernel};
use crate::dtype::OctonionFloat64;
use crate::error::{Error, Result};
use crate::ops::traits::ImaginaryUnits;

type O = OctonionFloat64;

/// Kernel for [`OctonionFloat64`]
#[derive(Copy, Clone, Debug, Default)]
pub struct OctonionAlgebra;

/// Shared octonion kernel
pub static OCTONION: OctonionAlgebra = OctonionAlgebra;

impl Hypercomplex for OctonionFloat64 {
    #[rustfmt::skip]
    fn mul(a: &O, b: &O) -> O {
        O::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k - a.l * b.l - a.i0 * b.i0 - a.j0 * b.j0 - a.k0 * b.k0,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j - a.l * b.i0 + a.i0 * b.l - a.j0 * b.k0 + a.k0 * b.j0,
            a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i - a.l * b.j0 + a.i0 * b.k0 + a.j0 * b.l - a.k0 * b.i0,
            a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r - a.l * b.k0 - a.i0 * b.j0 + a.j0 * b.i0 + a.k0 * b.l,
            a.r * b.l + a.i * b.i0 + a.j * b.j0 + a.k * b.k0 + a.l * b.r - a.i0 * b.i - a.j0 * b.j - a.k0 * b.k,
            a.r * b.i0 - a.i * b.l - a.j * b.k0 + a.k * b.j0 + a.l * b.i + a.i0 * b.r - a.j0 * b.k + a.k0 * b.j,
            a.r * b.j0 + a.i * b.k0 - a.j * b.l - a.k * b.i0 + a.l * b.j + a.i0 * b.k + a.j0 * b.r - a.k0 * b.i,
            a.r * b.k0 - a.i * b.j0 + a.j * b.i0 - a.k * b.l + a.l * b.k - a.i0 * b.j + a.j0 * b.i + a.k0 * b.r,
        )
    }
}

impl_componentwise_kernel!(OctonionAlgebra, OctonionFloat64, "octonion");
impl_hypercomplex_kernel!(OctonionAlgebra, OctonionFloat64);

const UNITS: [O; 7] = [O::I, O::J, O::K, O::L, O::I0, O::J0, O::K0];

impl OctonionAlgebra {
    /// out = i
    pub fn i(&self, out: &mut O) {
        *out = O::I;
    }

    /// out = j
    pub fn j(&self, out: &mut O) {
        *out = O::J;
    }

    /// out = k
    pub fn k(&self, out: &mut O) {
        *out = O::K;
    }

    /// out = l
    pub fn l(&self, out: &mut O) {
        *out = O::L;
    }

    /// out = i0
    pub fn i0(&self, out: &mut O) {
        *out = O::I0;
    }

    /// out = j0
    pub fn j0(&self, out: &mut O) {
        *out = O::J0;
    }

    /// out = k0
    pub fn k0(&self, out: &mut O) {
        *out = O::K0;
    }
}

impl ImaginaryUnits for OctonionAlgebra {
    const UNIT_COUNT: usize = 7;

    fn imaginary_unit(&self, index: usize, out: &mut O) -> Result<()> {
        *out = *UNITS.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: Self::UNIT_COUNT,
        })?;
        Ok(())
    }
}
