//! Octonion value type
//!
//! `OctonionFloat64` holds eight `f64` components
//! `(r, i, j, k, l, i0, j0, k0)`. Multiplication is neither commutative nor
//! associative; see [`OctonionAlgebra`](crate::ops::scalar::OctonionAlgebra)
//! for the basis multiplication table.

use super::value_macros::impl_scalar_value;
use super::{EULER_GAMMA, GOLDEN_RATIO};
use bytemuck::{Pod, Zeroable};

/// Octonion with f64 components
///
/// Memory layout: `f64 × 8` in the order r, i, j, k, l, i0, j0, k0.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct OctonionFloat64 {
    /// Real part
    pub r: f64,
    /// i component
    pub i: f64,
    /// j component
    pub j: f64,
    /// k component
    pub k: f64,
    /// l component
    pub l: f64,
    /// i0 component
    pub i0: f64,
    /// j0 component
    pub j0: f64,
    /// k0 component
    pub k0: f64,
}

impl_scalar_value!(OctonionFloat64, Octonion, 8, [r, i, j, k, l, i0, j0, k0]);

impl OctonionFloat64 {
    /// One (real unit)
    pub const ONE: Self = Self::from_real(1.0);

    /// Unit i
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// Unit j
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    /// Unit k
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
    /// Unit l
    pub const L: Self = Self::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0);
    /// Unit i0
    pub const I0: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    /// Unit j0
    pub const J0: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0);
    /// Unit k0
    pub const K0: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);

    /// π as an octonion
    pub const PI: Self = Self::from_real(std::f64::consts::PI);

    /// e as an octonion
    pub const E: Self = Self::from_real(std::f64::consts::E);

    /// Euler-Mascheroni γ as an octonion
    pub const GAMMA: Self = Self::from_real(EULER_GAMMA);

    /// Golden ratio φ as an octonion
    pub const PHI: Self = Self::from_real(GOLDEN_RATIO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Components, Element};

    #[test]
    fn test_layout() {
        let o = OctonionFloat64::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(
            o.components(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
        );
        assert_eq!(o.component(5), 6.0);
    }

    #[test]
    fn test_string_round_trip() {
        let o = OctonionFloat64::new(0.5, -1.0, 2.0, 0.0, 3.25, -7.0, 1e10, -1e-10);
        let back: OctonionFloat64 = o.to_string().parse().unwrap();
        assert_eq!(back, o);
    }

    #[test]
    fn test_nan_and_infinite_flags() {
        let mut o = OctonionFloat64::ZERO;
        assert!(o.is_zero());
        o.j0 = f64::INFINITY;
        assert!(o.any_infinite());
        assert!(!o.any_nan());
        o.l = f64::NAN;
        assert!(o.any_nan());
        assert!(!o.any_infinite());
    }
}
