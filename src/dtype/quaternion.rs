//! Quaternion value type
//!
//! `QuaternionFloat64` holds four `f64` components `(r, i, j, k)`.
//! Multiplication is non-commutative; see
//! [`QuaternionAlgebra`](crate::ops::scalar::QuaternionAlgebra).

use super::value_macros::impl_scalar_value;
use super::{EULER_GAMMA, GOLDEN_RATIO};
use bytemuck::{Pod, Zeroable};

/// Quaternion with f64 components
///
/// Memory layout: `f64 × 4` in the order r, i, j, k.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct QuaternionFloat64 {
    /// Real part
    pub r: f64,
    /// i component
    pub i: f64,
    /// j component
    pub j: f64,
    /// k component
    pub k: f64,
}

impl_scalar_value!(QuaternionFloat64, Quaternion, 4, [r, i, j, k]);

impl QuaternionFloat64 {
    /// One (real unit)
    pub const ONE: Self = Self::from_real(1.0);

    /// Unit i
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit j
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit k
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// π as a quaternion
    pub const PI: Self = Self::from_real(std::f64::consts::PI);

    /// e as a quaternion
    pub const E: Self = Self::from_real(std::f64::consts::E);

    /// Euler-Mascheroni γ as a quaternion
    pub const GAMMA: Self = Self::from_real(EULER_GAMMA);

    /// Golden ratio φ as a quaternion
    pub const PHI: Self = Self::from_real(GOLDEN_RATIO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Components;

    #[test]
    fn test_layout() {
        let q = QuaternionFloat64::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.components(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(std::mem::size_of::<QuaternionFloat64>(), 32);
    }

    #[test]
    fn test_string_round_trip() {
        let q = QuaternionFloat64::new(1.0, -2.0, 0.5, 1e-3);
        let back: QuaternionFloat64 = q.to_string().parse().unwrap();
        assert_eq!(back, q);
        assert_eq!(QuaternionFloat64::ONE.to_string(), "(1,0,0,0)");
    }

    #[test]
    fn test_from_components() {
        let q = QuaternionFloat64::from_component_slice(&[1.0, 2.0]).unwrap();
        assert_eq!(q, QuaternionFloat64::new(1.0, 2.0, 0.0, 0.0));
        assert!(QuaternionFloat64::from_component_slice(&[0.0, 0.0, 0.0, 0.0, 1.0]).is_err());
    }
}
