//! Complex number value type
//!
//! `ComplexFloat64` is a pure data holder: two `f64` components stored
//! interleaved as `(r, i)`. Arithmetic lives in
//! [`ComplexAlgebra`](crate::ops::scalar::ComplexAlgebra).
//!
//! # String form
//!
//! Values print and parse as `(r,i)`, e.g. `(3,-4)`. A bare number parses as
//! a purely real value.
//!
//! # Examples
//!
//! ```
//! use numtower::dtype::ComplexFloat64;
//!
//! let z: ComplexFloat64 = "(3,4)".parse().unwrap();
//! assert_eq!(z, ComplexFloat64::new(3.0, 4.0));
//! assert_eq!(z.to_string(), "(3,4)");
//! ```

use super::value_macros::impl_scalar_value;
use super::{EULER_GAMMA, GOLDEN_RATIO};
use bytemuck::{Pod, Zeroable};

/// 128-bit complex number with f64 real and imaginary parts
///
/// Memory layout: `f64 × 2`, interleaved format.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ComplexFloat64 {
    /// Real part
    pub r: f64,
    /// Imaginary part
    pub i: f64,
}

impl_scalar_value!(ComplexFloat64, Complex, 2, [r, i]);

impl ComplexFloat64 {
    /// One (real unit)
    pub const ONE: Self = Self { r: 1.0, i: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { r: 0.0, i: 1.0 };

    /// π as a complex value
    pub const PI: Self = Self::from_real(std::f64::consts::PI);

    /// e as a complex value
    pub const E: Self = Self::from_real(std::f64::consts::E);

    /// Euler-Mascheroni γ as a complex value
    pub const GAMMA: Self = Self::from_real(EULER_GAMMA);

    /// Golden ratio φ as a complex value
    pub const PHI: Self = Self::from_real(GOLDEN_RATIO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Components, Element};

    #[test]
    fn test_accessors() {
        let mut z = ComplexFloat64::new(3.0, 4.0);
        assert_eq!(z.components(), &[3.0, 4.0]);
        z.set_component(1, -2.0).unwrap();
        assert_eq!(z.i, -2.0);
        assert!(z.set_component(2, 1.0).is_err());
        assert!(z.set_component_safe(2, 0.0).is_ok());
    }

    #[test]
    fn test_constants() {
        assert_eq!(ComplexFloat64::ZERO, ComplexFloat64::new(0.0, 0.0));
        assert_eq!(ComplexFloat64::ONE.r, 1.0);
        assert_eq!(ComplexFloat64::I.i, 1.0);
        assert_eq!(ComplexFloat64::PI.r, std::f64::consts::PI);
        assert!(ComplexFloat64::ZERO.is_zero());
    }

    #[test]
    fn test_string_round_trip() {
        let z = ComplexFloat64::new(-1.5, 0.25);
        let s = z.to_string();
        assert_eq!(s, "(-1.5,0.25)");
        let back: ComplexFloat64 = s.parse().unwrap();
        assert_eq!(back, z);
    }

    #[test]
    fn test_parse_real_and_padding() {
        let z: ComplexFloat64 = "7".parse().unwrap();
        assert_eq!(z, ComplexFloat64::new(7.0, 0.0));
        let z: ComplexFloat64 = "(1,2,0,0)".parse().unwrap();
        assert_eq!(z, ComplexFloat64::new(1.0, 2.0));
        assert!("(1,2,3)".parse::<ComplexFloat64>().is_err());
        assert!("(1,".parse::<ComplexFloat64>().is_err());
    }

    #[test]
    fn test_get_set() {
        let a = ComplexFloat64::new(1.0, 2.0);
        let mut b = ComplexFloat64::ZERO;
        a.get(&mut b);
        assert_eq!(a, b);
        let mut c = ComplexFloat64::ZERO;
        c.set(&a);
        assert_eq!(c, a);
    }

    #[test]
    fn test_complex_pod() {
        let z = ComplexFloat64::new(1.0, 2.0);
        let bytes = bytemuck::bytes_of(&z);
        assert_eq!(bytes.len(), 16);
        assert_eq!(std::mem::align_of::<ComplexFloat64>(), 8);
    }
}
