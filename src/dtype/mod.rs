//! Scalar value types for numtower
//!
//! This module provides the packed-component scalar records (complex,
//! quaternion, octonion), the `ScalarKind` enum naming every scalar kind, and
//! the `Element` / `Components` traits that connect those records to the
//! aggregate storage layer.
//!
//! `f64` is the Real value type and `bool` the Boolean value type; both are
//! used directly rather than wrapped.

pub mod complex;
mod element;
pub mod octonion;
pub mod quaternion;
mod value_macros;

pub use complex::ComplexFloat64;
pub use element::{Components, Element, hash_components};
pub use octonion::OctonionFloat64;
pub use quaternion::QuaternionFloat64;

use std::fmt;

/// Euler-Mascheroni constant γ
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Golden ratio φ
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Kind of scalar value stored in a value record or aggregate
///
/// Mirrors the algebraic tower: each kind extends the previous one with more
/// imaginary components.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Boolean (degenerate case, no float components)
    Boolean,
    /// Real number, 1 component
    Real,
    /// Complex number, 2 components (r, i)
    Complex,
    /// Quaternion, 4 components (r, i, j, k)
    Quaternion,
    /// Octonion, 8 components (r, i, j, k, l, i0, j0, k0)
    Octonion,
}

impl ScalarKind {
    /// Number of float64 components in a value of this kind
    pub const fn component_count(self) -> usize {
        match self {
            ScalarKind::Boolean => 0,
            ScalarKind::Real => 1,
            ScalarKind::Complex => 2,
            ScalarKind::Quaternion => 4,
            ScalarKind::Octonion => 8,
        }
    }

    /// Short name of this kind
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean",
            ScalarKind::Real => "real",
            ScalarKind::Complex => "complex",
            ScalarKind::Quaternion => "quaternion",
            ScalarKind::Octonion => "octonion",
        }
    }

    /// Whether multiplication of this kind commutes
    pub const fn is_commutative(self) -> bool {
        matches!(
            self,
            ScalarKind::Boolean | ScalarKind::Real | ScalarKind::Complex
        )
    }

    /// Whether multiplication of this kind associates
    pub const fn is_associative(self) -> bool {
        !matches!(self, ScalarKind::Octonion)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
