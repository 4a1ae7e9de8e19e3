//! Scalar algebra kernels
//!
//! One zero-sized kernel per scalar kind, each with a process-wide shared
//! instance:
//!
//! | Kernel | Value | Instance |
//! |---|---|---|
//! | [`BooleanAlgebra`] | `bool` | [`BOOLEAN`] |
//! | [`RealAlgebra`] | `f64` | [`REAL`] |
//! | [`ComplexAlgebra`] | [`ComplexFloat64`](crate::dtype::ComplexFloat64) | [`COMPLEX`] |
//! | [`QuaternionAlgebra`] | [`QuaternionFloat64`](crate::dtype::QuaternionFloat64) | [`QUATERNION`] |
//! | [`OctonionAlgebra`] | [`OctonionFloat64`](crate::dtype::OctonionFloat64) | [`OCTONION`] |
//!
//! Kernels hold no state, so the shared instances are safe to use from any
//! number of threads as long as each thread brings its own values.

mod boolean;
pub(crate) mod complex;
mod componentwise;
mod hypercomplex;
mod octonion;
mod quaternion;
mod real;

pub use boolean::{BOOLEAN, BooleanAlgebra};
pub use complex::{COMPLEX, ComplexAlgebra};
pub use octonion::{OCTONION, OctonionAlgebra};
pub use quaternion::{QUATERNION, QuaternionAlgebra};
pub use real::{REAL, RealAlgebra};
