//! Algebra kernels and the capability traits they implement
//!
//! # Design
//!
//! An operation is a method on a stateless kernel that reads its inputs by
//! reference and writes a caller-owned output:
//!
//! ```text
//! kernel (REAL, COMPLEX_MATRIX, QUATERNION_TENSOR, ...)
//!   └── implements the capability traits its value kind supports
//!         ├── AdditiveGroup, Multiplication, Division (ring structure)
//!         ├── Exponential, Trigonometric, ... (analytic functions)
//!         ├── VectorSpaceOps, MatrixRingOps, TensorProductOps
//!         └── Rounding, Scaling, NanOps, Tolerance (value handling)
//! ```
//!
//! Scalar kernels live in [`scalar`]. The generic aggregate kernels in
//! [`aggregate`] wrap a scalar kernel and pick up a capability exactly when
//! the scalar kernel provides what the lift needs. Shared numeric helpers are
//! in [`common`].
//!
//! # Example
//!
//! ```
//! use numtower::dtype::ComplexFloat64;
//! use numtower::ops::scalar::COMPLEX;
//! use numtower::ops::traits::{Multiplication, Norm};
//!
//! let a = ComplexFloat64::new(3.0, 4.0);
//! assert_eq!(COMPLEX.norm(&a), 5.0);
//!
//! let mut out = ComplexFloat64::ZERO;
//! COMPLEX.multiply(&a, &ComplexFloat64::I, &mut out).unwrap();
//! assert_eq!(out, ComplexFloat64::new(-4.0, 3.0));
//! ```

pub mod aggregate;
pub mod common;
pub mod scalar;
pub mod traits;
