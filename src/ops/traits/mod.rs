//! Capability traits ("algebras").
//!
//! Each trait is one independently testable slice of the operation contract.
//! Kernels in [`crate::ops::scalar`] and [`crate::ops::aggregate`] implement
//! the subset that makes sense for their value kind.

mod algebra;
mod compare;
mod linalg;
mod logical;
mod random;
mod rounding;
mod scalar;
mod tensor_ops;
mod trig;
mod unary;

pub use algebra::{AdditiveGroup, Algebra, Commutative, Division, Multiplication};
pub use compare::{InfiniteOps, NanOps, Ordered, Tolerance};
pub use linalg::{Determinant, MatrixRingOps, VectorSpaceOps};
pub use logical::LogicalOps;
pub use random::Random;
pub use rounding::{Rounding, RoundingMode};
pub use scalar::{Constants, ImaginaryUnits, Scaling};
pub use tensor_ops::TensorProductOps;
pub use trig::{Hyperbolic, InverseHyperbolic, InverseTrigonometric, Trigonometric};
pub use unary::{Conjugate, Exponential, Norm, Pow, RealUnreal, Roots};
