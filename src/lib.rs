//! # numtower
//!
//! **An algebraic numeric tower for Rust: real, complex, quaternion and
//! octonion scalars, lifted to vectors, matrices and Cartesian tensors.**
//!
//! Every value kind is served by a stateless kernel that implements the
//! capability traits making sense for it. The kernels form a tower: the
//! complex numbers are a commutative field, the quaternions a skew field and
//! the octonions a non-associative division algebra. Aggregate kernels wrap
//! a scalar kernel and lift its operations, either element by element or
//! through products and contractions.
//!
//! ## Features
//!
//! - **Scalars**: `bool` (as GF(2)), `f64`, [`ComplexFloat64`](dtype::ComplexFloat64),
//!   [`QuaternionFloat64`](dtype::QuaternionFloat64), [`OctonionFloat64`](dtype::OctonionFloat64)
//! - **Transcendental functions**: exp, log, roots, trig and hyperbolic
//!   families with their inverses, on every non-boolean scalar
//! - **Vectors**: dot, cross, perp-dot, triple and direct products
//! - **Matrices**: ring product, powers, determinant, inverse, and true
//!   matrix functions (`exp`, `log`, `sin`, `cosh`, ...)
//! - **Cartesian tensors**: outer product, contraction, inner product
//! - **Literals**: every value prints and parses as a bracketed literal
//!
//! ## Quick Start
//!
//! ```
//! use numtower::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0])?;
//! let mut inv = Matrix::new();
//! REAL_MATRIX.invert(&a, &mut inv)?;
//!
//! let mut d = 0.0;
//! REAL_MATRIX.det(&a, &mut d)?;
//! assert!((d - 10.0).abs() < 1e-12);
//! # Ok::<(), numtower::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel element-wise transforms and matrix products
//!   for large aggregates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod literal;
pub mod ops;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{ComplexFloat64, Element, OctonionFloat64, QuaternionFloat64, ScalarKind};
    pub use crate::error::{Error, Result};
    pub use crate::ops::aggregate::{
        BOOLEAN_MATRIX, BOOLEAN_TENSOR, BOOLEAN_VECTOR, COMPLEX_MATRIX, COMPLEX_TENSOR,
        COMPLEX_VECTOR, MatrixAlgebra, OCTONION_MATRIX, OCTONION_TENSOR, OCTONION_VECTOR,
        QUATERNION_MATRIX, QUATERNION_TENSOR, QUATERNION_VECTOR, REAL_MATRIX, REAL_TENSOR,
        REAL_VECTOR, TensorAlgebra, VectorAlgebra,
    };
    pub use crate::ops::scalar::{
        BOOLEAN, BooleanAlgebra, COMPLEX, ComplexAlgebra, OCTONION, OctonionAlgebra, QUATERNION,
        QuaternionAlgebra, REAL, RealAlgebra,
    };
    pub use crate::ops::traits::*;
    pub use crate::tensor::{CartesianTensor, IntegerIndex, Layout, Matrix, Vector};
}
