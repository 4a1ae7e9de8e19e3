//! Aggregate algebra kernels
//!
//! Each kernel wraps a scalar kernel and lifts its operations to an
//! aggregate value, either element by element or through the index
//! arithmetic of products and contractions:
//!
//! | Kernel | Value | Shared instances |
//! |---|---|---|
//! | [`VectorAlgebra<A>`] | [`Vector`](crate::tensor::Vector) | `REAL_VECTOR`, `COMPLEX_VECTOR`, ... |
//! | [`MatrixAlgebra<A>`] | [`Matrix`](crate::tensor::Matrix) | `REAL_MATRIX`, `COMPLEX_MATRIX`, ... |
//! | [`TensorAlgebra<A>`] | [`CartesianTensor`](crate::tensor::CartesianTensor) | `REAL_TENSOR`, `COMPLEX_TENSOR`, ... |
//!
//! An aggregate kernel implements a capability trait exactly when its
//! scalar kernel implements the capabilities it needs, so
//! `MatrixAlgebra<ComplexAlgebra>` has a determinant while
//! `MatrixAlgebra<QuaternionAlgebra>` (non-commutative elements) does not.

pub(crate) mod elementwise;
mod matrix;
mod tensor;
mod vector;

pub use matrix::{
    BOOLEAN_MATRIX, COMPLEX_MATRIX, MatrixAlgebra, OCTONION_MATRIX, QUATERNION_MATRIX,
    REAL_MATRIX,
};
pub use tensor::{
    BOOLEAN_TENSOR, COMPLEX_TENSOR, OCTONION_TENSOR, QUATERNION_TENSOR, REAL_TENSOR,
    TensorAlgebra,
};
pub use vector::{
    BOOLEAN_VECTOR, COMPLEX_VECTOR, OCTONION_VECTOR, QUATERNION_VECTOR, REAL_VECTOR,
    VectorAlgebra,
};

use crate::error::Result;
use crate::ops::traits::{AdditiveGroup, Multiplication};

/// acc += x · y
#[inline]
pub(crate) fn mul_add<A>(alg: &A, acc: &mut A::Value, x: &A::Value, y: &A::Value) -> Result<()>
where
    A: Multiplication + AdditiveGroup,
    A::Value: Copy,
{
    let mut p = *acc;
    alg.multiply(x, y, &mut p)?;
    let sum = *acc;
    alg.add(&sum, &p, acc)
}
