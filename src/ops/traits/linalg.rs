//! Vector-space and matrix-ring operation traits.

use super::Algebra;
use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Matrix;

/// Operations of an R-module of vectors over a scalar kind
///
/// Operands of different lengths are zero-extended to the longer length,
/// except for the cross and perp-dot products which are only defined in
/// three and two dimensions.
pub trait VectorSpaceOps: Algebra {
    /// Element kind
    type Scalar: Element;

    /// out = s · a
    fn scale(&self, s: &Self::Scalar, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = Σ aᵢ·bᵢ (no conjugation)
    fn dot_product(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Scalar)
    -> Result<()>;

    /// out = a × b
    ///
    /// # Errors
    ///
    /// Returns `Unsupported` if either operand has a non-zero component past
    /// index 2.
    fn cross_product(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value)
    -> Result<()>;

    /// out = a₀b₁ - a₁b₀
    ///
    /// # Errors
    ///
    /// Returns `Unsupported` if either operand has a non-zero component past
    /// index 1.
    fn perp_dot_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Self::Scalar,
    ) -> Result<()>;

    /// out = a × (b × c)
    fn vector_triple_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        c: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;

    /// out = a · (b × c)
    fn scalar_triple_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        c: &Self::Value,
        out: &mut Self::Scalar,
    ) -> Result<()>;

    /// out(r, c) = a_r · b_c
    fn direct_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Matrix<Self::Scalar>,
    ) -> Result<()>;
}

/// Operations of the ring of matrices over a scalar kind
pub trait MatrixRingOps: Algebra {
    /// Element kind
    type Scalar: Element;

    /// New `rows × cols` zero matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `rows * cols` overflows `usize`.
    fn construct_dims(&self, rows: usize, cols: usize) -> Result<Self::Value>;

    /// out = s · a
    fn scale(&self, s: &Self::Scalar, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = aᵀ
    fn transpose(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = aᴴ (transpose with every element conjugated)
    fn conjugate_transpose(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = Σ a(i, i)
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a non-square matrix.
    fn trace(&self, a: &Self::Value, out: &mut Self::Scalar) -> Result<()>;
}

/// Determinant (commutative element kinds only)
pub trait Determinant: MatrixRingOps {
    /// out = det(a)
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a non-square matrix.
    fn det(&self, a: &Self::Value, out: &mut Self::Scalar) -> Result<()>;
}
