//! Tensor-product operations on Cartesian tensors.

use super::Algebra;
use crate::dtype::Element;
use crate::error::Result;

/// Operations of the tensor algebra over a scalar kind
///
/// Tensor multiplication is the tensor (outer) product; the element-wise
/// product is [`multiply_elements`](Self::multiply_elements).
pub trait TensorProductOps: Algebra {
    /// Element kind
    type Scalar: Element;

    /// New zero tensor of `rank` axes each of size `dim_count`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `dim_count^rank` overflows `usize`.
    fn construct_shape(&self, rank: usize, dim_count: usize) -> Result<Self::Value>;

    /// out = s · a
    fn scale(&self, s: &Self::Scalar, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = a ⊗ b; rank(out) = rank(a) + rank(b)
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the operands live in spaces of different
    /// dimension (rank-0 operands fit any space).
    fn outer_product(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value)
    -> Result<()>;

    /// Sum `a` over the diagonal of axes `i` and `j`; rank(out) = rank(a) - 2
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `i == j` and `InvalidDimension` if either
    /// axis is out of range.
    fn contract(&self, i: usize, j: usize, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// out = contract(i, j, a ⊗ b)
    fn inner_product(
        &self,
        i: usize,
        j: usize,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;

    /// Always an error: a Cartesian tensor has no metric to raise with
    fn raise_index(&self, index: usize, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// Lowering an already covariant index copies `a` unchanged
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `index >= rank(a)`.
    fn lower_index(&self, index: usize, a: &Self::Value, out: &mut Self::Value) -> Result<()>;

    /// Hadamard product
    fn multiply_elements(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;

    /// Covariant derivative along coordinate `index`
    fn semicolon_derivative(
        &self,
        index: usize,
        a: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()>;

    /// Partial derivative along coordinate `index`
    fn comma_derivative(&self, index: usize, a: &Self::Value, out: &mut Self::Value)
    -> Result<()>;
}
