//! Cartesian tensor kernel
//!
//! Tensor "multiplication" is the tensor (outer) product, so `multiply`
//! raises the rank and `unity` is the rank-0 one. Element-wise products go
//! through [`TensorProductOps::multiply_elements`]. Every scalar function
//! (`exp`, `sin`, ...) is lifted element by element.

use super::elementwise::impl_elementwise_ops;
use crate::algorithm::tensor_power::tensor_power;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::common::{map, zip_map};
use crate::ops::scalar::{
    BOOLEAN, BooleanAlgebra, COMPLEX, ComplexAlgebra, OCTONION, OctonionAlgebra, QUATERNION,
    QuaternionAlgebra, REAL, RealAlgebra,
};
use crate::ops::traits::{
    AdditiveGroup, Algebra, Division, Exponential, Hyperbolic, InverseHyperbolic,
    InverseTrigonometric, Multiplication, Pow, Roots, TensorProductOps, Trigonometric,
};
use crate::tensor::{CartesianTensor, IntegerIndex};

/// Cartesian tensors over the scalar kernel `A`
#[derive(Copy, Clone, Debug, Default)]
pub struct TensorAlgebra<A> {
    scalar: A,
}

impl<A> TensorAlgebra<A> {
    /// Kernel lifting `scalar` to Cartesian tensors
    pub const fn new(scalar: A) -> Self {
        Self { scalar }
    }

    /// Element kernel
    pub fn scalar(&self) -> &A {
        &self.scalar
    }
}

/// Shared boolean tensor kernel
pub static BOOLEAN_TENSOR: TensorAlgebra<BooleanAlgebra> = TensorAlgebra::new(BOOLEAN);
/// Shared real tensor kernel
pub static REAL_TENSOR: TensorAlgebra<RealAlgebra> = TensorAlgebra::new(REAL);
/// Shared complex tensor kernel
pub static COMPLEX_TENSOR: TensorAlgebra<ComplexAlgebra> = TensorAlgebra::new(COMPLEX);
/// Shared quaternion tensor kernel
pub static QUATERNION_TENSOR: TensorAlgebra<QuaternionAlgebra> = TensorAlgebra::new(QUATERNION);
/// Shared octonion tensor kernel
pub static OCTONION_TENSOR: TensorAlgebra<OctonionAlgebra> = TensorAlgebra::new(OCTONION);

impl_elementwise_ops!(TensorAlgebra, CartesianTensor, Tensor);

fn check_same_shape<T: Element>(a: &CartesianTensor<T>, b: &CartesianTensor<T>) -> Result<()> {
    if !a.conforms(b) {
        return Err(Error::shape_mismatch(a.dims(), b.dims()));
    }
    Ok(())
}

fn check_axis(axis: usize, ndim: usize) -> Result<()> {
    if axis >= ndim {
        return Err(Error::InvalidDimension { dim: axis, ndim });
    }
    Ok(())
}

impl<A> TensorAlgebra<A>
where
    A: Algebra,
    A::Value: Element,
{
    /// out[k] = f(a[k], b[k]) for operands of one shape
    fn zip_same<F>(
        &self,
        a: &CartesianTensor<A::Value>,
        b: &CartesianTensor<A::Value>,
        out: &mut CartesianTensor<A::Value>,
        f: F,
    ) -> Result<()>
    where
        F: Fn(&A::Value, &A::Value, &mut A::Value) -> Result<()> + Send + Sync,
    {
        check_same_shape(a, b)?;
        out.conform(a);
        zip_map(a.as_slice(), b.as_slice(), out.as_mut_slice(), f)
    }

    /// Zero tensor shaped like `a` after validating a coordinate index
    fn vanishing_derivative(
        &self,
        index: usize,
        a: &CartesianTensor<A::Value>,
        out: &mut CartesianTensor<A::Value>,
    ) -> Result<()> {
        check_axis(index, a.dim_count())?;
        out.init_cartesian(a.rank(), a.dim_count())
    }
}

impl<A> TensorAlgebra<A>
where
    A: Multiplication,
    A::Value: Element,
{
    /// out = a ⊗ b, storage offset `ia + ib · len(a)`
    fn outer(
        &self,
        a: &CartesianTensor<A::Value>,
        b: &CartesianTensor<A::Value>,
        out: &mut CartesianTensor<A::Value>,
    ) -> Result<()> {
        if a.rank() > 0 && b.rank() > 0 && a.dim_count() != b.dim_count() {
            return Err(Error::shape_mismatch(a.dims(), b.dims()));
        }
        let dim_count = a.dim_count().max(b.dim_count());
        out.alloc_cartesian(a.rank() + b.rank(), dim_count)?;

        let na = a.elem_count();
        if na == 0 {
            return Ok(());
        }
        let dst = out.as_mut_slice();
        for (ib, y) in b.as_slice().iter().enumerate() {
            for (ia, x) in a.as_slice().iter().enumerate() {
                self.scalar.multiply(x, y, &mut dst[ia + ib * na])?;
            }
        }
        Ok(())
    }
}

impl<A> TensorAlgebra<A>
where
    A: Division,
    A::Value: Element,
{
    /// Element-wise quotient `a[k] · b[k]⁻¹`
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn divide_elements(
        &self,
        a: &CartesianTensor<A::Value>,
        b: &CartesianTensor<A::Value>,
        out: &mut CartesianTensor<A::Value>,
    ) -> Result<()> {
        self.zip_same(a, b, out, |x, y, o| self.scalar.divide(x, y, o))
    }
}

impl<A> AdditiveGroup for TensorAlgebra<A>
where
    A: AdditiveGroup,
    A::Value: Element,
{
    fn add(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.zip_same(a, b, out, |x, y, o| self.scalar.add(x, y, o))
    }

    fn subtract(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.zip_same(a, b, out, |x, y, o| self.scalar.subtract(x, y, o))
    }

    fn negate(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.conform(a);
        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.negate(x, o))
    }
}

impl<A> Multiplication for TensorAlgebra<A>
where
    A: Multiplication,
    A::Value: Element,
{
    /// Tensor product; see [`TensorProductOps::outer_product`]
    fn multiply(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.outer(a, b, out)
    }

    /// `a^0` is the rank-0 one, `a^n` the `n`-fold tensor product
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative exponent or a result too
    /// large to address.
    fn power(&self, n: i32, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        match n {
            0 => {
                self.unity(out);
                Ok(())
            }
            n if n < 0 => Err(Error::invalid_argument(
                "n",
                format!("tensor products have no inverse, cannot raise to {}", n),
            )),
            n => tensor_power(self, n.unsigned_abs(), a, out),
        }
    }

    fn unity(&self, out: &mut Self::Value) {
        if out.rank() != 0 {
            *out = CartesianTensor::new();
        }
        self.scalar.unity(&mut out.as_mut_slice()[0]);
    }

    fn is_unity(&self, a: &Self::Value) -> bool {
        a.rank() == 0 && self.scalar.is_unity(&a.as_slice()[0])
    }
}

impl<A> TensorProductOps for TensorAlgebra<A>
where
    A: Multiplication + AdditiveGroup,
    A::Value: Element,
{
    type Scalar = A::Value;

    fn construct_shape(&self, rank: usize, dim_count: usize) -> Result<Self::Value> {
        CartesianTensor::with_shape(rank, dim_count)
    }

    fn scale(&self, s: &A::Value, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.conform(a);
        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.multiply(s, x, o))
    }

    fn outer_product(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.outer(a, b, out)
    }

    fn contract(&self, i: usize, j: usize, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        if i == j {
            return Err(Error::invalid_argument(
                "j",
                format!("cannot contract axis {} with itself", i),
            ));
        }
        check_axis(i.max(j), a.rank())?;
        tracing::trace!(i, j, rank = a.rank(), dim_count = a.dim_count(), "contracting");

        let d = a.dim_count();
        out.init_cartesian(a.rank() - 2, d)?;
        if out.elem_count() == 0 {
            return Ok(());
        }

        let out_dims: Vec<usize> = out.dims().to_vec();
        let mut index = IntegerIndex::zeros(out_dims.len());
        let dst = out.as_mut_slice();
        let mut offset = 0;
        loop {
            let mut acc = A::Value::default();
            for v in 0..d {
                let src = a.layout().index_to_offset(&index.with_pair(i, j, v))?;
                let prev = acc;
                self.scalar.add(&prev, &a.as_slice()[src], &mut acc)?;
            }
            dst[offset] = acc;
            offset += 1;
            if !index.increment(&out_dims) {
                break;
            }
        }
        Ok(())
    }

    fn inner_product(
        &self,
        i: usize,
        j: usize,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()> {
        let mut product = CartesianTensor::new();
        self.outer(a, b, &mut product)?;
        self.contract(i, j, &product, out)
    }

    fn raise_index(&self, _index: usize, _a: &Self::Value, _out: &mut Self::Value) -> Result<()> {
        Err(Error::unsupported(
            "raise_index",
            "a Cartesian tensor has no metric to raise an index with",
        ))
    }

    fn lower_index(&self, index: usize, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        check_axis(index, a.rank())?;
        out.set(a);
        Ok(())
    }

    fn multiply_elements(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()> {
        self.zip_same(a, b, out, |x, y, o| self.scalar.multiply(x, y, o))
    }

    /// Cartesian coordinates have vanishing Christoffel symbols, so this is
    /// the comma derivative
    fn semicolon_derivative(
        &self,
        index: usize,
        a: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()> {
        self.vanishing_derivative(index, a, out)
    }

    /// A tensor value is constant over space, so every partial derivative is
    /// the zero tensor of the same shape
    fn comma_derivative(&self, index: usize, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.vanishing_derivative(index, a, out)
    }
}

// ============================================================================
// Element-wise functions
// ============================================================================

impl<A> Pow for TensorAlgebra<A>
where
    A: Pow,
    A::Value: Element,
{
    fn pow(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.zip_same(a, b, out, |x, y, o| self.scalar.pow(x, y, o))
    }
}

macro_rules! lift_elementwise {
    ($($trait:ident { $($method:ident),+ $(,)? })+) => {
        $(
            impl<A> $trait for TensorAlgebra<A>
            where
                A: $trait,
                A::Value: Element,
            {
                $(
                    fn $method(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
                        out.conform(a);
                        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.$method(x, o))
                    }
                )+
            }
        )+
    };
}

lift_elementwise! {
    Exponential { exp, log }
    Roots { sqrt, cbrt }
    Trigonometric { sin, cos, tan, csc, sec, cot }
    InverseTrigonometric { asin, acos, atan, acsc, asec, acot }
    Hyperbolic { sinh, cosh, tanh, csch, sech, coth }
    InverseHyperbolic { asinh, acosh, atanh, acsch, asech, acoth }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::QuaternionFloat64;
    use crate::ops::traits::*;
    use crate::tensor::{Matrix, Vector};

    fn vector(v: &[f64]) -> CartesianTensor<f64> {
        CartesianTensor::from_vector(&Vector::from_slice(v))
    }

    #[test]
    fn test_outer_product_layout() {
        let a = vector(&[1.0, 2.0]);
        let b = vector(&[10.0, 20.0]);
        let mut out = CartesianTensor::new();
        REAL_TENSOR.outer_product(&a, &b, &mut out).unwrap();
        assert_eq!(out.dims(), &[2, 2]);
        // t[x, y] = a[x] · b[y]
        assert_eq!(out.element(&[1, 0]).unwrap(), 20.0);
        assert_eq!(out.element(&[0, 1]).unwrap(), 20.0);
        assert_eq!(out.element(&[1, 1]).unwrap(), 40.0);

        let err = REAL_TENSOR.outer_product(&a, &vector(&[1.0, 2.0, 3.0]), &mut out);
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_rank_zero_scales() {
        let s = CartesianTensor::from_scalar(3.0);
        let mut out = CartesianTensor::new();
        REAL_TENSOR.multiply(&s, &vector(&[1.0, 2.0, 3.0]), &mut out).unwrap();
        assert_eq!(out.rank(), 1);
        assert_eq!(out.as_slice(), &[3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_contract_is_trace() {
        let m = Matrix::from_vec(3, 3, (1..=9).map(f64::from).collect()).unwrap();
        let t = CartesianTensor::from_matrix(&m).unwrap();
        let mut out = CartesianTensor::new();
        REAL_TENSOR.contract(0, 1, &t, &mut out).unwrap();
        assert_eq!(out.rank(), 0);
        assert_eq!(out.as_slice(), &[15.0]);

        assert!(matches!(
            REAL_TENSOR.contract(1, 1, &t, &mut out),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            REAL_TENSOR.contract(0, 2, &t, &mut out),
            Err(Error::InvalidDimension { dim: 2, ndim: 2 })
        ));
    }

    #[test]
    fn test_inner_product_is_matrix_vector_product() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let t = CartesianTensor::from_matrix(&m).unwrap();
        let v = vector(&[5.0, 6.0]);
        let mut out = CartesianTensor::new();
        // Σ_c m[r, c] · v[c]
        REAL_TENSOR.inner_product(1, 2, &t, &v, &mut out).unwrap();
        assert_eq!(out.to_vector().unwrap().as_slice(), &[17.0, 39.0]);
    }

    #[test]
    fn test_contract_rank_three() {
        // t[x, y, z] = x + 10y + 100z over 2 dims
        let mut t = CartesianTensor::with_shape(3, 2).unwrap();
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    t.set_element(&[x, y, z], (x + 10 * y + 100 * z) as f64).unwrap();
                }
            }
        }
        let mut out = CartesianTensor::new();
        REAL_TENSOR.contract(0, 2, &t, &mut out).unwrap();
        // out[y] = Σ_v t[v, y, v] = (0 + 10y) + (101 + 10y)
        assert_eq!(out.as_slice(), &[101.0, 121.0]);
    }

    #[test]
    fn test_power() {
        let v = vector(&[1.0, 2.0]);
        let mut out = CartesianTensor::new();
        REAL_TENSOR.power(0, &v, &mut out).unwrap();
        assert!(REAL_TENSOR.is_unity(&out));

        REAL_TENSOR.power(3, &v, &mut out).unwrap();
        assert_eq!(out.rank(), 3);
        assert_eq!(out.element(&[1, 1, 1]).unwrap(), 8.0);
        assert_eq!(out.element(&[1, 0, 1]).unwrap(), 4.0);

        assert!(REAL_TENSOR.power(-1, &v, &mut out).is_err());
        assert!(REAL_TENSOR.power(70, &v, &mut out).is_err());
    }

    #[test]
    fn test_raise_and_lower_index() {
        let t = CartesianTensor::from_matrix(&Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap())
            .unwrap();
        let mut out = CartesianTensor::new();
        REAL_TENSOR.lower_index(1, &t, &mut out).unwrap();
        assert_eq!(out, t);
        assert!(matches!(
            REAL_TENSOR.lower_index(2, &t, &mut out),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            REAL_TENSOR.raise_index(0, &t, &mut out),
            Err(Error::Unsupported { .. })
        ));
    }

    #[test]
    fn test_derivatives_vanish() {
        let t = vector(&[1.0, 2.0, 3.0]);
        let mut out = CartesianTensor::new();
        REAL_TENSOR.comma_derivative(2, &t, &mut out).unwrap();
        assert_eq!(out.dims(), t.dims());
        assert!(REAL_TENSOR.is_zero(&out));
        REAL_TENSOR.semicolon_derivative(0, &t, &mut out).unwrap();
        assert!(REAL_TENSOR.is_zero(&out));
        assert!(REAL_TENSOR.comma_derivative(3, &t, &mut out).is_err());
    }

    #[test]
    fn test_elementwise_ops() {
        let a = vector(&[1.0, 4.0]);
        let b = vector(&[2.0, 8.0]);
        let mut out = CartesianTensor::new();
        REAL_TENSOR.multiply_elements(&a, &b, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[2.0, 32.0]);
        REAL_TENSOR.divide_elements(&a, &b, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[0.5, 0.5]);
        REAL_TENSOR.sqrt(&a, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[1.0, 2.0]);
        REAL_TENSOR.add(&a, &b, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[3.0, 12.0]);
        assert!(REAL_TENSOR.add(&a, &vector(&[1.0]), &mut out).is_err());
    }

    #[test]
    fn test_quaternion_outer_keeps_order() {
        type Q = QuaternionFloat64;
        let a = CartesianTensor::from_scalar(Q::I);
        let b = CartesianTensor::from_scalar(Q::J);
        let mut out = CartesianTensor::new();
        QUATERNION_TENSOR.multiply(&a, &b, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[Q::K]);
    }

    #[test]
    fn test_display_round_trip() {
        let t = CartesianTensor::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let back = REAL_TENSOR.construct_from_str(&t.to_string()).unwrap();
        assert_eq!(back, t);
        assert_eq!(REAL_TENSOR.kind_name(), "real tensor");
    }

    #[test]
    fn test_construct_shape() {
        let t = REAL_TENSOR.construct_shape(3, 2).unwrap();
        assert_eq!(t.dims(), &[2, 2, 2]);
        assert!(matches!(
            REAL_TENSOR.construct_shape(200, 2),
            Err(Error::InvalidArgument { .. })
        ));

        let mut one = REAL_TENSOR.construct_shape(2, 3).unwrap();
        REAL_TENSOR.unity(&mut one);
        assert_eq!(one.rank(), 0);
        assert_eq!(one.as_slice(), &[1.0]);
    }
}
