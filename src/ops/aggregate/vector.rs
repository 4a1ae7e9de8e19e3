//! Vector (R-module) kernel

use super::elementwise::impl_elementwise_ops;
use super::mul_add;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::common::{map, zip_map};
use crate::ops::scalar::{
    BOOLEAN, BooleanAlgebra, COMPLEX, ComplexAlgebra, OCTONION, OctonionAlgebra, QUATERNION,
    QuaternionAlgebra, REAL, RealAlgebra,
};
use crate::ops::traits::{AdditiveGroup, Algebra, Multiplication, VectorSpaceOps};
use crate::tensor::{Matrix, Vector};

/// Vectors over the scalar kernel `A`
///
/// Operands of different lengths are zero-extended to the longer length.
#[derive(Copy, Clone, Debug, Default)]
pub struct VectorAlgebra<A> {
    scalar: A,
}

impl<A> VectorAlgebra<A> {
    /// Kernel lifting `scalar` to vectors
    pub const fn new(scalar: A) -> Self {
        Self { scalar }
    }

    /// Element kernel
    pub fn scalar(&self) -> &A {
        &self.scalar
    }
}

/// Shared boolean vector kernel
pub static BOOLEAN_VECTOR: VectorAlgebra<BooleanAlgebra> = VectorAlgebra::new(BOOLEAN);
/// Shared real vector kernel
pub static REAL_VECTOR: VectorAlgebra<RealAlgebra> = VectorAlgebra::new(REAL);
/// Shared complex vector kernel
pub static COMPLEX_VECTOR: VectorAlgebra<ComplexAlgebra> = VectorAlgebra::new(COMPLEX);
/// Shared quaternion vector kernel
pub static QUATERNION_VECTOR: VectorAlgebra<QuaternionAlgebra> = VectorAlgebra::new(QUATERNION);
/// Shared octonion vector kernel
pub static OCTONION_VECTOR: VectorAlgebra<OctonionAlgebra> = VectorAlgebra::new(OCTONION);

impl_elementwise_ops!(VectorAlgebra, Vector, Vector);

impl<A> VectorAlgebra<A>
where
    A: Algebra,
    A::Value: Element,
{
    /// out[k] = f(a[k], b[k]) over the longer length, missing elements read
    /// as zero
    fn zip_extended<F>(
        &self,
        a: &Vector<A::Value>,
        b: &Vector<A::Value>,
        out: &mut Vector<A::Value>,
        f: F,
    ) -> Result<()>
    where
        F: Fn(&A::Value, &A::Value, &mut A::Value) -> Result<()> + Send + Sync,
    {
        let len = a.len().max(b.len());
        out.alloc(len);
        if a.len() == len && b.len() == len {
            return zip_map(a.as_slice(), b.as_slice(), out.as_mut_slice(), f);
        }
        for (k, o) in out.as_mut_slice().iter_mut().enumerate() {
            f(&a.element_or_zero(k), &b.element_or_zero(k), o)?;
        }
        Ok(())
    }
}

/// Fail unless every element at or past `len` is zero
fn check_extent<T: Element>(op: &'static str, v: &Vector<T>, len: usize) -> Result<()> {
    match v.as_slice().iter().skip(len).position(|e| !e.is_zero()) {
        None => Ok(()),
        Some(k) => Err(Error::unsupported(
            op,
            format!(
                "only defined in {} dimensions, element {} is non-zero",
                len,
                len + k
            ),
        )),
    }
}

impl<A> AdditiveGroup for VectorAlgebra<A>
where
    A: AdditiveGroup,
    A::Value: Element,
{
    fn add(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.zip_extended(a, b, out, |x, y, o| self.scalar.add(x, y, o))
    }

    fn subtract(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        self.zip_extended(a, b, out, |x, y, o| self.scalar.subtract(x, y, o))
    }

    fn negate(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.conform(a);
        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.negate(x, o))
    }
}

impl<A> VectorAlgebra<A>
where
    A: Multiplication + AdditiveGroup,
    A::Value: Element,
{
    /// (a × b) for operands already checked to fit three dimensions
    fn cross3(&self, a: &Vector<A::Value>, b: &Vector<A::Value>) -> Result<[A::Value; 3]> {
        let x = |k| a.element_or_zero(k);
        let y = |k| b.element_or_zero(k);
        let mut out = [A::Value::default(); 3];
        for (k, o) in out.iter_mut().enumerate() {
            let (p, q) = ((k + 1) % 3, (k + 2) % 3);
            let mut lhs = A::Value::default();
            let mut rhs = A::Value::default();
            self.scalar.multiply(&x(p), &y(q), &mut lhs)?;
            self.scalar.multiply(&x(q), &y(p), &mut rhs)?;
            self.scalar.subtract(&lhs, &rhs, o)?;
        }
        Ok(out)
    }
}

impl<A> VectorSpaceOps for VectorAlgebra<A>
where
    A: Multiplication + AdditiveGroup,
    A::Value: Element,
{
    type Scalar = A::Value;

    fn scale(&self, s: &A::Value, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.conform(a);
        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.multiply(s, x, o))
    }

    fn dot_product(&self, a: &Self::Value, b: &Self::Value, out: &mut A::Value) -> Result<()> {
        let mut acc = A::Value::default();
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            mul_add(&self.scalar, &mut acc, x, y)?;
        }
        *out = acc;
        Ok(())
    }

    fn cross_product(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        check_extent("cross_product", a, 3)?;
        check_extent("cross_product", b, 3)?;
        let c = self.cross3(a, b)?;
        out.alloc(3);
        out.as_mut_slice().copy_from_slice(&c);
        Ok(())
    }

    fn perp_dot_product(&self, a: &Self::Value, b: &Self::Value, out: &mut A::Value) -> Result<()> {
        check_extent("perp_dot_product", a, 2)?;
        check_extent("perp_dot_product", b, 2)?;
        let mut lhs = A::Value::default();
        let mut rhs = A::Value::default();
        self.scalar
            .multiply(&a.element_or_zero(0), &b.element_or_zero(1), &mut lhs)?;
        self.scalar
            .multiply(&a.element_or_zero(1), &b.element_or_zero(0), &mut rhs)?;
        self.scalar.subtract(&lhs, &rhs, out)
    }

    fn vector_triple_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        c: &Self::Value,
        out: &mut Self::Value,
    ) -> Result<()> {
        let mut bc = Vector::new();
        self.cross_product(b, c, &mut bc)?;
        self.cross_product(a, &bc, out)
    }

    fn scalar_triple_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        c: &Self::Value,
        out: &mut A::Value,
    ) -> Result<()> {
        let mut bc = Vector::new();
        self.cross_product(b, c, &mut bc)?;
        check_extent("scalar_triple_product", a, 3)?;
        self.dot_product(a, &bc, out)
    }

    fn direct_product(
        &self,
        a: &Self::Value,
        b: &Self::Value,
        out: &mut Matrix<A::Value>,
    ) -> Result<()> {
        out.init(a.len(), b.len())?;
        for (r, x) in a.as_slice().iter().enumerate() {
            for (c, y) in b.as_slice().iter().enumerate() {
                self.scalar.multiply(x, y, out.at_mut(r, c))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{ComplexFloat64, QuaternionFloat64};
    use crate::ops::traits::*;

    fn real(v: &[f64]) -> Vector<f64> {
        Vector::from_slice(v)
    }

    #[test]
    fn test_zero_extended_add() {
        let mut out = Vector::new();
        REAL_VECTOR
            .add(&real(&[1.0, 2.0]), &real(&[10.0, 20.0, 30.0]), &mut out)
            .unwrap();
        assert_eq!(out.as_slice(), &[11.0, 22.0, 30.0]);
        REAL_VECTOR
            .subtract(&real(&[1.0, 2.0, 3.0]), &real(&[1.0]), &mut out)
            .unwrap();
        assert_eq!(out.as_slice(), &[0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_dot_product_zero_pads() {
        let mut d = 0.0;
        REAL_VECTOR
            .dot_product(&real(&[1.0, 2.0, 3.0]), &real(&[4.0, 5.0]), &mut d)
            .unwrap();
        assert_eq!(d, 14.0);
    }

    #[test]
    fn test_cross_product() {
        let mut out = Vector::new();
        REAL_VECTOR
            .cross_product(&real(&[1.0, 0.0, 0.0]), &real(&[0.0, 1.0, 0.0]), &mut out)
            .unwrap();
        assert_eq!(out.as_slice(), &[0.0, 0.0, 1.0]);

        // shorter operands are zero-extended, trailing zeros are tolerated
        REAL_VECTOR
            .cross_product(&real(&[0.0, 1.0]), &real(&[1.0, 0.0, 0.0, 0.0]), &mut out)
            .unwrap();
        assert_eq!(out.as_slice(), &[0.0, 0.0, -1.0]);

        let err = REAL_VECTOR.cross_product(&real(&[1.0, 0.0, 0.0, 2.0]), &real(&[1.0]), &mut out);
        assert!(matches!(err, Err(Error::Unsupported { .. })));
    }

    #[test]
    fn test_perp_dot_product() {
        let mut p = 0.0;
        REAL_VECTOR
            .perp_dot_product(&real(&[1.0, 2.0]), &real(&[3.0, 4.0]), &mut p)
            .unwrap();
        assert_eq!(p, -2.0);
        assert!(
            REAL_VECTOR
                .perp_dot_product(&real(&[1.0, 2.0, 3.0]), &real(&[3.0, 4.0]), &mut p)
                .is_err()
        );
    }

    #[test]
    fn test_triple_products() {
        let a = real(&[1.0, 2.0, 3.0]);
        let b = real(&[-1.0, 0.5, 2.0]);
        let c = real(&[0.0, 1.0, -1.0]);
        let mut s = 0.0;
        REAL_VECTOR.scalar_triple_product(&a, &b, &c, &mut s).unwrap();
        // det [[1,2,3],[-1,0.5,2],[0,1,-1]]
        assert!((s + 7.5).abs() < 1e-12);

        // a × (b × c) = b (a·c) - c (a·b)
        let mut v = Vector::new();
        REAL_VECTOR.vector_triple_product(&a, &b, &c, &mut v).unwrap();
        let (ac, ab) = (-1.0, 6.0);
        for k in 0..3 {
            let expect = b.as_slice()[k] * ac - c.as_slice()[k] * ab;
            assert!((v.as_slice()[k] - expect).abs() < 1e-12);
        }
    }

    #[test]
    fn test_quaternion_scale_is_left_multiplication() {
        let i = QuaternionFloat64::I;
        let a = Vector::from_slice(&[QuaternionFloat64::J]);
        let mut out = Vector::new();
        QUATERNION_VECTOR.scale(&i, &a, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[QuaternionFloat64::K]);
    }

    #[test]
    fn test_direct_product() {
        let mut m = Matrix::new();
        REAL_VECTOR
            .direct_product(&real(&[1.0, 2.0]), &real(&[3.0, 4.0, 5.0]), &mut m)
            .unwrap();
        assert_eq!(m.shape(), [2, 3]);
        assert_eq!(m.as_slice(), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_norm_and_conjugate() {
        let v = Vector::from_slice(&[ComplexFloat64::new(3.0, 4.0), ComplexFloat64::new(0.0, 12.0)]);
        assert!((COMPLEX_VECTOR.norm(&v) - 13.0).abs() < 1e-12);
        let big = Vector::from_slice(&[ComplexFloat64::new(1e300, 1e300); 4]);
        assert!(COMPLEX_VECTOR.norm(&big).is_finite());

        let mut c = Vector::new();
        COMPLEX_VECTOR.conjugate(&v, &mut c).unwrap();
        assert_eq!(c.as_slice()[0], ComplexFloat64::new(3.0, -4.0));
    }

    #[test]
    fn test_predicates() {
        let mut v = real(&[0.0, 0.0]);
        assert!(REAL_VECTOR.is_zero(&v));
        v.set_element(1, f64::INFINITY).unwrap();
        assert!(REAL_VECTOR.is_infinite(&v));
        v.set_element(0, f64::NAN).unwrap();
        assert!(REAL_VECTOR.is_nan(&v));
        assert!(!REAL_VECTOR.is_infinite(&v));
    }

    #[test]
    fn test_kind_name_and_parse() {
        assert_eq!(OCTONION_VECTOR.kind_name(), "octonion vector");
        let v = BOOLEAN_VECTOR.construct_from_str("[true,false]").unwrap();
        assert_eq!(v.as_slice(), &[true, false]);
    }
}
