//! Matrix (ring with unity) kernel
//!
//! Element-wise operations lift the scalar kernel over every cell. The ring
//! product is the standard triple loop; `det` and `invert` delegate to
//! [`crate::algorithm::linalg`], and `exp`/`log`/trig/hyperbolic functions
//! are true matrix functions evaluated by the series in
//! [`crate::algorithm::matrix_functions_core`].

use super::elementwise::impl_elementwise_ops;
use super::mul_add;
use crate::algorithm::linalg;
use crate::algorithm::matrix_functions_core as series;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::common::{map, repeat_multiply, zip_map};
use crate::ops::scalar::{
    BOOLEAN, BooleanAlgebra, COMPLEX, ComplexAlgebra, OCTONION, OctonionAlgebra, QUATERNION,
    QuaternionAlgebra, REAL, RealAlgebra,
};
use crate::ops::traits::{
    AdditiveGroup, Commutative, Conjugate, Determinant, Division, Exponential, Hyperbolic,
    MatrixRingOps, Multiplication, NanOps, Norm, Scaling, Trigonometric,
};
use crate::tensor::Matrix;

#[cfg(feature = "rayon")]
use crate::ops::common::PARALLEL_THRESHOLD;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Matrices over the scalar kernel `A`
#[derive(Copy, Clone, Debug, Default)]
pub struct MatrixAlgebra<A> {
    scalar: A,
}

impl<A> MatrixAlgebra<A> {
    /// Kernel lifting `scalar` to matrices
    pub const fn new(scalar: A) -> Self {
        Self { scalar }
    }

    /// Element kernel
    pub fn scalar(&self) -> &A {
        &self.scalar
    }
}

/// Shared boolean matrix kernel
pub static BOOLEAN_MATRIX: MatrixAlgebra<BooleanAlgebra> = MatrixAlgebra::new(BOOLEAN);
/// Shared real matrix kernel
pub static REAL_MATRIX: MatrixAlgebra<RealAlgebra> = MatrixAlgebra::new(REAL);
/// Shared complex matrix kernel
pub static COMPLEX_MATRIX: MatrixAlgebra<ComplexAlgebra> = MatrixAlgebra::new(COMPLEX);
/// Shared quaternion matrix kernel
pub static QUATERNION_MATRIX: MatrixAlgebra<QuaternionAlgebra> = MatrixAlgebra::new(QUATERNION);
/// Shared octonion matrix kernel
pub static OCTONION_MATRIX: MatrixAlgebra<OctonionAlgebra> = MatrixAlgebra::new(OCTONION);

impl_elementwise_ops!(MatrixAlgebra, Matrix, Matrix);

fn check_same_shape<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if !a.conforms(b) {
        return Err(Error::shape_mismatch(&a.shape(), &b.shape()));
    }
    Ok(())
}

impl<A> AdditiveGroup for MatrixAlgebra<A>
where
    A: AdditiveGroup,
    A::Value: Element,
{
    fn add(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        check_same_shape(a, b)?;
        out.conform(a);
        zip_map(a.as_slice(), b.as_slice(), out.as_mut_slice(), |x, y, o| {
            self.scalar.add(x, y, o)
        })
    }

    fn subtract(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        check_same_shape(a, b)?;
        out.conform(a);
        zip_map(a.as_slice(), b.as_slice(), out.as_mut_slice(), |x, y, o| {
            self.scalar.subtract(x, y, o)
        })
    }

    fn negate(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.conform(a);
        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.negate(x, o))
    }
}

impl<A> Multiplication for MatrixAlgebra<A>
where
    A: Multiplication + AdditiveGroup,
    A::Value: Element,
{
    /// Standard row-by-column product
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `a.cols() != b.rows()`.
    fn multiply(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        if a.cols() != b.rows() {
            return Err(Error::shape_mismatch(&[a.cols(), b.cols()], &b.shape()));
        }
        let (inner, cols) = (a.cols(), b.cols());
        out.init(a.rows(), cols)?;
        if cols == 0 {
            return Ok(());
        }

        // out row r += a(r, k) · b row k, for every k
        let row = |r: usize, dst: &mut [A::Value]| -> Result<()> {
            for k in 0..inner {
                let x = a.at(r, k);
                for (c, o) in dst.iter_mut().enumerate() {
                    mul_add(&self.scalar, o, &x, &b.at(k, c))?;
                }
            }
            Ok(())
        };

        #[cfg(feature = "rayon")]
        if a.rows() * inner * cols >= PARALLEL_THRESHOLD {
            return out
                .as_mut_slice()
                .par_chunks_mut(cols)
                .enumerate()
                .try_for_each(|(r, dst)| row(r, dst));
        }

        for (r, dst) in out.as_mut_slice().chunks_mut(cols).enumerate() {
            row(r, dst)?;
        }
        Ok(())
    }

    /// `a^0` is the identity shaped like `a`; a negative exponent needs an
    /// inverse, see [`MatrixAlgebra::power_signed`].
    fn power(&self, n: i32, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        if n < 0 {
            return Err(Error::invalid_argument(
                "n",
                format!("negative matrix power {} needs power_signed", n),
            ));
        }
        if n == 0 {
            out.conform(a);
            self.unity(out);
            return Ok(());
        }
        repeat_multiply(self, n.unsigned_abs(), a, out)
    }

    /// Identity on the `min(rows, cols)` diagonal, keeping the shape of `out`
    fn unity(&self, out: &mut Self::Value) {
        out.zero_fill();
        for d in 0..out.rows().min(out.cols()) {
            self.scalar.unity(out.at_mut(d, d));
        }
    }

    fn is_unity(&self, a: &Self::Value) -> bool {
        (0..a.rows()).all(|r| {
            (0..a.cols()).all(|c| {
                let e = a.at(r, c);
                if r == c {
                    self.scalar.is_unity(&e)
                } else {
                    self.scalar.is_zero(&e)
                }
            })
        })
    }
}

impl<A> Division for MatrixAlgebra<A>
where
    A: Division + AdditiveGroup + Norm + NanOps,
    A::Value: Element,
{
    /// out = a · b⁻¹
    fn divide(&self, a: &Self::Value, b: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut inv = Matrix::new();
        self.invert(b, &mut inv)?;
        self.multiply(a, &inv, out)
    }

    /// Gauss-Jordan inverse; a singular matrix gives a NaN-filled result
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a non-square matrix.
    fn invert(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        linalg::invert(&self.scalar, a, out)
    }
}

impl<A> MatrixAlgebra<A>
where
    A: Division + AdditiveGroup + Norm + NanOps,
    A::Value: Element,
{
    /// out = a^n for any `n`; negative exponents invert first
    pub fn power_signed(&self, n: i32, a: &Matrix<A::Value>, out: &mut Matrix<A::Value>) -> Result<()> {
        if n >= 0 {
            return self.power(n, a, out);
        }
        let mut inv = Matrix::new();
        self.invert(a, &mut inv)?;
        repeat_multiply(self, n.unsigned_abs(), &inv, out)
    }
}

impl<A> MatrixRingOps for MatrixAlgebra<A>
where
    A: Multiplication + AdditiveGroup + Conjugate,
    A::Value: Element,
{
    type Scalar = A::Value;

    fn construct_dims(&self, rows: usize, cols: usize) -> Result<Self::Value> {
        Matrix::zeros(rows, cols)
    }

    /// Left multiplication of every element, `s · a(r, c)`
    fn scale(&self, s: &A::Value, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.conform(a);
        map(a.as_slice(), out.as_mut_slice(), |x, o| self.scalar.multiply(s, x, o))
    }

    fn transpose(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.alloc(a.cols(), a.rows())?;
        for r in 0..a.rows() {
            for c in 0..a.cols() {
                *out.at_mut(c, r) = a.at(r, c);
            }
        }
        Ok(())
    }

    fn conjugate_transpose(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        out.alloc(a.cols(), a.rows())?;
        for r in 0..a.rows() {
            for c in 0..a.cols() {
                self.scalar.conjugate(&a.at(r, c), out.at_mut(c, r))?;
            }
        }
        Ok(())
    }

    fn trace(&self, a: &Self::Value, out: &mut A::Value) -> Result<()> {
        let n = linalg::validate_square_matrix(a)?;
        let mut acc = A::Value::default();
        for d in 0..n {
            let prev = acc;
            self.scalar.add(&prev, &a.at(d, d), &mut acc)?;
        }
        *out = acc;
        Ok(())
    }
}

impl<A> Determinant for MatrixAlgebra<A>
where
    A: Commutative + Division + AdditiveGroup + Conjugate + Norm,
    A::Value: Element,
{
    /// LU with partial pivoting; singular gives zero, 0×0 gives one
    fn det(&self, a: &Self::Value, out: &mut A::Value) -> Result<()> {
        linalg::det(&self.scalar, a, out)
    }
}

// ============================================================================
// Matrix functions
// ============================================================================

impl<A> Exponential for MatrixAlgebra<A>
where
    A: Multiplication + AdditiveGroup + Norm + Scaling,
    A::Value: Element,
{
    fn exp(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        linalg::validate_square_matrix(a)?;
        series::exp(self, a, out)
    }

    /// Mercator series about the identity; accurate for `‖a - I‖ < 1`
    fn log(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        linalg::validate_square_matrix(a)?;
        series::log(self, a, out)
    }
}

impl<A> MatrixAlgebra<A>
where
    A: Division + AdditiveGroup + Norm + NanOps + Scaling,
    A::Value: Element,
{
    /// out = y⁻¹ · x
    fn inverse_times(&self, y: &Matrix<A::Value>, x: &Matrix<A::Value>, out: &mut Matrix<A::Value>) -> Result<()> {
        let mut inv = Matrix::new();
        self.invert(y, &mut inv)?;
        self.multiply(&inv, x, out)
    }
}

impl<A> Trigonometric for MatrixAlgebra<A>
where
    A: Division + AdditiveGroup + Norm + NanOps + Scaling,
    A::Value: Element,
{
    fn sin(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut c = Matrix::new();
        self.sincos(a, out, &mut c)
    }

    fn cos(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut s = Matrix::new();
        self.sincos(a, &mut s, out)
    }

    fn tan(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let (mut s, mut c) = (Matrix::new(), Matrix::new());
        self.sincos(a, &mut s, &mut c)?;
        self.divide(&s, &c, out)
    }

    fn csc(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut s = Matrix::new();
        self.sin(a, &mut s)?;
        self.invert(&s, out)
    }

    fn sec(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut c = Matrix::new();
        self.cos(a, &mut c)?;
        self.invert(&c, out)
    }

    fn cot(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let (mut s, mut c) = (Matrix::new(), Matrix::new());
        self.sincos(a, &mut s, &mut c)?;
        self.inverse_times(&s, &c, out)
    }

    fn sincos(&self, a: &Self::Value, s: &mut Self::Value, c: &mut Self::Value) -> Result<()> {
        linalg::validate_square_matrix(a)?;
        series::sin_cos(self, a, s, c)
    }
}

impl<A> Hyperbolic for MatrixAlgebra<A>
where
    A: Division + AdditiveGroup + Norm + NanOps + Scaling,
    A::Value: Element,
{
    fn sinh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut c = Matrix::new();
        self.sinhcosh(a, out, &mut c)
    }

    fn cosh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut s = Matrix::new();
        self.sinhcosh(a, &mut s, out)
    }

    fn tanh(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let (mut s, mut c) = (Matrix::new(), Matrix::new());
        self.sinhcosh(a, &mut s, &mut c)?;
        self.divide(&s, &c, out)
    }

    fn csch(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut s = Matrix::new();
        self.sinh(a, &mut s)?;
        self.invert(&s, out)
    }

    fn sech(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let mut c = Matrix::new();
        self.cosh(a, &mut c)?;
        self.invert(&c, out)
    }

    fn coth(&self, a: &Self::Value, out: &mut Self::Value) -> Result<()> {
        let (mut s, mut c) = (Matrix::new(), Matrix::new());
        self.sinhcosh(a, &mut s, &mut c)?;
        self.inverse_times(&s, &c, out)
    }

    fn sinhcosh(&self, a: &Self::Value, s: &mut Self::Value, c: &mut Self::Value) -> Result<()> {
        linalg::validate_square_matrix(a)?;
        series::sinh_cosh(self, a, s, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{ComplexFloat64, QuaternionFloat64};
    use crate::ops::traits::*;

    fn real(rows: usize, cols: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    fn assert_close(a: &Matrix<f64>, expect: &[f64], tol: f64) {
        assert_eq!(a.as_slice().len(), expect.len());
        for (x, y) in a.as_slice().iter().zip(expect) {
            assert!((x - y).abs() <= tol, "{} vs {:?}", a, expect);
        }
    }

    #[test]
    fn test_multiply() {
        let a = real(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = real(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let mut c = Matrix::new();
        REAL_MATRIX.multiply(&a, &b, &mut c).unwrap();
        assert_eq!(c.shape(), [2, 2]);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);

        let err = REAL_MATRIX.multiply(&a, &a, &mut c);
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_multiply_quaternion_keeps_order() {
        type Q = QuaternionFloat64;
        let a = Matrix::from_vec(1, 1, vec![Q::I]).unwrap();
        let b = Matrix::from_vec(1, 1, vec![Q::J]).unwrap();
        let mut c = Matrix::new();
        QUATERNION_MATRIX.multiply(&a, &b, &mut c).unwrap();
        assert_eq!(c.as_slice(), &[Q::K]);
        QUATERNION_MATRIX.multiply(&b, &a, &mut c).unwrap();
        assert_eq!(c.as_slice(), &[-Q::K]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let mut out = Matrix::new();
        let err = REAL_MATRIX.add(&Matrix::zeros(2, 2).unwrap(), &Matrix::zeros(2, 3).unwrap(), &mut out);
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_power_zero_is_identity() {
        let a = real(3, 3, &[0.0; 9]);
        let mut out = Matrix::new();
        REAL_MATRIX.power(0, &a, &mut out).unwrap();
        assert_eq!(out.shape(), [3, 3]);
        assert!(REAL_MATRIX.is_unity(&out));

        let b = real(2, 2, &[1.0, 1.0, 0.0, 1.0]);
        REAL_MATRIX.power(3, &b, &mut out).unwrap();
        assert_eq!(out.as_slice(), &[1.0, 3.0, 0.0, 1.0]);
        assert!(REAL_MATRIX.power(-1, &b, &mut out).is_err());

        REAL_MATRIX.power_signed(-2, &b, &mut out).unwrap();
        assert_close(&out, &[1.0, -2.0, 0.0, 1.0], 1e-12);
    }

    #[test]
    fn test_unity_rectangular() {
        let mut m = Matrix::zeros(2, 3).unwrap();
        BOOLEAN_MATRIX.unity(&mut m);
        assert_eq!(m.as_slice(), &[true, false, false, false, true, false]);
        assert!(BOOLEAN_MATRIX.is_unity(&m));
    }

    #[test]
    fn test_transpose_and_conjugate_transpose() {
        type C = ComplexFloat64;
        let a = Matrix::from_vec(1, 2, vec![C::new(1.0, 2.0), C::new(3.0, -4.0)]).unwrap();
        let mut t = Matrix::new();
        COMPLEX_MATRIX.transpose(&a, &mut t).unwrap();
        assert_eq!(t.shape(), [2, 1]);
        assert_eq!(t.as_slice(), a.as_slice());
        COMPLEX_MATRIX.conjugate_transpose(&a, &mut t).unwrap();
        assert_eq!(t.as_slice(), &[C::new(1.0, -2.0), C::new(3.0, 4.0)]);
    }

    #[test]
    fn test_trace_and_det() {
        let a = real(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut s = 0.0;
        REAL_MATRIX.trace(&a, &mut s).unwrap();
        assert_eq!(s, 5.0);
        REAL_MATRIX.det(&a, &mut s).unwrap();
        assert!((s + 2.0).abs() < 1e-12);
        assert!(REAL_MATRIX.trace(&Matrix::zeros(2, 3).unwrap(), &mut s).is_err());

        type C = ComplexFloat64;
        let z = Matrix::from_vec(2, 2, vec![C::I, C::ONE, C::ONE, C::I]).unwrap();
        let mut d = C::ZERO;
        COMPLEX_MATRIX.det(&z, &mut d).unwrap();
        // i·i - 1·1
        assert!(COMPLEX.within(1e-12, &d, &C::new(-2.0, 0.0)));
    }

    #[test]
    fn test_multiply_by_inverse_is_unity() {
        let a = real(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
        let mut inv = Matrix::new();
        REAL_MATRIX.invert(&a, &mut inv).unwrap();
        let mut p = Matrix::new();
        REAL_MATRIX.multiply(&a, &inv, &mut p).unwrap();
        let mut id = Matrix::zeros(3, 3).unwrap();
        REAL_MATRIX.unity(&mut id);
        assert!(REAL_MATRIX.within(1e-12, &p, &id));
    }

    #[test]
    fn test_exp_of_nilpotent_and_rotation() {
        let mut out = Matrix::new();
        REAL_MATRIX
            .exp(&real(2, 2, &[0.0, 1.0, 0.0, 0.0]), &mut out)
            .unwrap();
        assert_close(&out, &[1.0, 1.0, 0.0, 1.0], 1e-14);

        // exp([[0, -t], [t, 0]]) is the rotation by t
        let t = 2.5_f64;
        REAL_MATRIX
            .exp(&real(2, 2, &[0.0, -t, t, 0.0]), &mut out)
            .unwrap();
        assert_close(&out, &[t.cos(), -t.sin(), t.sin(), t.cos()], 1e-12);
    }

    #[test]
    fn test_trig_identity() {
        let a = real(2, 2, &[0.3, 1.2, -0.7, 2.0]);
        let (mut s, mut c) = (Matrix::new(), Matrix::new());
        REAL_MATRIX.sincos(&a, &mut s, &mut c).unwrap();
        let (mut s2, mut c2, mut sum) = (Matrix::new(), Matrix::new(), Matrix::new());
        REAL_MATRIX.multiply(&s, &s, &mut s2).unwrap();
        REAL_MATRIX.multiply(&c, &c, &mut c2).unwrap();
        REAL_MATRIX.add(&s2, &c2, &mut sum).unwrap();
        assert_close(&sum, &[1.0, 0.0, 0.0, 1.0], 1e-10);

        REAL_MATRIX.sinhcosh(&a, &mut s, &mut c).unwrap();
        REAL_MATRIX.multiply(&s, &s, &mut s2).unwrap();
        REAL_MATRIX.multiply(&c, &c, &mut c2).unwrap();
        REAL_MATRIX.subtract(&c2, &s2, &mut sum).unwrap();
        assert_close(&sum, &[1.0, 0.0, 0.0, 1.0], 1e-10);
    }

    #[test]
    fn test_log_inverts_exp_near_identity() {
        let a = real(2, 2, &[0.1, 0.2, -0.05, 0.15]);
        let (mut e, mut l) = (Matrix::new(), Matrix::new());
        REAL_MATRIX.exp(&a, &mut e).unwrap();
        REAL_MATRIX.log(&e, &mut l).unwrap();
        assert_close(&l, a.as_slice(), 1e-12);
    }

    #[test]
    fn test_functions_need_square() {
        let mut out = Matrix::new();
        assert!(REAL_MATRIX.exp(&Matrix::zeros(2, 3).unwrap(), &mut out).is_err());
        assert!(REAL_MATRIX.sin(&Matrix::zeros(3, 2).unwrap(), &mut out).is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let a = real(2, 2, &[1.0, 2.5, -3.0, 4.0]);
        let back = REAL_MATRIX.construct_from_str(&a.to_string()).unwrap();
        assert_eq!(back, a);
        assert_eq!(REAL_MATRIX.kind_name(), "real matrix");
    }

    #[test]
    fn test_construct_dims() {
        let m = REAL_MATRIX.construct_dims(2, 3).unwrap();
        assert_eq!(m.shape(), [2, 3]);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
        assert!(matches!(
            REAL_MATRIX.construct_dims(usize::MAX, 3),
            Err(Error::InvalidArgument { .. })
        ));
    }
}
