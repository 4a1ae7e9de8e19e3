//! Integration tests for analytic functions of square matrices

mod common;

use common::{assert_allclose, assert_allclose_f64};
use numtower::prelude::*;

fn diag(values: &[f64]) -> Matrix<f64> {
    let n = values.len();
    let mut m = Matrix::zeros(n, n).unwrap();
    for (k, &v) in values.iter().enumerate() {
        m.set_element(k, k, v).unwrap();
    }
    m
}

#[test]
fn test_expm_identity() {
    // exp(0) = I
    let zeros = Matrix::<f64>::zeros(3, 3).unwrap();
    let mut result = Matrix::new();
    REAL_MATRIX.exp(&zeros, &mut result).expect("exp should succeed");

    let expected = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    assert_allclose_f64(result.as_slice(), &expected, 1e-10, 1e-10, "exp(0) = I");
}

#[test]
fn test_expm_diagonal() {
    // exp(diag([a, b, c])) = diag([exp(a), exp(b), exp(c)])
    let mut result = Matrix::new();
    REAL_MATRIX
        .exp(&diag(&[1.0, 2.0, 3.0]), &mut result)
        .expect("exp should succeed");

    let expected = diag(&[1.0_f64.exp(), 2.0_f64.exp(), 3.0_f64.exp()]);
    assert_allclose_f64(result.as_slice(), expected.as_slice(), 1e-10, 1e-10, "exp(diag)");
}

#[test]
fn test_expm_1x1() {
    let a = Matrix::from_vec(1, 1, vec![2.5]).unwrap();
    let mut result = Matrix::new();
    REAL_MATRIX.exp(&a, &mut result).expect("exp should succeed");
    assert_allclose_f64(result.as_slice(), &[2.5_f64.exp()], 1e-10, 1e-10, "exp 1x1");
}

#[test]
fn test_expm_large_norm() {
    // needs several squarings
    let mut result = Matrix::new();
    REAL_MATRIX
        .exp(&diag(&[-6.0, 9.0]), &mut result)
        .expect("exp should succeed");
    let expected = diag(&[(-6.0_f64).exp(), 9.0_f64.exp()]);
    assert_allclose_f64(result.as_slice(), expected.as_slice(), 1e-9, 1e-12, "exp large");
}

#[test]
fn test_expm_commuting_sum() {
    // a and 2a commute, so exp(3a) = exp(a) exp(2a)
    let a = Matrix::from_vec(2, 2, vec![0.1, 0.4, -0.3, 0.2]).unwrap();
    let (mut a2, mut a3) = (Matrix::new(), Matrix::new());
    REAL_MATRIX.scale(&2.0, &a, &mut a2).unwrap();
    REAL_MATRIX.scale(&3.0, &a, &mut a3).unwrap();

    let (mut e1, mut e2, mut e3, mut prod) =
        (Matrix::new(), Matrix::new(), Matrix::new(), Matrix::new());
    REAL_MATRIX.exp(&a, &mut e1).unwrap();
    REAL_MATRIX.exp(&a2, &mut e2).unwrap();
    REAL_MATRIX.exp(&a3, &mut e3).unwrap();
    REAL_MATRIX.multiply(&e1, &e2, &mut prod).unwrap();
    assert_allclose_f64(prod.as_slice(), e3.as_slice(), 1e-12, 1e-12, "exp(3a)");
}

#[test]
fn test_complex_expm_of_hermitian_generator() {
    // exp(iθσx) = cos θ I + i sin θ σx
    let theta = 0.7;
    let it = ComplexFloat64::new(0.0, theta);
    let a = Matrix::from_vec(2, 2, vec![ComplexFloat64::ZERO, it, it, ComplexFloat64::ZERO]).unwrap();
    let mut result = Matrix::new();
    COMPLEX_MATRIX.exp(&a, &mut result).unwrap();

    let c = ComplexFloat64::from_real(theta.cos());
    let s = ComplexFloat64::new(0.0, theta.sin());
    assert_allclose(result.as_slice(), &[c, s, s, c], 1e-12, 1e-12, "exp(iθσx)");

    // unitary: det has modulus one
    let mut d = ComplexFloat64::ZERO;
    COMPLEX_MATRIX.det(&result, &mut d).unwrap();
    assert!((COMPLEX.norm(&d) - 1.0).abs() < 1e-12);
}

#[test]
fn test_logm_inverts_expm() {
    let a = Matrix::from_vec(2, 2, vec![0.05, 0.1, -0.08, 0.02]).unwrap();
    let (mut e, mut back) = (Matrix::new(), Matrix::new());
    REAL_MATRIX.exp(&a, &mut e).unwrap();
    REAL_MATRIX.log(&e, &mut back).unwrap();
    assert_allclose_f64(back.as_slice(), a.as_slice(), 1e-10, 1e-10, "log(exp(a))");
}

#[test]
fn test_trig_of_diagonal() {
    let a = diag(&[0.3, -1.2, 4.0]);
    let (mut s, mut c, mut t) = (Matrix::new(), Matrix::new(), Matrix::new());
    REAL_MATRIX.sincos(&a, &mut s, &mut c).unwrap();
    REAL_MATRIX.tan(&a, &mut t).unwrap();

    let expect = |f: fn(f64) -> f64| diag(&[f(0.3), f(-1.2), f(4.0)]);
    assert_allclose_f64(s.as_slice(), expect(f64::sin).as_slice(), 1e-9, 1e-10, "sin");
    assert_allclose_f64(c.as_slice(), expect(f64::cos).as_slice(), 1e-9, 1e-10, "cos");
    assert_allclose_f64(t.as_slice(), expect(f64::tan).as_slice(), 1e-9, 1e-10, "tan");
}

#[test]
fn test_hyperbolic_of_diagonal() {
    let a = diag(&[0.5, 2.0]);
    let (mut s, mut c, mut t) = (Matrix::new(), Matrix::new(), Matrix::new());
    REAL_MATRIX.sinhcosh(&a, &mut s, &mut c).unwrap();
    REAL_MATRIX.tanh(&a, &mut t).unwrap();

    assert_allclose_f64(s.as_slice(), diag(&[0.5f64.sinh(), 2f64.sinh()]).as_slice(), 1e-10, 1e-10, "sinh");
    assert_allclose_f64(c.as_slice(), diag(&[0.5f64.cosh(), 2f64.cosh()]).as_slice(), 1e-10, 1e-10, "cosh");
    assert_allclose_f64(t.as_slice(), diag(&[0.5f64.tanh(), 2f64.tanh()]).as_slice(), 1e-10, 1e-10, "tanh");
}

#[test]
fn test_reciprocal_trig() {
    let a = diag(&[0.4, 1.1]);
    let (mut csc, mut sec, mut cot) = (Matrix::new(), Matrix::new(), Matrix::new());
    REAL_MATRIX.csc(&a, &mut csc).unwrap();
    REAL_MATRIX.sec(&a, &mut sec).unwrap();
    REAL_MATRIX.cot(&a, &mut cot).unwrap();

    let recip = |f: fn(f64) -> f64| diag(&[1.0 / f(0.4), 1.0 / f(1.1)]);
    assert_allclose_f64(csc.as_slice(), recip(f64::sin).as_slice(), 1e-9, 1e-10, "csc");
    assert_allclose_f64(sec.as_slice(), recip(f64::cos).as_slice(), 1e-9, 1e-10, "sec");
    assert_allclose_f64(cot.as_slice(), recip(f64::tan).as_slice(), 1e-9, 1e-10, "cot");
}

#[test]
fn test_functions_reject_rectangular() {
    let a = Matrix::<f64>::zeros(2, 3).unwrap();
    let mut out = Matrix::new();
    assert!(REAL_MATRIX.exp(&a, &mut out).is_err());
    assert!(REAL_MATRIX.sin(&a, &mut out).is_err());
    assert!(REAL_MATRIX.cosh(&a, &mut out).is_err());
}
