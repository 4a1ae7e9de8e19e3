//! Common test utilities
#![allow(dead_code)]

use numtower::dtype::Components;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two slices of scalar records are close, component by component
pub fn assert_allclose<T: Components>(a: &[T], b: &[T], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    let flat = |v: &[T]| -> Vec<f64> { v.iter().flat_map(|e| e.components().to_vec()).collect() };
    assert_allclose_f64(&flat(a), &flat(b), rtol, atol, msg);
}

/// Assert two scalar records are close, component by component
pub fn assert_close<T: Components>(a: T, b: T, tol: f64, msg: &str) {
    assert_allclose(&[a], &[b], tol, tol, msg);
}
