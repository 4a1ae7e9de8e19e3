//! Dense elimination over a scalar kernel
//!
//! Both algorithms use partial pivoting: at each step the remaining row whose
//! pivot candidate has the largest norm is swapped into place. Pivoting on the
//! norm keeps every multiplier at most 1 in modulus, so the growth of
//! rounding error is bounded the same way it is for real matrices. Complete
//! pivoting would be slightly more stable but costs an `O(n²)` search per
//! step.
//!
//! - [`lu_decompose`] / [`det`]: Doolittle LU. The determinant is the signed
//!   product of the pivots, which is only meaningful when the element kind
//!   commutes.
//! - [`invert`]: Gauss-Jordan on `[A | I]`. It only multiplies rows from the
//!   left, so it is valid over skew fields (quaternions) as well as fields.
//!   Octonion matrices do not associate and get no exact inverse this way.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::traits::{AdditiveGroup, Division, NanOps, Norm};
use crate::tensor::Matrix;

/// Validate matrix is square, returning its size
pub fn validate_square_matrix<T: Element>(a: &Matrix<T>) -> Result<usize> {
    if !a.is_square() {
        return Err(Error::invalid_argument(
            "a",
            format!("expected a square matrix, got {}x{}", a.rows(), a.cols()),
        ));
    }
    Ok(a.rows())
}

/// LU factors packed into one row-major buffer
///
/// The strictly lower triangle holds the multipliers of `L` (unit diagonal
/// implied), the upper triangle holds `U`.
#[derive(Clone, Debug)]
pub struct LuDecomposition<T> {
    /// Packed factors, row-major
    pub lu: Vec<T>,
    /// Matrix size
    pub n: usize,
    /// Row swaps performed while pivoting
    pub num_swaps: usize,
}

/// Row in `from..n` of column `col` whose element has the largest norm
fn pivot_row<A>(alg: &A, m: &[A::Value], n: usize, width: usize, col: usize) -> (usize, f64)
where
    A: Norm,
{
    let mut best = col;
    let mut best_norm = alg.norm(&m[col * width + col]);
    for row in (col + 1)..n {
        let v = alg.norm(&m[row * width + col]);
        if v > best_norm || best_norm.is_nan() {
            best = row;
            best_norm = v;
        }
    }
    (best, best_norm)
}

fn swap_rows<T>(m: &mut [T], width: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = (a.min(b), a.max(b));
    let (head, tail) = m.split_at_mut(hi * width);
    head[lo * width..(lo + 1) * width].swap_with_slice(&mut tail[..width]);
}

/// LU decomposition with partial pivoting (Doolittle algorithm)
///
/// Returns `None` when a zero (or NaN) pivot shows the matrix is singular.
pub fn lu_decompose<A>(alg: &A, a: &Matrix<A::Value>) -> Result<Option<LuDecomposition<A::Value>>>
where
    A: Division + AdditiveGroup + Norm,
    A::Value: Element,
{
    let n = validate_square_matrix(a)?;
    let mut lu = a.as_slice().to_vec();
    let mut num_swaps = 0usize;

    for col in 0..n {
        let (p, p_norm) = pivot_row(alg, &lu, n, n, col);
        if p_norm == 0.0 || p_norm.is_nan() {
            return Ok(None);
        }
        if p != col {
            swap_rows(&mut lu, n, p, col);
            num_swaps += 1;
        }

        let mut pivot_inv = A::Value::default();
        alg.invert(&lu[col * n + col], &mut pivot_inv)?;

        for row in (col + 1)..n {
            // multipliers (L column)
            let mut factor = A::Value::default();
            alg.multiply(&lu[row * n + col], &pivot_inv, &mut factor)?;
            lu[row * n + col] = factor;

            // trailing submatrix
            for j in (col + 1)..n {
                let mut update = A::Value::default();
                alg.multiply(&factor, &lu[col * n + j], &mut update)?;
                let current = lu[row * n + j];
                alg.subtract(&current, &update, &mut lu[row * n + j])?;
            }
        }
    }

    Ok(Some(LuDecomposition { lu, n, num_swaps }))
}

/// Determinant via LU decomposition
///
/// `det = (-1)^swaps · Π U(i, i)`; a singular matrix gives zero and an empty
/// matrix gives one.
pub fn det<A>(alg: &A, a: &Matrix<A::Value>, out: &mut A::Value) -> Result<()>
where
    A: Division + AdditiveGroup + Norm,
    A::Value: Element,
{
    let Some(lu) = lu_decompose(alg, a)? else {
        alg.zero(out);
        return Ok(());
    };

    let mut acc = A::Value::default();
    alg.unity(&mut acc);
    if lu.num_swaps % 2 == 1 {
        let one = acc;
        alg.negate(&one, &mut acc)?;
    }
    for i in 0..lu.n {
        let prev = acc;
        alg.multiply(&prev, &lu.lu[i * lu.n + i], &mut acc)?;
    }
    *out = acc;
    Ok(())
}

/// Inverse via Gauss-Jordan elimination with partial pivoting
///
/// A singular matrix yields a NaN-filled result of the same shape.
pub fn invert<A>(alg: &A, a: &Matrix<A::Value>, out: &mut Matrix<A::Value>) -> Result<()>
where
    A: Division + AdditiveGroup + Norm + NanOps,
    A::Value: Element,
{
    let n = validate_square_matrix(a)?;
    let width = 2 * n;

    // Augmented [A | I]
    let mut aug = vec![A::Value::default(); n * width];
    for r in 0..n {
        aug[r * width..r * width + n].copy_from_slice(&a.as_slice()[r * n..(r + 1) * n]);
        alg.unity(&mut aug[r * width + n + r]);
    }

    out.init(n, n)?;
    for col in 0..n {
        let (p, p_norm) = pivot_row(alg, &aug, n, width, col);
        if p_norm == 0.0 || p_norm.is_nan() {
            tracing::debug!(n, col, "singular matrix, inverse is NaN");
            for e in out.as_mut_slice() {
                alg.nan(e)?;
            }
            return Ok(());
        }
        swap_rows(&mut aug, width, p, col);

        // Normalize the pivot row from the left: row ← p⁻¹ · row
        let mut pivot_inv = A::Value::default();
        alg.invert(&aug[col * width + col], &mut pivot_inv)?;
        for j in 0..width {
            let x = aug[col * width + j];
            alg.multiply(&pivot_inv, &x, &mut aug[col * width + j])?;
        }

        // Eliminate the column from every other row: row ← row - f · pivot row
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row * width + col];
            if alg.is_zero(&factor) {
                continue;
            }
            for j in 0..width {
                let mut update = A::Value::default();
                alg.multiply(&factor, &aug[col * width + j], &mut update)?;
                let current = aug[row * width + j];
                alg.subtract(&current, &update, &mut aug[row * width + j])?;
            }
        }
    }

    for r in 0..n {
        out.as_mut_slice()[r * n..(r + 1) * n]
            .copy_from_slice(&aug[r * width + n..(r + 1) * width]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::QuaternionFloat64;
    use crate::ops::scalar::{QUATERNION, REAL};
    use crate::ops::traits::Multiplication;

    #[test]
    fn test_det_real() {
        let a = Matrix::from_vec(3, 3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]).unwrap();
        let mut d = 0.0;
        det(&REAL, &a, &mut d).unwrap();
        assert!((d - 1.0).abs() < 1e-12);

        // a row swap flips the sign
        let b = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        det(&REAL, &b, &mut d).unwrap();
        assert_eq!(d, -1.0);
    }

    #[test]
    fn test_det_singular_and_empty() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        let mut d = 5.0;
        det(&REAL, &a, &mut d).unwrap();
        assert_eq!(d, 0.0);
        det(&REAL, &Matrix::<f64>::new(), &mut d).unwrap();
        assert_eq!(d, 1.0);
        assert!(det(&REAL, &Matrix::<f64>::zeros(2, 3).unwrap(), &mut d).is_err());
    }

    #[test]
    fn test_invert_real() {
        let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let mut inv = Matrix::new();
        invert(&REAL, &a, &mut inv).unwrap();
        let expect = [0.6, -0.7, -0.2, 0.4];
        for (x, y) in inv.as_slice().iter().zip(expect) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invert_singular_is_nan() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        let mut inv = Matrix::new();
        invert(&REAL, &a, &mut inv).unwrap();
        assert_eq!(inv.shape(), [2, 2]);
        assert!(inv.as_slice().iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_invert_quaternion_both_sides() {
        type Q = QuaternionFloat64;
        let a = Matrix::from_vec(
            2,
            2,
            vec![Q::new(1.0, 2.0, 0.0, 0.0), Q::J, Q::new(0.0, 0.0, 1.0, 3.0), Q::ONE],
        )
        .unwrap();
        let mut inv = Matrix::new();
        invert(&QUATERNION, &a, &mut inv).unwrap();

        for (lhs, rhs) in [(&a, &inv), (&inv, &a)] {
            for r in 0..2 {
                for c in 0..2 {
                    let mut acc = Q::ZERO;
                    for k in 0..2 {
                        let mut p = Q::ZERO;
                        QUATERNION.multiply(&lhs.at(r, k), &rhs.at(k, c), &mut p).unwrap();
                        acc = acc + p;
                    }
                    let expect = if r == c { Q::ONE } else { Q::ZERO };
                    let diff = acc - expect;
                    assert!(QUATERNION.norm(&diff) < 1e-12, "({}, {}) = {}", r, c, acc);
                }
            }
        }
    }
}
