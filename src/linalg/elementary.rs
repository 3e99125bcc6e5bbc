//! Elementary operations: trace, cross product, structural predicates

use crate::error::{Error, Result};
use crate::matrix::{Matrix, Vector};
use crate::scalar::Scalar;

/// Trace: sum of the `min(m, n)` diagonal entries of any rectangular matrix
pub fn tr<T: Scalar>(a: &Matrix<T>) -> T {
    a.diagonal().iter().fold(T::zero(), |acc, e| acc + e)
}

/// Cross product of two 3-vectors
///
/// Any other length fails with `DimensionMismatch`. Products are formed in
/// the order written here, so the result is well-defined for
/// non-commutative algebras too.
pub fn cross<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<Vector<T>> {
    if u.len() != 3 || v.len() != 3 {
        return Err(Error::dimension_mismatch(
            "cross",
            &[3, 3],
            &[u.len(), v.len()],
        ));
    }
    let (u0, u1, u2) = (u.at(0), u.at(1), u.at(2));
    let (v0, v1, v2) = (v.at(0), v.at(1), v.at(2));
    Ok(Vector::from_vec(vec![
        u1 * v2 - u2 * v1,
        u2 * v0 - u0 * v2,
        u0 * v1 - u1 * v0,
    ]))
}

/// Whether `A` equals its transpose
///
/// Non-square input returns `false`; it is not an error.
pub fn issymmetric<T: Scalar>(a: &Matrix<T>) -> bool {
    if !a.is_square() {
        return false;
    }
    let n = a.rows();
    for i in 0..n {
        for j in (i + 1)..n {
            if a.at(i, j) != a.at(j, i) {
                return false;
            }
        }
    }
    true
}

/// Whether `A` equals its conjugate transpose
///
/// Non-square input returns `false`. For real-like algebras (identity
/// conjugation) this coincides with [`issymmetric`], except that the
/// diagonal must also be self-conjugate.
pub fn ishermitian<T: Scalar>(a: &Matrix<T>) -> bool {
    if !a.is_square() {
        return false;
    }
    let n = a.rows();
    for i in 0..n {
        for j in i..n {
            if a.at(i, j) != a.at(j, i).conj() {
                return false;
            }
        }
    }
    true
}

/// Whether every nonzero entry lies on or above the `k`-th diagonal
///
/// `k = 0` is the main diagonal, positive `k` superdiagonals, negative `k`
/// subdiagonals. Defined for rectangular matrices.
pub fn istriu<T: Scalar>(a: &Matrix<T>, k: i64) -> bool {
    let (m, n) = a.shape();
    for i in 0..m {
        for j in 0..n {
            if (j as i64 - i as i64) < k && !a.at(i, j).is_zero() {
                return false;
            }
        }
    }
    true
}

/// Whether every nonzero entry lies on or below the `k`-th diagonal
pub fn istril<T: Scalar>(a: &Matrix<T>, k: i64) -> bool {
    let (m, n) = a.shape();
    for i in 0..m {
        for j in 0..n {
            if (j as i64 - i as i64) > k && !a.at(i, j).is_zero() {
                return false;
            }
        }
    }
    true
}

/// Whether every nonzero entry lies within `lo` subdiagonals and `hi`
/// superdiagonals of the main diagonal
///
/// Equivalent to `istriu(a, -lo) && istril(a, hi)`.
pub fn isbanded<T: Scalar>(a: &Matrix<T>, lo: i64, hi: i64) -> bool {
    istriu(a, -lo) && istril(a, hi)
}

/// Whether every nonzero entry lies on the main diagonal
pub fn isdiag<T: Scalar>(a: &Matrix<T>) -> bool {
    isbanded(a, 0, 0)
}
