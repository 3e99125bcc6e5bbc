//! Scaled in-place updates: axpy/axpby, scalar and diagonal scaling
//!
//! Every kernel here preserves the multiplication order written in its
//! contract, so non-commutative scalar algebras behave exactly as the
//! caller wrote the product: `axpy` and `axpby` apply their coefficients
//! on the left of each element, `scale_left`/`scale_right` on the stated
//! side.

use crate::error::{Error, Result};
use crate::matrix::{Diagonal, Matrix, Vector};
use crate::scalar::{Promote, Scalar};

/// Minimum contiguous element count for the dense slice fast path
///
/// Below this, strided per-element access wins on setup cost; above it,
/// scaling runs directly over the dense backing slice. Both paths perform
/// the same arithmetic and produce identical results.
const SCALE_FAST_PATH_LEN: usize = 64;

/// In-place left scaling: every element becomes `alpha * element`
pub fn scale_left<T: Scalar>(alpha: T, a: &mut Matrix<T>) {
    let (m, n) = a.shape();
    let len = m * n;
    if a.is_contiguous() && len >= SCALE_FAST_PATH_LEN {
        let offset = a.layout().offset();
        // SAFETY: exclusive access for the duration of this loop; the
        // region offset..offset+len is exactly this matrix's elements.
        let slice = unsafe { a.storage().as_mut_slice() };
        for e in &mut slice[offset..offset + len] {
            *e = alpha * *e;
        }
        return;
    }
    for i in 0..m {
        for j in 0..n {
            a.put(i, j, alpha * a.at(i, j));
        }
    }
}

/// In-place right scaling: every element becomes `element * alpha`
pub fn scale_right<T: Scalar>(a: &mut Matrix<T>, alpha: T) {
    let (m, n) = a.shape();
    let len = m * n;
    if a.is_contiguous() && len >= SCALE_FAST_PATH_LEN {
        let offset = a.layout().offset();
        // SAFETY: as in scale_left.
        let slice = unsafe { a.storage().as_mut_slice() };
        for e in &mut slice[offset..offset + len] {
            *e = *e * alpha;
        }
        return;
    }
    for i in 0..m {
        for j in 0..n {
            a.put(i, j, a.at(i, j) * alpha);
        }
    }
}

/// Diagonal scaling from the left: row `i` of `A` is scaled by `D[i]`
pub fn scale_rows<T: Scalar>(d: &Diagonal<T>, a: &mut Matrix<T>) -> Result<()> {
    let (m, n) = a.shape();
    if d.len() != m {
        return Err(Error::dimension_mismatch("scale_rows", &[m], &[d.len()]));
    }
    for i in 0..m {
        let di = d.get(i);
        for j in 0..n {
            a.put(i, j, di * a.at(i, j));
        }
    }
    Ok(())
}

/// Diagonal scaling from the right: column `j` of `A` is scaled by `D[j]`
pub fn scale_cols<T: Scalar>(a: &mut Matrix<T>, d: &Diagonal<T>) -> Result<()> {
    let (m, n) = a.shape();
    if d.len() != n {
        return Err(Error::dimension_mismatch("scale_cols", &[n], &[d.len()]));
    }
    for j in 0..n {
        let dj = d.get(j);
        for i in 0..m {
            a.put(i, j, a.at(i, j) * dj);
        }
    }
    Ok(())
}

/// Scaled accumulation: `y ← α·x + y`, with `α` on the left of each element
pub fn axpy<T: Scalar>(alpha: T, x: &Vector<T>, y: &mut Vector<T>) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::dimension_mismatch("axpy", &[y.len()], &[x.len()]));
    }
    for i in 0..x.len() {
        y.put(i, alpha * x.at(i) + y.at(i));
    }
    Ok(())
}

/// Ranged scaled accumulation: `y[ry[k]] ← α·x[rx[k]] + y[ry[k]]`
///
/// The index sequences may be unordered and non-contiguous but must have
/// equal length (`DimensionMismatch` otherwise) and stay within bounds
/// (`IndexOutOfBounds`). Bounds are validated up front, so a failing call
/// leaves `y` untouched.
pub fn axpy_indexed<T: Scalar>(
    alpha: T,
    x: &Vector<T>,
    rx: &[usize],
    y: &mut Vector<T>,
    ry: &[usize],
) -> Result<()> {
    if rx.len() != ry.len() {
        return Err(Error::dimension_mismatch(
            "axpy_indexed",
            &[rx.len()],
            &[ry.len()],
        ));
    }
    for &ix in rx {
        if ix >= x.len() {
            return Err(Error::index_out_of_bounds(ix, x.len()));
        }
    }
    for &iy in ry {
        if iy >= y.len() {
            return Err(Error::index_out_of_bounds(iy, y.len()));
        }
    }
    for (&ix, &iy) in rx.iter().zip(ry.iter()) {
        y.put(iy, alpha * x.at(ix) + y.at(iy));
    }
    Ok(())
}

/// Scaled combination: `y ← α·x + β·y`, coefficients on the left
pub fn axpby<T: Scalar>(alpha: T, x: &Vector<T>, beta: T, y: &mut Vector<T>) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::dimension_mismatch("axpby", &[y.len()], &[x.len()]));
    }
    for i in 0..x.len() {
        y.put(i, alpha * x.at(i) + beta * y.at(i));
    }
    Ok(())
}

/// Out-of-place left scaling with element-type promotion
///
/// The result's element type is the promoted common type of the scale
/// factor and the container: scaling a real `f32` vector by a
/// `Complex<f64>` yields a `Complex<f64>` vector, and so on across the
/// whole `{f32, f64} × {real, complex}` lattice.
pub fn scale_promoting<A, X>(alpha: A, x: &Vector<X>) -> Vector<<A as Promote<X>>::Output>
where
    X: Scalar,
    A: Promote<X>,
{
    let a = alpha.promote_left();
    x.map(|e| a * A::promote_right(e))
}

/// Out-of-place left scaling of a matrix with element-type promotion
pub fn scale_promoting_matrix<A, X>(alpha: A, x: &Matrix<X>) -> Matrix<<A as Promote<X>>::Output>
where
    X: Scalar,
    A: Promote<X>,
{
    let a = alpha.promote_left();
    x.map(|e| a * A::promote_right(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_left_small_matrix() {
        let mut a = Matrix::from_vec(vec![1.0f64, 2.0, 3.0, 4.0], 2, 2).unwrap();
        scale_left(2.0, &mut a);
        assert_eq!(a.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_scale_fast_and_strided_paths_agree() {
        let n = 16; // 256 elements: contiguous parent takes the fast path
        let data: Vec<f64> = (0..n * n).map(|v| v as f64).collect();
        let mut dense = Matrix::from_vec(data.clone(), n, n).unwrap();
        scale_left(3.0, &mut dense);

        // The same elements through a transposed (strided) view.
        let strided_parent = Matrix::from_vec(data, n, n).unwrap();
        let mut strided = strided_parent.transpose();
        scale_left(3.0, &mut strided);

        assert_eq!(dense, strided.transpose());
    }

    #[test]
    fn test_scale_view_does_not_touch_rest() {
        let a = Matrix::from_vec((0..9).map(|v| v as f64).collect(), 3, 3).unwrap();
        let mut v = a.view(0..2, 0..2).unwrap();
        scale_left(10.0, &mut v);
        assert_eq!(a.at(0, 0), 0.0);
        assert_eq!(a.at(1, 1), 40.0);
        // Outside the view: untouched.
        assert_eq!(a.at(2, 2), 8.0);
        assert_eq!(a.at(0, 2), 2.0);
    }

    #[test]
    fn test_diagonal_scaling() {
        let mut a = Matrix::from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let d = Diagonal::from_vec(vec![2.0, 10.0]);
        scale_rows(&d, &mut a).unwrap();
        assert_eq!(a.to_vec(), vec![2.0, 4.0, 6.0, 40.0, 50.0, 60.0]);

        let d3 = Diagonal::from_vec(vec![1.0, 0.0, -1.0]);
        scale_cols(&mut a, &d3).unwrap();
        assert_eq!(a.to_vec(), vec![2.0, 0.0, -6.0, 40.0, 0.0, -60.0]);
    }

    #[test]
    fn test_diagonal_scaling_dimension_mismatch() {
        let mut a = Matrix::<f64>::zeros(2, 3);
        let d = Diagonal::from_vec(vec![1.0f64; 3]);
        assert!(matches!(
            scale_rows(&d, &mut a),
            Err(Error::DimensionMismatch { .. })
        ));
        let d2 = Diagonal::from_vec(vec![1.0f64; 2]);
        assert!(matches!(
            scale_cols(&mut a, &d2),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_axpy_elementwise() {
        let x = Vector::from_vec(vec![1.0f64, 2.0, 3.0]);
        let mut y = Vector::from_vec(vec![10.0f64, 20.0, 30.0]);
        axpy(2.0, &x, &mut y).unwrap();
        assert_eq!(y.to_vec(), vec![12.0, 24.0, 36.0]);
    }

    #[test]
    fn test_axpby() {
        let x = Vector::from_vec(vec![1.0f64, 2.0]);
        let mut y = Vector::from_vec(vec![3.0f64, 4.0]);
        axpby(2.0, &x, -1.0, &mut y).unwrap();
        assert_eq!(y.to_vec(), vec![-1.0, 0.0]);
    }

    #[test]
    fn test_axpy_indexed_unordered() {
        let x = Vector::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]);
        let mut y = Vector::from_vec(vec![0.0f64; 4]);
        axpy_indexed(1.0, &x, &[3, 0], &mut y, &[0, 3]).unwrap();
        assert_eq!(y.to_vec(), vec![4.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_axpy_indexed_bounds_checked_before_write() {
        let x = Vector::from_vec(vec![1.0f64, 2.0]);
        let mut y = Vector::from_vec(vec![0.0f64, 0.0]);
        let err = axpy_indexed(1.0, &x, &[0, 5], &mut y, &[0, 1]);
        assert!(matches!(err, Err(Error::IndexOutOfBounds { index: 5, .. })));
        // No partial mutation happened.
        assert_eq!(y.to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_axpy_indexed_length_mismatch() {
        let x = Vector::from_vec(vec![1.0f64, 2.0]);
        let mut y = Vector::from_vec(vec![0.0f64, 0.0]);
        assert!(matches!(
            axpy_indexed(1.0, &x, &[0, 1], &mut y, &[0]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_scale_promoting_upgrades_element_type() {
        use crate::scalar::Complex;
        let x = Vector::from_vec(vec![1.0f32, 2.0]);
        let y = scale_promoting(Complex::new(0.0f64, 1.0), &x);
        assert_eq!(y.to_vec(), vec![Complex::new(0.0, 1.0), Complex::new(0.0, 2.0)]);
    }
}
