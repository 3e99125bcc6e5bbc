//! Integration tests for axpy/axpby updates, scaling multiplication, and
//! element-type promotion.

mod common;

use common::{assert_allclose_f64, Quaternion, Rational};
use linr::prelude::*;

#[test]
fn test_axpy_linearity() {
    let x = Vector::from_vec(vec![1.0f64, -2.0, 3.0]);
    let mut y = Vector::from_vec(vec![0.5f64, 0.5, 0.5]);
    axpy(2.0, &x, &mut y).unwrap();
    assert_allclose_f64(&y.to_vec(), &[2.5, -3.5, 6.5], 1e-12, 0.0, "axpy");

    // alpha = 0 leaves y untouched.
    let before = y.to_vec();
    axpy(0.0, &x, &mut y).unwrap();
    assert_eq!(y.to_vec(), before);
}

#[test]
fn test_axpy_into_subvector_view() {
    let parent = Vector::from_vec(vec![0.0f64; 6]);
    let mut window = parent.subvector(2..5).unwrap();
    let x = Vector::from_vec(vec![1.0f64, 2.0, 3.0]);
    axpy(10.0, &x, &mut window).unwrap();
    assert_eq!(parent.to_vec(), vec![0.0, 0.0, 10.0, 20.0, 30.0, 0.0]);
}

#[test]
fn test_axpby_beta_scales_destination() {
    let x = Vector::from_vec(vec![1.0f64, 1.0]);
    let mut y = Vector::from_vec(vec![10.0f64, 20.0]);
    axpby(3.0, &x, 0.5, &mut y).unwrap();
    assert_eq!(y.to_vec(), vec![8.0, 13.0]);
}

#[test]
fn test_axpy_quaternion_left_multiplication_observable() {
    // alpha*x != x*alpha for quaternions: check the kernel multiplies on
    // the left. i * j = k but j * i = -k.
    let x = Vector::from_vec(vec![Quaternion::j()]);
    let mut y = Vector::from_vec(vec![Quaternion::zero()]);
    axpy(Quaternion::i(), &x, &mut y).unwrap();
    assert_eq!(y.get(0).unwrap(), Quaternion::k());
}

#[test]
fn test_axpby_quaternion_orders_both_products() {
    let x = Vector::from_vec(vec![Quaternion::j()]);
    let mut y = Vector::from_vec(vec![Quaternion::k()]);
    // i*j + i*k = k - j.
    axpby(Quaternion::i(), &x, Quaternion::i(), &mut y).unwrap();
    assert_eq!(
        y.get(0).unwrap(),
        Quaternion::k() - Quaternion::j()
    );
}

#[test]
fn test_axpy_indexed_scatter_gather() {
    let x = Vector::from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
    let mut y = Vector::from_vec(vec![100.0f64; 5]);
    // Reversed, non-contiguous index sets.
    axpy_indexed(1.0, &x, &[4, 2, 0], &mut y, &[0, 2, 4]).unwrap();
    assert_eq!(y.to_vec(), vec![105.0, 100.0, 103.0, 100.0, 101.0]);
}

#[test]
fn test_axpy_indexed_errors_leave_y_untouched() {
    let x = Vector::from_vec(vec![1.0f64, 2.0]);
    let mut y = Vector::from_vec(vec![7.0f64, 7.0]);

    assert!(matches!(
        axpy_indexed(1.0, &x, &[0], &mut y, &[0, 1]),
        Err(Error::DimensionMismatch { .. })
    ));
    assert_eq!(y.to_vec(), vec![7.0, 7.0]);

    assert!(matches!(
        axpy_indexed(1.0, &x, &[0, 1], &mut y, &[0, 9]),
        Err(Error::IndexOutOfBounds { index: 9, .. })
    ));
    assert_eq!(y.to_vec(), vec![7.0, 7.0]);
}

#[test]
fn test_scale_left_vs_right_quaternion() {
    let data = vec![Quaternion::j(), Quaternion::k()];
    let mut left = Matrix::from_vec(data.clone(), 1, 2).unwrap();
    let mut right = Matrix::from_vec(data, 1, 2).unwrap();

    scale_left(Quaternion::i(), &mut left);
    scale_right(&mut right, Quaternion::i());

    // i*j = k, j*i = -k: the two sides genuinely differ.
    assert_eq!(left.get(0, 0).unwrap(), Quaternion::k());
    assert_eq!(right.get(0, 0).unwrap(), -Quaternion::k());
}

#[test]
fn test_scale_large_contiguous_matrix() {
    // Large enough to hit the dense fast path.
    let n = 32;
    let mut a = Matrix::from_fn(n, n, |i, j| (i * n + j) as f64);
    scale_left(-0.5, &mut a);
    assert_eq!(a.get(0, 0).unwrap(), 0.0);
    assert_eq!(a.get(n - 1, n - 1).unwrap(), -0.5 * ((n * n - 1) as f64));
}

#[test]
fn test_scale_strided_view_same_result() {
    let n = 32;
    let base = Matrix::from_fn(n, n, |i, j| (i + 2 * j) as f64);

    let mut dense = Matrix::from_vec(base.to_vec(), n, n).unwrap();
    scale_left(3.0, &mut dense);

    // Transposed view of a fresh copy: strided path.
    let copy = Matrix::from_vec(base.to_vec(), n, n).unwrap();
    let mut t = copy.transpose();
    scale_left(3.0, &mut t);

    for i in 0..n {
        for j in 0..n {
            assert_eq!(dense.get(i, j).unwrap(), copy.get(i, j).unwrap());
        }
    }
}

#[test]
fn test_diagonal_scaling_rational_exact() {
    let mut a = Matrix::from_vec(
        vec![
            Rational::new(1, 2),
            Rational::new(1, 3),
            Rational::new(1, 5),
            Rational::new(1, 7),
        ],
        2,
        2,
    )
    .unwrap();
    let d = Diagonal::from_vec(vec![Rational::int(2), Rational::int(35)]);
    scale_rows(&d, &mut a).unwrap();
    assert_eq!(a.get(0, 0).unwrap(), Rational::int(1));
    assert_eq!(a.get(0, 1).unwrap(), Rational::new(2, 3));
    assert_eq!(a.get(1, 0).unwrap(), Rational::int(7));
    assert_eq!(a.get(1, 1).unwrap(), Rational::int(5));
}

#[test]
fn test_diagonal_scaling_shape_errors() {
    let mut a = Matrix::<f64>::zeros(3, 2);
    let wrong = Diagonal::from_vec(vec![1.0f64; 2]);
    assert!(matches!(
        scale_rows(&wrong, &mut a),
        Err(Error::DimensionMismatch { .. })
    ));
    let wrong_cols = Diagonal::from_vec(vec![1.0f64; 3]);
    assert!(matches!(
        scale_cols(&mut a, &wrong_cols),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_scale_promoting_mixed_precision() {
    let x = Vector::from_vec(vec![1.0f32, -2.0]);
    // f64 * f32 vector -> f64 vector.
    let y = scale_promoting(0.5f64, &x);
    assert_eq!(y.to_vec(), vec![0.5f64, -1.0]);

    // Complex<f32> * f64 vector -> Complex<f64> vector.
    let z = Vector::from_vec(vec![2.0f64]);
    let w = scale_promoting(Complex::new(0.0f32, 1.0), &z);
    assert_eq!(w.to_vec(), vec![Complex::new(0.0f64, 2.0)]);
}

#[test]
fn test_scale_promoting_matrix_mixed_precision() {
    let a = Matrix::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let b = linr::linalg::scale_promoting_matrix(Complex::new(0.0f64, 1.0), &a);
    assert_eq!(b.shape(), (2, 2));
    assert_eq!(b.get(0, 1).unwrap(), Complex::new(0.0f64, 2.0));
    assert_eq!(b.get(1, 1).unwrap(), Complex::new(0.0f64, 4.0));

    // Real scale factor on a complex matrix stays complex.
    let c = Matrix::from_vec(vec![Complex::new(1.0f64, -1.0)], 1, 1).unwrap();
    let d = linr::linalg::scale_promoting_matrix(2.0f64, &c);
    assert_eq!(d.get(0, 0).unwrap(), Complex::new(2.0, -2.0));
}

#[test]
fn test_try_cast_real_to_complex_and_back() {
    let v = Vector::from_vec(vec![1.0f64, -2.0]);
    let c: Vector<Complex<f64>> = v.try_cast().unwrap();
    assert_eq!(c.get(1).unwrap(), Complex::new(-2.0, 0.0));

    // Purely real complex values narrow back without loss.
    let back: Vector<f64> = c.try_cast().unwrap();
    assert_eq!(back, v);

    // A nonzero imaginary part cannot narrow.
    let bad = Vector::from_vec(vec![Complex::new(1.0f64, 0.5)]);
    let res: Result<Vector<f64>> = bad.try_cast();
    assert!(matches!(res, Err(Error::Inexact { .. })));
}
