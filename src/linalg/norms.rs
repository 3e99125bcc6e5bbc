//! Vector and matrix norms, generic and recursive
//!
//! [`Norm`] is implemented both for magnitude-bearing scalars (the leaves)
//! and for containers of `Norm` values, so `norm` recurses through nested
//! structures: the p-norm of a container combines the Euclidean norms of
//! its elements, `norm([[1,2],[3,4]], 2) == √30`.
//!
//! Accumulation is rescaled by the largest element norm before summing
//! powers, so subnormal and near-overflow inputs produce finite, accurate
//! results.

use crate::error::{Error, Result};
use crate::matrix::{Matrix, Vector};
use crate::scalar::{Complex, Magnitude, Scalar};

/// Values that have a norm and can be elements of an outer norm
pub trait Norm {
    /// Euclidean norm of the value; containers recurse through elements
    fn norm(&self) -> f64;

    /// p-norm of the value
    ///
    /// For containers: `p = 0` counts elements with nonzero norm, `p = ∞`
    /// is the largest element norm, `p = -∞` the smallest, and general `p`
    /// combines element norms as `(Σ ‖xᵢ‖^p)^(1/p)`. For scalars every
    /// `p ≠ 0` is the absolute value. `NaN` orders are rejected with
    /// `InvalidArgument`.
    fn norm_p(&self, p: f64) -> Result<f64>;
}

macro_rules! impl_norm_leaf {
    ($($t:ty),*) => {
        $(
            impl Norm for $t {
                #[inline]
                fn norm(&self) -> f64 {
                    Magnitude::magnitude(*self)
                }

                fn norm_p(&self, p: f64) -> Result<f64> {
                    if p.is_nan() {
                        return Err(Error::InvalidArgument {
                            arg: "p",
                            reason: "norm order must not be NaN".to_string(),
                        });
                    }
                    if p == 0.0 {
                        Ok(if Scalar::is_zero(*self) { 0.0 } else { 1.0 })
                    } else {
                        Ok(Magnitude::magnitude(*self))
                    }
                }
            }
        )*
    };
}

impl_norm_leaf!(f32, f64, Complex<f32>, Complex<f64>);

/// Rescaled Euclidean combination of element norms
fn combine_euclidean(norms: &[f64]) -> f64 {
    let scale = norms.iter().fold(0.0f64, |a, &b| a.max(b));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let sum: f64 = norms
        .iter()
        .map(|&n| {
            let r = n / scale;
            r * r
        })
        .sum();
    scale * sum.sqrt()
}

/// General p-combination of element norms
fn combine_p(norms: &[f64], p: f64) -> Result<f64> {
    if p.is_nan() {
        return Err(Error::InvalidArgument {
            arg: "p",
            reason: "norm order must not be NaN".to_string(),
        });
    }
    if p == 0.0 {
        return Ok(norms.iter().filter(|&&n| n != 0.0).count() as f64);
    }
    if p == f64::INFINITY {
        return Ok(norms.iter().fold(0.0f64, |a, &b| a.max(b)));
    }
    if p == f64::NEG_INFINITY {
        return Ok(if norms.is_empty() {
            0.0
        } else {
            norms.iter().copied().fold(f64::INFINITY, f64::min)
        });
    }
    if p == 2.0 {
        return Ok(combine_euclidean(norms));
    }
    if p == 1.0 {
        return Ok(norms.iter().sum());
    }
    let scale = norms.iter().fold(0.0f64, |a, &b| a.max(b));
    if scale == 0.0 || !scale.is_finite() {
        return Ok(scale);
    }
    let sum: f64 = norms.iter().map(|&n| (n / scale).powf(p)).sum();
    Ok(scale * sum.powf(1.0 / p))
}

impl<E: Norm> Norm for [E] {
    fn norm(&self) -> f64 {
        let norms: Vec<f64> = self.iter().map(Norm::norm).collect();
        combine_euclidean(&norms)
    }

    fn norm_p(&self, p: f64) -> Result<f64> {
        let norms: Vec<f64> = self.iter().map(Norm::norm).collect();
        combine_p(&norms, p)
    }
}

impl<E: Norm> Norm for Vec<E> {
    fn norm(&self) -> f64 {
        self.as_slice().norm()
    }

    fn norm_p(&self, p: f64) -> Result<f64> {
        self.as_slice().norm_p(p)
    }
}

impl<E: Norm, const N: usize> Norm for [E; N] {
    fn norm(&self) -> f64 {
        self.as_slice().norm()
    }

    fn norm_p(&self, p: f64) -> Result<f64> {
        self.as_slice().norm_p(p)
    }
}

impl<T: Scalar + Norm> Norm for Vector<T> {
    fn norm(&self) -> f64 {
        let norms: Vec<f64> = self.iter().map(|e| e.norm()).collect();
        combine_euclidean(&norms)
    }

    fn norm_p(&self, p: f64) -> Result<f64> {
        let norms: Vec<f64> = self.iter().map(|e| e.norm()).collect();
        combine_p(&norms, p)
    }
}

impl<T: Scalar + Norm> Norm for Matrix<T> {
    /// Entry-wise (Frobenius) norm
    fn norm(&self) -> f64 {
        let norms: Vec<f64> = self.iter().map(|e| e.norm()).collect();
        combine_euclidean(&norms)
    }

    fn norm_p(&self, p: f64) -> Result<f64> {
        let norms: Vec<f64> = self.iter().map(|e| e.norm()).collect();
        combine_p(&norms, p)
    }
}

/// p-norm of any [`Norm`] value
///
/// `norm(v, 2.0)` is the Euclidean norm; see [`Norm::norm_p`] for the
/// treatment of `p = 0` and the infinities.
pub fn norm<V: Norm + ?Sized>(v: &V, p: f64) -> Result<f64> {
    v.norm_p(p)
}

/// Return `v` scaled to unit p-norm
///
/// The empty vector normalizes to itself unchanged. Elements are divided
/// by the largest magnitude first and by the norm of that rescaled vector
/// second; materializing the norm of a subnormal vector would round it
/// back to the scale and produce a non-unit result.
pub fn normalize<T>(v: &Vector<T>, p: f64) -> Result<Vector<T>>
where
    T: Scalar + Magnitude + Norm,
{
    if v.is_empty() {
        return Ok(Vector::from_vec(Vec::new()));
    }
    let scale = v.iter().map(|e| e.magnitude()).fold(0.0f64, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        let nrm = v.norm_p(p)?;
        return Ok(v.map(|e| e.unscale(nrm)));
    }
    let rescaled = v.map(|e| e.unscale(scale));
    let nrm = rescaled.norm_p(p)?;
    Ok(rescaled.map(|e| e.unscale(nrm)))
}

/// Scale `v` to unit p-norm in place
pub fn normalize_mut<T>(v: &mut Vector<T>, p: f64) -> Result<()>
where
    T: Scalar + Magnitude + Norm,
{
    if v.is_empty() {
        return Ok(());
    }
    let scale = v.iter().map(|e| e.magnitude()).fold(0.0f64, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        let nrm = v.norm_p(p)?;
        for i in 0..v.len() {
            v.put(i, v.at(i).unscale(nrm));
        }
        return Ok(());
    }
    for i in 0..v.len() {
        v.put(i, v.at(i).unscale(scale));
    }
    let nrm = v.norm_p(p)?;
    for i in 0..v.len() {
        v.put(i, v.at(i).unscale(nrm));
    }
    Ok(())
}

/// Matrix norm selector for [`matrix_norm`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixNormOrder {
    /// Maximum absolute column sum (operator 1-norm)
    One,
    /// Maximum absolute row sum (operator ∞-norm)
    Inf,
    /// Entry-wise Euclidean norm
    Frobenius,
    /// Largest entry magnitude
    Max,
}

/// Matrix norm of the selected order
///
/// The spectral norm (largest singular value) lives in
/// [`spectral_norm`](crate::linalg::spectral_norm) since it needs
/// floating-point elements.
pub fn matrix_norm<T: Magnitude>(a: &Matrix<T>, ord: MatrixNormOrder) -> f64 {
    let (m, n) = a.shape();
    match ord {
        MatrixNormOrder::One => (0..n)
            .map(|j| (0..m).map(|i| a.at(i, j).magnitude()).sum())
            .fold(0.0f64, f64::max),
        MatrixNormOrder::Inf => (0..m)
            .map(|i| (0..n).map(|j| a.at(i, j).magnitude()).sum())
            .fold(0.0f64, f64::max),
        MatrixNormOrder::Frobenius => {
            let norms: Vec<f64> = a.iter().map(|e| e.magnitude()).collect();
            combine_euclidean(&norms)
        }
        MatrixNormOrder::Max => a.iter().map(|e| e.magnitude()).fold(0.0f64, f64::max),
    }
}
