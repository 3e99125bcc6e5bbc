//! Singular values by one-sided Jacobi, numerical rank, spectral norm
//!
//! The one-sided Jacobi iteration orthogonalizes the columns of `A` with
//! plane rotations; at convergence the column norms are the singular
//! values. Slower than bidiagonalization-based methods but simple and
//! accurate to high relative precision, which is what `rank` needs.

use crate::matrix::Matrix;
use crate::scalar::Real;

/// Jacobi sweep limit; convergence is normally reached in well under ten
const MAX_SWEEPS: usize = 100;

/// Singular values of a rectangular matrix, descending
///
/// Computed in `f64` regardless of the element type. Zero-sized input
/// yields an empty vector.
pub fn singular_values<T: Real>(a: &Matrix<T>) -> Vec<f64> {
    let (m, n) = a.shape();
    if m == 0 || n == 0 {
        return Vec::new();
    }

    // One-sided Jacobi wants at least as many rows as columns; run on the
    // transpose for wide input, the singular values are the same.
    let (rows, cols, wide) = if m >= n { (m, n, false) } else { (n, m, true) };

    // Column-major working copy in f64.
    let mut u = vec![0.0f64; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            let e = if wide { a.at(j, i) } else { a.at(i, j) };
            u[j * rows + i] = e.to_f64();
        }
    }

    let tol = f64::EPSILON * (rows as f64).sqrt();
    for _ in 0..MAX_SWEEPS {
        let mut rotated = false;
        for p in 0..cols {
            for q in (p + 1)..cols {
                let (mut alpha, mut beta, mut gamma) = (0.0f64, 0.0, 0.0);
                for i in 0..rows {
                    let up = u[p * rows + i];
                    let uq = u[q * rows + i];
                    alpha += up * up;
                    beta += uq * uq;
                    gamma += up * uq;
                }
                if gamma.abs() <= tol * (alpha * beta).sqrt() {
                    continue;
                }
                rotated = true;
                // Rotation angle that zeroes the (p, q) inner product.
                let zeta = (beta - alpha) / (2.0 * gamma);
                let t = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = c * t;
                for i in 0..rows {
                    let up = u[p * rows + i];
                    let uq = u[q * rows + i];
                    u[p * rows + i] = c * up - s * uq;
                    u[q * rows + i] = s * up + c * uq;
                }
            }
        }
        if !rotated {
            break;
        }
    }

    let mut sigma: Vec<f64> = (0..cols)
        .map(|j| {
            let col = &u[j * rows..(j + 1) * rows];
            col.iter().map(|&v| v * v).sum::<f64>().sqrt()
        })
        .collect();
    sigma.sort_by(|a, b| b.total_cmp(a));
    sigma
}

/// Numerical rank: count of singular values above `tol`
///
/// `tol = None` uses `max(m, n) · ε · σ_max` with `ε` the element type's
/// machine epsilon. A zero-sized matrix has rank 0.
pub fn rank<T: Real>(a: &Matrix<T>, tol: Option<f64>) -> usize {
    let (m, n) = a.shape();
    if m == 0 || n == 0 {
        return 0;
    }
    let sigma = singular_values(a);
    let threshold = match tol {
        Some(t) => t,
        None => {
            let sigma_max = sigma.first().copied().unwrap_or(0.0);
            m.max(n) as f64 * T::epsilon().to_f64() * sigma_max
        }
    };
    sigma.iter().filter(|&&s| s > threshold).count()
}

/// Spectral norm: the largest singular value
pub fn spectral_norm<T: Real>(a: &Matrix<T>) -> f64 {
    singular_values(a).first().copied().unwrap_or(0.0)
}
