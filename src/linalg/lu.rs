//! LU factorization, linear solve, and determinants built on it
//!
//! Elimination works over any [`Field`]: multipliers are formed as
//! `a[r][c] * inv(pivot)` and applied on the left, and back-substitution
//! multiplies by the inverted pivot on the left, so the factorization is
//! correct for non-commutative division algebras as well.

use std::any::type_name;

use crate::error::{Error, Result};
use crate::matrix::{Matrix, Vector};
use crate::scalar::{Complex, Field, Magnitude, Real, Scalar};

/// Pivoting strategy for [`lu`]
///
/// `Partial` needs a magnitude to compare pivot candidates by, which not
/// every scalar algebra has (finite fields have no useful order). Requesting
/// it for such a type fails eagerly with [`Error::Interface`]; `None` never
/// compares and works over any field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pivot {
    /// Row-swap each step to the largest-magnitude entry in the column
    Partial,
    /// Take the diagonal entry as-is
    None,
}

/// Packed LU factorization of a square matrix
///
/// A single matrix holds the unit-lower-triangular multipliers strictly
/// below the diagonal and `U` on and above it. `pivots[k]` records the row
/// swapped into position `k` at step `k`; `num_swaps` counts the actual
/// swaps for the determinant sign.
#[derive(Clone, Debug)]
pub struct LuFactorization<T: Field> {
    lu: Matrix<T>,
    pivots: Vec<usize>,
    num_swaps: usize,
}

/// Factor a square matrix as `P·A = L·U`
///
/// Fails with `DimensionMismatch` for non-square input, `Interface` when
/// partial pivoting is requested for a magnitude-less scalar type, and
/// `Singular` when elimination hits a non-invertible pivot.
pub fn lu<T: Field>(a: &Matrix<T>, pivot: Pivot) -> Result<LuFactorization<T>> {
    let (m, n) = a.shape();
    if m != n {
        return Err(Error::dimension_mismatch("lu", &[m, m], &[m, n]));
    }
    if pivot == Pivot::Partial && T::one().try_abs().is_none() {
        return Err(Error::interface(
            type_name::<T>(),
            "magnitude comparison for partial pivoting",
        ));
    }

    let packed = Matrix::from_vec(a.to_vec(), n, n)?;
    let mut pivots = Vec::with_capacity(n);
    let mut num_swaps = 0;

    for k in 0..n {
        let mut pivot_row = k;
        if pivot == Pivot::Partial {
            let mut best = packed.at(k, k).try_abs().unwrap_or(0.0);
            for r in (k + 1)..n {
                let mag = packed.at(r, k).try_abs().unwrap_or(0.0);
                if mag > best {
                    best = mag;
                    pivot_row = r;
                }
            }
        }
        if pivot_row != k {
            for j in 0..n {
                let tmp = packed.at(k, j);
                packed.put(k, j, packed.at(pivot_row, j));
                packed.put(pivot_row, j, tmp);
            }
            num_swaps += 1;
        }
        pivots.push(pivot_row);

        let p = packed.at(k, k);
        let p_inv = match p.inv() {
            Some(v) => v,
            None => return Err(Error::Singular { step: k }),
        };
        for r in (k + 1)..n {
            let mult = packed.at(r, k) * p_inv;
            packed.put(r, k, mult);
            for c in (k + 1)..n {
                packed.put(r, c, packed.at(r, c) - mult * packed.at(k, c));
            }
        }
    }

    Ok(LuFactorization {
        lu: packed,
        pivots,
        num_swaps,
    })
}

impl<T: Field> LuFactorization<T> {
    /// Order of the factored matrix
    pub fn order(&self) -> usize {
        self.lu.rows()
    }

    /// Number of row swaps performed during elimination
    pub fn num_swaps(&self) -> usize {
        self.num_swaps
    }

    /// Solve `A·x = b` by forward then backward substitution
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let n = self.order();
        if b.len() != n {
            return Err(Error::dimension_mismatch("solve", &[n], &[b.len()]));
        }

        // Permute b the way elimination permuted the rows of A.
        let mut y = b.to_vec();
        for (k, &p) in self.pivots.iter().enumerate() {
            if p != k {
                y.swap(k, p);
            }
        }

        // Forward: L has a unit diagonal, nothing to invert.
        for i in 1..n {
            let mut acc = y[i];
            for j in 0..i {
                acc = acc - self.lu.at(i, j) * y[j];
            }
            y[i] = acc;
        }

        // Backward: inverse applied on the left of the partial sum.
        for i in (0..n).rev() {
            let mut acc = y[i];
            for j in (i + 1)..n {
                acc = acc - self.lu.at(i, j) * y[j];
            }
            let u_inv = match self.lu.at(i, i).inv() {
                Some(v) => v,
                None => return Err(Error::Singular { step: i }),
            };
            y[i] = u_inv * acc;
        }

        Ok(Vector::from_vec(y))
    }

    /// Determinant as the signed product of the `U` diagonal
    pub fn det(&self) -> T {
        let n = self.order();
        let mut d = T::one();
        for i in 0..n {
            d = d * self.lu.at(i, i);
        }
        if self.num_swaps % 2 == 1 {
            d = -d;
        }
        d
    }

    /// Entry `(i, j)` of the packed factorization
    pub fn packed(&self, i: usize, j: usize) -> Result<T> {
        self.lu.get(i, j)
    }
}

/// Solve `A·x = b` with the given pivoting strategy
pub fn solve<T: Field>(a: &Matrix<T>, b: &Vector<T>, pivot: Pivot) -> Result<Vector<T>> {
    lu(a, pivot)?.solve(b)
}

/// Determinant of a square matrix
///
/// Pivots partially when the scalar type carries a magnitude, unpivoted
/// otherwise. A singular matrix yields an exact `zero()`, never an error.
pub fn det<T: Field>(a: &Matrix<T>) -> Result<T> {
    let (m, n) = a.shape();
    if m != n {
        return Err(Error::dimension_mismatch("det", &[m, m], &[m, n]));
    }
    if n == 0 {
        return Ok(T::one());
    }
    if n == 1 {
        return Ok(a.at(0, 0));
    }
    let pivot = if T::one().try_abs().is_some() {
        Pivot::Partial
    } else {
        Pivot::None
    };
    match lu(a, pivot) {
        Ok(f) => Ok(f.det()),
        Err(Error::Singular { .. }) => Ok(T::zero()),
        Err(e) => Err(e),
    }
}

/// Scalar types whose determinant can be reassembled from log-magnitude and
/// sign
///
/// `from_log` receives `ln|det|` and the unit-magnitude sign factor (or
/// `zero()` for a singular matrix) and produces `log(det)` in the scalar's
/// own algebra.
pub trait LogDet: Field + Magnitude {
    /// Rebuild `log(det)` from its magnitude-log and sign parts
    fn from_log(ln_abs: f64, sign: Self) -> Result<Self>;
}

macro_rules! impl_logdet_real {
    ($($t:ty),*) => {
        $(
            impl LogDet for $t {
                fn from_log(ln_abs: f64, sign: Self) -> Result<Self> {
                    if sign < 0.0 {
                        return Err(Error::Domain {
                            op: "logdet",
                            reason: "determinant is negative; its real logarithm does not exist",
                        });
                    }
                    // Singular: sign is zero and ln_abs is -inf already.
                    Ok(ln_abs as $t)
                }
            }
        )*
    };
}

impl_logdet_real!(f32, f64);

impl<T: Real> LogDet for Complex<T> {
    fn from_log(ln_abs: f64, sign: Self) -> Result<Self> {
        // Negating the sign can leave -0.0 in the imaginary part, and
        // atan2(-0.0, -1.0) is -pi; adding zero canonicalizes the signed
        // zeros so the phase stays on the principal branch.
        let sign = sign + Self::zero();
        Ok(Complex::new(T::from_f64(ln_abs), sign.phase()))
    }
}

/// `(ln|det A|, sign)` for a square matrix
///
/// Defined for every magnitude-bearing field: the sign is `±1` for real
/// algebras and a unit-magnitude scalar for complex ones. A singular matrix
/// yields `(-∞, zero())`. Overflow-safe for determinants whose magnitude
/// exceeds the floating-point range, since magnitudes are accumulated in
/// log space.
pub fn logabsdet<T: Field + Magnitude>(a: &Matrix<T>) -> Result<(f64, T)> {
    let (m, n) = a.shape();
    if m != n {
        return Err(Error::dimension_mismatch("logabsdet", &[m, m], &[m, n]));
    }
    if n == 0 {
        return Ok((0.0, T::one()));
    }
    let pivot = if T::one().try_abs().is_some() {
        Pivot::Partial
    } else {
        Pivot::None
    };
    let f = match lu(a, pivot) {
        Ok(f) => f,
        Err(Error::Singular { .. }) => return Ok((f64::NEG_INFINITY, T::zero())),
        Err(e) => return Err(e),
    };
    let mut ln_abs = 0.0f64;
    let mut sign = T::one();
    for i in 0..n {
        let d = f.lu.at(i, i);
        let mag = d.magnitude();
        ln_abs += mag.ln();
        sign = sign * d.unscale(mag);
    }
    if f.num_swaps % 2 == 1 {
        sign = -sign;
    }
    Ok((ln_abs, sign))
}

/// `log(det A)` in the scalar's own algebra
///
/// Real algebras reject a negative determinant with a domain error and map
/// a singular matrix to `-∞`; complex algebras return the principal complex
/// logarithm.
pub fn logdet<T: LogDet>(a: &Matrix<T>) -> Result<T> {
    let (ln_abs, sign) = logabsdet(a)?;
    T::from_log(ln_abs, sign)
}
