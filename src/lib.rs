//! # linr
//!
//! **Correctness-first generic linear-algebra kernels for Rust.**
//!
//! linr provides determinant, rank, norms, LU-based solves, and scaled
//! in-place updates over dense matrices and vectors - generic over a
//! user-extensible scalar algebra, commutative or not.
//!
//! ## Why linr?
//!
//! - **Generic over the algebra**: implement [`Scalar`](scalar::Scalar) (and
//!   [`Field`](scalar::Field) where division is needed) for your own number
//!   type - finite fields, rationals, quaternions - and every kernel works
//! - **Non-commutative aware**: every kernel fixes its multiplication order,
//!   so quaternion-like algebras get well-defined answers
//! - **Zero-copy views**: sub-matrices, rows, columns, diagonals, and
//!   transposes alias the backing buffer instead of copying
//! - **Honest failure modes**: singular factorizations, shape mismatches,
//!   lossy casts, and missing scalar capabilities each surface as a distinct
//!   [`Error`](error::Error) variant
//!
//! ## Features
//!
//! - **Containers**: dense [`Matrix`](matrix::Matrix), strided
//!   [`Vector`](matrix::Vector), packed [`Diagonal`](matrix::Diagonal)
//! - **Elementary ops**: `det`, `rank`, `tr`, `cross`, structural predicates
//!   (`issymmetric`, `ishermitian`, `istriu`, `istril`, `isbanded`, `isdiag`)
//! - **Norms**: recursive p-norms through nested containers, matrix norms,
//!   `normalize` with overflow-safe rescaling
//! - **Updates**: `axpy` / `axpby` (plain and index-ranged), scalar and
//!   diagonal scaling from either side, promoting out-of-place scaling
//! - **Solves**: LU with optional partial pivoting, `solve`, `logdet` /
//!   `logabsdet` stable beyond the floating-point range
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linr::prelude::*;
//!
//! let a = Matrix::from_vec(vec![4.0, 3.0, 6.0, 3.0], 2, 2)?;
//! let b = Vector::from_vec(vec![10.0, 12.0]);
//!
//! let d = det(&a)?;
//! let x = solve(&a, &b, Pivot::Partial)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod scalar;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::linalg::{
        axpby, axpy, axpy_indexed, cross, det, isbanded, isdiag, ishermitian, issymmetric,
        istril, istriu, logabsdet, logdet, lu, matrix_norm, norm, normalize, normalize_mut,
        rank, scale_cols, scale_left, scale_promoting, scale_right, scale_rows, solve,
        spectral_norm, tr, LuFactorization, MatrixNormOrder, Norm, Pivot,
    };
    pub use crate::matrix::{Diagonal, Matrix, Vector};
    pub use crate::scalar::{Complex, Field, Magnitude, Promote, Real, Scalar, TryCast};
}
