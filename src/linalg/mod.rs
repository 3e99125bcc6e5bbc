//! Linear-algebra kernels over generic scalar algebras
//!
//! Operations are grouped by concern: `elementary` for trace, cross product
//! and structural predicates, `norms` for vector/matrix norms and
//! normalization, `update` for axpy-style scaled accumulation and scaling
//! multiplication, `lu` for factorization, solve and determinants, and
//! `svd` for singular values and rank.

mod elementary;
mod lu;
mod norms;
mod svd;
mod update;

pub use elementary::{cross, isbanded, isdiag, ishermitian, issymmetric, istril, istriu, tr};
pub use lu::{det, logabsdet, logdet, lu, solve, LogDet, LuFactorization, Pivot};
pub use norms::{
    matrix_norm, norm, normalize, normalize_mut, MatrixNormOrder, Norm,
};
pub use svd::{rank, singular_values, spectral_norm};
pub use update::{
    axpby, axpy, axpy_indexed, scale_cols, scale_left, scale_promoting, scale_promoting_matrix,
    scale_right, scale_rows,
};
