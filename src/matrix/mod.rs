//! Dense containers: matrices, vectors, diagonals, and their views
//!
//! All containers are parametrized over a [`Scalar`](crate::scalar::Scalar)
//! element type and share a common `Arc`-backed storage model: views
//! (sub-matrices, rows, columns, diagonals, transposes) alias the backing
//! buffer instead of copying, and mutation through a view is visible to
//! every other handle.

mod diagonal;
mod layout;
#[allow(clippy::module_inception)]
mod matrix;
mod storage;
mod vector;

pub use diagonal::Diagonal;
pub use matrix::Matrix;
pub use vector::Vector;
