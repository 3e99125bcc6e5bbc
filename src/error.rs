//! Error types for linr

use thiserror::Error;

/// Result type alias using linr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in linr operations
///
/// Every error is raised eagerly at the point of detection and surfaced to
/// the caller unchanged; no operation retries or swallows an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Incompatible shapes or lengths for an operation
    #[error("dimension mismatch in {op}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// The operation that rejected its operands
        op: &'static str,
        /// Expected extents
        expected: Vec<usize>,
        /// Actual extents
        got: Vec<usize>,
    },

    /// Index exceeds a container's extent
    #[error("index {index} out of bounds for extent {len}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Extent of the indexed dimension
        len: usize,
    },

    /// Mathematically undefined result in the requested domain
    #[error("domain error in {op}: {reason}")]
    Domain {
        /// The operation with an undefined result
        op: &'static str,
        /// Why the result is undefined
        reason: &'static str,
    },

    /// Invalid parameter provided to an operation
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A value cannot be represented in the target element type without loss
    #[error("inexact conversion: {reason}")]
    Inexact {
        /// What was lost
        reason: String,
    },

    /// A scalar type lacks a capability required by the requested mode
    #[error("scalar type `{type_name}` lacks required capability: {capability}")]
    Interface {
        /// Name of the offending scalar type
        type_name: &'static str,
        /// The missing capability
        capability: &'static str,
    },

    /// Factorization hit a non-invertible pivot
    #[error("matrix is singular: non-invertible pivot at elimination step {step}")]
    Singular {
        /// Elimination step at which the pivot failed
        step: usize,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, expected: &[usize], got: &[usize]) -> Self {
        Self::DimensionMismatch {
            op,
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an index-out-of-bounds error
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an interface error for a scalar type missing a capability
    pub fn interface(type_name: &'static str, capability: &'static str) -> Self {
        Self::Interface {
            type_name,
            capability,
        }
    }
}
