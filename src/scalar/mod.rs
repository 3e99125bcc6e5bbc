//! Scalar algebra traits: the contract a type must satisfy to be a
//! matrix/vector element
//!
//! The hierarchy is layered by capability:
//!
//! - [`Scalar`]: ring operations (`+`, `-`, `*`, negation), `zero`, `one`,
//!   conjugation. Enough for containers, axpy-style updates and structural
//!   predicates.
//! - [`Field`]: adds division and explicit inversion. Required by LU
//!   factorization and solves.
//! - [`Magnitude`]: adds a real absolute value. Required by norms,
//!   `normalize`, and pivot selection.
//! - [`Real`]: the floating-point leaves (`f32`, `f64`), tying into
//!   [`num_traits::Float`].
//!
//! Non-commutative algebras are first-class: set
//! [`Scalar::COMMUTATIVE`] to `false` and every kernel preserves the
//! multiplication order written in its contract.

pub mod complex;
pub mod promotion;

pub use complex::Complex;
pub use promotion::{Promote, TryCast};

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Minimal operation set for a matrix/vector element
///
/// Implementors form a (possibly non-commutative) ring. `conj` defaults to
/// the identity, which is correct for real-like types; complex and
/// quaternion-like algebras override it.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Whether multiplication commutes for this algebra
    ///
    /// Kernels never rely on this to reorder products; it exists so callers
    /// and tests can branch on the algebra's character.
    const COMMUTATIVE: bool = true;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Conjugate; the identity for real-like types
    fn conj(self) -> Self {
        self
    }

    /// Magnitude of this value as an `f64`, when the algebra has one
    ///
    /// This is the runtime capability gate for partial pivoting: a type that
    /// returns `None` has no total order on magnitudes, and pivoted LU
    /// requests for it fail with [`Error::Interface`](crate::error::Error)
    /// instead of silently degrading. Types implementing [`Magnitude`]
    /// should override this consistently with
    /// [`Magnitude::magnitude`].
    fn try_abs(self) -> Option<f64> {
        None
    }
}

/// Scalars with division: the contract for LU factorization and solves
///
/// For non-commutative algebras the library always applies the inverse on
/// the left (`inv(pivot) * entry`), matching the back-substitution
/// convention.
pub trait Field: Scalar + Div<Output = Self> {
    /// Multiplicative inverse, or `None` when the element is not invertible
    fn inv(self) -> Option<Self>;
}

/// Scalars with a real absolute value
///
/// Needed by vector and matrix norms, `normalize`, and pivot selection.
/// Magnitudes are accumulated in `f64` so that narrow element types (for
/// example `f32` or subnormal values) do not overflow or underflow inside a
/// norm computation.
pub trait Magnitude: Scalar {
    /// Squared magnitude as `f64`
    fn magnitude_squared(self) -> f64;

    /// Magnitude as `f64`
    fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Divide this value by a positive real factor
    ///
    /// Used by `normalize` to rescale elements by a norm computed in `f64`.
    fn unscale(self, factor: f64) -> Self;
}

/// Floating-point leaf scalars: `f32` and `f64`
///
/// Bridges the crate's algebra traits to [`num_traits::Float`] so generic
/// numeric code (Jacobi sweeps, tolerances) can use the full float surface.
pub trait Real: Field + Magnitude + num_traits::Float {
    /// Convert from `f64`
    fn from_f64(v: f64) -> Self;

    /// Convert to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_real_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn try_abs(self) -> Option<f64> {
                Some((self as f64).abs())
            }
        }

        impl Field for $t {
            #[inline]
            fn inv(self) -> Option<Self> {
                if self == 0.0 {
                    None
                } else {
                    Some(1.0 / self)
                }
            }
        }

        impl Magnitude for $t {
            #[inline]
            fn magnitude_squared(self) -> f64 {
                let v = self as f64;
                v * v
            }

            #[inline]
            fn magnitude(self) -> f64 {
                (self as f64).abs()
            }

            #[inline]
            fn unscale(self, factor: f64) -> Self {
                (self as f64 / factor) as $t
            }
        }

        impl Real for $t {
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_real_scalar!(f32);
impl_real_scalar!(f64);

// Signed integers participate as commutative rings: containers, axpy and
// structural predicates work; division-based operations require a Field.
macro_rules! impl_int_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn try_abs(self) -> Option<f64> {
                Some((self as f64).abs())
            }
        }
    };
}

impl_int_scalar!(i8);
impl_int_scalar!(i16);
impl_int_scalar!(i32);
impl_int_scalar!(i64);
