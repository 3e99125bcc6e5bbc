//! Type promotion rules for mixed-scalar operations
//!
//! Follows NumPy-like promotion over the `{f32, f64} × {real, complex}`
//! product, which is closed under it:
//! - Complex wins over real
//! - Wider precision wins over narrower
//! - `f64 × Complex<f32>` promotes both axes, to `Complex<f64>`
//!
//! [`TryCast`] is the checked inverse direction: narrowing a complex value
//! into a real target fails with [`Error::Inexact`](crate::error::Error)
//! when the imaginary part is nonzero.

use super::{Complex, Scalar};
use crate::error::{Error, Result};

/// Promotion of a pair of scalar types to their common element type
///
/// `scale_promoting` and friends use this to pick the element type of a
/// mixed-type product, e.g. an `f32` scale factor applied to a
/// `Complex<f64>` container stays in double-precision complex.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The common element type of `Self` and `Rhs`
    type Output: Scalar;

    /// Convert the left operand to the common type
    fn promote_left(self) -> <Self as Promote<Rhs>>::Output;

    /// Convert the right operand to the common type
    fn promote_right(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Checked conversion between scalar types
///
/// Widening and real-to-complex conversions always succeed; complex-to-real
/// succeeds only when the imaginary part is exactly zero.
pub trait TryCast<S: Scalar>: Scalar {
    /// Convert `value` into `Self`, failing with
    /// [`Error::Inexact`](crate::error::Error) when the value cannot be
    /// represented
    fn try_cast(value: S) -> Result<Self>;
}

macro_rules! impl_promote {
    ($lhs:ty, $rhs:ty, $out:ty, $left:expr, $right:expr) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn promote_left(self) -> $out {
                let f: fn($lhs) -> $out = $left;
                f(self)
            }

            #[inline]
            fn promote_right(rhs: $rhs) -> $out {
                let f: fn($rhs) -> $out = $right;
                f(rhs)
            }
        }
    };
}

type C32 = Complex<f32>;
type C64 = Complex<f64>;

#[inline]
fn widen(z: C32) -> C64 {
    Complex::new(z.re as f64, z.im as f64)
}

#[inline]
fn re32(v: f32) -> C32 {
    Complex::new(v, 0.0)
}

#[inline]
fn re64(v: f64) -> C64 {
    Complex::new(v, 0.0)
}

// Real × real
impl_promote!(f32, f32, f32, |l| l, |r| r);
impl_promote!(f32, f64, f64, |l| l as f64, |r| r);
impl_promote!(f64, f32, f64, |l| l, |r| r as f64);
impl_promote!(f64, f64, f64, |l| l, |r| r);

// Real × complex: the result is complex at the wider precision
impl_promote!(f32, C32, C32, re32, |r| r);
impl_promote!(f32, C64, C64, |l| re64(l as f64), |r| r);
impl_promote!(f64, C32, C64, re64, widen);
impl_promote!(f64, C64, C64, re64, |r| r);

// Complex × real
impl_promote!(C32, f32, C32, |l| l, re32);
impl_promote!(C32, f64, C64, widen, re64);
impl_promote!(C64, f32, C64, |l| l, |r| re64(r as f64));
impl_promote!(C64, f64, C64, |l| l, re64);

// Complex × complex
impl_promote!(C32, C32, C32, |l| l, |r| r);
impl_promote!(C32, C64, C64, widen, |r| r);
impl_promote!(C64, C32, C64, |l| l, widen);
impl_promote!(C64, C64, C64, |l| l, |r| r);

macro_rules! impl_cast_infallible {
    ($target:ty, $source:ty, $conv:expr) => {
        impl TryCast<$source> for $target {
            #[inline]
            fn try_cast(value: $source) -> Result<Self> {
                let f: fn($source) -> $target = $conv;
                Ok(f(value))
            }
        }
    };
}

// Identity and precision changes within the real axis. Precision narrowing
// rounds; it is not an inexactness in the domain sense.
impl_cast_infallible!(f32, f32, |v| v);
impl_cast_infallible!(f64, f64, |v| v);
impl_cast_infallible!(f64, f32, |v| v as f64);
impl_cast_infallible!(f32, f64, |v| v as f32);

// Real to complex: imaginary part is zero.
impl_cast_infallible!(C32, f32, re32);
impl_cast_infallible!(C32, f64, |v| re32(v as f32));
impl_cast_infallible!(C64, f32, |v| re64(v as f64));
impl_cast_infallible!(C64, f64, re64);

// Complex precision changes.
impl_cast_infallible!(C32, C32, |v| v);
impl_cast_infallible!(C64, C64, |v| v);
impl_cast_infallible!(C64, C32, widen);
impl_cast_infallible!(C32, C64, |v| Complex::new(v.re as f32, v.im as f32));

macro_rules! impl_cast_complex_to_real {
    ($target:ty, $source:ty, $conv:expr) => {
        impl TryCast<$source> for $target {
            #[inline]
            fn try_cast(value: $source) -> Result<Self> {
                if value.im != Default::default() {
                    return Err(Error::Inexact {
                        reason: format!(
                            "cannot store complex value {} into a real container",
                            value
                        ),
                    });
                }
                let f: fn($source) -> $target = $conv;
                Ok(f(value))
            }
        }
    };
}

impl_cast_complex_to_real!(f32, C32, |v| v.re);
impl_cast_complex_to_real!(f64, C64, |v| v.re);
impl_cast_complex_to_real!(f64, C32, |v| v.re as f64);
impl_cast_complex_to_real!(f32, C64, |v| v.re as f32);
