//! Generic complex number type
//!
//! `Complex<T>` stores real and imaginary parts of any [`Real`] component
//! type in interleaved order (`re`, `im`), matching the conventional numpy
//! layout.
//!
//! Arithmetic follows the standard definitions:
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`

use super::{Field, Magnitude, Real, Scalar};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Complex number over a floating-point component type
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex<T> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

impl<T: Real> Complex<T> {
    /// Create a new complex number
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// The imaginary unit `i`
    #[inline]
    pub fn i() -> Self {
        Self {
            re: T::from_f64(0.0),
            im: T::from_f64(1.0),
        }
    }

    /// Create a complex number from polar form: `r * e^(iθ)`
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Squared magnitude: `|z|² = re² + im²` in the component type
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle (argument): `atan2(im, re)` in radians
    #[inline]
    pub fn phase(self) -> T {
        self.im.atan2(self.re)
    }

    /// Complex conjugate: `conj(a + bi) = a - bi`
    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Reciprocal: `1/z = conj(z)/|z|²`
    #[inline]
    pub fn recip(self) -> Self {
        let d = self.norm_sqr();
        Self {
            re: self.re / d,
            im: -self.im / d,
        }
    }
}

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T: Real> Div for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let d = rhs.norm_sqr();
        Self {
            re: (self.re * rhs.re + self.im * rhs.im) / d,
            im: (self.im * rhs.re - self.re * rhs.im) / d,
        }
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Real + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::from_f64(0.0) {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<T: Real> Scalar for Complex<T> {
    #[inline]
    fn zero() -> Self {
        Self {
            re: T::from_f64(0.0),
            im: T::from_f64(0.0),
        }
    }

    #[inline]
    fn one() -> Self {
        Self {
            re: T::from_f64(1.0),
            im: T::from_f64(0.0),
        }
    }

    #[inline]
    fn conj(self) -> Self {
        self.conjugate()
    }

    #[inline]
    fn try_abs(self) -> Option<f64> {
        Some(Magnitude::magnitude(self))
    }
}

impl<T: Real> Field for Complex<T> {
    #[inline]
    fn inv(self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

impl<T: Real> Magnitude for Complex<T> {
    #[inline]
    fn magnitude_squared(self) -> f64 {
        let re = self.re.to_f64();
        let im = self.im.to_f64();
        re * re + im * im
    }

    #[inline]
    fn unscale(self, factor: f64) -> Self {
        Self {
            re: T::from_f64(self.re.to_f64() / factor),
            im: T::from_f64(self.im.to_f64() / factor),
        }
    }
}
