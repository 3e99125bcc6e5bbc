//! Common test utilities and custom scalar algebras
#![allow(dead_code)]

use std::ops::{Add, Div, Mul, Neg, Sub};

use linr::prelude::*;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two scalars are close within tolerance
pub fn assert_close(x: f64, y: f64, rtol: f64, atol: f64, msg: &str) {
    assert_allclose_f64(&[x], &[y], rtol, atol, msg);
}

// ---------------------------------------------------------------------------
// GF(2): the two-element field. A field with no useful order, so it can
// factor and solve but cannot partial-pivot.
// ---------------------------------------------------------------------------

/// The field of integers mod 2
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gf2(pub u8);

impl Gf2 {
    pub fn new(v: u8) -> Self {
        Gf2(v & 1)
    }
}

impl Add for Gf2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Gf2(self.0 ^ rhs.0)
    }
}

impl Sub for Gf2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl Mul for Gf2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Gf2(self.0 & rhs.0)
    }
}

impl Div for Gf2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // Division by zero is the caller's bug in a test algebra.
        assert_eq!(rhs.0, 1, "division by zero in GF(2)");
        self
    }
}

impl Neg for Gf2 {
    type Output = Self;
    fn neg(self) -> Self {
        self
    }
}

impl Scalar for Gf2 {
    fn zero() -> Self {
        Gf2(0)
    }
    fn one() -> Self {
        Gf2(1)
    }
    // try_abs stays at the default None: no magnitude, no pivoting.
}

impl Field for Gf2 {
    fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(self)
        }
    }
}

// ---------------------------------------------------------------------------
// Rational numbers over i64: an ordered, exact field. Round-trips through
// LU are bit-exact, pivoted or not.
// ---------------------------------------------------------------------------

/// Exact rational p/q with q > 0, always in lowest terms
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Rational {
    pub fn new(num: i64, den: i64) -> Self {
        assert_ne!(den, 0, "rational with zero denominator");
        let sign = if den < 0 { -1 } else { 1 };
        let g = gcd(num, den).max(1);
        Rational {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    pub fn int(v: i64) -> Self {
        Rational { num: v, den: 1 }
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Rational::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Rational::new(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Rational::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Rational {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        assert_ne!(rhs.num, 0, "division by zero rational");
        Rational::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Scalar for Rational {
    fn zero() -> Self {
        Rational::int(0)
    }
    fn one() -> Self {
        Rational::int(1)
    }
    fn try_abs(self) -> Option<f64> {
        Some(self.to_f64().abs())
    }
}

impl Field for Rational {
    fn inv(self) -> Option<Self> {
        if self.num == 0 {
            None
        } else {
            Some(Rational::new(self.den, self.num))
        }
    }
}

// ---------------------------------------------------------------------------
// Quaternions over f64: a non-commutative division algebra. Multiplication
// order is observable, which is exactly what the kernels must preserve.
// ---------------------------------------------------------------------------

/// Hamilton quaternion w + xi + yj + zk
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    pub fn real(w: f64) -> Self {
        Quaternion::new(w, 0.0, 0.0, 0.0)
    }

    pub fn i() -> Self {
        Quaternion::new(0.0, 1.0, 0.0, 0.0)
    }

    pub fn j() -> Self {
        Quaternion::new(0.0, 0.0, 1.0, 0.0)
    }

    pub fn k() -> Self {
        Quaternion::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn norm_sqr(self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Quaternion::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Quaternion::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Quaternion::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

impl Div for Quaternion {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // Right division: self * rhs^-1.
        let n = rhs.norm_sqr();
        assert!(n != 0.0, "division by zero quaternion");
        let inv = Quaternion::new(rhs.w / n, -rhs.x / n, -rhs.y / n, -rhs.z / n);
        self * inv
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Quaternion::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Scalar for Quaternion {
    const COMMUTATIVE: bool = false;

    fn zero() -> Self {
        Quaternion::real(0.0)
    }
    fn one() -> Self {
        Quaternion::real(1.0)
    }
    fn conj(self) -> Self {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }
    fn try_abs(self) -> Option<f64> {
        Some(self.norm_sqr().sqrt())
    }
}

impl Field for Quaternion {
    fn inv(self) -> Option<Self> {
        let n = self.norm_sqr();
        if n == 0.0 {
            None
        } else {
            Some(Quaternion::new(self.w / n, -self.x / n, -self.y / n, -self.z / n))
        }
    }
}

impl Magnitude for Quaternion {
    fn magnitude_squared(self) -> f64 {
        self.norm_sqr()
    }

    fn unscale(self, factor: f64) -> Self {
        Quaternion::new(
            self.w / factor,
            self.x / factor,
            self.y / factor,
            self.z / factor,
        )
    }
}
