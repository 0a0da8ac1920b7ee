//! Exact integer fractions
//!
//! A `Copy` value type for rationals over `i64`, always held in lowest terms
//! with a positive denominator:
//!
//! - construction rejects a zero denominator
//! - `+ - *` as operators (total); division and reciprocal are fallible
//! - reduction via the classical Euclidean GCD after every operation

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors that can occur when building or inverting a fraction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// The denominator (or the numerator being inverted) is zero.
    #[error("denominator must not be zero")]
    ZeroDenominator,
}

/// A specialized `Result` type for fraction operations.
pub type Result<T> = std::result::Result<T, FractionError>;

/// A rational number `num/den` in lowest terms, `den > 0`.
///
/// The reduced-form invariant makes derived equality exact: `1/2 == 2/4`
/// because both normalize to the same representation at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// The additive identity, `0/1`.
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };
    /// The multiplicative identity, `1/1`.
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    /// Creates a fraction, reducing it to lowest terms.
    pub fn new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self { num, den }.reduced())
    }

    /// Numerator of the reduced form (carries the sign).
    pub fn numer(&self) -> i64 {
        self.num
    }

    /// Denominator of the reduced form, always positive.
    pub fn denom(&self) -> i64 {
        self.den
    }

    /// The fraction's value as a double.
    pub fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Multiplicative inverse; fails when the fraction is zero.
    pub fn recip(&self) -> Result<Self> {
        Self::new(self.den, self.num)
    }

    /// Division; fails when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(*self * other.recip()?)
    }

    fn reduced(self) -> Self {
        let g = gcd(self.num, self.den);
        let mut num = self.num / g;
        let mut den = self.den / g;
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }
}

/// Greatest common divisor by Euclid's algorithm; positive for nonzero input.
fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

impl From<i64> for Fraction {
    fn from(num: i64) -> Self {
        Self { num, den: 1 }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction {
            num: self.num * rhs.den + self.den * rhs.num,
            den: self.den * rhs.den,
        }
        .reduced()
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction {
            num: self.num * rhs.den - self.den * rhs.num,
            den: self.den * rhs.den,
        }
        .reduced()
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction {
            num: self.num * rhs.num,
            den: self.den * rhs.den,
        }
        .reduced()
    }
}

impl Mul<i64> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: i64) -> Fraction {
        Fraction {
            num: self.num * rhs,
            den: self.den,
        }
        .reduced()
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::ZERO
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::ONE
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
