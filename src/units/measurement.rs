use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::approx_eq;

/// A dimensionless scalar whose equality is tolerance-based.
///
/// `a == b` holds when `|a - b| <= TOLERANCE`. This relation is not
/// transitive: chains of near-equal values may drift apart.
#[derive(Debug, Clone, Copy)]
pub struct Measurement(f64);

impl Measurement {
    /// The zero measurement.
    pub const ZERO: Self = Self(0.0);

    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Square root.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    /// Integer power.
    #[must_use]
    pub fn powi(self, n: i32) -> Self {
        Self(self.0.powi(n))
    }

    /// Real power.
    #[must_use]
    pub fn powf(self, n: f64) -> Self {
        Self(self.0.powf(n))
    }

    /// Returns `true` if the value is within tolerance of zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        approx_eq(self.0, 0.0)
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.0, other.0)
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Measurement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Measurement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Measurement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Measurement {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div for Measurement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Div<f64> for Measurement {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Neg for Measurement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
