use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use uom::si::angle::{degree, radian};
use uom::si::f64::Angle as PlaneAngle;

use crate::math::approx_eq;

/// A signed plane angle backed by a `uom` angle.
///
/// Equality compares radian values within tolerance; use
/// [`Angle::normalized`] first to compare angles modulo a full turn.
#[derive(Debug, Clone, Copy)]
pub struct Angle(PlaneAngle);

impl Angle {
    #[must_use]
    pub fn zero() -> Self {
        Self::from_radians(0.0)
    }

    /// Quarter turn.
    #[must_use]
    pub fn right() -> Self {
        Self::from_radians(PI / 2.0)
    }

    /// Half turn.
    #[must_use]
    pub fn straight() -> Self {
        Self::from_radians(PI)
    }

    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self(PlaneAngle::new::<radian>(radians))
    }

    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(PlaneAngle::new::<degree>(degrees))
    }

    /// Wraps a `uom` angle.
    #[must_use]
    pub fn from_quantity(angle: PlaneAngle) -> Self {
        Self(angle)
    }

    /// The underlying `uom` angle.
    #[must_use]
    pub fn quantity(self) -> PlaneAngle {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f64 {
        self.0.get::<radian>()
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0.get::<degree>()
    }

    #[must_use]
    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    #[must_use]
    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    /// The equivalent angle in `[0, 2π)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let r = self.radians().rem_euclid(TAU);
        if approx_eq(r, TAU) {
            Self::zero()
        } else {
            Self::from_radians(r)
        }
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `true` if the angle is within tolerance of zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        approx_eq(self.radians(), 0.0)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.radians(), other.radians())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn degrees_round_trip() {
        let a = Angle::from_degrees(90.0);
        assert_eq!(a, Angle::right());
        assert_abs_diff_eq!(a.degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn normalization_wraps_into_one_turn() {
        assert_eq!(Angle::from_degrees(-90.0).normalized(), Angle::from_degrees(270.0));
        assert_eq!(Angle::from_degrees(720.0).normalized(), Angle::zero());
        assert_eq!(Angle::from_degrees(199.0).normalized(), Angle::from_degrees(199.0));
    }

    #[test]
    fn backed_by_uom_angle() {
        let half = Angle::from_quantity(PlaneAngle::new::<degree>(180.0));
        assert_eq!(half, Angle::straight());
        assert_abs_diff_eq!(half.quantity().get::<radian>(), PI, epsilon = 1e-12);
        assert_eq!(-Angle::right() + Angle::straight(), Angle::right());
        assert_eq!(Angle::from_degrees(-30.0).abs(), Angle::from_degrees(30.0));
    }
}
