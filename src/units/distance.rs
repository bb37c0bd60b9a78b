use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use uom::si::f64::Length;
use uom::si::length::{centimeter, foot, inch, meter, millimeter};
use uom::si::ratio::ratio;

use crate::math::approx_eq;

use super::Measurement;

/// Length units a [`Distance`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Inches,
    Feet,
    Millimeters,
    Centimeters,
    Meters,
}

impl DistanceUnit {
    /// A length of `value` of this unit.
    #[must_use]
    pub fn length(self, value: f64) -> Length {
        match self {
            Self::Inches => Length::new::<inch>(value),
            Self::Feet => Length::new::<foot>(value),
            Self::Millimeters => Length::new::<millimeter>(value),
            Self::Centimeters => Length::new::<centimeter>(value),
            Self::Meters => Length::new::<meter>(value),
        }
    }

    /// How many of this unit fit in `length`.
    #[must_use]
    pub fn count(self, length: Length) -> f64 {
        match self {
            Self::Inches => length.get::<inch>(),
            Self::Feet => length.get::<foot>(),
            Self::Millimeters => length.get::<millimeter>(),
            Self::Centimeters => length.get::<centimeter>(),
            Self::Meters => length.get::<meter>(),
        }
    }

    /// Short suffix used for display.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
        }
    }
}

/// A length tagged with the unit it is displayed in.
///
/// Comparisons go through inches, the canonical unit. Arithmetic results
/// are tagged with the left operand's unit.
#[derive(Debug, Clone, Copy)]
pub struct Distance {
    length: Length,
    unit: DistanceUnit,
}

impl Distance {
    /// Creates a distance of `value` in `unit`.
    #[must_use]
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self::from_length(unit.length(value), unit)
    }

    /// Wraps a `uom` length, tagged for display in `unit`.
    #[must_use]
    pub fn from_length(length: Length, unit: DistanceUnit) -> Self {
        Self { length, unit }
    }

    /// Zero length.
    #[must_use]
    pub fn zero() -> Self {
        Self::inches(0.0)
    }

    #[must_use]
    pub fn inches(value: f64) -> Self {
        Self::new(value, DistanceUnit::Inches)
    }

    #[must_use]
    pub fn feet(value: f64) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }

    #[must_use]
    pub fn millimeters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Millimeters)
    }

    #[must_use]
    pub fn centimeters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Centimeters)
    }

    #[must_use]
    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    /// The underlying `uom` length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// The value in the distance's own unit.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.unit.count(self.length)
    }

    /// The unit the distance is tagged with.
    #[must_use]
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// The value converted to `unit`.
    #[must_use]
    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        unit.count(self.length)
    }

    /// The value in inches.
    #[must_use]
    pub fn as_inches(&self) -> f64 {
        self.length.get::<inch>()
    }

    /// Re-tags the distance with `unit`.
    #[must_use]
    pub fn to_unit(&self, unit: DistanceUnit) -> Self {
        Self::from_length(self.length, unit)
    }

    /// The canonical (inch) value as a dimensionless measurement.
    #[must_use]
    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.as_inches())
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_length(self.length.abs(), self.unit)
    }

    /// Returns `true` if the distance is within tolerance of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        approx_eq(self.as_inches(), 0.0)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.as_inches(), other.as_inches())
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.as_inches().partial_cmp(&other.as_inches())
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value(), self.unit.suffix()),
            None => write!(f, "{} {}", self.value(), self.unit.suffix()),
        }
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_length(self.length + rhs.length, self.unit)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_length(self.length - rhs.length, self.unit)
    }
}

impl Mul<f64> for Distance {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_length(self.length * rhs, self.unit)
    }
}

impl Div<f64> for Distance {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_length(self.length / rhs, self.unit)
    }
}

/// Ratio of two lengths.
impl Div for Distance {
    type Output = Measurement;

    fn div(self, rhs: Self) -> Measurement {
        Measurement::new((self.length / rhs.length).get::<ratio>())
    }
}

impl Neg for Distance {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_length(-self.length, self.unit)
    }
}
