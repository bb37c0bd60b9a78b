use std::fmt;

use crate::error::{OperationError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::transform::{Rotation, Shift};
use crate::units::{Angle, Measurement};

/// A unit direction in 3D space, or the zero sentinel [`Direction::NONE`].
///
/// Equality is angle-based: two directions are equal when the angle between
/// them is within tolerance, which keeps comparisons stable after repeated
/// rotations. `NONE` is equal only to itself.
#[derive(Debug, Clone, Copy)]
pub struct Direction {
    x: f64,
    y: f64,
    z: f64,
}

impl Direction {
    /// The zero-magnitude sentinel ("no direction").
    pub const NONE: Self = Self::raw(0.0, 0.0, 0.0);
    /// World +X.
    pub const X: Self = Self::raw(1.0, 0.0, 0.0);
    /// World +Y.
    pub const Y: Self = Self::raw(0.0, 1.0, 0.0);
    /// World +Z.
    pub const Z: Self = Self::raw(0.0, 0.0, 1.0);

    const fn raw(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a direction by normalizing `(x, y, z)`.
    ///
    /// A zero-length input yields [`Direction::NONE`].
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let r = x.hypot(y).hypot(z);
        if r < f64::MIN_POSITIVE {
            return Self::NONE;
        }
        Self::raw(x / r, y / r, z / r)
    }

    /// Creates a direction from a raw vector.
    #[must_use]
    pub fn from_vector(v: &Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Creates a direction from spherical angles: `phi` measured in the XY
    /// plane from +X, `theta` measured from +Z.
    #[must_use]
    pub fn from_angles(phi: Angle, theta: Angle) -> Self {
        Self::new(
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        )
    }

    /// X component.
    #[must_use]
    pub fn x(&self) -> Measurement {
        Measurement::new(self.x)
    }

    /// Y component.
    #[must_use]
    pub fn y(&self) -> Measurement {
        Measurement::new(self.y)
    }

    /// Z component.
    #[must_use]
    pub fn z(&self) -> Measurement {
        Measurement::new(self.z)
    }

    /// The direction as a raw vector (unit length, or zero for `NONE`).
    #[must_use]
    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns `true` for the zero sentinel.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.x.abs() + self.y.abs() + self.z.abs() < f64::MIN_POSITIVE
    }

    /// Azimuth in the XY plane, measured from +X.
    #[must_use]
    pub fn phi(&self) -> Angle {
        Angle::from_radians(self.y.atan2(self.x))
    }

    /// Polar angle measured from +Z.
    #[must_use]
    pub fn theta(&self) -> Angle {
        Angle::from_radians(self.z.clamp(-1.0, 1.0).acos())
    }

    /// The opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::raw(-self.x, -self.y, -self.z)
    }

    /// Dot product of the two unit vectors.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        self.as_vector().dot(&other.as_vector())
    }

    /// Direction of `self × other`.
    ///
    /// Returns `None` when the inputs are parallel or antiparallel, or when
    /// either is [`Direction::NONE`]; that "no answer" is distinct from the
    /// `NONE` sentinel itself.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Option<Self> {
        if self.is_none() || other.is_none() {
            return None;
        }
        let cross = self.as_vector().cross(&other.as_vector());
        if cross.norm() <= TOLERANCE {
            return None;
        }
        Some(Self::from_vector(&cross))
    }

    /// Unsigned angle between the directions, in `[0, π]`.
    ///
    /// Returns zero if either direction is [`Direction::NONE`].
    #[must_use]
    pub fn angle_between(&self, other: &Self) -> Angle {
        if self.is_none() || other.is_none() {
            return Angle::zero();
        }
        let a = self.as_vector();
        let b = other.as_vector();
        Angle::from_radians(a.cross(&b).norm().atan2(a.dot(&b)))
    }

    /// Signed angle from `self` to `other`, in `[-π, π]`.
    ///
    /// The angle is positive when `self × other` points along
    /// `reference_normal`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::ReferenceNormalNotPerpendicular`] if the
    /// reference normal is `NONE` or not perpendicular to both directions.
    pub fn signed_angle_between(&self, other: &Self, reference_normal: &Self) -> Result<Angle> {
        if reference_normal.is_none()
            || !self.is_perpendicular_to(reference_normal)
            || !other.is_perpendicular_to(reference_normal)
        {
            return Err(OperationError::ReferenceNormalNotPerpendicular.into());
        }
        Ok(self.angle_about(other, reference_normal))
    }

    /// Signed angle from `self` to `other` seen from `axis`, without checking
    /// that `axis` is perpendicular to the inputs.
    pub(crate) fn angle_about(&self, other: &Self, axis: &Self) -> Angle {
        let a = self.as_vector();
        let b = other.as_vector();
        let sin = a.cross(&b).dot(&axis.as_vector());
        Angle::from_radians(sin.atan2(a.dot(&b)))
    }

    /// Returns `true` if the directions are parallel or antiparallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        if self.is_none() || other.is_none() {
            return false;
        }
        self.as_vector().cross(&other.as_vector()).norm() <= TOLERANCE
    }

    /// Returns `true` if the directions are perpendicular.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.dot_product(other).abs() <= TOLERANCE
    }

    /// Rotates the direction; the rotation axis position is irrelevant.
    #[must_use]
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        Self::from_vector(&(rotation.matrix() * self.as_vector()))
    }

    /// Applies the rotational part of a shift.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        shift.apply_to_direction(self)
    }
}

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_none(), other.is_none()) {
            (true, true) => true,
            (false, false) => self.angle_between(other).radians() <= TOLERANCE,
            _ => false,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
