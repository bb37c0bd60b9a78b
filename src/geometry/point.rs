use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::math::{Point3, Vector3, TOLERANCE};
use crate::transform::{Rotation, Shift};
use crate::units::{Distance, DistanceUnit};

use super::{Direction, Line, Plane, Vector};

/// A location in 3D space.
///
/// Coordinates are held in inches. Two points are equal when the distance
/// between them is within tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// The world origin.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a point from three distances.
    #[must_use]
    pub fn new(x: Distance, y: Distance, z: Distance) -> Self {
        Self {
            x: x.as_inches(),
            y: y.as_inches(),
            z: z.as_inches(),
        }
    }

    /// Creates a point from coordinates in `unit`.
    #[must_use]
    pub fn in_unit(x: f64, y: f64, z: f64, unit: DistanceUnit) -> Self {
        Self::new(
            Distance::new(x, unit),
            Distance::new(y, unit),
            Distance::new(z, unit),
        )
    }

    /// Creates a point from inch coordinates.
    #[must_use]
    pub const fn inches(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point from raw inch coordinates.
    #[must_use]
    pub fn from_coords(coords: &Point3) -> Self {
        Self::inches(coords.x, coords.y, coords.z)
    }

    /// X coordinate.
    #[must_use]
    pub fn x(&self) -> Distance {
        Distance::inches(self.x)
    }

    /// Y coordinate.
    #[must_use]
    pub fn y(&self) -> Distance {
        Distance::inches(self.y)
    }

    /// Z coordinate.
    #[must_use]
    pub fn z(&self) -> Distance {
        Distance::inches(self.z)
    }

    /// Raw inch coordinates.
    #[must_use]
    pub fn coords(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Position vector from the origin, in inches.
    #[must_use]
    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Distance {
        Distance::inches((other.as_vector() - self.as_vector()).norm())
    }

    /// The point halfway to `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::inches(
            (self.x + other.x) * 0.5,
            (self.y + other.y) * 0.5,
            (self.z + other.z) * 0.5,
        )
    }

    /// The vector from this point to `other`.
    #[must_use]
    pub fn vector_to(&self, other: &Self) -> Vector {
        Vector::new(*self, *other)
    }

    /// Direction from this point towards `other`, or `NONE` if they coincide.
    #[must_use]
    pub fn direction_to(&self, other: &Self) -> Direction {
        Direction::from_vector(&(other.as_vector() - self.as_vector()))
    }

    /// Moves the point by `displacement`, read as a position vector.
    #[must_use]
    pub fn translate(&self, displacement: &Self) -> Self {
        *self + *displacement
    }

    /// Rotates the point about the rotation's axis line.
    #[must_use]
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        rotation.apply_to_point(self)
    }

    /// Applies a shift to the point.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        shift.apply_to_point(self)
    }

    /// Returns `true` if the point lies on `line`.
    #[must_use]
    pub fn is_on_line(&self, line: &Line) -> bool {
        line.contains_point(self)
    }

    /// Orthogonal projection onto `line`.
    #[must_use]
    pub fn project_onto_line(&self, line: &Line) -> Self {
        line.closest_point_to(self)
    }

    /// Orthogonal projection onto `plane`.
    #[must_use]
    pub fn project_onto_plane(&self, plane: &Plane) -> Self {
        plane.project_point(self)
    }

    /// Returns `true` if the distance to the origin is within tolerance.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.as_vector().norm() <= TOLERANCE
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (other.as_vector() - self.as_vector()).norm() <= TOLERANCE
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) in", self.x, self.y, self.z)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::inches(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::inches(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::inches(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::inches(-self.x, -self.y, -self.z)
    }
}
