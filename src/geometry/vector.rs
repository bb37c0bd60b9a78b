use std::ops::{Add, Mul, Neg, Sub};

use crate::math::{Vector3, TOLERANCE};
use crate::transform::{Rotation, Shift};
use crate::units::{Distance, DistanceUnit};

use super::{Direction, Plane, Point};

/// A directed magnitude anchored at a base point.
///
/// The end point is derived from base, direction and magnitude. Equality
/// compares only the base and end points, so vectors built in different ways
/// over the same pair of points are equal.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    base_point: Point,
    direction: Direction,
    magnitude: f64,
}

impl Vector {
    /// The vector from `base_point` to `end_point`.
    ///
    /// Coincident points yield a zero vector with [`Direction::NONE`].
    #[must_use]
    pub fn new(base_point: Point, end_point: Point) -> Self {
        Self::from_components(base_point, &(end_point.as_vector() - base_point.as_vector()))
    }

    /// A vector from `base_point` along `direction` with length `magnitude`.
    ///
    /// A negative magnitude flips the direction.
    #[must_use]
    pub fn from_direction(base_point: Point, direction: Direction, magnitude: Distance) -> Self {
        let inches = magnitude.as_inches();
        if direction.is_none() || inches.abs() < f64::MIN_POSITIVE {
            return Self::zero(base_point);
        }
        let direction = if inches < 0.0 {
            direction.reverse()
        } else {
            direction
        };
        Self {
            base_point,
            direction,
            magnitude: inches.abs(),
        }
    }

    /// The position vector of `end_point` (based at the origin).
    #[must_use]
    pub fn from_point(end_point: Point) -> Self {
        Self::new(Point::ORIGIN, end_point)
    }

    /// A zero vector anchored at `base_point`.
    #[must_use]
    pub fn zero(base_point: Point) -> Self {
        Self {
            base_point,
            direction: Direction::NONE,
            magnitude: 0.0,
        }
    }

    fn from_components(base_point: Point, components: &Vector3) -> Self {
        let magnitude = components.norm();
        if magnitude < f64::MIN_POSITIVE {
            return Self::zero(base_point);
        }
        Self {
            base_point,
            direction: Direction::from_vector(components),
            magnitude,
        }
    }

    /// Anchor of the vector.
    #[must_use]
    pub fn base_point(&self) -> Point {
        self.base_point
    }

    /// Tip of the vector.
    #[must_use]
    pub fn end_point(&self) -> Point {
        Point::from_coords(&(self.base_point.coords() + self.components()))
    }

    /// Unit direction, or `NONE` for a zero vector.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Length of the vector.
    #[must_use]
    pub fn magnitude(&self) -> Distance {
        Distance::inches(self.magnitude)
    }

    /// Raw inch components.
    #[must_use]
    pub fn components(&self) -> Vector3 {
        self.direction.as_vector() * self.magnitude
    }

    /// Returns `true` if the magnitude is within tolerance of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude <= TOLERANCE
    }

    /// The same segment traversed from end to base.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            base_point: self.end_point(),
            direction: self.direction.reverse(),
            magnitude: self.magnitude,
        }
    }

    /// A vector of length one `unit` along this vector's direction.
    #[must_use]
    pub fn unit_vector(&self, unit: DistanceUnit) -> Self {
        Self::from_direction(self.base_point, self.direction, Distance::new(1.0, unit))
    }

    /// Dot product, in square inches.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        self.components().dot(&other.components())
    }

    /// Cross product anchored at this vector's base point.
    ///
    /// Returns `None` for parallel, antiparallel or zero vectors.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Option<Self> {
        self.direction.cross_product(&other.direction)?;
        Some(Self::from_components(
            self.base_point,
            &self.components().cross(&other.components()),
        ))
    }

    /// Component of this vector along `direction`, anchored at the same base.
    #[must_use]
    pub fn project_onto(&self, direction: &Direction) -> Self {
        let along = self.components().dot(&direction.as_vector());
        Self::from_direction(self.base_point, *direction, Distance::inches(along))
    }

    /// Component of this vector lying in `plane`, with the base point
    /// projected onto the plane.
    #[must_use]
    pub fn project_onto_plane(&self, plane: &Plane) -> Self {
        Self::new(
            plane.project_point(&self.base_point),
            plane.project_point(&self.end_point()),
        )
    }

    /// Returns `true` if the vectors are parallel or antiparallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }

    /// Returns `true` if the vectors are perpendicular.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.direction.is_perpendicular_to(&other.direction)
    }

    /// Moves the vector without changing its direction.
    #[must_use]
    pub fn translate(&self, displacement: &Point) -> Self {
        Self {
            base_point: self.base_point.translate(displacement),
            ..*self
        }
    }

    /// Rotates both ends of the vector.
    #[must_use]
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        Self::new(
            self.base_point.rotate(rotation),
            self.end_point().rotate(rotation),
        )
    }

    /// Applies a shift to both ends of the vector.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        Self::new(
            self.base_point.shift(shift),
            self.end_point().shift(shift),
        )
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.base_point == other.base_point && self.end_point() == other.end_point()
    }
}

/// Tip-to-tail sum anchored at the left operand's base point.
impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_components(self.base_point, &(self.components() + rhs.components()))
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_components(self.base_point, &(self.components() - rhs.components()))
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_components(self.base_point, &(self.components() * rhs))
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            direction: self.direction.reverse(),
            ..self
        }
    }
}
