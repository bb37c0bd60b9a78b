use crate::error::{ConstructionError, Result};
use crate::math::intersect_3d::{line_line_intersect, line_plane_point};
use crate::math::{IntersectionOptions, TOLERANCE};
use crate::transform::{Rotation, Shift};
use crate::units::{Angle, Distance};

use super::super::{Direction, Plane, Point};

/// An infinite line through a base point.
///
/// The parametric form is: `P(t) = base_point + t * direction`.
/// Two lines are equal when they are collinear and point the same way.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    base_point: Point,
    direction: Direction,
}

impl Line {
    /// Creates a new line from a base point and direction.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroDirection`] for [`Direction::NONE`].
    pub fn new(base_point: Point, direction: Direction) -> Result<Self> {
        if direction.is_none() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        Ok(Self {
            base_point,
            direction,
        })
    }

    /// Creates the line through two points, directed from `base_point` to
    /// `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::CoincidentPoints`] if the points coincide.
    pub fn from_points(base_point: Point, other: Point) -> Result<Self> {
        if base_point == other {
            return Err(ConstructionError::CoincidentPoints.into());
        }
        Self::new(base_point, base_point.direction_to(&other))
    }

    /// Internal constructor for directions already known to be non-zero.
    pub(crate) fn from_parts(base_point: Point, direction: Direction) -> Self {
        Self {
            base_point,
            direction,
        }
    }

    /// The world X axis.
    #[must_use]
    pub fn x_axis() -> Self {
        Self::from_parts(Point::ORIGIN, Direction::X)
    }

    /// The world Y axis.
    #[must_use]
    pub fn y_axis() -> Self {
        Self::from_parts(Point::ORIGIN, Direction::Y)
    }

    /// The world Z axis.
    #[must_use]
    pub fn z_axis() -> Self {
        Self::from_parts(Point::ORIGIN, Direction::Z)
    }

    /// Returns the base point of the line.
    #[must_use]
    pub fn base_point(&self) -> Point {
        self.base_point
    }

    /// Returns the unit direction of the line.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The point `distance` along the line from its base point.
    #[must_use]
    pub fn point_at(&self, distance: Distance) -> Point {
        Point::from_coords(
            &(self.base_point.coords() + self.direction.as_vector() * distance.as_inches()),
        )
    }

    /// Orthogonal projection of `point` onto the line.
    #[must_use]
    pub fn closest_point_to(&self, point: &Point) -> Point {
        let along = (point.as_vector() - self.base_point.as_vector()).dot(&self.direction.as_vector());
        self.point_at(Distance::inches(along))
    }

    /// Perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point) -> Distance {
        point.distance_to(&self.closest_point_to(point))
    }

    /// Returns `true` if `point` lies on the line.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.distance_to_point(point).as_inches() <= TOLERANCE
    }

    /// Returns `true` if the lines are parallel or antiparallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }

    /// Returns `true` if the line directions are perpendicular.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.direction.is_perpendicular_to(&other.direction)
    }

    /// Returns `true` if the lines cover the same points, whichever way they
    /// point.
    #[must_use]
    pub fn is_collinear_with(&self, other: &Self) -> bool {
        self.is_parallel_to(other) && self.contains_point(&other.base_point)
    }

    /// Returns `true` if both lines lie in a common plane.
    #[must_use]
    pub fn is_coplanar_with(&self, other: &Self) -> bool {
        let offset = other.base_point.as_vector() - self.base_point.as_vector();
        let normal = self.direction.as_vector().cross(&other.direction.as_vector());
        normal.dot(&offset).abs() <= TOLERANCE
    }

    /// The smaller of the two angles formed between the lines, in `[0, π/2]`.
    #[must_use]
    pub fn smallest_angle_between(&self, other: &Self) -> Angle {
        let angle = self.direction.angle_between(&other.direction);
        if angle.radians() > std::f64::consts::FRAC_PI_2 {
            Angle::straight() - angle
        } else {
            angle
        }
    }

    /// Intersection with another line; `None` if parallel or skew.
    #[must_use]
    pub fn intersection_with_line(&self, other: &Self) -> Option<Point> {
        line_line_intersect(self, other)
    }

    /// Intersection with a plane using the default guard distance.
    #[must_use]
    pub fn intersect_with_plane(&self, plane: &Plane) -> Option<Point> {
        line_plane_point(self, plane, &IntersectionOptions::default())
    }

    /// The line through `point` meeting this line at a right angle, directed
    /// towards it. `None` if `point` is on the line.
    #[must_use]
    pub fn perpendicular_line_through(&self, point: &Point) -> Option<Self> {
        Self::from_points(*point, self.closest_point_to(point)).ok()
    }

    /// Projection of the line onto `plane`; `None` if the line is normal to
    /// the plane.
    #[must_use]
    pub fn project_onto_plane(&self, plane: &Plane) -> Option<Self> {
        let base = plane.project_point(&self.base_point);
        let ahead = plane.project_point(&self.point_at(Distance::inches(1.0)));
        Self::from_points(base, ahead).ok()
    }

    /// The same line pointing the other way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_parts(self.base_point, self.direction.reverse())
    }

    /// Moves the line without changing its direction.
    #[must_use]
    pub fn translate(&self, displacement: &Point) -> Self {
        Self::from_parts(self.base_point.translate(displacement), self.direction)
    }

    /// Rotates the line about the rotation's axis.
    #[must_use]
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        Self::from_parts(self.base_point.rotate(rotation), self.direction.rotate(rotation))
    }

    /// Applies a shift to the line.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        Self::from_parts(self.base_point.shift(shift), self.direction.shift(shift))
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction && self.contains_point(&other.base_point)
    }
}
