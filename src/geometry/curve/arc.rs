use crate::error::{ConstructionError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::transform::{Rotation, Shift};
use crate::units::{Angle, Distance};

use super::super::{Direction, Point};
use super::{Edge, Line};

/// A circular arc edge in 3D space.
///
/// The arc sweeps from `base_point` to `end_point` counter-clockwise about
/// `normal` (right-hand rule) around `center`. Full circles are not edges:
/// the two endpoints must differ.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    base_point: Point,
    end_point: Point,
    center: Point,
    normal: Direction,
}

impl Arc {
    /// Creates an arc from its endpoints, centre and rotation normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is `NONE`, the endpoints coincide, the
    /// radius is zero, or the endpoints are not equidistant from the centre
    /// in the plane perpendicular to the normal.
    pub fn new(base_point: Point, end_point: Point, center: Point, normal: Direction) -> Result<Self> {
        if normal.is_none() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        if base_point == end_point {
            return Err(ConstructionError::CoincidentPoints.into());
        }

        let to_base = base_point.as_vector() - center.as_vector();
        let to_end = end_point.as_vector() - center.as_vector();
        let radius = to_base.norm();
        if radius < TOLERANCE {
            return Err(ConstructionError::InvalidArc("arc radius must be positive".into()).into());
        }
        if (to_end.norm() - radius).abs() > TOLERANCE {
            return Err(ConstructionError::InvalidArc(
                "endpoints are not equidistant from the centre".into(),
            )
            .into());
        }
        let n = normal.as_vector();
        if n.dot(&to_base).abs() > TOLERANCE || n.dot(&to_end).abs() > TOLERANCE {
            return Err(ConstructionError::InvalidArc(
                "endpoints do not lie in the arc plane".into(),
            )
            .into());
        }

        Ok(Self {
            base_point,
            end_point,
            center,
            normal,
        })
    }

    /// Creates an arc from a centre, radius, normal axis and a reference
    /// direction for the zero angle, sweeping `sweep` from `start_angle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the reference direction
    /// is not perpendicular to the normal, or the sweep is a whole turn.
    pub fn from_angles(
        center: Point,
        radius: Distance,
        normal: Direction,
        reference: Direction,
        start_angle: Angle,
        sweep: Angle,
    ) -> Result<Self> {
        let r = radius.as_inches();
        if r < TOLERANCE {
            return Err(ConstructionError::InvalidArc("arc radius must be positive".into()).into());
        }
        if normal.is_none() || reference.is_none() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        if !normal.is_perpendicular_to(&reference) {
            return Err(ConstructionError::InvalidArc(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        let binormal = normal.as_vector().cross(&reference.as_vector());
        let at = |angle: Angle| -> Point {
            let offset: Vector3 =
                reference.as_vector() * (r * angle.cos()) + binormal * (r * angle.sin());
            Point::from_coords(&(center.coords() + offset))
        };

        Self::new(at(start_angle), at(start_angle + sweep), center, normal)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the rotation normal of the arc plane.
    #[must_use]
    pub fn normal(&self) -> Direction {
        self.normal
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> Distance {
        self.center.distance_to(&self.base_point)
    }

    /// Angle swept from base point to end point, in `(0, 2π)`.
    #[must_use]
    pub fn central_angle(&self) -> Angle {
        let start = self.center.direction_to(&self.base_point);
        let end = self.center.direction_to(&self.end_point);
        start.angle_about(&end, &self.normal).normalized()
    }

    /// Arc length.
    #[must_use]
    pub fn length(&self) -> Distance {
        self.radius() * self.central_angle().radians()
    }

    /// The point reached after sweeping `angle` from the base point.
    #[must_use]
    pub fn point_at_angle(&self, angle: Angle) -> Point {
        let axis = Line::from_parts(self.center, self.normal);
        self.base_point.rotate(&Rotation::new(axis, angle))
    }

    /// The point halfway along the arc.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.point_at_angle(self.central_angle() * 0.5)
    }
}

impl Edge for Arc {
    fn base_point(&self) -> Point {
        self.base_point
    }

    fn end_point(&self) -> Point {
        self.end_point
    }

    fn contains_point(&self, point: &Point) -> bool {
        let offset = point.as_vector() - self.center.as_vector();
        if self.normal.as_vector().dot(&offset).abs() > TOLERANCE {
            return false;
        }
        if (offset.norm() - self.radius().as_inches()).abs() > TOLERANCE {
            return false;
        }
        let start = self.center.direction_to(&self.base_point);
        let swept = start
            .angle_about(&Direction::from_vector(&offset), &self.normal)
            .normalized();
        swept.radians() <= self.central_angle().radians() + TOLERANCE
    }

    fn reversed(&self) -> Self {
        Self {
            base_point: self.end_point,
            end_point: self.base_point,
            center: self.center,
            normal: self.normal.reverse(),
        }
    }

    fn shift(&self, shift: &Shift) -> Self {
        Self {
            base_point: self.base_point.shift(shift),
            end_point: self.end_point.shift(shift),
            center: self.center.shift(shift),
            normal: self.normal.shift(shift),
        }
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: &Self, b: &Self| {
            a.base_point == b.base_point
                && a.end_point == b.end_point
                && a.center == b.center
                && a.normal == b.normal
        };
        same(self, other) || same(&self.reversed(), other)
    }
}
