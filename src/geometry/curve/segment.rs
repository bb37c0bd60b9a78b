use crate::error::{ConstructionError, Result};
use crate::math::intersect_3d::{line_line_intersect, segment_segment_intersect};
use crate::math::TOLERANCE;
use crate::transform::Shift;
use crate::units::Distance;

use super::super::{Direction, Plane, Point, Vector};
use super::{Edge, Line};

/// A bounded straight edge between two distinct points.
///
/// Equality ignores orientation: `(A, B) == (B, A)`.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    base_point: Point,
    end_point: Point,
}

impl LineSegment {
    /// Creates a segment between two points.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::CoincidentPoints`] if the points coincide.
    pub fn new(base_point: Point, end_point: Point) -> Result<Self> {
        if base_point == end_point {
            return Err(ConstructionError::CoincidentPoints.into());
        }
        Ok(Self {
            base_point,
            end_point,
        })
    }

    /// Creates a segment of `length` from `base_point` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is `NONE` or the length is zero.
    pub fn from_direction(base_point: Point, direction: Direction, length: Distance) -> Result<Self> {
        if direction.is_none() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        Self::new(
            base_point,
            Vector::from_direction(base_point, direction, length).end_point(),
        )
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> Distance {
        self.base_point.distance_to(&self.end_point)
    }

    /// Point halfway along the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.base_point.midpoint(&self.end_point)
    }

    /// Direction from base point to end point.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.base_point.direction_to(&self.end_point)
    }

    /// The unbounded line carrying the segment.
    #[must_use]
    pub fn as_line(&self) -> Line {
        Line::from_parts(self.base_point, self.direction())
    }

    /// The segment as a vector from base to end.
    #[must_use]
    pub fn as_vector(&self) -> Vector {
        Vector::new(self.base_point, self.end_point)
    }

    /// Intersection with another segment; `None` if they do not meet.
    #[must_use]
    pub fn intersection_with_segment(&self, other: &Self) -> Option<Point> {
        segment_segment_intersect(self, other)
    }

    /// Intersection with an unbounded line, restricted to this segment.
    #[must_use]
    pub fn intersection_with_line(&self, line: &Line) -> Option<Point> {
        line_line_intersect(&self.as_line(), line).filter(|point| self.contains_point(point))
    }

    /// Intersection with a plane, restricted to this segment.
    #[must_use]
    pub fn intersect_with_plane(&self, plane: &Plane) -> Option<Point> {
        self.as_line()
            .intersect_with_plane(plane)
            .filter(|point| self.contains_point(point))
    }

    /// Returns `true` if the segments are parallel or antiparallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction().is_parallel_to(&other.direction())
    }
}

impl Edge for LineSegment {
    fn base_point(&self) -> Point {
        self.base_point
    }

    fn end_point(&self) -> Point {
        self.end_point
    }

    fn contains_point(&self, point: &Point) -> bool {
        let line = self.as_line();
        if !line.contains_point(point) {
            return false;
        }
        let along = (point.as_vector() - self.base_point.as_vector())
            .dot(&line.direction().as_vector());
        along >= -TOLERANCE && along <= self.length().as_inches() + TOLERANCE
    }

    fn reversed(&self) -> Self {
        Self {
            base_point: self.end_point,
            end_point: self.base_point,
        }
    }

    fn shift(&self, shift: &Shift) -> Self {
        Self {
            base_point: self.base_point.shift(shift),
            end_point: self.end_point.shift(shift),
        }
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.base_point == other.base_point && self.end_point == other.end_point)
            || (self.base_point == other.end_point && self.end_point == other.base_point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::transform::Rotation;
    use crate::units::Angle;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::inches(x, y, z)
    }

    fn seg(a: Point, b: Point) -> LineSegment {
        LineSegment::new(a, b).unwrap()
    }

    #[test]
    fn zero_length_fails() {
        let result = LineSegment::new(p(1.0, 2.0, 3.0), p(1.0, 2.0, 3.0));
        assert!(result.is_err());
        assert!(LineSegment::from_direction(Point::ORIGIN, Direction::X, Distance::zero()).is_err());
        assert!(LineSegment::from_direction(Point::ORIGIN, Direction::NONE, Distance::inches(1.0)).is_err());
    }

    #[test]
    fn reversed_endpoints_are_equal() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1.0, 2.0, 3.0);
        assert_eq!(seg(a, b), seg(b, a));
        assert_ne!(seg(a, b), seg(a, p(1.0, 2.0, 4.0)));
    }

    #[test]
    fn length_and_midpoint() {
        let s = seg(p(0.0, 0.0, 0.0), p(0.0, 6.0, 8.0));
        assert_abs_diff_eq!(s.length().as_inches(), 10.0, epsilon = 1e-12);
        assert_eq!(s.midpoint(), p(0.0, 3.0, 4.0));
        let built = LineSegment::from_direction(p(1.0, 0.0, 0.0), Direction::X, Distance::feet(1.0)).unwrap();
        assert_eq!(built.end_point(), p(13.0, 0.0, 0.0));
    }

    #[test]
    fn containment_is_bounded() {
        let s = seg(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0));
        assert!(s.contains_point(&p(0.0, 0.0, 0.0)));
        assert!(s.contains_point(&p(2.5, 0.0, 0.0)));
        assert!(s.contains_point(&p(4.0, 0.0, 0.0)));
        assert!(!s.contains_point(&p(4.1, 0.0, 0.0)));
        assert!(!s.contains_point(&p(-0.1, 0.0, 0.0)));
        assert!(!s.contains_point(&p(2.0, 0.1, 0.0)));
    }

    #[test]
    fn line_and_plane_intersections_are_bounded() {
        let s = seg(p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0));
        assert_eq!(s.intersect_with_plane(&Plane::XY), Some(Point::ORIGIN));
        let short = seg(p(0.0, 0.0, 1.0), p(0.0, 0.0, 2.0));
        assert!(short.intersect_with_plane(&Plane::XY).is_none());
        assert_eq!(s.intersection_with_line(&Line::x_axis()), Some(Point::ORIGIN));
        assert!(short.intersection_with_line(&Line::x_axis()).is_none());
    }

    #[test]
    fn edge_transforms() {
        let s = seg(p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        let moved = s.translate(&p(0.0, 1.0, 0.0));
        assert_eq!(moved, seg(p(1.0, 1.0, 0.0), p(2.0, 1.0, 0.0)));

        let turned = s.rotate(&Rotation::about_z(Angle::from_degrees(90.0)));
        assert_eq!(turned.base_point(), p(0.0, 1.0, 0.0));
        assert_eq!(turned.end_point(), p(0.0, 2.0, 0.0));

        let r = s.reversed();
        assert_eq!(r.base_point(), s.end_point());
        assert_eq!(r, s);
        assert_eq!(s.copy(), s);
    }
}
