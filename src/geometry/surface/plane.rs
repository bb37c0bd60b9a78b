use crate::error::{ConstructionError, Result};
use crate::math::intersect_3d::{
    classify_point_plane, line_plane_point, plane_plane_intersect, signed_distance_to_plane,
    PlanePairRelation, PointPlaneClassification,
};
use crate::math::{IntersectionOptions, Vector3, TOLERANCE};
use crate::transform::{Rotation, Shift};
use crate::units::Distance;

use super::super::curve::Edge;
use super::super::{Direction, Line, LineSegment, Point, Vector};

/// An infinite oriented plane in 3D space.
///
/// Defined by a base point and a unit normal. The two faces are
/// distinguished: a plane with the reversed normal is a different plane.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    base_point: Point,
    normal: Direction,
}

impl Plane {
    /// The world XY plane, normal +Z.
    pub const XY: Self = Self {
        base_point: Point::ORIGIN,
        normal: Direction::Z,
    };

    /// The world XZ plane, normal +Y.
    pub const XZ: Self = Self {
        base_point: Point::ORIGIN,
        normal: Direction::Y,
    };

    /// The world YZ plane, normal +X.
    pub const YZ: Self = Self {
        base_point: Point::ORIGIN,
        normal: Direction::X,
    };

    /// Creates a plane from a normal direction and a point on the plane.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroDirection`] for [`Direction::NONE`].
    pub fn new(normal: Direction, base_point: Point) -> Result<Self> {
        if normal.is_none() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        Ok(Self { base_point, normal })
    }

    /// Creates the plane through three points, based at `a`, with normal
    /// `(b - a) × (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::CollinearPoints`] if the points are
    /// collinear (or any two coincide).
    pub fn from_points(a: Point, b: Point, c: Point) -> Result<Self> {
        let ab = b.as_vector() - a.as_vector();
        let ac = c.as_vector() - a.as_vector();
        let normal = ab.cross(&ac);
        if normal.norm() <= TOLERANCE {
            return Err(ConstructionError::CollinearPoints.into());
        }
        Ok(Self::from_parts(a, Direction::from_vector(&normal)))
    }

    /// Creates the plane containing two lines.
    ///
    /// Parallel lines span the plane through both; crossing lines span the
    /// plane with normal `first × second`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::IdenticalLines`] for collinear lines and
    /// [`ConstructionError::LinesNotCoplanar`] for skew lines.
    pub fn from_lines(first: &Line, second: &Line) -> Result<Self> {
        if first.is_collinear_with(second) {
            return Err(ConstructionError::IdenticalLines.into());
        }
        if first.is_parallel_to(second) {
            return Self::from_point_and_line(second.base_point(), first);
        }
        if !first.is_coplanar_with(second) {
            return Err(ConstructionError::LinesNotCoplanar.into());
        }
        let normal = first.direction().as_vector().cross(&second.direction().as_vector());
        Ok(Self::from_parts(first.base_point(), Direction::from_vector(&normal)))
    }

    /// Creates the plane containing a line and a point off it.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::CollinearPoints`] if the point is on the line.
    pub fn from_point_and_line(point: Point, line: &Line) -> Result<Self> {
        let ahead = line.point_at(Distance::inches(1.0));
        Self::from_points(line.base_point(), ahead, point)
    }

    pub(crate) const fn from_parts(base_point: Point, normal: Direction) -> Self {
        Self { base_point, normal }
    }

    /// Returns the base point of the plane.
    #[must_use]
    pub fn base_point(&self) -> Point {
        self.base_point
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> Direction {
        self.normal
    }

    /// An in-plane direction, chosen deterministically from the normal.
    #[must_use]
    pub fn u_dir(&self) -> Direction {
        let normal = self.normal.as_vector();
        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };
        Direction::from_vector(&normal.cross(&reference))
    }

    /// The in-plane direction completing `(u_dir, v_dir, normal)` to a
    /// right-handed frame.
    #[must_use]
    pub fn v_dir(&self) -> Direction {
        Direction::from_vector(&self.normal.as_vector().cross(&self.u_dir().as_vector()))
    }

    /// Signed distance from the plane to `point`, positive on the normal side.
    #[must_use]
    pub fn signed_distance_to(&self, point: &Point) -> Distance {
        Distance::inches(signed_distance_to_plane(point, self))
    }

    /// Unsigned distance from the plane to `point`.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point) -> Distance {
        self.signed_distance_to(point).abs()
    }

    /// Which side of the plane `point` is on.
    #[must_use]
    pub fn classify_point(&self, point: &Point) -> PointPlaneClassification {
        classify_point_plane(point, self)
    }

    /// Returns `true` if `point` lies on the plane.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.classify_point(point) == PointPlaneClassification::On
    }

    /// Returns `true` if every point of `line` lies on the plane.
    #[must_use]
    pub fn contains_line(&self, line: &Line) -> bool {
        self.normal.is_perpendicular_to(&line.direction()) && self.contains_point(&line.base_point())
    }

    /// Returns `true` if both ends of `segment` lie on the plane.
    #[must_use]
    pub fn contains_segment(&self, segment: &LineSegment) -> bool {
        self.contains_point(&segment.base_point()) && self.contains_point(&segment.end_point())
    }

    /// Returns `true` if neither point is strictly on the opposite side of
    /// the plane from the other.
    #[must_use]
    pub fn points_on_same_side(&self, a: &Point, b: &Point) -> bool {
        !matches!(
            (self.classify_point(a), self.classify_point(b)),
            (PointPlaneClassification::Front, PointPlaneClassification::Back)
                | (PointPlaneClassification::Back, PointPlaneClassification::Front)
        )
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project_point(&self, point: &Point) -> Point {
        let offset = self.normal.as_vector() * signed_distance_to_plane(point, self);
        Point::from_coords(&(point.coords() - offset))
    }

    /// Projection of `line` onto the plane; `None` if the line is normal to it.
    #[must_use]
    pub fn project_line(&self, line: &Line) -> Option<Line> {
        line.project_onto_plane(self)
    }

    /// Projection of `vector` onto the plane.
    #[must_use]
    pub fn project_vector(&self, vector: &Vector) -> Vector {
        vector.project_onto_plane(self)
    }

    /// Intersection with a line using the default guard distance.
    ///
    /// Returns `None` when the line is parallel to the plane.
    #[must_use]
    pub fn intersect_with_line(&self, line: &Line) -> Option<Point> {
        self.intersect_with_line_with(line, &IntersectionOptions::default())
    }

    /// Intersection with a line using explicit options.
    ///
    /// Returns `None` when the line is parallel to the plane or the result is
    /// farther than `options.max_distance` from the base point.
    #[must_use]
    pub fn intersect_with_line_with(&self, line: &Line, options: &IntersectionOptions) -> Option<Point> {
        line_plane_point(line, self, options)
    }

    /// Intersection with a segment; `None` if the segment does not reach the
    /// plane.
    #[must_use]
    pub fn intersect_with_segment(&self, segment: &LineSegment) -> Option<Point> {
        segment.intersect_with_plane(self)
    }

    /// Intersection line with another plane.
    ///
    /// Returns `None` for distinct parallel planes. Coincident planes yield an
    /// arbitrary line lying in both.
    #[must_use]
    pub fn intersect_with_plane(&self, other: &Self) -> Option<Line> {
        self.intersect_with_plane_with(other, &IntersectionOptions::default())
    }

    /// Intersection line with another plane using explicit options.
    #[must_use]
    pub fn intersect_with_plane_with(&self, other: &Self, options: &IntersectionOptions) -> Option<Line> {
        match plane_plane_intersect(self, other, options) {
            PlanePairRelation::IntersectionLine(line) => Some(line),
            PlanePairRelation::Coincident => Some(Line::from_parts(self.base_point, self.u_dir())),
            PlanePairRelation::Parallel { .. } => None,
        }
    }

    /// Returns `true` if the normals are parallel or antiparallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }

    /// Returns `true` if the normals are perpendicular.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.normal.is_perpendicular_to(&other.normal)
    }

    /// Returns `true` if the planes cover the same points, whichever way
    /// they face.
    #[must_use]
    pub fn is_coplanar_with(&self, other: &Self) -> bool {
        self.is_parallel_to(other) && self.contains_point(&other.base_point)
    }

    /// The same plane facing the other way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_parts(self.base_point, self.normal.reverse())
    }

    /// Moves the plane.
    #[must_use]
    pub fn translate(&self, displacement: &Point) -> Self {
        Self::from_parts(self.base_point.translate(displacement), self.normal)
    }

    /// Rotates the plane about the rotation's axis.
    #[must_use]
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        Self::from_parts(self.base_point.rotate(rotation), self.normal.rotate(rotation))
    }

    /// Applies a shift to the plane.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        Self::from_parts(self.base_point.shift(shift), self.normal.shift(shift))
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.contains_point(&other.base_point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::units::Angle;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::inches(x, y, z)
    }

    #[test]
    fn collinear_points_fail() {
        let result = Plane::from_points(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(3.0, 3.0, 3.0));
        assert!(result.is_err());
        assert!(Plane::new(Direction::NONE, Point::ORIGIN).is_err());
    }

    #[test]
    fn from_points_orientation() {
        let plane = Plane::from_points(p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(0.0, 1.0, 1.0)).unwrap();
        assert_eq!(plane.normal(), Direction::Z);
        assert!(plane.contains_point(&p(5.0, -3.0, 1.0)));
        assert!(!plane.contains_point(&p(5.0, -3.0, 1.1)));
    }

    #[test]
    fn reversed_normal_is_a_different_plane() {
        let plane = Plane::new(Direction::new(1.0, 2.0, 3.0), p(1.0, 1.0, 1.0)).unwrap();
        assert_ne!(plane, plane.reverse());
        assert_eq!(plane, plane.reverse().reverse());
        assert!(plane.is_coplanar_with(&plane.reverse()));
    }

    #[test]
    fn equality_uses_any_support_point() {
        let a = Plane::new(Direction::Z, p(0.0, 0.0, 2.0)).unwrap();
        let b = Plane::new(Direction::Z, p(7.0, -4.0, 2.0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Plane::new(Direction::Z, p(0.0, 0.0, 3.0)).unwrap());
    }

    #[test]
    fn from_lines() {
        let crossing = Plane::from_lines(&Line::x_axis(), &Line::y_axis()).unwrap();
        assert_eq!(crossing, Plane::XY);

        let parallel = Plane::from_lines(
            &Line::x_axis(),
            &Line::new(p(0.0, 0.0, 4.0), Direction::X).unwrap(),
        )
        .unwrap();
        assert!(parallel.is_coplanar_with(&Plane::XZ));

        assert!(Plane::from_lines(&Line::x_axis(), &Line::x_axis().reverse()).is_err());
        let skew = Line::new(p(0.0, 0.0, 1.0), Direction::Y).unwrap();
        assert!(Plane::from_lines(&Line::x_axis(), &skew).is_err());
    }

    #[test]
    fn xy_meets_xz_along_x_axis() {
        let line = Plane::XY.intersect_with_plane(&Plane::XZ).unwrap();
        assert!(line.is_collinear_with(&Line::x_axis()));
    }

    #[test]
    fn parallel_and_coincident_planes() {
        let lifted = Plane::XY.translate(&p(0.0, 0.0, 1.0));
        assert!(Plane::XY.intersect_with_plane(&lifted).is_none());

        let same = Plane::XY.intersect_with_plane(&Plane::XY.reverse()).unwrap();
        assert!(Plane::XY.contains_line(&same));
    }

    #[test]
    fn line_intersection() {
        let line = Line::from_points(p(1.0, 1.0, 1.0), p(2.0, 2.0, 3.0)).unwrap();
        assert_eq!(Plane::XY.intersect_with_line(&line), Some(p(0.5, 0.5, 0.0)));
        assert!(Plane::XY.intersect_with_line(&Line::x_axis()).is_none());
    }

    #[test]
    fn projection_and_distance() {
        let plane = Plane::new(Direction::Z, p(0.0, 0.0, 2.0)).unwrap();
        let point = p(3.0, 4.0, -1.0);
        assert_eq!(plane.project_point(&point), p(3.0, 4.0, 2.0));
        assert_abs_diff_eq!(plane.signed_distance_to(&point).as_inches(), -3.0, epsilon = 1e-12);
        assert!(plane.points_on_same_side(&point, &p(0.0, 0.0, 0.0)));
        assert!(!plane.points_on_same_side(&point, &p(0.0, 0.0, 5.0)));
    }

    #[test]
    fn in_plane_frame() {
        let plane = Plane::new(Direction::new(1.0, 1.0, 1.0), Point::ORIGIN).unwrap();
        assert!(plane.u_dir().is_perpendicular_to(&plane.normal()));
        assert!(plane.v_dir().is_perpendicular_to(&plane.u_dir()));
        assert_eq!(plane.u_dir().cross_product(&plane.v_dir()), Some(plane.normal()));
    }

    #[test]
    fn rotating_a_plane() {
        let turned = Plane::XY.rotate(&Rotation::about_x(Angle::from_degrees(90.0)));
        assert_eq!(turned, Plane::XZ.reverse());
    }
}
