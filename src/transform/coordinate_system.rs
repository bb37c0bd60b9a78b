//! Local coordinate frames expressed in world coordinates.

use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::geometry::{Direction, Plane, Point, Vector};
use crate::math::{Matrix3, Rotation3};
use crate::units::Angle;

use super::Shift;

/// One of the three labeled axes of a coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the three coordinate planes of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPlane {
    XY,
    XZ,
    YZ,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

impl fmt::Display for AxisPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XY => write!(f, "XY"),
            Self::XZ => write!(f, "XZ"),
            Self::YZ => write!(f, "YZ"),
        }
    }
}

/// A frame defined by the shift that carries local coordinates to world
/// coordinates.
///
/// Operations assume the receiver is expressed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateSystem {
    shift: Shift,
}

impl CoordinateSystem {
    /// The world frame.
    #[must_use]
    pub fn world() -> Self {
        Self::from_shift(Shift::identity())
    }

    #[must_use]
    pub fn from_shift(shift: Shift) -> Self {
        Self { shift }
    }

    /// A frame at `origin`, turned by extrinsic X, Y, Z world rotations.
    #[must_use]
    pub fn new(origin: Point, x: Angle, y: Angle, z: Angle) -> Self {
        Self::from_shift(Shift::from_euler_angles(x, y, z, origin))
    }

    /// Recovers a frame from one of its coordinate planes and a vector along
    /// one of the two axes lying in that plane.
    ///
    /// `axis` names the axis `vector` points along and `axis_plane` names the
    /// plane `plane` represents. The plane normal becomes the third axis. The
    /// origin is the vector's base point.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::ZeroDirection`] if `vector` has no length.
    /// - [`ConstructionError::VectorNotInPlane`] if `vector` is not
    ///   perpendicular to the plane normal.
    /// - [`ConstructionError::ImpossibleAxisPlane`] if `axis` does not lie in
    ///   `axis_plane`.
    pub fn from_plane_and_vector(
        plane: &Plane,
        vector: &Vector,
        axis: Axis,
        axis_plane: AxisPlane,
    ) -> Result<Self> {
        if vector.is_zero() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        let d = vector.direction();
        let n = plane.normal();
        if !d.is_perpendicular_to(&n) {
            return Err(ConstructionError::VectorNotInPlane.into());
        }

        let (x, y, z) = match (axis, axis_plane) {
            (Axis::X, AxisPlane::XY) => (d, cross(&n, &d), n),
            (Axis::Y, AxisPlane::XY) => (cross(&d, &n), d, n),
            (Axis::X, AxisPlane::XZ) => (d, n, cross(&d, &n)),
            (Axis::Z, AxisPlane::XZ) => (cross(&n, &d), n, d),
            (Axis::Y, AxisPlane::YZ) => (n, d, cross(&n, &d)),
            (Axis::Z, AxisPlane::YZ) => (n, cross(&d, &n), d),
            (Axis::Z, AxisPlane::XY) | (Axis::Y, AxisPlane::XZ) | (Axis::X, AxisPlane::YZ) => {
                return Err(ConstructionError::ImpossibleAxisPlane {
                    axis,
                    plane: axis_plane,
                }
                .into());
            }
        };

        let basis = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[
            x.as_vector(),
            y.as_vector(),
            z.as_vector(),
        ]));
        let (ax, ay, az) = Shift::from_parts(basis, vector.base_point()).euler_angles();
        Ok(Self::new(vector.base_point(), ax, ay, az))
    }

    /// Shift from this frame's coordinates to world coordinates.
    #[must_use]
    pub fn shift_to_world(&self) -> Shift {
        self.shift
    }

    /// Shift from world coordinates to this frame's coordinates.
    #[must_use]
    pub fn shift_from_world(&self) -> Shift {
        self.shift.inverse()
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.shift.translation()
    }

    /// Local X axis in world coordinates.
    #[must_use]
    pub fn x_axis(&self) -> Direction {
        self.shift.apply_to_direction(&Direction::X)
    }

    /// Local Y axis in world coordinates.
    #[must_use]
    pub fn y_axis(&self) -> Direction {
        self.shift.apply_to_direction(&Direction::Y)
    }

    /// Local Z axis in world coordinates.
    #[must_use]
    pub fn z_axis(&self) -> Direction {
        self.shift.apply_to_direction(&Direction::Z)
    }

    /// Extrinsic `(x, y, z)` angles of the frame's orientation.
    #[must_use]
    pub fn euler_angles(&self) -> (Angle, Angle, Angle) {
        self.shift.euler_angles()
    }

    /// Maps coordinates expressed in this frame into `target`'s frame.
    #[must_use]
    pub fn shift_from_this_to(&self, target: &Self) -> Shift {
        target.shift_from_world().compose(&self.shift)
    }

    /// Maps coordinates expressed in this frame into world coordinates.
    #[must_use]
    pub fn shift_from_this_to_world(&self) -> Shift {
        self.shift_from_this_to(&Self::world())
    }

    /// Applies `shift` as seen from `basis`: the frame is carried into the
    /// basis frame, shifted there, and carried back to world.
    #[must_use]
    pub fn relative_shift(&self, shift: &Shift, basis: &Self) -> Self {
        let into_basis = basis.shift_from_world();
        let out_of_basis = basis.shift_to_world();
        Self::from_shift(
            out_of_basis
                .compose(shift)
                .compose(&into_basis)
                .compose(&self.shift),
        )
    }

    /// Moves the frame by a world-frame shift.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        Self::from_shift(shift.compose(&self.shift))
    }

    /// Converts a point in local coordinates to world coordinates.
    #[must_use]
    pub fn to_world(&self, point: &Point) -> Point {
        self.shift.apply_to_point(point)
    }

    /// Converts a point in world coordinates to local coordinates.
    #[must_use]
    pub fn to_local(&self, point: &Point) -> Point {
        self.shift_from_world().apply_to_point(point)
    }

    /// Returns `true` if both frames have the same orientation, regardless of
    /// origin. Rotations are compared as matrices, so different angle triples
    /// for the same orientation are equivalent.
    #[must_use]
    pub fn directions_are_equivalent(&self, other: &Self) -> bool {
        self.shift.has_same_rotation_as(&other.shift)
    }

    /// Same origin and same orientation.
    #[must_use]
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.origin() == other.origin() && self.directions_are_equivalent(other)
    }
}

fn cross(a: &Direction, b: &Direction) -> Direction {
    Direction::from_vector(&a.as_vector().cross(&b.as_vector()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeokernError;
    use crate::transform::Rotation;
    use crate::units::Distance;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::inches(x, y, z)
    }

    fn vector_along(base: Point, direction: Direction) -> Vector {
        Vector::from_direction(base, direction, Distance::inches(1.0))
    }

    #[test]
    fn round_trip_from_tilted_plane() {
        let normal = Direction::new(1.0, -2.0, 3.0);
        let plane = Plane::new(normal, p(2.0, 1.0, 0.0)).unwrap();
        let in_plane = cross(&normal, &Direction::new(0.3, 1.0, -0.2));
        let vector = vector_along(p(2.0, 1.0, 0.0), in_plane);

        let cs = CoordinateSystem::from_plane_and_vector(&plane, &vector, Axis::X, AxisPlane::XY)
            .unwrap();
        assert!(cs.x_axis().angle_between(&in_plane).is_zero());
        assert!(cs.z_axis().angle_between(&normal).is_zero());
        assert_eq!(cs.y_axis(), cross(&normal, &in_plane));
        assert_eq!(cs.origin(), p(2.0, 1.0, 0.0));
    }

    #[test]
    fn every_possible_case_places_the_labeled_axes() {
        let normal = Direction::Y.reverse();
        let plane = Plane::new(normal, Point::ORIGIN).unwrap();
        let d = Direction::new(1.0, 0.0, 1.0);
        let vector = vector_along(Point::ORIGIN, d);

        let cases = [
            (Axis::X, AxisPlane::XY),
            (Axis::Y, AxisPlane::XY),
            (Axis::X, AxisPlane::XZ),
            (Axis::Z, AxisPlane::XZ),
            (Axis::Y, AxisPlane::YZ),
            (Axis::Z, AxisPlane::YZ),
        ];
        for (axis, axis_plane) in cases {
            let cs = CoordinateSystem::from_plane_and_vector(&plane, &vector, axis, axis_plane)
                .unwrap();
            let along = match axis {
                Axis::X => cs.x_axis(),
                Axis::Y => cs.y_axis(),
                Axis::Z => cs.z_axis(),
            };
            let normal_axis = match axis_plane {
                AxisPlane::XY => cs.z_axis(),
                AxisPlane::XZ => cs.y_axis(),
                AxisPlane::YZ => cs.x_axis(),
            };
            assert_eq!(along, d, "{axis} in {axis_plane}");
            assert_eq!(normal_axis, normal, "{axis} in {axis_plane}");
            assert_eq!(cs.x_axis().cross_product(&cs.y_axis()), Some(cs.z_axis()));
        }
    }

    #[test]
    fn impossible_axis_plane_combinations_fail() {
        let vector = vector_along(Point::ORIGIN, Direction::X);
        for (axis, axis_plane) in [
            (Axis::Z, AxisPlane::XY),
            (Axis::Y, AxisPlane::XZ),
            (Axis::X, AxisPlane::YZ),
        ] {
            let result = CoordinateSystem::from_plane_and_vector(&Plane::XY, &vector, axis, axis_plane);
            assert!(matches!(
                result,
                Err(GeokernError::Construction(ConstructionError::ImpossibleAxisPlane { .. }))
            ));
        }
    }

    #[test]
    fn vector_must_lie_in_plane() {
        let vector = vector_along(Point::ORIGIN, Direction::new(1.0, 0.0, 1.0));
        let result = CoordinateSystem::from_plane_and_vector(&Plane::XY, &vector, Axis::X, AxisPlane::XY);
        assert!(matches!(
            result,
            Err(GeokernError::Construction(ConstructionError::VectorNotInPlane))
        ));
        let zero = Vector::zero(Point::ORIGIN);
        assert!(
            CoordinateSystem::from_plane_and_vector(&Plane::XY, &zero, Axis::X, AxisPlane::XY)
                .is_err()
        );
    }

    #[test]
    fn gimbal_lock_orientation_is_preserved() {
        let vector = vector_along(p(1.0, 1.0, 1.0), Direction::Z.reverse());
        let cs = CoordinateSystem::from_plane_and_vector(&Plane::XZ, &vector, Axis::X, AxisPlane::XZ)
            .unwrap();
        assert_eq!(cs.x_axis(), Direction::Z.reverse());
        assert_eq!(cs.y_axis(), Direction::Y);
        let (x, y, z) = cs.euler_angles();
        assert!(cs.directions_are_equivalent(&CoordinateSystem::new(Point::ORIGIN, x, y, z)));
    }

    #[test]
    fn relative_shift_rotates_about_basis_origin() {
        let basis = CoordinateSystem::new(p(5.0, 0.0, 0.0), Angle::zero(), Angle::zero(), Angle::zero());
        let turn = Shift::from_rotation(&Rotation::about_z(Angle::right()));
        let moved = CoordinateSystem::world().relative_shift(&turn, &basis);
        assert_eq!(moved.origin(), p(5.0, -5.0, 0.0));
        assert_eq!(moved.x_axis(), Direction::Y);
    }

    #[test]
    fn relative_shift_in_rotated_basis() {
        let basis = CoordinateSystem::new(p(5.0, 0.0, 0.0), Angle::zero(), Angle::zero(), Angle::right());
        let step = Shift::from_translation(p(1.0, 0.0, 0.0));

        let moved = CoordinateSystem::world().relative_shift(&step, &basis);
        assert_eq!(moved.origin(), p(0.0, 1.0, 0.0));
        assert!(moved.directions_are_equivalent(&CoordinateSystem::world()));

        let offset = CoordinateSystem::new(p(2.0, 0.0, 0.0), Angle::right(), Angle::zero(), Angle::zero());
        let moved = offset.relative_shift(&step, &basis);
        assert_eq!(moved.origin(), p(2.0, 1.0, 0.0));
        assert!(moved.directions_are_equivalent(&offset));

        let turn = Shift::from_rotation(&Rotation::about_z(Angle::right()));
        let turned = CoordinateSystem::world().relative_shift(&turn, &basis);
        assert_eq!(turned.origin(), p(5.0, -5.0, 0.0));
        assert_eq!(turned.x_axis(), Direction::Y);
    }

    #[test]
    fn shift_between_frames() {
        let a = CoordinateSystem::new(p(1.0, 2.0, 3.0), Angle::zero(), Angle::zero(), Angle::right());
        let b = CoordinateSystem::new(p(-4.0, 0.0, 1.0), Angle::right(), Angle::zero(), Angle::zero());
        let local = p(0.5, -1.0, 2.0);

        let in_b = a.shift_from_this_to(&b).apply_to_point(&local);
        assert_eq!(b.to_world(&in_b), a.to_world(&local));
        assert_eq!(a.shift_from_this_to_world(), a.shift_to_world());
        assert_eq!(a.to_local(&a.to_world(&local)), local);
    }

    #[test]
    fn shifting_and_equivalence() {
        let cs = CoordinateSystem::new(Point::ORIGIN, Angle::zero(), Angle::zero(), Angle::right());
        let moved = cs.shift(&Shift::from_translation(p(0.0, 0.0, 2.0)));
        assert_eq!(moved.origin(), p(0.0, 0.0, 2.0));
        assert!(moved.directions_are_equivalent(&cs));
        assert!(!moved.is_equivalent_to(&cs));
        assert_ne!(moved, cs);
        assert_eq!(CoordinateSystem::world(), CoordinateSystem::default());
    }
}
