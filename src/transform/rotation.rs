use crate::error::Result;
use crate::geometry::{Direction, Line, Point};
use crate::math::{Matrix3, Rotation3};
use crate::units::Angle;

use super::Shift;

/// A rotation by a signed angle about an axis line (right-hand rule).
///
/// The axis carries a support point, so rotations about lines that miss the
/// origin also move points that lie on the parallel axis through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    axis: Line,
    angle: Angle,
}

impl Rotation {
    /// Creates a rotation about `axis` by `angle`.
    #[must_use]
    pub fn new(axis: Line, angle: Angle) -> Self {
        Self { axis, angle }
    }

    /// Rotation about an axis through the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `direction` is [`Direction::NONE`].
    pub fn about_direction(direction: Direction, angle: Angle) -> Result<Self> {
        Ok(Self::new(Line::new(Point::ORIGIN, direction)?, angle))
    }

    /// Rotation about the world X axis.
    #[must_use]
    pub fn about_x(angle: Angle) -> Self {
        Self::new(Line::x_axis(), angle)
    }

    /// Rotation about the world Y axis.
    #[must_use]
    pub fn about_y(angle: Angle) -> Self {
        Self::new(Line::y_axis(), angle)
    }

    /// Rotation about the world Z axis.
    #[must_use]
    pub fn about_z(angle: Angle) -> Self {
        Self::new(Line::z_axis(), angle)
    }

    /// The rotation axis.
    #[must_use]
    pub fn axis(&self) -> Line {
        self.axis
    }

    /// The signed rotation angle.
    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The rotation about the origin-parallel axis, as an orthonormal matrix.
    #[must_use]
    pub fn matrix(&self) -> Rotation3 {
        Rotation3::from_matrix_unchecked(rotation_matrix(&self.axis.direction(), self.angle))
    }

    /// The rotation undoing this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.axis, -self.angle)
    }

    /// Rotates `point` about the axis line: translate the axis to the origin,
    /// rotate, translate back.
    #[must_use]
    pub fn apply_to_point(&self, point: &Point) -> Point {
        let support = self.axis.base_point().as_vector();
        let rotated = self.matrix() * (point.as_vector() - support) + support;
        Point::inches(rotated.x, rotated.y, rotated.z)
    }

    /// The rotation as a shift.
    #[must_use]
    pub fn to_shift(&self) -> Shift {
        Shift::from_rotation(self)
    }
}

/// Builds a 3x3 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
#[rustfmt::skip]
fn rotation_matrix(axis: &Direction, angle: Angle) -> Matrix3 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let v = axis.as_vector();
    let (x, y, z) = (v.x, v.y, v.z);

    Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::inches(x, y, z)
    }

    #[test]
    fn rotate_90_around_z() {
        let rotation = Rotation::about_z(Angle::from_degrees(90.0));
        assert_eq!(rotation.apply_to_point(&p(1.0, 0.0, 0.0)), p(0.0, 1.0, 0.0));
        assert_eq!(rotation.apply_to_point(&p(2.0, 1.0, 5.0)), p(-1.0, 2.0, 5.0));
    }

    #[test]
    fn matrix_is_orthonormal() {
        let axis = Line::new(p(1.0, 2.0, 3.0), Direction::new(1.0, -1.0, 2.0)).unwrap();
        let m = Rotation::new(axis, Angle::from_degrees(37.0)).matrix();
        let product = m.matrix() * m.matrix().transpose();
        assert_abs_diff_eq!(product, Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.matrix().determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn off_origin_axis() {
        let axis = Line::new(p(1.0, 1.0, 0.0), Direction::Z).unwrap();
        let rotation = Rotation::new(axis, Angle::from_degrees(180.0));
        assert_eq!(rotation.apply_to_point(&p(2.0, 1.0, 4.0)), p(0.0, 1.0, 4.0));
        assert_eq!(rotation.apply_to_point(&p(1.0, 1.0, 9.0)), p(1.0, 1.0, 9.0));
    }

    #[test]
    fn inverse_undoes_rotation() {
        let axis = Line::new(p(-1.0, 0.0, 2.0), Direction::new(0.0, 1.0, 1.0)).unwrap();
        let rotation = Rotation::new(axis, Angle::from_degrees(73.0));
        let point = p(4.0, -2.0, 1.0);
        let back = rotation.inverse().apply_to_point(&rotation.apply_to_point(&point));
        assert_eq!(back, point);
    }

    #[test]
    fn right_hand_rule_about_x() {
        let rotation = Rotation::about_x(Angle::from_degrees(90.0));
        assert_eq!(rotation.apply_to_point(&p(0.0, 1.0, 0.0)), p(0.0, 0.0, 1.0));
        assert!(Rotation::about_direction(Direction::NONE, Angle::right()).is_err());
    }
}
