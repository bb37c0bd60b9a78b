use tracing::debug;

use crate::geometry::{Direction, Point};
use crate::math::{approx_eq, Matrix3, Rotation3, Vector3, TOLERANCE};
use crate::units::Angle;

use super::Rotation;

/// A rigid motion: one rotation about the origin followed by a translation.
///
/// Any sequence of rotations and translations collapses into a single
/// `Shift`. The rotation is kept orthonormal with determinant +1.
#[derive(Debug, Clone, Copy)]
pub struct Shift {
    rotation: Rotation3,
    translation: Point,
}

impl Shift {
    /// The shift that moves nothing.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_parts(Rotation3::identity(), Point::ORIGIN)
    }

    pub(crate) fn from_parts(rotation: Rotation3, translation: Point) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// A single rotation. An axis that misses the origin contributes the
    /// translation `a - R·a` for its support point `a`.
    #[must_use]
    pub fn from_rotation(rotation: &Rotation) -> Self {
        let matrix = rotation.matrix();
        let support = rotation.axis().base_point().as_vector();
        let offset = support - matrix * support;
        Self::from_parts(matrix, Point::inches(offset.x, offset.y, offset.z))
    }

    /// Several rotations; the first element is applied first.
    #[must_use]
    pub fn from_rotations(rotations: &[Rotation]) -> Self {
        rotations.iter().fold(Self::identity(), |acc, rotation| {
            Self::from_rotation(rotation).compose(&acc)
        })
    }

    /// A pure translation by the position vector of `translation`.
    #[must_use]
    pub fn from_translation(translation: Point) -> Self {
        Self::from_parts(Rotation3::identity(), translation)
    }

    /// The rotations in order, then the translation.
    #[must_use]
    pub fn new(rotations: &[Rotation], translation: Point) -> Self {
        Self::from_translation(translation).compose(&Self::from_rotations(rotations))
    }

    /// Extrinsic X, then Y, then Z rotation about world axes through the
    /// origin, followed by `translation`. The rotation is `Rz·Ry·Rx`.
    #[must_use]
    pub fn from_euler_angles(x: Angle, y: Angle, z: Angle, translation: Point) -> Self {
        Self::from_parts(
            Rotation3::from_euler_angles(x.radians(), y.radians(), z.radians()),
            translation,
        )
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation3 {
        self.rotation
    }

    #[must_use]
    pub fn rotation_matrix(&self) -> Matrix3 {
        *self.rotation.matrix()
    }

    #[must_use]
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Applies `inner` first, then `self`.
    ///
    /// Rotation `R_o·R_i`, translation `R_o·t_i + t_o`. Composition is
    /// associative but not commutative.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let moved = self.rotation * inner.translation.as_vector() + self.translation.as_vector();
        Self::from_parts(
            self.rotation * inner.rotation,
            Point::inches(moved.x, moved.y, moved.z),
        )
    }

    /// The shift undoing this one: rotation `Rᵀ`, translation `-Rᵀ·t`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        let back = -(rotation * self.translation.as_vector());
        Self::from_parts(rotation, Point::inches(back.x, back.y, back.z))
    }

    #[must_use]
    pub fn apply_to_point(&self, point: &Point) -> Point {
        let moved = self.rotation * point.as_vector() + self.translation.as_vector();
        Point::inches(moved.x, moved.y, moved.z)
    }

    /// Directions only rotate.
    #[must_use]
    pub fn apply_to_direction(&self, direction: &Direction) -> Direction {
        Direction::from_vector(&(self.rotation * direction.as_vector()))
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns `true` if both rotations agree entry by entry within tolerance,
    /// ignoring the translations.
    #[must_use]
    pub fn has_same_rotation_as(&self, other: &Self) -> bool {
        self.rotation
            .matrix()
            .iter()
            .zip(other.rotation.matrix().iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }

    /// Decomposes the rotation into extrinsic `(x, y, z)` Euler angles such
    /// that [`Shift::from_euler_angles`] rebuilds the same rotation.
    ///
    /// The Z angle is read from the image of the X axis projected onto XY,
    /// then undone; the Y angle is read from the remaining X axis in XZ and
    /// undone; the X angle is whatever turns the world Y axis onto what is
    /// left of the image of Y. When the image of X is vertical the split
    /// between the X and Z angles is ambiguous and Z is taken as zero.
    #[must_use]
    pub fn euler_angles(&self) -> (Angle, Angle, Angle) {
        let x_image = self.rotation * Vector3::x();

        let z = if x_image.x.hypot(x_image.y) < TOLERANCE {
            debug!("x axis is vertical, taking z angle as zero");
            0.0
        } else {
            x_image.y.atan2(x_image.x)
        };

        let unturned = Rotation3::from_axis_angle(&Vector3::z_axis(), -z) * x_image;
        let y = (-unturned.z).atan2(unturned.x);

        let residual = Rotation3::from_euler_angles(0.0, y, z).inverse() * self.rotation;
        let y_image = residual * Vector3::y();
        let x = y_image.z.atan2(y_image.y);

        (
            Angle::from_radians(x),
            Angle::from_radians(y),
            Angle::from_radians(z),
        )
    }
}

impl Default for Shift {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Shift {
    fn eq(&self, other: &Self) -> bool {
        self.translation == other.translation && self.has_same_rotation_as(other)
    }
}
