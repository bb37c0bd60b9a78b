pub mod intersect_3d;
pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Proper rotation (orthonormal, determinant +1).
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Distances are compared in inches, angles in radians, and
/// dimensionless quantities as-is.
pub const TOLERANCE: f64 = 1e-6;

/// Default limit on how far a line/plane intersection may land from the
/// plane's base point before it is treated as ill-conditioned.
pub const DEFAULT_MAX_INTERSECTION_DISTANCE: f64 = 1e9;

/// Returns `true` if `a` and `b` differ by at most [`TOLERANCE`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Returns `true` if `value` is within [`TOLERANCE`] of zero.
#[inline]
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() <= TOLERANCE
}

/// Tunables for the guarded intersection routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    /// Intersections farther than this (inches) from the plane's base point
    /// are rejected as numerically unstable.
    pub max_distance: f64,
}

impl IntersectionOptions {
    /// Creates options with the given guard distance.
    #[must_use]
    pub fn new(max_distance: f64) -> Self {
        Self { max_distance }
    }

    /// Options that never reject an intersection on distance grounds.
    #[must_use]
    pub fn unguarded() -> Self {
        Self {
            max_distance: f64::INFINITY,
        }
    }
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_INTERSECTION_DISTANCE,
        }
    }
}
