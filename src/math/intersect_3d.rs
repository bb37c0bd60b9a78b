use tracing::{debug, trace};

use crate::geometry::curve::Edge;
use crate::geometry::{Direction, Line, LineSegment, Plane, Point};
use crate::units::Distance;

use super::{IntersectionOptions, TOLERANCE};

/// Relationship between two planes.
#[derive(Debug)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine(Line),
    /// Planes are parallel but not coincident.
    Parallel { distance: Distance },
    /// Planes share every point (their normals may still be opposite).
    Coincident,
}

/// Computes the intersection of two planes.
///
/// The line direction is `a.normal × b.normal`. Its support point is found by
/// running the line that lies in `a` perpendicular to that direction into `b`.
/// A support point rejected by the guard distance in `options` is reported as
/// [`Parallel`](PlanePairRelation::Parallel).
#[must_use]
pub fn plane_plane_intersect(
    a: &Plane,
    b: &Plane,
    options: &IntersectionOptions,
) -> PlanePairRelation {
    let na = a.normal();
    let nb = b.normal();

    let Some(direction) = na.cross_product(&nb) else {
        return parallel_relation(a, b);
    };

    // Unit length: na and direction are perpendicular unit vectors.
    let in_plane = Direction::from_vector(&na.as_vector().cross(&direction.as_vector()));
    let guide = Line::from_parts(a.base_point(), in_plane);

    match line_plane_intersect(&guide, b) {
        LinePlaneRelation::Point { point, .. }
            if point.distance_to(&b.base_point()).as_inches() <= options.max_distance =>
        {
            PlanePairRelation::IntersectionLine(Line::from_parts(point, direction))
        }
        other => {
            debug!(?other, "near-parallel planes, no stable intersection line");
            parallel_relation(a, b)
        }
    }
}

fn parallel_relation(a: &Plane, b: &Plane) -> PlanePairRelation {
    let distance = a.signed_distance_to(&b.base_point()).abs();
    if distance.as_inches() <= TOLERANCE {
        PlanePairRelation::Coincident
    } else {
        PlanePairRelation::Parallel { distance }
    }
}

/// Relationship of a line with a plane.
#[derive(Debug)]
pub enum LinePlaneRelation {
    /// Line crosses the plane at a single point, `t` along the line direction
    /// from its base point.
    Point { point: Point, t: Distance },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line with a plane.
///
/// Substitutes `base + t * direction` into the plane equation and solves for `t`.
#[must_use]
pub fn line_plane_intersect(line: &Line, plane: &Plane) -> LinePlaneRelation {
    let normal = plane.normal().as_vector();
    let denom = normal.dot(&line.direction().as_vector());

    let diff = plane.base_point().as_vector() - line.base_point().as_vector();
    let numer = normal.dot(&diff);

    if denom.abs() < TOLERANCE {
        // Line is parallel to the plane
        if numer.abs() < TOLERANCE {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        let point = line.point_at(Distance::inches(t));
        LinePlaneRelation::Point {
            point,
            t: Distance::inches(t),
        }
    }
}

/// Intersection point of a line with a plane, if it is well defined.
///
/// Returns `None` when the line is parallel to (or lies in) the plane, or when
/// the point lies farther than `options.max_distance` from the plane's base
/// point.
#[must_use]
pub fn line_plane_point(line: &Line, plane: &Plane, options: &IntersectionOptions) -> Option<Point> {
    match line_plane_intersect(line, plane) {
        LinePlaneRelation::Point { point, t } => {
            let reach = point.distance_to(&plane.base_point()).as_inches();
            if reach > options.max_distance {
                debug!(reach, t = t.as_inches(), "line/plane intersection rejected by guard distance");
                return None;
            }
            Some(point)
        }
        relation => {
            trace!(?relation, "line does not cross plane");
            None
        }
    }
}

/// Computes the intersection point of two lines.
///
/// Builds the implicit plane that contains `b` and the common perpendicular of
/// both lines, then intersects `a` with it. Returns `None` for parallel,
/// collinear or skew lines.
#[must_use]
pub fn line_line_intersect(a: &Line, b: &Line) -> Option<Point> {
    let common = a.direction().cross_product(&b.direction())?;
    let normal = Direction::from_vector(&b.direction().as_vector().cross(&common.as_vector()));
    let implicit = Plane::from_parts(b.base_point(), normal);

    match line_plane_intersect(a, &implicit) {
        LinePlaneRelation::Point { point, .. } if b.contains_point(&point) => Some(point),
        _ => {
            trace!("lines are skew");
            None
        }
    }
}

/// Computes the intersection point of two line segments.
///
/// A shared endpoint is returned as-is. Otherwise the supporting lines are
/// intersected and the point must lie within both segments.
#[must_use]
pub fn segment_segment_intersect(a: &LineSegment, b: &LineSegment) -> Option<Point> {
    for ours in [a.base_point(), a.end_point()] {
        for theirs in [b.base_point(), b.end_point()] {
            if ours == theirs {
                return Some(ours);
            }
        }
    }

    let point = line_line_intersect(&a.as_line(), &b.as_line())?;
    (a.contains_point(&point) && b.contains_point(&point)).then_some(point)
}

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Point is on the positive side (in the direction of the normal).
    Front,
    /// Point is on the negative side (opposite the normal).
    Back,
    /// Point lies on the plane (within tolerance).
    On,
}

/// Classifies a point relative to a plane.
#[must_use]
pub fn classify_point_plane(point: &Point, plane: &Plane) -> PointPlaneClassification {
    let dist = signed_distance_to_plane(point, plane);

    if dist > TOLERANCE {
        PointPlaneClassification::Front
    } else if dist < -TOLERANCE {
        PointPlaneClassification::Back
    } else {
        PointPlaneClassification::On
    }
}

/// Signed distance in inches from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point, plane: &Plane) -> f64 {
    let diff = point.as_vector() - plane.base_point().as_vector();
    plane.normal().as_vector().dot(&diff)
}
