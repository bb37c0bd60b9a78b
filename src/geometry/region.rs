//! Bounded planar regions.
//!
//! A [`PlaneRegion`] is a closed loop of [`EdgeCurve`]s. Its plane is derived
//! from the loop on every call, so the edges are the only source of truth.

use tracing::debug;

use crate::error::{ConstructionError, Result};
use crate::math::polygon_3d::point_in_polygon_3d;
use crate::transform::{Rotation, Shift};

use super::curve::{Arc, Edge, EdgeCurve, LineSegment};
use super::{Direction, Plane, Point};

/// A planar region bounded by a closed, consistently oriented edge loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneRegion {
    edges: Vec<EdgeCurve>,
}

impl PlaneRegion {
    /// Creates a region from a closed loop of edges.
    ///
    /// Each edge must end where the next begins, and the last must end where
    /// the first begins. The normal is the cross product of the chords of the
    /// first two consecutive edges that are not parallel.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if there are fewer than three edges,
    /// the loop is open, all chords are parallel, or the loop is not planar.
    pub fn new(edges: Vec<EdgeCurve>) -> Result<Self> {
        validate_loop(&edges)?;
        Ok(Self { edges })
    }

    /// Creates a polygonal region from its corner points, closing the loop
    /// from the last point back to the first.
    ///
    /// # Errors
    ///
    /// Returns an error if consecutive points coincide or the loop is
    /// degenerate.
    pub fn from_vertices(vertices: &[Point]) -> Result<Self> {
        let n = vertices.len();
        let edges = (0..n)
            .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % n]).map(EdgeCurve::from))
            .collect::<Result<Vec<_>>>()?;
        Self::new(edges)
    }

    /// The boundary edges, in loop order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeCurve] {
        &self.edges
    }

    /// The plane of the loop, through the first edge's start point.
    #[must_use]
    pub fn plane(&self) -> Plane {
        // Validation guarantees a non-parallel chord pair and rigid motions
        // keep it, so the fallback is unreachable.
        let normal = loop_normal(&self.edges).unwrap_or(Direction::NONE);
        Plane::from_parts(self.edges[0].base_point(), normal)
    }

    /// Normal of the derived plane.
    #[must_use]
    pub fn normal(&self) -> Direction {
        self.plane().normal()
    }

    /// Start point of every edge, in loop order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.edges.iter().map(Edge::base_point).collect()
    }

    /// Returns `true` if `point` lies inside the region or on its boundary.
    ///
    /// The polygon of edge chords is tested first. Each arc whose circular
    /// cap (the part of its disc on the arc's side of the chord) holds the
    /// point then flips the answer: an outward bulge adds its cap to the
    /// region, an inward bulge cuts it out.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        let plane = self.plane();
        if !plane.contains_point(point) {
            return false;
        }
        if self.edges.iter().any(|edge| edge.contains_point(point)) {
            return true;
        }

        let inside_chords = point_in_polygon_3d(point, &self.vertices(), &plane);
        let caps = self
            .edges
            .iter()
            .filter(|edge| match edge {
                EdgeCurve::Arc(arc) => cap_contains(arc, point, &plane.normal()),
                EdgeCurve::Segment(_) => false,
            })
            .count();
        inside_chords ^ (caps % 2 == 1)
    }

    /// The same region with the loop traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            edges: self.edges.iter().rev().map(Edge::reversed).collect(),
        }
    }

    /// Applies a shift to every edge.
    #[must_use]
    pub fn shift(&self, shift: &Shift) -> Self {
        Self {
            edges: self.edges.iter().map(|edge| edge.shift(shift)).collect(),
        }
    }

    /// Rotates every edge.
    #[must_use]
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        self.shift(&Shift::from_rotation(rotation))
    }

    /// Moves every edge by `displacement`.
    #[must_use]
    pub fn translate(&self, displacement: &Point) -> Self {
        self.shift(&Shift::from_translation(*displacement))
    }
}

fn loop_normal(edges: &[EdgeCurve]) -> Option<Direction> {
    let n = edges.len();
    (0..n).find_map(|i| {
        edges[i]
            .chord_direction()
            .cross_product(&edges[(i + 1) % n].chord_direction())
    })
}

fn validate_loop(edges: &[EdgeCurve]) -> Result<()> {
    let n = edges.len();
    if n < 3 {
        return Err(ConstructionError::TooFewEdges { count: n }.into());
    }

    for (i, edge) in edges.iter().enumerate() {
        let next = &edges[(i + 1) % n];
        if edge.end_point() != next.base_point() {
            debug!(index = i, "edge loop does not close");
            return Err(ConstructionError::OpenLoop { index: i }.into());
        }
    }

    let normal = loop_normal(edges).ok_or(ConstructionError::DegenerateRegion)?;
    let plane = Plane::from_parts(edges[0].base_point(), normal);
    let planar = edges.iter().all(|edge| {
        plane.contains_point(&edge.base_point()) && plane.contains_point(&edge.midpoint())
    });
    if !planar {
        return Err(ConstructionError::NonPlanarLoop.into());
    }
    Ok(())
}

/// Strictly inside the arc's circle and strictly on the arc's side of its
/// chord.
fn cap_contains(arc: &Arc, point: &Point, normal: &Direction) -> bool {
    if arc.center().distance_to(point) >= arc.radius() {
        return false;
    }
    let base = arc.base_point().as_vector();
    let chord = arc.end_point().as_vector() - base;
    let side = |p: &Point| chord.cross(&(p.as_vector() - base)).dot(&normal.as_vector());
    side(point) * side(&arc.midpoint()) > 0.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeokernError;
    use crate::units::Angle;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::inches(x, y, z)
    }

    fn unit_square() -> PlaneRegion {
        PlaneRegion::from_vertices(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn counter_clockwise_square_faces_up() {
        let square = unit_square();
        assert_eq!(square.normal(), Direction::Z);
        assert_eq!(square.plane(), Plane::XY);
        assert_eq!(square.vertices().len(), 4);
    }

    #[test]
    fn reversed_loop_faces_down() {
        let square = unit_square().reversed();
        assert_eq!(square.normal(), Direction::Z.reverse());
        assert_eq!(square.edges()[0].base_point(), p(0.0, 0.0, 0.0));
        assert_eq!(square.edges()[0].end_point(), p(0.0, 1.0, 0.0));
    }

    #[test]
    fn containment() {
        let square = unit_square();
        assert!(square.contains_point(&p(0.5, 0.5, 0.0)));
        assert!(square.contains_point(&p(1.0, 0.5, 0.0)));
        assert!(square.contains_point(&p(0.0, 0.0, 0.0)));
        assert!(!square.contains_point(&p(1.5, 0.5, 0.0)));
        assert!(!square.contains_point(&p(0.5, 0.5, 0.1)));
    }

    #[test]
    fn open_loop_fails() {
        let a = LineSegment::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        let b = LineSegment::new(p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)).unwrap();
        let c = LineSegment::new(p(1.0, 1.0, 0.0), p(0.0, 2.0, 0.0)).unwrap();
        let result = PlaneRegion::new(vec![a.into(), b.into(), c.into()]);
        assert!(matches!(
            result,
            Err(GeokernError::Construction(ConstructionError::OpenLoop { index: 2 }))
        ));
    }

    #[test]
    fn inconsistent_orientation_fails() {
        let a = LineSegment::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        let b = LineSegment::new(p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        let c = LineSegment::new(p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0)).unwrap();
        assert!(PlaneRegion::new(vec![a.into(), b.into(), c.into()]).is_err());
    }

    #[test]
    fn too_few_and_degenerate() {
        let a = LineSegment::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        assert!(matches!(
            PlaneRegion::new(vec![a.into(), a.reversed().into()]),
            Err(GeokernError::Construction(ConstructionError::TooFewEdges { count: 2 }))
        ));
        let flat = PlaneRegion::from_vertices(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        assert!(matches!(
            flat,
            Err(GeokernError::Construction(ConstructionError::DegenerateRegion))
        ));
    }

    #[test]
    fn non_planar_loop_fails() {
        let result = PlaneRegion::from_vertices(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 1.0),
        ]);
        assert!(matches!(
            result,
            Err(GeokernError::Construction(ConstructionError::NonPlanarLoop))
        ));
    }

    #[test]
    fn region_with_arc_edge() {
        let base = LineSegment::new(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        let dome = Arc::new(p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0), Point::ORIGIN, Direction::Z).unwrap();
        let side = LineSegment::new(p(-1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0));
        assert!(side.is_err());

        let half_disc = PlaneRegion::new(vec![
            base.into(),
            dome.into(),
            LineSegment::new(p(-1.0, 0.0, 0.0), p(-1.0, -0.5, 0.0)).unwrap().into(),
        ]);
        assert!(half_disc.is_err());

        let closed = PlaneRegion::new(vec![
            LineSegment::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap().into(),
            Arc::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), Point::ORIGIN, Direction::Z)
                .unwrap()
                .into(),
            LineSegment::new(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)).unwrap().into(),
        ])
        .unwrap();
        assert_eq!(closed.normal(), Direction::Z);
        assert!(closed.contains_point(&p(0.6, 0.6, 0.0)));
        assert!(!closed.contains_point(&p(0.9, 0.9, 0.0)));
    }

    fn quarter_disc() -> PlaneRegion {
        PlaneRegion::new(vec![
            LineSegment::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap().into(),
            Arc::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), Point::ORIGIN, Direction::Z)
                .unwrap()
                .into(),
            LineSegment::new(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)).unwrap().into(),
        ])
        .unwrap()
    }

    #[test]
    fn outward_arc_cap_is_inside() {
        let region = quarter_disc();
        // Beyond the chord but inside the circle.
        assert!(region.contains_point(&p(0.8, 0.5, 0.0)));
        assert!(region.contains_point(&p(0.3, 0.9, 0.0)));
        assert!(!region.contains_point(&p(0.8, 0.7, 0.0)));
        assert!(region.contains_point(&p(0.2, 0.2, 0.0)));
    }

    #[test]
    fn inward_arc_bite_is_outside() {
        // Square whose top edge bows down towards the centre.
        let bite = Arc::new(
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
            p(1.0, 3.0, 0.0),
            Direction::Z.reverse(),
        )
        .unwrap();
        let region = PlaneRegion::new(vec![
            LineSegment::new(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)).unwrap().into(),
            LineSegment::new(p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0)).unwrap().into(),
            bite.into(),
            LineSegment::new(p(0.0, 2.0, 0.0), p(0.0, 0.0, 0.0)).unwrap().into(),
        ])
        .unwrap();

        assert_eq!(region.normal(), Direction::Z);
        assert!(!region.contains_point(&p(1.0, 1.8, 0.0)));
        assert!(!region.contains_point(&p(0.2, 1.9, 0.0)));
        assert!(region.contains_point(&p(1.0, 1.5, 0.0)));
        assert!(region.contains_point(&p(0.1, 1.5, 0.0)));
    }

    #[test]
    fn plane_follows_the_edges() {
        let region = quarter_disc();
        let reversed = region.reversed();
        assert_eq!(reversed.normal(), Direction::Z.reverse());
        assert_eq!(
            reversed.plane(),
            PlaneRegion::new(reversed.edges().to_vec()).unwrap().plane()
        );
        assert!(reversed.contains_point(&p(0.8, 0.5, 0.0)));

        let moved = region.shift(&Shift::from_translation(p(0.0, 0.0, 4.0)));
        assert_eq!(moved.plane(), Plane::XY.translate(&p(0.0, 0.0, 4.0)));
        assert!(moved.contains_point(&p(0.8, 0.5, 4.0)));
    }

    #[test]
    fn transforms_move_the_derived_plane() {
        let square = unit_square()
            .rotate(&Rotation::about_x(Angle::from_degrees(90.0)))
            .translate(&p(0.0, 3.0, 0.0));
        assert_eq!(square.normal(), Direction::Y.reverse());
        assert!(square.plane().contains_point(&p(0.0, 3.0, 0.0)));
        assert!(square.contains_point(&p(0.5, 3.0, 0.5)));
        let rederived = PlaneRegion::new(square.edges().to_vec()).unwrap();
        assert_eq!(rederived.plane(), square.plane());
    }
}
