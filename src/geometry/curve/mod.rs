mod arc;
mod line;
mod segment;

pub use arc::Arc;
pub use line::Line;
pub use segment::LineSegment;

use crate::transform::{Rotation, Shift};

use super::Point;

/// Capabilities a bounded edge offers to the shape layer built on the kernel.
///
/// Every transform returns a new edge; edges are never mutated in place.
pub trait Edge: Clone {
    /// Start of the edge.
    fn base_point(&self) -> Point;

    /// End of the edge.
    fn end_point(&self) -> Point;

    /// Returns `true` if `point` lies on the edge (endpoints included).
    fn contains_point(&self, point: &Point) -> bool;

    /// The same edge traversed from end to start.
    #[must_use]
    fn reversed(&self) -> Self;

    /// Applies a shift to the edge.
    #[must_use]
    fn shift(&self, shift: &Shift) -> Self;

    /// Rotates the edge about the rotation's axis.
    #[must_use]
    fn rotate(&self, rotation: &Rotation) -> Self {
        self.shift(&Shift::from_rotation(rotation))
    }

    /// Moves the edge by `displacement`.
    #[must_use]
    fn translate(&self, displacement: &Point) -> Self {
        self.shift(&Shift::from_translation(*displacement))
    }

    /// An independent copy of the edge.
    #[must_use]
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// The geometric curve of a boundary edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeCurve {
    /// A line segment.
    Segment(LineSegment),
    /// A circular arc.
    Arc(Arc),
}

impl EdgeCurve {
    /// Direction of the chord from base point to end point.
    #[must_use]
    pub fn chord_direction(&self) -> super::Direction {
        self.base_point().direction_to(&self.end_point())
    }

    /// A point in the interior of the edge.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        match self {
            Self::Segment(segment) => segment.midpoint(),
            Self::Arc(arc) => arc.midpoint(),
        }
    }
}

impl Edge for EdgeCurve {
    fn base_point(&self) -> Point {
        match self {
            Self::Segment(segment) => segment.base_point(),
            Self::Arc(arc) => arc.base_point(),
        }
    }

    fn end_point(&self) -> Point {
        match self {
            Self::Segment(segment) => segment.end_point(),
            Self::Arc(arc) => arc.end_point(),
        }
    }

    fn contains_point(&self, point: &Point) -> bool {
        match self {
            Self::Segment(segment) => segment.contains_point(point),
            Self::Arc(arc) => arc.contains_point(point),
        }
    }

    fn reversed(&self) -> Self {
        match self {
            Self::Segment(segment) => Self::Segment(segment.reversed()),
            Self::Arc(arc) => Self::Arc(arc.reversed()),
        }
    }

    fn shift(&self, shift: &Shift) -> Self {
        match self {
            Self::Segment(segment) => Self::Segment(segment.shift(shift)),
            Self::Arc(arc) => Self::Arc(arc.shift(shift)),
        }
    }
}

impl From<LineSegment> for EdgeCurve {
    fn from(segment: LineSegment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Arc> for EdgeCurve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}
