use thiserror::Error;

use crate::transform::{Axis, AxisPlane};

/// Top-level error type for the geokern geometry kernel.
#[derive(Debug, Error)]
pub enum GeokernError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when a primitive would be built from degenerate input.
///
/// No degenerate object is ever returned in place of one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("points coincide within tolerance")]
    CoincidentPoints,

    #[error("points are collinear")]
    CollinearPoints,

    #[error("direction has zero length")]
    ZeroDirection,

    #[error("the {axis} axis cannot lie in the {plane} plane")]
    ImpossibleAxisPlane { axis: Axis, plane: AxisPlane },

    #[error("vector does not lie in the plane")]
    VectorNotInPlane,

    #[error("lines are not coplanar")]
    LinesNotCoplanar,

    #[error("lines are identical and do not span a plane")]
    IdenticalLines,

    #[error("edge loop is open after edge {index}")]
    OpenLoop { index: usize },

    #[error("a plane region needs at least 3 edges, got {count}")]
    TooFewEdges { count: usize },

    #[error("edge loop does not span a plane")]
    DegenerateRegion,

    #[error("edge loop is not planar")]
    NonPlanarLoop,

    #[error("invalid arc: {0}")]
    InvalidArc(String),
}

/// Errors raised when an operation receives contradictory input.
///
/// Operations with no geometric answer return `None` instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("reference normal is not perpendicular to both directions")]
    ReferenceNormalNotPerpendicular,
}

/// Convenience type alias for results using [`GeokernError`].
pub type Result<T> = std::result::Result<T, GeokernError>;
