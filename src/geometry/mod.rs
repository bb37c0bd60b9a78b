pub mod curve;
mod direction;
mod point;
pub mod region;
pub mod surface;
mod vector;

pub use curve::{Arc, Edge, EdgeCurve, Line, LineSegment};
pub use direction::Direction;
pub use point::Point;
pub use region::PlaneRegion;
pub use surface::Plane;
pub use vector::Vector;
