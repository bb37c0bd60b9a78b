//! Rigid transforms: rotations about axis lines, composed shifts, and local
//! coordinate frames.

mod coordinate_system;
mod rotation;
mod shift;

pub use coordinate_system::{Axis, AxisPlane, CoordinateSystem};
pub use rotation::Rotation;
pub use shift::Shift;
