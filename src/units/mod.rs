//! Tolerant scalar quantities.
//!
//! Every comparison in the kernel funnels through these types so that one
//! tolerance ([`TOLERANCE`](crate::math::TOLERANCE)) governs equality.

mod angle;
mod distance;
mod measurement;

pub use angle::Angle;
pub use distance::{Distance, DistanceUnit};
pub use measurement::Measurement;
