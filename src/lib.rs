pub mod error;
pub mod geometry;
pub mod math;
pub mod transform;
pub mod units;

pub use error::{GeokernError, Result};
