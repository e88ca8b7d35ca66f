pub mod error;
pub mod math;
pub mod rotation;

pub use error::{GeorotError, Result};
pub use math::{RotationScalar, Tolerances};
