//! Initial-condition profile evaluators.
//!
//! Profiles are pure element-wise functions of the cell-center heights
//! produced by [`crate::grid::VerticalGrid`]: a buoyancy profile for the
//! stratification and, where a case needs one, a linear shear profile for
//! the streamwise and geostrophic wind.

mod buoyancy;
mod wind;

pub use buoyancy::BuoyancyProfile;
pub use wind::ShearProfile;
