//! Constants and shared combat math.

pub mod combat_math;
pub mod constants;
