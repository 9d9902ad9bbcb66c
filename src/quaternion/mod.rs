//! Quaternion math module
//!
//! Decisions are modelled as rotations of the economy: composable by the
//! Hamilton product and interpolable by slerp. The resource state stays the
//! source of truth; quaternions are derived per pass and never stored.

pub mod effect;
pub mod math;

pub use effect::{apply_quaternion_decision, decision_to_quaternion, DEFAULT_EFFECT_SCALE};
pub use math::Quaternion;
