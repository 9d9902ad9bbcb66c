//! Arc Quaternion - RTS economic decision core
//!
//! Models an AI economy as four bounded resource axes with derived stability,
//! entropy and victory progress, and decides what it should do next across
//! tactical, operational, strategic and ethical horizons.

pub mod arbitration;
pub mod core;
pub mod decision;
pub mod engine;
pub mod evaluation;
pub mod layers;
pub mod personality;
pub mod quaternion;
pub mod state;

pub use crate::core::{EngineConfig, EngineError, Result};
pub use crate::engine::DecisionEngine;
