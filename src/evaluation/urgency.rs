//! Situational urgency
//!
//! Where the evaluator looks at what a decision declares about itself, urgency
//! looks at what the economy needs right now: a shaky economy rewards
//! stabilising moves, a chaotic one rewards calming moves, and a scarce axis
//! rewards anything that refills it.

use crate::core::config::EngineConfig;
use crate::core::types::ResourceAxis;
use crate::decision::Decision;
use crate::state::resources::ResourceState;

pub const MIN_URGENCY: f64 = 0.8;
pub const MAX_URGENCY: f64 = 1.8;

/// Entropy ratio above which calming decisions become urgent
const HIGH_ENTROPY_RATIO: f64 = 0.7;

const STABILITY_URGENCY: f64 = 0.3;
const ENTROPY_URGENCY: f64 = 0.2;
const SCARCITY_URGENCY: f64 = 0.2;

/// Multiplier in `[0.8, 1.8]` driven by the live state
pub fn situational_urgency(decision: &Decision, state: &ResourceState, config: &EngineConfig) -> f64 {
    let effect = &decision.immediate;
    let mut urgency = 1.0;

    if state.stability < config.critical_stability && effect.stability_change > 0.0 {
        urgency += STABILITY_URGENCY;
    }

    let entropy_ratio = if config.entropy_reference > 0.0 {
        (state.entropy / config.entropy_reference).min(1.0)
    } else {
        1.0
    };
    if entropy_ratio > HIGH_ENTROPY_RATIO && effect.entropy_change < 0.0 {
        urgency += ENTROPY_URGENCY;
    }

    for axis in ResourceAxis::ALL {
        if state.get(axis) < config.low_resource_threshold && effect.resources.get(axis) > 0.0 {
            urgency += SCARCITY_URGENCY;
        }
    }

    urgency.clamp(MIN_URGENCY, MAX_URGENCY)
}

/// `0.7 + 0.3 * preference`
pub fn preference_factor(preference: f64) -> f64 {
    0.7 + 0.3 * preference.clamp(0.0, 1.0)
}
