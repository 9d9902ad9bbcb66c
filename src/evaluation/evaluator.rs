//! Decision scoring
//!
//! `score = base_utility * personality_weight * risk_adjustment * temporal_adjustment`
//!
//! The base utility blends three views of a decision:
//! 1. Economic: net weighted resource gain after cost
//! 2. Strategic: stability, entropy reduction and category bonuses
//! 3. Developmental: long-term yield, tech unlocks and victory progress
//!
//! Player preference and situational urgency are applied on top by the engine,
//! never here.

use crate::core::types::ResourceVector;
use crate::decision::Decision;
use crate::personality::PersonalityProfile;
use crate::state::resources::ResourceState;
use serde::{Deserialize, Serialize};

/// Weight of each axis when valuing immediate resource flows
const ECONOMIC_VALUE: ResourceVector = ResourceVector {
    ore: 1.0,
    energy: 0.8,
    biomass: 0.6,
    data: 1.2,
};

/// Long-term yield ignores biomass
const DEVELOPMENTAL_VALUE: ResourceVector = ResourceVector {
    ore: 1.0,
    energy: 0.8,
    biomass: 0.0,
    data: 1.2,
};

const ECONOMIC_WEIGHT: f64 = 0.3;
const STRATEGIC_WEIGHT: f64 = 0.4;
const DEVELOPMENTAL_WEIGHT: f64 = 0.3;

/// Offset and span mapping net gain onto `[0, 1]` before doubling
const NET_GAIN_OFFSET: f64 = 500.0;
const NET_GAIN_SPAN: f64 = 1000.0;

const EXPANSION_BONUS: f64 = 0.3;
const DEFENSE_BONUS: f64 = 0.5;

/// Execution times at or beyond this many ticks earn no speed bonus
const FAST_EXECUTION_TICKS: f64 = 100.0;
const IMBALANCE_BONUS: f64 = 0.4;

/// Every factor that went into a score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub economic: f64,
    pub strategic: f64,
    pub developmental: f64,
    pub base_utility: f64,
    pub personality_weight: f64,
    pub risk_adjustment: f64,
    pub temporal_adjustment: f64,
    pub total: f64,
}

/// Stateless scorer parameterised by the entropy reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionEvaluator {
    /// Entropy mapped to a ratio of 1.0
    pub entropy_reference: f64,
}

impl Default for DecisionEvaluator {
    fn default() -> Self {
        Self {
            entropy_reference: 10_000.0,
        }
    }
}

impl DecisionEvaluator {
    pub fn new(entropy_reference: f64) -> Self {
        Self { entropy_reference }
    }

    pub fn evaluate(&self, decision: &Decision, state: &ResourceState, personality: &PersonalityProfile) -> f64 {
        self.breakdown(decision, state, personality).total
    }

    pub fn breakdown(
        &self,
        decision: &Decision,
        state: &ResourceState,
        personality: &PersonalityProfile,
    ) -> ScoreBreakdown {
        let economic = economic_utility(decision);
        let strategic = strategic_utility(decision, state);
        let developmental = developmental_utility(decision);
        let base_utility = (ECONOMIC_WEIGHT * economic
            + STRATEGIC_WEIGHT * strategic
            + DEVELOPMENTAL_WEIGHT * developmental)
            .max(0.0);

        let personality_weight = personality.decision_weight(decision);
        let risk_adjustment = self.risk_adjustment(decision, state);
        let temporal_adjustment = temporal_adjustment(decision, state);

        let total = base_utility * personality_weight * risk_adjustment * temporal_adjustment;

        ScoreBreakdown {
            economic,
            strategic,
            developmental,
            base_utility,
            personality_weight,
            risk_adjustment,
            temporal_adjustment,
            total: if total.is_finite() { total } else { 0.0 },
        }
    }

    /// Current entropy as a fraction of the reference, capped at 1.0
    pub fn entropy_ratio(&self, state: &ResourceState) -> f64 {
        if self.entropy_reference <= 0.0 {
            return 1.0;
        }
        (state.entropy / self.entropy_reference).clamp(0.0, 1.0)
    }

    /// `clamp(1.2 - mean(exposure, positional, entropy), 0.5, 1.5)`
    pub fn risk_adjustment(&self, decision: &Decision, state: &ResourceState) -> f64 {
        let available = state.resources().total();
        let exposure = if available > 0.0 {
            decision.cost.total() / available
        } else {
            1.0
        };

        let positional = decision.risk_level;

        let entropy_delta = decision.immediate.entropy_change;
        let entropy = if entropy_delta > 0.0 {
            self.entropy_ratio(state) + entropy_delta / 1000.0
        } else {
            0.2
        };

        let mean = (exposure + positional + entropy) / 3.0;
        (1.2 - mean).clamp(0.5, 1.5)
    }
}

/// Weighted value of a resource vector
fn weighted_value(resources: &ResourceVector, weights: &ResourceVector) -> f64 {
    resources.ore * weights.ore
        + resources.energy * weights.energy
        + resources.biomass * weights.biomass
        + resources.data * weights.data
}

/// Net immediate gain minus cost, mapped onto `[0, 2]`
pub fn economic_utility(decision: &Decision) -> f64 {
    let gain = weighted_value(&decision.immediate.resources, &ECONOMIC_VALUE);
    let cost = weighted_value(&decision.cost, &ECONOMIC_VALUE);
    let net = gain - cost;
    ((net + NET_GAIN_OFFSET) / NET_GAIN_SPAN).clamp(0.0, 1.0) * 2.0
}

pub fn strategic_utility(decision: &Decision, state: &ResourceState) -> f64 {
    let effect = &decision.immediate;
    let mut utility = 0.5;

    utility += 0.5 * effect.stability_change;

    if effect.entropy_change < 0.0 {
        utility += 0.3 * effect.entropy_change.abs();
    }

    if decision.kind.is_expansion() {
        utility += EXPANSION_BONUS;
    }

    if decision.kind.is_defense() && state.stability < 1.0 {
        utility += DEFENSE_BONUS * (1.0 - state.stability);
    }

    utility
}

pub fn developmental_utility(decision: &Decision) -> f64 {
    let mut utility = 0.5;

    if let Some(long_term) = &decision.long_term {
        utility += weighted_value(&long_term.resources, &DEVELOPMENTAL_VALUE) / 1000.0;
    }

    let total = decision.total_effect();
    utility += 0.3 * total.tech_unlocks as f64;
    utility += 0.2 * total.victory.sum();

    utility
}

/// Priority, speed and imbalance bonus, clamped to `[0.8, 1.5]`
pub fn temporal_adjustment(decision: &Decision, state: &ResourceState) -> f64 {
    let mut adjustment = 1.0;

    adjustment += 0.3 * decision.priority;

    if let Some(ticks) = decision.execution_time {
        let falloff = (1.0 - ticks as f64 / FAST_EXECUTION_TICKS).max(0.0);
        adjustment += 0.2 * falloff;
    }

    if addresses_imbalance(decision, state) {
        adjustment += IMBALANCE_BONUS;
    }

    adjustment.clamp(0.8, 1.5)
}

/// Immediate effect pushes the most imbalanced axis toward the mean
///
/// Sign only: a token change counts the same as a large one.
pub fn addresses_imbalance(decision: &Decision, state: &ResourceState) -> bool {
    match state.imbalance() {
        Some(imbalance) => {
            let delta = decision.immediate.resources.get(imbalance.axis);
            imbalance.is_improved_by(delta)
        }
        None => false,
    }
}
