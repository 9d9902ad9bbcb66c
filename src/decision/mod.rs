//! Candidate decisions
//!
//! A [`Decision`] is created fresh every cycle by a layer processor, scored by
//! the evaluator, possibly selected by arbitration, and only becomes a
//! [`DecisionImpact`] once executed.
//!
//! The `cost` is the affordability gate and the amount arbitration reserves;
//! the immediate effect carries the realized change, spend included.

pub mod effect;
pub mod id;
pub mod impact;
pub mod kind;
pub mod requirement;

pub use effect::{BonusKind, DecisionEffect, EffectBonus};
pub use id::DecisionIdGenerator;
pub use impact::{DecisionImpact, ExecutionPath};
pub use kind::{DecisionLayer, DecisionType, StrategicPriority};
pub use requirement::Requirement;

use crate::core::types::{DecisionId, ResourceVector};
use crate::layers::context::GameContext;
use crate::state::resources::ResourceState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub kind: DecisionType,
    pub cost: ResourceVector,
    pub immediate: DecisionEffect,
    pub long_term: Option<DecisionEffect>,
    pub requirements: Vec<Requirement>,

    // Scoring, filled in by the engine
    pub utility_score: f64,
    /// Learned player preference for this type, in `[0, 1]`
    pub player_preference: f64,
    /// Declared risk, in `[0, 1]`
    pub risk_level: f64,
    /// Declared priority, in `[0, 1]`
    pub priority: f64,

    // Timing
    /// Ticks until the decision takes effect
    pub execution_time: Option<u32>,
    /// Seconds before the same type may be proposed again after execution
    pub cooldown: Option<f64>,
    /// Ticks the effect lasts
    pub duration: Option<u32>,
}

impl Decision {
    pub fn new(id: DecisionId, kind: DecisionType, cost: ResourceVector, immediate: DecisionEffect) -> Self {
        Self {
            id,
            kind,
            cost,
            immediate,
            long_term: None,
            requirements: Vec::new(),
            utility_score: 0.0,
            player_preference: 0.5,
            risk_level: 0.0,
            priority: 0.0,
            execution_time: None,
            cooldown: None,
            duration: None,
        }
    }

    pub fn with_long_term(mut self, effect: DecisionEffect) -> Self {
        self.long_term = Some(effect);
        self
    }

    pub fn with_risk(mut self, risk: f64) -> Self {
        self.risk_level = risk.clamp(0.0, 1.0);
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority.clamp(0.0, 1.0);
        self
    }

    pub fn with_execution_time(mut self, ticks: u32) -> Self {
        self.execution_time = Some(ticks);
        self
    }

    pub fn with_cooldown(mut self, seconds: f64) -> Self {
        self.cooldown = Some(seconds);
        self
    }

    pub fn with_duration(mut self, ticks: u32) -> Self {
        self.duration = Some(ticks);
        self
    }

    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    pub fn layer(&self) -> DecisionLayer {
        self.kind.layer()
    }

    /// Cost fits within the current stock
    pub fn is_affordable(&self, state: &ResourceState) -> bool {
        self.cost.fits_within(&state.resources())
    }

    pub fn requirements_met(&self, state: &ResourceState, context: &GameContext) -> bool {
        self.requirements.iter().all(|r| r.is_met(state, context))
    }

    /// Affordable and every requirement satisfied
    pub fn is_executable(&self, state: &ResourceState, context: &GameContext) -> bool {
        self.is_affordable(state) && self.requirements_met(state, context)
    }

    /// Immediate effect plus the long-term effect, if any
    pub fn total_effect(&self) -> DecisionEffect {
        match &self.long_term {
            Some(long_term) => self.immediate.combined(long_term),
            None => self.immediate.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Decision {
        Decision::new(
            DecisionId(1),
            DecisionType::StrategicIndustrialVictory,
            ResourceVector::new(300.0, 150.0, 0.0, 0.0),
            DecisionEffect::new().with_resources(-300.0, -150.0, 0.0, 0.0),
        )
        .with_requirement(Requirement::building("refinery", 1))
        .with_risk(1.5)
    }

    #[test]
    fn test_builder_clamps_scalars() {
        let decision = sample();
        assert_eq!(decision.risk_level, 1.0);
        assert_eq!(decision.layer(), DecisionLayer::Strategic);
    }

    #[test]
    fn test_executable_requires_cost_and_requirements() {
        let decision = sample();
        let rich = ResourceState::from_resources(ResourceVector::new(500.0, 500.0, 0.0, 0.0));
        let poor = ResourceState::default();
        let mut context = GameContext::default();

        assert!(!decision.is_executable(&rich, &context));
        context.buildings.insert("refinery".into(), 1);
        assert!(decision.is_executable(&rich, &context));
        assert!(!decision.is_executable(&poor, &context));
    }

    #[test]
    fn test_total_effect_without_long_term_is_immediate() {
        let decision = sample();
        assert_eq!(decision.total_effect(), decision.immediate);
    }
}
